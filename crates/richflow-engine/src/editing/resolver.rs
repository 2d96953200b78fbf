//! Translation between global offsets and tree positions.
//!
//! Every function here is a read-only scan over the current tree. Nothing is
//! cached: operations mutate the tree between calls, so positions are always
//! recomputed from cumulative lengths.

use std::ops::Range;

use crate::error::EditError;
use crate::model::{Flow, Paragraph};
use crate::range::TextRange;

/// Where a paragraph sits in the global offset space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphExtent {
    pub index: usize,
    /// Global offset of the first character
    pub start: usize,
    /// Character count, terminator excluded
    pub len: usize,
}

impl ParagraphExtent {
    /// Global offset of the paragraph terminator
    pub fn terminator(&self) -> usize {
        self.start + self.len
    }

    /// First offset after the terminator
    pub fn end(&self) -> usize {
        self.start + self.len + 1
    }

    /// Half-open containment over text and terminator
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end()
    }

    /// `range` translated into paragraph-local offsets and clamped to `[0, len]`
    pub fn local_window(&self, range: &TextRange) -> Range<usize> {
        let start = range.start().saturating_sub(self.start).min(self.len);
        let end = range.end().saturating_sub(self.start).min(self.len);
        start..end.max(start)
    }
}

/// A run inside a paragraph and a character offset inside that run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPosition {
    pub run: usize,
    pub offset: usize,
}

/// Fully resolved position of a global offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreePosition {
    pub paragraph: usize,
    pub run: usize,
    pub offset: usize,
}

/// Extents of all paragraphs, in document order
pub fn paragraph_extents(flow: &Flow) -> impl Iterator<Item = ParagraphExtent> + '_ {
    flow.children()
        .iter()
        .enumerate()
        .scan(0usize, |next_start, (index, paragraph)| {
            let extent = ParagraphExtent {
                index,
                start: *next_start,
                len: paragraph.len(),
            };
            *next_start = extent.end();
            Some(extent)
        })
}

/// Fails with `OutOfRange` unless `offset` lies in `[0, flow.len()]`
pub fn check_offset(flow: &Flow, offset: usize) -> Result<(), EditError> {
    let len = flow.len();
    if offset > len {
        return Err(EditError::OutOfRange { offset, len });
    }
    Ok(())
}

/// Validates both bounds of `range` before any mutation happens
pub fn check_range(flow: &Flow, range: &TextRange) -> Result<(), EditError> {
    check_offset(flow, range.end())
}

/// Index of the paragraph containing `offset`.
///
/// A terminator position belongs to its own paragraph. The offset equal to the
/// document length lies past the last terminator and resolves to the last
/// paragraph.
pub fn locate_paragraph(flow: &Flow, offset: usize) -> Result<usize, EditError> {
    check_offset(flow, offset)?;
    if let Some(extent) = paragraph_extents(flow).find(|extent| extent.contains(offset)) {
        return Ok(extent.index);
    }
    flow.num_children()
        .checked_sub(1)
        .ok_or(EditError::InvalidParagraph { index: 0, count: 0 })
}

/// Global offset of the first character of paragraph `index`
pub fn paragraph_start(flow: &Flow, index: usize) -> Result<usize, EditError> {
    paragraph_extents(flow)
        .nth(index)
        .map(|extent| extent.start)
        .ok_or(EditError::InvalidParagraph {
            index,
            count: flow.num_children(),
        })
}

/// Run containing the paragraph-local offset `local`.
///
/// Containment is half-open, so an offset on a run boundary belongs to the
/// following run; the paragraph end resolves to the end of the last run.
pub fn locate_run(paragraph: &Paragraph, local: usize) -> Result<RunPosition, EditError> {
    let len = paragraph.len();
    if local > len {
        return Err(EditError::OutOfRange { offset: local, len });
    }

    let mut run_start = 0;
    for (run, child) in paragraph.children().iter().enumerate() {
        let run_len = child.len();
        if local < run_start + run_len {
            return Ok(RunPosition {
                run,
                offset: local - run_start,
            });
        }
        run_start += run_len;
    }

    Ok(match paragraph.children().last() {
        Some(last) => RunPosition {
            run: paragraph.num_children() - 1,
            offset: last.len(),
        },
        None => RunPosition { run: 0, offset: 0 },
    })
}

/// Resolve a global offset all the way down to a run
pub fn locate(flow: &Flow, offset: usize) -> Result<TreePosition, EditError> {
    let paragraph = locate_paragraph(flow, offset)?;
    let start = paragraph_start(flow, paragraph)?;
    let paragraph_ref = flow.paragraph(paragraph)?;
    let local = (offset - start).min(paragraph_ref.len());
    let position = locate_run(paragraph_ref, local)?;
    Ok(TreePosition {
        paragraph,
        run: position.run,
        offset: position.offset,
    })
}

/// Global offset of the paragraph-local offset `local` in paragraph `index`
pub fn global_offset(flow: &Flow, index: usize, local: usize) -> Result<usize, EditError> {
    let start = paragraph_start(flow, index)?;
    let len = flow.paragraph(index)?.len();
    if local > len {
        return Err(EditError::OutOfRange { offset: local, len });
    }
    Ok(start + local)
}

/// Indices of every paragraph whose extent (text plus terminator) intersects
/// `range`. A caret yields exactly the paragraph that contains it.
pub fn intersect_paragraphs(flow: &Flow, range: &TextRange) -> Result<Range<usize>, EditError> {
    check_range(flow, range)?;
    let first = locate_paragraph(flow, range.start())?;
    if range.is_caret() {
        return Ok(first..first + 1);
    }
    let last = locate_paragraph(flow, range.end() - 1)?;
    Ok(first..last + 1)
}
