use serde::{Deserialize, Serialize};

use crate::editing::resolver;
use crate::error::EditError;
use crate::model::Paragraph;
use crate::range::TextRange;

/// Root of the document tree: an ordered sequence of paragraphs.
///
/// Global offsets are assigned by walking the paragraphs in order, each one
/// consuming `paragraph.len() + 1` positions. An empty document is one
/// paragraph holding one empty run, never a flow without paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    paragraphs: Vec<Paragraph>,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_paragraphs(paragraphs: impl IntoIterator<Item = Paragraph>) -> Self {
        Self {
            paragraphs: paragraphs.into_iter().collect(),
        }
    }

    pub fn add_child(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    pub fn num_children(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn child_at(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs.get(index)
    }

    pub fn child_at_mut(&mut self, index: usize) -> Option<&mut Paragraph> {
        self.paragraphs.get_mut(index)
    }

    pub fn children(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Size of the global offset space, one terminator per paragraph included
    pub fn len(&self) -> usize {
        self.paragraphs.iter().map(|p| p.len() + 1).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(Paragraph::is_empty)
    }

    /// Number of visible characters, terminators excluded
    pub fn text_len(&self) -> usize {
        self.paragraphs.iter().map(Paragraph::len).sum()
    }

    /// Concatenated text of all paragraphs with nothing emitted for terminators
    pub fn text(&self) -> String {
        self.paragraphs.iter().map(|p| p.text()).collect()
    }

    /// Text of the offset window `[start, end)` with `separator` emitted at
    /// every terminator position inside the window.
    ///
    /// `end` of `None` means the end of the document, so
    /// `text_between(0, None, "¶")` renders every paragraph followed by `¶`.
    pub fn text_between(
        &self,
        start: usize,
        end: Option<usize>,
        separator: &str,
    ) -> Result<String, EditError> {
        let range = TextRange::new(start, end.unwrap_or_else(|| self.len()));
        resolver::check_range(self, &range)?;

        let mut out = String::new();
        for extent in resolver::paragraph_extents(self) {
            if extent.end() <= range.start() {
                continue;
            }
            if extent.start >= range.end() {
                break;
            }
            let window = extent.local_window(&range);
            if !window.is_empty() {
                let paragraph = self.paragraph(extent.index)?;
                let text = paragraph.text();
                out.extend(text.chars().skip(window.start).take(window.len()));
            }
            if range.contains(extent.terminator()) {
                out.push_str(separator);
            }
        }
        Ok(out)
    }

    pub(crate) fn paragraph(&self, index: usize) -> Result<&Paragraph, EditError> {
        let count = self.paragraphs.len();
        self.paragraphs
            .get(index)
            .ok_or(EditError::InvalidParagraph { index, count })
    }

    pub(crate) fn paragraph_mut(&mut self, index: usize) -> Result<&mut Paragraph, EditError> {
        let count = self.paragraphs.len();
        self.paragraphs
            .get_mut(index)
            .ok_or(EditError::InvalidParagraph { index, count })
    }

    pub(crate) fn remove_paragraph(&mut self, index: usize) -> Result<Paragraph, EditError> {
        let count = self.paragraphs.len();
        if index >= count {
            return Err(EditError::InvalidParagraph { index, count });
        }
        Ok(self.paragraphs.remove(index))
    }
}
