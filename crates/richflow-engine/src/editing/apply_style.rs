use std::ops::Range;

use log::{debug, trace};

use crate::editing::{Operation, resolver};
use crate::error::EditError;
use crate::model::{Flow, Paragraph, Run};
use crate::range::TextRange;
use crate::style::{self, Style};

/// Stamp a run-level and/or paragraph-level style over a range.
///
/// Either payload may be `None` meaning "not requested". Runs straddling the
/// range boundary are split so that only the covered characters receive the
/// leaf style; paragraphs are never split.
#[derive(Debug)]
pub struct ApplyStyleOperation<'a> {
    range: TextRange,
    flow: &'a mut Flow,
    leaf_style: Option<Style>,
    paragraph_style: Option<Style>,
}

impl<'a> ApplyStyleOperation<'a> {
    pub fn new(
        range: TextRange,
        flow: &'a mut Flow,
        leaf_style: Option<Style>,
        paragraph_style: Option<Style>,
    ) -> Self {
        Self {
            range,
            flow,
            leaf_style,
            paragraph_style,
        }
    }

    /// Run-level style only
    pub fn leaf(range: TextRange, flow: &'a mut Flow, style: Style) -> Self {
        Self::new(range, flow, Some(style), None)
    }

    /// Paragraph-level style only
    pub fn paragraph(range: TextRange, flow: &'a mut Flow, style: Style) -> Self {
        Self::new(range, flow, None, Some(style))
    }
}

impl Operation for ApplyStyleOperation<'_> {
    fn perform(self) -> Result<(), EditError> {
        let Self {
            range,
            flow,
            leaf_style,
            paragraph_style,
        } = self;

        resolver::check_range(flow, &range)?;
        let targets = resolver::intersect_paragraphs(flow, &range)?;
        debug!(
            "apply style {:?} over paragraphs {:?}",
            range.normalized(),
            targets
        );

        if let Some(leaf_style) = &leaf_style {
            let extents: Vec<_> = resolver::paragraph_extents(flow)
                .skip(targets.start)
                .take(targets.len())
                .collect();
            for extent in extents {
                let window = extent.local_window(&range);
                if window.is_empty() {
                    continue;
                }
                style_runs(flow.paragraph_mut(extent.index)?, window, leaf_style);
            }
        }

        if let Some(paragraph_style) = &paragraph_style {
            for index in targets {
                flow.paragraph_mut(index)?.apply_style(paragraph_style);
            }
        }

        Ok(())
    }
}

/// Covered characters collected from consecutive runs that carried the same
/// style before this operation; they come out as a single run.
struct Covered {
    original: Option<Style>,
    text: String,
}

/// Apply `style` to the paragraph-local character window `window`.
///
/// Runs outside the window are moved over untouched. A run fully inside gets
/// the merged style without being split. A run crossing a window edge is cut
/// there: the outside part keeps the run's own style verbatim.
fn style_runs(paragraph: &mut Paragraph, window: Range<usize>, style: &Style) {
    let runs = paragraph.take_runs();
    let mut out = Vec::with_capacity(runs.len() + 2);
    let mut covered: Option<Covered> = None;
    let mut run_start = 0;

    for run in runs {
        let run_len = run.len();
        let from = window.start.max(run_start);
        let to = window.end.min(run_start + run_len);

        if from >= to {
            flush(&mut covered, &mut out, style);
            out.push(run);
            run_start += run_len;
            continue;
        }

        let (from, to) = (from - run_start, to - run_start);
        if from > 0 {
            trace!("split {:?} before {}", run.text(), from);
            flush(&mut covered, &mut out, style);
            out.push(Run::new(run.slice(0..from), run.compose_style().cloned()));
        }

        let inside = run.slice(from..to);
        let continues = covered
            .as_ref()
            .is_some_and(|pending| pending.original.as_ref() == run.compose_style());
        if continues && let Some(pending) = covered.as_mut() {
            pending.text.push_str(inside);
        } else {
            flush(&mut covered, &mut out, style);
            covered = Some(Covered {
                original: run.compose_style().cloned(),
                text: inside.to_string(),
            });
        }

        if to < run_len {
            trace!("split {:?} after {}", run.text(), to);
            flush(&mut covered, &mut out, style);
            out.push(Run::new(run.slice(to..run_len), run.compose_style().cloned()));
        }

        run_start += run_len;
    }

    flush(&mut covered, &mut out, style);
    paragraph.set_runs(out);
}

fn flush(covered: &mut Option<Covered>, out: &mut Vec<Run>, style: &Style) {
    if let Some(Covered { original, text }) = covered.take() {
        out.push(Run::new(text, style::merge(original.as_ref(), Some(style))));
    }
}
