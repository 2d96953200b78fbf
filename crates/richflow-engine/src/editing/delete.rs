use log::{debug, trace, warn};

use crate::editing::{Operation, resolver};
use crate::error::EditError;
use crate::model::Flow;
use crate::range::TextRange;

/// Remove the global offsets `[start, end)` from a flow.
///
/// Characters are removed from the runs holding them. Every terminator inside
/// the range merges the following paragraph into the one it ends. A caret is a
/// no-op.
#[derive(Debug)]
pub struct DeleteOperation<'a> {
    range: TextRange,
    flow: &'a mut Flow,
}

impl<'a> DeleteOperation<'a> {
    pub fn new(range: TextRange, flow: &'a mut Flow) -> Self {
        Self { range, flow }
    }
}

impl Operation for DeleteOperation<'_> {
    fn perform(self) -> Result<(), EditError> {
        let Self { range, flow } = self;

        resolver::check_range(flow, &range)?;
        if range.is_caret() {
            debug!("delete at caret {} is a no-op", range.start());
            return Ok(());
        }

        // Plan against the untouched tree, then mutate.
        let count = flow.num_children();
        let mut trims = Vec::new();
        let mut merges = Vec::new();
        for extent in resolver::paragraph_extents(flow) {
            if extent.end() <= range.start() {
                continue;
            }
            if extent.start >= range.end() {
                break;
            }
            let window = extent.local_window(&range);
            if !window.is_empty() {
                trims.push((extent.index, window));
            }
            if range.contains(extent.terminator()) && extent.index + 1 < count {
                merges.push(extent.index);
            }
        }
        debug!(
            "delete {:?}: trimming {} paragraph(s), merging {} terminator(s)",
            range.normalized(),
            trims.len(),
            merges.len()
        );

        for (index, window) in trims {
            let paragraph = flow.paragraph_mut(index)?;
            paragraph.remove_text(window);
            paragraph.coalesce_runs();
        }

        // Back to front so a chain of merges folds into the first paragraph.
        for index in merges.into_iter().rev() {
            let donor = flow.remove_paragraph(index + 1)?;
            trace!("merging paragraph {} into {}", index + 1, index);
            let paragraph = flow.paragraph_mut(index)?;
            paragraph.append_runs(donor.into_runs());
            // A donor (or receiver) may be the empty-paragraph placeholder.
            paragraph.drop_empty_runs();
        }

        for (index, paragraph) in flow.children().iter().enumerate() {
            if paragraph.num_children() == 0 {
                warn!("paragraph {index} has no runs left after delete");
            }
        }

        Ok(())
    }
}
