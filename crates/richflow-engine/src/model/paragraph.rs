use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::model::Run;
use crate::style::{self, Style};

/// Block node owning an ordered sequence of runs.
///
/// A paragraph occupies `len() + 1` global offsets: its characters followed by
/// one implicit terminator position that is never rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    runs: Vec<Run>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<Style>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_runs(runs: impl IntoIterator<Item = Run>) -> Self {
        Self {
            runs: runs.into_iter().collect(),
            style: None,
        }
    }

    /// Paragraph holding a single unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        Self::from_runs([Run::plain(text)])
    }

    pub fn with_style(mut self, style: Option<Style>) -> Self {
        self.style = style;
        self
    }

    pub fn add_child(&mut self, run: Run) {
        self.runs.push(run);
    }

    pub fn num_children(&self) -> usize {
        self.runs.len()
    }

    pub fn child_at(&self, index: usize) -> Option<&Run> {
        self.runs.get(index)
    }

    pub fn child_at_mut(&mut self, index: usize) -> Option<&mut Run> {
        self.runs.get_mut(index)
    }

    pub fn children(&self) -> &[Run] {
        &self.runs
    }

    /// Concatenated run text
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    /// Character count, terminator excluded
    pub fn len(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(Run::is_empty)
    }

    /// The paragraph's own style; `None` when it was never styled
    pub fn compose_style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    pub fn set_style(&mut self, style: Option<Style>) {
        self.style = style;
    }

    pub(crate) fn apply_style(&mut self, style: &Style) {
        self.style = style::merge(self.style.as_ref(), Some(style));
    }

    pub(crate) fn take_runs(&mut self) -> Vec<Run> {
        std::mem::take(&mut self.runs)
    }

    pub(crate) fn set_runs(&mut self, runs: Vec<Run>) {
        self.runs = runs;
    }

    pub(crate) fn into_runs(self) -> Vec<Run> {
        self.runs
    }

    /// Append runs donated by a merged paragraph, each keeping its own style
    pub(crate) fn append_runs(&mut self, runs: Vec<Run>) {
        self.runs.extend(runs);
    }

    /// Remove the paragraph-local character range `window`.
    ///
    /// Runs fully inside the window disappear, partially covered runs keep the
    /// surviving prefix and/or suffix with their style unchanged.
    pub(crate) fn remove_text(&mut self, window: Range<usize>) {
        let mut run_start = 0;
        for run in &mut self.runs {
            let run_len = run.len();
            let from = window.start.max(run_start);
            let to = window.end.min(run_start + run_len);
            if from < to {
                log::trace!(
                    "truncating run {:?} by {}..{}",
                    run.text(),
                    from - run_start,
                    to - run_start
                );
                run.remove_chars(from - run_start..to - run_start);
            }
            run_start += run_len;
        }
        self.drop_empty_runs();
    }

    /// Remove runs left without text, including a placeholder run
    pub(crate) fn drop_empty_runs(&mut self) {
        self.runs.retain(|run| !run.is_empty());
    }

    /// Join neighbouring runs whose styles are equal (both unstyled included)
    pub(crate) fn coalesce_runs(&mut self) {
        let runs = std::mem::take(&mut self.runs);
        for run in runs {
            match self.runs.last_mut() {
                Some(previous) if previous.compose_style() == run.compose_style() => {
                    previous.push_text(run.text());
                }
                _ => self.runs.push(run),
            }
        }
    }
}
