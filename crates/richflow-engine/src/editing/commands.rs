use serde::{Deserialize, Serialize};

use crate::editing::{ApplyStyleOperation, DeleteOperation, Operation};
use crate::error::EditError;
use crate::model::Flow;
use crate::range::TextRange;
use crate::style::Style;

/// Edits that can be applied to a flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cmd {
    ApplyStyle {
        range: TextRange,
        #[serde(default)]
        leaf: Option<Style>,
        #[serde(default)]
        paragraph: Option<Style>,
    },
    Delete {
        range: TextRange,
    },
}

impl Cmd {
    pub fn range(&self) -> TextRange {
        match self {
            Cmd::ApplyStyle { range, .. } | Cmd::Delete { range } => *range,
        }
    }
}

impl Flow {
    /// Run `cmd` against this flow.
    ///
    /// Bounds are checked before anything is touched, so an `Err` always means
    /// the flow is unchanged.
    pub fn apply(&mut self, cmd: Cmd) -> Result<(), EditError> {
        match cmd {
            Cmd::ApplyStyle {
                range,
                leaf,
                paragraph,
            } => ApplyStyleOperation::new(range, self, leaf, paragraph).perform(),
            Cmd::Delete { range } => DeleteOperation::new(range, self).perform(),
        }
    }

    /// Apply a sequence of commands, stopping at the first failure
    pub fn apply_all(&mut self, cmds: impl IntoIterator<Item = Cmd>) -> Result<(), EditError> {
        for cmd in cmds {
            self.apply(cmd)?;
        }
        Ok(())
    }
}
