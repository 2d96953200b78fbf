/*!
 * # Editing Core
 *
 * Structural edits over the [`Flow`](crate::model::Flow) tree.
 *
 * ## Control flow
 *
 * 1. The caller builds a [`TextRange`](crate::range::TextRange) (anchor/active,
 *    possibly reversed) against a flow.
 * 2. An operation is constructed from the range, a `&mut Flow` and its payload.
 * 3. `perform()` validates the range bounds first, asks the
 *    [`resolver`] which paragraphs and runs are affected, then mutates the tree
 *    in place.
 *
 * Validation happens before mutation, so an `Err` never leaves a half-edited
 * tree behind. The exclusive borrow held by an operation is what serializes
 * writers; there is no locking.
 *
 * ## Module Structure
 *
 * - **`resolver`**: global offset ↔ (paragraph, run, offset) translation
 * - **`apply_style`**: [`ApplyStyleOperation`], run splitting and style stamping
 * - **`delete`**: [`DeleteOperation`], truncation and paragraph merging
 * - **`commands`**: serializable [`Cmd`] enum and `Flow::apply`
 */

pub mod apply_style;
pub mod commands;
pub mod delete;
pub mod resolver;

pub use apply_style::ApplyStyleOperation;
pub use commands::Cmd;
pub use delete::DeleteOperation;
pub use resolver::{ParagraphExtent, RunPosition, TreePosition};

use crate::error::EditError;

/// A one-shot structural edit.
///
/// Consumes the operation: once performed, the borrow on the flow is released.
pub trait Operation {
    fn perform(self) -> Result<(), EditError>;
}
