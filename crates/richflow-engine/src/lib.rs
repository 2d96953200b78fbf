pub mod editing;
pub mod error;
pub mod model;
pub mod range;
pub mod snapshot;
pub mod style;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{ApplyStyleOperation, Cmd, DeleteOperation, Operation, resolver};
pub use error::EditError;
pub use model::{Flow, Paragraph, Run};
pub use range::TextRange;
pub use style::{Style, StyleValue, merge};
