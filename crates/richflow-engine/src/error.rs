/// Failures reported by the document model and its operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// An offset outside `[0, len]` of the document or paragraph it addresses
    #[error("offset {offset} is out of range (length {len})")]
    OutOfRange { offset: usize, len: usize },

    #[error("paragraph {index} does not exist ({count} paragraphs)")]
    InvalidParagraph { index: usize, count: usize },

    /// Internal bug class; a correct operation never leaves the tree in this state
    #[error("structural invariant violated: {0}")]
    StructuralInvariant(String),
}
