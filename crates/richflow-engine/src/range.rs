use serde::{Deserialize, Serialize};

/// Selection over global offsets as an (anchor, active) pair.
///
/// `active` may sit before `anchor` when the caret moved backward; every
/// consumer works on the normalized half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub anchor: usize,
    pub active: usize,
}

impl TextRange {
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Range from bounds that are already ordered
    pub fn create(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "create expects ordered bounds");
        Self::new(start, end)
    }

    /// Zero-length range at `offset`
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.active)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.active)
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    pub fn is_caret(&self) -> bool {
        self.anchor == self.active
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    pub fn is_backward(&self) -> bool {
        self.active < self.anchor
    }

    /// Half-open containment
    pub fn contains(&self, offset: usize) -> bool {
        self.start() <= offset && offset < self.end()
    }

    pub fn normalized(&self) -> std::ops::Range<usize> {
        self.start()..self.end()
    }
}

impl From<std::ops::Range<usize>> for TextRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
