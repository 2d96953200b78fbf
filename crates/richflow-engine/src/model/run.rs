use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::style::{self, Style};

/// Leaf inline node: a piece of text sharing one optional style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<Style>,
}

impl Run {
    pub fn new(text: impl Into<String>, style: Option<Style>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::new(text, Some(style))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters (Unicode scalar values), the unit of every offset
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The run's own style; `None` when it was never styled
    pub fn compose_style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    pub fn set_style(&mut self, style: Option<Style>) {
        self.style = style;
    }

    /// Merge `style` over the run's own style in place
    pub(crate) fn apply_style(&mut self, style: &Style) {
        self.style = style::merge(self.style.as_ref(), Some(style));
    }

    /// Text of the character range `range`
    pub(crate) fn slice(&self, range: Range<usize>) -> &str {
        let start = byte_index(&self.text, range.start);
        let end = byte_index(&self.text, range.end);
        &self.text[start..end]
    }

    /// Drop the character range `range`, joining what survives on both sides
    pub(crate) fn remove_chars(&mut self, range: Range<usize>) {
        let start = byte_index(&self.text, range.start);
        let end = byte_index(&self.text, range.end);
        self.text.replace_range(start..end, "");
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

/// Byte index of the `char_offset`-th character, or the text length past the end
pub(crate) fn byte_index(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(index, _)| index)
}
