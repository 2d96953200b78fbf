use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single style property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(text) => f.write_str(text),
            StyleValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

/// Error returned when building a [`Style`] from a map without properties
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a style must carry at least one property")]
pub struct EmptyStyleError;

/// Property bag attached to a paragraph or a run.
///
/// A `Style` always holds at least one property. "No formatting" is spelled
/// `Option<Style>::None` everywhere in the crate, so an empty map never exists
/// and `compose_style()` can tell "never styled" apart from anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, StyleValue>",
    into = "BTreeMap<String, StyleValue>"
)]
pub struct Style {
    properties: BTreeMap<String, StyleValue>,
}

impl Style {
    /// Style with exactly one property
    pub fn single(name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        let mut properties = BTreeMap::new();
        properties.insert(name.into(), value.into());
        Self { properties }
    }

    /// Build a style from `(name, value)` pairs.
    ///
    /// Returns `None` when the iterator yields no properties.
    pub fn from_properties<I, K, V>(properties: I) -> Option<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StyleValue>,
    {
        let properties: BTreeMap<String, StyleValue> = properties
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        if properties.is_empty() {
            None
        } else {
            Some(Self { properties })
        }
    }

    /// Copy of this style with one more property set
    pub fn with(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.properties.get(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn properties(&self) -> &BTreeMap<String, StyleValue> {
        &self.properties
    }

    /// Shallow merge: properties of `overrides` replace same-named ones in `self`
    pub fn merged_with(&self, overrides: &Style) -> Style {
        let mut properties = self.properties.clone();
        for (name, value) in &overrides.properties {
            properties.insert(name.clone(), value.clone());
        }
        Style { properties }
    }
}

/// Compose two optional styles.
///
/// Properties present in `overrides` win; everything else passes through from
/// either side. The result is `None` only when both inputs are `None`.
pub fn merge(base: Option<&Style>, overrides: Option<&Style>) -> Option<Style> {
    match (base, overrides) {
        (Some(base), Some(overrides)) => Some(base.merged_with(overrides)),
        (Some(style), None) | (None, Some(style)) => Some(style.clone()),
        (None, None) => None,
    }
}

impl TryFrom<BTreeMap<String, StyleValue>> for Style {
    type Error = EmptyStyleError;

    fn try_from(properties: BTreeMap<String, StyleValue>) -> Result<Self, Self::Error> {
        if properties.is_empty() {
            return Err(EmptyStyleError);
        }
        Ok(Self { properties })
    }
}

impl From<Style> for BTreeMap<String, StyleValue> {
    fn from(style: Style) -> Self {
        style.properties
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}
