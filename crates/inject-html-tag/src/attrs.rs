//! Attribute values and the two-layer merge used by every stage.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute mapping. Keys are unique and keep insertion order.
pub type Attributes = IndexMap<String, AttrValue>;

/// A single attribute value.
///
/// Hosts treat `Bool(true)` as a bare attribute (`defer`) and drop `Bool(false)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

/// Build an attribute mapping from key/value pairs. Later duplicates win.
pub fn attributes<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Layer `overlay` on top of `base`. Keys present in both take the overlay's value.
pub fn merge(mut base: Attributes, overlay: &Attributes) -> Attributes {
    for (key, value) in overlay {
        base.insert(key.clone(), value.clone());
    }
    base
}

/// Merge an optional overlay, the shape entries carry their own attributes in.
pub(crate) fn merge_opt(base: Attributes, overlay: Option<&Attributes>) -> Attributes {
    match overlay {
        Some(overlay) => merge(base, overlay),
        None => base,
    }
}
