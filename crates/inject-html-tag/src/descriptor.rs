//! Flat, renderer-ready tag descriptors.

use serde::{Deserialize, Serialize};

use crate::attrs::Attributes;
use crate::config::{ChildElement, ElementChildren};
use crate::inject::InjectTo;

/// A single element for the host to splice into the document.
///
/// Serializes to the `{ tag, attrs, children, injectTo }` shape HTML transform
/// hooks expect, omitting absent fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlTagDescriptor {
    pub tag: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<TagChildren>,

    pub inject_to: InjectTo,
}

impl HtmlTagDescriptor {
    pub fn new(tag: impl Into<String>, inject_to: InjectTo) -> Self {
        Self {
            tag: tag.into(),
            attrs: None,
            children: None,
            inject_to,
        }
    }

    pub fn with_attrs(mut self, attrs: Option<Attributes>) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children = Some(TagChildren::Text(text.into()));
        self
    }

    pub fn with_children(mut self, children: Option<TagChildren>) -> Self {
        self.children = children;
        self
    }

    /// Look up a string attribute.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.as_ref()?.get(key)?.as_str()
    }
}

/// Descriptor content.
///
/// Nested elements are carried as-is; the host renders them recursively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagChildren {
    Text(String),
    Elements(Vec<ChildElement>),
}

impl From<ElementChildren> for TagChildren {
    fn from(value: ElementChildren) -> Self {
        match value {
            ElementChildren::Text(text) => Self::Text(text),
            ElementChildren::Elements(elements) => Self::Elements(elements),
        }
    }
}
