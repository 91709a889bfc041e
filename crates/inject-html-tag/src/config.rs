//! The declarative document description handed to the assembler.
//!
//! Head entries may only name head injection points and body entries only body
//! injection points; the restriction lives in the field types, so a misplaced
//! point is rejected when the configuration is built or deserialized.

use serde::{Deserialize, Serialize};

use crate::attrs::{AttrValue, Attributes};
use crate::inject::{BodyInjectTo, HeadInjectTo};

/// Root of the description: optional head and body sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlObject {
    pub head: Option<Head>,
    pub body: Option<Body>,
}

impl HtmlObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_head(mut self, head: Head) -> Self {
        self.head = Some(head);
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }
}

/// Content destined for `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Head {
    /// Document title, emitted only when non-empty
    pub title: Option<String>,

    /// Overrides the default `utf-8` charset
    pub charset: Option<String>,

    /// Overrides the default viewport content
    pub viewport: Option<String>,

    pub link: Vec<HeadLink>,
    pub meta: Vec<HeadMeta>,
    pub script: Vec<HeadScript>,
    pub style: Vec<HeadStyle>,
}

impl Head {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    pub fn viewport(mut self, viewport: impl Into<String>) -> Self {
        self.viewport = Some(viewport.into());
        self
    }

    pub fn link(mut self, link: HeadLink) -> Self {
        self.link.push(link);
        self
    }

    pub fn meta(mut self, meta: HeadMeta) -> Self {
        self.meta.push(meta);
        self
    }

    pub fn script(mut self, script: HeadScript) -> Self {
        self.script.push(script);
        self
    }

    pub fn style(mut self, style: HeadStyle) -> Self {
        self.style.push(style);
        self
    }
}

/// A `<link>` entry. Dropped when `href` is missing or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadLink {
    pub href: Option<String>,
    pub attrs: Option<Attributes>,
    pub inject_to: Option<HeadInjectTo>,
}

impl HeadLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        insert_attr(&mut self.attrs, key, value);
        self
    }

    pub fn inject_to(mut self, point: HeadInjectTo) -> Self {
        self.inject_to = Some(point);
        self
    }
}

/// A `<meta>` entry. Dropped when `content` is missing or empty, and when it
/// declares a viewport (that tag comes from [`Head::viewport`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadMeta {
    pub name: Option<String>,

    /// Open Graph style `property` attribute
    pub property: Option<String>,

    pub content: Option<String>,
    pub attrs: Option<Attributes>,
    pub inject_to: Option<HeadInjectTo>,
}

impl HeadMeta {
    /// `<meta name=".." content="..">`
    pub fn named(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// `<meta property=".." content="..">`
    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        insert_attr(&mut self.attrs, key, value);
        self
    }

    pub fn inject_to(mut self, point: HeadInjectTo) -> Self {
        self.inject_to = Some(point);
        self
    }

    /// Whether this entry describes a viewport declaration, by its own `name`
    /// or by a `name` attribute.
    pub fn is_viewport(&self) -> bool {
        self.name.as_deref() == Some("viewport")
            || self
                .attrs
                .as_ref()
                .and_then(|attrs| attrs.get("name"))
                .and_then(AttrValue::as_str)
                == Some("viewport")
    }
}

/// An inline `<style>` entry. Dropped when the CSS text is missing or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadStyle {
    pub children: Option<String>,
    pub attrs: Option<Attributes>,
    pub inject_to: Option<HeadInjectTo>,
}

impl HeadStyle {
    pub fn new(css: impl Into<String>) -> Self {
        Self {
            children: Some(css.into()),
            ..Self::default()
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        insert_attr(&mut self.attrs, key, value);
        self
    }

    pub fn inject_to(mut self, point: HeadInjectTo) -> Self {
        self.inject_to = Some(point);
        self
    }
}

/// A `<script>` entry, external (`src`) or inline (`children`).
///
/// `P` is the family of injection points the entry may name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Script<P> {
    pub src: Option<String>,
    pub children: Option<String>,
    pub attrs: Option<Attributes>,
    pub inject_to: Option<P>,
}

/// Script declared under `head`; may only move within the head family.
pub type HeadScript = Script<HeadInjectTo>;

/// Script declared under `body`.
pub type BodyScript = Script<BodyInjectTo>;

impl<P> Default for Script<P> {
    fn default() -> Self {
        Self {
            src: None,
            children: None,
            attrs: None,
            inject_to: None,
        }
    }
}

impl<P> Script<P> {
    pub fn src(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Self::default()
        }
    }

    pub fn inline(code: impl Into<String>) -> Self {
        Self {
            children: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        insert_attr(&mut self.attrs, key, value);
        self
    }

    pub fn inject_to(mut self, point: P) -> Self {
        self.inject_to = Some(point);
        self
    }
}

/// Content destined for `<body>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
    /// Generic elements, e.g. the app's mount point
    pub default: Vec<BodyElement>,
    pub script: Vec<BodyScript>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(mut self, element: BodyElement) -> Self {
        self.default.push(element);
        self
    }

    pub fn script(mut self, script: BodyScript) -> Self {
        self.script.push(script);
        self
    }
}

/// A top-level body element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyElement {
    pub tag: String,
    #[serde(default)]
    pub attrs: Option<Attributes>,
    #[serde(default)]
    pub children: Option<ElementChildren>,
    #[serde(default)]
    pub inject_to: Option<BodyInjectTo>,
}

impl BodyElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: None,
            children: None,
            inject_to: None,
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        insert_attr(&mut self.attrs, key, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children = Some(ElementChildren::Text(text.into()));
        self
    }

    pub fn child(mut self, child: ChildElement) -> Self {
        push_child(&mut self.children, child);
        self
    }

    pub fn inject_to(mut self, point: BodyInjectTo) -> Self {
        self.inject_to = Some(point);
        self
    }
}

/// A nested element. Same shape as [`BodyElement`] without an injection point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChildElement {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<ElementChildren>,
}

impl ChildElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: None,
            children: None,
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        insert_attr(&mut self.attrs, key, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children = Some(ElementChildren::Text(text.into()));
        self
    }

    pub fn child(mut self, child: ChildElement) -> Self {
        push_child(&mut self.children, child);
        self
    }
}

/// Element content: literal text or nested elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementChildren {
    Text(String),
    Elements(Vec<ChildElement>),
}

fn insert_attr(attrs: &mut Option<Attributes>, key: impl Into<String>, value: impl Into<AttrValue>) {
    attrs
        .get_or_insert_with(Attributes::new)
        .insert(key.into(), value.into());
}

// Text content is replaced once elements are added.
fn push_child(children: &mut Option<ElementChildren>, child: ChildElement) {
    match children {
        Some(ElementChildren::Elements(list)) => list.push(child),
        _ => *children = Some(ElementChildren::Elements(vec![child])),
    }
}
