//! The descriptor assembler.
//!
//! Stages run in a fixed order and only ever append:
//!
//! 1. title
//! 2. charset
//! 3. viewport
//! 4. `head.link`
//! 5. `head.meta`
//! 6. `head.script`
//! 7. `head.style`
//! 8. `body.default`
//! 9. `body.script`
//!
//! Within a stage, input order is preserved. Entries missing a required value
//! are dropped and recorded as an [`Omission`].

use serde::{Deserialize, Serialize};

use crate::attrs::{merge_opt, AttrValue, Attributes};
use crate::config::{
    Body, BodyElement, Head, HeadLink, HeadMeta, HeadStyle, HtmlObject, Script,
};
use crate::descriptor::HtmlTagDescriptor;
use crate::inject::InjectTo;
use crate::report::{AssembleError, Omission, OmissionReason, Section};

/// Charset used when `head.charset` is not set.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Viewport content used when `head.viewport` is not set.
pub const DEFAULT_VIEWPORT: &str = "width=device-width,initial-scale=1";

/// Toggles for a single assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssembleOptions {
    /// Emit `<meta charset>`
    pub charset: bool,

    /// Emit `<meta name="viewport">`
    pub viewport: bool,

    /// Fail instead of silently dropping incomplete entries
    pub strict: bool,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            charset: true,
            viewport: true,
            strict: false,
        }
    }
}

/// Descriptors produced by one assembly, with every entry that was dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly {
    pub descriptors: Vec<HtmlTagDescriptor>,
    pub omissions: Vec<Omission>,
}

impl Assembly {
    /// Whether every input entry produced a descriptor.
    pub fn is_complete(&self) -> bool {
        self.omissions.is_empty()
    }

    /// Descriptors if nothing was omitted, otherwise every omission.
    pub fn into_strict(self) -> Result<Vec<HtmlTagDescriptor>, AssembleError> {
        if self.omissions.is_empty() {
            Ok(self.descriptors)
        } else {
            Err(AssembleError::Omitted {
                omissions: self.omissions,
            })
        }
    }
}

/// Expands an [`HtmlObject`] into ordered descriptors.
///
/// Holds no state between calls; each call builds a fresh list and never
/// touches its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler {
    options: AssembleOptions,
}

impl Assembler {
    pub fn new(options: AssembleOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AssembleOptions {
        &self.options
    }

    /// Run every stage and report what was dropped. Never fails.
    pub fn assemble(&self, object: &HtmlObject) -> Assembly {
        let head = object.head.as_ref();
        let mut out = Assembly::default();

        if let Some(head) = head {
            title(head, &mut out);
        }
        if self.options.charset {
            charset(head, &mut out);
        }
        if self.options.viewport {
            viewport(head, &mut out);
        }
        if let Some(head) = head {
            links(&head.link, &mut out);
            metas(&head.meta, &mut out);
            scripts(&head.script, &mut out);
            styles(&head.style, &mut out);
        }
        if let Some(body) = &object.body {
            body_elements(body, &mut out);
            scripts(&body.script, &mut out);
        }

        tracing::debug!(
            descriptors = out.descriptors.len(),
            omitted = out.omissions.len(),
            "Assembled html tag descriptors"
        );

        out
    }

    /// Assemble honoring [`AssembleOptions::strict`].
    ///
    /// In lenient mode this always succeeds; in strict mode any omission is an error.
    pub fn run(&self, object: &HtmlObject) -> Result<Vec<HtmlTagDescriptor>, AssembleError> {
        let assembly = self.assemble(object);
        if self.options.strict {
            assembly.into_strict()
        } else {
            Ok(assembly.descriptors)
        }
    }
}

/// Assemble leniently: incomplete entries are dropped without error.
pub fn assemble(object: &HtmlObject, options: AssembleOptions) -> Vec<HtmlTagDescriptor> {
    Assembler::new(options).assemble(object).descriptors
}

/// Assemble and return the omission list alongside the descriptors.
pub fn assemble_with_report(object: &HtmlObject, options: AssembleOptions) -> Assembly {
    Assembler::new(options).assemble(object)
}

/// Assemble, failing with every omission if any entry was dropped.
pub fn assemble_strict(
    object: &HtmlObject,
    options: AssembleOptions,
) -> Result<Vec<HtmlTagDescriptor>, AssembleError> {
    Assembler::new(options).assemble(object).into_strict()
}

fn title(head: &Head, out: &mut Assembly) {
    if let Some(title) = non_empty(&head.title) {
        out.descriptors
            .push(HtmlTagDescriptor::new("title", InjectTo::HeadPrepend).with_text(title));
    }
}

fn charset(head: Option<&Head>, out: &mut Assembly) {
    let charset = head
        .and_then(|h| h.charset.as_deref())
        .unwrap_or(DEFAULT_CHARSET);

    out.descriptors.push(
        HtmlTagDescriptor::new("meta", InjectTo::HeadPrepend)
            .with_attrs(Some(single("charset", charset))),
    );
}

fn viewport(head: Option<&Head>, out: &mut Assembly) {
    let content = head
        .and_then(|h| h.viewport.as_deref())
        .unwrap_or(DEFAULT_VIEWPORT);

    let mut attrs = single("name", "viewport");
    attrs.insert("content".to_string(), content.into());

    out.descriptors
        .push(HtmlTagDescriptor::new("meta", InjectTo::HeadPrepend).with_attrs(Some(attrs)));
}

fn links(entries: &[HeadLink], out: &mut Assembly) {
    for (index, link) in entries.iter().enumerate() {
        let Some(href) = non_empty(&link.href) else {
            omit(out, Section::Link, index, OmissionReason::MissingHref);
            continue;
        };

        let attrs = merge_opt(single("href", href), link.attrs.as_ref());
        let inject_to = link.inject_to.map_or(InjectTo::HeadPrepend, Into::into);

        out.descriptors
            .push(HtmlTagDescriptor::new("link", inject_to).with_attrs(Some(attrs)));
    }
}

fn metas(entries: &[HeadMeta], out: &mut Assembly) {
    for (index, meta) in entries.iter().enumerate() {
        let Some(content) = non_empty(&meta.content) else {
            omit(out, Section::Meta, index, OmissionReason::MissingContent);
            continue;
        };
        if meta.is_viewport() {
            omit(out, Section::Meta, index, OmissionReason::DuplicateViewport);
            continue;
        }

        let mut base = Attributes::new();
        if let Some(name) = &meta.name {
            base.insert("name".to_string(), name.as_str().into());
        }
        if let Some(property) = &meta.property {
            base.insert("property".to_string(), property.as_str().into());
        }
        base.insert("content".to_string(), content.into());

        let attrs = merge_opt(base, meta.attrs.as_ref());
        let inject_to = meta.inject_to.map_or(InjectTo::HeadPrepend, Into::into);

        out.descriptors
            .push(HtmlTagDescriptor::new("meta", inject_to).with_attrs(Some(attrs)));
    }
}

// Scripts from either section land at the start of body unless overridden.
fn scripts<P>(entries: &[Script<P>], out: &mut Assembly)
where
    P: Copy + Into<InjectTo>,
{
    for script in entries {
        let attrs = match non_empty(&script.src) {
            Some(src) => Some(merge_opt(single("src", src), script.attrs.as_ref())),
            None => script.attrs.clone(),
        };
        let inject_to = script.inject_to.map_or(InjectTo::BodyPrepend, Into::into);

        let mut descriptor = HtmlTagDescriptor::new("script", inject_to).with_attrs(attrs);
        if let Some(code) = &script.children {
            descriptor = descriptor.with_text(code.as_str());
        }
        out.descriptors.push(descriptor);
    }
}

fn styles(entries: &[HeadStyle], out: &mut Assembly) {
    for (index, style) in entries.iter().enumerate() {
        let Some(css) = non_empty(&style.children) else {
            omit(out, Section::Style, index, OmissionReason::MissingStyleText);
            continue;
        };

        let attrs = merge_opt(single("type", "text/css"), style.attrs.as_ref());
        let inject_to = style.inject_to.map_or(InjectTo::HeadPrepend, Into::into);

        out.descriptors.push(
            HtmlTagDescriptor::new("style", inject_to)
                .with_attrs(Some(attrs))
                .with_text(css),
        );
    }
}

fn body_elements(body: &Body, out: &mut Assembly) {
    out.descriptors
        .extend(body.default.iter().map(body_element_descriptor));
}

fn body_element_descriptor(element: &BodyElement) -> HtmlTagDescriptor {
    let inject_to = element.inject_to.map_or(InjectTo::BodyPrepend, Into::into);

    HtmlTagDescriptor::new(element.tag.as_str(), inject_to)
        .with_attrs(element.attrs.clone())
        .with_children(element.children.clone().map(Into::into))
}

fn omit(out: &mut Assembly, section: Section, index: usize, reason: OmissionReason) {
    let omission = Omission {
        section,
        index,
        reason,
    };
    tracing::debug!("Dropped {}", omission);
    out.omissions.push(omission);
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn single(key: &str, value: &str) -> Attributes {
    Attributes::from([(key.to_string(), AttrValue::from(value))])
}
