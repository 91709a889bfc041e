//! Assemble ordered HTML tag descriptors from a declarative document description.
//!
//! An [`HtmlObject`] describes the title, meta tags, links, scripts, styles and
//! body elements a page should receive. The [`Assembler`] expands it into a flat,
//! deterministic list of [`HtmlTagDescriptor`]s that a host's HTML transform hook
//! splices into the document. Nested body children are passed through untouched;
//! rendering them recursively is the host's job.

pub mod assembler;
pub mod attrs;
pub mod config;
pub mod descriptor;
pub mod inject;
pub mod plugin;
pub mod report;

pub use assembler::{
    assemble, assemble_strict, assemble_with_report, AssembleOptions, Assembler, Assembly,
    DEFAULT_CHARSET, DEFAULT_VIEWPORT,
};
pub use attrs::{attributes, merge, AttrValue, Attributes};
pub use config::{
    Body, BodyElement, BodyScript, ChildElement, ElementChildren, Head, HeadLink, HeadMeta,
    HeadScript, HeadStyle, HtmlObject, Script,
};
pub use descriptor::{HtmlTagDescriptor, TagChildren};
pub use inject::{BodyInjectTo, HeadInjectTo, InjectTo};
pub use plugin::{HtmlTransformHook, InjectHtmlTag, PLUGIN_NAME};
pub use report::{AssembleError, Omission, OmissionReason, Section};
