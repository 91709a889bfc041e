//! Host hook contract and the extension that wires the assembler into it.

use crate::assembler::{AssembleOptions, Assembler};
use crate::config::HtmlObject;
use crate::descriptor::HtmlTagDescriptor;
use crate::report::AssembleError;

/// Name the extension registers under.
pub const PLUGIN_NAME: &str = "inject-html-tag";

/// An extension a host calls while processing its index document.
pub trait HtmlTransformHook: Send + Sync {
    /// Identifier used by the host for diagnostics and ordering.
    fn name(&self) -> &'static str;

    /// Produce the descriptors to splice into the document.
    ///
    /// Called once per document-transform event.
    fn transform_index_html(&self) -> Result<Vec<HtmlTagDescriptor>, AssembleError>;
}

/// Injects the tags described by an [`HtmlObject`].
///
/// The description is fixed at construction; every transform assembles a
/// fresh descriptor list from it.
#[derive(Debug, Clone)]
pub struct InjectHtmlTag {
    object: HtmlObject,
    assembler: Assembler,
}

impl InjectHtmlTag {
    /// Create the extension with default options.
    pub fn new(object: HtmlObject) -> Self {
        Self::with_options(object, AssembleOptions::default())
    }

    pub fn with_options(object: HtmlObject, options: AssembleOptions) -> Self {
        Self {
            object,
            assembler: Assembler::new(options),
        }
    }

    pub fn object(&self) -> &HtmlObject {
        &self.object
    }

    pub fn options(&self) -> &AssembleOptions {
        self.assembler.options()
    }
}

impl HtmlTransformHook for InjectHtmlTag {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn transform_index_html(&self) -> Result<Vec<HtmlTagDescriptor>, AssembleError> {
        self.assembler.run(&self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;
    use crate::config::{Head, HeadLink, HeadMeta};
    use pretty_assertions::assert_eq;

    fn sample() -> HtmlObject {
        HtmlObject::new().with_head(
            Head::new()
                .title("Solid App")
                .viewport("width=device-width,initial-scale=1,viewport-fit=cover")
                .meta(HeadMeta::named("description", ""))
                .meta(HeadMeta::named("theme-color", "#000000"))
                .link(HeadLink::new("/solid/assets/favicon.ico").attr("rel", "icon")),
        )
    }

    #[test]
    fn registers_under_fixed_name() {
        let hook: Box<dyn HtmlTransformHook> = Box::new(InjectHtmlTag::new(HtmlObject::new()));
        assert_eq!(hook.name(), "inject-html-tag");
    }

    #[test]
    fn transform_matches_direct_assembly() {
        let plugin = InjectHtmlTag::new(sample());

        let first = plugin.transform_index_html().unwrap();
        let second = plugin.transform_index_html().unwrap();

        assert_eq!(first, assemble(&sample(), AssembleOptions::default()));
        assert_eq!(first, second);
        // title, charset, viewport, link, theme-color
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn strict_plugin_surfaces_omissions() {
        let plugin = InjectHtmlTag::with_options(
            sample(),
            AssembleOptions {
                strict: true,
                ..AssembleOptions::default()
            },
        );

        let err = plugin.transform_index_html().unwrap_err();

        assert_eq!(err.omissions().len(), 1);
        assert!(plugin.options().strict);
    }
}
