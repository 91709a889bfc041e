//! Parsing and loading of plugin configuration documents.

use std::fs;
use std::path::Path;

use inject_html_tag::{AssembleOptions, Body, Head, HtmlObject, InjectHtmlTag};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Document format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Detect the format of a config file from its extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// How strictly to treat the document itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Fail on unrecognized keys instead of warning about them
    pub deny_unknown: bool,
}

/// A complete plugin configuration file.
///
/// ```toml
/// [options]
/// viewport = false
///
/// [head]
/// title = "App"
///
/// [[head.meta]]
/// name = "description"
/// content = "My app"
///
/// [[body.default]]
/// tag = "div"
/// attrs = { id = "root" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub options: AssembleOptions,
    pub head: Option<Head>,
    pub body: Option<Body>,
}

impl PluginConfig {
    /// Parse a document, warning about unknown keys.
    pub fn parse(content: &str, format: Format) -> Result<Self, ConfigError> {
        Self::parse_with(content, format, &LoadOptions::default())
    }

    /// Parse a document with explicit load options.
    pub fn parse_with(
        content: &str,
        format: Format,
        options: &LoadOptions,
    ) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content, format)?;

        if !ignored.is_empty() {
            if options.deny_unknown {
                return Err(ConfigError::UnknownFields(ignored));
            }
            for field in &ignored {
                tracing::warn!("Ignoring unknown config field: {}", field);
            }
        }

        Ok(config)
    }

    /// Read and parse a config file. The format follows the file extension.
    pub fn load(path: &Path, options: &LoadOptions) -> Result<Self, ConfigError> {
        let format = Format::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse_with(&content, format, options)?;
        tracing::info!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Parse content, collecting the paths of any unknown keys.
    fn parse_with_ignored(
        content: &str,
        format: Format,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let mut record = |path: serde_ignored::Path| ignored.push(path.to_string());

        let config = match format {
            Format::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, &mut record)?
            }
            Format::Yaml => {
                let deserializer = serde_yaml::Deserializer::from_str(content);
                serde_ignored::deserialize(deserializer, &mut record)?
            }
            Format::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let config = serde_ignored::deserialize(&mut deserializer, &mut record)?;
                deserializer.end()?;
                config
            }
        };

        Ok((config, ignored))
    }

    /// The head/body description on its own.
    pub fn html_object(&self) -> HtmlObject {
        HtmlObject {
            head: self.head.clone(),
            body: self.body.clone(),
        }
    }

    /// Build the extension this configuration describes.
    pub fn into_plugin(self) -> InjectHtmlTag {
        let object = HtmlObject {
            head: self.head,
            body: self.body,
        };
        InjectHtmlTag::with_options(object, self.options)
    }
}
