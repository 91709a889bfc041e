//! Configuration files for the `inject-html-tag` extension.
//!
//! Reads a TOML, YAML or JSON document holding the head/body description and
//! the assembly toggles. This is the only place file I/O happens; the
//! assembler only ever sees the parsed value.

pub mod error;
pub mod loader;

pub use error::ConfigError;
pub use loader::{Format, LoadOptions, PluginConfig};
