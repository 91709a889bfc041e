//! Injection points: where in the document a descriptor is spliced.

use serde::{Deserialize, Serialize};

/// Resolved injection point carried by every emitted descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InjectTo {
    /// Start of `<head>`
    HeadPrepend,
    /// End of `<head>`
    Head,
    /// Start of `<body>`
    BodyPrepend,
    /// End of `<body>`
    Body,
}

impl InjectTo {
    /// The identifier a JavaScript host uses for this point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeadPrepend => "head-prepend",
            Self::Head => "head",
            Self::BodyPrepend => "body-prepend",
            Self::Body => "body",
        }
    }

    pub fn is_head(&self) -> bool {
        matches!(self, Self::HeadPrepend | Self::Head)
    }
}

impl std::fmt::Display for InjectTo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Injection points a head entry may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadInjectTo {
    HeadPrepend,
    Head,
}

impl From<HeadInjectTo> for InjectTo {
    fn from(value: HeadInjectTo) -> Self {
        match value {
            HeadInjectTo::HeadPrepend => Self::HeadPrepend,
            HeadInjectTo::Head => Self::Head,
        }
    }
}

/// Injection points a body entry may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyInjectTo {
    BodyPrepend,
    Body,
}

impl From<BodyInjectTo> for InjectTo {
    fn from(value: BodyInjectTo) -> Self {
        match value {
            BodyInjectTo::BodyPrepend => Self::BodyPrepend,
            BodyInjectTo::Body => Self::Body,
        }
    }
}
