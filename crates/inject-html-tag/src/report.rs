//! Records of entries the assembler dropped.

use std::fmt;

/// Input list an omitted entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Link,
    Meta,
    Style,
}

impl Section {
    /// Path of the list inside the configuration.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Link => "head.link",
            Self::Meta => "head.meta",
            Self::Style => "head.style",
        }
    }
}

/// Why an entry produced no descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OmissionReason {
    /// Link without a non-empty `href`
    MissingHref,
    /// Meta without a non-empty `content`
    MissingContent,
    /// Meta declaring a viewport; `head.viewport` owns that tag
    DuplicateViewport,
    /// Style without CSS text
    MissingStyleText,
}

impl fmt::Display for OmissionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::MissingHref => "missing or empty `href`",
            Self::MissingContent => "missing or empty `content`",
            Self::DuplicateViewport => "viewport meta belongs in `head.viewport`",
            Self::MissingStyleText => "missing or empty `children`",
        };
        f.write_str(reason)
    }
}

/// One dropped entry: where it was and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Omission {
    pub section: Section,

    /// Position in the input list
    pub index: usize,

    pub reason: OmissionReason,
}

impl fmt::Display for Omission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.section.path(), self.index, self.reason)
    }
}

/// Errors raised by strict assembly.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("configuration entries omitted ({count}): {details}", count = .omissions.len(), details = join(.omissions))]
    Omitted { omissions: Vec<Omission> },
}

impl AssembleError {
    pub fn omissions(&self) -> &[Omission] {
        match self {
            Self::Omitted { omissions } => omissions,
        }
    }
}

fn join(omissions: &[Omission]) -> String {
    omissions
        .iter()
        .map(Omission::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
