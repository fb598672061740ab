//! Sitemap error types.

use std::fmt;
use thiserror::Error;

// ============================================================================
// SitemapError
// ============================================================================

/// Errors returned by collection operations.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// An entry was rejected while validating before serialization.
    ///
    /// Serialization stops at the first failing entry, so `index` is the
    /// lowest invalid position.
    #[error("entry {index} failed validation: <{field}> `{value}` {reason}")]
    Validation {
        index: usize,
        field: Field,
        value: String,
        reason: &'static str,
    },

    #[error("index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// The XML writer failed. Not expected once the document tree is built.
    #[error("failed to render XML: {0}")]
    Render(String),
}

// ============================================================================
// Field / Violation
// ============================================================================

/// Entry field that a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Location,
    ChangeFrequency,
    Priority,
}

impl Field {
    /// XML element name the field renders to.
    pub const fn element(self) -> &'static str {
        match self {
            Self::Location => "loc",
            Self::ChangeFrequency => "changefreq",
            Self::Priority => "priority",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element())
    }
}

/// A single failed rule, before it is tied to an entry position.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: Field,
    pub value: String,
    pub reason: &'static str,
}

impl Violation {
    pub fn new(field: Field, value: impl Into<String>, reason: &'static str) -> Self {
        Self {
            field,
            value: value.into(),
            reason,
        }
    }

    /// Attach the entry position the violation was found at.
    pub fn at(self, index: usize) -> SitemapError {
        SitemapError::Validation {
            index,
            field: self.field,
            value: self.value,
            reason: self.reason,
        }
    }
}
