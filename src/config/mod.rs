//! Serialization options.
//!
//! Options can be built in code or parsed from TOML, either as a bare table
//! or as the `[sitemap]` table of a larger host configuration.
//!
//! # Example
//!
//! ```toml
//! [sitemap]
//! pretty_output = false           # Indent child elements two spaces per level
//! include_xml_header = false      # Prepend `<?xml version="1.0" encoding="UTF-8" ?>`
//! validate_on_serialize = true    # Reject invalid entries before rendering
//! check_priority_range = false    # Also require priority within 0.0..=1.0
//! ```

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Table name looked up when options are embedded in a host config.
const SECTION: &str = "sitemap";

/// Output and validation flags owned by a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Indent child elements with newlines and two spaces per level.
    pub pretty_output: bool,
    /// Prepend the XML declaration line.
    pub include_xml_header: bool,
    /// Validate every entry before rendering.
    pub validate_on_serialize: bool,
    /// Reject priorities outside `0.0..=1.0`. Off unless asked for.
    pub check_priority_range: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pretty_output: false,
            include_xml_header: false,
            validate_on_serialize: true,
            check_priority_range: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty_output(mut self, pretty: bool) -> Self {
        self.pretty_output = pretty;
        self
    }

    pub fn with_xml_header(mut self, header: bool) -> Self {
        self.include_xml_header = header;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_on_serialize = validate;
        self
    }

    pub fn with_priority_range_check(mut self, check: bool) -> Self {
        self.check_priority_range = check;
        self
    }
}

impl FromStr for Options {
    type Err = ConfigError;

    /// Parse options from TOML.
    ///
    /// A `[sitemap]` table takes precedence; otherwise the whole document is
    /// read as the options table.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut table: toml::Table = toml::from_str(content)?;
        let options = match table.remove(SECTION) {
            Some(section) => section.try_into()?,
            None => toml::Value::Table(table).try_into()?,
        };
        Ok(options)
    }
}
