//! Sitemap and sitemap-index entries.

use super::SitemapItem;
use crate::{
    config::Options,
    error::{Field, Violation},
    serial::{format_priority, format_timestamp},
    validate::{is_valid_change_frequency, is_valid_priority, is_valid_url},
};
use chrono::{DateTime, FixedOffset};

/// Page entry of a `<urlset>`.
///
/// Values are stored as given; nothing is checked until serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub location: String,
    pub last_modified: DateTime<FixedOffset>,
    /// Raw change frequency, checked against [`CHANGE_FREQUENCIES`](super::CHANGE_FREQUENCIES)
    /// on serialization.
    pub change_frequency: String,
    pub priority: f64,
}

impl UrlEntry {
    pub fn new(
        location: impl Into<String>,
        last_modified: impl Into<DateTime<FixedOffset>>,
        change_frequency: impl Into<String>,
        priority: f64,
    ) -> Self {
        Self {
            location: location.into(),
            last_modified: last_modified.into(),
            change_frequency: change_frequency.into(),
            priority,
        }
    }
}

impl SitemapItem for UrlEntry {
    const ROOT: &'static str = "urlset";
    const ELEMENT: &'static str = "url";

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("loc", self.location.clone()),
            ("lastmod", format_timestamp(&self.last_modified)),
            ("changefreq", self.change_frequency.clone()),
            ("priority", format_priority(self.priority)),
        ]
    }

    fn validate(&self, options: &Options) -> Result<(), Violation> {
        check_location(&self.location)?;
        if !is_valid_change_frequency(&self.change_frequency) {
            return Err(Violation::new(
                Field::ChangeFrequency,
                &self.change_frequency,
                "is not a known change frequency",
            ));
        }
        if options.check_priority_range && !is_valid_priority(self.priority) {
            return Err(Violation::new(
                Field::Priority,
                self.priority.to_string(),
                "is outside 0.0..=1.0",
            ));
        }
        Ok(())
    }
}

/// Sub-sitemap reference of a `<sitemapindex>`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    pub location: String,
    pub last_modified: DateTime<FixedOffset>,
}

impl IndexEntry {
    pub fn new(
        location: impl Into<String>,
        last_modified: impl Into<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            location: location.into(),
            last_modified: last_modified.into(),
        }
    }
}

impl SitemapItem for IndexEntry {
    const ROOT: &'static str = "sitemapindex";
    const ELEMENT: &'static str = "sitemap";

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("loc", self.location.clone()),
            ("lastmod", format_timestamp(&self.last_modified)),
        ]
    }

    fn validate(&self, _options: &Options) -> Result<(), Violation> {
        check_location(&self.location)
    }
}

fn check_location(location: &str) -> Result<(), Violation> {
    if is_valid_url(location) {
        Ok(())
    } else {
        Err(Violation::new(Field::Location, location, "is not a valid URL"))
    }
}
