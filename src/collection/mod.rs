//! Ordered entry collections.
//!
//! [`Sitemap`] and [`SitemapIndex`] share one generic [`Collection`].
//! Entries are stored in insertion order, which is also the output order.
//!
//! A collection is not synchronized: mutation takes `&mut self`. Wrap it in
//! [`SharedCollection`] to mutate from several threads.

mod shared;

pub use shared::SharedCollection;

use crate::{
    config::Options,
    debug,
    error::SitemapError,
    model::{IndexEntry, SitemapItem, UrlEntry},
    serial,
};
use chrono::{DateTime, FixedOffset};

/// `<urlset>` of page entries.
pub type Sitemap = Collection<UrlEntry>;

/// `<sitemapindex>` of sub-sitemap references.
pub type SitemapIndex = Collection<IndexEntry>;

/// Ordered entries plus the options used to serialize them.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    entries: Vec<T>,
    options: Options,
}

impl<T: SitemapItem> Collection<T> {
    /// Create a collection. `None` uses [`Options::default`].
    ///
    /// Entries are not checked here; invalid ones fail at serialization.
    pub fn new(entries: Vec<T>, options: Option<Options>) -> Self {
        Self {
            entries,
            options: options.unwrap_or_default(),
        }
    }

    /// Append a pre-built entry.
    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Remove and return the entry at `index`, shifting later entries left.
    ///
    /// Out-of-range indices leave the collection unchanged.
    pub fn remove_entry(&mut self, index: usize) -> Result<T, SitemapError> {
        let len = self.entries.len();
        if index >= len {
            return Err(SitemapError::IndexOutOfRange { index, len });
        }
        Ok(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Check every entry in order, stopping at the first failure.
    pub fn validate(&self) -> Result<(), SitemapError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if let Err(violation) = entry.validate(&self.options) {
                debug!("validate"; "{} entry {} rejected: <{}> `{}`",
                    T::ELEMENT, index, violation.field, violation.value);
                return Err(violation.at(index));
            }
        }
        Ok(())
    }

    /// Serialize to an XML string.
    ///
    /// With `validate_on_serialize`, the first invalid entry aborts the whole
    /// call and no XML is returned.
    pub fn to_xml_string(&self) -> Result<String, SitemapError> {
        if self.options.validate_on_serialize {
            self.validate()?;
        }

        let document = serial::build_document(&self.entries);
        let xml = serial::render(&document, &self.options)?;

        debug!(T::ROOT; "rendered {} entries ({} bytes)", self.entries.len(), xml.len());
        Ok(xml)
    }
}

impl<T: SitemapItem> Default for Collection<T> {
    fn default() -> Self {
        Self::new(Vec::new(), None)
    }
}

impl Collection<UrlEntry> {
    /// Append a page entry. Never fails; values are checked on serialization.
    pub fn add_entry(
        &mut self,
        location: impl Into<String>,
        last_modified: impl Into<DateTime<FixedOffset>>,
        change_frequency: impl Into<String>,
        priority: f64,
    ) {
        self.push(UrlEntry::new(
            location,
            last_modified,
            change_frequency,
            priority,
        ));
    }
}

impl Collection<IndexEntry> {
    /// Append a sub-sitemap reference. Never fails; values are checked on
    /// serialization.
    pub fn add_entry(
        &mut self,
        location: impl Into<String>,
        last_modified: impl Into<DateTime<FixedOffset>>,
    ) {
        self.push(IndexEntry::new(location, last_modified));
    }
}
