//! Entry types and the trait that ties them to a document shape.
//!
//! | Entry        | Root element     | Child element | Fields                              |
//! |--------------|------------------|---------------|-------------------------------------|
//! | `UrlEntry`   | `<urlset>`       | `<url>`       | loc, lastmod, changefreq, priority  |
//! | `IndexEntry` | `<sitemapindex>` | `<sitemap>`   | loc, lastmod                        |

mod entry;
mod frequency;

pub use entry::{IndexEntry, UrlEntry};
pub use frequency::{CHANGE_FREQUENCIES, ChangeFrequency};

use crate::{config::Options, error::Violation};

/// An entry that can be validated and rendered as one child element.
pub trait SitemapItem {
    /// Root element of a document made of these entries.
    const ROOT: &'static str;
    /// Element wrapping each entry.
    const ELEMENT: &'static str;

    /// Child elements in output order, with formatted text content.
    fn fields(&self) -> Vec<(&'static str, String)>;

    /// Check the entry, reporting the first rule it breaks.
    fn validate(&self, options: &Options) -> Result<(), Violation>;
}
