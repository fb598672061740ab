//! Build and serialize Sitemap and Sitemap-Index XML documents.
//!
//! Collect entries into a [`Sitemap`] (`<urlset>`) or [`SitemapIndex`]
//! (`<sitemapindex>`), then call `to_xml_string`. Entries are validated on
//! serialization unless [`Options::validate_on_serialize`] is turned off.
//!
//! # Example
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use sitemap_xml::{ChangeFrequency, Sitemap};
//!
//! let lastmod = FixedOffset::west_opt(4 * 3600)
//!     .unwrap()
//!     .with_ymd_and_hms(2019, 10, 10, 8, 0, 0)
//!     .unwrap();
//!
//! let mut sitemap = Sitemap::default();
//! sitemap.add_entry("http://mysite.com/about", lastmod, ChangeFrequency::Daily, 0.5);
//!
//! assert_eq!(
//!     sitemap.to_xml_string().unwrap(),
//!     "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"><url>\
//!      <loc>http://mysite.com/about</loc><lastmod>2019-10-10T08:00:00-04:00</lastmod>\
//!      <changefreq>daily</changefreq><priority>0.5</priority></url></urlset>"
//! );
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod logger;
pub mod model;
pub mod serial;
pub mod validate;

pub use collection::{Collection, SharedCollection, Sitemap, SitemapIndex};
pub use config::{ConfigError, Options};
pub use error::{Field, SitemapError, Violation};
pub use model::{CHANGE_FREQUENCIES, ChangeFrequency, IndexEntry, SitemapItem, UrlEntry};
pub use serial::{SITEMAP_NS, XML_HEADER};
pub use validate::{is_valid_change_frequency, is_valid_url};
