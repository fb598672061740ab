//! XML serialization.
//!
//! Entries are first mapped into a small element tree, then written through
//! `quick_xml::Writer`.
//!
//! # Output
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8" ?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2019-10-10T08:00:00-04:00</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>0.5</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! The declaration line is only written with `include_xml_header`, and the
//! indentation only with `pretty_output`. Compact output is a single line.

mod format;

pub use format::{format_priority, format_timestamp};

use crate::{config::Options, error::SitemapError, model::SitemapItem};
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::fmt::Display;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Declaration line prepended when `include_xml_header` is set.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n";

/// Indentation unit for pretty output.
const INDENT: usize = 2;

// ============================================================================
// Document Model
// ============================================================================

/// Element node of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<XmlNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    /// Unescaped text; escaping happens while rendering.
    Text(String),
}

impl XmlElement {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }
}

/// Build the document tree for a list of entries, keeping their order.
pub fn build_document<T: SitemapItem>(entries: &[T]) -> XmlElement {
    entries.iter().fold(
        XmlElement::new(T::ROOT).with_attribute("xmlns", SITEMAP_NS),
        |root, entry| root.with_child(entry_element(entry)),
    )
}

fn entry_element<T: SitemapItem>(entry: &T) -> XmlElement {
    entry
        .fields()
        .into_iter()
        .fold(XmlElement::new(T::ELEMENT), |element, (name, text)| {
            element.with_child(XmlElement::new(name).with_text(text))
        })
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a document tree according to `options`.
///
/// Validation is not done here; callers check entries first.
pub fn render(root: &XmlElement, options: &Options) -> Result<String, SitemapError> {
    let mut writer = if options.pretty_output {
        Writer::new_with_indent(Vec::new(), b' ', INDENT)
    } else {
        Writer::new(Vec::new())
    };

    write_element(&mut writer, root)?;

    let body = String::from_utf8(writer.into_inner()).map_err(render_error)?;
    if options.include_xml_header {
        Ok(format!("{XML_HEADER}{body}"))
    } else {
        Ok(body)
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), SitemapError> {
    let mut start = BytesStart::new(element.name);
    for (key, value) in &element.attributes {
        start.push_attribute((*key, value.as_str()));
    }
    writer
        .write_event(Event::Start(start))
        .map_err(render_error)?;

    for child in &element.children {
        match child {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(render_error)?,
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(element.name)))
        .map_err(render_error)?;
    Ok(())
}

fn render_error(err: impl Display) -> SitemapError {
    SitemapError::Render(err.to_string())
}
