//! Build and render search-engine sitemaps.
//!
//! Fill a [`Sitemap`] or an [`Index`] with validated entries, then render it as
//! standard XML, Google News XML, mobile XML, plain text, an HTML report, or a
//! JSON summary.

pub mod document;
pub mod entry;
pub mod error;
pub mod formatters;
pub mod index;
pub mod sitemap;
pub mod validate;

pub use document::{Document, DocumentFormat, generate_document};
pub use entry::{ChangeFrequency, Entry, EntryExtras, Image, News, Video};
pub use error::{Result, SitemapError};
pub use formatters::{
    HtmlConfig, HtmlFormatter, IndexConfig, IndexFormatter, JsonConfig, JsonFormatter, TextFormatter, XmlConfig,
    XmlFlavor, XmlFormatter,
};
pub use formatters::{convert_index_to_xml, convert_to_html, convert_to_json, convert_to_text, convert_to_xml};
pub use index::{Index, IndexEntry};
pub use sitemap::{DEFAULT_MAX_URLS, Sitemap, SitemapOptions, SitemapOptionsBuilder};
pub use validate::{validate_priority, validate_url};
