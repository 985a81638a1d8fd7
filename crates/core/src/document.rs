//! Rendering contract for host frameworks.
//!
//! An HTTP adapter only needs two things from this crate: run a generator
//! that may or may not produce a document, and render that document to
//! bytes in a requested format. [`generate_document`] does both.

use std::fmt;
use std::str::FromStr;

use crate::index::Index;
use crate::sitemap::Sitemap;
use crate::{Result, SitemapError};

/// Output formats a document can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Standard XML sitemap (or sitemap index).
    Xml,
    /// Google News sitemap.
    GoogleNews,
    /// Mobile-tagged XML sitemap.
    Mobile,
    /// Plain text URL list.
    Text,
    /// Human-readable HTML report.
    Html,
    /// JSON summary.
    Json,
}

impl DocumentFormat {
    /// MIME type to send alongside the rendered bytes.
    pub fn content_type(&self) -> &'static str {
        match self {
            DocumentFormat::Xml | DocumentFormat::GoogleNews | DocumentFormat::Mobile => "application/xml",
            DocumentFormat::Text => "text/plain",
            DocumentFormat::Html => "text/html",
            DocumentFormat::Json => "application/json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Xml => "xml",
            DocumentFormat::GoogleNews => "news",
            DocumentFormat::Mobile => "mobile",
            DocumentFormat::Text => "text",
            DocumentFormat::Html => "html",
            DocumentFormat::Json => "json",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "news" | "google-news" => Ok(Self::GoogleNews),
            "mobile" => Ok(Self::Mobile),
            "text" | "txt" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Invalid format: {}. Valid options: xml, news, mobile, text, html, json",
                s
            )),
        }
    }
}

/// Something that renders to bytes.
pub trait Document {
    fn render(&self, format: DocumentFormat) -> Result<Vec<u8>>;
}

impl Document for Sitemap {
    fn render(&self, format: DocumentFormat) -> Result<Vec<u8>> {
        match format {
            DocumentFormat::Xml => self.to_xml(),
            DocumentFormat::GoogleNews => self.to_google_news(),
            DocumentFormat::Mobile => self.to_mobile(),
            DocumentFormat::Text => self.to_txt(),
            DocumentFormat::Html => self.to_html(),
            DocumentFormat::Json => self.to_json(),
        }
    }
}

impl Document for Index {
    fn render(&self, format: DocumentFormat) -> Result<Vec<u8>> {
        match format {
            DocumentFormat::Xml => self.to_xml(),
            other => Err(SitemapError::UnsupportedFormat { format: other.as_str() }),
        }
    }
}

/// Runs `generator` and renders its document.
///
/// Returns [`SitemapError::NoDocument`] when the generator yields `None`.
///
/// # Example
///
/// ```rust
/// use sitemap_core::{ChangeFrequency, DocumentFormat, Sitemap, generate_document};
///
/// let body = generate_document(
///     || {
///         let mut sitemap = Sitemap::new();
///         sitemap.add("https://example.com/", None, 1.0, ChangeFrequency::Daily).ok()?;
///         Some(sitemap)
///     },
///     DocumentFormat::Text,
/// )?;
/// assert_eq!(body, b"https://example.com/\n");
/// # Ok::<(), sitemap_core::SitemapError>(())
/// ```
pub fn generate_document<D, F>(generator: F, format: DocumentFormat) -> Result<Vec<u8>>
where
    D: Document,
    F: FnOnce() -> Option<D>,
{
    generator().ok_or(SitemapError::NoDocument)?.render(format)
}
