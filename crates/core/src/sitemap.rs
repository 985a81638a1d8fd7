//! Sitemap builder.
//!
//! A [`Sitemap`] is an ordered, capacity-bounded collection of [`Entry`]
//! values. Entries are validated synchronously when added and kept in
//! insertion order; every renderer preserves that order.
//!
//! # Example
//!
//! ```rust
//! use sitemap_core::{ChangeFrequency, EntryExtras, Sitemap};
//!
//! let mut sitemap = Sitemap::new();
//! sitemap.add("https://example.com/", None, 1.0, ChangeFrequency::Daily)?;
//! sitemap.add_with(
//!     "https://example.com/about",
//!     None,
//!     0.8,
//!     ChangeFrequency::Monthly,
//!     EntryExtras::new().title("About"),
//! )?;
//!
//! let xml = sitemap.to_xml()?;
//! assert!(String::from_utf8_lossy(&xml).contains("<loc>https://example.com/about</loc>"));
//! # Ok::<(), sitemap_core::SitemapError>(())
//! ```

use time::OffsetDateTime;

use crate::entry::{ChangeFrequency, Entry, EntryExtras};
use crate::formatters::{
    HtmlConfig, JsonConfig, XmlConfig, XmlFlavor, convert_to_html, convert_to_json, convert_to_text, convert_to_xml,
};
use crate::{Result, SitemapError};

/// Per-file URL limit published by the sitemap protocol.
pub const DEFAULT_MAX_URLS: usize = 50_000;

/// Configuration shared by [`Sitemap`] and [`Index`](crate::Index).
///
/// # Example
///
/// ```rust
/// use sitemap_core::SitemapOptions;
///
/// let options = SitemapOptions::builder()
///     .max_urls(1_000)
///     .base_url("https://example.com")
///     .pre_allocate(true)
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapOptions {
    /// Entry ceiling (default: 50 000). Zero means "use the default".
    pub max_urls: usize,

    /// Informational base URL. Entries are not resolved against it.
    pub base_url: Option<String>,

    /// Reserve storage up front (default: false).
    pub pre_allocate: bool,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self { max_urls: DEFAULT_MAX_URLS, base_url: None, pre_allocate: false }
    }
}

impl SitemapOptions {
    /// Creates a new builder for SitemapOptions.
    pub fn builder() -> SitemapOptionsBuilder {
        SitemapOptionsBuilder::new()
    }

    /// Replaces a zero ceiling with the protocol default.
    pub(crate) fn normalized(mut self) -> Self {
        if self.max_urls == 0 {
            self.max_urls = DEFAULT_MAX_URLS;
        }
        self
    }

    /// Number of slots to reserve for a new collection.
    pub(crate) fn initial_capacity(&self) -> usize {
        if self.pre_allocate { self.max_urls.min(DEFAULT_MAX_URLS) } else { 0 }
    }
}

/// Builder for SitemapOptions.
pub struct SitemapOptionsBuilder {
    options: SitemapOptions,
}

impl SitemapOptionsBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { options: SitemapOptions::default() }
    }

    /// Sets the entry ceiling.
    pub fn max_urls(mut self, value: usize) -> Self {
        self.options.max_urls = value;
        self
    }

    /// Sets the informational base URL.
    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.options.base_url = Some(value.into());
        self
    }

    /// Sets whether storage is reserved up front.
    pub fn pre_allocate(mut self, value: bool) -> Self {
        self.options.pre_allocate = value;
        self
    }

    /// Builds the options.
    pub fn build(self) -> SitemapOptions {
        self.options
    }
}

impl Default for SitemapOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered collection of sitemap entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Sitemap {
    entries: Vec<Entry>,
    options: SitemapOptions,
}

impl Sitemap {
    /// Creates an empty sitemap with default options.
    pub fn new() -> Self {
        Self::with_options(SitemapOptions::default())
    }

    /// Creates an empty sitemap with the given options.
    pub fn with_options(options: SitemapOptions) -> Self {
        let options = options.normalized();
        Self { entries: Vec::with_capacity(options.initial_capacity()), options }
    }

    /// Creates a sitemap from pre-built entries.
    ///
    /// Stops at the first invalid entry and returns its error.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>, options: SitemapOptions) -> Result<Self> {
        let mut sitemap = Self::with_options(options);
        sitemap.add_items(entries)?;
        Ok(sitemap)
    }

    pub fn options(&self) -> &SitemapOptions {
        &self.options
    }

    /// Appends an entry with no optional attributes.
    ///
    /// On error nothing is appended.
    pub fn add(
        &mut self, url: impl Into<String>, last_modified: Option<OffsetDateTime>, priority: f64,
        change_frequency: ChangeFrequency,
    ) -> Result<()> {
        self.add_with(url, last_modified, priority, change_frequency, EntryExtras::default())
    }

    /// Appends an entry carrying whichever of `extras` are set.
    pub fn add_with(
        &mut self, url: impl Into<String>, last_modified: Option<OffsetDateTime>, priority: f64,
        change_frequency: ChangeFrequency, extras: EntryExtras,
    ) -> Result<()> {
        let mut entry = Entry::new(url, priority, change_frequency).with_extras(extras);
        entry.last_modified = last_modified;
        self.add_item(entry)
    }

    /// Appends a pre-built entry after validating it.
    pub fn add_item(&mut self, entry: Entry) -> Result<()> {
        if self.entries.len() >= self.options.max_urls {
            return Err(SitemapError::CapacityExceeded { max: self.options.max_urls });
        }
        entry.validate()?;
        self.entries.push(entry);
        Ok(())
    }

    /// Appends entries in order, stopping at the first failure.
    ///
    /// Entries appended before the failure are kept.
    pub fn add_items(&mut self, entries: impl IntoIterator<Item = Entry>) -> Result<()> {
        for entry in entries {
            self.add_item(entry)?;
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[Entry] {
        &self.entries
    }

    /// Removes every entry, keeping the options.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Standard XML sitemap.
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        convert_to_xml(&self.entries, &XmlConfig::default())
    }

    /// Google News sitemap holding only entries with a news record.
    pub fn to_google_news(&self) -> Result<Vec<u8>> {
        convert_to_xml(&self.entries, &XmlConfig { flavor: XmlFlavor::GoogleNews, ..Default::default() })
    }

    /// Standard XML with a mobile marker on every URL.
    pub fn to_mobile(&self) -> Result<Vec<u8>> {
        convert_to_xml(&self.entries, &XmlConfig { flavor: XmlFlavor::Mobile, ..Default::default() })
    }

    /// One URL per line.
    pub fn to_txt(&self) -> Result<Vec<u8>> {
        Ok(convert_to_text(&self.entries))
    }

    /// Human-readable HTML report.
    pub fn to_html(&self) -> Result<Vec<u8>> {
        convert_to_html(&self.entries, &HtmlConfig::default())
    }

    /// JSON summary with `count` and `urls`.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        convert_to_json(&self.entries, &JsonConfig::default())
    }
}

impl Default for Sitemap {
    fn default() -> Self {
        Self::new()
    }
}
