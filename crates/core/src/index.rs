//! Sitemap index builder.
//!
//! An [`Index`] lists the locations of other sitemap files. It follows the
//! same ceiling and validation rules as [`Sitemap`](crate::Sitemap) but its
//! entries carry only a URL and an optional timestamp.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::formatters::{IndexConfig, convert_index_to_xml};
use crate::sitemap::SitemapOptions;
use crate::validate::validate_url;
use crate::{Result, SitemapError};

/// Reference to one sitemap file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::formatters::timestamp::option")]
    pub last_modified: Option<OffsetDateTime>,
}

impl IndexEntry {
    pub fn new(url: impl Into<String>, last_modified: Option<OffsetDateTime>) -> Self {
        Self { url: url.into(), last_modified }
    }
}

/// Ordered collection of sitemap references.
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    entries: Vec<IndexEntry>,
    options: SitemapOptions,
}

impl Index {
    pub fn new() -> Self {
        Self::with_options(SitemapOptions::default())
    }

    pub fn with_options(options: SitemapOptions) -> Self {
        let options = options.normalized();
        Self { entries: Vec::with_capacity(options.initial_capacity()), options }
    }

    /// Creates an index from pre-built entries, stopping at the first invalid one.
    pub fn from_entries(entries: impl IntoIterator<Item = IndexEntry>, options: SitemapOptions) -> Result<Self> {
        let mut index = Self::with_options(options);
        index.add_items(entries)?;
        Ok(index)
    }

    pub fn options(&self) -> &SitemapOptions {
        &self.options
    }

    /// Appends a sitemap reference. On error nothing is appended.
    pub fn add(&mut self, url: impl Into<String>, last_modified: Option<OffsetDateTime>) -> Result<()> {
        self.add_item(IndexEntry::new(url, last_modified))
    }

    pub fn add_item(&mut self, entry: IndexEntry) -> Result<()> {
        if self.entries.len() >= self.options.max_urls {
            return Err(SitemapError::CapacityExceeded { max: self.options.max_urls });
        }
        validate_url(&entry.url)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Appends entries in order; earlier entries survive a later failure.
    pub fn add_items(&mut self, entries: impl IntoIterator<Item = IndexEntry>) -> Result<()> {
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

    pub fn items(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// `<sitemapindex>` document.
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        convert_index_to_xml(&self.entries, &IndexConfig::default())
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}
