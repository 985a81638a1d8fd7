//! `<sitemapindex>` renderer.

use quick_xml::events::BytesStart;

use crate::Result;
use crate::formatters::format_timestamp;
use crate::formatters::xml::{SITEMAP_NAMESPACE, new_writer, write_declaration, write_end, write_start, write_text_element};
use crate::index::IndexEntry;

/// Configuration for sitemap index output
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Indent nested elements by two spaces
    pub pretty: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Sitemap index formatter
pub struct IndexFormatter {
    config: IndexConfig,
}

impl IndexFormatter {
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, entries: &[IndexEntry]) -> Result<Vec<u8>> {
        convert_index_to_xml(entries, &self.config)
    }
}

/// Render index entries as a `<sitemapindex>` document.
pub fn convert_index_to_xml(entries: &[IndexEntry], config: &IndexConfig) -> Result<Vec<u8>> {
    let mut writer = new_writer(config.pretty);
    write_declaration(&mut writer)?;

    let mut root = BytesStart::new("sitemapindex");
    root.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    write_start(&mut writer, root)?;

    for entry in entries {
        write_start(&mut writer, BytesStart::new("sitemap"))?;
        write_text_element(&mut writer, "loc", &entry.url)?;
        if let Some(last_modified) = entry.last_modified {
            write_text_element(&mut writer, "lastmod", &format_timestamp(last_modified)?)?;
        }
        write_end(&mut writer, "sitemap")?;
    }

    write_end(&mut writer, "sitemapindex")?;
    Ok(writer.into_inner())
}
