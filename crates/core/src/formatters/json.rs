use crate::entry::Entry;
use crate::{Result, SitemapError};
use serde::Serialize;

/// Complete JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Number of entries in `urls`
    pub count: usize,
    /// Entries in insertion order
    pub urls: &'a [Entry],
}

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Convert entries to a JSON summary
pub fn convert_to_json(entries: &[Entry], config: &JsonConfig) -> Result<Vec<u8>> {
    let output = JsonOutput { count: entries.len(), urls: entries };

    if config.pretty {
        serde_json::to_vec_pretty(&output).map_err(SitemapError::serialization)
    } else {
        serde_json::to_vec(&output).map_err(SitemapError::serialization)
    }
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, entries: &[Entry]) -> Result<Vec<u8>> {
        convert_to_json(entries, &self.config)
    }
}
