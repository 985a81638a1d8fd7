use crate::entry::Entry;

/// Plain text formatter: one URL per line
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn convert(&self, entries: &[Entry]) -> Vec<u8> {
        convert_to_text(entries)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render each entry URL on its own newline-terminated line
pub fn convert_to_text(entries: &[Entry]) -> Vec<u8> {
    let mut output = String::with_capacity(entries.iter().map(|e| e.url.len() + 1).sum());

    for entry in entries {
        output.push_str(&entry.url);
        output.push('\n');
    }

    output.into_bytes()
}
