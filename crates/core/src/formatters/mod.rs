pub mod html;
pub mod index;
pub mod json;
pub mod text;
pub mod xml;

pub use html::{HtmlConfig, HtmlFormatter, convert_to_html};
pub use index::{IndexConfig, IndexFormatter, convert_index_to_xml};
pub use json::{JsonConfig, JsonFormatter, JsonOutput, convert_to_json};
pub use text::{TextFormatter, convert_to_text};
pub use xml::{XmlConfig, XmlFlavor, XmlFormatter, convert_to_xml};

use std::borrow::Cow;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::{Result, SitemapError};

/// Formats a timestamp as RFC 3339 with whole-second precision.
pub(crate) fn format_timestamp(timestamp: OffsetDateTime) -> Result<String> {
    timestamp
        .replace_nanosecond(0)
        .map_err(SitemapError::serialization)?
        .format(&Rfc3339)
        .map_err(SitemapError::serialization)
}

/// Serde adapter writing timestamps with the same whole-second precision as
/// the XML and HTML renderers. Input is read as any RFC 3339 value.
pub(crate) mod timestamp {
    use serde::{Serializer, ser::Error};
    use time::OffsetDateTime;

    pub(crate) use time::serde::rfc3339::deserialize;

    pub(crate) fn serialize<S: Serializer>(timestamp: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = super::format_timestamp(*timestamp).map_err(S::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub(crate) mod option {
        use serde::{Serialize, Serializer, ser::Error};
        use time::OffsetDateTime;

        pub(crate) use time::serde::rfc3339::option::deserialize;

        pub(crate) fn serialize<S: Serializer>(
            timestamp: &Option<OffsetDateTime>, serializer: S,
        ) -> Result<S::Ok, S::Error> {
            timestamp
                .map(crate::formatters::format_timestamp)
                .transpose()
                .map_err(S::Error::custom)?
                .serialize(serializer)
        }
    }
}

/// Replaces characters that XML 1.0 cannot carry with U+FFFD.
pub(crate) fn sanitize_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().map(|c| if is_xml_char(c) { c } else { '\u{FFFD}' }).collect())
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

/// Formats a priority with exactly one fractional digit.
pub(crate) fn format_priority(priority: f64) -> String {
    format!("{:.1}", priority)
}
