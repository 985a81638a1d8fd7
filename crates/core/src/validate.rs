//! URL and priority validation.
//!
//! Every sitemap and index entry passes through [`validate_url`] before it is
//! stored. Image and video URLs are accepted as given.

use url::Url;

use crate::{Result, SitemapError};

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Checks that `raw` is an absolute `http`/`https` URL with a non-empty host.
///
/// Query strings, fragments, explicit ports and paths are all permitted.
///
/// # Example
///
/// ```rust
/// use sitemap_core::validate_url;
///
/// assert!(validate_url("https://example.com:8080/path?q=1#top").is_ok());
/// assert!(validate_url("/relative/path").is_err());
/// ```
pub fn validate_url(raw: &str) -> Result<Url> {
    if raw.is_empty() {
        return Err(SitemapError::invalid_url(raw, "URL is empty"));
    }
    if raw.chars().any(|c| c.is_ascii_whitespace() || c.is_control()) {
        return Err(SitemapError::invalid_url(raw, "URL contains whitespace or control characters"));
    }

    let parsed = Url::parse(raw).map_err(|e| SitemapError::invalid_url(raw, e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(SitemapError::invalid_url(
            raw,
            format!("scheme '{}' is not http or https", parsed.scheme()),
        ));
    }

    if raw_authority(raw).is_none() {
        return Err(SitemapError::invalid_url(raw, "URL has no '//' authority"));
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(SitemapError::invalid_url(raw, "URL has no host")),
    }
}

/// Authority as written in `raw`: the non-empty text between `scheme://` and
/// the first `/`, `?` or `#`.
///
/// `Url::parse` repairs inputs such as `http:example.com`, so the raw text is
/// checked separately from the parsed value.
fn raw_authority(raw: &str) -> Option<&str> {
    let (_, rest) = raw.split_once(':')?;
    let rest = rest.strip_prefix("//")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end]).filter(|authority| !authority.is_empty())
}

/// Checks that `priority` lies in `0.0..=1.0`.
pub fn validate_priority(priority: f64) -> Result<()> {
    if (0.0..=1.0).contains(&priority) { Ok(()) } else { Err(SitemapError::InvalidPriority(priority)) }
}
