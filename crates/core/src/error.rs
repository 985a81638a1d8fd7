//! Error types for sitemap operations.
//!
//! This module defines the main error type [`SitemapError`] which represents
//! every failure that can occur while validating entries, filling a builder,
//! or rendering a document.
//!
//! # Example
//!
//! ```rust
//! use sitemap_core::{ChangeFrequency, Sitemap, SitemapError};
//!
//! let mut sitemap = Sitemap::new();
//! match sitemap.add("ftp://example.com/", None, 0.5, ChangeFrequency::Daily) {
//!     Err(SitemapError::InvalidUrl { url, .. }) => println!("rejected {url}"),
//!     Err(e) => println!("Error: {e}"),
//!     Ok(()) => {}
//! }
//! ```

use thiserror::Error;

/// Main error type for sitemap building and rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SitemapError {
    /// URL failed validation.
    ///
    /// Returned when a URL is empty, malformed, uses a scheme other than
    /// `http`/`https`, or has no host.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Priority outside the inclusive range `0.0..=1.0` (NaN included).
    #[error("Invalid priority {0}: must be between 0.0 and 1.0")]
    InvalidPriority(f64),

    /// Adding another entry would exceed the configured ceiling.
    #[error("Capacity exceeded: at most {max} URLs are allowed")]
    CapacityExceeded { max: usize },

    /// A renderer could not encode the document.
    ///
    /// Not expected under valid input, but surfaced as a value rather than a panic.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// The document type cannot be rendered in the requested format.
    #[error("Format '{format}' is not supported for this document")]
    UnsupportedFormat { format: &'static str },

    /// A generator signalled that it has no document to offer.
    #[error("No document was generated")]
    NoDocument,
}

impl SitemapError {
    pub(crate) fn invalid_url(url: &str, reason: impl Into<String>) -> Self {
        SitemapError::InvalidUrl { url: url.to_string(), reason: reason.into() }
    }

    pub(crate) fn serialization(err: impl std::fmt::Display) -> Self {
        SitemapError::Serialization(err.to_string())
    }
}

/// Result type alias for SitemapError.
///
/// This is a convenience alias for `std::result::Result<T, SitemapError>`.
pub type Result<T> = std::result::Result<T, SitemapError>;
