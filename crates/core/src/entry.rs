//! Sitemap entry model.
//!
//! An [`Entry`] is one URL's record. Images, videos and news metadata are
//! owned by the entry that carries them and are each independently optional.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Result;
use crate::validate::{validate_priority, validate_url};

/// Expected update cadence of a URL.
///
/// Serialized as the lowercase protocol name (`"daily"`, `"weekly"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// All variants, from most to least frequent.
    pub const ALL: [ChangeFrequency; 7] = [
        ChangeFrequency::Always,
        ChangeFrequency::Hourly,
        ChangeFrequency::Daily,
        ChangeFrequency::Weekly,
        ChangeFrequency::Monthly,
        ChangeFrequency::Yearly,
        ChangeFrequency::Never,
    ];

    /// Protocol name used inside `<changefreq>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ChangeFrequency::ALL
            .into_iter()
            .find(|freq| freq.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid change frequency: {}. Valid options: always, hourly, daily, weekly, monthly, yearly, never",
                    s
                )
            })
    }
}

/// Image attached to an entry (Google image sitemap extension).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Image {
    /// Image location. Not validated.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Default::default() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Video attached to an entry (Google video sitemap extension).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Video {
    pub thumbnail_url: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl Video {
    pub fn new(thumbnail_url: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            thumbnail_url: thumbnail_url.into(),
            title: title.into(),
            description: description.into(),
            content_url: None,
            duration: None,
        }
    }

    pub fn with_content_url(mut self, content_url: impl Into<String>) -> Self {
        self.content_url = Some(content_url.into());
        self
    }

    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration = Some(seconds);
        self
    }
}

/// Google News publication metadata.
///
/// Its presence on an entry is what makes the entry appear in the news rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    pub site_name: String,
    pub language: String,
    #[serde(with = "crate::formatters::timestamp")]
    pub publication_date: OffsetDateTime,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl News {
    pub fn new(
        site_name: impl Into<String>, language: impl Into<String>, publication_date: OffsetDateTime,
        title: impl Into<String>,
    ) -> Self {
        Self {
            site_name: site_name.into(),
            language: language.into(),
            publication_date,
            title: title.into(),
            keywords: None,
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Keywords, treating an empty string the same as none.
    pub fn keywords(&self) -> Option<&str> {
        self.keywords.as_deref().filter(|k| !k.is_empty())
    }
}

/// One URL's sitemap record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Absolute `http`/`https` location.
    pub url: String,

    /// Last modification time; `None` omits `<lastmod>` from every rendering.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::formatters::timestamp::option")]
    pub last_modified: Option<OffsetDateTime>,

    /// Relative importance in `0.0..=1.0`.
    pub priority: f64,

    pub change_frequency: ChangeFrequency,

    /// Human-readable title. Only the HTML and JSON renderings use it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<Video>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<News>,
}

impl Entry {
    /// Creates an entry with no timestamp and no optional attributes.
    pub fn new(url: impl Into<String>, priority: f64, change_frequency: ChangeFrequency) -> Self {
        Self {
            url: url.into(),
            last_modified: None,
            priority,
            change_frequency,
            title: None,
            images: Vec::new(),
            videos: Vec::new(),
            news: None,
        }
    }

    pub fn with_last_modified(mut self, last_modified: OffsetDateTime) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.images.push(image);
        self
    }

    pub fn with_images(mut self, images: Vec<Image>) -> Self {
        self.images = images;
        self
    }

    pub fn with_video(mut self, video: Video) -> Self {
        self.videos.push(video);
        self
    }

    pub fn with_videos(mut self, videos: Vec<Video>) -> Self {
        self.videos = videos;
        self
    }

    pub fn with_news(mut self, news: News) -> Self {
        self.news = Some(news);
        self
    }

    /// Applies every attribute set on `extras`, leaving unset ones untouched.
    pub fn with_extras(mut self, extras: EntryExtras) -> Self {
        if extras.title.is_some() {
            self.title = extras.title;
        }
        if let Some(images) = extras.images {
            self.images = images;
        }
        if let Some(videos) = extras.videos {
            self.videos = videos;
        }
        if extras.news.is_some() {
            self.news = extras.news;
        }
        self
    }

    /// Whether this entry carries a news record.
    pub fn is_news(&self) -> bool {
        self.news.is_some()
    }

    /// Runs the entry-level checks: URL legality and priority bounds.
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.url)?;
        validate_priority(self.priority)
    }
}

/// Optional attributes accepted by [`Sitemap::add_with`](crate::Sitemap::add_with).
///
/// Each field is independent; unset fields leave the entry empty.
///
/// # Example
///
/// ```rust
/// use sitemap_core::{EntryExtras, Image};
///
/// let extras = EntryExtras::new()
///     .title("Homepage")
///     .images(vec![Image::new("https://example.com/hero.jpg")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryExtras {
    pub title: Option<String>,
    pub images: Option<Vec<Image>>,
    pub videos: Option<Vec<Video>>,
    pub news: Option<News>,
}

impl EntryExtras {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn images(mut self, images: Vec<Image>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn videos(mut self, videos: Vec<Video>) -> Self {
        self.videos = Some(videos);
        self
    }

    pub fn news(mut self, news: News) -> Self {
        self.news = Some(news);
        self
    }
}
