//! Sample documents served by the `sitemap-server` binary.

use std::sync::Arc;

use sitemap_core::{ChangeFrequency, EntryExtras, Image, Index, News, Sitemap, Video};
use time::OffsetDateTime;

use crate::routes::Generator;

/// Builds a small site rooted at `base_url` that exercises every extension.
pub fn sitemap(base_url: &str) -> Option<Sitemap> {
    let now = OffsetDateTime::now_utc();
    let mut sitemap = Sitemap::new();

    sitemap
        .add_with(
            format!("{}/", base_url),
            Some(now),
            1.0,
            ChangeFrequency::Daily,
            EntryExtras::new().title("Home"),
        )
        .ok()?;
    sitemap
        .add(format!("{}/about", base_url), None, 0.5, ChangeFrequency::Monthly)
        .ok()?;
    sitemap
        .add_with(
            format!("{}/gallery", base_url),
            Some(now),
            0.7,
            ChangeFrequency::Weekly,
            EntryExtras::new().title("Gallery").images(vec![
                Image::new(format!("{}/images/harbor.jpg", base_url))
                    .with_title("Harbor")
                    .with_caption("The harbor at dawn"),
            ]),
        )
        .ok()?;
    sitemap
        .add_with(
            format!("{}/videos/intro", base_url),
            Some(now),
            0.6,
            ChangeFrequency::Monthly,
            EntryExtras::new().videos(vec![
                Video::new(format!("{}/videos/intro.jpg", base_url), "Introduction", "A short tour of the site")
                    .with_content_url(format!("{}/videos/intro.mp4", base_url))
                    .with_duration(95),
            ]),
        )
        .ok()?;
    sitemap
        .add_with(
            format!("{}/news/launch", base_url),
            Some(now),
            0.8,
            ChangeFrequency::Hourly,
            EntryExtras::new()
                .title("Launch")
                .news(News::new("Example News", "en", now, "We launched").with_keywords("launch, release")),
        )
        .ok()?;

    Some(sitemap)
}

/// Index pointing at the sitemaps this server exposes.
pub fn index(base_url: &str) -> Option<Index> {
    let now = OffsetDateTime::now_utc();
    let mut index = Index::new();

    index.add(format!("{}/sitemap.xml", base_url), Some(now)).ok()?;
    index.add(format!("{}/sitemap-news.xml", base_url), Some(now)).ok()?;
    index.add(format!("{}/sitemap-mobile.xml", base_url), None).ok()?;

    Some(index)
}

pub fn sitemap_generator(base_url: &str) -> Generator<Sitemap> {
    let base_url = base_url.to_string();
    Arc::new(move || sitemap(&base_url))
}

pub fn index_generator(base_url: &str) -> Generator<Index> {
    let base_url = base_url.to_string();
    Arc::new(move || index(&base_url))
}
