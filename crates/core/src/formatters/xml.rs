//! `<urlset>` renderers: standard, Google News and mobile.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::entry::{Entry, Image, News, Video};
use crate::formatters::{format_priority, format_timestamp, sanitize_text};
use crate::{Result, SitemapError};

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const IMAGE_NAMESPACE: &str = "http://www.google.com/schemas/sitemap-image/1.1";
pub const VIDEO_NAMESPACE: &str = "http://www.google.com/schemas/sitemap-video/1.1";
pub const NEWS_NAMESPACE: &str = "http://www.google.com/schemas/sitemap-news/0.9";
pub const MOBILE_NAMESPACE: &str = "http://www.google.com/schemas/sitemap-mobile/1.0";

/// Which `<urlset>` variant to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XmlFlavor {
    /// Every entry, with image and video blocks.
    #[default]
    Standard,
    /// Only entries carrying news metadata, each with a `<news:news>` block.
    GoogleNews,
    /// Every entry, each tagged `<mobile:mobile/>`.
    Mobile,
}

/// Configuration for XML output
#[derive(Debug, Clone)]
pub struct XmlConfig {
    pub flavor: XmlFlavor,
    /// Indent nested elements by two spaces
    pub pretty: bool,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self { flavor: XmlFlavor::Standard, pretty: true }
    }
}

/// XML formatter with configurable flavor
pub struct XmlFormatter {
    config: XmlConfig,
}

impl XmlFormatter {
    pub fn new(config: XmlConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, entries: &[Entry]) -> Result<Vec<u8>> {
        convert_to_xml(entries, &self.config)
    }
}

pub(crate) type XmlWriter = Writer<Vec<u8>>;

pub(crate) fn new_writer(pretty: bool) -> XmlWriter {
    if pretty { Writer::new_with_indent(Vec::new(), b' ', 2) } else { Writer::new(Vec::new()) }
}

pub(crate) fn write_declaration(writer: &mut XmlWriter) -> Result<()> {
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(SitemapError::serialization)
}

pub(crate) fn write_start(writer: &mut XmlWriter, element: BytesStart<'_>) -> Result<()> {
    writer.write_event(Event::Start(element)).map_err(SitemapError::serialization)
}

pub(crate) fn write_end(writer: &mut XmlWriter, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name))).map_err(SitemapError::serialization)
}

/// Writes `<name>text</name>` with the text sanitized and escaped.
pub(crate) fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    let text = sanitize_text(text);
    write_start(writer, BytesStart::new(name))?;
    writer.write_event(Event::Text(BytesText::new(&text))).map_err(SitemapError::serialization)?;
    write_end(writer, name)
}

fn write_optional_element(writer: &mut XmlWriter, name: &str, text: Option<&str>) -> Result<()> {
    match text {
        Some(text) if !text.is_empty() => write_text_element(writer, name, text),
        _ => Ok(()),
    }
}

/// Render entries as a `<urlset>` document.
pub fn convert_to_xml(entries: &[Entry], config: &XmlConfig) -> Result<Vec<u8>> {
    let mut writer = new_writer(config.pretty);
    write_declaration(&mut writer)?;

    let mut root = BytesStart::new("urlset");
    root.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    root.push_attribute(("xmlns:image", IMAGE_NAMESPACE));
    root.push_attribute(("xmlns:video", VIDEO_NAMESPACE));
    root.push_attribute(("xmlns:news", NEWS_NAMESPACE));
    if config.flavor == XmlFlavor::Mobile {
        root.push_attribute(("xmlns:mobile", MOBILE_NAMESPACE));
    }
    write_start(&mut writer, root)?;

    let included = entries
        .iter()
        .filter(|entry| config.flavor != XmlFlavor::GoogleNews || entry.is_news());
    for entry in included {
        write_url(&mut writer, entry, config.flavor)?;
    }

    write_end(&mut writer, "urlset")?;
    Ok(writer.into_inner())
}

fn write_url(writer: &mut XmlWriter, entry: &Entry, flavor: XmlFlavor) -> Result<()> {
    write_start(writer, BytesStart::new("url"))?;
    write_text_element(writer, "loc", &entry.url)?;
    if let Some(last_modified) = entry.last_modified {
        write_text_element(writer, "lastmod", &format_timestamp(last_modified)?)?;
    }
    write_text_element(writer, "changefreq", entry.change_frequency.as_str())?;
    write_text_element(writer, "priority", &format_priority(entry.priority))?;

    for image in &entry.images {
        write_image(writer, image)?;
    }
    for video in &entry.videos {
        write_video(writer, video)?;
    }

    match flavor {
        XmlFlavor::GoogleNews => {
            if let Some(news) = &entry.news {
                write_news(writer, news)?;
            }
        }
        XmlFlavor::Mobile => {
            writer
                .write_event(Event::Empty(BytesStart::new("mobile:mobile")))
                .map_err(SitemapError::serialization)?;
        }
        XmlFlavor::Standard => {}
    }

    write_end(writer, "url")
}

fn write_image(writer: &mut XmlWriter, image: &Image) -> Result<()> {
    write_start(writer, BytesStart::new("image:image"))?;
    write_text_element(writer, "image:loc", &image.url)?;
    write_optional_element(writer, "image:title", image.title.as_deref())?;
    write_optional_element(writer, "image:caption", image.caption.as_deref())?;
    write_end(writer, "image:image")
}

fn write_video(writer: &mut XmlWriter, video: &Video) -> Result<()> {
    write_start(writer, BytesStart::new("video:video"))?;
    write_text_element(writer, "video:thumbnail_loc", &video.thumbnail_url)?;
    write_text_element(writer, "video:title", &video.title)?;
    write_text_element(writer, "video:description", &video.description)?;
    write_optional_element(writer, "video:content_loc", video.content_url.as_deref())?;
    if let Some(duration) = video.duration {
        write_text_element(writer, "video:duration", &duration.to_string())?;
    }
    write_end(writer, "video:video")
}

fn write_news(writer: &mut XmlWriter, news: &News) -> Result<()> {
    write_start(writer, BytesStart::new("news:news"))?;
    write_start(writer, BytesStart::new("news:publication"))?;
    write_text_element(writer, "news:name", &news.site_name)?;
    write_text_element(writer, "news:language", &news.language)?;
    write_end(writer, "news:publication")?;
    write_text_element(
        writer,
        "news:publication_date",
        &format_timestamp(news.publication_date)?,
    )?;
    write_text_element(writer, "news:title", &news.title)?;
    write_optional_element(writer, "news:keywords", news.keywords())?;
    write_end(writer, "news:news")
}
