use quick_xml::escape::escape;

use crate::Result;
use crate::entry::{Entry, Image, News, Video};
use crate::formatters::{format_priority, format_timestamp, sanitize_text};

const STYLE: &str = "body{font-family:-apple-system,BlinkMacSystemFont,\"Segoe UI\",Roboto,sans-serif;\
margin:2rem;color:#222}h1{font-size:1.6rem}.stats{background:#f4f4f4;padding:.5rem 1rem;border-radius:4px}\
.urls{list-style:none;padding:0}.url{border-bottom:1px solid #ddd;padding:.75rem 0}\
.title{font-weight:600}.meta{color:#666;font-size:.85rem}.images,.videos,.news{margin:.5rem 0 0 1rem;font-size:.9rem}";

/// Configuration for the HTML report
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Used for both `<title>` and the page heading
    pub page_title: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self { page_title: "Sitemap".to_string() }
    }
}

/// HTML report formatter
pub struct HtmlFormatter {
    config: HtmlConfig,
}

impl HtmlFormatter {
    pub fn new(config: HtmlConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, entries: &[Entry]) -> Result<Vec<u8>> {
        convert_to_html(entries, &self.config)
    }
}

/// Render a self-contained HTML page listing every entry
pub fn convert_to_html(entries: &[Entry], config: &HtmlConfig) -> Result<Vec<u8>> {
    let title = escape_text(config.page_title.as_str());
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", title));
    html.push_str(&format!(
        "<div class=\"stats\"><p><strong>Total URLs:</strong> {}</p></div>\n",
        entries.len()
    ));

    html.push_str("<ul class=\"urls\">\n");
    for entry in entries {
        html.push_str(&entry_block(entry)?);
    }
    html.push_str("</ul>\n</body>\n</html>\n");

    Ok(html.into_bytes())
}

fn escape_text(text: &str) -> String {
    escape(sanitize_text(text).as_ref()).into_owned()
}

fn entry_block(entry: &Entry) -> Result<String> {
    let url = escape_text(entry.url.as_str());
    let mut block = String::from("<li class=\"url\">\n");

    block.push_str(&format!("<a href=\"{0}\">{0}</a>\n", url));
    if let Some(title) = &entry.title {
        block.push_str(&format!("<div class=\"title\">{}</div>\n", escape_text(title.as_str())));
    }

    let mut meta = Vec::new();
    if let Some(last_modified) = entry.last_modified {
        meta.push(format!("Last modified: {}", format_timestamp(last_modified)?));
    }
    meta.push(format!("Change frequency: {}", entry.change_frequency));
    meta.push(format!("Priority: {}", format_priority(entry.priority)));
    block.push_str(&format!("<div class=\"meta\">{}</div>\n", meta.join(" | ")));

    if !entry.images.is_empty() {
        block.push_str(&images_block(&entry.images));
    }
    if !entry.videos.is_empty() {
        block.push_str(&videos_block(&entry.videos));
    }
    if let Some(news) = &entry.news {
        block.push_str(&news_block(news)?);
    }

    block.push_str("</li>\n");
    Ok(block)
}

fn images_block(images: &[Image]) -> String {
    let mut block = String::from("<div class=\"images\"><strong>Images:</strong>\n<ul>\n");

    for image in images {
        let mut parts = vec![format!("<a href=\"{0}\">{0}</a>", escape_text(image.url.as_str()))];
        if let Some(title) = image.title.as_deref().filter(|t| !t.is_empty()) {
            parts.push(escape_text(title));
        }
        if let Some(caption) = image.caption.as_deref().filter(|c| !c.is_empty()) {
            parts.push(format!("<em>{}</em>", escape_text(caption)));
        }
        block.push_str(&format!("<li>{}</li>\n", parts.join(" - ")));
    }

    block.push_str("</ul>\n</div>\n");
    block
}

fn videos_block(videos: &[Video]) -> String {
    let mut block = String::from("<div class=\"videos\"><strong>Videos:</strong>\n<ul>\n");

    for video in videos {
        block.push_str("<li>");
        block.push_str(&format!("<strong>{}</strong>", escape_text(video.title.as_str())));
        block.push_str(&format!(" - {}", escape_text(video.description.as_str())));
        block.push_str(&format!(
            "<br>Thumbnail: <a href=\"{0}\">{0}</a>",
            escape_text(video.thumbnail_url.as_str())
        ));
        if let Some(content_url) = video.content_url.as_deref().filter(|c| !c.is_empty()) {
            block.push_str(&format!("<br>Content: <a href=\"{0}\">{0}</a>", escape_text(content_url)));
        }
        if let Some(duration) = video.duration {
            block.push_str(&format!("<br>Duration: {} seconds", duration));
        }
        block.push_str("</li>\n");
    }

    block.push_str("</ul>\n</div>\n");
    block
}

fn news_block(news: &News) -> Result<String> {
    let mut block = String::from("<div class=\"news\"><strong>News:</strong>\n<ul>\n");

    block.push_str(&format!("<li>Site: {}</li>\n", escape_text(news.site_name.as_str())));
    block.push_str(&format!("<li>Language: {}</li>\n", escape_text(news.language.as_str())));
    block.push_str(&format!("<li>Published: {}</li>\n", format_timestamp(news.publication_date)?));
    block.push_str(&format!("<li>Title: {}</li>\n", escape_text(news.title.as_str())));
    if let Some(keywords) = news.keywords() {
        block.push_str(&format!("<li>Keywords: {}</li>\n", escape_text(keywords)));
    }

    block.push_str("</ul>\n</div>\n");
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ChangeFrequency;
    use time::macros::datetime;

    fn render(entries: &[Entry]) -> String {
        String::from_utf8(convert_to_html(entries, &HtmlConfig::default()).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_report() {
        let html = render(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Sitemap</title>"));
        assert!(html.contains("Total URLs:</strong> 0"));
    }

    #[test]
    fn test_report_with_title() {
        let entries = vec![Entry::new("https://example.com/", 1.0, ChangeFrequency::Daily).with_title("Homepage")];
        let html = render(&entries);

        assert!(html.contains("https://example.com/"));
        assert!(html.contains("<div class=\"title\">Homepage</div>"));
        assert!(html.contains("Total URLs:</strong> 1"));
        assert!(html.contains("Priority: 1.0"));
        assert!(html.contains("Change frequency: daily"));
    }

    #[test]
    fn test_report_escapes_text() {
        let entries = vec![
            Entry::new("https://example.com/?a=1&b=2", 0.5, ChangeFrequency::Weekly).with_title("<script>x</script>"),
        ];
        let html = render(&entries);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("https://example.com/?a=1&amp;b=2"));
    }

    #[test]
    fn test_report_nested_blocks() {
        let entry = Entry::new("https://example.com/complex", 0.9, ChangeFrequency::Weekly)
            .with_title("Complex Page")
            .with_image(Image::new("https://example.com/image1.jpg").with_title("Test Image 1").with_caption("A test image"))
            .with_video(
                Video::new("https://example.com/thumb1.jpg", "Test Video 1", "A test video description")
                    .with_content_url("https://example.com/video1.mp4")
                    .with_duration(120),
            )
            .with_news(
                News::new("Test News", "en", datetime!(2024-01-15 10:30 UTC), "Test Article").with_keywords("test, article"),
            );
        let html = render(&[entry]);

        assert!(html.contains("Test Image 1"));
        assert!(html.contains("A test image"));
        assert!(html.contains("Test Video 1"));
        assert!(html.contains("Duration: 120 seconds"));
        assert!(html.contains("Site: Test News"));
        assert!(html.contains("Keywords: test, article"));
        assert!(html.contains("Published: 2024-01-15T10:30:00Z"));
    }

    #[test]
    fn test_report_replaces_forbidden_characters() {
        let entries = vec![Entry::new("https://example.com/", 0.5, ChangeFrequency::Weekly).with_title("bad\u{1}title")];
        let html = render(&entries);

        assert!(!html.contains('\u{1}'));
        assert!(html.contains("bad\u{FFFD}title"));
    }

    #[test]
    fn test_custom_page_title() {
        let config = HtmlConfig { page_title: "Docs & Guides".to_string() };
        let html = String::from_utf8(HtmlFormatter::new(config).convert(&[]).unwrap()).unwrap();
        assert!(html.contains("<title>Docs &amp; Guides</title>"));
    }
}
