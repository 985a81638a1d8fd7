//! Library API integration tests
use rstest::rstest;
use sitemap_core::*;
use time::OffsetDateTime;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2024-06-01 12:00 UTC);

fn as_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("renderers emit UTF-8")
}

#[rstest]
#[case("https://example.com/path", true)]
#[case("http://example.com/path", true)]
#[case("https://example.com/path?param=value", true)]
#[case("https://example.com/path#section", true)]
#[case("https://example.com:8080/path", true)]
#[case("ftp://example.com/", false)]
#[case("example.com/path", false)]
#[case("", false)]
#[case("http://[::1:80", false)]
#[case("/relative/path", false)]
#[case("http:example.com", false)]
#[case("https:///path", false)]
#[case(" https://example.com/", false)]
#[case("http:\\\\example.com", false)]
#[case("https://example.com/a\nb", false)]
fn test_add_url_validation(#[case] url: &str, #[case] accepted: bool) {
    let mut sitemap = Sitemap::new();
    let result = sitemap.add(url, Some(NOW), 1.0, ChangeFrequency::Daily);

    assert_eq!(result.is_ok(), accepted, "{url}");
    if !accepted {
        assert!(matches!(result, Err(SitemapError::InvalidUrl { .. })));
        assert_eq!(sitemap.count(), 0);
    }
}

#[rstest]
#[case(0.0, true)]
#[case(1.0, true)]
#[case(0.5, true)]
#[case(-0.1, false)]
#[case(1.1, false)]
#[case(-1.0, false)]
#[case(2.0, false)]
fn test_add_priority_validation(#[case] priority: f64, #[case] accepted: bool) {
    let mut sitemap = Sitemap::new();
    let result = sitemap.add("https://example.com/", Some(NOW), priority, ChangeFrequency::Daily);

    assert_eq!(result.is_ok(), accepted, "{priority}");
    if !accepted {
        assert_eq!(result, Err(SitemapError::InvalidPriority(priority)));
    }
}

#[test]
fn test_count_after_adds_and_clear() {
    let mut sitemap = Sitemap::new();
    for i in 0..25 {
        sitemap.add(format!("https://example.com/page{i}"), Some(NOW), 0.5, ChangeFrequency::Weekly).unwrap();
    }
    assert_eq!(sitemap.count(), 25);

    sitemap.clear();
    assert_eq!(sitemap.count(), 0);
}

#[test]
fn test_xml_loc_count_matches_entries() {
    let mut sitemap = Sitemap::new();
    for i in 0..1000 {
        sitemap.add(format!("https://example.com/page{i}"), Some(NOW), 0.5, ChangeFrequency::Daily).unwrap();
    }

    let xml = as_string(sitemap.to_xml().unwrap());
    assert_eq!(xml.matches("<loc>").count(), sitemap.count());
}

#[test]
fn test_lastmod_presence_follows_timestamp() {
    let mut sitemap = Sitemap::new();
    sitemap.add("https://example.com/unset", None, 1.0, ChangeFrequency::Daily).unwrap();
    let xml = as_string(sitemap.to_xml().unwrap());
    assert!(!xml.contains("<lastmod>"));

    sitemap.add("https://example.com/set", Some(NOW), 1.0, ChangeFrequency::Daily).unwrap();
    let xml = as_string(sitemap.to_xml().unwrap());
    assert_eq!(xml.matches("<lastmod>").count(), 1);
    assert!(xml.contains("<lastmod>2024-06-01T12:00:00Z</lastmod>"));
}

#[test]
fn test_google_news_includes_only_news_entries() {
    let news = News::new("Test News Site", "en", NOW, "Breaking").with_keywords("news, breaking, test");
    let mut sitemap = Sitemap::new();
    sitemap.add("https://example.com/regular", Some(NOW), 1.0, ChangeFrequency::Daily).unwrap();
    sitemap
        .add_with(
            "https://example.com/news1",
            Some(NOW),
            1.0,
            ChangeFrequency::Daily,
            EntryExtras::new().news(news.clone()),
        )
        .unwrap();
    sitemap
        .add_with(
            "https://example.com/news2",
            Some(NOW),
            0.9,
            ChangeFrequency::Hourly,
            EntryExtras::new().news(News::new("Another News Site", "es", NOW, "Another Article")),
        )
        .unwrap();

    let xml = as_string(sitemap.to_google_news().unwrap());
    assert_eq!(xml.matches("<news:news>").count(), 2);
    assert!(!xml.contains("https://example.com/regular"));
    assert!(xml.contains("https://example.com/news1"));
    assert!(xml.contains("news, breaking, test"));
}

#[test]
fn test_google_news_empty_is_valid_document() {
    let xml = as_string(Sitemap::new().to_google_news().unwrap());
    assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains("</urlset>"));
}

#[test]
fn test_add_items_partial_success() {
    let mut sitemap = Sitemap::new();
    let result = sitemap.add_items(vec![
        Entry::new("https://example.com/1", 0.8, ChangeFrequency::Weekly),
        Entry::new("invalid-url", 0.8, ChangeFrequency::Weekly),
        Entry::new("https://example.com/3", 0.8, ChangeFrequency::Weekly),
    ]);

    assert!(result.is_err());
    assert_eq!(sitemap.count(), 1);
    assert_eq!(sitemap.items()[0].url, "https://example.com/1");
}

#[test]
fn test_max_urls_ceiling() {
    let mut sitemap = Sitemap::with_options(SitemapOptions::builder().max_urls(2).build());
    sitemap.add("https://example.com/1", Some(NOW), 1.0, ChangeFrequency::Daily).unwrap();
    sitemap.add("https://example.com/2", Some(NOW), 1.0, ChangeFrequency::Daily).unwrap();

    let third = sitemap.add("https://example.com/3", Some(NOW), 1.0, ChangeFrequency::Daily);
    assert_eq!(third, Err(SitemapError::CapacityExceeded { max: 2 }));
    assert_eq!(sitemap.count(), 2);
}

#[rstest]
#[case(1.0, "<priority>1.0</priority>")]
#[case(0.5, "<priority>0.5</priority>")]
#[case(0.0, "<priority>0.0</priority>")]
fn test_priority_one_decimal(#[case] priority: f64, #[case] expected: &str) {
    let mut sitemap = Sitemap::new();
    sitemap.add("https://example.com/", None, priority, ChangeFrequency::Daily).unwrap();
    assert!(as_string(sitemap.to_xml().unwrap()).contains(expected));
}

#[test]
fn test_change_frequency_rendered() {
    let mut sitemap = Sitemap::new();
    for (i, freq) in ChangeFrequency::ALL.into_iter().enumerate() {
        sitemap.add(format!("https://example.com/{i}"), None, 0.5, freq).unwrap();
    }

    let xml = as_string(sitemap.to_xml().unwrap());
    for freq in ChangeFrequency::ALL {
        assert!(xml.contains(&format!("<changefreq>{freq}</changefreq>")));
    }
}

#[test]
fn test_txt_lines_in_order() {
    let mut sitemap = Sitemap::new();
    let urls: Vec<String> = (0..100).map(|i| format!("https://example.com/page{i}")).collect();
    for url in &urls {
        sitemap.add(url.as_str(), Some(NOW), 1.0, ChangeFrequency::Daily).unwrap();
    }

    let txt = as_string(sitemap.to_txt().unwrap());
    let lines: Vec<&str> = txt.lines().collect();
    assert_eq!(lines, urls);
    assert!(txt.ends_with('\n'));
}

#[test]
fn test_mobile_keeps_all_entries() {
    let mut sitemap = Sitemap::new();
    sitemap.add("https://m.example.com/", Some(NOW), 1.0, ChangeFrequency::Daily).unwrap();
    sitemap.add("https://m.example.com/products", Some(NOW), 0.8, ChangeFrequency::Weekly).unwrap();

    let xml = as_string(sitemap.to_mobile().unwrap());
    assert!(xml.contains(r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#));
    assert!(xml.contains(r#"xmlns:mobile="http://www.google.com/schemas/sitemap-mobile/1.0""#));
    assert_eq!(xml.matches("<url>").count(), 2);
    assert_eq!(xml.matches("<mobile:mobile/>").count(), 2);
}

#[test]
fn test_html_and_json_reports() {
    let mut sitemap = Sitemap::new();
    sitemap
        .add_with(
            "https://example.com/",
            Some(NOW),
            1.0,
            ChangeFrequency::Daily,
            EntryExtras::new().title("Homepage"),
        )
        .unwrap();
    sitemap.add("https://example.com/about", Some(NOW), 0.8, ChangeFrequency::Weekly).unwrap();

    let html = as_string(sitemap.to_html().unwrap());
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Homepage"));
    assert!(html.contains("Total URLs:</strong> 2"));

    let json: serde_json::Value = serde_json::from_slice(&sitemap.to_json().unwrap()).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["urls"].as_array().unwrap().len(), 2);
}

#[test]
fn test_empty_news_record_still_counts() {
    let mut sitemap = Sitemap::new();
    sitemap
        .add_with(
            "https://example.com/",
            None,
            1.0,
            ChangeFrequency::Daily,
            EntryExtras::new().news(News::new("", "", NOW, "")),
        )
        .unwrap();

    assert!(sitemap.items()[0].news.is_some());
    let xml = as_string(sitemap.to_google_news().unwrap());
    assert_eq!(xml.matches("<news:news>").count(), 1);
}

#[test]
fn test_empty_extension_lists() {
    let mut sitemap = Sitemap::new();
    sitemap
        .add_with(
            "https://example.com/",
            None,
            1.0,
            ChangeFrequency::Daily,
            EntryExtras::new().images(Vec::new()).videos(Vec::new()),
        )
        .unwrap();

    let entry = &sitemap.items()[0];
    assert!(entry.images.is_empty());
    assert!(entry.videos.is_empty());
    assert!(!as_string(sitemap.to_xml().unwrap()).contains("image:image"));
}

#[test]
fn test_renders_are_repeatable() {
    let mut sitemap = Sitemap::new();
    sitemap.add("https://example.com/", Some(NOW), 1.0, ChangeFrequency::Daily).unwrap();

    assert_eq!(sitemap.to_xml().unwrap(), sitemap.to_xml().unwrap());
    assert_eq!(sitemap.count(), 1);
}

#[test]
fn test_index_xml() {
    let mut index = Index::new();
    index.add("https://example.com/sitemap1.xml", Some(NOW)).unwrap();
    index.add("https://example.com/sitemap2.xml", None).unwrap();

    let xml = as_string(index.to_xml().unwrap());
    assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains("<sitemapindex"));
    assert!(xml.contains(r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#));
    assert!(xml.contains("sitemap1.xml"));
    assert!(xml.contains("sitemap2.xml"));
    assert_eq!(xml.matches("<lastmod>").count(), 1);
    assert!(xml.contains("<lastmod>2024-06-01T12:00:00Z</lastmod>"));
}

#[rstest]
#[case("http:example.com")]
#[case("https:///path")]
#[case(" https://example.com/")]
#[case("http:\\\\example.com")]
#[case("https://example.com/a\nb")]
fn test_unnormalized_urls_never_reach_output(#[case] url: &str) {
    let mut sitemap = Sitemap::new();
    assert!(matches!(
        sitemap.add(url, None, 0.5, ChangeFrequency::Daily),
        Err(SitemapError::InvalidUrl { .. })
    ));
    sitemap.add("https://example.com/", None, 0.5, ChangeFrequency::Daily).unwrap();
    assert_eq!(as_string(sitemap.to_txt().unwrap()), "https://example.com/\n");

    let mut index = Index::new();
    assert!(matches!(index.add(url, None), Err(SitemapError::InvalidUrl { .. })));
    assert!(index.is_empty());
}

#[test]
fn test_index_rejects_bad_urls() {
    let mut index = Index::new();
    assert!(index.add("invalid-url", Some(NOW)).is_err());
    assert!(index.add("", Some(NOW)).is_err());
    assert!(index.add("ftp://example.com/sitemap.xml", Some(NOW)).is_err());
    assert!(index.add("https://example.com/sitemap1.xml", Some(NOW)).is_ok());
    assert_eq!(index.count(), 1);
}

#[test]
fn test_generate_document_contract() {
    let body = generate_document(
        || {
            let mut index = Index::new();
            index.add("https://example.com/sitemap.xml", None).ok()?;
            Some(index)
        },
        DocumentFormat::Xml,
    )
    .unwrap();
    assert!(as_string(body).contains("<sitemap>"));

    assert_eq!(
        generate_document(|| None::<Index>, DocumentFormat::Xml),
        Err(SitemapError::NoDocument)
    );
}

#[test]
fn test_manifest_round_trip_through_json() {
    let manifest = r#"[
        {"url": "https://example.com/", "priority": 1.0, "change_frequency": "daily", "title": "Home"},
        {"url": "https://example.com/blog", "last_modified": "2024-06-01T12:00:00Z", "priority": 0.6,
         "change_frequency": "weekly", "images": [{"url": "https://example.com/a.jpg", "title": "A"}]}
    ]"#;
    let entries: Vec<Entry> = serde_json::from_str(manifest).unwrap();
    let sitemap = Sitemap::from_entries(entries, SitemapOptions::default()).unwrap();

    assert_eq!(sitemap.count(), 2);
    assert_eq!(sitemap.items()[1].last_modified, Some(NOW));
    assert!(as_string(sitemap.to_xml().unwrap()).contains("<image:title>A</image:title>"));
}
