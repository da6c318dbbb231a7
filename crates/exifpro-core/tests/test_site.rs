use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::json;

use exifpro_core::error::ExifProError;
use exifpro_core::site::locale::{find_language, supported_codes};
use exifpro_core::site::template::{hreflang_links, set_html_lang};
use exifpro_core::site::{
    build_site, render_page, resolve_language, resolve_root_locale, sync_locale_bundle,
    BuildStage, SiteConfig,
    DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES,
};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>%meta.title%</title>
</head>
<body><h1>%meta.title%</h1><a href="%urls.app%">%nav.cta%</a></body>
</html>"#;

fn site_fixture(root: &Path) -> SiteConfig {
    let config = SiteConfig {
        dist_dir: root.join("dist"),
        locales_dir: root.join("locales"),
        template: root.join("index.html"),
        base_url: "https://example.test/".to_string(),
        lastmod: NaiveDate::from_ymd_opt(2025, 3, 14),
        ..SiteConfig::default()
    };
    fs::create_dir_all(&config.dist_dir).unwrap();
    fs::create_dir_all(&config.locales_dir).unwrap();
    fs::write(&config.template, TEMPLATE).unwrap();

    for (code, title, cta) in [("en", "Exif Pro", "Launch"), ("zh-CN", "照片元数据", "启动"), ("ja", "Exif プロ", "起動")] {
        let body = json!({
            "meta": { "title": title },
            "nav": { "cta": cta },
            "urls": { "app": format!("/app/?lang={code}") },
        });
        fs::write(config.locales_dir.join(format!("{code}.json")), body.to_string()).unwrap();
    }
    fs::write(config.locales_dir.join("notes.txt"), "ignored").unwrap();
    config
}

#[test]
fn test_build_site_writes_every_locale() {
    let dir = tempfile::tempdir().unwrap();
    let config = site_fixture(dir.path());

    let mut stages = Vec::new();
    let report = build_site(&config, |stage, _| stages.push(stage)).unwrap();

    assert_eq!(report.locales, ["en", "ja", "zh-CN"]);
    assert_eq!(report.pages.len(), 3);
    assert!(report.root_written);
    assert!(report.app_moved_to.is_none());
    assert!(stages.contains(&BuildStage::Rendering));

    let ja = fs::read_to_string(config.dist_dir.join("ja/index.html")).unwrap();
    assert!(ja.contains("<html lang=\"ja\">"));
    assert!(ja.contains("<title>Exif プロ</title>"));
    assert!(ja.contains("<h1>Exif プロ</h1>"));
    assert!(ja.contains("href=\"/app/?lang=ja\""));
    assert!(ja.contains("<link rel=\"alternate\" hreflang=\"zh-CN\" href=\"https://example.test/zh-CN/\" />"));
    assert!(ja.contains("hreflang=\"x-default\" href=\"https://example.test/\" />\n</head>"));
    assert!(!ja.contains('%'));

    let root = fs::read_to_string(config.dist_dir.join("index.html")).unwrap();
    assert!(root.contains("<html lang=\"zh-CN\">"));
}

#[test]
fn test_spa_index_moved_to_app() {
    let dir = tempfile::tempdir().unwrap();
    let config = site_fixture(dir.path());
    let spa = "<html><body><div id=\"root\"></div></body></html>";
    fs::write(config.dist_dir.join("index.html"), spa).unwrap();

    let report = build_site(&config, |_, _| {}).unwrap();

    let moved = config.dist_dir.join("app/index.html");
    assert_eq!(report.app_moved_to.as_deref(), Some(moved.as_path()));
    assert_eq!(fs::read_to_string(moved).unwrap(), spa);
}

#[test]
fn test_landing_index_not_moved() {
    let dir = tempfile::tempdir().unwrap();
    let config = site_fixture(dir.path());
    fs::write(config.dist_dir.join("index.html"), "<html><body>landing</body></html>").unwrap();

    let report = build_site(&config, |_, _| {}).unwrap();
    assert!(report.app_moved_to.is_none());
    assert!(!config.dist_dir.join("app").exists());
}

#[test]
fn test_sitemap_and_robots() {
    let dir = tempfile::tempdir().unwrap();
    let config = site_fixture(dir.path());
    let report = build_site(&config, |_, _| {}).unwrap();

    let sitemap = fs::read_to_string(&report.sitemap).unwrap();
    assert!(sitemap.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(sitemap.contains("<loc>https://example.test/</loc>"));
    assert!(sitemap.contains("<priority>1.0</priority>"));
    assert!(sitemap.contains("<loc>https://example.test/app/</loc>"));
    assert!(sitemap.contains("<priority>0.8</priority>"));
    assert!(sitemap.contains("<loc>https://example.test/ja/</loc>"));
    assert_eq!(sitemap.matches("<priority>0.9</priority>").count(), 3);
    assert_eq!(sitemap.matches("<lastmod>2025-03-14</lastmod>").count(), 5);
    assert_eq!(sitemap.matches("<changefreq>weekly</changefreq>").count(), 5);

    let robots = fs::read_to_string(&report.robots).unwrap();
    assert_eq!(robots, "User-agent: *\nAllow: /\n\nSitemap: https://example.test/sitemap.xml\n");
}

#[test]
fn test_missing_template() {
    let dir = tempfile::tempdir().unwrap();
    let config = site_fixture(dir.path());
    fs::remove_file(&config.template).unwrap();
    let err = build_site(&config, |_, _| {}).unwrap_err();
    assert!(matches!(err, ExifProError::MissingTemplate(_)));
}

#[test]
fn test_no_locales() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = site_fixture(dir.path());
    config.locales_dir = dir.path().join("empty");
    fs::create_dir_all(&config.locales_dir).unwrap();
    let err = build_site(&config, |_, _| {}).unwrap_err();
    assert!(matches!(err, ExifProError::NoLocales(_)));
}

#[test]
fn test_invalid_locale_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = site_fixture(dir.path());
    fs::write(config.locales_dir.join("de.json"), "{ not json").unwrap();
    let err = build_site(&config, |_, _| {}).unwrap_err();
    assert!(matches!(err, ExifProError::InvalidLocale { .. }));
}

#[test]
fn test_render_page_replaces_all_occurrences() {
    let flat = vec![("meta.title".to_string(), "T".to_string())];
    let html = render_page(TEMPLATE, &flat, "fr", &["fr".to_string()], "https://x.test");
    assert_eq!(html.matches("<title>T</title>").count(), 1);
    assert_eq!(html.matches("<h1>T</h1>").count(), 1);
    // Unknown placeholders are left alone.
    assert!(html.contains("%nav.cta%"));
}

#[test]
fn test_hreflang_block_layout() {
    let links = hreflang_links(&["en".to_string(), "ja".to_string()], "https://x.test/");
    assert_eq!(
        links,
        "<link rel=\"alternate\" hreflang=\"en\" href=\"https://x.test/en/\" />\n    \
         <link rel=\"alternate\" hreflang=\"ja\" href=\"https://x.test/ja/\" />\n    \
         <link rel=\"alternate\" hreflang=\"x-default\" href=\"https://x.test/\" />"
    );
}

#[test]
fn test_html_without_lang_unchanged() {
    assert_eq!(set_html_lang("<html><head>", "de"), "<html><head>");
}

#[test]
fn test_sync_locale_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = json!({
        "en": { "meta": { "title": "Exif Pro" }, "urls": { "app": "/wrong" }, "footer": {} },
        "de": { "meta": { "title": "Exif Pro" }, "footer": { "cross_link_url": "stale" } },
    });
    let written = sync_locale_bundle(
        &bundle,
        dir.path(),
        &["en", "de", "fr"],
        "https://wallpaper.test/",
    )
    .unwrap();
    assert_eq!(written.len(), 2);
    assert!(!dir.path().join("fr.json").exists());

    let en: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("en.json")).unwrap()).unwrap();
    assert_eq!(en["urls"]["app"], "/app/?lang=en");
    assert_eq!(en["footer"]["cross_link_url"], "https://wallpaper.test/");

    let de: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("de.json")).unwrap()).unwrap();
    assert_eq!(de["urls"]["app"], "/app/?lang=de");
    assert_eq!(de["footer"]["cross_link_url"], "https://wallpaper.test/de/");
    assert_eq!(de["meta"]["title"], "Exif Pro");
}

#[test]
fn test_resolve_language_precedence() {
    let available = supported_codes();
    assert_eq!(resolve_language(Some("ja"), Some("de"), &available), "ja");
    assert_eq!(resolve_language(Some("xx"), Some("de"), &available), "de");
    assert_eq!(resolve_language(None, None, &available), DEFAULT_LANGUAGE);
    assert_eq!(resolve_language(Some("xx"), Some("yy"), &available), "zh-CN");
}

#[test]
fn test_root_locale_prefers_request_then_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = site_fixture(dir.path());

    assert_eq!(resolve_root_locale(&config, Some("ja")).unwrap(), "ja");
    assert_eq!(resolve_root_locale(&config, Some("de")).unwrap(), "zh-CN");

    config.default_locale = "en".to_string();
    assert_eq!(resolve_root_locale(&config, None).unwrap(), "en");
    assert_eq!(resolve_root_locale(&config, Some("xx")).unwrap(), "en");

    config.default_locale = "fr".to_string();
    assert_eq!(resolve_root_locale(&config, None).unwrap(), DEFAULT_LANGUAGE);

    config.default_locale = resolve_root_locale(&config, Some("ja")).unwrap();
    build_site(&config, |_, _| {}).unwrap();
    let root = fs::read_to_string(config.dist_dir.join("index.html")).unwrap();
    assert!(root.contains("Exif プロ"));
}

#[test]
fn test_root_locale_needs_locale_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = SiteConfig {
        locales_dir: dir.path().join("missing"),
        ..SiteConfig::default()
    };
    assert!(matches!(
        resolve_root_locale(&config, Some("en")),
        Err(ExifProError::NoLocales(_))
    ));
}

#[test]
fn test_supported_languages() {
    assert_eq!(SUPPORTED_LANGUAGES.len(), 18);
    assert_eq!(find_language("ko").map(|l| l.name), Some("한국어"));
    assert!(find_language("xx").is_none());
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = SiteConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let back: SiteConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);

    let partial: SiteConfig = toml::from_str("base_url = \"https://x.test\"").unwrap();
    assert_eq!(partial.base_url, "https://x.test");
    assert_eq!(partial.default_locale, DEFAULT_LANGUAGE);
}
