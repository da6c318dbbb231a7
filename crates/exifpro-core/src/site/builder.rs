use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info, warn};

use crate::error::{ExifProError, Result};

use super::config::SiteConfig;
use super::flatten::flatten;
use super::locale::resolve_language;
use super::sitemap::{render_robots, render_sitemap};
use super::template::render_page;

/// Site build stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildStage {
    RelocatingApp,
    ReadingTemplate,
    Rendering,
    WritingSitemap,
}

impl std::fmt::Display for BuildStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelocatingApp => write!(f, "Relocating app"),
            Self::ReadingTemplate => write!(f, "Reading template"),
            Self::Rendering => write!(f, "Rendering pages"),
            Self::WritingSitemap => write!(f, "Writing sitemap"),
        }
    }
}

/// What a site build produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuildReport {
    /// Where the SPA entry point was moved to, if it was found at the root.
    pub app_moved_to: Option<PathBuf>,
    pub locales: Vec<String>,
    pub pages: Vec<PathBuf>,
    /// Whether the root `index.html` was replaced by the default locale.
    pub root_written: bool,
    pub sitemap: PathBuf,
    pub robots: PathBuf,
}

/// Locale codes from `*.json` files in `dir`, sorted.
pub fn discover_locales(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(ExifProError::NoLocales(dir.to_path_buf()));
    }

    let mut locales: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == "json"))
        .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .collect();
    locales.sort();

    if locales.is_empty() {
        return Err(ExifProError::NoLocales(dir.to_path_buf()));
    }
    Ok(locales)
}

/// Locale that becomes the site root: `requested` first, then the
/// configured default, then the global default. Candidates without a
/// locale file are skipped.
pub fn resolve_root_locale(config: &SiteConfig, requested: Option<&str>) -> Result<String> {
    let discovered = discover_locales(&config.locales_dir)?;
    let available: Vec<&str> = discovered.iter().map(String::as_str).collect();
    let root = resolve_language(requested, Some(&config.default_locale), &available).to_string();

    if let Some(requested) = requested.filter(|r| *r != root) {
        warn!(requested, root = %root, "Requested root locale has no locale file");
    }
    Ok(root)
}

/// Move a built single-page app out of the site root so the root can host
/// the landing page. Returns the new location when a move happened.
pub fn relocate_app(config: &SiteConfig) -> Result<Option<PathBuf>> {
    let index = config.dist_dir.join("index.html");
    if !index.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(&index)?;
    if !content.contains(&config.app_root_marker) {
        return Ok(None);
    }

    let app_dir = config.dist_dir.join(&config.app_dir);
    fs::create_dir_all(&app_dir)?;
    let target = app_dir.join("index.html");
    fs::rename(&index, &target)?;
    info!(to = %target.display(), "Moved app entry point");
    Ok(Some(target))
}

fn load_locale(config: &SiteConfig, locale: &str) -> Result<Vec<(String, String)>> {
    let path = config.locales_dir.join(format!("{locale}.json"));
    let text = fs::read_to_string(&path)?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| ExifProError::InvalidLocale {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    if !value.is_object() {
        return Err(ExifProError::InvalidLocale {
            path,
            reason: "top level is not an object".to_string(),
        });
    }
    Ok(flatten(&value))
}

/// Build the localized landing site into `config.dist_dir`.
///
/// `on_progress` is called with (stage, fraction_complete) for UI updates.
pub fn build_site<F>(config: &SiteConfig, mut on_progress: F) -> Result<BuildReport>
where
    F: FnMut(BuildStage, f32),
{
    let mut report = BuildReport::default();

    on_progress(BuildStage::RelocatingApp, 0.0);
    report.app_moved_to = relocate_app(config)?;

    on_progress(BuildStage::ReadingTemplate, 0.0);
    if !config.template.is_file() {
        return Err(ExifProError::MissingTemplate(config.template.clone()));
    }
    let template = fs::read_to_string(&config.template)?;
    report.locales = discover_locales(&config.locales_dir)?;
    info!(locales = ?report.locales, "Found locales");

    let total = report.locales.len();
    for (i, locale) in report.locales.iter().enumerate() {
        on_progress(BuildStage::Rendering, i as f32 / total as f32);
        let flat = load_locale(config, locale)?;
        let html = render_page(&template, &flat, locale, &report.locales, config.base());

        let out_dir = config.dist_dir.join(locale);
        fs::create_dir_all(&out_dir)?;
        let page = out_dir.join("index.html");
        fs::write(&page, &html)?;
        debug!(locale = %locale, path = %page.display(), "Landing page written");
        report.pages.push(page);

        if *locale == config.default_locale {
            fs::write(config.dist_dir.join("index.html"), &html)?;
            report.root_written = true;
            info!(locale = %locale, "Root index.html updated");
        }
    }
    on_progress(BuildStage::Rendering, 1.0);

    on_progress(BuildStage::WritingSitemap, 0.0);
    let lastmod = config.lastmod.unwrap_or_else(|| Local::now().date_naive());
    let sitemap = render_sitemap(
        config.base(),
        &config.app_dir,
        &report.locales,
        lastmod,
        &config.sitemap,
    );
    report.sitemap = config.dist_dir.join("sitemap.xml");
    fs::write(&report.sitemap, sitemap)?;
    report.robots = config.dist_dir.join("robots.txt");
    fs::write(&report.robots, render_robots(config.base()))?;
    on_progress(BuildStage::WritingSitemap, 1.0);

    info!(pages = report.pages.len(), "Landing site built");
    Ok(report)
}
