use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BASE_URL, SPA_ROOT_MARKER};
use crate::error::Result;

use super::locale::DEFAULT_LANGUAGE;

/// Settings for the landing-site build. Every field has a default, so an
/// empty `site.toml` is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Build output directory; the SPA build is expected here too.
    pub dist_dir: PathBuf,
    /// Directory of `<locale>.json` translation files.
    pub locales_dir: PathBuf,
    /// Source HTML with `%key%` placeholders.
    pub template: PathBuf,
    pub base_url: String,
    /// Locale whose page also becomes the site root.
    pub default_locale: String,
    /// Subdirectory the single-page app is moved into.
    pub app_dir: String,
    pub app_root_marker: String,
    /// Sitemap `<lastmod>` date; today when unset.
    pub lastmod: Option<NaiveDate>,
    pub sitemap: SitemapSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("dist"),
            locales_dir: PathBuf::from("locales/landing"),
            template: PathBuf::from("index.html"),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_locale: DEFAULT_LANGUAGE.to_string(),
            app_dir: "app".to_string(),
            app_root_marker: SPA_ROOT_MARKER.to_string(),
            lastmod: None,
            sitemap: SitemapSettings::default(),
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapSettings {
    pub changefreq: String,
    pub root_priority: f64,
    pub app_priority: f64,
    pub locale_priority: f64,
}

impl Default for SitemapSettings {
    fn default() -> Self {
        Self {
            changefreq: "weekly".to_string(),
            root_priority: 1.0,
            app_priority: 0.8,
            locale_priority: 0.9,
        }
    }
}
