//! Localized static landing site: one page per locale from a placeholder
//! template, plus sitemap and robots files.

pub mod builder;
pub mod config;
pub mod flatten;
pub mod locale;
pub mod locales;
pub mod sitemap;
pub mod template;

pub use builder::{build_site, discover_locales, resolve_root_locale, BuildReport, BuildStage};
pub use config::{SiteConfig, SitemapSettings};
pub use flatten::flatten;
pub use locale::{resolve_language, Language, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
pub use locales::sync_locale_bundle;
pub use template::render_page;
