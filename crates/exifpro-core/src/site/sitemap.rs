use chrono::NaiveDate;

use super::config::SitemapSettings;

fn url_entry(loc: &str, lastmod: &str, changefreq: &str, priority: f64) -> String {
    format!(
        "\n    <url>\n        <loc>{loc}</loc>\n        <lastmod>{lastmod}</lastmod>\n        <changefreq>{changefreq}</changefreq>\n        <priority>{priority:.1}</priority>\n    </url>"
    )
}

/// `sitemap.xml` listing the root, the app and every locale page.
pub fn render_sitemap(
    base_url: &str,
    app_dir: &str,
    locales: &[String],
    lastmod: NaiveDate,
    settings: &SitemapSettings,
) -> String {
    let base = base_url.trim_end_matches('/');
    let date = lastmod.format("%Y-%m-%d").to_string();
    let freq = settings.changefreq.as_str();

    let mut urls = vec![
        url_entry(&format!("{base}/"), &date, freq, settings.root_priority),
        url_entry(&format!("{base}/{}/", app_dir.trim_matches('/')), &date, freq, settings.app_priority),
    ];
    urls.extend(
        locales
            .iter()
            .map(|loc| url_entry(&format!("{base}/{loc}/"), &date, freq, settings.locale_priority)),
    );

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>",
        urls.concat()
    )
}

pub fn render_robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}
