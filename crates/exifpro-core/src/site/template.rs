/// Render one localized landing page from the placeholder template.
///
/// `%key%` placeholders are replaced from `flat`, the first
/// `<html lang="...">` tag is rewritten to `locale`, and alternate-language
/// links for `locales` (plus `x-default`) are inserted before `</head>`.
pub fn render_page(
    template: &str,
    flat: &[(String, String)],
    locale: &str,
    locales: &[String],
    base_url: &str,
) -> String {
    let mut html = substitute(template, flat);
    html = set_html_lang(&html, locale);

    let links = hreflang_links(locales, base_url);
    match html.find("</head>") {
        Some(at) => html.insert_str(at, &format!("{links}\n")),
        None => tracing::warn!(locale, "Template has no </head>, hreflang links skipped"),
    }
    html
}

pub fn substitute(template: &str, flat: &[(String, String)]) -> String {
    flat.iter().fold(template.to_string(), |html, (key, value)| {
        html.replace(&format!("%{key}%"), value)
    })
}

/// Rewrite the first `<html lang="...">` (case-insensitive) to `locale`.
/// Templates without one are returned unchanged.
pub fn set_html_lang(html: &str, locale: &str) -> String {
    const OPEN: &str = "<html lang=\"";

    // ASCII lowercasing keeps byte offsets aligned with `html`.
    let lower = html.to_ascii_lowercase();
    let mut from = 0;
    while let Some(rel) = lower[from..].find(OPEN) {
        let start = from + rel;
        let value_start = start + OPEN.len();
        let Some(value_len) = html[value_start..].find('"') else {
            break;
        };
        let value_end = value_start + value_len;
        if value_len > 0 && html[value_end..].starts_with("\">") {
            return format!(
                "{}<html lang=\"{locale}\">{}",
                &html[..start],
                &html[value_end + 2..]
            );
        }
        from = value_start;
    }
    html.to_string()
}

pub fn hreflang_links(locales: &[String], base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    locales
        .iter()
        .map(|loc| format!("<link rel=\"alternate\" hreflang=\"{loc}\" href=\"{base}/{loc}/\" />"))
        .chain(std::iter::once(format!(
            "<link rel=\"alternate\" hreflang=\"x-default\" href=\"{base}/\" />"
        )))
        .collect::<Vec<_>>()
        .join("\n    ")
}
