use std::path::Path;

use console::Style;
use exifpro_core::meta::{GroupView, TagDetail};
use exifpro_core::session::ImageEntry;
use exifpro_core::site::locale::find_language;
use exifpro_core::site::{BuildReport, Language, SiteConfig};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    hex: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            hex: Style::new().dim().magenta(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn rule(len: usize) -> String {
    "\u{2550}".repeat(len)
}

pub fn print_image_header(path: &Path, entry: Option<&ImageEntry>, tag_count: usize) {
    let s = Styles::new();
    let name = entry
        .map(|e| e.name.clone())
        .unwrap_or_else(|| path.display().to_string());

    println!();
    println!("  {}", s.title.apply_to(&name));
    println!("  {}", s.title.apply_to(rule(name.chars().count().max(8))));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Path"),
        s.path.apply_to(path.display())
    );
    if let Some(e) = entry {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Dimensions"),
            s.value.apply_to(e.natural)
        );
        println!(
            "  {:<14}{}",
            s.label.apply_to("Format"),
            s.value.apply_to(e.format_name())
        );
        println!(
            "  {:<14}{}",
            s.label.apply_to("File size"),
            s.value.apply_to(format!("{:.1} KB", e.file_size as f64 / 1024.0))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Tags"),
        s.value.apply_to(tag_count)
    );
    println!();
}

pub fn print_table(groups: &[GroupView], query: &str) {
    let s = Styles::new();

    if groups.is_empty() {
        let msg = if query.is_empty() {
            "No tags".to_string()
        } else {
            format!("No matching tags found for \"{query}\"")
        };
        println!("  {}", s.disabled.apply_to(msg));
        println!();
        return;
    }

    let width = groups
        .iter()
        .flat_map(|g| g.rows.iter().map(|r| g.row_label(r).chars().count()))
        .max()
        .unwrap_or(0)
        .min(40);

    for group in groups {
        match group.description {
            Some(desc) => println!(
                "  {} {}",
                s.header.apply_to(&group.display_name),
                s.label.apply_to(format!("({desc})"))
            ),
            None => println!("  {}", s.header.apply_to(&group.display_name)),
        }
        for row in &group.rows {
            let hex = row.hex.as_deref().unwrap_or("");
            // Multi-line values (pretty JSON) are indented under the value column.
            let indent = " ".repeat(4 + 7 + width + 2);
            let value = row.value.replace('\n', &format!("\n{indent}"));
            println!(
                "    {:<7}{:<width$}  {}",
                s.hex.apply_to(hex),
                group.row_label(row),
                s.value.apply_to(value),
            );
        }
        println!();
    }
}

pub fn print_tag_detail(detail: &TagDetail, has_value: bool) {
    let s = Styles::new();

    println!();
    match detail.hex {
        Some(ref hex) => println!(
            "  {} {}",
            s.title.apply_to(&detail.title),
            s.hex.apply_to(hex)
        ),
        None => println!("  {}", s.title.apply_to(&detail.title)),
    }
    println!("  {}", s.title.apply_to(rule(detail.title.chars().count())));
    println!();
    if has_value {
        println!("  {}", s.header.apply_to("Current Value"));
        println!("    {}", s.value.apply_to(&detail.value));
        println!();
    }
    println!("  {}", s.header.apply_to("Description"));
    println!("    {}", detail.description);
    println!();
}

pub fn print_site_summary(config: &SiteConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Landing Site Build"));
    println!("  {}", s.title.apply_to(rule(18)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Template"),
        s.path.apply_to(config.template.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Locales"),
        s.path.apply_to(config.locales_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.dist_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Base URL"),
        s.value.apply_to(config.base())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Root locale"),
        s.value.apply_to(locale_label(&config.default_locale))
    );
    match config.lastmod {
        Some(date) => println!(
            "  {:<14}{}",
            s.label.apply_to("Last modified"),
            s.value.apply_to(date)
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Last modified"),
            s.disabled.apply_to("today")
        ),
    }
    println!();
}

/// `code (native name)` for supported languages, the bare code otherwise.
fn locale_label(code: &str) -> String {
    match find_language(code) {
        Some(lang) => format!("{code} ({})", lang.name),
        None => code.to_string(),
    }
}

pub fn print_build_report(report: &BuildReport) {
    let s = Styles::new();

    println!();
    if let Some(ref moved) = report.app_moved_to {
        println!(
            "  {:<14}{}",
            s.label.apply_to("App moved to"),
            s.path.apply_to(moved.display())
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Locales"),
        s.value.apply_to(report.locales.join(", "))
    );
    for page in &report.pages {
        println!("    {}", s.path.apply_to(page.display()));
    }
    if !report.root_written {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Root page"),
            s.disabled.apply_to("default locale not found, root left unchanged")
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Sitemap"),
        s.path.apply_to(report.sitemap.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Robots"),
        s.path.apply_to(report.robots.display())
    );
    println!();
}

/// Supported languages with their native names, marking the default.
pub fn print_languages(languages: &[Language], default: &str) {
    let s = Styles::new();

    println!();
    for lang in languages {
        let marker = if lang.code == default { "*" } else { " " };
        println!(
            "  {} {:<8}{}",
            s.hex.apply_to(marker),
            s.label.apply_to(lang.code),
            s.value.apply_to(lang.name)
        );
    }
    println!();
}
