use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::{ExifProError, Result};

/// Split a `{lang: {...}}` translation bundle into one pretty-printed
/// `<lang>.json` per requested language.
///
/// Every written file gets `urls.app = "/app/?lang=<lang>"` and a footer
/// cross-link pointing at the sister site's matching language page.
/// Languages absent from the bundle are skipped with a warning and any
/// existing file for them is left untouched.
pub fn sync_locale_bundle(
    bundle: &Value,
    out_dir: &Path,
    languages: &[&str],
    cross_link_base: &str,
) -> Result<Vec<PathBuf>> {
    let Some(bundle) = bundle.as_object() else {
        return Err(ExifProError::InvalidLocale {
            path: out_dir.to_path_buf(),
            reason: "bundle is not an object keyed by language".to_string(),
        });
    };

    fs::create_dir_all(out_dir)?;
    let base = cross_link_base.trim_end_matches('/');
    let mut written = Vec::new();

    for &lang in languages {
        let Some(Value::Object(content)) = bundle.get(lang) else {
            warn!(lang, "Missing translation, skipping");
            continue;
        };
        let mut content = content.clone();

        set_field(&mut content, "urls", "app", format!("/app/?lang={lang}"));
        let cross_link = if lang == "en" {
            format!("{base}/")
        } else {
            format!("{base}/{lang}/")
        };
        set_field(&mut content, "footer", "cross_link_url", cross_link);

        let path = out_dir.join(format!("{lang}.json"));
        fs::write(&path, serde_json::to_string_pretty(&Value::Object(content))?)?;
        info!(lang, path = %path.display(), "Locale file written");
        written.push(path);
    }
    Ok(written)
}

/// Set `content[section][key]`, creating the section (or replacing a
/// non-object one) as needed.
fn set_field(content: &mut Map<String, Value>, section: &str, key: &str, value: String) {
    let slot = content
        .entry(section)
        .or_insert_with(|| Value::Object(Map::new()));
    match slot {
        Value::Object(map) => {
            map.insert(key.to_string(), Value::String(value));
        }
        other => {
            let mut map = Map::new();
            map.insert(key.to_string(), Value::String(value));
            *other = Value::Object(map);
        }
    }
}
