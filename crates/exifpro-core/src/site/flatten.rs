use serde_json::Value;

/// Flatten a translation tree into `("a.b.c", text)` pairs.
///
/// Object keys are joined with `.`, array items are keyed by index, and
/// leaves keep their JSON text form except strings, which are taken verbatim.
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    flatten_into(value, String::new(), &mut out);
    out
}

fn flatten_into(value: &Value, prefix: String, out: &mut Vec<(String, String)>) {
    let child = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        }
    };

    match value {
        Value::Object(map) => {
            for (k, v) in map {
                flatten_into(v, child(k), out);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                flatten_into(v, child(&i.to_string()), out);
            }
        }
        Value::String(s) => out.push((prefix, s.clone())),
        other => out.push((prefix, other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_keys() {
        let flat = flatten(&json!({"meta": {"title": "Exif Pro"}, "n": 3, "ok": true}));
        assert!(flat.contains(&("meta.title".to_string(), "Exif Pro".to_string())));
        assert!(flat.contains(&("n".to_string(), "3".to_string())));
        assert!(flat.contains(&("ok".to_string(), "true".to_string())));
    }

    #[test]
    fn test_arrays_and_null() {
        let flat = flatten(&json!({"items": ["a", null]}));
        assert_eq!(
            flat,
            vec![
                ("items.0".to_string(), "a".to_string()),
                ("items.1".to_string(), "null".to_string()),
            ]
        );
    }
}
