//! Flatten an XMP packet into one tag group per namespace prefix.
//!
//! Properties are read from `rdf:Description` attributes and from its
//! direct child elements. `rdf:Seq`/`rdf:Bag`/`rdf:Alt` containers become
//! lists of their `rdf:li` texts. Nested structures are skipped.

use tracing::debug;

use super::value::{TagEntry, TagGroup, TagValue};

const DESCRIPTION: &str = "rdf:Description";
const LIST_ITEM: &str = "rdf:li";

/// Prefixes that belong to the packet structure, not to metadata.
const STRUCTURAL_PREFIXES: &[&str] = &["rdf", "x", "xml", "xmlns"];

/// Property currently being collected.
struct OpenProperty {
    prefix: String,
    name: String,
    depth: usize,
    text: String,
    items: Vec<String>,
    item: Option<String>,
}

/// Parse raw packet bytes. Groups are returned in first-seen order.
pub fn parse_xmp(packet: &[u8]) -> Vec<TagGroup> {
    let xml = String::from_utf8_lossy(packet);
    let mut groups: Vec<TagGroup> = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut open: Option<OpenProperty> = None;

    let mut rest: &str = &xml;
    while let Some(start) = rest.find('<') {
        let text = &rest[..start];
        if let Some(prop) = open.as_mut() {
            let top = stack.last().map(String::as_str);
            match prop.item.as_mut() {
                Some(item) if top == Some(LIST_ITEM) => item.push_str(text),
                None if stack.len() == prop.depth => prop.text.push_str(text),
                _ => {}
            }
        }

        rest = &rest[start..];
        let Some(tag) = next_tag(rest) else {
            debug!("Truncated XMP packet");
            break;
        };
        rest = &rest[tag.len..];

        match tag.kind {
            TagKind::Skip => {}
            TagKind::End(name) => {
                if name == LIST_ITEM {
                    if let Some(prop) = open.as_mut() {
                        if let Some(item) = prop.item.take() {
                            let item = unescape(item.trim());
                            if !item.is_empty() {
                                prop.items.push(item);
                            }
                        }
                    }
                }
                stack.pop();
                if open.as_ref().is_some_and(|p| stack.len() < p.depth) {
                    if let Some(prop) = open.take() {
                        finish_property(&mut groups, prop);
                    }
                }
            }
            TagKind::Start {
                name,
                attrs,
                self_closing,
            } => {
                if let Some(prop) = open.as_mut() {
                    if name == LIST_ITEM && !self_closing {
                        prop.item = Some(String::new());
                    }
                } else if name == DESCRIPTION {
                    for (key, value) in &attrs {
                        if let Some((prefix, local)) = property_name(key) {
                            push_entry(&mut groups, prefix, local, leaf_value(&unescape(value)));
                        }
                    }
                } else if stack.last().map(String::as_str) == Some(DESCRIPTION) {
                    if let Some((prefix, local)) = property_name(name) {
                        if self_closing {
                            if let Some((_, resource)) =
                                attrs.iter().find(|(k, _)| *k == "rdf:resource")
                            {
                                push_entry(&mut groups, prefix, local, leaf_value(&unescape(resource)));
                            }
                        } else {
                            open = Some(OpenProperty {
                                prefix: prefix.to_string(),
                                name: local.to_string(),
                                depth: stack.len() + 1,
                                text: String::new(),
                                items: Vec::new(),
                                item: None,
                            });
                        }
                    }
                }
                if !self_closing {
                    stack.push(name.to_string());
                }
            }
        }
    }

    groups
}

enum TagKind<'a> {
    Start {
        name: &'a str,
        attrs: Vec<(&'a str, &'a str)>,
        self_closing: bool,
    },
    End(&'a str),
    Skip,
}

struct Tag<'a> {
    kind: TagKind<'a>,
    len: usize,
}

/// Read one markup construct at the start of `s` (which begins with `<`).
fn next_tag(s: &str) -> Option<Tag<'_>> {
    for (open, close) in [("<!--", "-->"), ("<?", "?>"), ("<![CDATA[", "]]>")] {
        if s.starts_with(open) {
            let end = s.find(close)? + close.len();
            return Some(Tag {
                kind: TagKind::Skip,
                len: end,
            });
        }
    }

    let end = tag_end(s)?;
    let body = &s[1..end];
    let len = end + 1;

    if let Some(name) = body.strip_prefix('/') {
        return Some(Tag {
            kind: TagKind::End(name.trim()),
            len,
        });
    }
    if body.starts_with('!') {
        return Some(Tag {
            kind: TagKind::Skip,
            len,
        });
    }

    let (body, self_closing) = match body.strip_suffix('/') {
        Some(b) => (b, true),
        None => (body, false),
    };
    let body = body.trim();
    let name_end = body.find(char::is_whitespace).unwrap_or(body.len());
    Some(Tag {
        kind: TagKind::Start {
            name: &body[..name_end],
            attrs: parse_attrs(&body[name_end..]),
            self_closing,
        },
        len,
    })
}

/// Index of the `>` closing the tag, ignoring any inside quoted values.
fn tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(i),
            _ => {}
        }
    }
    None
}

fn parse_attrs(mut s: &str) -> Vec<(&str, &str)> {
    let mut attrs = Vec::new();
    loop {
        s = s.trim_start();
        let Some(eq) = s.find('=') else { break };
        let key = s[..eq].trim();
        let after = s[eq + 1..].trim_start();
        let Some(quote) = after.chars().next().filter(|c| *c == '"' || *c == '\'') else {
            break;
        };
        let value_start = &after[1..];
        let Some(close) = value_start.find(quote) else { break };
        attrs.push((key, &value_start[..close]));
        s = &value_start[close + 1..];
    }
    attrs
}

/// Split `prefix:local`, rejecting names in structural namespaces.
fn property_name(qualified: &str) -> Option<(&str, &str)> {
    let (prefix, local) = qualified.split_once(':')?;
    if prefix.is_empty() || local.is_empty() || STRUCTURAL_PREFIXES.contains(&prefix) {
        return None;
    }
    Some((prefix, local))
}

fn finish_property(groups: &mut Vec<TagGroup>, prop: OpenProperty) {
    let value = if prop.items.is_empty() {
        let text = unescape(prop.text.trim());
        if text.is_empty() {
            return;
        }
        leaf_value(&text)
    } else if prop.items.len() == 1 {
        leaf_value(&prop.items[0])
    } else {
        TagValue::List(prop.items.iter().map(|s| leaf_value(s)).collect())
    };
    push_entry(groups, &prop.prefix, &prop.name, value);
}

fn push_entry(groups: &mut Vec<TagGroup>, prefix: &str, name: &str, value: TagValue) {
    let entry = TagEntry::new(name, None, value);
    match groups.iter_mut().find(|g| g.name == prefix) {
        Some(group) => group.push(entry),
        None => {
            let mut group = TagGroup::new(prefix);
            group.push(entry);
            groups.push(group);
        }
    }
}

/// Numbers that print back unchanged are revived; everything else is text.
fn leaf_value(s: &str) -> TagValue {
    if let Ok(n) = s.parse::<i64>() {
        if n.to_string() == s {
            return TagValue::Integer(n);
        }
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.is_finite() && f.to_string() == s {
            return TagValue::Float(f);
        }
    }
    TagValue::text(s)
}

fn unescape(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest.find(';').and_then(|semi| {
            let entity = &rest[1..semi];
            let c = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .map(|hex| u32::from_str_radix(hex, 16).ok())
                    .unwrap_or_else(|| entity.strip_prefix('#').and_then(|d| d.parse().ok()))
                    .and_then(char::from_u32),
            };
            c.map(|c| (c, semi + 1))
        });
        match decoded {
            Some((c, len)) => {
                out.push(c);
                rest = &rest[len..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_entities() {
        assert_eq!(unescape("a &amp; b &lt;c&gt; &#233;&#xE9;"), "a & b <c> éé");
        assert_eq!(unescape("R&D"), "R&D");
    }

    #[test]
    fn test_leaf_value_revival() {
        assert_eq!(leaf_value("5"), TagValue::Integer(5));
        assert_eq!(leaf_value("2.5"), TagValue::Float(2.5));
        assert_eq!(leaf_value("0232"), TagValue::text("0232"));
        assert_eq!(leaf_value("image/jpeg"), TagValue::text("image/jpeg"));
    }

    #[test]
    fn test_tag_end_skips_quoted_gt() {
        assert_eq!(tag_end(r#"<a b="x>y">"#), Some(10));
    }

    #[test]
    fn test_structural_prefixes_are_not_properties() {
        assert_eq!(property_name("rdf:about"), None);
        assert_eq!(property_name("xmlns:dc"), None);
        assert_eq!(property_name("dc:format"), Some(("dc", "format")));
        assert_eq!(property_name("about"), None);
    }
}
