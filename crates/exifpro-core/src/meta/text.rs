use std::borrow::Cow;

/// Undo latin1-decoded UTF-8 ("cafÃ©" -> "café").
///
/// Only strings made entirely of U+0000..=U+00FF can be such mojibake.
/// Their chars are taken as bytes and decoded as strict UTF-8; if that
/// fails the input comes back verbatim, never partially substituted.
pub fn repair_mojibake(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let mut bytes = Vec::with_capacity(s.len());
    for c in s.chars() {
        match u8::try_from(u32::from(c)) {
            Ok(b) => bytes.push(b),
            Err(_) => return Cow::Borrowed(s),
        }
    }

    match String::from_utf8(bytes) {
        Ok(decoded) => Cow::Owned(decoded),
        Err(_) => Cow::Borrowed(s),
    }
}

/// Decode bytes one-to-one as latin1, the way metadata strings of unknown
/// encoding arrive from the parser.
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_borrowed() {
        assert!(matches!(repair_mojibake("Canon"), Cow::Borrowed("Canon")));
    }

    #[test]
    fn test_latin1_round_trip_of_utf8_bytes() {
        let mangled = latin1_to_string("日本".as_bytes());
        assert_eq!(repair_mojibake(&mangled), "日本");
    }
}
