/// A UI/landing language: BCP 47 code and its native name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_LANGUAGE: &str = "zh-CN";

pub const SUPPORTED_LANGUAGES: [Language; 18] = [
    Language { code: "zh-CN", name: "简体中文" },
    Language { code: "zh-HK", name: "繁體中文" },
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Español" },
    Language { code: "ar", name: "العربية" },
    Language { code: "hi", name: "हिन्दी" },
    Language { code: "bn", name: "বাংলা" },
    Language { code: "pt", name: "Português" },
    Language { code: "ru", name: "Русский" },
    Language { code: "ja", name: "日本語" },
    Language { code: "pa", name: "ਪੰਜਾਬੀ" },
    Language { code: "de", name: "Deutsch" },
    Language { code: "fr", name: "Français" },
    Language { code: "tr", name: "Türkçe" },
    Language { code: "vi", name: "Tiếng Việt" },
    Language { code: "ko", name: "한국어" },
    Language { code: "it", name: "Italiano" },
    Language { code: "th", name: "ไทย" },
];

pub fn find_language(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|l| l.code == code)
}

pub fn is_supported(code: &str) -> bool {
    find_language(code).is_some()
}

/// Pick the active language: an explicit request first, then the stored
/// preference, then the default. Candidates not in `available` are skipped.
pub fn resolve_language<'a>(
    requested: Option<&'a str>,
    stored: Option<&'a str>,
    available: &[&'a str],
) -> &'a str {
    [requested, stored]
        .into_iter()
        .flatten()
        .find(|code| available.contains(code))
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Codes of all supported languages, in display order.
pub fn supported_codes() -> Vec<&'static str> {
    SUPPORTED_LANGUAGES.iter().map(|l| l.code).collect()
}
