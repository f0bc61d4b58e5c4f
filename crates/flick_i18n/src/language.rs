use std::fmt;

/// Languages the UI ships translations for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    French,
    Arabic,
}

impl Language {
    /// Every shipped language, in selector cycling order.
    pub const ALL: [Language; 3] = [Language::English, Language::French, Language::Arabic];

    /// Resolve a language code to a shipped language.
    ///
    /// Matching goes through [`primary_subtag`], so regional tags such as
    /// `fr-CA` or `ar_EG` resolve to their base language. Codes outside the
    /// shipped set return `None`; callers decide whether that is an error
    /// or a degraded mode.
    pub fn from_code(code: &str) -> Option<Self> {
        match primary_subtag(code).as_str() {
            "en" => Some(Language::English),
            "fr" => Some(Language::French),
            "ar" => Some(Language::Arabic),
            _ => None,
        }
    }

    /// Canonical two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Arabic => "ar",
        }
    }

    /// Name of the language in that language, for the selector line.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
            Language::Arabic => "العربية",
        }
    }

    /// The language after this one in cycling order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Language::English => Language::French,
            Language::French => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Normalize a locale identifier and keep its primary subtag for lookup.
///
/// - Converts `_` to `-` (platform locales often report `en_US`).
/// - Trims whitespace and lowercases.
///
/// Example: `" FR_ca "` -> `"fr"`.
pub fn primary_subtag(code: &str) -> String {
    let normalized = code.trim().replace('_', "-").to_ascii_lowercase();
    normalized.split('-').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_code_accepts_plain_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code("fr"), Some(Language::French));
        assert_eq!(Language::from_code("ar"), Some(Language::Arabic));
    }

    #[test]
    fn from_code_resolves_regional_tags() {
        assert_eq!(Language::from_code("fr-CA"), Some(Language::French));
        assert_eq!(Language::from_code("ar_EG"), Some(Language::Arabic));
        assert_eq!(Language::from_code(" EN-us "), Some(Language::English));
    }

    #[test]
    fn from_code_rejects_unshipped_languages() {
        assert_eq!(Language::from_code("ko"), None);
        assert_eq!(Language::from_code("de-DE"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn next_cycles_through_every_language() {
        let mut lang = Language::English;
        let mut seen = Vec::new();
        for _ in 0..Language::ALL.len() {
            seen.push(lang);
            lang = lang.next();
        }
        assert_eq!(seen, Language::ALL);
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn primary_subtag_normalizes() {
        assert_eq!(primary_subtag("en_US"), "en");
        assert_eq!(primary_subtag("  ko-KR"), "ko");
        assert_eq!(primary_subtag("AR"), "ar");
        assert_eq!(primary_subtag(""), "");
    }
}
