use tracing::debug;

use crate::format::{apply_placeholders, ArgValue};
use crate::key::MessageKey;
use crate::language::Language;
use crate::strings;

/// The current language selection.
///
/// Switching accepts arbitrary codes, so a selection is either a shipped
/// language or the raw unrecognized string the caller handed over.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Selected {
    Known(Language),
    Unknown(String),
}

/// Translates fixed UI strings for the currently selected language.
///
/// Owned by the application state and threaded to whoever renders text;
/// there is no process-wide singleton. An unrecognized language code puts
/// the translator into a degraded mode where every lookup returns its key
/// name, never an error.
#[derive(Clone, Debug)]
pub struct Translator {
    selected: Selected,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self {
            selected: Selected::Known(language),
        }
    }

    /// The selected language, if it is a shipped one.
    pub fn language(&self) -> Option<Language> {
        match &self.selected {
            Selected::Known(lang) => Some(*lang),
            Selected::Unknown(_) => None,
        }
    }

    /// The selected code: a shipped language's canonical code, or the raw
    /// string of an unrecognized selection.
    pub fn language_code(&self) -> &str {
        match &self.selected {
            Selected::Known(lang) => lang.code(),
            Selected::Unknown(code) => code,
        }
    }

    /// Select a language by code.
    ///
    /// Any string is accepted. An unrecognized code switches every lookup
    /// to the key-name fallback until a shipped code is set again.
    pub fn set_language(&mut self, code: impl Into<String>) {
        let code = code.into();
        let next = match Language::from_code(&code) {
            Some(lang) => Selected::Known(lang),
            None => Selected::Unknown(code),
        };
        if next == self.selected {
            return;
        }
        debug!(
            "Translator::set_language: {} -> {}",
            self.language_code(),
            match &next {
                Selected::Known(lang) => lang.code(),
                Selected::Unknown(code) => code.as_str(),
            }
        );
        self.selected = next;
    }

    /// Switch to the next shipped language in cycling order.
    ///
    /// From an unrecognized selection this recovers to the first shipped
    /// language.
    pub fn cycle_language(&mut self) {
        let next = match &self.selected {
            Selected::Known(lang) => lang.next(),
            Selected::Unknown(_) => Language::ALL[0],
        };
        self.set_language(next.code());
    }

    /// Typed lookup. The tables are exhaustive, so this cannot miss for a
    /// shipped language; in degraded mode it returns the key name.
    pub fn text(&self, key: MessageKey) -> &'static str {
        match &self.selected {
            Selected::Known(lang) => strings::lookup(*lang, key),
            Selected::Unknown(_) => key.name(),
        }
    }

    /// String-keyed lookup. Unknown keys come back unchanged, so a typo
    /// shows up on screen as the key itself.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        match MessageKey::from_name(key) {
            Some(typed) => self.text(typed),
            None => key,
        }
    }

    /// Typed lookup plus `{name}` placeholder expansion.
    pub fn format(&self, key: MessageKey, args: &[(&str, ArgValue)]) -> String {
        apply_placeholders(self.text(key), args)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::ALL[0])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::args;

    #[test]
    fn watch_caption_switches_with_the_language() {
        let mut tr = Translator::new(Language::English);
        assert_eq!(tr.translate("watch"), "Watch Now");

        tr.set_language("fr");
        assert_eq!(tr.translate("watch"), "Regarder");

        tr.set_language("ar");
        assert_eq!(tr.translate("watch"), "شاهد الآن");
    }

    #[test]
    fn unknown_language_falls_back_to_key_names() {
        let mut tr = Translator::new(Language::English);
        tr.set_language("xx");

        assert_eq!(tr.language(), None);
        assert_eq!(tr.language_code(), "xx");
        assert_eq!(tr.translate("watch"), "watch");
        assert_eq!(tr.text(MessageKey::AppTitle), "app-title");
    }

    #[test]
    fn unknown_keys_come_back_unchanged() {
        let tr = Translator::new(Language::French);
        assert_eq!(tr.translate("download"), "download");
    }

    #[test]
    fn regional_tags_select_their_base_language() {
        let mut tr = Translator::new(Language::English);
        tr.set_language("fr-CA");
        assert_eq!(tr.language(), Some(Language::French));
        assert_eq!(tr.language_code(), "fr");
    }

    #[test]
    fn cycling_visits_every_language_and_recovers_from_unknown() {
        let mut tr = Translator::new(Language::English);
        tr.cycle_language();
        assert_eq!(tr.language(), Some(Language::French));
        tr.cycle_language();
        assert_eq!(tr.language(), Some(Language::Arabic));
        tr.cycle_language();
        assert_eq!(tr.language(), Some(Language::English));

        tr.set_language("zz");
        tr.cycle_language();
        assert_eq!(tr.language(), Some(Language::English));
    }

    #[test]
    fn format_injects_the_movie_id() {
        let tr = Translator::new(Language::English);
        let notice = tr.format(MessageKey::WatchRedirect, &args! { id: 1_u64 });
        assert_eq!(notice, "Opening the watch page for movie 1");

        let mut tr = tr;
        tr.set_language("fr");
        let notice = tr.format(MessageKey::WatchRedirect, &args! { id: 1_u64 });
        assert!(notice.contains('1'), "{notice} lost the id");
    }

    #[test]
    fn format_in_degraded_mode_returns_the_key_name() {
        let mut tr = Translator::new(Language::English);
        tr.set_language("xx");
        let notice = tr.format(MessageKey::WatchRedirect, &args! { id: 7_u64 });
        assert_eq!(notice, "watch-redirect");
    }

    #[test]
    fn every_shipped_language_translates_every_key() {
        for lang in Language::ALL {
            let tr = Translator::new(lang);
            for key in MessageKey::ALL {
                assert_ne!(tr.text(key), key.name(), "{lang}/{key:?} fell back");
            }
        }
    }
}
