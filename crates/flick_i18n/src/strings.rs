//! The translation tables.
//!
//! One arm per `(Language, MessageKey)` pair, grouped by key. Values may
//! contain `{name}` placeholders expanded by [`crate::Translator::format`].

use crate::key::MessageKey;
use crate::language::Language;

pub(crate) fn lookup(lang: Language, key: MessageKey) -> &'static str {
    match (lang, key) {
        // Heading
        (Language::English, MessageKey::AppTitle) => "Movie Browser",
        (Language::French, MessageKey::AppTitle) => "Explorateur de films",
        (Language::Arabic, MessageKey::AppTitle) => "متصفح الأفلام",

        // Minimum-rating control
        (Language::English, MessageKey::MinRating) => "Min rating",
        (Language::French, MessageKey::MinRating) => "Note minimale",
        (Language::Arabic, MessageKey::MinRating) => "الحد الأدنى للتقييم",

        // Language selector
        (Language::English, MessageKey::LanguageLabel) => "Language",
        (Language::French, MessageKey::LanguageLabel) => "Langue",
        (Language::Arabic, MessageKey::LanguageLabel) => "اللغة",

        // Watch action
        (Language::English, MessageKey::Watch) => "Watch Now",
        (Language::French, MessageKey::Watch) => "Regarder",
        (Language::Arabic, MessageKey::Watch) => "شاهد الآن",

        // Watch notice body
        (Language::English, MessageKey::WatchRedirect) => {
            "Opening the watch page for movie {id}"
        }
        (Language::French, MessageKey::WatchRedirect) => {
            "Ouverture de la page de visionnage du film {id}"
        }
        (Language::Arabic, MessageKey::WatchRedirect) => "جارٍ فتح صفحة مشاهدة الفيلم {id}",

        // Empty filter result
        (Language::English, MessageKey::NoResults) => "No movies match the current filter",
        (Language::French, MessageKey::NoResults) => "Aucun film ne correspond au filtre",
        (Language::Arabic, MessageKey::NoResults) => "لا توجد أفلام تطابق عامل التصفية",

        // Footer key bindings
        (Language::English, MessageKey::FooterHint) => {
            "Up/Down select | Left/Right min rating | Tab language | Enter watch | q quit"
        }
        (Language::French, MessageKey::FooterHint) => {
            "Haut/Bas choisir | Gauche/Droite note minimale | Tab langue | Entrée regarder | q quitter"
        }
        (Language::Arabic, MessageKey::FooterHint) => {
            "Up/Down اختيار | Left/Right الحد الأدنى | Tab اللغة | Enter مشاهدة | q خروج"
        }

        // Notice dismissal
        (Language::English, MessageKey::DismissHint) => "Press Esc to dismiss",
        (Language::French, MessageKey::DismissHint) => "Appuyez sur Échap pour fermer",
        (Language::Arabic, MessageKey::DismissHint) => "اضغط Esc للإغلاق",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_has_a_real_translation() {
        for lang in Language::ALL {
            for key in MessageKey::ALL {
                let text = lookup(lang, key);
                assert!(!text.is_empty(), "{lang}/{key:?} is empty");
                assert_ne!(text, key.name(), "{lang}/{key:?} is just the key name");
            }
        }
    }

    #[test]
    fn watch_redirect_keeps_its_placeholder_everywhere() {
        for lang in Language::ALL {
            let template = lookup(lang, MessageKey::WatchRedirect);
            assert!(template.contains("{id}"), "{lang} lost the id placeholder");
        }
    }
}
