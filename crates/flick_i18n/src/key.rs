/// Strongly typed keys for every fixed UI string.
///
/// The tables in `strings` match exhaustively over `(Language, MessageKey)`,
/// so adding a variant here without all of its translations fails to
/// compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Main heading of the browser.
    AppTitle,
    /// Label of the minimum-rating control.
    MinRating,
    /// Label of the language selector.
    LanguageLabel,
    /// Caption of the watch action on each card.
    Watch,
    /// Body of the watch notice; takes an `{id}` placeholder.
    WatchRedirect,
    /// Shown instead of the list when the filter matches nothing.
    NoResults,
    /// Key binding summary at the bottom of the screen.
    FooterHint,
    /// How to close the watch notice.
    DismissHint,
}

impl MessageKey {
    pub const ALL: [MessageKey; 8] = [
        MessageKey::AppTitle,
        MessageKey::MinRating,
        MessageKey::LanguageLabel,
        MessageKey::Watch,
        MessageKey::WatchRedirect,
        MessageKey::NoResults,
        MessageKey::FooterHint,
        MessageKey::DismissHint,
    ];

    /// Canonical string name, doubling as the fallback text when no
    /// translation table applies.
    pub fn name(self) -> &'static str {
        match self {
            MessageKey::AppTitle => "app-title",
            MessageKey::MinRating => "min-rating",
            MessageKey::LanguageLabel => "language",
            MessageKey::Watch => "watch",
            MessageKey::WatchRedirect => "watch-redirect",
            MessageKey::NoResults => "no-results",
            MessageKey::FooterHint => "footer-hint",
            MessageKey::DismissHint => "dismiss-hint",
        }
    }

    /// Inverse of [`MessageKey::name`], for string-keyed lookups.
    pub fn from_name(name: &str) -> Option<Self> {
        MessageKey::ALL.iter().copied().find(|key| key.name() == name)
    }
}
