//! Flick internationalization (i18n)
//!
//! Goals:
//! - A fixed [`Language`] set with runtime switching through arbitrary codes
//! - Strongly typed [`MessageKey`]s backed by exhaustive per-language tables,
//!   so a missing translation is a compile error rather than a runtime hole
//! - Graceful degradation: unknown keys and unknown language codes fall back
//!   to the key name instead of failing

mod format;
mod key;
mod language;
mod strings;
mod translator;

pub use format::ArgValue;
pub use key::MessageKey;
pub use language::{primary_subtag, Language};
pub use translator::Translator;

/// Convenience macro for building the argument slice of
/// [`Translator::format`].
///
/// Examples:
/// - `args! { id: 42 }`
/// - `args! { title: movie.title.as_str(), rating: movie.rating }`
#[macro_export]
macro_rules! args {
    ($($name:ident : $value:expr),* $(,)?) => {
        [ $( (stringify!($name), $crate::ArgValue::from($value)) ),* ]
    };
}
