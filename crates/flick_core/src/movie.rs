use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a movie within its catalog.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl MovieId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single catalog record.
///
/// Records are immutable once constructed; the browser clones them into
/// its filtered list and never writes back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Average rating on the 0-10 scale.
    pub rating: f64,
    /// Poster image reference. A terminal cannot show the image itself, so
    /// the card renders the reference line instead.
    #[serde(rename = "poster")]
    pub poster_url: String,
}

impl Movie {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        rating: f64,
        poster_url: impl Into<String>,
    ) -> Self {
        Self {
            id: MovieId(id),
            title: title.into(),
            rating,
            poster_url: poster_url.into(),
        }
    }

    /// Star-prefixed rating line for the card, with the number printed the
    /// way `f64` displays it: `⭐ 8.8`, `⭐ 7`.
    pub fn rating_label(&self) -> String {
        format!("⭐ {}", self.rating)
    }
}
