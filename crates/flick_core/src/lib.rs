//! Flick core: the movie data model and browse pipeline
//!
//! Goals:
//! - Immutable movie records behind a [`CatalogProvider`] seam, so the
//!   filter and render layers never know where records come from
//! - A minimum-rating filter whose result is cached in [`BrowseState`];
//!   language-only redraws reuse it without recomputing
//! - A [`WatchHandler`] capability that stays a logged stub here

mod browse;
mod catalog;
mod movie;
mod watch;

pub use browse::BrowseState;
pub use catalog::{CatalogError, CatalogProvider, StaticCatalog};
pub use movie::{Movie, MovieId};
pub use watch::{StubWatchHandler, WatchHandler, WatchOutcome};
