use tracing::info;

use crate::movie::{Movie, MovieId};

/// What a watch activation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchOutcome {
    /// The handler took care of it; no further UI is needed.
    Handled,
    /// Nothing real is wired up yet; the UI should raise its placeholder
    /// notice for this id.
    Stub { id: MovieId },
}

/// Handles the watch action for a movie the user activated.
///
/// The browser itself never navigates anywhere. A playback or redirect
/// integration implements this and returns [`WatchOutcome::Handled`];
/// until one exists, [`StubWatchHandler`] stands in.
pub trait WatchHandler {
    fn watch(&mut self, movie: &Movie) -> WatchOutcome;
}

/// Stand-in for the future redirect integration: records the activation in
/// the log and asks the UI to show the placeholder notice.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubWatchHandler;

impl WatchHandler for StubWatchHandler {
    fn watch(&mut self, movie: &Movie) -> WatchOutcome {
        info!("watch requested for movie {} ({})", movie.id, movie.title);
        WatchOutcome::Stub { id: movie.id }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn the_stub_reports_the_activated_id() {
        let movie = Movie::new(1, "Inception", 8.8, "");
        let mut handler = StubWatchHandler;
        assert_eq!(handler.watch(&movie), WatchOutcome::Stub { id: MovieId(1) });
    }
}
