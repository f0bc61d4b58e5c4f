use tracing::debug;

use crate::catalog::CatalogProvider;
use crate::movie::Movie;

/// The rating filter and its cached result.
///
/// `visible` always holds the outcome of the last [`BrowseState::apply_filter`]
/// call, in catalog order. A language switch re-renders from this cache
/// without consulting the provider again; records are immutable, so the
/// cache cannot go stale between filter calls.
#[derive(Clone, Debug, Default)]
pub struct BrowseState {
    threshold: f64,
    visible: Vec<Movie>,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The threshold of the last filter call.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The cached filtered list, in catalog order.
    pub fn visible(&self) -> &[Movie] {
        &self.visible
    }

    /// Recompute the filtered list: every record whose rating is at least
    /// `threshold`.
    ///
    /// The comparison is inclusive and `threshold` is taken as-is; values
    /// outside 0-10 simply match everything or nothing, and NaN matches
    /// nothing. Out-of-range input is the caller's modeling problem, not
    /// an error here.
    pub fn apply_filter(&mut self, provider: &dyn CatalogProvider, threshold: f64) {
        let movies = provider.movies();
        self.threshold = threshold;
        self.visible = movies
            .iter()
            .filter(|movie| movie.rating >= threshold)
            .cloned()
            .collect();
        debug!(
            "BrowseState::apply_filter: threshold {} matched {} of {}",
            threshold,
            self.visible.len(),
            movies.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::movie::MovieId;

    /// Wraps a catalog and counts how often the record list is fetched.
    struct CountingCatalog {
        inner: StaticCatalog,
        fetches: Cell<usize>,
    }

    impl CountingCatalog {
        fn sample() -> Self {
            Self {
                inner: StaticCatalog::sample(),
                fetches: Cell::new(0),
            }
        }
    }

    impl CatalogProvider for CountingCatalog {
        fn movies(&self) -> &[Movie] {
            self.fetches.set(self.fetches.get() + 1);
            self.inner.movies()
        }

        fn movie(&self, id: MovieId) -> Option<&Movie> {
            self.inner.movie(id)
        }
    }

    fn visible_ids(state: &BrowseState) -> Vec<u64> {
        state.visible().iter().map(|m| m.id.get()).collect()
    }

    #[test]
    fn zero_threshold_keeps_the_whole_catalog() {
        let catalog = StaticCatalog::sample();
        let mut state = BrowseState::new();
        state.apply_filter(&catalog, 0.0);
        assert_eq!(state.visible().len(), catalog.movies().len());
    }

    #[test]
    fn ten_filters_everything_out() {
        let catalog = StaticCatalog::sample();
        let mut state = BrowseState::new();
        state.apply_filter(&catalog, 10.0);
        assert_eq!(state.visible(), &[]);
    }

    #[test]
    fn the_comparison_is_inclusive() {
        let catalog = StaticCatalog::sample();
        let mut state = BrowseState::new();
        state.apply_filter(&catalog, 8.8);
        assert_eq!(visible_ids(&state), vec![1]);
    }

    #[test]
    fn results_keep_catalog_order() {
        let catalog = StaticCatalog::sample();
        let mut state = BrowseState::new();
        state.apply_filter(&catalog, 8.0);
        assert_eq!(visible_ids(&state), vec![1, 2, 3, 4]);
    }

    #[test]
    fn eight_point_seven_keeps_only_inception() {
        let catalog = StaticCatalog::new(vec![
            Movie::new(1, "Inception", 8.8, ""),
            Movie::new(2, "Interstellar", 8.6, ""),
        ])
        .unwrap();
        let mut state = BrowseState::new();
        state.apply_filter(&catalog, 8.7);
        assert_eq!(visible_ids(&state), vec![1]);
        assert_eq!(state.visible()[0].rating_label(), "⭐ 8.8");
    }

    #[test]
    fn out_of_range_thresholds_are_taken_as_is() {
        let catalog = StaticCatalog::sample();
        let mut state = BrowseState::new();

        state.apply_filter(&catalog, -3.0);
        assert_eq!(state.visible().len(), catalog.movies().len());

        state.apply_filter(&catalog, 11.0);
        assert_eq!(state.visible(), &[]);
        assert_eq!(state.threshold(), 11.0);
    }

    #[test]
    fn nan_matches_nothing() {
        let catalog = StaticCatalog::sample();
        let mut state = BrowseState::new();
        state.apply_filter(&catalog, f64::NAN);
        assert_eq!(state.visible(), &[]);
    }

    #[test]
    fn each_filter_call_fetches_the_catalog_once() {
        let catalog = CountingCatalog::sample();
        let mut state = BrowseState::new();

        state.apply_filter(&catalog, 5.0);
        assert_eq!(catalog.fetches.get(), 1);

        state.apply_filter(&catalog, 6.0);
        assert_eq!(catalog.fetches.get(), 2);
    }

    #[test]
    fn the_cache_is_reusable_without_refetching() {
        let catalog = CountingCatalog::sample();
        let mut state = BrowseState::new();
        state.apply_filter(&catalog, 8.7);
        let fetches = catalog.fetches.get();

        // Reading the cached list does not touch the provider.
        for _ in 0..3 {
            assert_eq!(visible_ids(&state), vec![1]);
        }
        assert_eq!(catalog.fetches.get(), fetches);
    }
}
