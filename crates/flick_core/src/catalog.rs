use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::movie::{Movie, MovieId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog contains movie id {0} more than once")]
    DuplicateId(MovieId),
}

/// Source of movie records for the browse pipeline.
///
/// Injected where records are needed, so a backend-driven catalog can
/// replace the built-in data without touching the filter or the UI.
pub trait CatalogProvider {
    /// All records, in catalog order.
    fn movies(&self) -> &[Movie];

    /// Look up one record by id.
    fn movie(&self, id: MovieId) -> Option<&Movie>;
}

/// An in-memory catalog: the built-in sample, or one loaded from a JSON
/// file at startup.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    movies: Vec<Movie>,
    by_id: FxHashMap<MovieId, usize>,
}

impl StaticCatalog {
    /// Build a catalog from records, rejecting duplicate ids.
    pub fn new(movies: Vec<Movie>) -> Result<Self, CatalogError> {
        let mut by_id = FxHashMap::default();
        for (idx, movie) in movies.iter().enumerate() {
            if by_id.insert(movie.id, idx).is_some() {
                return Err(CatalogError::DuplicateId(movie.id));
            }
        }
        Ok(Self { movies, by_id })
    }

    /// The built-in record list.
    ///
    /// Ratings top out at Inception's 8.8, so a threshold of 10 always
    /// filters everything out.
    pub fn sample() -> Self {
        let movies = vec![
            Movie::new(1, "Inception", 8.8, "https://via.placeholder.com/300x450"),
            Movie::new(2, "Interstellar", 8.6, "https://via.placeholder.com/300x450"),
            Movie::new(3, "The Prestige", 8.5, "https://via.placeholder.com/300x450"),
            Movie::new(4, "Memento", 8.4, "https://via.placeholder.com/300x450"),
            Movie::new(5, "Dunkirk", 7.8, "https://via.placeholder.com/300x450"),
            Movie::new(6, "Tenet", 7.3, "https://via.placeholder.com/300x450"),
        ];
        Self::new(movies).expect("sample ids are unique")
    }

    /// Read a catalog from a file holding a JSON array of records.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let movies: Vec<Movie> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("loaded {} movies from {}", movies.len(), path.display());
        Self::new(movies)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn movies(&self) -> &[Movie] {
        &self.movies
    }

    fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.by_id.get(&id).map(|&idx| &self.movies[idx])
    }
}
