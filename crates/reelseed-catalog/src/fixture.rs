use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;

use reelseed_core::{Genre, genre_by_catalog_id};

use crate::error::{CatalogError, CatalogResult};
use crate::movie::CatalogMovie;
use crate::source::CatalogSource;

/// Catalog served from memory.
///
/// Fixture files map genre catalog ids to movie lists:
/// `{"28": [{"id": 1, "title": "...", "overview": "...", "release_date": "..."}]}`.
/// Genres missing from the map list no movies.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    movies: BTreeMap<u32, Vec<CatalogMovie>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, catalog_id: u32, movies: Vec<CatalogMovie>) -> Self {
        self.movies.entry(catalog_id).or_default().extend(movies);
        self
    }

    pub fn from_json_str(content: &str) -> CatalogResult<Self> {
        let raw: BTreeMap<String, Vec<CatalogMovie>> = serde_json::from_str(content)?;
        let mut movies = BTreeMap::new();
        for (key, list) in raw {
            let catalog_id: u32 = key.trim().parse().map_err(|_| CatalogError::Malformed {
                genre: 0,
                reason: format!("fixture key '{key}' is not a genre id"),
            })?;
            genre_by_catalog_id(catalog_id)?;
            for movie in &list {
                movie.validate(catalog_id)?;
            }
            movies.insert(catalog_id, list);
        }
        Ok(Self { movies })
    }

    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn movie_count(&self) -> usize {
        self.movies.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn movies_for_genre(&self, genre: &Genre) -> CatalogResult<Vec<CatalogMovie>> {
        Ok(self
            .movies
            .get(&genre.catalog_id)
            .cloned()
            .unwrap_or_default())
    }
}
