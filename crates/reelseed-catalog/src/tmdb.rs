use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use reelseed_core::Genre;

use crate::error::{CatalogError, CatalogResult};
use crate::movie::CatalogMovie;
use crate::options::CatalogOptions;
use crate::source::CatalogSource;

/// Adapter for The Movie Database (TMDB) v3 API.
#[derive(Clone)]
pub struct TmdbCatalog {
    client: Client,
    api_key: String,
    options: CatalogOptions,
}

impl fmt::Debug for TmdbCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbCatalog")
            .field("api_key", &"***")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// One page of `/discover/movie` results.
#[derive(Debug, Deserialize)]
struct DiscoverPage {
    #[serde(default)]
    page: u32,
    results: Vec<CatalogMovie>,
    #[serde(default)]
    total_pages: u32,
}

impl TmdbCatalog {
    pub fn new(api_key: impl Into<String>, options: CatalogOptions) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .user_agent(concat!("reelseed/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            options,
        })
    }

    /// Build an adapter with the key read from `options.api_key_env`.
    pub fn from_env(options: CatalogOptions) -> CatalogResult<Self> {
        let api_key = std::env::var(&options.api_key_env)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| CatalogError::MissingApiKey(options.api_key_env.clone()))?;
        Self::new(api_key, options)
    }

    fn discover_url(&self) -> String {
        format!(
            "{}/discover/movie",
            self.options.base_url.trim_end_matches('/')
        )
    }

    async fn fetch_page(&self, genre: &Genre, page: u32) -> CatalogResult<DiscoverPage> {
        let with_genres = genre.catalog_id.to_string();
        let page_param = page.to_string();
        let response = self
            .client
            .get(self.discover_url())
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("with_genres", with_genres.as_str()),
                ("language", self.options.language.as_str()),
                ("page", page_param.as_str()),
            ])
            .send()
            .await
            .map_err(redact_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                genre: genre.catalog_id,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(redact_url)?;
        serde_json::from_slice(&body).map_err(|err| CatalogError::Malformed {
            genre: genre.catalog_id,
            reason: err.to_string(),
        })
    }
}

/// Request URLs carry the API key in the query string.
fn redact_url(err: reqwest::Error) -> CatalogError {
    CatalogError::Http(err.without_url())
}

#[async_trait]
impl CatalogSource for TmdbCatalog {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    async fn movies_for_genre(&self, genre: &Genre) -> CatalogResult<Vec<CatalogMovie>> {
        let mut movies = Vec::new();

        for page in 1..=self.options.pages.max(1) {
            let discovered = self.fetch_page(genre, page).await?;
            debug!(
                genre = genre.label,
                page = discovered.page,
                total_pages = discovered.total_pages,
                results = discovered.results.len(),
                "catalog page fetched"
            );

            for movie in &discovered.results {
                movie.validate(genre.catalog_id)?;
            }
            movies.extend(discovered.results);

            if page >= discovered.total_pages {
                break;
            }
        }

        Ok(movies)
    }
}
