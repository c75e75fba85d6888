use async_trait::async_trait;

use reelseed_core::Genre;

use crate::error::CatalogResult;
use crate::movie::CatalogMovie;

/// Trait implemented by anything that can list movies per genre.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short identifier used in logs (e.g. `tmdb`).
    fn name(&self) -> &'static str;

    /// Movies the catalog lists under `genre`, in catalog order.
    async fn movies_for_genre(&self, genre: &Genre) -> CatalogResult<Vec<CatalogMovie>>;
}
