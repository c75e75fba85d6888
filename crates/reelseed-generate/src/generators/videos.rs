use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::{Rng, RngCore};
use tracing::{info, warn};

use reelseed_catalog::{CatalogMovie, CatalogResult, CatalogSource};
use reelseed_core::{Classification, Genre, Video};

use super::pick;

pub const PRICE_RANGE: RangeInclusive<u32> = 1..=12;
pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=50;

/// Videos after dedup, with fetch statistics.
#[derive(Debug, Clone, Default)]
pub struct FetchedVideos {
    pub videos: Vec<Video>,
    /// Movies listed per genre before dedup, in genre order.
    pub fetched: Vec<(Genre, u64)>,
    pub duplicates_dropped: u64,
}

/// Pull every genre from `source` and build the deduplicated video list.
///
/// Genres are fetched one after another; the first failure aborts the run.
pub async fn fetch_videos(
    source: &dyn CatalogSource,
    genres: &[Genre],
    rng: &mut dyn RngCore,
) -> CatalogResult<FetchedVideos> {
    let mut tagged = Vec::new();
    let mut fetched = Vec::with_capacity(genres.len());

    for genre in genres {
        let movies = source.movies_for_genre(genre).await?;
        info!(
            catalog = source.name(),
            genre = genre.label,
            catalog_id = genre.catalog_id,
            movies = movies.len(),
            "genre fetched"
        );
        fetched.push((*genre, movies.len() as u64));
        tagged.extend(tag_movies(genre, &movies, rng));
    }

    let total = tagged.len();
    let videos = dedup_videos(tagged);
    let duplicates_dropped = (total - videos.len()) as u64;

    Ok(FetchedVideos {
        videos,
        fetched,
        duplicates_dropped,
    })
}

/// Turn catalog movies into videos of `genre` with random price, quantity and
/// classification. Ids stay `0` until [`dedup_videos`] numbers them.
pub fn tag_movies(genre: &Genre, movies: &[CatalogMovie], rng: &mut dyn RngCore) -> Vec<Video> {
    movies
        .iter()
        .map(|movie| {
            let year = movie.release_year();
            if year.is_none() {
                warn!(
                    genre = genre.label,
                    movie_id = movie.id,
                    title = %movie.title,
                    "movie has no release date"
                );
            }
            let price = rng.random_range(PRICE_RANGE);
            let quantity = rng.random_range(QUANTITY_RANGE);
            let classification = pick(&Classification::ALL, rng);
            Video {
                id: 0,
                title: movie.title.clone(),
                description: movie.overview.clone(),
                year,
                price,
                quantity,
                genre: genre.label.to_string(),
                classification,
                catalog_id: movie.id,
            }
        })
        .collect()
}

/// Keep the first video per catalog id and number the survivors `1..=n`.
pub fn dedup_videos(videos: Vec<Video>) -> Vec<Video> {
    let mut seen = HashSet::new();
    videos
        .into_iter()
        .filter(|video| seen.insert(video.catalog_id))
        .enumerate()
        .map(|(idx, mut video)| {
            video.id = idx as u32 + 1;
            video
        })
        .collect()
}
