//! Record generators. Every draw comes from the caller's RNG so a run is
//! reproducible from its seed.

use rand::{Rng, RngCore};

pub mod customers;
pub mod rentals;
pub mod videos;

pub use customers::generate_customers;
pub use rentals::{RentalSet, assemble_rentals};
pub use videos::{FetchedVideos, dedup_videos, fetch_videos, tag_movies};

/// Uniform pick from a fixed, non-empty option table.
pub(crate) fn pick<T: Copy>(values: &[T], rng: &mut dyn RngCore) -> T {
    let idx = rng.random_range(0..values.len());
    values[idx]
}
