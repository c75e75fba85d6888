//! Seed data generation for the video store.
//!
//! Pulls movies from a [`reelseed_catalog::CatalogSource`], synthesizes
//! customers and rentals from a single seeded RNG, and writes the five CSV
//! files the store database is loaded from.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod report;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{FileReport, GenerateOptions, GenerationReport, GenreReport, SeedData};
pub use report::{render_summary, write_report_json};
