//! Movie catalog sources.
//!
//! The generator only depends on [`CatalogSource`]; the TMDB adapter talks to
//! the live service and [`StaticCatalog`] serves fixed data for offline runs.

pub mod error;
pub mod fixture;
pub mod movie;
pub mod options;
pub mod source;
pub mod tmdb;

pub use error::{CatalogError, CatalogResult};
pub use fixture::StaticCatalog;
pub use movie::CatalogMovie;
pub use options::CatalogOptions;
pub use source::CatalogSource;
pub use tmdb::TmdbCatalog;
