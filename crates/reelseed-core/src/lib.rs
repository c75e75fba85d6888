//! Core contracts for reelseed.
//!
//! Defines the seed record types, the fixed option tables used during
//! generation and the error type shared across the workspace.

pub mod error;
pub mod options;
pub mod records;

pub use error::{Error, Result};
pub use options::{
    AREA_CODES, Classification, FulfillmentMode, GENRES, Genre, MediaType, POSTCODE,
    PaymentMethod, STATE, SUBURBS, genre_by_catalog_id,
};
pub use records::{Customer, Payment, Transaction, TransactionRequest, Video};

/// Days between a rental and its due date.
pub const RENTAL_PERIOD_DAYS: i64 = 7;
