//! Seed records written to the output files.
//!
//! Field order on every record is the column order of its CSV file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::options::{Classification, FulfillmentMode, MediaType, PaymentMethod};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Local sequential id, assigned after dedup.
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Release year; empty when the catalog has no release date.
    pub year: Option<i32>,
    pub price: u32,
    pub quantity: u32,
    pub genre: String,
    pub classification: Classification,
    /// Catalog id the record was built from. Dedup key, never written out.
    #[serde(skip)]
    pub catalog_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub street_address: String,
    pub suburb: String,
    pub state: String,
    pub postcode: u32,
    pub contact_number: String,
    pub email: String,
    pub date_joined: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u32,
    pub method: PaymentMethod,
    pub amount: u32,
    pub date_paid: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub customer_id: u32,
    pub payment_id: u32,
    pub date_rented: NaiveDate,
    pub date_due: NaiveDate,
    pub fulfillment: FulfillmentMode,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub id: u32,
    pub transaction_id: u32,
    pub video_id: u32,
    pub media_type: MediaType,
    pub note: String,
}
