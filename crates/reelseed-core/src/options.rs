//! Fixed option tables used while generating seed data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Catalog genre paired with the label used by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Genre {
    /// Genre id on the catalog service.
    pub catalog_id: u32,
    /// Display label written to `video.csv`.
    pub label: &'static str,
}

impl Genre {
    pub const fn new(catalog_id: u32, label: &'static str) -> Self {
        Self { catalog_id, label }
    }
}

/// Genres fetched from the catalog, in report order.
///
/// Some labels differ from the catalog's own names: Documentary is stocked as
/// "Epics", Music as "Musical", Science Fiction as "Sci-Fi", Western as
/// "Westerns".
pub const GENRES: [Genre; 12] = [
    Genre::new(28, "Action"),
    Genre::new(12, "Adventure"),
    Genre::new(35, "Comedy"),
    Genre::new(80, "Crime"),
    Genre::new(18, "Drama"),
    Genre::new(99, "Epics"),
    Genre::new(14, "Fantasy"),
    Genre::new(27, "Horror"),
    Genre::new(10402, "Musical"),
    Genre::new(878, "Sci-Fi"),
    Genre::new(10752, "War"),
    Genre::new(37, "Westerns"),
];

pub fn genre_by_catalog_id(catalog_id: u32) -> Result<&'static Genre> {
    GENRES
        .iter()
        .find(|genre| genre.catalog_id == catalog_id)
        .ok_or(Error::UnknownGenre(catalog_id))
}

pub const SUBURBS: [&str; 5] = ["Kingaroy", "Gordonbrook", "Taabinga", "Coolabunia", "Booie"];
pub const STATE: &str = "Queensland";
pub const POSTCODE: u32 = 4610;
/// Local exchange prefixes; a contact number is `7` + prefix + 4 digits.
pub const AREA_CODES: [u32; 7] = [4160, 4162, 4142, 4168, 4172, 4630, 4633];

/// Content rating assigned to a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "G")]
    General,
    #[serde(rename = "PG")]
    ParentalGuidance,
    #[serde(rename = "M")]
    Mature,
    #[serde(rename = "MA15+")]
    MatureAccompanied,
    #[serde(rename = "R18+")]
    Restricted,
}

impl Classification {
    pub const ALL: [Classification; 5] = [
        Classification::General,
        Classification::ParentalGuidance,
        Classification::Mature,
        Classification::MatureAccompanied,
        Classification::Restricted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "G",
            Self::ParentalGuidance => "PG",
            Self::Mature => "M",
            Self::MatureAccompanied => "MA15+",
            Self::Restricted => "R18+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "EFTPOS")]
    Eftpos,
    #[serde(rename = "Credit Card")]
    CreditCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::Eftpos,
        PaymentMethod::CreditCard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Eftpos => "EFTPOS",
            Self::CreditCard => "Credit Card",
        }
    }
}

/// How a rental reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FulfillmentMode {
    PickUp,
    Delivery,
}

impl FulfillmentMode {
    pub const ALL: [FulfillmentMode; 2] = [FulfillmentMode::PickUp, FulfillmentMode::Delivery];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PickUp => "pick-up",
            Self::Delivery => "delivery",
        }
    }
}

/// Physical format of a rented item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    #[serde(rename = "DVD")]
    Dvd,
    #[serde(rename = "Blu-ray")]
    BluRay,
}

impl MediaType {
    pub const ALL: [MediaType; 2] = [MediaType::Dvd, MediaType::BluRay];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dvd => "DVD",
            Self::BluRay => "Blu-ray",
        }
    }
}

macro_rules! impl_label {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_label!(Classification);
impl_label!(PaymentMethod);
impl_label!(FulfillmentMode);
impl_label!(MediaType);
