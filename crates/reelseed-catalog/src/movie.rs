use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Movie as listed by the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// `YYYY-MM-DD`; the catalog sends an empty string or omits it for
    /// unreleased titles.
    #[serde(default)]
    pub release_date: Option<String>,
}

impl CatalogMovie {
    /// Year component of the release date, `None` when no date is listed.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .and_then(|value| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok())
            .map(|date| date.year())
    }

    /// Reject movies whose release date is present but unreadable.
    pub fn validate(&self, genre: u32) -> CatalogResult<()> {
        if let Some(value) = self.release_date.as_deref()
            && !value.trim().is_empty()
            && self.release_year().is_none()
        {
            return Err(CatalogError::Malformed {
                genre,
                reason: format!("movie {} has invalid release_date '{}'", self.id, value),
            });
        }
        Ok(())
    }
}
