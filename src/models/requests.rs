use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::models::{Catalog, FilterCriteria, GeoCoordinate};

/// Sentinel the UI sends for an unconstrained city or specialty dropdown.
pub const ALL: &str = "all";

/// Errors raised while resolving request criteria against the catalog
#[derive(Debug, Error)]
pub enum CriteriaError {
    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("unknown specialty: {0}")]
    UnknownSpecialty(String),
}

/// Request to discover specialists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub location: Option<GeoCoordinate>,
}

impl DiscoverRequest {
    /// Resolve the wire request into engine criteria.
    ///
    /// `"all"` and an absent field both mean "no constraint"; any other
    /// value must be a member of the configured catalog. The free-text
    /// query and the user coordinate pass through untouched.
    pub fn criteria(&self, catalog: &Catalog) -> Result<FilterCriteria, CriteriaError> {
        let city = match self.city.as_deref() {
            None => None,
            Some(ALL) => None,
            Some(city) if catalog.contains_city(city) => Some(city.to_string()),
            Some(city) => return Err(CriteriaError::UnknownCity(city.to_string())),
        };

        let specialty = match self.specialty.as_deref() {
            None => None,
            Some(ALL) => None,
            Some(specialty) if catalog.contains_specialty(specialty) => {
                Some(specialty.to_string())
            }
            Some(specialty) => return Err(CriteriaError::UnknownSpecialty(specialty.to_string())),
        };

        Ok(FilterCriteria {
            city,
            specialty,
            text_query: self.query.clone(),
            user_location: self.location,
        })
    }
}

/// Request to save a favorite specialist
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveFavoriteRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "specialist_id", rename = "specialistId")]
    pub specialist_id: String,
}
