use serde::{Deserialize, Serialize};
use crate::models::domain::Specialist;

/// Response for the discover endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverResponse {
    pub specialists: Vec<Specialist>,
    pub total_results: usize,
}

/// Response for the catalog endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub cities: Vec<String>,
    pub specialties: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response after saving a favorite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFavoriteResponse {
    pub success: bool,
    pub favorite_id: String,
}

/// Response after removing a favorite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveFavoriteResponse {
    pub success: bool,
    pub removed: bool,
}
