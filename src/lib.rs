//! HealthVia Discovery - Specialist discovery service for the HealthVia directory
//!
//! This library provides the discovery engine used by the HealthVia healthcare
//! directory. It filters a specialist roster by city, specialty, and free-text
//! query, then ranks the survivors by distance from the user.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{haversine_distance, DiscoveryPipeline, DiscoveryResult};
pub use models::{
    Catalog, DiscoverRequest, DiscoverResponse, FilterCriteria, GeoCoordinate, Specialist,
};
