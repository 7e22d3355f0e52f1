// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Catalog, FilterCriteria, Favorite, GeoCoordinate, Specialist, DEFAULT_CITIES,
    DEFAULT_SPECIALTIES,
};
pub use requests::{CriteriaError, DiscoverRequest, SaveFavoriteRequest, ALL};
pub use responses::{
    CatalogResponse, DiscoverResponse, ErrorResponse, HealthResponse, RemoveFavoriteResponse,
    SaveFavoriteResponse,
};
