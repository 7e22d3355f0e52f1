// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod pipeline;
pub mod ranking;

pub use distance::haversine_distance;
pub use filters::{filter_specialists, matches_city, matches_criteria, matches_specialty, matches_text};
pub use pipeline::{DiscoveryPipeline, DiscoveryResult};
pub use ranking::{annotate_distances, rank_specialists};
