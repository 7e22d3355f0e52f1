use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default city set served by the HealthVia directory.
pub const DEFAULT_CITIES: &[&str] = &["Delhi", "Mumbai", "Jaipur", "Lucknow", "Patna"];

/// Default specialty set served by the HealthVia directory.
pub const DEFAULT_SPECIALTIES: &[&str] = &[
    "General Physician",
    "Pediatrician",
    "Cardiologist",
    "Dermatologist",
    "Orthopedic",
    "Gynecologist",
    "ENT Specialist",
    "Psychiatrist",
    "Dentist",
    "Ophthalmologist",
];

/// A latitude/longitude pair in decimal degrees.
///
/// Values are expected to be finite; no normalization is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Specialist record as served by the record store (snake_case row shape).
///
/// The store owns these records; this service only reads them. The one
/// exception is `distance`, a transient per-query annotation that is set on
/// output copies and never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Specialist {
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub specialty: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub consultation_fee: Option<f64>,
    #[serde(default)]
    pub available_days: Option<Vec<String>>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Kilometers from the user's coordinate, present only when one was
    /// supplied with the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Specialist {
    /// The specialist's practice location.
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// User-chosen discovery criteria for a single query.
///
/// `None` city/specialty and an empty `text_query` mean "no constraint".
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub city: Option<String>,
    pub specialty: Option<String>,
    pub text_query: String,
    pub user_location: Option<GeoCoordinate>,
}

/// The enumerated city and specialty sets the criteria surface accepts.
///
/// Supplied by configuration so the engine carries no hard-coded lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub cities: Vec<String>,
    pub specialties: Vec<String>,
}

impl Catalog {
    pub fn new(cities: Vec<String>, specialties: Vec<String>) -> Self {
        Self { cities, specialties }
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    pub fn contains_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
            specialties: DEFAULT_SPECIALTIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A saved favorite as stored in the service's own Postgres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    #[serde(rename = "specialistId")]
    pub specialist_id: String,
    #[serde(rename = "savedAt")]
    pub saved_at: chrono::DateTime<chrono::Utc>,
}
