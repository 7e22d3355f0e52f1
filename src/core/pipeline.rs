use crate::core::{filters::filter_specialists, ranking::rank_specialists};
use crate::models::{Catalog, FilterCriteria, Specialist};

/// Result of a discovery pass
#[derive(Debug)]
pub struct DiscoveryResult {
    pub specialists: Vec<Specialist>,
    pub total_candidates: usize,
}

/// Discovery orchestrator - composes filtering and ranking
///
/// # Pipeline stages
/// 1. Predicate filtering (city, specialty, free text)
/// 2. Distance annotation and ranking (when a user location is known)
///
/// Filtering always runs first, so distances are never computed for
/// specialists the criteria exclude.
#[derive(Debug, Clone)]
pub struct DiscoveryPipeline {
    catalog: Catalog,
}

impl DiscoveryPipeline {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn with_default_catalog() -> Self {
        Self {
            catalog: Catalog::default(),
        }
    }

    /// The enumerated city/specialty sets this pipeline accepts criteria
    /// against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run a discovery pass over the full specialist roster.
    ///
    /// Pure and idempotent: identical inputs produce identical output, and
    /// the input collection is consumed by value, so the caller's store or
    /// cache copy is never mutated. The transient `distance` field is set
    /// only on the returned records.
    ///
    /// # Arguments
    /// * `specialists` - The roster, in the store's name-ascending order
    /// * `criteria` - The user's city/specialty/text/location criteria
    ///
    /// # Returns
    /// DiscoveryResult with the ordered, distance-annotated subset plus the
    /// pre-filter candidate count.
    pub fn discover(
        &self,
        specialists: Vec<Specialist>,
        criteria: &FilterCriteria,
    ) -> DiscoveryResult {
        let total_candidates = specialists.len();

        let filtered = filter_specialists(specialists, criteria);
        let ranked = rank_specialists(filtered, criteria.user_location);

        DiscoveryResult {
            specialists: ranked,
            total_candidates,
        }
    }
}

impl Default for DiscoveryPipeline {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoCoordinate;

    fn create_specialist(
        id: &str,
        name: &str,
        specialty: &str,
        city: &str,
        lat: f64,
        lon: f64,
    ) -> Specialist {
        Specialist {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
            city: city.to_string(),
            address: format!("{} Clinic Road", id),
            phone: "+91 9000000000".to_string(),
            email: None,
            latitude: lat,
            longitude: lon,
            experience_years: None,
            consultation_fee: None,
            available_days: None,
            rating: None,
            distance: None,
        }
    }

    fn roster() -> Vec<Specialist> {
        vec![
            create_specialist("1", "Dr. Alice Rao", "Cardiologist", "Delhi", 28.6139, 77.2090),
            create_specialist("2", "Dr. Bob Singh", "Dermatologist", "Mumbai", 19.0760, 72.8777),
            create_specialist("3", "Dr. Carol Verma", "Cardiologist", "Jaipur", 26.9124, 75.7873),
        ]
    }

    #[test]
    fn test_discover_city_filter() {
        let pipeline = DiscoveryPipeline::with_default_catalog();
        let criteria = FilterCriteria {
            city: Some("Mumbai".to_string()),
            ..FilterCriteria::default()
        };

        let result = pipeline.discover(roster(), &criteria);

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.specialists.len(), 1);
        assert_eq!(result.specialists[0].id, "2");
    }

    #[test]
    fn test_discover_no_constraints_returns_roster_unchanged() {
        let pipeline = DiscoveryPipeline::with_default_catalog();
        let input = roster();

        let result = pipeline.discover(input.clone(), &FilterCriteria::default());

        assert_eq!(result.specialists, input);
        assert_eq!(result.total_candidates, 3);
    }

    #[test]
    fn test_discover_filters_before_ranking() {
        // With a location near Jaipur, the excluded Mumbai dermatologist must
        // not appear even though they would rank; the kept records all carry
        // distances.
        let pipeline = DiscoveryPipeline::with_default_catalog();
        let criteria = FilterCriteria {
            specialty: Some("Cardiologist".to_string()),
            user_location: Some(GeoCoordinate::new(26.9, 75.8)),
            ..FilterCriteria::default()
        };

        let result = pipeline.discover(roster(), &criteria);

        assert_eq!(result.specialists.len(), 2);
        assert_eq!(result.specialists[0].id, "3");
        assert_eq!(result.specialists[1].id, "1");
        assert!(result.specialists.iter().all(|s| s.distance.is_some()));
    }

    #[test]
    fn test_discover_empty_roster() {
        let pipeline = DiscoveryPipeline::with_default_catalog();
        let criteria = FilterCriteria {
            city: Some("Patna".to_string()),
            text_query: "anything".to_string(),
            ..FilterCriteria::default()
        };

        let result = pipeline.discover(Vec::new(), &criteria);
        assert!(result.specialists.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_discover_idempotent() {
        let pipeline = DiscoveryPipeline::with_default_catalog();
        let criteria = FilterCriteria {
            text_query: "dr".to_string(),
            user_location: Some(GeoCoordinate::new(25.0, 80.0)),
            ..FilterCriteria::default()
        };

        let first = pipeline.discover(roster(), &criteria);
        let second = pipeline.discover(roster(), &criteria);
        assert_eq!(first.specialists, second.specialists);
    }

    #[test]
    fn test_discover_composes_filter_then_rank() {
        use crate::core::{filters::filter_specialists, ranking::rank_specialists};

        let pipeline = DiscoveryPipeline::with_default_catalog();
        let criteria = FilterCriteria {
            specialty: Some("Cardiologist".to_string()),
            user_location: Some(GeoCoordinate::new(20.0, 78.0)),
            ..FilterCriteria::default()
        };

        let composed = rank_specialists(
            filter_specialists(roster(), &criteria),
            criteria.user_location,
        );
        let result = pipeline.discover(roster(), &criteria);

        assert_eq!(result.specialists, composed);
    }
}
