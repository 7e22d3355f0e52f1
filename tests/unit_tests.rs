// Unit tests for HealthVia Discovery

use healthvia_discovery::core::{
    distance::haversine_distance,
    filters::{filter_specialists, matches_city, matches_specialty, matches_text},
    ranking::rank_specialists,
};
use healthvia_discovery::models::{FilterCriteria, GeoCoordinate, Specialist};

fn make_specialist(
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
        address: "1 Hospital Road".to_string(),
        phone: "+91 9000000000".to_string(),
        email: None,
        latitude: lat,
        longitude: lon,
        experience_years: Some(10),
        consultation_fee: Some(500.0),
        available_days: None,
        rating: Some(4.5),
        distance: None,
    }
}

#[test]
fn test_haversine_distance_zero() {
    let delhi = GeoCoordinate::new(28.6139, 77.2090);
    let distance = haversine_distance(delhi, delhi);
    assert!(distance < 0.01);
}

#[test]
fn test_haversine_distance_delhi_to_mumbai() {
    // Delhi to Mumbai is approximately 1150 km great-circle
    let delhi = GeoCoordinate::new(28.6139, 77.2090);
    let mumbai = GeoCoordinate::new(19.0760, 72.8777);

    let distance = haversine_distance(delhi, mumbai);
    assert!(distance > 1050.0 && distance < 1250.0, "got {}", distance);
}

#[test]
fn test_haversine_one_degree_longitude_at_equator() {
    // One degree of longitude at the equator is about 111.19 km
    let origin = GeoCoordinate::new(0.0, 0.0);
    let east = GeoCoordinate::new(0.0, 1.0);

    let distance = haversine_distance(origin, east);
    assert!((distance - 111.19).abs() < 0.5, "got {}", distance);
}

#[test]
fn test_haversine_symmetry() {
    let jaipur = GeoCoordinate::new(26.9124, 75.7873);
    let patna = GeoCoordinate::new(25.5941, 85.1376);

    let forward = haversine_distance(jaipur, patna);
    let backward = haversine_distance(patna, jaipur);
    assert!((forward - backward).abs() < 1e-9);
}

#[test]
fn test_city_filter_exact_match() {
    let specialist = make_specialist("1", "Dr. Mehta", "Dentist", "Mumbai", 19.07, 72.87);

    assert!(matches_city(&specialist, Some("Mumbai")));
    assert!(!matches_city(&specialist, Some("Delhi")));
    assert!(matches_city(&specialist, None));
}

#[test]
fn test_city_filter_is_case_sensitive() {
    // City values come from the catalog verbatim, so casing must match
    let specialist = make_specialist("1", "Dr. Mehta", "Dentist", "Mumbai", 19.07, 72.87);

    assert!(!matches_city(&specialist, Some("mumbai")));
}

#[test]
fn test_specialty_filter_exact_match() {
    let specialist = make_specialist("1", "Dr. Mehta", "Cardiologist", "Delhi", 28.61, 77.20);

    assert!(matches_specialty(&specialist, Some("Cardiologist")));
    assert!(!matches_specialty(&specialist, Some("Dentist")));
    assert!(matches_specialty(&specialist, None));
}

#[test]
fn test_text_filter_matches_name_case_insensitive() {
    let specialist = make_specialist("1", "Dr. Alice Rao", "Pediatrician", "Delhi", 28.61, 77.20);

    assert!(matches_text(&specialist, "rao"));
    assert!(matches_text(&specialist, "RAO"));
    assert!(matches_text(&specialist, "alice r"));
    assert!(!matches_text(&specialist, "singh"));
}

#[test]
fn test_text_filter_matches_specialty() {
    let specialist = make_specialist("1", "Dr. Mehta", "Cardiologist", "Delhi", 28.61, 77.20);

    assert!(matches_text(&specialist, "cardio"));
    assert!(matches_text(&specialist, "Cardiologist"));
}

#[test]
fn test_empty_query_matches_everything() {
    let specialist = make_specialist("1", "Dr. Mehta", "Dentist", "Jaipur", 26.91, 75.78);

    assert!(matches_text(&specialist, ""));
}

#[test]
fn test_filters_are_conjunctive() {
    let specialists = vec![
        make_specialist("1", "Dr. Alice Rao", "Cardiologist", "Mumbai", 19.07, 72.87),
        make_specialist("2", "Dr. Alice Rao", "Cardiologist", "Delhi", 28.61, 77.20),
        make_specialist("3", "Dr. Bob Singh", "Cardiologist", "Mumbai", 19.08, 72.88),
    ];

    let criteria = FilterCriteria {
        city: Some("Mumbai".to_string()),
        specialty: Some("Cardiologist".to_string()),
        text_query: "rao".to_string(),
        user_location: None,
    };

    let survivors = filter_specialists(specialists, &criteria);
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].id, "1");
}

#[test]
fn test_filter_preserves_roster_order() {
    let specialists = vec![
        make_specialist("1", "Dr. A", "Dentist", "Patna", 25.59, 85.13),
        make_specialist("2", "Dr. B", "Dentist", "Lucknow", 26.84, 80.94),
        make_specialist("3", "Dr. C", "Dentist", "Patna", 25.60, 85.14),
    ];

    let criteria = FilterCriteria {
        city: Some("Patna".to_string()),
        ..FilterCriteria::default()
    };

    let survivors = filter_specialists(specialists, &criteria);
    let ids: Vec<&str> = survivors.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_ranking_without_location_is_identity() {
    let specialists = vec![
        make_specialist("far", "Dr. A", "Dentist", "Patna", 25.59, 85.13),
        make_specialist("near", "Dr. B", "Dentist", "Delhi", 28.61, 77.20),
    ];

    let ranked = rank_specialists(specialists, None);

    // Order untouched, no distances computed
    assert_eq!(ranked[0].id, "far");
    assert_eq!(ranked[1].id, "near");
    assert!(ranked.iter().all(|s| s.distance.is_none()));
}

#[test]
fn test_ranking_sorts_by_distance_ascending() {
    let specialists = vec![
        make_specialist("two", "Dr. A", "Dentist", "Delhi", 0.0, 2.0),
        make_specialist("zero", "Dr. B", "Dentist", "Delhi", 0.0, 0.0),
        make_specialist("one", "Dr. C", "Dentist", "Delhi", 0.0, 1.0),
    ];

    let ranked = rank_specialists(specialists, Some(GeoCoordinate::new(0.0, 0.0)));

    let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["zero", "one", "two"]);

    // Every record carries its computed distance
    assert!(ranked.iter().all(|s| s.distance.is_some()));
    assert!(ranked[0].distance.unwrap() < 0.01);
    assert!((ranked[1].distance.unwrap() - 111.19).abs() < 0.5);
}
