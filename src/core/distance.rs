use crate::models::GeoCoordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine great-circle distance between two coordinates
///
/// # Arguments
/// * `a` - First point in decimal degrees
/// * `b` - Second point in decimal degrees
///
/// # Returns
/// Distance in kilometers. Symmetric in its arguments; zero (up to
/// floating-point epsilon) when both points coincide. Behavior for
/// non-finite input is undefined.
#[inline]
pub fn haversine_distance(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    let lat_a_rad = a.latitude.to_radians();
    let lat_b_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a_rad.cos() * lat_b_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance_known_cities() {
        // Delhi to Mumbai (approximately 1150 km)
        let delhi = GeoCoordinate::new(28.6139, 77.2090);
        let mumbai = GeoCoordinate::new(19.0760, 72.8777);

        let distance = haversine_distance(delhi, mumbai);
        assert!(
            distance > 1100.0 && distance < 1200.0,
            "Distance should be ~1150km, got {}",
            distance
        );
    }

    #[test]
    fn test_haversine_distance_one_degree_longitude_at_equator() {
        let origin = GeoCoordinate::new(0.0, 0.0);
        let east = GeoCoordinate::new(0.0, 1.0);

        let distance = haversine_distance(origin, east);
        assert!(
            (distance - 111.19).abs() < 0.1,
            "One degree at the equator should be ~111.2km, got {}",
            distance
        );
    }

    #[test]
    fn test_haversine_distance_symmetric() {
        let jaipur = GeoCoordinate::new(26.9124, 75.7873);
        let lucknow = GeoCoordinate::new(26.8467, 80.9462);

        let forward = haversine_distance(jaipur, lucknow);
        let reverse = haversine_distance(lucknow, jaipur);
        assert!((forward - reverse).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_distance_degenerate() {
        let patna = GeoCoordinate::new(25.5941, 85.1376);
        let distance = haversine_distance(patna, patna);
        assert!(distance.abs() < 1e-9);
    }
}
