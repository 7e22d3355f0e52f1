use crate::core::distance::haversine_distance;
use crate::models::{GeoCoordinate, Specialist};

/// Attach the distance from `origin` to every specialist in place.
pub fn annotate_distances(specialists: &mut [Specialist], origin: GeoCoordinate) {
    for specialist in specialists.iter_mut() {
        specialist.distance = Some(haversine_distance(origin, specialist.coordinate()));
    }
}

/// Order a specialist collection for presentation.
///
/// Without a user location the input order is preserved untouched — the
/// record store already serves specialists name-ascending, and no comparison
/// happens in this branch. With a location, every record is annotated with
/// its distance and the whole set is re-sorted ascending. The sort is
/// stable, so equal distances keep their relative input order.
pub fn rank_specialists(
    mut specialists: Vec<Specialist>,
    user_location: Option<GeoCoordinate>,
) -> Vec<Specialist> {
    let origin = match user_location {
        Some(origin) => origin,
        None => return specialists,
    };

    annotate_distances(&mut specialists, origin);

    specialists.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    specialists
}
