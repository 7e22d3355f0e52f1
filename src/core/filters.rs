use crate::models::{FilterCriteria, Specialist};

/// Check the city predicate: exact equality when a city is constrained.
///
/// City values come from a fixed enumerated set, so the comparison is
/// case-sensitive.
#[inline]
pub fn matches_city(specialist: &Specialist, city: Option<&str>) -> bool {
    match city {
        Some(city) => specialist.city == city,
        None => true,
    }
}

/// Check the specialty predicate: exact equality when constrained.
#[inline]
pub fn matches_specialty(specialist: &Specialist, specialty: Option<&str>) -> bool {
    match specialty {
        Some(specialty) => specialist.specialty == specialty,
        None => true,
    }
}

/// Check the free-text predicate: case-insensitive substring match against
/// the specialist's name or specialty. An empty query matches everything.
#[inline]
pub fn matches_text(specialist: &Specialist, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    specialist.name.to_lowercase().contains(&query)
        || specialist.specialty.to_lowercase().contains(&query)
}

/// Check all active predicates as a conjunction.
///
/// A specialist passes only if every constrained predicate is satisfied;
/// unconstrained predicates are always true.
pub fn matches_criteria(specialist: &Specialist, criteria: &FilterCriteria) -> bool {
    if !matches_city(specialist, criteria.city.as_deref()) {
        return false;
    }

    if !matches_specialty(specialist, criteria.specialty.as_deref()) {
        return false;
    }

    if !matches_text(specialist, &criteria.text_query) {
        return false;
    }

    true
}

/// Apply the criteria to a specialist collection.
///
/// Returns an order-preserving subsequence of the input; an empty input
/// yields an empty output.
pub fn filter_specialists(
    specialists: Vec<Specialist>,
    criteria: &FilterCriteria,
) -> Vec<Specialist> {
    specialists
        .into_iter()
        .filter(|specialist| matches_criteria(specialist, criteria))
        .collect()
}
