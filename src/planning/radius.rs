use crate::geo::models::GeoPoint;
use crate::planning::consts::{
    DEFAULT_SEARCH_RADIUS_KM, KM_PER_DEGREE, MAX_SEARCH_RADIUS_KM, MIN_SEARCH_RADIUS_KM,
    RADIUS_DAMPING,
};

/// Search radius for the candidate lookup, derived from the straight-line
/// distance between the route endpoints. This is a flat-earth estimate on
/// purpose: it bounds the backend query to an "along the route" corridor and
/// deliberately undershoots the full point-to-point distance. It is a
/// heuristic, not a containment guarantee.
pub fn search_radius_km(origin: Option<GeoPoint>, destination: Option<GeoPoint>) -> f64 {
    let (Some(origin), Some(destination)) = (origin, destination) else {
        return DEFAULT_SEARCH_RADIUS_KM;
    };
    let lat_degrees = destination.lat - origin.lat;
    let lng_degrees = destination.lng - origin.lng;
    let straight_line_km = (lat_degrees.powi(2) + lng_degrees.powi(2)).sqrt() * KM_PER_DEGREE;
    (straight_line_km * RADIUS_DAMPING).clamp(MIN_SEARCH_RADIUS_KM, MAX_SEARCH_RADIUS_KM)
}
