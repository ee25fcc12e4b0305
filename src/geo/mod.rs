use consts::EARTH_RADIUS_KM;
use models::GeoPoint;

pub mod consts;
pub mod models;

/// Great-circle distance between two points in kilometers, via the haversine
/// formula. `atan2` keeps the result stable for coincident and near-antipodal
/// points.
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi_1 = from.lat * std::f64::consts::PI / 180.0;
    let phi_2 = to.lat * std::f64::consts::PI / 180.0;
    let delta_phi = (to.lat - from.lat) * std::f64::consts::PI / 180.0;
    let delta_lambda = (to.lng - from.lng) * std::f64::consts::PI / 180.0;
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS_KM * c
}
