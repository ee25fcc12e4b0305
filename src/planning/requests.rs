use crate::geo::models::GeoPoint;
use serde::{Deserialize, Serialize};

/// Route endpoints as the planning page sends them. Each half of a pair may
/// be missing while the user is still typing; a pair with either half absent
/// counts as an unset point.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQueryParams {
    pub origin_lat: Option<f64>,
    pub origin_lng: Option<f64>,
    pub destination_lat: Option<f64>,
    pub destination_lng: Option<f64>,
}

impl RouteQueryParams {
    pub fn origin(&self) -> Option<GeoPoint> {
        point_from(self.origin_lat, self.origin_lng)
    }

    pub fn destination(&self) -> Option<GeoPoint> {
        point_from(self.destination_lat, self.destination_lng)
    }
}

fn point_from(lat: Option<f64>, lng: Option<f64>) -> Option<GeoPoint> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
        _ => None,
    }
}
