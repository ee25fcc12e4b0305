use crate::geo::models::GeoPoint;
use serde::{Deserialize, Serialize};

/// A candidate stop along a planned route: a rental partner's place or a
/// community event. Owned by the managed backend; immutable here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    pub kind: SpotKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpotKind {
    Partner,
    Event,
}

/// Parameters of one candidate lookup. Radius enforcement happens in the
/// backend; this side only derives the value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpotQuery {
    pub origin: Option<GeoPoint>,
    pub destination: Option<GeoPoint>,
    pub radius_km: f64,
}
