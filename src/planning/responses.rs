use crate::catalog::models::{Spot, SpotKind};
use crate::geo::models::GeoPoint;
use crate::planning::models::{ClassifiedSpot, ReferenceLabel, SpotGroup};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbySpotsResponse {
    /// Set only when both candidate fetches failed and there is nothing to
    /// show at all.
    pub error: bool,
    pub search_radius_km: f64,
    pub partners: SpotListing,
    pub events: SpotListing,
}

/// One kind's grouped results, with its own failure flag so a failed event
/// fetch never blanks the partner sections and vice versa.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotListing {
    pub error: bool,
    pub groups: Vec<SpotGroupView>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotGroupView {
    pub label: ReferenceLabel,
    pub title: String,
    pub spots: Vec<ClassifiedSpotView>,
}

impl From<SpotGroup> for SpotGroupView {
    fn from(group: SpotGroup) -> Self {
        Self {
            label: group.label,
            title: group.label.group_title().to_string(),
            spots: group.spots.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedSpotView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    pub kind: SpotKind,
    pub reference: ReferenceLabel,
    pub distance_km: f64,
}

impl From<ClassifiedSpot> for ClassifiedSpotView {
    fn from(classified_spot: ClassifiedSpot) -> Self {
        let Spot {
            id,
            name,
            address,
            location,
            kind,
        } = classified_spot.spot;
        Self {
            id,
            name,
            address,
            location,
            kind,
            reference: classified_spot.classification.label,
            distance_km: classified_spot.classification.distance_km,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRadiusResponse {
    pub error: bool,
    pub search_radius_km: f64,
}
