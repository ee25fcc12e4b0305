use crate::catalog::models::Spot;
use serde::{Deserialize, Serialize};

/// Which reference point a candidate spot sits closest to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceLabel {
    Origin,
    Destination,
    Other,
}

impl ReferenceLabel {
    /// Heading of the UI section a group of this label renders into.
    pub fn group_title(self) -> &'static str {
        match self {
            ReferenceLabel::Origin => "near origin",
            ReferenceLabel::Destination => "near destination",
            ReferenceLabel::Other => "along the route",
        }
    }
}

/// Derived per request, never persisted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Classification {
    pub label: ReferenceLabel,
    /// Distance to the nearest available reference point, rounded to one
    /// decimal place. Zero when the spot or both references lack coordinates.
    pub distance_km: f64,
}

impl Classification {
    pub fn unclassified() -> Self {
        Self {
            label: ReferenceLabel::Other,
            distance_km: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedSpot {
    pub spot: Spot,
    pub classification: Classification,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpotGroup {
    pub label: ReferenceLabel,
    pub spots: Vec<ClassifiedSpot>,
}
