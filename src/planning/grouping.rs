use crate::catalog::models::Spot;
use crate::geo;
use crate::geo::models::GeoPoint;
use crate::planning::models::{Classification, ClassifiedSpot, ReferenceLabel, SpotGroup};

/// Labels a candidate spot with its nearest reference point. A spot without
/// coordinates, or a route without any reference point, stays unclassified
/// with a zero distance.
pub fn classify(
    location: Option<GeoPoint>,
    origin: Option<GeoPoint>,
    destination: Option<GeoPoint>,
) -> Classification {
    let Some(point) = location else {
        return Classification::unclassified();
    };
    let mut nearest: Option<(ReferenceLabel, f64)> = None;
    let references = [
        (ReferenceLabel::Origin, origin),
        (ReferenceLabel::Destination, destination),
    ];
    for (label, reference) in references {
        let Some(reference) = reference else {
            continue;
        };
        let distance = geo::distance_km(point, reference);
        // Strict comparison, so an exact tie stays with the origin.
        if nearest.map_or(true, |(_, best)| distance < best) {
            nearest = Some((label, distance));
        }
    }
    match nearest {
        Some((label, distance)) => Classification {
            label,
            distance_km: round_to_tenths(distance),
        },
        None => Classification::unclassified(),
    }
}

/// Splits candidate spots of one kind into the sections the planning page
/// renders: near the origin, near the destination, everything else. Each
/// section is sorted by ascending distance; empty sections are omitted.
pub fn group_by_reference(
    spots: Vec<Spot>,
    origin: Option<GeoPoint>,
    destination: Option<GeoPoint>,
) -> Vec<SpotGroup> {
    let mut near_origin = Vec::new();
    let mut near_destination = Vec::new();
    let mut unclassified = Vec::new();
    for spot in spots {
        let classification = classify(spot.location, origin, destination);
        let classified_spot = ClassifiedSpot {
            spot,
            classification,
        };
        match classification.label {
            ReferenceLabel::Origin => near_origin.push(classified_spot),
            ReferenceLabel::Destination => near_destination.push(classified_spot),
            ReferenceLabel::Other => unclassified.push(classified_spot),
        }
    }

    let buckets = [
        (ReferenceLabel::Origin, near_origin),
        (ReferenceLabel::Destination, near_destination),
        (ReferenceLabel::Other, unclassified),
    ];
    let mut groups = Vec::new();
    for (label, mut spots) in buckets {
        if spots.is_empty() {
            continue;
        }
        // Stable sort, so exact distance ties keep the catalog order.
        spots.sort_by(|a, b| {
            a.classification
                .distance_km
                .total_cmp(&b.classification.distance_km)
        });
        groups.push(SpotGroup { label, spots });
    }
    groups
}

fn round_to_tenths(distance: f64) -> f64 {
    (distance * 10.0).round() / 10.0
}
