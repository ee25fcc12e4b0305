use crate::app_context::AppContext;
use crate::catalog::error::CatalogError;
use crate::catalog::interface::SpotCatalog;
use crate::catalog::models::{Spot, SpotKind, SpotQuery};
use crate::geo::models::GeoPoint;
use crate::planning::requests::RouteQueryParams;
use crate::planning::responses::{NearbySpotsResponse, SearchRadiusResponse, SpotListing};
use crate::planning::{grouping, radius};
use axum::extract::{Query, State};
use axum::response::Json;

/// Candidate partners and events around the planned route, grouped for the
/// planning page. The two fetches run concurrently and fail independently.
pub async fn nearby_spots<SC>(
    State(app_context): State<AppContext<SC>>,
    Query(params): Query<RouteQueryParams>,
) -> Json<NearbySpotsResponse>
where
    SC: SpotCatalog,
{
    let origin = params.origin();
    let destination = params.destination();
    let radius_km = radius::search_radius_km(origin, destination);
    let query = SpotQuery {
        origin,
        destination,
        radius_km,
    };

    let (partners, events) = tokio::join!(
        app_context.spots.partners_within(&query),
        app_context.spots.events_within(&query),
    );

    Json(NearbySpotsResponse {
        error: partners.is_err() && events.is_err(),
        search_radius_km: radius_km,
        partners: listing_from(SpotKind::Partner, partners, origin, destination),
        events: listing_from(SpotKind::Event, events, origin, destination),
    })
}

#[axum::debug_handler]
pub async fn search_radius(Query(params): Query<RouteQueryParams>) -> Json<SearchRadiusResponse> {
    Json(SearchRadiusResponse {
        error: false,
        search_radius_km: radius::search_radius_km(params.origin(), params.destination()),
    })
}

fn listing_from(
    kind: SpotKind,
    fetched: Result<Vec<Spot>, CatalogError>,
    origin: Option<GeoPoint>,
    destination: Option<GeoPoint>,
) -> SpotListing {
    match fetched {
        Ok(spots) => SpotListing {
            error: false,
            groups: grouping::group_by_reference(spots, origin, destination)
                .into_iter()
                .map(Into::into)
                .collect(),
        },
        Err(err) => {
            tracing::error!("Failed to fetch candidate spots of kind {kind:?}: {err}.");
            SpotListing {
                error: true,
                groups: Vec::new(),
            }
        }
    }
}
