use crate::catalog::error::CatalogError;
use crate::catalog::interface::SpotCatalog;
use crate::catalog::models::{Spot, SpotQuery};
use crate::cli::Args;
use async_trait::async_trait;
use url::Url;

/// `SpotCatalog` backed by the managed backend's HTTP API.
#[derive(Clone)]
pub struct BackendSpotCatalog {
    http_client: reqwest::Client,
    base_url: Url,
}

impl BackendSpotCatalog {
    pub fn new(args: &Args) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: args.backend_url.clone(),
        }
    }

    async fn fetch_spots(&self, path: &str, query: &SpotQuery) -> Result<Vec<Spot>, CatalogError> {
        let mut url = self.base_url.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("radiusKm", &query.radius_km.to_string());
            if let Some(origin) = query.origin {
                pairs.append_pair("originLat", &origin.lat.to_string());
                pairs.append_pair("originLng", &origin.lng.to_string());
            }
            if let Some(destination) = query.destination {
                pairs.append_pair("destinationLat", &destination.lat.to_string());
                pairs.append_pair("destinationLng", &destination.lng.to_string());
            }
        }
        let response = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?;
        let spots = response.json::<Vec<Spot>>().await?;
        Ok(spots)
    }
}

#[async_trait]
impl SpotCatalog for BackendSpotCatalog {
    async fn partners_within(&self, query: &SpotQuery) -> Result<Vec<Spot>, CatalogError> {
        self.fetch_spots("partners/nearby", query).await
    }

    async fn events_within(&self, query: &SpotQuery) -> Result<Vec<Spot>, CatalogError> {
        self.fetch_spots("events/nearby", query).await
    }
}
