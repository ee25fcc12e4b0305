use crate::catalog::error::CatalogError;
use crate::catalog::models::{Spot, SpotQuery};
use async_trait::async_trait;

/// Source of candidate spots for the planning page. The production
/// implementation talks to the managed backend; tests and local development
/// use a fixture-backed one.
#[async_trait]
pub trait SpotCatalog: Clone + Send + Sync + 'static {
    async fn partners_within(&self, query: &SpotQuery) -> Result<Vec<Spot>, CatalogError>;

    async fn events_within(&self, query: &SpotQuery) -> Result<Vec<Spot>, CatalogError>;
}
