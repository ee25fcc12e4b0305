use crate::catalog::error::CatalogError;
use crate::catalog::interface::SpotCatalog;
use crate::catalog::models::{Spot, SpotKind, SpotQuery};
use async_trait::async_trait;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

/// In-memory `SpotCatalog` for local development and tests. Loadable from an
/// NDJSON file with one `Spot` per line.
#[derive(Clone)]
pub struct FixtureSpotCatalog {
    spots: Arc<Vec<Spot>>,
}

impl FixtureSpotCatalog {
    pub fn new(spots: Vec<Spot>) -> Self {
        Self {
            spots: Arc::new(spots),
        }
    }

    pub fn from_file(path: &Path) -> Self {
        let fixtures_file = File::open(path).expect("Failed to open the fixtures file.");
        let file_reader = BufReader::new(fixtures_file);
        let mut spots = Vec::new();
        for line in file_reader.lines() {
            let line = line.expect("Failed to read a line in the fixtures file.");
            let spot: Spot = serde_json::from_str(&line)
                .expect("Failed to deserialize a line in the fixtures file into a `Spot`.");
            spots.push(spot);
        }
        tracing::info!("Loaded {} fixture spots.", spots.len());
        Self::new(spots)
    }

    fn of_kind(&self, kind: SpotKind) -> Vec<Spot> {
        self.spots
            .iter()
            .filter(|spot| spot.kind == kind)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SpotCatalog for FixtureSpotCatalog {
    async fn partners_within(&self, _query: &SpotQuery) -> Result<Vec<Spot>, CatalogError> {
        Ok(self.of_kind(SpotKind::Partner))
    }

    async fn events_within(&self, _query: &SpotQuery) -> Result<Vec<Spot>, CatalogError> {
        Ok(self.of_kind(SpotKind::Event))
    }
}
