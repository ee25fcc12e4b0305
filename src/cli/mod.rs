use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Base URL of the managed backend that owns partner and event data.
    #[arg(long)]
    #[arg(default_value = "http://127.0.0.1:8080/api/")]
    pub backend_url: Url,
    /// Serve candidate spots from a local NDJSON file instead of the backend.
    #[arg(long)]
    pub fixtures: Option<PathBuf>,
}
