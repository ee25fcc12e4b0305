use crate::cli::Args;
use std::{net::SocketAddr, str::FromStr};
use url::Url;

pub fn fake_args() -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed to construct fake listen address."),
        backend_url: Url::from_str("http://127.0.0.1:8080/api/")
            .expect("Failed to construct fake backend URL."),
        fixtures: None,
    }
}
