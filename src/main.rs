use crate::app_context::AppContext;
use crate::catalog::backend::BackendSpotCatalog;
use crate::catalog::fixtures::FixtureSpotCatalog;
use crate::catalog::interface::SpotCatalog;
use clap::Parser;

mod app_context;
mod catalog;
mod cli;
mod geo;
mod health;
mod http;
mod logging;
mod planning;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init(&args);

    match &args.fixtures {
        Some(path) => {
            let spots = FixtureSpotCatalog::from_file(path);
            serve(&args, AppContext { spots }).await;
        }
        None => {
            let spots = BackendSpotCatalog::new(&args);
            serve(&args, AppContext { spots }).await;
        }
    }
}

async fn serve<SC: SpotCatalog>(args: &cli::Args, app_context: AppContext<SC>) {
    let router = http::router::new(args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind to the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to run the HTTP server.");
}
