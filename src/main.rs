use clap::Parser;
use std::process::ExitCode;

mod app_context;
mod cli;
mod directions;
mod geocode;
mod health;
mod http;
mod logging;
mod map;
mod ors;
mod pages;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init();
    let app_context = match app_context::init(&args) {
        Ok(app_context) => app_context,
        Err(err) => {
            tracing::error!("Invalid openrouteservice URL {}: {}", args.ors_base_url, err);
            return ExitCode::FAILURE;
        }
    };
    let router = http::router::new(&args, app_context);

    let listener = match tokio::net::TcpListener::bind(args.listen_address).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind to {}: {}", args.listen_address, err);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Listening on {}.", args.listen_address);

    if let Err(err) = axum::serve(listener, router).await {
        tracing::error!("Server stopped: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
