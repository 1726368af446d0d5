mod autocomplete;
mod cli;
mod config;
mod handlers;
mod http;
mod importer;
mod init;
mod models;

use std::sync::Arc;

use clap::Parser;

use cli::Commands;
use handlers::Ctx;

#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() {
    init::init_logger();

    let cli = cli::Cli::parse();

    // Handle CLI flags.
    if let Some(cmd) = cli.command {
        match cmd {
            // Generate a new config file.
            Commands::NewConfig { path } => {
                match init::generate_config(&path) {
                    Ok(_) => {
                        log::info!("config file generated: {}", path.display());
                    }
                    Err(e) => {
                        log::error!("error generating config: {}", e);
                        std::process::exit(1);
                    }
                }
                return;
            }
        }
    }

    // Load config.
    let config = init::init_config(&cli.config);

    // Build the engine and load seed terms.
    let ac = match init::init_autocomplete(&config.autocomplete, cli.seed.as_deref()) {
        Ok(a) => a,
        Err(e) => {
            log::error!("error loading seed terms: {}", e);
            std::process::exit(1);
        }
    };

    // Setup the global app context used in HTTP handlers.
    let ctx = Arc::new(Ctx { ac });

    // Start the HTTP server.
    let routes = http::init_handlers(ctx);
    let addr = config.app.address;

    log::info!("starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("error listening on {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, routes).await {
        log::error!("server error: {}", e);
        std::process::exit(1);
    }
}
