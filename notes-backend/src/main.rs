use actix_cors::Cors;
use actix_web::{
    middleware::{Logger, NormalizePath, TrailingSlash},
    web, App, HttpServer,
};
use dotenv::dotenv;

mod config;
mod controllers;
mod notes;

use config::Config;
use notes::NoteStore;

pub struct AppState {
    pub config: Config,
    /// In-memory note table shared by every worker
    pub notes: NoteStore,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

impl AppState {
    /// Fresh state with an empty note store.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            notes: NoteStore::new(),
            started_at: std::time::Instant::now(),
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Notes backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let state = web::Data::new(AppState::new(config.clone()));
    let shutdown_state = state.clone();

    let bind_addr = config.bind_addr.clone();
    let port = config.port;
    let max_body_bytes = config.max_body_bytes;

    log::info!("Starting server on {}:{}", bind_addr, port);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .app_data(controllers::json_config(max_body_bytes))
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::echo::config)
            .configure(controllers::notes::config)
    })
    .bind((bind_addr.as_str(), port))
    .map_err(|e| {
        log::error!("Failed to bind {}:{}: {}", bind_addr, port, e);
        e
    })?
    .run();

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    // Spawn Ctrl+C handler
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");
        log::info!("Dropping {} in-memory notes", shutdown_state.notes.len());

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
