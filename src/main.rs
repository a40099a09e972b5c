//! Main entry point for the Connect-4 server.
//!
//! Initializes logging, creates the shared game state, and launches the HTTP server
//! serving the start, mode and game pages.

use actix_web::{App, HttpServer, middleware, web};
use log::info;

pub mod config;
mod game;
mod server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Single game shared by every request.
    let state = web::Data::new(server::state::AppState::new());

    let (host, port) = config::server::bind_address();
    info!("[Server] Connect 4 available on http://{}:{}/", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((host, port))?
    .run()
    .await
}
