//! # Fleet Mock API
//!
//! An actix-web server that stands in for the inventory backend during
//! development: a seeded in-memory inventory behind the same REST endpoints
//! the client calls, with optional token enforcement and simulated latency.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

use std::net::TcpListener;

use actix_web::{App, HttpServer, dev::Server, web};
use tracing_actix_web::TracingLogger;

pub use config::AppConfig;
pub use state::AppState;

/// Build the server on an already bound listener. The caller drives the
/// returned future.
pub fn serve(state: AppState, listener: TcpListener) -> std::io::Result<Server> {
    let state = web::Data::new(state);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(handlers::configure_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
