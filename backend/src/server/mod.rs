//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use watchlist::Trace;
use watchlist::inbound::http::{self, HttpState};
use watchlist::outbound::persistence::{DbPool, DieselMovieRepository, DieselUserRepository};

fn build_http_state(pool: &DbPool) -> HttpState {
    HttpState::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselMovieRepository::new(pool.clone())),
    )
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(http::configure)
}

/// Construct an Actix HTTP server for the given configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let bind_addr = config.bind_addr();
    let http_state = web::Data::new(build_http_state(&config.db_pool));

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "server listening");
    Ok(server)
}
