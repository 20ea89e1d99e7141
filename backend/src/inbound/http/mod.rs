//! HTTP inbound adapter serving the watchlist pages.

pub mod error;
pub mod greetings;
pub mod movies;
pub mod not_found;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

use actix_web::web;

pub use error::ApiResult;
pub use state::HttpState;

/// Register every named route and the not-found fallback.
///
/// Handlers read [`HttpState`] from application data. A path that matches a
/// route under another method is answered with 405 by the route's resource;
/// only unmatched paths reach the not-found page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .name("hello")
            .route(web::get().to(greetings::hello)),
    )
    .service(
        web::resource("/user/{name}")
            .name("user_page")
            .route(web::get().to(greetings::user_page)),
    )
    .service(
        web::resource("/test")
            .name("test_url_for")
            .route(web::get().to(greetings::test_url_for)),
    )
    .service(
        web::resource("/sofia")
            .name("index")
            .route(web::get().to(movies::index)),
    )
    .default_service(web::to(not_found::not_found));
}
