//! HTTP routing configuration.
//!
//! Defines the start page, the mode selection page, the game page and the static assets.

use actix_web::web;
use crate::server::handlers::{game_action, game_page, mode_page, mode_submit, start_page, start_submit};
use crate::server::assets::{favicon, stylesheet};

/// Configure the application's HTTP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(start_page))
            .route(web::post().to(start_submit))
    )
    .service(
        web::resource("/mode")
            .route(web::get().to(mode_page))
            .route(web::post().to(mode_submit))
    )
    .service(
        web::resource("/connect4")
            .route(web::get().to(game_page))
            .route(web::post().to(game_action))
    )
    .service(web::resource("/style.css").route(web::get().to(stylesheet)))
    .service(web::resource("/favicon.svg").route(web::get().to(favicon)));
}
