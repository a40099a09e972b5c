//! Static files compiled into the binary.

use actix_web::HttpResponse;

const STYLE_CSS: &str = include_str!("../../assets/style.css");
const FAVICON_SVG: &str = include_str!("../../assets/favicon.svg");

pub async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok().content_type("text/css; charset=utf-8").body(STYLE_CSS)
}

pub async fn favicon() -> HttpResponse {
    HttpResponse::Ok().content_type("image/svg+xml").body(FAVICON_SVG)
}
