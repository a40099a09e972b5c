/// Helpers for HTTP error responses.
///
/// Every error body carries a code, a message and an optional context.
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code.
/// - `message`: Human-readable error message.
/// - `context`: Optional context string.
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let body = json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    });
    HttpResponse::build(status).json(body)
}

/// Returned when a previous request panicked while holding the game lock.
pub fn game_lock_poisoned() -> HttpResponse {
    http_error_response(
        "GAME_UNAVAILABLE",
        "The game state is unavailable after an internal failure.",
        Some("game_lock"),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}
