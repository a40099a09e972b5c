/// HTTP server configuration constants.
/// 
/// The bind address can be overridden at startup with the `CONNECT4_BIND`
/// environment variable (`host:port`).
pub const BIND_ADDR: &str = "127.0.0.1";

/// Port the HTTP server listens on.
pub const PORT: u16 = 8080;

/// Environment variable holding a `host:port` override.
pub const BIND_ENV_VAR: &str = "CONNECT4_BIND";

/// Resolve the address to bind, falling back to the defaults above.
pub fn bind_address() -> (String, u16) {
    std::env::var(BIND_ENV_VAR)
        .ok()
        .and_then(|value| parse_bind(&value))
        .unwrap_or_else(|| (BIND_ADDR.to_string(), PORT))
}

fn parse_bind(value: &str) -> Option<(String, u16)> {
    let (host, port) = value.trim().rsplit_once(':')?;
    if host.is_empty() {
        return None;
    }
    let port = port.parse().ok()?;
    Some((host.to_string(), port))
}
