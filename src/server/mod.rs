// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the HTTP side of the game:
//! - Application state (the single shared game behind a lock)
//! - Routing and request handlers
//! - HTML rendering and static assets
//! - JSON error responses

pub mod state;
pub mod router;
pub mod handlers;
pub mod render;
pub mod assets;
pub mod http_error;
