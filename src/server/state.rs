// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the one game shared by every request. Handlers lock it for the whole
//! request, so play is serialized globally.

use std::sync::Mutex;

use crate::game::{Game, Settings};

/// The current game together with the settings it was created from.
#[derive(Debug, Clone)]
pub struct ActiveGame {
    pub settings: Settings,
    pub game: Game,
}

/// Shared application state, injected into HTTP handlers.
pub struct AppState {
    /// `None` until the first game page is requested, and again after a reset.
    pub game: Mutex<Option<ActiveGame>>,
}

impl AppState {
    /// Create an AppState with no game in progress.
    pub fn new() -> Self {
        AppState {
            game: Mutex::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
