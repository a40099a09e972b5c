//! Request handlers for the start, mode and game pages.
//!
//! The game handlers lock the shared state for the whole request: settings sync,
//! the requested action, and rendering all happen under the same lock.

use std::sync::MutexGuard;

use actix_web::{HttpResponse, http::header, web};
use log::{debug, info, warn};
use serde::Deserialize;

use crate::game::{Outcome, Settings};
use crate::server::http_error::game_lock_poisoned;
use crate::server::render::{game_document, mode_document, start_document};
use crate::server::state::{ActiveGame, AppState};

/// Query parameters selecting the game variant.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GameQuery {
    pub username: String,
    pub difficulty: String,
    pub mode: String,
}

impl GameQuery {
    fn settings(&self) -> Settings {
        Settings::new(&self.username, &self.difficulty, &self.mode)
    }
}

/// Fields posted by the start and mode pages.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SetupForm {
    pub username: String,
    pub difficulty: String,
    pub mode: String,
}

/// Fields posted by the game page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ActionForm {
    pub col: Option<String>,
    pub reset: Option<String>,
    pub rematch: Option<String>,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body)
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Build `path?key=value&...` with URL-encoded values.
fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

pub async fn start_page() -> HttpResponse {
    html(start_document())
}

pub async fn start_submit(form: Option<web::Form<SetupForm>>) -> HttpResponse {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    see_other(&with_query(
        "/mode",
        &[("username", form.username.as_str()), ("difficulty", form.difficulty.as_str())],
    ))
}

pub async fn mode_page(query: web::Query<GameQuery>) -> HttpResponse {
    html(mode_document(&query.username, &query.difficulty))
}

pub async fn mode_submit(form: Option<web::Form<SetupForm>>) -> HttpResponse {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    see_other(&with_query(
        "/connect4",
        &[
            ("username", form.username.as_str()),
            ("difficulty", form.difficulty.as_str()),
            ("mode", form.mode.as_str()),
        ],
    ))
}

/// Make sure a game exists for the requested settings.
///
/// A new game replaces the current one only when a username is given and the
/// requested settings differ from those the current game was created with.
fn sync_game(slot: &mut Option<ActiveGame>, requested: Settings) -> &mut ActiveGame {
    let active = match slot.take() {
        Some(active) if requested.username.is_empty() || active.settings == requested => active,
        _ => {
            info!(
                "[Connect4] New game for '{}' difficulty={} mode={}",
                requested.username,
                requested.difficulty.as_param(),
                requested.mode.as_param()
            );
            ActiveGame {
                game: requested.new_game(&mut rand::rng()),
                settings: requested,
            }
        }
    };
    slot.insert(active)
}

/// Lock the shared game.
///
/// A poisoned lock answers this request with an error, but the game slot is cleared
/// and the poison flag reset so the next request starts a fresh game.
fn lock_game(state: &AppState) -> Result<MutexGuard<'_, Option<ActiveGame>>, HttpResponse> {
    state.game.lock().map_err(|poisoned| {
        warn!("[Connect4] Game lock poisoned, discarding the current game");
        *poisoned.into_inner() = None;
        state.game.clear_poison();
        game_lock_poisoned()
    })
}

pub async fn game_page(state: web::Data<AppState>, query: web::Query<GameQuery>) -> HttpResponse {
    let mut slot = match lock_game(&state) {
        Ok(slot) => slot,
        Err(response) => return response,
    };
    let active = sync_game(&mut slot, query.settings());
    html(game_document(active))
}

pub async fn game_action(
    state: web::Data<AppState>,
    query: web::Query<GameQuery>,
    form: Option<web::Form<ActionForm>>,
) -> HttpResponse {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    let mut slot = match lock_game(&state) {
        Ok(slot) => slot,
        Err(response) => return response,
    };

    if form.reset.as_deref() == Some("1") {
        info!("[Connect4] Game reset");
        *slot = None;
        return see_other("/");
    }

    let active = sync_game(&mut slot, query.settings());
    if form.rematch.as_deref() == Some("1") {
        info!("[Connect4] Rematch for '{}'", active.settings.username);
        active.game = active.settings.new_game(&mut rand::rng());
    } else if let Some(col) = form.col.as_deref() {
        match col.trim().parse::<i64>() {
            Ok(col) => {
                if active.game.drop_token(col) {
                    debug!("[Connect4] Turn {}: column {} accepted", active.game.turn_count(), col);
                    match active.game.outcome() {
                        Outcome::Won(player) => info!(
                            "[Connect4] Game won by {} after {} turns",
                            player,
                            active.game.turn_count()
                        ),
                        Outcome::Draw => info!("[Connect4] Game ended in a draw"),
                        Outcome::InProgress => {}
                    }
                }
            }
            Err(_) => debug!("[Connect4] Ignoring malformed column '{}'", col),
        }
    }

    html(game_document(active))
}
