//! Parameters a game is created with, as selected from the browser.

use rand::Rng;

use crate::config::game::{
    DifficultyPreset, EASY_PRESET, GRAVITY_FLIP_INTERVAL, HARD_PRESET, NORMAL_PRESET, STANDARD_PRESET,
};
use crate::game::state::{Game, Rules};
use crate::game::types::Gravity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Standard,
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Unknown or missing values select the standard board.
    pub fn from_param(value: &str) -> Self {
        match value {
            "easy" => Difficulty::Easy,
            "normal" => Difficulty::Normal,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Standard,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            Difficulty::Standard => "standard",
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn preset(self) -> DifficultyPreset {
        match self {
            Difficulty::Standard => STANDARD_PRESET,
            Difficulty::Easy => EASY_PRESET,
            Difficulty::Normal => NORMAL_PRESET,
            Difficulty::Hard => HARD_PRESET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Gravity starts upwards.
    Inverse,
}

impl Mode {
    pub fn from_param(value: &str) -> Self {
        if value == "inverse" { Mode::Inverse } else { Mode::Normal }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Inverse => "inverse",
        }
    }

    pub fn initial_gravity(self) -> Gravity {
        match self {
            Mode::Normal => Gravity::Down,
            Mode::Inverse => Gravity::Up,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub username: String,
    pub difficulty: Difficulty,
    pub mode: Mode,
}

impl Settings {
    pub fn new(username: &str, difficulty: &str, mode: &str) -> Self {
        Settings {
            username: username.to_string(),
            difficulty: Difficulty::from_param(difficulty),
            mode: Mode::from_param(mode),
        }
    }

    /// Rules used by the web game: preset board size, gravity reversing every few turns.
    pub fn rules(&self) -> Rules {
        let preset = self.difficulty.preset();
        Rules {
            rows: preset.rows,
            cols: preset.cols,
            gravity: self.mode.initial_gravity(),
            flip_interval: Some(GRAVITY_FLIP_INTERVAL),
        }
    }

    pub fn new_game<R: Rng + ?Sized>(&self, rng: &mut R) -> Game {
        Game::with_prefill(self.rules(), self.difficulty.preset().prefill, rng)
    }
}
