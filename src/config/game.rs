/// Game configuration constants.
/// 
/// This module defines the main gameplay parameters such as board dimensions,
/// the alignment needed to win, and the difficulty presets.
pub const STANDARD_ROWS: usize = 6;

/// Number of columns of the standard board.
pub const STANDARD_COLS: usize = 7;

/// Number of aligned tokens needed to win.
pub const WIN_LENGTH: usize = 4;

/// Gravity is reversed every time the turn counter reaches a multiple of this value.
pub const GRAVITY_FLIP_INTERVAL: u32 = 5;

/// Board size and number of random tokens placed before the first turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPreset {
    pub rows: usize,
    pub cols: usize,
    pub prefill: usize,
}

/// Used when no (or an unknown) difficulty is requested.
pub const STANDARD_PRESET: DifficultyPreset = DifficultyPreset { rows: STANDARD_ROWS, cols: STANDARD_COLS, prefill: 0 };
pub const EASY_PRESET: DifficultyPreset = DifficultyPreset { rows: 6, cols: 7, prefill: 3 };
pub const NORMAL_PRESET: DifficultyPreset = DifficultyPreset { rows: 7, cols: 8, prefill: 5 };
pub const HARD_PRESET: DifficultyPreset = DifficultyPreset { rows: 8, cols: 10, prefill: 7 };
