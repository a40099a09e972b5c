use log::debug;
use rand::Rng;

use crate::config::game::{STANDARD_COLS, STANDARD_ROWS, WIN_LENGTH};
use crate::game::error::MoveError;
use crate::game::grid::{generate_grid, landing_row, prefill};
use crate::game::systems::{check_win, is_draw, winning_positions};
use crate::game::types::{Cell, Gravity, Outcome, Player, Position};

/// Board size and gravity behaviour of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub rows: usize,
    pub cols: usize,
    /// Gravity at the first turn.
    pub gravity: Gravity,
    /// Reverse gravity whenever the turn counter is a multiple of this value.
    pub flip_interval: Option<u32>,
}

impl Rules {
    /// Standard 6x7 board, gravity always down.
    pub fn classic() -> Self {
        Rules {
            rows: STANDARD_ROWS,
            cols: STANDARD_COLS,
            gravity: Gravity::Down,
            flip_interval: None,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::classic()
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    grid: Vec<Vec<Cell>>,
    rules: Rules,
    current_player: Player,
    winner: Option<Player>,
    game_over: bool,
    last_move: Option<Position>,
    turn_count: u32,
    gravity: Gravity,
}

impl Game {
    /// Create an empty board. Player one moves first.
    pub fn new(rules: Rules) -> Self {
        Game {
            grid: generate_grid(rules.rows, rules.cols),
            rules,
            current_player: Player::One,
            winner: None,
            game_over: false,
            last_move: None,
            turn_count: 0,
            gravity: rules.gravity,
        }
    }

    /// Create a board with `count` random tokens already placed.
    /// Prefilled tokens are not turns and never end the game on their own.
    pub fn with_prefill<R: Rng + ?Sized>(rules: Rules, count: usize, rng: &mut R) -> Self {
        let mut game = Self::new(rules);
        let placed = prefill(&mut game.grid, count, rng);
        debug!("[Game] Prefilled {} cells on a {}x{} board", placed, rules.rows, rules.cols);
        game
    }

    /// Drop a token for the current player. Returns whether the move was accepted.
    pub fn drop_token(&mut self, column: i64) -> bool {
        match self.try_drop_token(column) {
            Ok(_) => true,
            Err(err) => {
                debug!("[Game] Rejected drop in column {}: {}", column, err);
                false
            }
        }
    }

    /// Drop a token for the current player and return where it landed.
    pub fn try_drop_token(&mut self, column: i64) -> Result<Position, MoveError> {
        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < self.rules.cols)
            .ok_or(MoveError::ColumnOutOfRange { column, cols: self.rules.cols })?;
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let row = landing_row(&self.grid, col, self.gravity)
            .ok_or(MoveError::ColumnFull { column: col })?;

        let pos = Position { row, col };
        self.grid[row][col] = Cell::Taken(self.current_player);
        self.last_move = Some(pos);
        self.turn_count += 1;

        if let Some(interval) = self.rules.flip_interval {
            if interval > 0 && self.turn_count % interval == 0 {
                self.gravity = self.gravity.flipped();
                debug!("[Game] Turn {}: gravity is now {:?}", self.turn_count, self.gravity);
            }
        }

        if check_win(&self.grid, pos) {
            self.winner = Some(self.current_player);
            self.game_over = true;
        } else if is_draw(&self.grid) {
            self.game_over = true;
        }
        self.current_player = self.current_player.other();
        Ok(pos)
    }

    /// True if the token at (`row`, `col`) completes a line for its owner.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        row < self.rules.rows && col < self.rules.cols && check_win(&self.grid, Position { row, col })
    }

    pub fn is_draw(&self) -> bool {
        is_draw(&self.grid)
    }

    /// Cells of the winning line, for highlighting. `None` while nobody has won.
    pub fn winning_positions(&self) -> Option<[Position; WIN_LENGTH]> {
        winning_positions(&self.grid, self.winner?)
    }

    pub fn outcome(&self) -> Outcome {
        match (self.game_over, self.winner) {
            (_, Some(player)) => Outcome::Won(player),
            (true, None) => Outcome::Draw,
            (false, None) => Outcome::InProgress,
        }
    }

    /// `None` outside the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row)?.get(col).copied()
    }

    pub fn grid(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.rules.rows
    }

    pub fn cols(&self) -> usize {
        self.rules.cols
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }
}
