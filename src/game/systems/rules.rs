//! Win and draw detection.
//!
//! Lines are checked along four axes: horizontal, vertical and both diagonals.
//! Each axis is walked in both directions from the cell being examined.

use crate::config::game::WIN_LENGTH;
use crate::game::types::{Cell, Player, Position};

/// (row step, col step) for each axis. The opposite direction is the negated step.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Cell reached by walking `distance` steps along `step`, if it is still on the board.
fn offset(grid: &[Vec<Cell>], from: Position, step: (isize, isize), distance: usize) -> Option<Position> {
    let distance = distance as isize;
    let row = from.row.checked_add_signed(step.0 * distance)?;
    let col = from.col.checked_add_signed(step.1 * distance)?;
    if row < grid.len() && col < grid[row].len() {
        Some(Position { row, col })
    } else {
        None
    }
}

/// Consecutive cells owned by `player` after `from` along `step`, capped at `WIN_LENGTH - 1`.
fn run_length(grid: &[Vec<Cell>], from: Position, step: (isize, isize), player: Player) -> usize {
    (1..WIN_LENGTH)
        .map_while(|distance| offset(grid, from, step, distance))
        .take_while(|pos| grid[pos.row][pos.col] == Cell::Taken(player))
        .count()
}

/// True if the token at `pos` is part of `WIN_LENGTH` aligned tokens of its owner.
pub fn check_win(grid: &[Vec<Cell>], pos: Position) -> bool {
    let Some(player) = grid[pos.row][pos.col].owner() else {
        return false;
    };

    AXES.iter().any(|&(dr, dc)| {
        let forward = run_length(grid, pos, (dr, dc), player);
        let backward = run_length(grid, pos, (-dr, -dc), player);
        1 + forward + backward >= WIN_LENGTH
    })
}

/// True when the top cell of every column is occupied.
pub fn is_draw(grid: &[Vec<Cell>]) -> bool {
    grid.first()
        .is_some_and(|top_row| top_row.iter().all(|cell| !cell.is_empty()))
}

/// Scan the whole board for a line of `player` and return its cells, in order.
pub fn winning_positions(grid: &[Vec<Cell>], player: Player) -> Option<[Position; WIN_LENGTH]> {
    let owned = Cell::Taken(player);
    for (row, cells) in grid.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell != owned {
                continue;
            }
            let start = Position { row, col };
            for &step in &AXES {
                let mut line = [start; WIN_LENGTH];
                let complete = (1..WIN_LENGTH).all(|distance| {
                    match offset(grid, start, step, distance) {
                        Some(pos) if grid[pos.row][pos.col] == owned => {
                            line[distance] = pos;
                            true
                        }
                        _ => false,
                    }
                });
                if complete {
                    return Some(line);
                }
            }
        }
    }
    None
}
