use rand::Rng;
use rand::seq::IteratorRandom;

use crate::game::types::{Cell, Gravity, Player, Position};

/// Build an empty board of `rows` x `cols` cells.
pub fn generate_grid(rows: usize, cols: usize) -> Vec<Vec<Cell>> {
    vec![vec![Cell::Empty; cols]; rows]
}

/// First empty cell of `col` scanning along `gravity`, or `None` when the column is full.
pub fn landing_row(grid: &[Vec<Cell>], col: usize, gravity: Gravity) -> Option<usize> {
    let is_free = |row: &usize| grid[*row][col].is_empty();
    match gravity {
        Gravity::Down => (0..grid.len()).rev().find(is_free),
        Gravity::Up => (0..grid.len()).find(is_free),
    }
}

pub fn filled_cells(grid: &[Vec<Cell>]) -> usize {
    grid.iter().flatten().filter(|cell| !cell.is_empty()).count()
}

/// Place up to `count` tokens on distinct empty cells, each owned by a random player.
/// Returns the number of tokens actually placed.
pub fn prefill<R: Rng + ?Sized>(grid: &mut [Vec<Cell>], count: usize, rng: &mut R) -> usize {
    let free_cells: Vec<Position> = grid.iter().enumerate()
        .flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                if cell.is_empty() {
                    Some(Position { row, col })
                } else {
                    None
                }
            })
        })
        .collect();

    let chosen = free_cells.into_iter().choose_multiple(rng, count);
    for pos in &chosen {
        let owner = if rng.random_bool(0.5) { Player::One } else { Player::Two };
        grid[pos.row][pos.col] = Cell::Taken(owner);
    }
    chosen.len()
}
