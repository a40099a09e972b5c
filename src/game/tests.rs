use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::game::WIN_LENGTH;
use crate::game::grid::{filled_cells, generate_grid};
use crate::game::systems::{check_win, is_draw, winning_positions};
use crate::game::{Cell, Difficulty, Game, Gravity, Mode, MoveError, Outcome, Player, Position, Rules, Settings};

fn play(game: &mut Game, columns: &[i64]) {
    for &col in columns {
        assert!(game.drop_token(col), "drop in column {} was rejected", col);
    }
}

fn pos(row: usize, col: usize) -> Position {
    Position { row, col }
}

#[test]
fn test_new_game_is_empty() {
    let game = Game::new(Rules::classic());
    assert_eq!(game.rows(), 6);
    assert_eq!(game.cols(), 7);
    assert!(game.grid().iter().flatten().all(|cell| cell.is_empty()));
    assert_eq!(game.current_player(), Player::One);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.last_move(), None);
    assert_eq!(game.turn_count(), 0);
}

#[test]
fn test_tokens_stack_from_the_bottom() {
    let mut game = Game::new(Rules::classic());
    assert_eq!(game.try_drop_token(3), Ok(pos(5, 3)));
    assert_eq!(game.try_drop_token(3), Ok(pos(4, 3)));
    assert_eq!(game.cell(5, 3), Some(Cell::Taken(Player::One)));
    assert_eq!(game.cell(4, 3), Some(Cell::Taken(Player::Two)));
    assert_eq!(game.last_move(), Some(pos(4, 3)));
    assert_eq!(game.current_player(), Player::One);
}

#[test]
fn test_vertical_win_in_column_three() {
    let mut game = Game::new(Rules::classic());
    play(&mut game, &[3, 0, 3, 0, 3, 0, 3]);

    assert_eq!(game.winner(), Some(Player::One));
    assert!(game.is_over());
    assert!(game.check_win(2, 3));
    assert_eq!(
        game.winning_positions(),
        Some([pos(2, 3), pos(3, 3), pos(4, 3), pos(5, 3)])
    );
}

#[test]
fn test_horizontal_win() {
    let mut game = Game::new(Rules::classic());
    play(&mut game, &[0, 0, 1, 1, 2, 2, 3]);

    assert_eq!(game.outcome(), Outcome::Won(Player::One));
    assert_eq!(
        game.winning_positions(),
        Some([pos(5, 0), pos(5, 1), pos(5, 2), pos(5, 3)])
    );
}

#[test]
fn test_rising_diagonal_win() {
    let mut game = Game::new(Rules::classic());
    play(&mut game, &[0, 1, 1, 2, 3, 2, 2, 3, 4, 3]);
    assert_eq!(game.outcome(), Outcome::InProgress);

    play(&mut game, &[3]);
    assert_eq!(game.winner(), Some(Player::One));
    assert_eq!(
        game.winning_positions(),
        Some([pos(2, 3), pos(3, 2), pos(4, 1), pos(5, 0)])
    );
}

#[test]
fn test_falling_diagonal_win() {
    let mut game = Game::new(Rules::classic());
    play(&mut game, &[6, 5, 5, 4, 3, 4, 4, 3, 2, 3, 3]);

    assert_eq!(game.winner(), Some(Player::One));
    assert_eq!(
        game.winning_positions(),
        Some([pos(2, 3), pos(3, 4), pos(4, 5), pos(5, 6)])
    );
}

#[test]
fn test_three_in_a_row_is_not_a_win() {
    let mut game = Game::new(Rules::classic());
    play(&mut game, &[0, 0, 1, 1, 2]);
    assert!(!game.check_win(5, 2));
    assert_eq!(game.winner(), None);
    assert_eq!(game.winning_positions(), None);
}

#[test]
fn test_full_column_is_rejected_without_changes() {
    let mut game = Game::new(Rules::classic());
    play(&mut game, &[0, 0, 0, 0, 0, 0]);
    let before = game.clone();

    assert_eq!(game.try_drop_token(0), Err(MoveError::ColumnFull { column: 0 }));
    assert!(!game.drop_token(0));
    assert_eq!(game.grid(), before.grid());
    assert_eq!(game.turn_count(), 6);
    assert_eq!(game.current_player(), before.current_player());
    assert_eq!(game.last_move(), before.last_move());
}

#[test]
fn test_out_of_range_columns_are_rejected() {
    let mut game = Game::new(Rules::classic());
    assert_eq!(
        game.try_drop_token(-1),
        Err(MoveError::ColumnOutOfRange { column: -1, cols: 7 })
    );
    assert!(!game.drop_token(7));
    assert_eq!(filled_cells(game.grid()), 0);
    assert_eq!(game.current_player(), Player::One);
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = Game::new(Rules::classic());
    play(&mut game, &[3, 0, 3, 0, 3, 0, 3]);

    assert_eq!(game.try_drop_token(5), Err(MoveError::GameOver));
    assert_eq!(filled_cells(game.grid()), 7);
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // No axis of a 3x3 board is long enough for a line.
    let rules = Rules { rows: 3, cols: 3, gravity: Gravity::Down, flip_interval: None };
    let mut game = Game::new(rules);
    play(&mut game, &[0, 0, 0, 1, 1, 1, 2, 2]);
    assert!(!game.is_draw());
    assert!(!game.is_over());

    play(&mut game, &[2]);
    assert!(game.is_draw());
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.winning_positions(), None);
}

#[test]
fn test_full_top_row_is_a_draw_under_upward_gravity() {
    let rules = Rules { gravity: Gravity::Up, ..Rules::classic() };
    let mut game = Game::new(rules);
    play(&mut game, &[0, 1, 2, 3, 4, 5]);
    assert!(!game.is_over());

    play(&mut game, &[6]);
    assert!(game.grid()[0].iter().all(|cell| !cell.is_empty()));
    assert_eq!(filled_cells(game.grid()), 7);
    assert_eq!(game.winner(), None);
    assert!(game.is_draw());
    assert!(game.is_over());
    assert_eq!(game.outcome(), Outcome::Draw);
    assert!(!game.drop_token(0));
}

#[test]
fn test_top_row_decides_draw_even_with_empty_cells_below() {
    let mut grid = generate_grid(6, 7);
    for (col, cell) in grid[0].iter_mut().enumerate() {
        let owner = if col % 2 == 0 { Player::One } else { Player::Two };
        *cell = Cell::Taken(owner);
    }
    assert!(is_draw(&grid));

    grid[0][6] = Cell::Empty;
    assert!(!is_draw(&grid));
    assert!(!is_draw(&[]));
}

#[test]
fn test_cell_outside_board_is_none() {
    let game = Game::new(Rules::classic());
    assert_eq!(game.cell(0, 0), Some(Cell::Empty));
    assert_eq!(game.cell(6, 0), None);
    assert_eq!(game.cell(0, 7), None);
}

#[test]
fn test_gravity_flips_every_five_turns() {
    let rules = Rules { flip_interval: Some(5), ..Rules::classic() };
    let mut game = Game::new(rules);

    play(&mut game, &[0, 1, 2, 3]);
    assert_eq!(game.gravity(), Gravity::Down);
    play(&mut game, &[4]);
    assert_eq!(game.gravity(), Gravity::Up);

    assert_eq!(game.try_drop_token(0), Ok(pos(0, 0)));
    play(&mut game, &[1, 2, 3, 4]);
    assert_eq!(game.gravity(), Gravity::Down);
    assert_eq!(game.try_drop_token(5), Ok(pos(5, 5)));
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_upward_gravity_fills_from_the_top() {
    let rules = Rules { gravity: Gravity::Up, ..Rules::classic() };
    let mut game = Game::new(rules);
    assert_eq!(game.try_drop_token(2), Ok(pos(0, 2)));
    assert_eq!(game.try_drop_token(2), Ok(pos(1, 2)));
}

#[test]
fn test_prefill_places_requested_tokens() {
    let mut rng = StdRng::seed_from_u64(7);
    let game = Game::with_prefill(Rules::classic(), 5, &mut rng);
    assert_eq!(filled_cells(game.grid()), 5);
    assert_eq!(game.turn_count(), 0);
    assert_eq!(game.last_move(), None);
    assert_eq!(game.current_player(), Player::One);
}

#[test]
fn test_prefill_is_capped_by_board_size() {
    let mut rng = StdRng::seed_from_u64(1);
    let rules = Rules { rows: 2, cols: 2, ..Rules::classic() };
    let game = Game::with_prefill(rules, 10, &mut rng);
    assert_eq!(filled_cells(game.grid()), 4);
}

#[test]
fn test_check_win_ignores_empty_and_outside_cells() {
    let game = Game::new(Rules::classic());
    assert!(!game.check_win(0, 0));
    assert!(!game.check_win(6, 0));
    assert!(!game.check_win(0, 7));
}

#[test]
fn test_settings_from_query_params() {
    let settings = Settings::new("alice", "hard", "inverse");
    assert_eq!(settings.difficulty, Difficulty::Hard);
    assert_eq!(settings.mode, Mode::Inverse);

    let rules = settings.rules();
    assert_eq!((rules.rows, rules.cols), (8, 10));
    assert_eq!(rules.gravity, Gravity::Up);
    assert_eq!(rules.flip_interval, Some(5));

    let mut rng = StdRng::seed_from_u64(3);
    let game = settings.new_game(&mut rng);
    assert_eq!(filled_cells(game.grid()), 7);

    let fallback = Settings::new("", "impossible", "sideways");
    assert_eq!(fallback.difficulty, Difficulty::Standard);
    assert_eq!(fallback.mode, Mode::Normal);
    assert_eq!(fallback.rules().gravity, Gravity::Down);
}

/// Cells of a line of `WIN_LENGTH` along one axis, fitted inside a rows x cols board.
fn line_strategy() -> impl Strategy<Value = (usize, usize, Vec<Position>)> {
    (4usize..10, 4usize..10, 0usize..4, any::<usize>(), any::<usize>()).prop_map(
        |(rows, cols, axis, row_seed, col_seed)| {
            let (dr, dc): (usize, isize) = [(0, 1), (1, 0), (1, 1), (1, -1)][axis];
            let row_span = rows - dr * (WIN_LENGTH - 1);
            let start_row = row_seed % row_span;
            let start_col = match dc {
                1 => col_seed % (cols - (WIN_LENGTH - 1)),
                -1 => WIN_LENGTH - 1 + col_seed % (cols - (WIN_LENGTH - 1)),
                _ => col_seed % cols,
            };
            let cells: Vec<Position> = (0..WIN_LENGTH)
                .map(|i| Position {
                    row: start_row + dr * i,
                    col: start_col.wrapping_add_signed(dc * i as isize),
                })
                .collect();
            (rows, cols, cells)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rejected drops leave the game untouched; accepted drops fill exactly one cell.
    #[test]
    fn drops_fill_exactly_one_cell(moves in proptest::collection::vec(-1i64..8, 0..80)) {
        let rules = Rules { flip_interval: Some(5), ..Rules::classic() };
        let mut game = Game::new(rules);
        for col in moves {
            let before = game.clone();
            match game.try_drop_token(col) {
                Ok(landed) => {
                    prop_assert_eq!(filled_cells(game.grid()), filled_cells(before.grid()) + 1);
                    prop_assert_eq!(before.cell(landed.row, landed.col), Some(Cell::Empty));
                    prop_assert_eq!(game.turn_count(), before.turn_count() + 1);
                    prop_assert_eq!(game.current_player(), before.current_player().other());
                }
                Err(_) => {
                    prop_assert_eq!(game.grid(), before.grid());
                    prop_assert_eq!(game.turn_count(), before.turn_count());
                    prop_assert_eq!(game.current_player(), before.current_player());
                }
            }
        }
    }

    /// Any four aligned tokens are found from each of their cells.
    #[test]
    fn aligned_tokens_are_a_win((rows, cols, cells) in line_strategy()) {
        let mut grid = generate_grid(rows, cols);
        for cell in &cells {
            grid[cell.row][cell.col] = Cell::Taken(Player::Two);
        }
        for cell in &cells {
            prop_assert!(check_win(&grid, *cell));
        }

        let mut found = winning_positions(&grid, Player::Two).expect("line should be found").to_vec();
        let mut expected = cells.clone();
        found.sort_by_key(|p| (p.row, p.col));
        expected.sort_by_key(|p| (p.row, p.col));
        prop_assert_eq!(found, expected);
        prop_assert_eq!(winning_positions(&grid, Player::One), None);
    }
}
