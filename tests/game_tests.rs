//! End-to-end game scenarios driven through the public controller API.

use tictactoe_engine::{Board, Cell, GameController, GameRng, Winner};

fn board_with(cells: &[(usize, usize, Cell)]) -> Board {
    let mut board = Board::new();
    for &(row, col, cell) in cells {
        board.set(row, col, cell).unwrap();
    }
    board
}

// =============================================================================
// Opening Behavior
// =============================================================================

#[test]
fn test_center_reply_to_every_non_center_opening() {
    for row in 0..3 {
        for col in 0..3 {
            if (row, col) == (1, 1) {
                continue;
            }

            let mut game = GameController::new(42);
            game.submit_player_move(row, col).unwrap();

            let snapshot = game.board_snapshot();
            assert_eq!(
                snapshot.get(1, 1).unwrap(),
                Cell::Computer,
                "opening at ({row}, {col}) must be answered with the center"
            );
            assert_eq!(snapshot.occupied_count(), 2);
        }
    }
}

#[test]
fn test_center_opening_gets_some_reply() {
    let mut game = GameController::new(42);
    game.submit_player_move(1, 1).unwrap();

    let snapshot = game.board_snapshot();
    assert_eq!(snapshot.get(1, 1).unwrap(), Cell::Player);
    assert_eq!(snapshot.occupied_count(), 2);
    assert!(!game.is_game_over());
}

// =============================================================================
// Game Scenarios
// =============================================================================

#[test]
fn test_two_exchange_opening_leaves_four_tokens() {
    let mut game = GameController::new(42);

    game.submit_player_move(0, 0).unwrap();
    assert_eq!(game.board_snapshot().get(1, 1).unwrap(), Cell::Computer);

    game.submit_player_move(0, 1).unwrap();

    let snapshot = game.board_snapshot();
    assert_eq!(snapshot.occupied_count(), 4);
    assert!(!game.is_game_over());
    // The player threatened row 0, so the reply is the block at (0, 2).
    assert_eq!(snapshot.get(0, 2).unwrap(), Cell::Computer);
}

#[test]
fn test_computer_takes_win_over_block() {
    // After (0,0) -> center, (0,1) -> block at (0,2), (2,0) -> block at
    // (1,0), the computer holds (1,0) and (1,1). The player's (2,2)
    // then threatens row 2, but the computer can win row 1 -- and must
    // prefer the win over the block.
    let mut game = GameController::new(42);

    game.submit_player_move(0, 0).unwrap();
    game.submit_player_move(0, 1).unwrap();
    game.submit_player_move(2, 0).unwrap();
    game.submit_player_move(2, 2).unwrap();

    let snapshot = game.board_snapshot();
    assert_eq!(snapshot.get(1, 2).unwrap(), Cell::Computer);
    assert_eq!(snapshot.get(2, 1).unwrap(), Cell::Empty);
    assert_eq!(game.winner(), Winner::Computer);
    assert!(game.is_game_over());
}

#[test]
fn test_forced_win_completes_the_line() {
    // Computer holds (0,0) and (0,1); the center is taken so the
    // opening rule stays quiet. Any player move that creates no threat
    // lets the computer complete row 0.
    let board = board_with(&[
        (0, 0, Cell::Computer),
        (0, 1, Cell::Computer),
        (1, 1, Cell::Player),
    ]);
    let mut game = GameController::from_board(board, GameRng::new(42));

    game.submit_player_move(2, 2).unwrap();

    assert_eq!(game.board_snapshot().get(0, 2).unwrap(), Cell::Computer);
    assert_eq!(game.winner(), Winner::Computer);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_reproduces_the_game() {
    // (0,0) then (2,2) creates no two-in-a-line for either side, so the
    // second reply comes from the random fallback.
    let play = |seed: u64| {
        let mut game = GameController::new(seed);
        game.submit_player_move(0, 0).unwrap();
        game.submit_player_move(2, 2).unwrap();
        game.board_snapshot()
    };

    let first = play(123);
    let second = play(123);

    assert_eq!(first, second);
    assert_eq!(first.occupied_count(), 4);
}

// =============================================================================
// Snapshot Semantics
// =============================================================================

#[test]
fn test_snapshots_do_not_track_later_moves() {
    let mut game = GameController::new(42);
    game.submit_player_move(0, 0).unwrap();

    let before = game.board_snapshot();
    game.submit_player_move(2, 2).unwrap();

    assert_eq!(before.occupied_count(), 2);
    assert_eq!(game.board_snapshot().occupied_count(), 4);
}
