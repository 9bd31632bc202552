//! Integration tests for the Focus rules engine
//!
//! Scenario checks plus seeded random playouts that verify the game-wide
//! invariants after every move.

use focus_core::{
    board::all_positions, Color, GameSession, GameState, Move, MoveError, MoveOutcome, Player,
    Position, Seat, MAX_STACK_HEIGHT, WINNING_CAPTURES,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

const R: Color = Color('R');
const G: Color = Color('G');
const OPENING_PIECES: usize = 36;

fn p(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

fn new_session() -> GameSession {
    GameSession::new(Player::new("Drew", R), Player::new("Ellie", G))
}

fn name_of(session: &GameSession, seat: Seat) -> String {
    session.state().player(seat).name().to_string()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_single_step_accepted() {
    let mut game = new_session();
    assert_eq!(game.move_piece("Drew", p(0, 1), p(1, 1), 1), Ok(MoveOutcome::Accepted));
    assert_eq!(game.peek(p(1, 1)).unwrap(), &[G, R]);
    assert!(game.peek(p(0, 1)).unwrap().is_empty());
}

#[test]
fn test_claim_above_height() {
    let mut game = new_session();
    let err = game.move_piece("Drew", p(2, 1), p(2, 3), 2).unwrap_err();
    assert_eq!(err, MoveError::PlayerPiece("invalid number of pieces".into()));
}

#[test]
fn test_diagonal_rejected() {
    let mut game = new_session();
    let err = game.move_piece("Drew", p(2, 1), p(3, 2), 1).unwrap_err();
    assert_eq!(err, MoveError::InvalidLocation("diagonal moves not allowed".into()));
}

#[test]
fn test_empty_reserve() {
    let mut game = new_session();
    let err = game.place_reserve("Drew", p(0, 0)).unwrap_err();
    assert_eq!(err.kind(), "PlayerPieceError");
    assert_eq!(err.message(), "no pieces in reserve");
}

#[test]
fn test_overflow_routes_single_bottom_piece() {
    for (bottom, reserve, captured) in [(R, 1, 0), (G, 0, 1)] {
        let state = GameState::from_stacks(
            Player::new("Drew", R),
            Player::new("Ellie", G),
            &[(p(3, 0), vec![R]), (p(3, 1), vec![bottom, G, R, G, G])],
        );
        let mut game = GameSession::from_state(state);
        game.move_piece("Drew", p(3, 0), p(3, 1), 1).unwrap();

        assert_eq!(game.peek(p(3, 1)).unwrap(), &[G, R, G, G, R]);
        assert_eq!(game.reserves("Drew"), Ok(reserve));
        assert_eq!(game.captures("Drew"), Ok(captured));
        assert_eq!(game.captures("Ellie"), Ok(0));
    }
}

#[test]
fn test_reserve_placement_uses_pool() {
    // Drew builds a reserve piece through overflow, then spends it
    let state = GameState::from_stacks(
        Player::new("Drew", R),
        Player::new("Ellie", G),
        &[
            (p(0, 0), vec![R]),
            (p(0, 1), vec![R, G, G, G, G]),
            (p(5, 5), vec![G]),
        ],
    );
    let mut game = GameSession::from_state(state);
    game.move_piece("Drew", p(0, 0), p(0, 1), 1).unwrap();
    assert_eq!(game.reserves("drew"), Ok(1));

    game.move_piece("Ellie", p(5, 5), p(4, 5), 1).unwrap();
    assert_eq!(game.place_reserve("Drew", p(4, 5)), Ok(MoveOutcome::Accepted));
    assert_eq!(game.reserves("Drew"), Ok(0));
    assert_eq!(game.peek(p(4, 5)).unwrap(), &[G, R]);
    assert_eq!(game.state().total_pieces(), 7);
}

#[test]
fn test_only_mover_can_win() {
    // Ellie already sits on enough captures; Drew's ordinary move must not
    // report her as the winner
    let state = GameState::from_stacks(
        Player::new("Drew", R),
        Player::new("Ellie", G).with_pools(0, WINNING_CAPTURES),
        &[(p(1, 1), vec![R]), (p(1, 2), vec![G])],
    );
    let mut game = GameSession::from_state(state);
    assert_eq!(game.move_piece("Drew", p(1, 1), p(1, 2), 1), Ok(MoveOutcome::Accepted));
    assert!(game.winner().is_none());
}

#[test]
fn test_sixth_capture_wins() {
    let state = GameState::from_stacks(
        Player::new("Drew", R).with_pools(0, WINNING_CAPTURES - 1),
        Player::new("Ellie", G),
        &[(p(4, 4), vec![R]), (p(4, 5), vec![G, G, G, G, G])],
    );
    let mut game = GameSession::from_state(state);
    let outcome = game.move_piece("Drew", p(4, 4), p(4, 5), 1).unwrap();
    assert_eq!(outcome, MoveOutcome::Win { player: "Drew".into() });
    assert_eq!(game.captures("Drew"), Ok(WINNING_CAPTURES));
}

#[test]
fn test_opening_exchange_sequence() {
    let mut game = new_session();
    assert!(game.move_piece("dREw", p(2, 1), p(2, 0), 1).is_ok());
    assert!(game.move_piece("ellie", p(3, 0), p(1, 0), 1).is_err());
    // Rejected move does not pass the turn
    assert!(matches!(
        game.move_piece("drew", p(0, 1), p(1, 1), 1),
        Err(MoveError::PlayerTurn(_))
    ));
    assert!(game.move_piece("ellie", p(3, 0), p(2, 0), 1).is_ok());
    assert_eq!(game.peek(p(2, 0)).unwrap(), &[R, R, G]);
    // Ellie's three-high stack may travel up to three cells
    assert!(game.move_piece("drew", p(0, 1), p(1, 1), 1).is_ok());
    assert!(game.move_piece("ELLIE", p(2, 0), p(2, 3), 3).is_ok());
    assert_eq!(game.peek(p(2, 3)).unwrap(), &[G, R, R, G]);
}

// ============================================================================
// RANDOM PLAYOUTS
// ============================================================================

/// Random attempt that is usually illegal
fn random_attempt(rng: &mut ChaCha8Rng) -> Move {
    let mut coord = || rng.gen_range(-1..=6i8);
    let from = Position::new(coord(), coord());
    let to = Position::new(coord(), coord());
    Move::Stack { from, to, pieces: rng.gen_range(0..=4) }
}

#[test]
fn test_random_playouts_keep_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..40 {
        let mut game = new_session();
        let mut previous_captures = [0, 0];

        for _ in 0..400 {
            let seat = game.state().awaiting();
            let mover = name_of(&game, seat);
            let other = name_of(&game, seat.opponent());

            // Rejected attempts change nothing
            let mut probe = game.clone();
            if probe.apply(&mover, random_attempt(&mut rng)).is_err() {
                assert_eq!(probe, game);
            }
            let mut probe = game.clone();
            assert!(probe.apply(&other, Move::Reserve { to: p(0, 0) }).is_err());
            assert_eq!(probe, game);

            let moves = game.legal_moves();
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            let outcome = game.apply(&mover, mv).expect("listed move must be legal");

            let state = game.state();
            assert_eq!(state.total_pieces(), OPENING_PIECES);
            assert!(all_positions().all(|pos| state.stack(pos).unwrap().len() <= MAX_STACK_HEIGHT));

            let captures = [
                state.player(Seat::First).captured(),
                state.player(Seat::Second).captured(),
            ];
            assert!(captures[0] >= previous_captures[0]);
            assert!(captures[1] >= previous_captures[1]);
            // Only the mover's pools can change
            assert_eq!(captures[seat.opponent().index()], previous_captures[seat.opponent().index()]);
            previous_captures = captures;

            let mover_captures = captures[seat.index()];
            match outcome {
                MoveOutcome::Win { player } => {
                    assert_eq!(player, mover);
                    assert!(mover_captures >= WINNING_CAPTURES);
                    assert!(game.legal_moves().is_empty());
                    break;
                }
                MoveOutcome::Accepted => {
                    assert!(mover_captures < WINNING_CAPTURES);
                    assert_eq!(game.state().awaiting(), seat.opponent());
                }
            }
        }
    }
}

#[test]
fn test_reserve_moves_stay_balanced() {
    // Prefer reserve placements whenever available to exercise that path
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut game = new_session();

    for _ in 0..300 {
        let moves = game.legal_moves();
        let reserve: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|m| matches!(m, Move::Reserve { .. }))
            .collect();
        let pool = if reserve.is_empty() { &moves } else { &reserve };
        let Some(&mv) = pool.choose(&mut rng) else {
            break;
        };

        let mover = name_of(&game, game.state().awaiting());
        let reserve_before = game.reserves(&mover).unwrap();
        let outcome = game.apply(&mover, mv).unwrap();

        if let Move::Reserve { .. } = mv {
            // One piece leaves the pool; overflow can hand back at most one
            let after = game.reserves(&mover).unwrap();
            assert!(after == reserve_before - 1 || after == reserve_before);
        }
        assert_eq!(game.state().total_pieces(), OPENING_PIECES);

        if matches!(outcome, MoveOutcome::Win { .. }) {
            assert!(game.legal_moves().is_empty());
            break;
        }
    }
}
