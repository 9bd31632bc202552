//! Focus Core - rules engine for Focus/Domination
//!
//! This crate provides the core game logic:
//! - Board geometry (6x6 grid, row/column coordinates)
//! - Players with reserve and capture pools
//! - Move validation, stack transfer and overflow captures
//! - Named-player game sessions and JSON setups

pub mod board;
pub mod error;
pub mod game;
pub mod player;
pub mod session;
pub mod setup;
pub mod view;

// Re-exports for convenient access
pub use board::{Position, BOARD_SIZE, CELL_COUNT};
pub use error::{MoveError, SetupError};
pub use game::{check_win, GameState, Move, Status, MAX_STACK_HEIGHT, WINNING_CAPTURES};
pub use player::{Color, Player, Seat};
pub use session::{GameSession, MoveOutcome};
pub use setup::{GameSetup, PlayerSetup};
pub use view::{GameView, PlayerView};
