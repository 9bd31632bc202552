//! Serializable snapshot of a session for API clients

use crate::board::{Position, BOARD_SIZE};
use crate::game::GameState;
use crate::player::{Color, Player, Seat};
use serde::{Deserialize, Serialize};

/// Public view of one player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub color: Color,
    pub reserve: u32,
    pub captured: u32,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            color: player.color(),
            reserve: player.reserve(),
            captured: player.captured(),
        }
    }
}

/// Whole-game snapshot
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// `board[row][col]` is the stack at that cell, bottom to top
    pub board: Vec<Vec<Vec<Color>>>,
    pub players: Vec<PlayerView>,
    /// Name of the player to move; `None` once the game is over
    pub turn: Option<String>,
    pub winner: Option<String>,
}

impl GameView {
    pub(crate) fn new(state: &GameState, winner: Option<Seat>) -> Self {
        let board = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| {
                        state
                            .stack(Position::new(row, col))
                            .map(<[Color]>::to_vec)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        let name_of = |seat: Seat| state.player(seat).name().to_string();

        Self {
            board,
            players: state.players().iter().map(PlayerView::from).collect(),
            turn: winner.is_none().then(|| name_of(state.awaiting())),
            winner: winner.map(name_of),
        }
    }
}
