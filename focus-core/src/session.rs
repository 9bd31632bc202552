//! Game session: named players routed to the rules engine

use crate::board::Position;
use crate::error::MoveError;
use crate::game::{GameState, Move, Status};
use crate::player::{fold_name, Color, Player, Seat};
use crate::view::GameView;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What a successful move reports back
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MoveOutcome {
    Accepted,
    Win { player: String },
}

impl MoveOutcome {
    pub fn message(&self) -> String {
        match self {
            MoveOutcome::Accepted => "successfully moved".to_string(),
            MoveOutcome::Win { player } => format!("{player} wins!"),
        }
    }
}

/// Two players and their board, plus the winner once there is one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    state: GameState,
    winner: Option<Seat>,
}

impl GameSession {
    /// New game in the standard opening position
    #[instrument(skip_all, fields(first = first.name(), second = second.name()))]
    pub fn new(first: Player, second: Player) -> Self {
        info!("Creating new game session");
        Self::from_state(GameState::new(first, second))
    }

    /// Wrap an existing position
    pub fn from_state(state: GameState) -> Self {
        Self { state, winner: None }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|seat| self.state.player(seat))
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Player whose move is awaited, or `None` once the game is over
    pub fn current_player(&self) -> Option<&Player> {
        match self.winner {
            Some(_) => None,
            None => Some(self.state.player(self.state.awaiting())),
        }
    }

    /// Case-insensitive name lookup
    pub fn seat_of(&self, name: &str) -> Result<Seat, MoveError> {
        let folded = fold_name(name);
        [Seat::First, Seat::Second]
            .into_iter()
            .find(|&seat| self.state.player(seat).matches(&folded))
            .ok_or_else(|| MoveError::PlayerName(format!("invalid player name: {name}")))
    }

    pub fn player(&self, name: &str) -> Result<&Player, MoveError> {
        self.seat_of(name).map(|seat| self.state.player(seat))
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Move the stack at `start` to `end`, claiming `pieces` cells of travel
    pub fn move_piece(
        &mut self,
        name: &str,
        start: Position,
        end: Position,
        pieces: u32,
    ) -> Result<MoveOutcome, MoveError> {
        self.apply(name, Move::Stack { from: start, to: end, pieces })
    }

    /// Place one reserve piece on `target`
    pub fn place_reserve(&mut self, name: &str, target: Position) -> Result<MoveOutcome, MoveError> {
        self.apply(name, Move::Reserve { to: target })
    }

    /// Route a move for the named player through validation
    #[instrument(skip(self))]
    pub fn apply(&mut self, name: &str, mv: Move) -> Result<MoveOutcome, MoveError> {
        let seat = self.seat_of(name)?;

        if self.winner.is_some() {
            debug!("Rejected move after game end");
            return Err(MoveError::turn("game is over"));
        }

        let status = self.state.play(seat, mv).map_err(|err| {
            debug!(error = %err, "Move rejected");
            err
        })?;

        let player = self.state.player(seat);
        match status {
            Status::Continue => {
                debug!(captured = player.captured(), reserve = player.reserve(), "Move accepted");
                Ok(MoveOutcome::Accepted)
            }
            Status::Win => {
                info!(captured = player.captured(), "Player wins");
                let outcome = MoveOutcome::Win {
                    player: player.name().to_string(),
                };
                self.winner = Some(seat);
                Ok(outcome)
            }
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Stack at `position`, bottom to top
    pub fn peek(&self, position: Position) -> Result<&[Color], MoveError> {
        self.state
            .stack(position)
            .ok_or_else(|| MoveError::invalid_location("invalid location on the board"))
    }

    pub fn reserves(&self, name: &str) -> Result<u32, MoveError> {
        self.player(name).map(Player::reserve)
    }

    pub fn captures(&self, name: &str) -> Result<u32, MoveError> {
        self.player(name).map(Player::captured)
    }

    /// Moves available to the player to move; empty once the game is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.state.legal_moves()
    }

    pub fn view(&self) -> GameView {
        GameView::new(&self.state, self.winner)
    }
}
