//! Game state, move validation and stack transfer

use crate::board::{all_positions, Position, CELL_COUNT, DIRECTIONS};
use crate::error::MoveError;
use crate::player::{Color, Player, Seat};
use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Tallest stack allowed to remain on the board after a move
pub const MAX_STACK_HEIGHT: usize = 5;

/// Captured opponent pieces needed to win
pub const WINNING_CAPTURES: u32 = 6;

// ============================================================================
// CORE TYPES
// ============================================================================

/// A legal move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Move {
    /// Slide the whole stack at `from` onto `to`; `pieces` must equal the
    /// distance travelled
    Stack { from: Position, to: Position, pieces: u32 },
    /// Drop one reserve piece onto `to`
    Reserve { to: Position },
}

/// Result of the win check after a successful move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Continue,
    Win,
}

/// Win check: a pure function of the mover's capture count
pub fn check_win(captured: u32) -> Status {
    if captured >= WINNING_CAPTURES {
        Status::Win
    } else {
        Status::Continue
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Board, both players and whose turn it is
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Row-major cells, each a stack listed bottom to top
    cells: [Vec<Color>; CELL_COUNT],

    players: [Player; 2],

    /// Seat whose move is awaited
    awaiting: Seat,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Standard opening: one piece per cell, colors in pairs of two
    /// (first, first, second, second, ...) across row-major order
    pub fn new(first: Player, second: Player) -> Self {
        let (a, b) = (first.color(), second.color());
        let cells = std::array::from_fn(|i| {
            if (i / 2) % 2 == 0 {
                vec![a]
            } else {
                vec![b]
            }
        });

        Self {
            cells,
            players: [first, second],
            awaiting: Seat::First,
        }
    }

    /// Custom position from explicit stacks (bottom to top); unlisted cells
    /// are empty. First player moves first.
    ///
    /// Stacks above the height limit keep only their top pieces.
    pub fn from_stacks(first: Player, second: Player, stacks: &[(Position, Vec<Color>)]) -> Self {
        let mut cells: [Vec<Color>; CELL_COUNT] = std::array::from_fn(|_| Vec::new());
        for (pos, stack) in stacks {
            if pos.is_valid() {
                let bottom = stack.len().saturating_sub(MAX_STACK_HEIGHT);
                cells[pos.index()] = stack[bottom..].to_vec();
            }
        }

        Self {
            cells,
            players: [first, second],
            awaiting: Seat::First,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Seat whose move is awaited
    pub fn awaiting(&self) -> Seat {
        self.awaiting
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Stack at `pos`, bottom to top. `None` off the board.
    pub fn stack(&self, pos: Position) -> Option<&[Color]> {
        pos.is_valid().then(|| self.cells[pos.index()].as_slice())
    }

    /// Pieces on the board plus every reserve and capture pool
    pub fn total_pieces(&self) -> usize {
        let on_board: usize = self.cells.iter().map(Vec::len).sum();
        let off_board: u32 = self.players.iter().map(|p| p.reserve() + p.captured()).sum();
        on_board + off_board as usize
    }

    // ========================================================================
    // VALIDATION
    // ========================================================================

    fn ensure_turn(&self, seat: Seat) -> Result<(), MoveError> {
        if seat == self.awaiting {
            Ok(())
        } else {
            Err(MoveError::turn("not your turn"))
        }
    }

    /// Check a stack move without touching the board.
    ///
    /// Checks run in a fixed order and the first failure wins. The claimed
    /// piece count is checked against both the travel distance and the
    /// height of the start stack; the whole stack moves regardless.
    pub fn validate_stack_move(
        &self,
        seat: Seat,
        from: Position,
        to: Position,
        pieces: u32,
    ) -> Result<(), MoveError> {
        if !from.is_valid() || !to.is_valid() {
            return Err(MoveError::invalid_location("invalid location"));
        }

        let stack = &self.cells[from.index()];
        let top = stack
            .last()
            .ok_or_else(|| MoveError::invalid_location("no piece on start location"))?;

        if *top != self.player(seat).color() {
            return Err(MoveError::piece("not your piece"));
        }

        if from == to {
            return Err(MoveError::invalid_location("piece does not move"));
        }

        let distance = from
            .straight_distance(to)
            .ok_or_else(|| MoveError::invalid_location("diagonal moves not allowed"))?;

        if pieces != u32::from(distance) {
            return Err(MoveError::piece("invalid number of pieces"));
        }

        if pieces as usize > stack.len() {
            return Err(MoveError::piece("invalid number of pieces"));
        }

        Ok(())
    }

    // ========================================================================
    // APPLY MOVE
    // ========================================================================

    /// Apply a move for `seat`, returning the mover's win status
    pub fn play(&mut self, seat: Seat, mv: Move) -> Result<Status, MoveError> {
        match mv {
            Move::Stack { from, to, pieces } => self.move_stack(seat, from, to, pieces),
            Move::Reserve { to } => self.place_reserve(seat, to),
        }
    }

    /// Validate and execute a stack move
    pub fn move_stack(
        &mut self,
        seat: Seat,
        from: Position,
        to: Position,
        pieces: u32,
    ) -> Result<Status, MoveError> {
        self.ensure_turn(seat)?;
        self.validate_stack_move(seat, from, to, pieces)?;

        let moving = std::mem::take(&mut self.cells[from.index()]);
        self.cells[to.index()].extend(moving);

        Ok(self.finish_move(seat, to))
    }

    /// Validate and execute a reserve placement
    pub fn place_reserve(&mut self, seat: Seat, to: Position) -> Result<Status, MoveError> {
        if !to.is_valid() {
            return Err(MoveError::invalid_location("invalid location on the board"));
        }
        if self.player(seat).reserve() == 0 {
            return Err(MoveError::piece("no pieces in reserve"));
        }
        self.ensure_turn(seat)?;

        let piece = self.players[seat.index()]
            .take_reserve()
            .ok_or_else(|| MoveError::piece("no pieces in reserve"))?;
        self.cells[to.index()].push(piece);

        Ok(self.finish_move(seat, to))
    }

    /// Overflow, turn change and win check shared by both move kinds
    fn finish_move(&mut self, seat: Seat, landed: Position) -> Status {
        self.resolve_overflow(seat, landed);
        self.awaiting = seat.opponent();
        check_win(self.player(seat).captured())
    }

    /// Trim the stack at `pos` to the height limit from the bottom, handing
    /// the removed pieces to the mover
    fn resolve_overflow(&mut self, seat: Seat, pos: Position) {
        let stack = &mut self.cells[pos.index()];
        if stack.len() <= MAX_STACK_HEIGHT {
            return;
        }

        let excess = stack.len() - MAX_STACK_HEIGHT;
        let removed: Vec<Color> = stack.drain(..excess).collect();
        self.players[seat.index()].absorb(removed);
    }

    // ========================================================================
    // MOVE GENERATION
    // ========================================================================

    /// All moves the awaited player may make
    pub fn legal_moves(&self) -> Vec<Move> {
        let seat = self.awaiting;
        let color = self.player(seat).color();
        let mut moves = Vec::new();

        for from in all_positions() {
            let stack = &self.cells[from.index()];
            if stack.last() != Some(&color) {
                continue;
            }

            for &direction in &DIRECTIONS {
                for distance in 1..=stack.len() {
                    let Some(to) = from.offset(direction, distance).filter(Position::is_valid)
                    else {
                        break;
                    };
                    moves.push(Move::Stack { from, to, pieces: distance as u32 });
                }
            }
        }

        if self.player(seat).reserve() > 0 {
            moves.extend(all_positions().map(|to| Move::Reserve { to }));
        }

        moves
    }
}

// ============================================================================
// TESTS
// ============================================================================
