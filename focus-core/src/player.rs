//! Players, seats and piece colors

use serde::{Deserialize, Serialize};

/// A piece color token. Each player owns exactly one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub char);

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier for one of the two registered players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First = 0,
    Second = 1,
}

impl Seat {
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Player record: identity, color and the two off-board pools
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    /// Lowercased name, computed once
    key: String,
    color: Color,
    reserve: u32,
    captured: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        let name = name.into();
        Self {
            key: fold_name(&name),
            name,
            color,
            reserve: 0,
            captured: 0,
        }
    }

    /// Start with non-empty pools, for custom positions
    pub fn with_pools(mut self, reserve: u32, captured: u32) -> Self {
        self.reserve = reserve;
        self.captured = captured;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Own-color pieces available for placement
    pub fn reserve(&self) -> u32 {
        self.reserve
    }

    /// Opponent pieces taken out of play
    pub fn captured(&self) -> u32 {
        self.captured
    }

    /// Case-insensitive identity check against an already folded name
    pub(crate) fn matches(&self, folded: &str) -> bool {
        self.key == folded
    }

    /// Route pieces removed by overflow: own color to reserve, anything else
    /// to captures.
    pub(crate) fn absorb(&mut self, pieces: impl IntoIterator<Item = Color>) {
        for piece in pieces {
            if piece == self.color {
                self.reserve += 1;
            } else {
                self.captured += 1;
            }
        }
    }

    /// Take one piece out of the reserve, if any
    pub(crate) fn take_reserve(&mut self) -> Option<Color> {
        self.reserve = self.reserve.checked_sub(1)?;
        Some(self.color)
    }
}

/// Canonical form used for name lookups
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}
