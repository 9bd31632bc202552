//! GameSetup - who plays, with which color

use crate::error::SetupError;
use crate::player::{fold_name, Color, Player};
use crate::session::GameSession;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One side of the table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub color: char,
}

impl PlayerSetup {
    pub fn new(name: impl Into<String>, color: char) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Both players, first to move listed first
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub players: [PlayerSetup; 2],
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            players: [
                PlayerSetup::new("Player 1", 'R'),
                PlayerSetup::new("Player 2", 'G'),
            ],
        }
    }
}

impl GameSetup {
    pub fn new(first: PlayerSetup, second: PlayerSetup) -> Self {
        Self {
            players: [first, second],
        }
    }

    /// Load from a JSON file and validate
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let content = std::fs::read_to_string(path).map_err(|e| SetupError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parse from JSON text and validate
    pub fn from_json(content: &str) -> Result<Self, SetupError> {
        let setup: GameSetup = serde_json::from_str(content)?;
        setup.validate()?;
        Ok(setup)
    }

    /// Names must be non-empty and distinct ignoring case; colors distinct
    pub fn validate(&self) -> Result<(), SetupError> {
        let [first, second] = &self.players;

        if first.name.trim().is_empty() || second.name.trim().is_empty() {
            return Err(SetupError::EmptyName);
        }
        if fold_name(&first.name) == fold_name(&second.name) {
            return Err(SetupError::DuplicateName(second.name.clone()));
        }
        if first.color == second.color {
            return Err(SetupError::DuplicateColor(first.color));
        }

        Ok(())
    }

    /// Validate and start a game in the opening position
    pub fn to_session(&self) -> Result<GameSession, SetupError> {
        self.validate()?;
        let [first, second] = &self.players;
        Ok(GameSession::new(
            Player::new(first.name.clone(), Color(first.color)),
            Player::new(second.name.clone(), Color(second.color)),
        ))
    }
}
