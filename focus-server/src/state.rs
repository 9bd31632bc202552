//! Server state management
//!
//! Registry of running games. Each game sits behind its own mutex so a move
//! is validated and applied as one step; the registry lock is only held long
//! enough to look a game up or insert one.

use crate::error::ApiError;
use focus_core::GameSession;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

/// One game, shared between requests
pub type SharedGame = Arc<Mutex<GameSession>>;

/// Server-wide shared state
pub struct ServerState {
    games: RwLock<HashMap<String, SharedGame>>,
    next_id: AtomicU64,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a game and return its id
    pub fn insert(&self, session: GameSession) -> Result<String, ApiError> {
        let id = format!("game-{}", self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut games = self.games.write().map_err(|_| ApiError::LockPoisoned)?;
        games.insert(id.clone(), Arc::new(Mutex::new(session)));
        Ok(id)
    }

    /// Look up a game by id
    pub fn get(&self, id: &str) -> Result<SharedGame, ApiError> {
        let games = self.games.read().map_err(|_| ApiError::LockPoisoned)?;
        games
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::GameNotFound(id.to_string()))
    }

    /// Drop a game from the registry. Requests already holding it finish
    /// against their own handle.
    pub fn remove(&self, id: &str) -> Result<SharedGame, ApiError> {
        let mut games = self.games.write().map_err(|_| ApiError::LockPoisoned)?;
        games
            .remove(id)
            .ok_or_else(|| ApiError::GameNotFound(id.to_string()))
    }

    /// Number of registered games
    pub fn game_count(&self) -> Result<usize, ApiError> {
        let games = self.games.read().map_err(|_| ApiError::LockPoisoned)?;
        Ok(games.len())
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Lock a game for the duration of one request
pub fn lock(game: &SharedGame) -> Result<MutexGuard<'_, GameSession>, ApiError> {
    game.lock().map_err(|_| ApiError::LockPoisoned)
}
