#![cfg(feature = "std")]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::code::Code;
use crate::common::Score;
use crate::game::GameEngine;
use crate::protocol::{ApiError, GameApi, SessionId};

struct Host {
    games: HashMap<SessionId, GameEngine>,
    rng: SmallRng,
    fixed_secret: Option<Code>,
    next_id: u64,
    created: usize,
    deleted: usize,
}

/// A game service running in this process.
///
/// Clones share the same hosted games, so a test can keep one handle to
/// inspect what the client did with another.
#[derive(Clone)]
pub struct InMemoryGameApi {
    host: Arc<Mutex<Host>>,
}

impl InMemoryGameApi {
    fn from_parts(rng: SmallRng, fixed_secret: Option<Code>) -> Self {
        Self {
            host: Arc::new(Mutex::new(Host {
                games: HashMap::new(),
                rng,
                fixed_secret,
                next_id: 1,
                created: 0,
                deleted: 0,
            })),
        }
    }

    /// Service drawing secrets from OS entropy.
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self::from_parts(SmallRng::from_rng(&mut seed_rng), None)
    }

    /// Service whose secrets are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_parts(SmallRng::seed_from_u64(seed), None)
    }

    /// Service that hands out `secret` for every game.
    pub fn with_secret(secret: Code) -> Self {
        Self::from_parts(SmallRng::seed_from_u64(0), Some(secret))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Host>, ApiError> {
        self.host
            .lock()
            .map_err(|_| ApiError::Transport("In-memory host poisoned".to_string()))
    }

    /// Read-only view for the counters; they stay meaningful after a panic
    /// elsewhere poisoned the lock.
    fn inspect(&self) -> MutexGuard<'_, Host> {
        self.host.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Games created and not yet deleted.
    pub fn active_games(&self) -> usize {
        self.inspect().games.len()
    }

    /// Total successful `create_game` calls.
    pub fn created(&self) -> usize {
        self.inspect().created
    }

    /// Total successful `delete_game` calls.
    pub fn deleted(&self) -> usize {
        self.inspect().deleted
    }
}

impl Default for InMemoryGameApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GameApi for InMemoryGameApi {
    async fn create_game(&mut self) -> Result<SessionId, ApiError> {
        let mut host = self.lock()?;
        let id = SessionId::new(format!("game-{}", host.next_id));
        host.next_id += 1;
        let engine = match host.fixed_secret {
            Some(secret) => GameEngine::with_secret(secret),
            None => GameEngine::new(&mut host.rng),
        };
        debug!("Hosting game {}", id);
        host.games.insert(id.clone(), engine);
        host.created += 1;
        Ok(id)
    }

    async fn submit_guess(&mut self, session: &SessionId, guess: &Code) -> Result<Score, ApiError> {
        let mut host = self.lock()?;
        let engine = host
            .games
            .get_mut(session)
            .ok_or_else(|| ApiError::Server("game not found".to_string()))?;
        engine
            .guess(guess)
            .map_err(|e| ApiError::Server(e.to_string()))
    }

    async fn delete_game(&mut self, session: &SessionId) -> Result<(), ApiError> {
        let mut host = self.lock()?;
        match host.games.remove(session) {
            Some(mut engine) => {
                debug!("Deleted game {} (secret {})", session, engine.quit());
                host.deleted += 1;
                Ok(())
            }
            None => Err(ApiError::Server("game not found".to_string())),
        }
    }
}
