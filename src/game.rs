#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use rand::Rng;

use crate::{
    code::Code,
    common::{GameError, Score},
    scoring::score,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// A guess matched every position.
    Won,
    /// The player quit; the secret has been revealed.
    Aborted,
}

/// One scored round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub guess: Code,
    pub score: Score,
}

/// Local game logic holding the secret code and the round history.
pub struct GameEngine {
    secret: Code,
    status: GameStatus,
    history: Vec<Round>,
}

impl GameEngine {
    /// Start a game with a freshly drawn secret.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_secret(Code::random(rng))
    }

    /// Start a game with a known secret.
    pub fn with_secret(secret: Code) -> Self {
        Self {
            secret,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Score a guess and record it as a round. A perfect score ends the game.
    pub fn guess(&mut self, guess: &Code) -> Result<Score, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::Finished);
        }
        let result = score(&self.secret, guess);
        self.history.push(Round {
            guess: *guess,
            score: result,
        });
        if result.is_win() {
            self.status = GameStatus::Won;
        }
        Ok(result)
    }

    /// Abandon the game and reveal the secret. A finished game stays in its
    /// terminal state.
    pub fn quit(&mut self) -> Code {
        if self.status == GameStatus::InProgress {
            self.status = GameStatus::Aborted;
        }
        self.secret
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of rounds consumed so far.
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// The secret, once it is no longer hidden.
    pub fn secret(&self) -> Option<Code> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won | GameStatus::Aborted => Some(self.secret),
        }
    }
}
