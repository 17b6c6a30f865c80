#![cfg(feature = "std")]

use log::info;

use crate::{
    code::Code,
    common::Score,
    protocol::{ApiError, GameApi, SessionId},
};

/// One remote game: the service handle plus the session it created.
///
/// `finish` consumes the session, so the delete call happens at most once and
/// the identifier cannot be used afterwards.
pub struct RemoteSession<A: GameApi> {
    api: A,
    id: SessionId,
    guesses: usize,
}

impl<A: GameApi> RemoteSession<A> {
    /// Ask the service for a new game. On failure no session exists and
    /// nothing needs to be cleaned up.
    pub async fn start(mut api: A) -> Result<Self, ApiError> {
        let id = api.create_game().await?;
        info!("Started remote game {}", id);
        Ok(Self {
            api,
            id,
            guesses: 0,
        })
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Guesses the service has scored in this session.
    pub fn guesses(&self) -> usize {
        self.guesses
    }

    /// Submit one guess and wait for the outcome.
    pub async fn guess(&mut self, guess: &Code) -> Result<Score, ApiError> {
        let result = self.api.submit_guess(&self.id, guess).await?;
        self.guesses += 1;
        Ok(result)
    }

    /// Delete the game on the service and hand the api back.
    pub async fn finish(mut self) -> (A, Result<(), ApiError>) {
        let result = self.api.delete_game(&self.id).await;
        if result.is_ok() {
            info!("Deleted remote game {}", self.id);
        }
        (self.api, result)
    }
}
