#![cfg(feature = "std")]
//! Remote game service boundary: wire bodies and the `GameApi` trait.
//!
//! The request and response shapes mirror the one public service this client
//! was written against. `transport::http` is the only code that depends on
//! them.

use serde::{Deserialize, Serialize};

use crate::{code::Code, common::Score, config::CODE_LENGTH};

/// Opaque handle for one game hosted by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body returned by `POST /game`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameResponse {
    pub game_id: SessionId,
}

/// Body sent to `POST /guess`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    pub game_id: SessionId,
    /// Digits concatenated, e.g. `"1234"`.
    pub guess: String,
}

impl GuessRequest {
    pub fn new(session: &SessionId, guess: &Code) -> Self {
        Self {
            game_id: session.clone(),
            guess: guess.to_string(),
        }
    }
}

/// Successful body returned by `POST /guess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResponse {
    pub black: u8,
    pub white: u8,
}

/// Peg counts that add up to more than the code length cannot come from a
/// real scoring and are rejected as undecodable.
impl TryFrom<GuessResponse> for Score {
    type Error = ApiError;

    fn try_from(resp: GuessResponse) -> Result<Self, Self::Error> {
        if resp.black as usize + resp.white as usize > CODE_LENGTH {
            return Err(ApiError::Decode(format!(
                "{} black and {} white exceed {} pegs",
                resp.black, resp.white, CODE_LENGTH
            )));
        }
        Ok(Score::new(resp.black, resp.white))
    }
}

/// Error body any endpoint may return instead of its normal payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure of a single remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request did not complete, or completed with an unusable status.
    Transport(String),
    /// The service answered with a well-formed error payload.
    Server(String),
    /// The response body did not have the expected shape.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "Transport error: {}", e),
            ApiError::Server(e) => write!(f, "Server error: {}", e),
            ApiError::Decode(e) => write!(f, "Decoding error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

/// Operations offered by a game service. Each call is one request/response
/// round trip; callers await it before issuing the next.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    /// Start a new game and return its session handle.
    async fn create_game(&mut self) -> Result<SessionId, ApiError>;

    /// Score `guess` in the given session.
    async fn submit_guess(&mut self, session: &SessionId, guess: &Code) -> Result<Score, ApiError>;

    /// Discard the session.
    async fn delete_game(&mut self, session: &SessionId) -> Result<(), ApiError>;
}
