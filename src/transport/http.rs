#![cfg(feature = "std")]

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::code::Code;
use crate::common::Score;
use crate::config::DEFAULT_BASE_URL;
use crate::protocol::{
    ApiError, CreateGameResponse, ErrorResponse, GameApi, GuessRequest, GuessResponse, SessionId,
};

/// `GameApi` over HTTP with JSON bodies.
///
/// Endpoints, relative to the base URL:
/// - `POST /game` creates a game and answers `{"game_id": ...}`
/// - `POST /guess` takes `{"game_id", "guess"}` and answers
///   `{"black", "white"}` or `{"error"}`
/// - `DELETE /game/{id}` succeeds on any 2xx status
pub struct HttpGameApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGameApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read the whole body, then decode it. An error payload always wins over
    /// the expected shape so that it is never mistaken for a result.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Read error: {}", e)))?;

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&body) {
            return Err(ApiError::Server(err.error));
        }
        match serde_json::from_str::<T>(&body) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(ApiError::Transport(format!(
                "Service returned status {}",
                status
            ))),
            Err(e) => {
                debug!("Raw response: {}", body);
                Err(ApiError::Decode(format!("{} (raw response: {})", e, body)))
            }
        }
    }
}

impl Default for HttpGameApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_connect() {
        ApiError::Transport(format!("Connection failed: {}", e))
    } else {
        ApiError::Transport(format!("HTTP request failed: {}", e))
    }
}

#[async_trait::async_trait]
impl GameApi for HttpGameApi {
    async fn create_game(&mut self) -> Result<SessionId, ApiError> {
        let url = self.url("/game");
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(transport_error)?;
        let created: CreateGameResponse = Self::decode(response).await.map_err(|e| {
            warn!("Failed to start game: {}", e);
            e
        })?;
        Ok(created.game_id)
    }

    async fn submit_guess(&mut self, session: &SessionId, guess: &Code) -> Result<Score, ApiError> {
        let url = self.url("/guess");
        let body = GuessRequest::new(session, guess);
        debug!("POST {} guess={}", url, body.guess);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        let scored: GuessResponse = Self::decode(response).await?;
        Score::try_from(scored).map_err(|e| {
            warn!("Rejected score from service: {}", e);
            e
        })
    }

    async fn delete_game(&mut self, session: &SessionId) -> Result<(), ApiError> {
        let url = self.url(&format!("/game/{}", session));
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            warn!("Delete of game {} returned status {}", session, status);
            Err(ApiError::Transport(format!("Service returned status {}", status)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = HttpGameApi::new("http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080");
        assert_eq!(api.url("/game"), "http://localhost:8080/game");
    }

    #[test]
    fn default_points_at_public_service() {
        assert_eq!(HttpGameApi::default().base_url(), DEFAULT_BASE_URL);
    }
}
