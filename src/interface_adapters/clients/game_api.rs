use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::domain::{ApiError, Command, GameApi, WorldSnapshot};
use crate::interface_adapters::protocol::{MoveRequestDto, RoundsDto, decode_snapshot};

pub const PRODUCTION_URL: &str = "https://games.datsteam.dev";
pub const TEST_URL: &str = "https://games-test.datsteam.dev";

const AUTH_HEADER: &str = "X-Auth-Token";

// Thin reqwest client for the game's move and rounds endpoints.
#[derive(Clone)]
pub struct GameApiClient {
    http: reqwest::Client,
    base_url: String,
    game_name: String,
    token: String,
}

impl GameApiClient {
    pub fn new(
        base_url: impl Into<String>,
        game_name: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            game_name: game_name.into(),
            token: token.into(),
        })
    }

    /// Fetches the round schedule. Informational only.
    pub async fn rounds(&self) -> Result<RoundsDto, ApiError> {
        let url = format!("{}/rounds/{}", self.base_url, self.game_name);
        let response = self
            .http
            .get(url)
            .header(AUTH_HEADER, &self.token)
            .send()
            .await
            .map_err(transport_error)?;

        let body = success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl GameApi for GameApiClient {
    async fn submit_commands(&self, commands: &[Command]) -> Result<WorldSnapshot, ApiError> {
        let url = format!("{}/play/{}/player/move", self.base_url, self.game_name);
        let response = self
            .http
            .post(url)
            .header(AUTH_HEADER, &self.token)
            .json(&MoveRequestDto::from(commands))
            .send()
            .await
            .map_err(transport_error)?;

        let body = success_body(response).await?;
        debug!(bytes = body.len(), commands = commands.len(), "move accepted");
        Ok(decode_snapshot(&body)?)
    }
}

async fn success_body(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    if !status.is_success() {
        return Err(ApiError::Upstream {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

fn transport_error(error: reqwest::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}
