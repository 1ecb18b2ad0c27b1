use crate::domain::{GroupLabelSet, LeaderboardApi, RefreshOutcome, ScoredEntity};
use crate::error::{BoardError, Result};
use crate::services::retry::RetryPolicy;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

pub const LEADERBOARD_PATH: &str = "/api/leaderboard";
pub const GROUPS_PATH: &str = "/api/debug_groups";
pub const REFRESH_PATH: &str = "/api/refresh_leaderboard_public";

/// Talks to the evaluation backend over HTTP.
pub struct HttpLeaderboardClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpLeaderboardClient {
    pub fn new(client: Client, base_url: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            retry,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn check_status(response: Response, path: &str) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            error!("Leaderboard API error: Status {} for {}", status, path);
            return Err(BoardError::HttpStatus {
                status: status.as_u16(),
                endpoint: path.to_string(),
            });
        }
        Ok(response)
    }

    async fn get_once<T: DeserializeOwned>(&self, url: &str, path: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;
        let response = Self::check_status(response, path)?;
        Ok(response.json().await?)
    }

    /// GETs are idempotent, so they go through the retry policy.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!("GET {}", url);
        self.retry.run(path, || self.get_once(&url, path)).await
    }
}

#[async_trait]
impl LeaderboardApi for HttpLeaderboardClient {
    async fn fetch_leaderboard(&self) -> Result<Vec<ScoredEntity>> {
        self.get_json(LEADERBOARD_PATH).await
    }

    async fn fetch_groups(&self) -> Result<GroupLabelSet> {
        self.get_json(GROUPS_PATH).await
    }

    async fn trigger_refresh(&self) -> Result<RefreshOutcome> {
        let url = self.endpoint(REFRESH_PATH);
        debug!("POST {}", url);
        let response = self.client.post(&url).send().await?;
        let response = Self::check_status(response, REFRESH_PATH)?;
        Ok(response.json().await?)
    }
}
