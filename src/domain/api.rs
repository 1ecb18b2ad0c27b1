use super::{GroupLabelSet, ScoredEntity};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/refresh_leaderboard_public`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// The three backend calls the board depends on.
#[async_trait]
pub trait LeaderboardApi: Send + Sync {
    async fn fetch_leaderboard(&self) -> Result<Vec<ScoredEntity>>;
    async fn fetch_groups(&self) -> Result<GroupLabelSet>;
    async fn trigger_refresh(&self) -> Result<RefreshOutcome>;
}
