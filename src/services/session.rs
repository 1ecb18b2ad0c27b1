use crate::domain::{LeaderboardApi, ScoredEntity};
use crate::error::{BoardError, Result};
use crate::services::refresh_check::needs_refresh;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Shown when the backend declines a refresh without saying why.
const REJECTED_WITHOUT_MESSAGE: &str = "Backend rejected refresh";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Refreshing,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short-lived message about the last refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub posted_at: DateTime<Utc>,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            posted_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => now - self.posted_at >= ttl,
            Err(_) => false,
        }
    }
}

/// Owns the displayed board and drives the Idle -> Refreshing -> Idle/Failed cycle.
///
/// Every update replaces the whole board; a failed fetch leaves the last
/// good board in place.
pub struct RefreshSession {
    api: Arc<dyn LeaderboardApi>,
    board: Vec<ScoredEntity>,
    needs_refresh: bool,
    state: RefreshState,
    notice: Option<Notice>,
    notice_ttl: Duration,
    loaded_at: Option<DateTime<Utc>>,
}

impl RefreshSession {
    pub fn new(api: Arc<dyn LeaderboardApi + 'static>, notice_ttl: Duration) -> Self {
        Self {
            api,
            board: Vec::new(),
            needs_refresh: false,
            state: RefreshState::Idle,
            notice: None,
            notice_ttl,
            loaded_at: None,
        }
    }

    pub fn board(&self) -> &[ScoredEntity] {
        &self.board
    }

    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    pub fn state(&self) -> &RefreshState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == RefreshState::Refreshing
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// The current notice, unless it has outlived the TTL.
    pub fn active_notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|notice| !notice.is_expired(now, self.notice_ttl))
    }

    /// Returns whether the board was replaced.
    pub async fn load_leaderboard(&mut self) -> bool {
        match self.api.fetch_leaderboard().await {
            Ok(board) => {
                info!("Loaded leaderboard with {} entries", board.len());
                self.board = board;
                self.loaded_at = Some(Utc::now());
                true
            }
            Err(e) => {
                warn!("Failed to load leaderboard, keeping previous data: {}", e);
                false
            }
        }
    }

    /// Returns whether the refresh-needed flag was re-evaluated.
    pub async fn check_refresh_status(&mut self) -> bool {
        match self.api.fetch_groups().await {
            Ok(groups) => {
                self.needs_refresh = needs_refresh(&groups);
                debug!(
                    "Checked {} group labels, needs refresh: {}",
                    groups.len(),
                    self.needs_refresh
                );
                true
            }
            Err(e) => {
                warn!("Failed to check refresh status: {}", e);
                false
            }
        }
    }

    /// Initial load: board first, then group labels.
    pub async fn load(&mut self) {
        self.load_leaderboard().await;
        self.check_refresh_status().await;
    }

    /// Moves to `Refreshing`. Rejected while another refresh is in flight.
    pub fn begin_refresh(&mut self) -> Result<()> {
        if self.is_busy() {
            return Err(BoardError::RefreshInProgress);
        }
        self.state = RefreshState::Refreshing;
        self.notice = None;
        Ok(())
    }

    fn fail(&mut self, message: String) {
        warn!("{}", message);
        self.notice = Some(Notice::new(NoticeKind::Error, message.clone()));
        self.state = RefreshState::Failed(message);
    }

    /// Asks the backend to recompute, then reloads the board and the group
    /// labels in that order. Returns the backend's message on success.
    pub async fn refresh(&mut self) -> Result<String> {
        self.begin_refresh()?;
        info!("Requesting leaderboard recomputation");

        match self.api.trigger_refresh().await {
            Ok(outcome) if outcome.success => {
                self.notice = Some(Notice::new(NoticeKind::Success, outcome.message.clone()));
                self.load_leaderboard().await;
                self.check_refresh_status().await;
                self.state = RefreshState::Idle;
                info!("Refresh completed: {}", outcome.message);
                Ok(outcome.message)
            }
            Ok(outcome) => {
                let message = if outcome.message.trim().is_empty() {
                    REJECTED_WITHOUT_MESSAGE.to_string()
                } else {
                    outcome.message
                };
                self.fail(message.clone());
                Err(BoardError::RefreshRejected(message))
            }
            Err(e) => {
                self.fail(format!("Refresh failed: {}", e));
                Err(e)
            }
        }
    }
}
