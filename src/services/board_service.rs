use crate::config::cli::Command;
use crate::domain::{LeaderboardApi, SortCriterion};
use crate::error::{BoardError, Result};
use crate::render::{
    render_board, render_board_json, render_detail, render_header, render_notice, render_stats,
    BoardSnapshot,
};
use crate::services::categories::{available_categories, is_scored_on_board, suggest_category};
use crate::services::ranking::rank;
use crate::services::session::RefreshSession;
use crate::services::statistics::AggregateStats;
use chrono::{Local, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub struct BoardService {
    session: RefreshSession,
}

impl BoardService {
    pub fn new(api: Arc<dyn LeaderboardApi + 'static>, notice_ttl: Duration) -> Self {
        Self {
            session: RefreshSession::new(api, notice_ttl),
        }
    }

    pub fn session(&self) -> &RefreshSession {
        &self.session
    }

    pub async fn execute(&mut self, command: &Command) -> Result<String> {
        self.session.load().await;

        match command {
            Command::Board { sort, json: true } => self.board_json(sort),
            Command::Board { sort, json: false } => Ok(self.board_text(sort)),
            Command::Detail { name } => self.detail_text(name),
            Command::Status => Ok(self.status_text()),
            Command::Refresh { sort } => self.refresh(sort).await,
        }
    }

    fn warn_on_unscored_category(&self, criterion: &SortCriterion) {
        let SortCriterion::Category(label) = criterion else {
            return;
        };
        let board = self.session.board();
        if board.is_empty() || is_scored_on_board(board, label) {
            return;
        }

        let categories = available_categories(board);
        match suggest_category(label, categories.iter().map(String::as_str)) {
            Some(suggestion) => warn!(
                "No partner has a '{}' score, every entry ranks at 0. Did you mean '{}'?",
                label, suggestion
            ),
            None => warn!(
                "No partner has a '{}' score, every entry ranks at 0",
                label
            ),
        }
    }

    pub fn board_text(&self, criterion: &SortCriterion) -> String {
        self.warn_on_unscored_category(criterion);

        let board = self.session.board();
        let view = rank(board, criterion);
        let stats = AggregateStats::summarize(board);

        let mut out = render_header(Local::now(), board.len(), self.session.needs_refresh());
        if let Some(notice) = self.session.active_notice(Utc::now()) {
            out.push_str(&render_notice(notice));
        }
        out.push('\n');
        out.push_str(&render_stats(&stats));
        out.push('\n');
        out.push_str(&render_board(&view, criterion));
        out
    }

    pub fn board_json(&self, criterion: &SortCriterion) -> Result<String> {
        self.warn_on_unscored_category(criterion);

        let board = self.session.board();
        let view = rank(board, criterion);
        let stats = AggregateStats::summarize(board);
        let snapshot = BoardSnapshot::new(
            self.session.loaded_at(),
            criterion,
            self.session.needs_refresh(),
            &stats,
            &view,
        );
        render_board_json(&snapshot)
    }

    pub fn detail_text(&self, name: &str) -> Result<String> {
        let view = rank(self.session.board(), &SortCriterion::Total);
        let entry = view
            .iter()
            .find(|entry| entry.entity.name == name)
            .ok_or_else(|| BoardError::EntityNotFound(name.to_string()))?;
        Ok(render_detail(entry.entity, entry.rank))
    }

    pub fn status_text(&self) -> String {
        if self.session.needs_refresh() {
            "Unclassified partners found: a refresh is recommended\n".to_string()
        } else {
            "All partners are classified: no refresh needed\n".to_string()
        }
    }

    pub async fn refresh(&mut self, criterion: &SortCriterion) -> Result<String> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .map_err(|e| BoardError::Other(e.to_string()))?,
        );
        spinner.set_message("Refreshing leaderboard...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.session.refresh().await;
        spinner.finish_and_clear();

        let message = result?;
        info!("Backend refresh finished: {}", message);
        Ok(self.board_text(criterion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GroupLabelSet, ScoredEntity};
    use crate::services::session::tests::{FakeApi, ScriptedRefresh};

    fn service(api: FakeApi) -> (Arc<FakeApi>, BoardService) {
        let api = Arc::new(api);
        let service = BoardService::new(api.clone(), Duration::from_secs(5));
        (api, service)
    }

    fn board() -> Vec<ScoredEntity> {
        vec![
            ScoredEntity::new("Alpha", 3.8).with_category("인적역량", 4.9),
            ScoredEntity::new("Beta", 4.4).with_category("인적역량", 3.1),
        ]
    }

    #[tokio::test]
    async fn board_command_renders_total_order() {
        let (_, mut service) = service(FakeApi::new(board(), GroupLabelSet::default()));
        let text = service.execute(&Command::default()).await.unwrap();

        assert!(text.contains("Leader: Beta"));
        assert!(text.contains("   1  Beta "));
        assert!(text.contains("   2  Alpha"));
        assert!(!text.contains("New evaluation data"));
    }

    #[tokio::test]
    async fn category_sort_keeps_total_leader() {
        let (_, mut service) = service(FakeApi::new(board(), GroupLabelSet::default()));
        let command = Command::Board {
            sort: SortCriterion::Category("인적역량".to_string()),
            json: true,
        };
        let json = service.execute(&command).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["entries"][0]["name"], "Alpha");
        assert_eq!(value["stats"]["leader_name"], "Beta");
        assert!(value["fetched_at"].is_string());
    }

    #[tokio::test]
    async fn detail_reports_total_rank() {
        let (_, mut service) = service(FakeApi::new(board(), GroupLabelSet::default()));
        let text = service
            .execute(&Command::Detail {
                name: "Alpha".to_string(),
            })
            .await
            .unwrap();
        assert!(text.starts_with("Alpha (rank #2)"));
    }

    #[tokio::test]
    async fn detail_for_unknown_name_fails() {
        let (_, mut service) = service(FakeApi::new(board(), GroupLabelSet::default()));
        let err = service
            .execute(&Command::Detail {
                name: "Gamma".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::EntityNotFound(ref n) if n == "Gamma"));
    }

    #[tokio::test]
    async fn status_reflects_group_labels() {
        let (_, mut service) = service(FakeApi::new(
            board(),
            GroupLabelSet::from_iter(["Premier", "Unknown"]),
        ));
        let text = service.execute(&Command::Status).await.unwrap();
        assert!(text.starts_with("Unclassified partners found"));
    }

    #[tokio::test]
    async fn refresh_command_shows_notice_and_new_board() {
        let mut api = FakeApi::new(board(), GroupLabelSet::default());
        api.board_after_refresh = Some(vec![ScoredEntity::new("Gamma", 4.8)]);
        let (api, mut service) = service(api);

        let text = service
            .execute(&Command::Refresh {
                sort: SortCriterion::Total,
            })
            .await
            .unwrap();

        assert!(text.contains("[ok] recomputed"));
        assert!(text.contains("Leader: Gamma"));
        assert_eq!(
            api.calls(),
            vec!["leaderboard", "groups", "refresh", "leaderboard", "groups"]
        );
    }

    #[tokio::test]
    async fn rejected_refresh_is_an_error() {
        let mut api = FakeApi::new(board(), GroupLabelSet::default());
        api.refresh = ScriptedRefresh::Reject("evaluation still running");
        let (_, mut service) = service(api);

        let err = service
            .execute(&Command::Refresh {
                sort: SortCriterion::Total,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, BoardError::RefreshRejected(_)));
        assert_eq!(service.session().board().len(), 2);
        assert!(service.board_text(&SortCriterion::Total).contains("[error] evaluation still running"));
    }
}
