use crate::domain::SortCriterion;
use crate::error::Result;
use crate::services::ranking::RankedEntry;
use crate::services::statistics::AggregateStats;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Machine-readable view of the board as currently sorted.
#[derive(Debug, Serialize)]
pub struct BoardSnapshot<'a> {
    pub fetched_at: Option<DateTime<Utc>>,
    pub sort_by: &'a SortCriterion,
    pub needs_refresh: bool,
    pub stats: &'a AggregateStats,
    pub entries: &'a [RankedEntry<'a>],
    pub version: &'static str,
}

impl<'a> BoardSnapshot<'a> {
    pub fn new(
        fetched_at: Option<DateTime<Utc>>,
        sort_by: &'a SortCriterion,
        needs_refresh: bool,
        stats: &'a AggregateStats,
        entries: &'a [RankedEntry<'a>],
    ) -> Self {
        Self {
            fetched_at,
            sort_by,
            needs_refresh,
            stats,
            entries,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

pub fn render_board_json(snapshot: &BoardSnapshot<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScoredEntity;
    use crate::services::ranking::rank;
    use serde_json::Value;

    #[test]
    fn snapshot_carries_ranks_and_stats() {
        let entities = vec![
            ScoredEntity::new("A", 4.2).with_category("X", 4.0),
            ScoredEntity::new("B", 4.2).with_category("X", 5.0),
        ];
        let criterion = SortCriterion::Category("X".to_string());
        let view = rank(&entities, &criterion);
        let stats = AggregateStats::summarize(&entities);
        let snapshot = BoardSnapshot::new(None, &criterion, false, &stats, &view);

        let value: Value = serde_json::from_str(&render_board_json(&snapshot).unwrap()).unwrap();
        assert_eq!(value["sort_by"], "X");
        assert_eq!(value["entries"][0]["name"], "B");
        assert_eq!(value["entries"][0]["rank"], 1);
        assert_eq!(value["entries"][0]["value"], 5.0);
        assert_eq!(value["entries"][1]["category_scores"]["X"], 4.0);
        assert_eq!(value["stats"]["leader_name"], "A");
        assert_eq!(value["stats"]["count"], 2);
        assert!(value["fetched_at"].is_null());
    }
}
