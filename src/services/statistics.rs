use crate::domain::{ScoredEntity, SortCriterion};
use crate::services::ranking::{rank, RankedEntry};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub count: usize,
    pub average_total: f64,
    /// `None` for an empty board.
    pub max_total: Option<f64>,
    /// `None` for an empty board.
    pub leader_name: Option<String>,
}

impl AggregateStats {
    /// Summary over a view in the order given; the leader is whatever sits first.
    pub fn from_view(view: &[RankedEntry<'_>]) -> Self {
        Self::compute(view.iter().map(|entry| entry.entity))
    }

    /// Summary whose leader is always the top entity by total score,
    /// regardless of how the caller currently orders the board.
    pub fn summarize(entities: &[ScoredEntity]) -> Self {
        Self::from_view(&rank(entities, &SortCriterion::Total))
    }

    fn compute<'a>(ordered: impl Iterator<Item = &'a ScoredEntity>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut max_total: Option<f64> = None;
        let mut leader_name = None;

        for entity in ordered {
            if leader_name.is_none() {
                leader_name = Some(entity.name.clone());
            }
            count += 1;
            sum += entity.total_score;
            max_total = Some(match max_total {
                Some(current) => current.max(entity.total_score),
                None => entity.total_score,
            });
        }

        let average_total = if count == 0 { 0.0 } else { sum / count as f64 };

        Self {
            count,
            average_total,
            max_total,
            leader_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board() {
        let stats = AggregateStats::summarize(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_total, 0.0);
        assert_eq!(stats.max_total, None);
        assert_eq!(stats.leader_name, None);
    }

    #[test]
    fn single_entity() {
        let entities = vec![ScoredEntity::new("C", 3.0)];
        let view = rank(&entities, &SortCriterion::Category("Y".to_string()));
        let stats = AggregateStats::from_view(&view);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.average_total, 3.0);
        assert_eq!(stats.max_total, Some(3.0));
        assert_eq!(stats.leader_name.as_deref(), Some("C"));
    }

    #[test]
    fn mean_and_max() {
        let entities = vec![
            ScoredEntity::new("a", 2.0),
            ScoredEntity::new("b", 4.0),
            ScoredEntity::new("c", 3.0),
        ];
        let stats = AggregateStats::summarize(&entities);
        assert_eq!(stats.count, 3);
        assert!((stats.average_total - 3.0).abs() < 1e-9);
        assert_eq!(stats.max_total, Some(4.0));
        assert_eq!(stats.leader_name.as_deref(), Some("b"));
    }

    #[test]
    fn view_leader_follows_caller_order() {
        let entities = vec![
            ScoredEntity::new("A", 4.5).with_category("X", 1.0),
            ScoredEntity::new("B", 3.0).with_category("X", 5.0),
        ];
        let by_category = rank(&entities, &SortCriterion::Category("X".to_string()));
        assert_eq!(
            AggregateStats::from_view(&by_category).leader_name.as_deref(),
            Some("B")
        );
        assert_eq!(
            AggregateStats::summarize(&entities).leader_name.as_deref(),
            Some("A")
        );
    }
}
