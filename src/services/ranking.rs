use crate::domain::{ScoredEntity, SortCriterion};
use serde::Serialize;
use std::cmp::Ordering;

/// One row of a ranked view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub value: f64,
    #[serde(flatten)]
    pub entity: &'a ScoredEntity,
}

/// Score used for ordering. Missing categories count as 0.
pub fn resolve_value(entity: &ScoredEntity, criterion: &SortCriterion) -> f64 {
    match criterion {
        SortCriterion::Total => entity.total_score,
        SortCriterion::Category(label) => entity.category_score(label).unwrap_or(0.0),
    }
}

/// Orders `entities` by descending score for `criterion` and assigns 1-based ranks.
///
/// The sort is stable, so entities with equal values keep their fetch order
/// and every entity gets its own rank. NaN sorts after all numbers.
pub fn rank<'a>(entities: &'a [ScoredEntity], criterion: &SortCriterion) -> Vec<RankedEntry<'a>> {
    let mut resolved: Vec<(f64, &ScoredEntity)> = entities
        .iter()
        .map(|entity| (resolve_value(entity, criterion), entity))
        .collect();

    resolved.sort_by(|(a, _), (b, _)| descending(*a, *b));

    resolved
        .into_iter()
        .enumerate()
        .map(|(index, (value, entity))| RankedEntry {
            rank: index + 1,
            value,
            entity,
        })
        .collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // -0.0 and 0.0 must tie so fetch order decides
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
