mod api;
mod criterion;
mod entity;

pub use api::{LeaderboardApi, RefreshOutcome};
pub use criterion::SortCriterion;
pub use entity::{GroupLabelSet, ScoredEntity};
