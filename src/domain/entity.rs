use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One evaluated partner as returned by `GET /api/leaderboard`.
///
/// Scores are expected in `[0, 5]` but are passed through unclamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntity {
    pub name: String,
    pub total_score: f64,
    #[serde(default)]
    pub category_scores: BTreeMap<String, f64>,
}

impl ScoredEntity {
    pub fn new(name: impl Into<String>, total_score: f64) -> Self {
        Self {
            name: name.into(),
            total_score,
            category_scores: BTreeMap::new(),
        }
    }

    pub fn with_category(mut self, label: impl Into<String>, score: f64) -> Self {
        self.category_scores.insert(label.into(), score);
        self
    }

    /// Score for a category, `None` when the backend did not report it.
    pub fn category_score(&self, label: &str) -> Option<f64> {
        self.category_scores.get(label).copied()
    }
}

/// Classification groups the backend has assigned, from `GET /api/debug_groups`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupLabelSet {
    #[serde(rename = "all_unique_groups", default)]
    labels: BTreeSet<String>,
}

impl GroupLabelSet {
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for GroupLabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(Into::into).collect(),
        }
    }
}
