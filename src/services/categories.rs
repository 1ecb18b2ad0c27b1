use crate::domain::ScoredEntity;
use once_cell::sync::OnceCell;
use std::collections::BTreeSet;
use strsim::normalized_levenshtein;

static KNOWN_CATEGORIES: OnceCell<Vec<&'static str>> = OnceCell::new();

/// Categories the backend is known to score partners on.
pub fn known_categories() -> &'static [&'static str] {
    KNOWN_CATEGORIES.get_or_init(|| vec!["인적역량", "AI기술역량", "솔루션 역량"])
}

/// Every category label seen on the board plus the built-in catalog.
pub fn available_categories(board: &[ScoredEntity]) -> BTreeSet<String> {
    board
        .iter()
        .flat_map(|entity| entity.category_scores.keys().cloned())
        .chain(known_categories().iter().map(|label| label.to_string()))
        .collect()
}

pub fn is_scored_on_board(board: &[ScoredEntity], label: &str) -> bool {
    board
        .iter()
        .any(|entity| entity.category_scores.contains_key(label))
}

/// Closest candidate to `label`, if any is reasonably similar.
pub fn suggest_category<'a>(
    label: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let needle = label.to_lowercase();
    candidates
        .into_iter()
        .map(|candidate| {
            (
                candidate,
                normalized_levenshtein(&needle, &candidate.to_lowercase()),
            )
        })
        .filter(|(_, score)| *score >= 0.5)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_near_miss() {
        let suggestion = suggest_category("ai기술역랑", known_categories().iter().copied());
        assert_eq!(suggestion, Some("AI기술역량"));
    }

    #[test]
    fn no_suggestion_for_unrelated_label() {
        assert_eq!(
            suggest_category("pricing", known_categories().iter().copied()),
            None
        );
    }

    #[test]
    fn board_labels_are_merged_with_catalog() {
        let board = vec![ScoredEntity::new("A", 3.0).with_category("보안역량", 2.0)];
        let all = available_categories(&board);
        assert!(all.contains("보안역량"));
        assert!(all.contains("인적역량"));
        assert!(is_scored_on_board(&board, "보안역량"));
        assert!(!is_scored_on_board(&board, "인적역량"));
    }
}
