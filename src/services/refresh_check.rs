use crate::domain::GroupLabelSet;

/// Group labels the backend uses for partners it could not classify.
/// Only these two spellings count; "UNKNOWN" does not.
const UNCLASSIFIED_LABELS: [&str; 2] = ["Unknown", "unknown"];

/// True when any partner is still unclassified and a recompute is advisable.
pub fn needs_refresh(groups: &GroupLabelSet) -> bool {
    UNCLASSIFIED_LABELS
        .iter()
        .any(|label| groups.contains(label))
}
