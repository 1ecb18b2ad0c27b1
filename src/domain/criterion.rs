use crate::error::{BoardError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;

/// What the board is ordered by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SortCriterion {
    #[default]
    Total,
    Category(String),
}

impl SortCriterion {
    pub const TOTAL_KEYWORD: &'static str = "total";

    /// Builds a category criterion, NFC-normalizing the label so that
    /// decomposed Hangul typed on some terminals still matches the backend keys.
    pub fn category(label: &str) -> Result<Self> {
        let label: String = label.trim().nfc().collect();
        if label.is_empty() {
            return Err(BoardError::InvalidCriterion(
                "category label must not be empty".to_string(),
            ));
        }
        Ok(Self::Category(label))
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Total => Self::TOTAL_KEYWORD,
            Self::Category(label) => label,
        }
    }
}

impl FromStr for SortCriterion {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim() == Self::TOTAL_KEYWORD {
            Ok(Self::Total)
        } else {
            Self::category(s)
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for SortCriterion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
