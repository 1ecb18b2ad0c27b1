use serde::Serialize;
use std::fmt;

pub const MAX_SCORE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Grade {
    pub fn for_score(score: f64) -> Self {
        if score >= 4.0 {
            Self::Excellent
        } else if score >= 3.0 {
            Self::Good
        } else if score >= 2.0 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs improvement",
        };
        f.write_str(label)
    }
}

/// Share of the bar a score fills, in `[0, 1]`.
pub fn bar_fraction(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    (score / MAX_SCORE).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(Grade::for_score(5.0), Grade::Excellent);
        assert_eq!(Grade::for_score(4.0), Grade::Excellent);
        assert_eq!(Grade::for_score(3.99), Grade::Good);
        assert_eq!(Grade::for_score(3.0), Grade::Good);
        assert_eq!(Grade::for_score(2.0), Grade::Fair);
        assert_eq!(Grade::for_score(1.99), Grade::NeedsImprovement);
        assert_eq!(Grade::for_score(f64::NAN), Grade::NeedsImprovement);
    }

    #[test]
    fn bar_is_clamped() {
        assert_eq!(bar_fraction(2.5), 0.5);
        assert_eq!(bar_fraction(9.0), 1.0);
        assert_eq!(bar_fraction(-1.0), 0.0);
        assert_eq!(bar_fraction(f64::NAN), 0.0);
    }
}
