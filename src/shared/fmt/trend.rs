//! Up/down styling for price changes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Strictly positive values trend up; zero and NaN trend down.
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, Trend::Up)
    }
}

/// Style tags for a trending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendClasses {
    pub trend: Trend,
    pub text_class: &'static str,
    pub bg_class: &'static str,
    pub icon_class: &'static str,
}

impl From<Trend> for TrendClasses {
    fn from(trend: Trend) -> Self {
        match trend {
            Trend::Up => Self {
                trend,
                text_class: "text-green-400",
                bg_class: "bg-green-500/10",
                icon_class: "icon-up",
            },
            Trend::Down => Self {
                trend,
                text_class: "text-red-400",
                bg_class: "bg-red-500/10",
                icon_class: "icon-down",
            },
        }
    }
}

pub fn trending_classes(value: f64) -> TrendClasses {
    Trend::of(value).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_down() {
        let classes = trending_classes(0.0);
        assert_eq!(classes.trend, Trend::Down);
        assert_eq!(classes.text_class, "text-red-400");
        assert_eq!(classes.icon_class, "icon-down");
    }

    #[test]
    fn test_small_positive_is_up() {
        let classes = trending_classes(0.01);
        assert!(classes.trend.is_up());
        assert_eq!(classes.text_class, "text-green-400");
        assert_eq!(classes.bg_class, "bg-green-500/10");
        assert_eq!(classes.icon_class, "icon-up");
    }

    #[test]
    fn test_negative_and_nan_are_down() {
        assert_eq!(trending_classes(-2.5).trend, Trend::Down);
        assert_eq!(trending_classes(f64::NAN).trend, Trend::Down);
    }
}
