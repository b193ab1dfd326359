//! Time unit enumeration for plan granularity.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Granularity of a career plan.
///
/// The lowercase label doubles as the per-item index key the model is asked
/// to emit (`"week": 1`, `"month": 1`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// One item per week
    #[default]
    Week,

    /// One item per month
    Month,
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" | "weekly" => Ok(TimeUnit::Week),
            "month" | "monthly" => Ok(TimeUnit::Month),
            _ => Err(format!("Invalid time unit: {s}")),
        }
    }
}

impl TimeUnit {
    /// Lowercase label used in prompts and serialized history.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
        }
    }

    /// Capitalized label for timeline headings.
    pub fn heading(&self) -> &'static str {
        match self {
            TimeUnit::Week => "Week",
            TimeUnit::Month => "Month",
        }
    }

    /// Number of plan units covering the given number of months.
    ///
    /// Weekly plans assume four weeks per month.
    pub fn units_for_months(&self, months: u32) -> u32 {
        match self {
            TimeUnit::Week => months * 4,
            TimeUnit::Month => months,
        }
    }
}
