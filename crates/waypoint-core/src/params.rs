//! Parameter structures for waypoint operations.
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. Interface layers wrap them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation is available behind the `schema` feature for the
//! MCP layer.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{DEFAULT_MONTHS, MAX_MONTHS, MIN_MONTHS},
    error::{PlannerError, Result},
    models::{PlanRequest, TimeUnit},
};

/// Parameters for generating a new career plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GeneratePlan {
    /// Career role to plan for, e.g. "Data Scientist"
    pub role: String,
    /// Timeframe in months (1-24)
    #[serde(default = "default_months")]
    pub months: u32,
    /// Plan granularity: "week" (default) or "month"
    #[serde(default)]
    pub unit: TimeUnit,
}

impl Default for GeneratePlan {
    fn default() -> Self {
        Self {
            role: String::new(),
            months: DEFAULT_MONTHS,
            unit: TimeUnit::default(),
        }
    }
}

fn default_months() -> u32 {
    DEFAULT_MONTHS
}

impl GeneratePlan {
    /// Validates the timeframe and builds the pipeline request.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for a timeframe outside
    /// 1..=24 months or an invalid role.
    pub fn to_request(&self) -> Result<PlanRequest> {
        if !(MIN_MONTHS..=MAX_MONTHS).contains(&self.months) {
            return Err(PlannerError::invalid_input("months").with_reason(format!(
                "Please select a valid timeline between {MIN_MONTHS}-{MAX_MONTHS} months."
            )));
        }
        PlanRequest::new(&self.role, self.unit.units_for_months(self.months), self.unit)
    }
}

/// Parameters for operations addressing a history entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// Identifier of the history entry
    pub id: i64,
}

/// Parameters for listing the plan history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListHistory {
    /// List every stored plan instead of the most recent ones
    #[serde(default)]
    pub all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_request_converts_months() {
        let params = GeneratePlan {
            role: "Data Scientist".to_string(),
            months: 3,
            unit: TimeUnit::Week,
        };
        let request = params.to_request().unwrap();
        assert_eq!(request.unit_count(), 12);
        assert_eq!(request.unit(), TimeUnit::Week);
    }

    #[test]
    fn test_monthly_request_keeps_months() {
        let params = GeneratePlan {
            role: "Consultant".to_string(),
            months: 24,
            unit: TimeUnit::Month,
        };
        assert_eq!(params.to_request().unwrap().unit_count(), 24);
    }

    #[test]
    fn test_out_of_range_months_rejected() {
        let params = GeneratePlan {
            role: "Consultant".to_string(),
            months: 25,
            ..Default::default()
        };
        let err = params.to_request().unwrap_err();
        assert!(err.to_string().contains("1-24 months"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let params: GeneratePlan = serde_json::from_str(r#"{"role": "Nurse"}"#).unwrap();
        assert_eq!(params.months, DEFAULT_MONTHS);
        assert_eq!(params.unit, TimeUnit::Week);
    }
}
