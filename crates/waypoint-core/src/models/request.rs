//! Validated plan generation request.

use super::TimeUnit;
use crate::error::{PlannerError, Result};

/// Minimum role length after trimming.
pub const MIN_ROLE_LENGTH: usize = 2;

/// Smallest unit count a plan may request.
pub const MIN_UNIT_COUNT: u32 = 1;

/// Largest unit count a plan may request (24 months of weeks).
pub const MAX_UNIT_COUNT: u32 = 96;

/// A single user submission, validated on construction.
///
/// Instances are not persisted; only the resulting plan is recorded in the
/// history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    role: String,
    unit_count: u32,
    unit: TimeUnit,
}

impl PlanRequest {
    /// Validates the inputs and builds a request.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the trimmed role is shorter
    /// than [`MIN_ROLE_LENGTH`] or the unit count falls outside
    /// [`MIN_UNIT_COUNT`]..=[`MAX_UNIT_COUNT`].
    pub fn new(role: &str, unit_count: u32, unit: TimeUnit) -> Result<Self> {
        let role = role.trim();
        if role.is_empty() {
            return Err(PlannerError::invalid_input("role")
                .with_reason("Please enter the career role you want to transition to."));
        }
        if role.chars().count() < MIN_ROLE_LENGTH {
            return Err(PlannerError::invalid_input("role").with_reason(format!(
                "Career role must be at least {MIN_ROLE_LENGTH} characters long."
            )));
        }
        if !(MIN_UNIT_COUNT..=MAX_UNIT_COUNT).contains(&unit_count) {
            return Err(PlannerError::invalid_input("unit_count").with_reason(format!(
                "Plan length must be between {MIN_UNIT_COUNT} and {MAX_UNIT_COUNT} {}s, got {unit_count}.",
                unit.as_str()
            )));
        }

        Ok(Self {
            role: role.to_string(),
            unit_count,
            unit,
        })
    }

    /// The trimmed target role.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Number of plan items requested.
    pub fn unit_count(&self) -> u32 {
        self.unit_count
    }

    /// Granularity of each plan item.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}
