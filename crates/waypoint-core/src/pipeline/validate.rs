//! Structural validation of extracted model output.

use serde_json::Value;

use crate::{
    error::{PlannerError, Result},
    models::{CareerPlan, PlanItem},
};

/// Parses the extracted text into a career plan.
///
/// Only the outer shape is enforced: the text must be a JSON array with at
/// least one element. Elements are converted leniently by
/// [`PlanItem::from_value`].
///
/// # Errors
///
/// - `PlannerError::UnparsableResponse` when the text is not valid JSON
/// - `PlannerError::InvalidPlanStructure` when it is not a non-empty array
pub fn validate_plan(candidate: &str) -> Result<CareerPlan> {
    let value: Value =
        serde_json::from_str(candidate).map_err(|source| PlannerError::UnparsableResponse {
            text: candidate.to_string(),
            source,
        })?;

    let Value::Array(items) = value else {
        return Err(PlannerError::InvalidPlanStructure {
            reason: format!("expected a JSON array, got {}", kind_of(&value)),
        });
    };

    if items.is_empty() {
        return Err(PlannerError::InvalidPlanStructure {
            reason: "the plan array is empty".to_string(),
        });
    }

    Ok(items.iter().map(PlanItem::from_value).collect())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
