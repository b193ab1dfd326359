//! History entry model.

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{CareerPlan, PlanItem, TimeUnit};

/// A successfully generated plan as recorded in the history cache.
///
/// Serialized with camelCase keys so the stored collection keeps the
/// `createdAt` field name of the browser version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanHistoryEntry {
    /// Millisecond timestamp identifier, unique within a history
    pub id: i64,

    /// Target role the plan was generated for
    pub role: String,

    /// Timeframe selected by the user
    pub months: u32,

    /// Timeframe expressed in weeks (four per month)
    pub weeks: u32,

    /// Granularity of the plan items
    #[serde(default)]
    pub unit: TimeUnit,

    /// The generated plan
    #[serde(default, deserialize_with = "lenient_plan")]
    pub plan: CareerPlan,

    /// Timestamp when the plan was generated (UTC)
    pub created_at: Timestamp,
}

impl PlanHistoryEntry {
    /// Creates an entry stamped with the given time.
    ///
    /// The identifier is the millisecond timestamp of `created_at`.
    pub fn new(
        role: impl Into<String>,
        months: u32,
        unit: TimeUnit,
        plan: CareerPlan,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: created_at.as_millisecond(),
            role: role.into(),
            months,
            weeks: months * 4,
            unit,
            plan,
            created_at,
        }
    }
}

/// Decodes stored plan items with the same leniency as model output.
fn lenient_plan<'de, D>(deserializer: D) -> Result<CareerPlan, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().map(PlanItem::from_value).collect(),
        _ => CareerPlan::new(),
    })
}
