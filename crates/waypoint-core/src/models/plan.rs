//! Plan item model and lenient conversion from model output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One step on the career timeline.
///
/// Model output is free-form, so every field is optional in practice. Items
/// are built once by the validator and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlanItem {
    /// 1-based week or month number as reported by the model
    #[serde(alias = "week", alias = "month", skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,

    /// Short heading for the period
    pub title: String,

    /// What to focus on during the period
    pub description: String,

    /// Skills to pick up
    pub skills: Vec<String>,

    /// Hands-on projects to build
    pub projects: Vec<String>,

    /// Courses, books and other material
    pub resources: Vec<String>,

    /// Checkpoint marking the end of the period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
}

/// Ordered sequence of plan items.
pub type CareerPlan = Vec<PlanItem>;

impl PlanItem {
    /// Builds an item from an arbitrary JSON value without failing.
    ///
    /// Missing fields stay empty, a bare string where a list is expected
    /// becomes a one-element list, and non-object values yield an empty item.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let index = ["week", "month", "index"]
            .iter()
            .filter_map(|key| object.get(*key))
            .find_map(as_index);

        Self {
            index,
            title: text_field(object.get("title")).unwrap_or_default(),
            description: text_field(object.get("description")).unwrap_or_default(),
            skills: list_field(object.get("skills")),
            projects: list_field(object.get("projects")),
            resources: list_field(object.get("resources")),
            milestone: text_field(object.get("milestone")).filter(|m| !m.is_empty()),
        }
    }

    /// Period number for display, falling back to the item's position.
    pub fn number(&self, position: usize) -> u32 {
        self.index
            .unwrap_or_else(|| u32::try_from(position + 1).unwrap_or(u32::MAX))
    }
}

fn as_index(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn list_field(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| text_field(Some(item)))
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}
