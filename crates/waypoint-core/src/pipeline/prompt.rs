//! Prompt construction for plan generation.

use crate::models::PlanRequest;

/// Builds the instruction text sent to the model for a plan request.
///
/// The prompt asks for nothing but a JSON array of exactly
/// `request.unit_count()` items and embeds two example entries keyed by the
/// unit label so the model copies their shape.
pub fn build_prompt(request: &PlanRequest) -> String {
    let role = request.role();
    let count = request.unit_count();
    let unit = request.unit().as_str();

    format!(
        r#"Create a {count}-{unit} career plan for becoming a {role}.

Return ONLY a JSON array like this:
[
  {{
    "{unit}": 1,
    "title": "Foundation Skills",
    "description": "Learn the basics of {role} including fundamental concepts and tools. Spend 2-3 hours daily studying core principles and practicing with simple exercises.",
    "skills": ["Basic skill 1", "Basic skill 2", "Basic skill 3"],
    "projects": ["Simple project 1", "Practice exercise"],
    "resources": ["Online course", "Documentation", "Tutorial"],
    "milestone": "Complete basic understanding"
  }},
  {{
    "{unit}": 2,
    "title": "Intermediate Development",
    "description": "Build upon foundation with more complex topics and practical projects. Focus on hands-on experience with real-world applications.",
    "skills": ["Intermediate skill 1", "Intermediate skill 2"],
    "projects": ["Intermediate project"],
    "resources": ["Advanced course", "Practice platform"],
    "milestone": "Build working project"
  }}
]

Generate exactly {count} items. Return ONLY the JSON array, no other text."#
    )
}
