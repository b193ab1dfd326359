use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use waypoint_core::{GenerationConfig, Generator, Planner, PlannerBuilder, PlannerError, Result};

/// Generator with a fixed outcome per model; unlisted models answer every
/// prompt with `reply`.
pub struct CannedGenerator {
    pub reply: String,
    pub failures: Vec<(&'static str, &'static str)>,
}

#[async_trait]
impl Generator for CannedGenerator {
    async fn generate(&self, model: &str, _prompt: &str) -> Result<String> {
        match self.failures.iter().find(|(m, _)| *m == model) {
            Some((_, reason)) => Err(PlannerError::service(model, *reason)),
            None => Ok(self.reply.clone()),
        }
    }
}

/// A plan reply with `count` weekly items wrapped in a markdown fence.
pub fn weekly_reply(count: u32) -> String {
    let items: Vec<String> = (1..=count)
        .map(|week| {
            format!(
                r#"{{"week": {week}, "title": "Week {week}", "description": "Practice",
                    "skills": ["SQL"], "projects": ["Dashboard"], "resources": ["Docs"]}}"#
            )
        })
        .collect();
    format!("Here is your plan:\n```json\n[{}]\n```", items.join(",\n"))
}

/// Helper function to create a planner over a SQLite file.
pub async fn create_test_planner(
    db_path: &Path,
    generator: CannedGenerator,
    models: &[&str],
) -> Planner {
    PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .with_generator(Arc::new(generator))
        .with_config(
            GenerationConfig::default()
                .with_api_key(Some("test-key".to_string()))
                .with_models(models.iter().map(|m| (*m).to_string()).collect()),
        )
        .build()
        .await
        .expect("Failed to create planner")
}
