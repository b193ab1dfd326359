//! Command handlers for the terminal interface.
//!
//! Each handler calls the planner, formats the result through the core
//! display types and hands the markdown to the [`TerminalRenderer`].

use anyhow::{bail, Context, Result};
use log::debug;
use waypoint_core::{
    catalog::{career_category, DEFAULT_MONTHS, POPULAR_CAREERS, TIMEFRAMES},
    CareerSuggestions, GeneratePlan, GenerateResult, Id, ListHistory, Planner, SelfTestResult,
    Timeframes,
};

use crate::renderer::TerminalRenderer;

/// Terminal front end over a [`Planner`].
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Generates a plan and prints it.
    ///
    /// Failures carry only the user-facing message; details go to the log.
    pub async fn generate(&self, params: &GeneratePlan) -> Result<()> {
        debug!("generate: {params:?}");
        let outcome = self.planner.generate_plan(params).await?;
        self.renderer.render(&GenerateResult(&outcome).to_string())
    }

    pub async fn history(&self, params: &ListHistory) -> Result<()> {
        let entries = self
            .planner
            .list_history(params)
            .await
            .context("Failed to load plan history")?;

        let title = if params.all {
            "Saved Plans"
        } else {
            "Recent Plans"
        };
        self.renderer.render(&format!("# {title}\n\n{entries}"))
    }

    pub async fn show(&self, params: &Id) -> Result<()> {
        let entry = self.planner.show_plan(params).await?;
        self.renderer.render(&entry.to_string())
    }

    pub async fn test_connection(&self) -> Result<()> {
        let report = self.planner.test_connection().await?;
        self.renderer.render(&SelfTestResult(&report).to_string())
    }

    pub fn timeframes(&self) -> Result<()> {
        let options = Timeframes {
            options: &TIMEFRAMES,
            default_months: DEFAULT_MONTHS,
        };
        self.renderer.render(&format!("# Timeframes\n\n{options}"))
    }

    pub fn suggest(&self, category: Option<&str>) -> Result<()> {
        let categories = match category {
            Some(name) => match career_category(name) {
                Some(found) => vec![found],
                None => bail!(
                    "Unknown career category '{name}'. Choose one of: {}",
                    POPULAR_CAREERS
                        .iter()
                        .map(|c| c.name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            },
            None => POPULAR_CAREERS.iter().collect(),
        };
        self.renderer.render(&CareerSuggestions(categories).to_string())
    }
}
