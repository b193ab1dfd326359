//! Planner operations used by the CLI and MCP interfaces.

use std::sync::Arc;

use jiff::Timestamp;
use log::{info, warn};
use tokio::task;

use super::Planner;
use crate::{
    display::HistoryEntries,
    error::{JoinResultExt, PlannerError, Result},
    history::{PlanHistory, RECENT_PLANS},
    models::PlanHistoryEntry,
    params::{GeneratePlan, Id, ListHistory},
    pipeline::{self, report, ClassifiedError, SelfTestReport},
};

/// A freshly generated plan and how it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    /// The entry as recorded at the head of the history
    pub entry: PlanHistoryEntry,
    /// Model that produced the plan
    pub model: String,
    /// Whether the updated history was written to storage
    pub saved: bool,
}

impl Planner {
    /// Generates a plan and records it at the head of the history.
    ///
    /// The history is read, updated and rewritten as a whole only after the
    /// plan has been validated; a failed generation leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`ClassifiedError`] whose message is safe to show to the
    /// user, whatever stage failed.
    pub async fn generate_plan(
        &self,
        params: &GeneratePlan,
    ) -> std::result::Result<GenerationOutcome, ClassifiedError> {
        let request = params.to_request().map_err(|e| report(&e))?;
        let generator = self.generator().map_err(|e| report(&e))?;

        let generated =
            pipeline::generate_career_plan(generator.as_ref(), &self.config, &request).await?;

        let entry = PlanHistoryEntry::new(
            request.role(),
            params.months,
            request.unit(),
            generated.plan,
            Timestamp::now(),
        );

        let (entry, saved) = self.record(entry).await.map_err(|e| report(&e))?;
        info!(
            "Recorded plan {} for '{}' ({} items)",
            entry.id,
            entry.role,
            entry.plan.len()
        );

        Ok(GenerationOutcome {
            entry,
            model: generated.model,
            saved,
        })
    }

    /// Runs the connection self-test over the configured candidates.
    ///
    /// # Errors
    ///
    /// Returns a [`ClassifiedError`] if credentials are missing or no
    /// candidate answers.
    pub async fn test_connection(&self) -> std::result::Result<SelfTestReport, ClassifiedError> {
        let generator = self.generator().map_err(|e| report(&e))?;
        pipeline::self_test(generator.as_ref(), &self.config).await
    }

    /// Loads the full stored history.
    pub async fn history(&self) -> Result<PlanHistory> {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || PlanHistory::load(store.as_ref()))
            .await
            .join_context()
    }

    /// Lists recent plans, or every stored plan when `params.all` is set.
    pub async fn list_history(&self, params: &ListHistory) -> Result<HistoryEntries> {
        let history = self.history().await?;
        let limit = if params.all {
            history.len()
        } else {
            RECENT_PLANS
        };
        Ok(HistoryEntries(history.recent(limit).to_vec()))
    }

    /// Reloads a stored plan without regenerating it.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if no entry has the given ID.
    pub async fn show_plan(&self, params: &Id) -> Result<PlanHistoryEntry> {
        self.history()
            .await?
            .find(params.id)
            .cloned()
            .ok_or(PlannerError::PlanNotFound { id: params.id })
    }

    /// Read-modify-write of the whole history with `entry` prepended.
    async fn record(&self, entry: PlanHistoryEntry) -> Result<(PlanHistoryEntry, bool)> {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || {
            let mut history = PlanHistory::load(store.as_ref());
            let recorded = history.record(entry).clone();
            let saved = history.persist(store.as_ref());
            if !saved {
                warn!("Plan history could not be saved; the plan is shown but not cached");
            }
            (recorded, saved)
        })
        .await
        .join_context()
    }
}
