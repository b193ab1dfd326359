//! Plan generation pipeline.
//!
//! The pipeline turns a validated [`PlanRequest`] into a [`CareerPlan`]:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌────────────┐   ┌────────────┐   ┌────────────┐
//! │    prompt    │──▶│   selector   │──▶│  generate  │──▶│  extract   │──▶│  validate  │
//! │ build_prompt │   │ select_model │   │ (1 call)   │   │ [ ... ]    │   │ non-empty  │
//! └──────────────┘   └──────────────┘   └────────────┘   └────────────┘   └────────────┘
//! ```
//!
//! Every stage reports a [`PlannerError`]; [`classify`] turns those into the
//! user-facing [`ClassifiedError`] at the boundary.
//!
//! ## Submodules
//!
//! - [`prompt`]: request to instruction text
//! - [`selector`]: ordered model fallback with per-candidate probes
//! - [`extract`]: fence stripping and bracket slicing
//! - [`validate`]: JSON parse and shape check
//! - [`classify`]: keyword-based error taxonomy

use log::{debug, info};

use crate::{
    client::Generator,
    config::GenerationConfig,
    error::{PlannerError, Result},
    models::{CareerPlan, PlanRequest},
};

pub mod classify;
pub mod extract;
pub mod prompt;
pub mod selector;
pub mod validate;

pub use classify::{classify_error, classify_message, ClassifiedError, ErrorKind};
pub use extract::extract_json_array;
pub use prompt::build_prompt;
pub use selector::{
    select_model, ModelAttempt, ModelSelection, GENERATION_PROBE, SELF_TEST_PROBE,
};
pub use validate::validate_plan;

/// A generated plan together with the model that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    /// Model chosen by the selection pass
    pub model: String,
    /// Validated plan items
    pub plan: CareerPlan,
}

/// Result of a connection self-test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfTestReport {
    /// First model that answered
    pub model: String,
    /// Its reply to the probe prompt
    pub reply: String,
    /// Models that failed before it
    pub failed: Vec<ModelAttempt>,
}

/// Runs the whole pipeline and returns the technical error on failure.
///
/// # Errors
///
/// Any stage failure: `NoCompatibleModel` from selection, `Service` from the
/// generation call, `UnparsableResponse` or `InvalidPlanStructure` from
/// validation.
pub async fn run_pipeline(
    generator: &dyn Generator,
    config: &GenerationConfig,
    request: &PlanRequest,
) -> Result<GeneratedPlan> {
    let prompt = build_prompt(request);

    let selection =
        select_model(generator, &config.models, GENERATION_PROBE, config.probe_timeout).await?;
    info!(
        "Generating {}-{} plan for '{}' with {}",
        request.unit_count(),
        request.unit().as_str(),
        request.role(),
        selection.model
    );

    let raw = generator.generate(&selection.model, &prompt).await?;
    debug!("Raw reply: {} bytes", raw.len());

    let candidate = extract_json_array(&raw);
    let plan = validate_plan(&candidate).inspect_err(|e| {
        if let PlannerError::UnparsableResponse { text, .. } = e {
            debug!("Text that failed to parse: {text}");
        }
    })?;

    if plan.len() != request.unit_count() as usize {
        info!(
            "Model returned {} items for a {}-item request",
            plan.len(),
            request.unit_count()
        );
    }

    Ok(GeneratedPlan {
        model: selection.model,
        plan,
    })
}

/// Generates a career plan, classifying any failure for display.
///
/// # Errors
///
/// Returns a [`ClassifiedError`] whose message is safe to show to the user.
pub async fn generate_career_plan(
    generator: &dyn Generator,
    config: &GenerationConfig,
    request: &PlanRequest,
) -> std::result::Result<GeneratedPlan, ClassifiedError> {
    run_pipeline(generator, config, request)
        .await
        .map_err(|e| report(&e))
}

/// Walks the candidate list with the self-test probe.
///
/// # Errors
///
/// Returns a [`ClassifiedError`] when no candidate answers.
pub async fn self_test(
    generator: &dyn Generator,
    config: &GenerationConfig,
) -> std::result::Result<SelfTestReport, ClassifiedError> {
    select_model(generator, &config.models, SELF_TEST_PROBE, config.probe_timeout)
        .await
        .map(|selection| SelfTestReport {
            model: selection.model,
            reply: selection.reply,
            failed: selection.failed,
        })
        .map_err(|e| report(&e))
}

/// Classifies a failure and logs its technical detail.
pub(crate) fn report(error: &PlannerError) -> ClassifiedError {
    let classified = classify_error(error);
    log::error!(
        "Career plan generation failed ({}): {}",
        classified.kind,
        classified.detail
    );
    if let PlannerError::NoCompatibleModel { attempts } = error {
        for attempt in attempts {
            debug!("  {} -> {}", attempt.model, attempt.reason);
        }
    }
    classified
}
