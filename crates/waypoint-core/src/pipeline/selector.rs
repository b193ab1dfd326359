//! Ordered model fallback selection.

use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::time;

use crate::{
    client::Generator,
    error::{PlannerError, Result},
};

/// Probe prompt used before a plan generation.
pub const GENERATION_PROBE: &str = "test";

/// Probe prompt used by the connection self-test.
pub const SELF_TEST_PROBE: &str = "Hello";

/// A failed probe against one candidate model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAttempt {
    /// Candidate identifier
    pub model: String,
    /// Failure message reported for the probe
    pub reason: String,
}

/// Outcome of a successful selection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    /// First candidate whose probe succeeded
    pub model: String,
    /// Reply text of the successful probe
    pub reply: String,
    /// Candidates that failed before the selected one, in probe order
    pub failed: Vec<ModelAttempt>,
}

/// Walks `candidates` in order and returns the first that answers `probe`.
///
/// Candidates are probed strictly one after another; no candidate is tried
/// more than once and nothing after the first success is touched. Every pass
/// is independent, so callers selecting twice probe twice.
///
/// # Errors
///
/// Returns `PlannerError::NoCompatibleModel` carrying one [`ModelAttempt`]
/// per candidate when all of them fail (or the list is empty).
pub async fn select_model(
    generator: &dyn Generator,
    candidates: &[String],
    probe: &str,
    probe_timeout: Option<Duration>,
) -> Result<ModelSelection> {
    let mut failed = Vec::with_capacity(candidates.len());

    for model in candidates {
        debug!("Probing model {model}");
        match probe_once(generator, model, probe, probe_timeout).await {
            Ok(reply) => {
                info!("Model {model} is available");
                return Ok(ModelSelection {
                    model: model.clone(),
                    reply,
                    failed,
                });
            }
            Err(e) => {
                warn!("Model {model} failed its probe: {e}");
                failed.push(ModelAttempt {
                    model: model.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Err(PlannerError::NoCompatibleModel { attempts: failed })
}

async fn probe_once(
    generator: &dyn Generator,
    model: &str,
    probe: &str,
    probe_timeout: Option<Duration>,
) -> Result<String> {
    let call = generator.generate(model, probe);
    match probe_timeout {
        Some(limit) => time::timeout(limit, call).await.map_err(|_| {
            PlannerError::service(
                model,
                format!("probe timed out after {}s", limit.as_secs_f32()),
            )
        })?,
        None => call.await,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Generator that succeeds only for the listed models and records calls.
    struct Scripted {
        working: Vec<String>,
        calls: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(working: &[&str]) -> Self {
            Self {
                working: working.iter().map(|m| (*m).to_string()).collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Generator for Scripted {
        async fn generate(&self, model: &str, _prompt: &str) -> Result<String> {
            self.calls.lock().unwrap().push(model.to_string());
            if self.working.iter().any(|m| m == model) {
                Ok(format!("hello from {model}"))
            } else {
                Err(PlannerError::service(model, "[404 Not Found] model unavailable"))
            }
        }
    }

    fn six_candidates() -> Vec<String> {
        (1..=6).map(|i| format!("model-{i}")).collect()
    }

    #[tokio::test]
    async fn test_fourth_candidate_wins_after_four_probes() {
        let generator = Scripted::new(&["model-4", "model-6"]);
        let selection = select_model(&generator, &six_candidates(), GENERATION_PROBE, None)
            .await
            .expect("Selection should succeed");

        assert_eq!(selection.model, "model-4");
        assert_eq!(selection.reply, "hello from model-4");
        assert_eq!(selection.failed.len(), 3);
        assert_eq!(generator.calls(), vec!["model-1", "model-2", "model-3", "model-4"]);
    }

    #[tokio::test]
    async fn test_all_candidates_fail_once_each() {
        let generator = Scripted::new(&[]);
        let err = select_model(&generator, &six_candidates(), GENERATION_PROBE, None)
            .await
            .unwrap_err();

        match err {
            PlannerError::NoCompatibleModel { attempts } => {
                assert_eq!(attempts.len(), 6);
                assert_eq!(attempts[5].model, "model-6");
                assert!(attempts[0].reason.contains("404"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(generator.calls(), six_candidates());
    }

    #[tokio::test]
    async fn test_empty_candidate_list_is_exhaustion() {
        let generator = Scripted::new(&["model-1"]);
        let err = select_model(&generator, &[], SELF_TEST_PROBE, None)
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::NoCompatibleModel { ref attempts } if attempts.is_empty()));
        assert!(generator.calls().is_empty());
    }

    struct Hanging;

    #[async_trait]
    impl Generator for Hanging {
        async fn generate(&self, model: &str, _prompt: &str) -> Result<String> {
            if model == "slow" {
                std::future::pending::<()>().await;
            }
            Ok("ok".to_string())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_probe_times_out_and_falls_through() {
        let candidates = vec!["slow".to_string(), "fast".to_string()];
        let selection = select_model(
            &Hanging,
            &candidates,
            GENERATION_PROBE,
            Some(Duration::from_secs(5)),
        )
        .await
        .unwrap();

        assert_eq!(selection.model, "fast");
        assert!(selection.failed[0].reason.contains("timed out"));
    }
}
