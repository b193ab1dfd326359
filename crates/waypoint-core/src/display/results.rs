//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{pipeline::SelfTestReport, planner::GenerationOutcome};

/// Wrapper for displaying a freshly generated plan.
///
/// Shows the recorded ID and model, a note if the history could not be
/// written, then the full plan.
pub struct GenerateResult<'a>(pub &'a GenerationOutcome);

impl fmt::Display for GenerateResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        writeln!(
            f,
            "Generated plan with ID: {} (model: {})",
            outcome.entry.id, outcome.model
        )?;
        if !outcome.saved {
            writeln!(f)?;
            writeln!(f, "*The plan could not be saved to history.*")?;
        }
        writeln!(f)?;
        write!(f, "{}", outcome.entry)
    }
}

/// Wrapper for displaying a successful connection self-test.
pub struct SelfTestResult<'a>(pub &'a SelfTestReport);

impl fmt::Display for SelfTestResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "Connection OK using model: {}", report.model)?;
        writeln!(f)?;
        writeln!(f, "> {}", report.reply.trim())?;

        if !report.failed.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped models:")?;
            for attempt in &report.failed {
                writeln!(f, "- {}: {}", attempt.model, attempt.reason)?;
            }
        }
        Ok(())
    }
}
