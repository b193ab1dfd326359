//! Generation settings assembled from the environment and caller overrides.

use std::{env, time::Duration};

use crate::error::{PlannerError, Result};

/// Candidate models, in probe order from fastest to most general.
pub const DEFAULT_MODELS: [&str; 6] = [
    "gemini-1.5-flash-latest",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-pro",
    "models/gemini-1.5-flash",
    "models/gemini-pro",
];

/// Base URL of the Gemini REST API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default upper bound for a single model probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_VARS: [&str; 2] = ["WAYPOINT_API_KEY", "GEMINI_API_KEY"];
const MODELS_VAR: &str = "WAYPOINT_MODELS";
const PROBE_TIMEOUT_VAR: &str = "WAYPOINT_PROBE_TIMEOUT_SECS";
const BASE_URL_VAR: &str = "WAYPOINT_API_BASE_URL";

/// Settings for talking to the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// API key; `None` surfaces as a missing-credential failure at generation time
    pub api_key: Option<String>,
    /// Ordered candidate model identifiers
    pub models: Vec<String>,
    /// Per-candidate probe timeout; `None` waits indefinitely
    pub probe_timeout: Option<Duration>,
    /// Service base URL
    pub base_url: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            models: DEFAULT_MODELS.iter().map(|m| (*m).to_string()).collect(),
            probe_timeout: Some(DEFAULT_PROBE_TIMEOUT),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GenerationConfig {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if a variable is present but
    /// malformed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|key| !key.trim().is_empty());

        if let Some(models) = lookup(MODELS_VAR) {
            let models = parse_model_list(&models);
            if models.is_empty() {
                return Err(PlannerError::Configuration {
                    message: format!("{MODELS_VAR} does not name any model"),
                });
            }
            config.models = models;
        }

        if let Some(secs) = lookup(PROBE_TIMEOUT_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|e| PlannerError::Configuration {
                message: format!("{PROBE_TIMEOUT_VAR} must be a whole number of seconds: {e}"),
            })?;
            config.probe_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(url) = lookup(BASE_URL_VAR).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        Ok(config)
    }

    /// Replaces the API key when an override is given.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key {
            self.api_key = Some(key);
        }
        self
    }

    /// Replaces the candidate list when the override is non-empty.
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        if !models.is_empty() {
            self.models = models;
        }
        self
    }
}

/// Splits a comma-separated model list, dropping blanks.
pub fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = GenerationConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, GenerationConfig::default());
        assert_eq!(config.models.len(), 6);
        assert_eq!(config.models[0], "gemini-1.5-flash-latest");
    }

    #[test]
    fn test_api_key_falls_back_to_gemini_variable() {
        let config =
            GenerationConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "g-key")])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("g-key"));

        let config = GenerationConfig::from_lookup(lookup_from(&[
            ("WAYPOINT_API_KEY", "w-key"),
            ("GEMINI_API_KEY", "g-key"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("w-key"));
    }

    #[test]
    fn test_model_list_and_timeout_overrides() {
        let config = GenerationConfig::from_lookup(lookup_from(&[
            ("WAYPOINT_MODELS", " gemini-pro, ,gemini-1.5-pro "),
            ("WAYPOINT_PROBE_TIMEOUT_SECS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.models, vec!["gemini-pro", "gemini-1.5-pro"]);
        assert_eq!(config.probe_timeout, None);

        assert!(GenerationConfig::from_lookup(lookup_from(&[("WAYPOINT_MODELS", ",")])).is_err());
        assert!(GenerationConfig::from_lookup(lookup_from(&[(
            "WAYPOINT_PROBE_TIMEOUT_SECS",
            "soon"
        )]))
        .is_err());
    }

    #[test]
    fn test_builder_style_overrides() {
        let config = GenerationConfig::default()
            .with_api_key(Some("cli-key".to_string()))
            .with_models(vec![])
            .with_models(vec!["gemini-pro".to_string()]);
        assert_eq!(config.api_key.as_deref(), Some("cli-key"));
        assert_eq!(config.models, vec!["gemini-pro"]);
    }
}
