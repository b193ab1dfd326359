//! Mapping of pipeline failures onto user-facing error categories.
//!
//! Classification matches keyword fragments against the failure's message
//! text. Upstream wording changes can therefore shift a failure into a
//! different category; the rule order below is the single place to adjust.

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::PlannerError;

/// Message shown for failures whose operational detail is withheld.
const SERVICE_DOWN: &str = "Currently server is down, we will get back to you soon.";

/// Category of a failed generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingCredential,
    QuotaExceeded,
    AccessForbidden,
    EndpointNotFound,
    NetworkError,
    UnparsableResponse,
    NoCompatibleModel,
    Unknown,
}

/// Keyword rules evaluated top to bottom; the first match wins.
const RULES: &[(&str, ErrorKind)] = &[
    ("API key is missing", ErrorKind::MissingCredential),
    ("model is not found", ErrorKind::NoCompatibleModel),
    ("No compatible model", ErrorKind::NoCompatibleModel),
    ("quota", ErrorKind::QuotaExceeded),
    ("limit", ErrorKind::QuotaExceeded),
    ("403", ErrorKind::AccessForbidden),
    ("404", ErrorKind::EndpointNotFound),
    ("network", ErrorKind::NetworkError),
    ("Network", ErrorKind::NetworkError),
    ("Failed to parse", ErrorKind::UnparsableResponse),
    ("Invalid plan structure", ErrorKind::UnparsableResponse),
];

impl ErrorKind {
    /// Fixed user-safe message, or `None` for [`ErrorKind::Unknown`] which
    /// surfaces the original text.
    pub fn template(&self) -> Option<&'static str> {
        match self {
            ErrorKind::MissingCredential | ErrorKind::QuotaExceeded => Some(SERVICE_DOWN),
            ErrorKind::AccessForbidden => {
                Some("API access forbidden. Please check your API key and billing settings.")
            }
            ErrorKind::EndpointNotFound => {
                Some("API endpoint not found. Please check your API configuration.")
            }
            ErrorKind::NetworkError => {
                Some("Network error. Please check your internet connection and try again.")
            }
            ErrorKind::UnparsableResponse => Some("Failed to parse AI response. Please try again."),
            ErrorKind::NoCompatibleModel => {
                Some("No compatible model found. The API might be experiencing issues.")
            }
            ErrorKind::Unknown => None,
        }
    }

    /// Snake-case name used in logs and MCP output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingCredential => "missing_credential",
            ErrorKind::QuotaExceeded => "quota_exceeded",
            ErrorKind::AccessForbidden => "access_forbidden",
            ErrorKind::EndpointNotFound => "endpoint_not_found",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::UnparsableResponse => "unparsable_response",
            ErrorKind::NoCompatibleModel => "no_compatible_model",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClassifiedError {
    /// Category selected by the rule list
    pub kind: ErrorKind,
    /// User-facing message
    pub message: String,
    /// Technical description of the underlying failure, for logs only
    pub detail: String,
}

/// Picks the category for a failure message.
pub fn classify_message(text: &str) -> ErrorKind {
    RULES
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map_or(ErrorKind::Unknown, |(_, kind)| *kind)
}

/// Classifies a failure into a user-facing error.
///
/// An exhausted selection over a single candidate is classified by that
/// candidate's own failure, which is more specific than the generic
/// exhaustion message. Input validation failures surface their reason alone.
pub fn classify_error(error: &PlannerError) -> ClassifiedError {
    let text = match error {
        PlannerError::NoCompatibleModel { attempts } if attempts.len() == 1 => {
            attempts[0].reason.clone()
        }
        PlannerError::InvalidInput { reason, .. } => reason.clone(),
        other => other.to_string(),
    };

    classify_text(text)
}

fn classify_text(text: String) -> ClassifiedError {
    let kind = classify_message(&text);
    let message = kind.template().map_or_else(|| text.clone(), String::from);
    ClassifiedError {
        kind,
        message,
        detail: text,
    }
}

impl From<PlannerError> for ClassifiedError {
    fn from(error: PlannerError) -> Self {
        classify_error(&error)
    }
}
