//! Core library for the Waypoint career planning application.
//!
//! This crate turns a target role and a timeframe into a week-by-week (or
//! month-by-month) career plan using a hosted generative model, and keeps a
//! bounded history of generated plans in local storage.
//!
//! # Architecture
//!
//! - **Pipeline** ([`pipeline`]): prompt construction, ordered model
//!   fallback, reply extraction, validation and error classification
//! - **Client** ([`client`]): the [`client::Generator`] seam and its
//!   Gemini implementation
//! - **Storage** ([`storage`]): a best-effort key-value store backed by
//!   SQLite, with an in-memory variant for tests
//! - **History** ([`history`]): the bounded, newest-first plan cache
//! - **Display** ([`display`]): markdown rendering of plans and results
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use waypoint_core::{params::ListHistory, storage::MemoryStore, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_store(Arc::new(MemoryStore::new()))
//!     .build()
//!     .await?;
//!
//! let history = planner.list_history(&ListHistory::default()).await?;
//! assert!(history.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod history;
pub mod models;
pub mod params;
pub mod pipeline;
pub mod planner;
pub mod storage;

// Re-export commonly used types
pub use client::{GeminiClient, Generator};
pub use config::GenerationConfig;
pub use display::{
    CareerSuggestions, GenerateResult, HistoryEntries, OperationStatus, SelfTestResult, Timeframes,
};
pub use error::{PlannerError, Result};
pub use history::PlanHistory;
pub use models::{CareerPlan, PlanHistoryEntry, PlanItem, PlanRequest, TimeUnit};
pub use params::{GeneratePlan, Id, ListHistory};
pub use pipeline::{ClassifiedError, ErrorKind, GeneratedPlan, SelfTestReport};
pub use planner::{GenerationOutcome, Planner, PlannerBuilder};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
