//! Display formatting for plans, history and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly; newtype wrappers
//! cover collections and operation results. Everything renders as markdown,
//! which the CLI passes through its terminal renderer and the MCP server
//! returns as text content.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (entry, item)   │───▶│ (lists, results)│───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: History and catalog listings
//! - [`results`]: Generation and self-test outcomes
//! - [`status`]: Success and error banners
//! - [`datetime`]: Local timestamp formatting
//! - [`models`]: Plan timelines
//!
//! ## Usage
//!
//! ```rust
//! use waypoint_core::display::OperationStatus;
//!
//! let status = OperationStatus::failure("No compatible model found.".to_string());
//! assert_eq!(status.to_string(), "Error: No compatible model found.\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{CareerSuggestions, HistoryEntries, Timeframes};
pub use datetime::LocalDateTime;
pub use models::Timeline;
pub use results::{GenerateResult, SelfTestResult};
pub use status::OperationStatus;
