//! Data models for career plans and their history.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that formatting stays separate from the data
//! structures.
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{PlanItem, PlanRequest, TimeUnit};
//!
//! let request = PlanRequest::new("  Data Scientist ", 12, TimeUnit::Week).unwrap();
//! assert_eq!(request.role(), "Data Scientist");
//!
//! let item = PlanItem::from_value(&serde_json::json!({
//!     "week": 1,
//!     "title": "Foundations",
//!     "skills": "Python",
//! }));
//! assert_eq!(item.index, Some(1));
//! assert_eq!(item.skills, vec!["Python".to_string()]);
//! ```

pub mod history;
pub mod plan;
pub mod request;
pub mod unit;


pub use history::PlanHistoryEntry;
pub use plan::{CareerPlan, PlanItem};
pub use request::{PlanRequest, MAX_UNIT_COUNT, MIN_ROLE_LENGTH, MIN_UNIT_COUNT};
pub use unit::TimeUnit;
