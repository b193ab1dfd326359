//! High-level planner API.
//!
//! The [`Planner`] ties the generation pipeline, the service client and the
//! history cache together. It is the single entry point used by the CLI and
//! the MCP server.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │    Pipeline     │    │     History     │
//! │ (generate,      │───▶│ (prompt, model  │───▶│ (bounded cache  │
//! │  history, test) │    │  selection ...) │    │  in storage)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`handlers`]: Generation, history and self-test operations
//!
//! # Usage
//!
//! ```rust,no_run
//! use waypoint_core::{params::GeneratePlan, GenerationConfig, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_config(GenerationConfig::from_env()?)
//!     .build()
//!     .await?;
//!
//! let outcome = planner
//!     .generate_plan(&GeneratePlan {
//!         role: "Data Scientist".to_string(),
//!         months: 3,
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{}", outcome.entry);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::{
    client::{GeminiClient, Generator},
    config::GenerationConfig,
    error::Result,
    storage::KeyValueStore,
};

pub mod builder;
pub mod handlers;


pub use builder::PlannerBuilder;
pub use handlers::GenerationOutcome;

/// Main planner interface for generating plans and browsing history.
pub struct Planner {
    pub(crate) store: Arc<dyn KeyValueStore>,
    generator: Option<Arc<dyn Generator>>,
    pub(crate) config: GenerationConfig,
}

impl Planner {
    /// Creates a new planner over the given store.
    pub(crate) fn new(
        store: Arc<dyn KeyValueStore>,
        generator: Option<Arc<dyn Generator>>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            store,
            generator,
            config,
        }
    }

    /// Generation settings in use.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The injected generator, or a Gemini client built from the
    /// configuration.
    pub(crate) fn generator(&self) -> Result<Arc<dyn Generator>> {
        match &self.generator {
            Some(generator) => Ok(Arc::clone(generator)),
            None => Ok(Arc::new(GeminiClient::new(&self.config)?)),
        }
    }
}
