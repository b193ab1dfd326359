//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use waypoint_core::{params as core, GenerateResult, Planner, PlannerError, SelfTestResult};

use super::errors::{classified_result, to_mcp_error};

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Wraps a core parameter type in a transparent serde container so the MCP
// layer gets Deserialize + JsonSchema without touching the core types.

/// Generic MCP wrapper for core parameter types with serde integration.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type GeneratePlan = McpParams<core::GeneratePlan>;
pub type ListHistory = McpParams<core::ListHistory>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server.
///
/// The planner sits behind a mutex so at most one request runs at a time.
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn generate_plan(&self, Parameters(params): Parameters<GeneratePlan>) -> McpResult {
        debug!("generate_plan: {params:?}");

        let planner = self.planner.lock().await;
        match planner.generate_plan(params.as_ref()).await {
            Ok(outcome) => Ok(CallToolResult::success(vec![Content::text(
                GenerateResult(&outcome).to_string(),
            )])),
            Err(e) => Ok(classified_result(&e)),
        }
    }

    pub async fn list_history(&self, Parameters(params): Parameters<ListHistory>) -> McpResult {
        debug!("list_history: {params:?}");

        let entries = self
            .planner
            .lock()
            .await
            .list_history(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load plan history", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            entries.to_string(),
        )]))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_plan: {params:?}");

        let result = self
            .planner
            .lock()
            .await
            .show_plan(params.as_ref())
            .await;

        match result {
            Ok(entry) => Ok(CallToolResult::success(vec![Content::text(
                entry.to_string(),
            )])),
            Err(e @ PlannerError::PlanNotFound { .. }) => {
                Err(ErrorData::invalid_params(e.to_string(), None))
            }
            Err(e) => Err(to_mcp_error("Failed to load plan", &e)),
        }
    }

    pub async fn test_connection(&self) -> McpResult {
        debug!("test_connection");

        let planner = self.planner.lock().await;
        match planner.test_connection().await {
            Ok(report) => Ok(CallToolResult::success(vec![Content::text(
                SelfTestResult(&report).to_string(),
            )])),
            Err(e) => Ok(classified_result(&e)),
        }
    }
}
