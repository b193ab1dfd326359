//! MCP server for Waypoint
//!
//! Exposes plan generation and history over the Model Context Protocol on
//! stdio so AI assistants can request career plans.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use waypoint_core::Planner;

pub mod errors;
pub mod handlers;

pub use handlers::{GeneratePlan, Id, ListHistory, McpResult};

/// MCP server for Waypoint
#[derive(Clone)]
pub struct WaypointMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WaypointMcpServer {
    /// Create a new Waypoint MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "generate_plan",
        description = "Generate a career transition plan towards a target role. Provide the role (required), a timeframe in months between 1 and 24 (default 6) and the unit, 'week' (default) or 'month'. Weekly plans have four items per month. The plan is saved to history and returned as markdown with its history ID."
    )]
    async fn generate_plan(&self, params: Parameters<GeneratePlan>) -> McpResult {
        self.handlers().generate_plan(params).await
    }

    #[tool(
        name = "list_history",
        description = "List previously generated plans, most recent first. By default the six most recent are shown; set all=true for every stored plan (up to ten are kept). Returns IDs usable with show_plan."
    )]
    async fn list_history(&self, params: Parameters<ListHistory>) -> McpResult {
        self.handlers().list_history(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Show a previously generated plan by its history ID without generating it again."
    )]
    async fn show_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "test_connection",
        description = "Check that the generation service answers with the configured API key. Reports the first model that responded and any models that failed."
    )]
    async fn test_connection(&self) -> McpResult {
        self.handlers().test_connection().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WaypointMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "waypoint".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Waypoint generates structured career transition plans with a hosted AI model.

## Workflow
1. Call `generate_plan` with the target role and a timeframe. Weekly plans (default) have four items per month; monthly plans one item per month.
2. Use `list_history` to find earlier plans and `show_plan` to reopen one by ID.
3. If generation keeps failing, call `test_connection` to check the API key and model availability.

Only the ten most recent plans are kept."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: WaypointMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Waypoint MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use waypoint_core::{MemoryStore, PlannerBuilder};

    use super::*;

    #[tokio::test]
    async fn test_tools_registered() {
        let planner = PlannerBuilder::new()
            .with_store(Arc::new(MemoryStore::new()))
            .build()
            .await
            .unwrap();
        let server = WaypointMcpServer::new(planner);

        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec!["generate_plan", "list_history", "show_plan", "test_connection"]
        );
    }
}
