//! Error conversion for the MCP server.

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};
use waypoint_core::{ClassifiedError, OperationStatus, PlannerError};

/// Converts a storage or lookup failure into a protocol error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

/// Reports a classified generation failure as a tool-level error so the
/// client sees the user-facing message.
pub fn classified_result(error: &ClassifiedError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(
        OperationStatus::from(error).to_string(),
    )])
}
