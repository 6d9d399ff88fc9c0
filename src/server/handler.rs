//! MCP server handler
//!
//! Implements the MCP protocol handler served under both transports. The
//! handler is deliberately small: it reports the server identity from
//! configuration and exposes a single `status` tool describing the running
//! instance.

use crate::config::AppConfig;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorCode, Implementation, InitializeResult,
    ListToolsResult, PaginatedRequestParam, ProtocolVersion, ServerCapabilities, Tool,
    ToolsCapability,
};
use rmcp::service::{RequestContext, RoleServer};
use serde_json::{Map, Value, json};
use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, instrument};

/// dbt MCP server handler
#[derive(Clone)]
pub struct DbtMcpHandler {
    /// Server name for MCP
    name: String,
    /// Server version
    version: String,
    /// Optional instructions surfaced to clients
    instructions: Option<String>,
    /// Configured dbt project directory (reported by the status tool)
    project_dir: String,
    /// Configured dbt target, if any
    target: Option<String>,
}

impl DbtMcpHandler {
    /// Create a new handler from configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            name: config.server.name.clone(),
            version: config.server.version.clone(),
            instructions: config.server.instructions.clone(),
            project_dir: config.dbt.project_dir.clone(),
            target: config.dbt.target.clone(),
        }
    }

    /// Server name reported during initialization
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the status payload returned by the `status` tool
    fn status_payload(&self) -> Value {
        json!({
            "server": self.name,
            "version": self.version,
            "project_dir": self.project_dir,
            "target": self.target,
        })
    }

    fn status_tool() -> Tool {
        // No arguments; schema is an empty object
        let mut input_schema: Map<String, Value> = Map::new();
        input_schema.insert("type".to_string(), Value::String("object".to_string()));
        input_schema.insert("properties".to_string(), json!({}));

        Tool {
            name: Cow::Borrowed("status"),
            description: Some(Cow::Borrowed(
                "Report the server name, version, and configured dbt project",
            )),
            input_schema: Arc::new(input_schema),
            annotations: None,
            icons: None,
            output_schema: None,
            title: None,
        }
    }
}

impl ServerHandler for DbtMcpHandler {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: self.name.clone(),
                version: self.version.clone(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: self
                .instructions
                .clone()
                .or_else(|| Some("dbt MCP Server".to_string())),
        }
    }

    #[instrument(skip(self, _context))]
    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        debug!("Listing tools");
        async move {
            Ok(ListToolsResult {
                tools: vec![Self::status_tool()],
                next_cursor: None,
            })
        }
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        debug!(?request.arguments, "Calling tool");
        async move {
            match request.name.as_ref() {
                "status" => {
                    let text = self.status_payload().to_string();
                    Ok(CallToolResult {
                        content: vec![Content::text(text)],
                        is_error: Some(false),
                        meta: None,
                        structured_content: None,
                    })
                }
                other => Err(unknown_tool(other)),
            }
        }
    }
}

/// Create a method not found error
fn unknown_tool(tool_name: &str) -> McpError {
    McpError {
        code: ErrorCode(-32601), // Method not found
        message: format!("Unknown tool: {}", tool_name).into(),
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn handler() -> DbtMcpHandler {
        let mut config = AppConfig::default();
        config.server.name = "test-dbt-mcp".to_string();
        config.server.version = "1.2.3".to_string();
        config.dbt.project_dir = "/srv/analytics".to_string();
        config.dbt.target = Some("prod".to_string());
        DbtMcpHandler::new(&config)
    }

    #[test]
    fn test_get_info_reports_configured_identity() {
        let info = handler().get_info();

        assert_eq!(info.server_info.name, "test-dbt-mcp");
        assert_eq!(info.server_info.version, "1.2.3");
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_status_payload() {
        let payload = handler().status_payload();

        assert_eq!(payload["server"], "test-dbt-mcp");
        assert_eq!(payload["version"], "1.2.3");
        assert_eq!(payload["project_dir"], "/srv/analytics");
        assert_eq!(payload["target"], "prod");
    }

    #[test]
    fn test_status_tool_schema_is_object() {
        let tool = DbtMcpHandler::status_tool();

        assert_eq!(tool.name, "status");
        assert_eq!(tool.input_schema["type"], "object");
    }
}
