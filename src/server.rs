//! MCP server exposing YAPI lookups as tools.
//!
//! Every tool validates its input, runs one dispatch operation and returns
//! either the rendered text or a single `Error: ...` line flagged as a tool
//! error. Domain failures never travel over the protocol error channel.

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use std::sync::Arc;
use tracing::info;

use crate::client::YapiClient;
use crate::dispatch;
use crate::error::YapiError;
use crate::params::{InterfaceInput, ListByCategoryInput, ListInterfacesInput, ProjectInput, UrlInput};

/// Convert a dispatch outcome into the tool response
pub fn tool_response(result: Result<String, YapiError>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => CallToolResult::error(vec![Content::text(format!("Error: {}", e))]),
    }
}

#[derive(Clone)]
pub struct YapiServer {
    client: Arc<YapiClient>,
    tool_router: ToolRouter<Self>,
}

impl YapiServer {
    pub fn new(client: YapiClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl YapiServer {
    #[tool(
        name = "yapi_get_project",
        description = "Get project basic information including name, description, base URL, and environment configurations."
    )]
    async fn get_project(&self, Parameters(input): Parameters<ProjectInput>) -> Result<CallToolResult, McpError> {
        info!(tool = "yapi_get_project", project_id = input.project_id);
        let result = match input.validate() {
            Ok(()) => dispatch::get_project(&self.client, input.project_id).await,
            Err(e) => Err(e),
        };
        Ok(tool_response(result))
    }

    #[tool(
        name = "yapi_get_cat_menu",
        description = "Get the list of interface categories (folders) for a project. Returns category IDs, names, and descriptions."
    )]
    async fn get_cat_menu(&self, Parameters(input): Parameters<ProjectInput>) -> Result<CallToolResult, McpError> {
        info!(tool = "yapi_get_cat_menu", project_id = input.project_id);
        let result = match input.validate() {
            Ok(()) => dispatch::get_cat_menu(&self.client, input.project_id).await,
            Err(e) => Err(e),
        };
        Ok(tool_response(result))
    }

    #[tool(
        name = "yapi_list_interfaces",
        description = "List interfaces in a project with pagination. Returns basic info (ID, title, path, method, status) for each interface."
    )]
    async fn list_interfaces(
        &self,
        Parameters(input): Parameters<ListInterfacesInput>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = "yapi_list_interfaces", project_id = input.project_id, page = input.page, limit = input.limit);
        let result = match input.validate() {
            Ok(()) => dispatch::list_interfaces(&self.client, input.project_id, input.page, input.limit).await,
            Err(e) => Err(e),
        };
        Ok(tool_response(result))
    }

    #[tool(
        name = "yapi_list_by_category",
        description = "List interfaces belonging to a specific category with pagination."
    )]
    async fn list_by_category(
        &self,
        Parameters(input): Parameters<ListByCategoryInput>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = "yapi_list_by_category", cat_id = input.cat_id, page = input.page, limit = input.limit);
        let result = match input.validate() {
            Ok(()) => dispatch::list_by_category(&self.client, input.cat_id, input.page, input.limit).await,
            Err(e) => Err(e),
        };
        Ok(tool_response(result))
    }

    #[tool(
        name = "yapi_get_interface",
        description = "Get complete details of a single API interface including request parameters (headers, query, body), response body schema, description, and status."
    )]
    async fn get_interface(&self, Parameters(input): Parameters<InterfaceInput>) -> Result<CallToolResult, McpError> {
        info!(tool = "yapi_get_interface", interface_id = input.interface_id);
        let result = match input.validate() {
            Ok(()) => dispatch::get_interface(&self.client, input.interface_id).await,
            Err(e) => Err(e),
        };
        Ok(tool_response(result))
    }

    #[tool(
        name = "yapi_get_full_menu",
        description = "Get all interfaces grouped by category for a project. Returns the complete category-to-interface hierarchy. Warning: may return large payloads for big projects."
    )]
    async fn get_full_menu(&self, Parameters(input): Parameters<ProjectInput>) -> Result<CallToolResult, McpError> {
        info!(tool = "yapi_get_full_menu", project_id = input.project_id);
        let result = match input.validate() {
            Ok(()) => dispatch::get_full_menu(&self.client, input.project_id).await,
            Err(e) => Err(e),
        };
        Ok(tool_response(result))
    }

    #[tool(
        name = "yapi_get_by_url",
        description = "Parse a YAPI page URL and fetch the corresponding data automatically. \
Supports project URLs (/project/{id}/interface/api), \
interface URLs (/project/{id}/interface/api/{interfaceId}), \
and category URLs (/project/{id}/interface/api/cat_{catId})."
    )]
    async fn get_by_url(&self, Parameters(input): Parameters<UrlInput>) -> Result<CallToolResult, McpError> {
        info!(tool = "yapi_get_by_url", url = %input.url);
        let result = match input.validate() {
            Ok(()) => dispatch::get_by_url(&self.client, &input.url).await,
            Err(e) => Err(e),
        };
        Ok(tool_response(result))
    }
}

#[tool_handler]
impl ServerHandler for YapiServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "YAPI MCP Server for reading interface documentation from a YAPI instance.\n\n\
                 Tools available:\n\
                 - yapi_get_by_url: Paste a YAPI page URL to get the project plus the page content\n\
                 - yapi_get_project: Project info and environments\n\
                 - yapi_get_cat_menu: Interface categories of a project\n\
                 - yapi_list_interfaces: Paginated interfaces of a project\n\
                 - yapi_list_by_category: Paginated interfaces of a category\n\
                 - yapi_get_interface: Full interface detail (params, bodies, docs)\n\
                 - yapi_get_full_menu: Every category with all its interfaces"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                title: Some("YAPI MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
