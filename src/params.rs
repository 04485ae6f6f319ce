// Tool inputs for yapi-mcp
// Deserialized from MCP tool calls; validated before any remote call is made

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;

use crate::error::YapiError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProjectInput {
    /// The YAPI project ID
    pub project_id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListInterfacesInput {
    /// The YAPI project ID
    pub project_id: u64,
    /// Page number (default: 1)
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page, max 100 (default: 20)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListByCategoryInput {
    /// The category ID (obtained from yapi_get_cat_menu)
    pub cat_id: u64,
    /// Page number (default: 1)
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page, max 100 (default: 20)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct InterfaceInput {
    /// The interface ID to retrieve details for
    pub interface_id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UrlInput {
    /// Full YAPI page URL, e.g. http://yapi.example.com/project/1/interface/api/100
    pub url: String,
}

pub fn validate_id(field: &str, id: u64) -> Result<(), YapiError> {
    if id == 0 {
        return Err(YapiError::Validation(format!("{} must be a positive integer", field)));
    }
    Ok(())
}

pub fn validate_paging(page: u64, limit: u64) -> Result<(), YapiError> {
    if page < 1 {
        return Err(YapiError::Validation("page must be at least 1".to_string()));
    }
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(YapiError::Validation(format!("limit must be between 1 and {}", MAX_LIMIT)));
    }
    Ok(())
}

impl ProjectInput {
    pub fn validate(&self) -> Result<(), YapiError> {
        validate_id("project_id", self.project_id)
    }
}

impl ListInterfacesInput {
    pub fn validate(&self) -> Result<(), YapiError> {
        validate_id("project_id", self.project_id)?;
        validate_paging(self.page, self.limit)
    }
}

impl ListByCategoryInput {
    pub fn validate(&self) -> Result<(), YapiError> {
        validate_id("cat_id", self.cat_id)?;
        validate_paging(self.page, self.limit)
    }
}

impl InterfaceInput {
    pub fn validate(&self) -> Result<(), YapiError> {
        validate_id("interface_id", self.interface_id)
    }
}

impl UrlInput {
    pub fn validate(&self) -> Result<(), YapiError> {
        if self.url.trim().is_empty() {
            return Err(YapiError::Validation("url must not be empty".to_string()));
        }
        Ok(())
    }
}
