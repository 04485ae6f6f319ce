// Async HTTP client for the YAPI server
// Uses reqwest; every call is one authenticated GET unwrapped from the YAPI envelope

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{AuthStrategy, CookieAuth};
use crate::config::Config;
use crate::error::YapiError;
use crate::models::{Category, InterfaceDetail, InterfaceSummary, MenuCategory, PaginatedList, Project};

/// `errcode` value YAPI uses for success
pub const SUCCESS_CODE: i64 = 0;

/// Decoded YAPI envelope: either the typed `data` or the business error.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success(T),
    BusinessError { code: i64, message: String },
}

#[derive(Deserialize)]
struct RawEnvelope {
    errcode: i64,
    #[serde(default)]
    errmsg: Option<String>,
    #[serde(default)]
    data: Value,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Parse a response body. The shell is decoded before `data`, so a
    /// business error is reported even when its `data` is null or oddly shaped.
    pub fn parse(body: &str) -> Result<Self, YapiError> {
        let raw: RawEnvelope =
            serde_json::from_str(body).map_err(|e| YapiError::MalformedResponse(e.to_string()))?;

        if raw.errcode != SUCCESS_CODE {
            return Ok(Envelope::BusinessError {
                code: raw.errcode,
                message: raw.errmsg.unwrap_or_default(),
            });
        }

        serde_json::from_value(raw.data)
            .map(Envelope::Success)
            .map_err(|e| YapiError::MalformedResponse(format!("unexpected data: {}", e)))
    }
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<T, YapiError> {
        match self {
            Envelope::Success(data) => Ok(data),
            Envelope::BusinessError { code, message } => Err(YapiError::RemoteBusiness { code, message }),
        }
    }
}

pub struct YapiClient {
    client: Client,
    base_url: String,
    auth: CookieAuth,
}

impl YapiClient {
    pub fn new(config: &Config) -> Result<Self, YapiError> {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .timeout(config.timeout)
            .build()
            .map_err(|e| YapiError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            auth: CookieAuth::new(config.token.clone(), config.uid),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request<T: DeserializeOwned>(&self, path: &str, params: &[(&str, u64)]) -> Result<T, YapiError> {
        debug!(path, ?params, "yapi request");
        self.fetch(path, params)
            .await
            .inspect_err(|e| warn!(path, error = %e, "yapi request failed"))
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, params: &[(&str, u64)]) -> Result<T, YapiError> {
        let url = format!("{}{}", self.base_url, path);
        let req = self.auth.apply_auth(self.client.get(&url).query(params));

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(YapiError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = resp.text().await?;
        Envelope::<T>::parse(&body)?.into_result()
    }

    /// Project info, environments and tags
    pub async fn get_project(&self, project_id: u64) -> Result<Project, YapiError> {
        self.request("/api/project/get", &[("id", project_id)]).await
    }

    /// Categories of a project, without their interfaces
    pub async fn get_cat_menu(&self, project_id: u64) -> Result<Vec<Category>, YapiError> {
        self.request("/api/interface/getCatMenu", &[("project_id", project_id)]).await
    }

    pub async fn list_interfaces(
        &self,
        project_id: u64,
        page: u64,
        limit: u64,
    ) -> Result<PaginatedList<InterfaceSummary>, YapiError> {
        self.request(
            "/api/interface/list",
            &[("project_id", project_id), ("page", page), ("limit", limit)],
        )
        .await
    }

    pub async fn list_by_category(
        &self,
        cat_id: u64,
        page: u64,
        limit: u64,
    ) -> Result<PaginatedList<InterfaceSummary>, YapiError> {
        self.request(
            "/api/interface/list_cat",
            &[("catid", cat_id), ("page", page), ("limit", limit)],
        )
        .await
    }

    pub async fn get_interface(&self, interface_id: u64) -> Result<InterfaceDetail, YapiError> {
        self.request("/api/interface/get", &[("id", interface_id)]).await
    }

    /// Every category with its complete, unpaginated interface list
    pub async fn get_full_menu(&self, project_id: u64) -> Result<Vec<MenuCategory>, YapiError> {
        self.request("/api/interface/list_menu", &[("project_id", project_id)]).await
    }
}
