// Request dispatch for yapi-mcp
//
// Structured requests map 1:1 onto a client call plus a renderer.
// URL requests resolve first, then always fetch the project before the
// target section. Calls run one after another so sections keep call order;
// the first failure aborts the whole request and no partial text escapes.

use tracing::warn;
use url::Url;

use crate::client::YapiClient;
use crate::error::YapiError;
use crate::formatter::{self, SECTION_SEPARATOR};
use crate::url_parser::{parse_yapi_url, UrlIntent, UrlTarget};

/// Page size used when a URL points at a category
pub const URL_CATEGORY_LIMIT: u64 = 50;
/// Page size used when a URL points at a whole project
pub const URL_PROJECT_LIMIT: u64 = 20;

pub async fn get_project(client: &YapiClient, project_id: u64) -> Result<String, YapiError> {
    let project = client.get_project(project_id).await?;
    Ok(formatter::format_project(&project))
}

pub async fn get_cat_menu(client: &YapiClient, project_id: u64) -> Result<String, YapiError> {
    let categories = client.get_cat_menu(project_id).await?;
    Ok(formatter::format_categories(&categories))
}

pub async fn list_interfaces(client: &YapiClient, project_id: u64, page: u64, limit: u64) -> Result<String, YapiError> {
    let list = client.list_interfaces(project_id, page, limit).await?;
    Ok(formatter::format_interface_list(&list, page, limit))
}

pub async fn list_by_category(client: &YapiClient, cat_id: u64, page: u64, limit: u64) -> Result<String, YapiError> {
    let list = client.list_by_category(cat_id, page, limit).await?;
    Ok(formatter::format_interface_list(&list, page, limit))
}

pub async fn get_interface(client: &YapiClient, interface_id: u64) -> Result<String, YapiError> {
    let detail = client.get_interface(interface_id).await?;
    Ok(formatter::format_interface_detail(&detail))
}

pub async fn get_full_menu(client: &YapiClient, project_id: u64) -> Result<String, YapiError> {
    let menu = client.get_full_menu(project_id).await?;
    Ok(formatter::format_full_menu(&menu))
}

/// Resolve a YAPI page URL and render the project plus whatever the page shows.
pub async fn get_by_url(client: &YapiClient, url: &str) -> Result<String, YapiError> {
    let intent = parse_yapi_url(url)?;
    warn_on_foreign_origin(client.base_url(), &intent);

    let mut sections = vec![get_project(client, intent.project_id).await?];

    let target_section = match intent.target {
        UrlTarget::Interface(interface_id) => get_interface(client, interface_id).await?,
        UrlTarget::Category(cat_id) => list_by_category(client, cat_id, 1, URL_CATEGORY_LIMIT).await?,
        UrlTarget::Project => list_interfaces(client, intent.project_id, 1, URL_PROJECT_LIMIT).await?,
    };
    sections.push(target_section);

    Ok(sections.join(SECTION_SEPARATOR))
}

// The configured server is always the one queried; a mismatch usually means
// the page came from a different YAPI deployment.
fn warn_on_foreign_origin(base_url: &str, intent: &UrlIntent) {
    let configured = match Url::parse(base_url) {
        Ok(url) => url.origin().ascii_serialization(),
        Err(_) => return,
    };
    if configured != intent.origin {
        warn!(
            page_origin = %intent.origin,
            configured_origin = %configured,
            "URL host differs from configured YAPI server; querying configured server"
        );
    }
}
