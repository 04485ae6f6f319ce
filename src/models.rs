// Core data models for yapi-mcp
// Read-only records decoded from YAPI responses

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// HTTP method of an interface. Names YAPI sends outside the usual set are
/// kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    OPTIONS,
    HEAD,
    Other(String),
}

impl Method {
    /// Case-insensitive lookup
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        match name.to_ascii_uppercase().as_str() {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "PATCH" => Method::PATCH,
            "OPTIONS" => Method::OPTIONS,
            "HEAD" => Method::HEAD,
            _ => Method::Other(name.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Method {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|name| Method::from_name(&name))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::GET => write!(f, "GET"),
            Method::POST => write!(f, "POST"),
            Method::PUT => write!(f, "PUT"),
            Method::DELETE => write!(f, "DELETE"),
            Method::PATCH => write!(f, "PATCH"),
            Method::OPTIONS => write!(f, "OPTIONS"),
            Method::HEAD => write!(f, "HEAD"),
            Method::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Interface status: done / undone / testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceStatus {
    Done,
    #[default]
    Undone,
    Testing,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for InterfaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceStatus::Done => write!(f, "done"),
            InterfaceStatus::Undone => write!(f, "undone"),
            InterfaceStatus::Testing => write!(f, "testing"),
            InterfaceStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Request body kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReqBodyType {
    Form,
    Json,
    File,
    Raw,
}

impl fmt::Display for ReqBodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReqBodyType::Form => write!(f, "form"),
            ReqBodyType::Json => write!(f, "json"),
            ReqBodyType::File => write!(f, "file"),
            ReqBodyType::Raw => write!(f, "raw"),
        }
    }
}

/// Response body kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResBodyType {
    Json,
    Raw,
}

impl fmt::Display for ResBodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResBodyType::Json => write!(f, "json"),
            ResBodyType::Raw => write!(f, "raw"),
        }
    }
}

/// Name/value pair used by environment headers and global variables
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedValue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

/// Project tag. YAPI stores these as `{name, desc}`; older data has bare strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectTag {
    pub name: String,
    pub desc: String,
}

impl<'de> Deserialize<'de> for ProjectTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct TagObject {
            #[serde(default, deserialize_with = "null_as_default")]
            name: String,
            #[serde(default, deserialize_with = "null_as_default")]
            desc: String,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum TagRepr {
            Name(String),
            Object(TagObject),
        }

        Ok(match TagRepr::deserialize(deserializer)? {
            TagRepr::Name(name) => ProjectTag { name, desc: String::new() },
            TagRepr::Object(tag) => ProjectTag { name: tag.name, desc: tag.desc },
        })
    }
}

/// A deployment target for a project
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Environment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub header: Vec<NamedValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub global: Vec<NamedValue>,
}

/// Project record from `/api/project/get`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub basepath: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag: Vec<ProjectTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub env: Vec<Environment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub add_time: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub up_time: i64,
}

/// Interface category (folder)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub index: i64,
}

/// Category with its full interface list, as returned by `list_menu`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuCategory {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<InterfaceSummary>,
}

/// Lightweight interface listing entry
#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceSummary {
    #[serde(rename = "_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub catid: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: Method,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: InterfaceStatus,
}

/// Form body field
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormField {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "required_flag")]
    pub required: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub example: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
}

/// Path parameter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathParam {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub example: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
}

/// Request header
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestHeader {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub example: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(default, deserialize_with = "required_flag")]
    pub required: bool,
}

/// Query parameter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParam {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub example: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(default, deserialize_with = "required_flag")]
    pub required: bool,
}

/// Full interface record from `/api/interface/get`
#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceDetail {
    #[serde(flatten)]
    pub summary: InterfaceSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub markdown: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub req_body_type: Option<ReqBodyType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub req_body_form: Vec<FormField>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub req_body_other: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub req_params: Vec<PathParam>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub req_headers: Vec<RequestHeader>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub req_query: Vec<QueryParam>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub res_body_type: Option<ResBodyType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub res_body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag: Vec<String>,
}

/// One page of results. `count` is items on this page, `total` is global.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedList<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<T>,
}

/// YAPI sends `null` for absent strings and lists as often as it omits them.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Blank strings and nulls both mean "not set" for the body kind fields.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(v) => T::deserialize(v).map(Some).map_err(D::Error::custom),
    }
}

/// Required flags arrive as '0'/'1', but older exports use numbers or bools.
fn required_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s.trim() == "1",
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::Bool(b)) => b,
        _ => false,
    })
}
