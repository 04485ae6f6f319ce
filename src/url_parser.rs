// YAPI page URL resolver
//
// Turns a browser URL into what it points at:
//   /project/{id}/interface/api            -> project overview
//   /project/{id}/interface/api/cat_{cid}  -> category listing
//   /project/{id}/interface/api/{iid}      -> interface detail
//
// Only the path is matched. Target rules are tried in order and the first
// match wins, so `cat_` must stay ahead of the bare-digit rule.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::error::{InvalidUrlKind, YapiError};

/// What a page URL points at, below the project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlTarget {
    Project,
    Category(u64),
    Interface(u64),
}

/// Resolved meaning of a YAPI page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlIntent {
    /// Scheme and host of the page, e.g. `http://yapi.example.com`
    pub origin: String,
    pub project_id: u64,
    pub target: UrlTarget,
}

impl UrlIntent {
    pub fn category_id(&self) -> Option<u64> {
        match self.target {
            UrlTarget::Category(id) => Some(id),
            _ => None,
        }
    }

    pub fn interface_id(&self) -> Option<u64> {
        match self.target {
            UrlTarget::Interface(id) => Some(id),
            _ => None,
        }
    }
}

lazy_static! {
    static ref PROJECT_PATTERN: Regex = Regex::new(r"/project/(\d+)").unwrap();

    static ref TARGET_RULES: Vec<(Regex, fn(u64) -> UrlTarget)> = vec![
        (Regex::new(r"/interface/api/cat_(\d+)").unwrap(), UrlTarget::Category as fn(u64) -> UrlTarget),
        (Regex::new(r"/interface/api/(\d+)").unwrap(), UrlTarget::Interface as fn(u64) -> UrlTarget),
    ];
}

/// Parse a YAPI page URL into a [`UrlIntent`].
pub fn parse_yapi_url(input: &str) -> Result<UrlIntent, YapiError> {
    let parsed = Url::parse(input.trim()).map_err(|_| YapiError::invalid_url(input, InvalidUrlKind::Unparseable))?;
    let path = parsed.path();

    let project_id = capture_id(&PROJECT_PATTERN, path, input)?
        .ok_or_else(|| YapiError::invalid_url(input, InvalidUrlKind::MissingProjectId))?;

    let mut target = UrlTarget::Project;
    for (pattern, make_target) in TARGET_RULES.iter() {
        if let Some(id) = capture_id(pattern, path, input)? {
            target = make_target(id);
            break;
        }
    }

    Ok(UrlIntent {
        origin: parsed.origin().ascii_serialization(),
        project_id,
        target,
    })
}

fn capture_id(pattern: &Regex, path: &str, input: &str) -> Result<Option<u64>, YapiError> {
    match pattern.captures(path).and_then(|cap| cap.get(1)) {
        Some(digits) => digits
            .as_str()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| YapiError::invalid_url(input, InvalidUrlKind::IdOutOfRange)),
        None => Ok(None),
    }
}
