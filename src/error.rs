// Error taxonomy for yapi-mcp
// Every failure surfaces as exactly one of these kinds

use std::fmt;
use thiserror::Error;

/// Why a page URL could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidUrlKind {
    /// Not parseable as an absolute URL at all
    Unparseable,
    /// No `project/<digits>` segment in the path
    MissingProjectId,
    /// A digit run does not fit in an id
    IdOutOfRange,
}

impl fmt::Display for InvalidUrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidUrlKind::Unparseable => write!(f, "cannot parse"),
            InvalidUrlKind::MissingProjectId => write!(f, "cannot extract project ID from"),
            InvalidUrlKind::IdOutOfRange => write!(f, "ID out of range in"),
        }
    }
}

#[derive(Debug, Error)]
pub enum YapiError {
    /// DNS, connect, timeout and other transport failures
    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    /// Body was not the `{errcode, errmsg, data}` envelope we expect
    #[error("Failed to parse response as JSON: {0}")]
    MalformedResponse(String),

    /// Envelope carried a non-zero `errcode`
    #[error("YAPI Error {code}: {message}")]
    RemoteBusiness { code: i64, message: String },

    #[error("Invalid YAPI URL: {kind} \"{url}\"")]
    InvalidUrl { url: String, kind: InvalidUrlKind },

    /// Caller input outside the accepted range
    #[error("{0}")]
    Validation(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl YapiError {
    pub fn invalid_url(url: &str, kind: InvalidUrlKind) -> Self {
        YapiError::InvalidUrl { url: url.to_string(), kind }
    }
}

impl From<reqwest::Error> for YapiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            YapiError::Transport(format!("request timed out: {}", err))
        } else if err.is_decode() {
            YapiError::MalformedResponse(err.to_string())
        } else {
            YapiError::Transport(err.to_string())
        }
    }
}
