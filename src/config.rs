// Configuration for yapi-mcp
//
// Values come from CLI flags with environment fallback (see main.rs).
// Validation collects every problem so the operator sees them all at once.

use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Validated server configuration, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct Config {
    /// YAPI base URL with trailing slashes removed.
    pub base_url: String,
    /// `_yapi_token` cookie value.
    pub token: String,
    /// `_yapi_uid` cookie value.
    pub uid: u64,
    /// Per-request timeout for remote calls.
    pub timeout: Duration,
    /// Tracing filter directive (e.g. `info`, `yapi_mcp=debug`).
    pub log_level: String,
}

/// Unvalidated values as collected from flags or the environment.
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub uid: Option<String>,
    pub timeout_secs: Option<String>,
    pub log_level: Option<String>,
}

/// One `KEY: message` entry per failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub issues: Vec<(&'static str, String)>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YAPI MCP Server configuration error:")?;
        for (key, message) in &self.issues {
            write!(f, "\n  {}: {}", key, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}

impl RawConfig {
    /// Read straight from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_fn(|key| std::env::var(key))
    }

    fn from_env_fn<F>(env: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        Self {
            base_url: env("YAPI_BASE_URL").ok(),
            token: env("YAPI_TOKEN").ok(),
            uid: env("YAPI_UID").ok(),
            timeout_secs: env("YAPI_TIMEOUT_SECS").ok(),
            log_level: env("LOG_LEVEL").ok(),
        }
    }

    pub fn validate(self) -> Result<Config, ConfigError> {
        let mut issues = Vec::new();

        let base_url = match self.base_url.as_deref().map(str::trim) {
            None | Some("") => {
                issues.push(("YAPI_BASE_URL", "YAPI_BASE_URL is required".to_string()));
                None
            }
            Some(raw) => match Url::parse(raw) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {
                    Some(raw.trim_end_matches('/').to_string())
                }
                _ => {
                    issues.push(("YAPI_BASE_URL", "YAPI_BASE_URL must be a valid URL".to_string()));
                    None
                }
            },
        };

        let token = match self.token.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => Some(t.to_string()),
            _ => {
                issues.push(("YAPI_TOKEN", "YAPI_TOKEN is required".to_string()));
                None
            }
        };

        let uid = match self.uid.as_deref().map(str::trim).map(str::parse::<u64>) {
            Some(Ok(uid)) if uid > 0 => Some(uid),
            _ => {
                issues.push(("YAPI_UID", "YAPI_UID must be a positive integer".to_string()));
                None
            }
        };

        let timeout = match self.timeout_secs.as_deref().map(str::trim) {
            None | Some("") => Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    issues.push((
                        "YAPI_TIMEOUT_SECS",
                        "YAPI_TIMEOUT_SECS must be a positive integer".to_string(),
                    ));
                    None
                }
            },
        };

        let log_level = self
            .log_level
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        match (base_url, token, uid, timeout) {
            (Some(base_url), Some(token), Some(uid), Some(timeout)) if issues.is_empty() => Ok(Config {
                base_url,
                token,
                uid,
                timeout,
                log_level,
            }),
            _ => Err(ConfigError { issues }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn raw_from(vars: &[(&str, &str)]) -> RawConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RawConfig::from_env_fn(|key| map.get(key).cloned().ok_or(std::env::VarError::NotPresent))
    }

    #[test]
    fn valid_config_strips_trailing_slashes() {
        let config = raw_from(&[
            ("YAPI_BASE_URL", "http://yapi.example.com///"),
            ("YAPI_TOKEN", "abc"),
            ("YAPI_UID", "42"),
        ])
        .validate()
        .unwrap();

        assert_eq!(config.base_url, "http://yapi.example.com");
        assert_eq!(config.token, "abc");
        assert_eq!(config.uid, 42);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn sub_path_base_url_is_kept() {
        let config = raw_from(&[
            ("YAPI_BASE_URL", "https://docs.example.com/yapi/"),
            ("YAPI_TOKEN", "abc"),
            ("YAPI_UID", "7"),
            ("YAPI_TIMEOUT_SECS", "5"),
        ])
        .validate()
        .unwrap();

        assert_eq!(config.base_url, "https://docs.example.com/yapi");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn missing_everything_reports_every_key() {
        let err = raw_from(&[]).validate().unwrap_err();
        let keys: Vec<&str> = err.issues.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["YAPI_BASE_URL", "YAPI_TOKEN", "YAPI_UID"]);

        let text = err.to_string();
        assert!(text.starts_with("YAPI MCP Server configuration error:\n"));
        assert!(text.contains("\n  YAPI_TOKEN: YAPI_TOKEN is required"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn rejects_bad_values() {
        let err = raw_from(&[
            ("YAPI_BASE_URL", "not a url"),
            ("YAPI_TOKEN", "   "),
            ("YAPI_UID", "0"),
            ("YAPI_TIMEOUT_SECS", "-3"),
        ])
        .validate()
        .unwrap_err();

        assert_eq!(err.issues.len(), 4);
        assert!(err.to_string().contains("YAPI_BASE_URL must be a valid URL"));
        assert!(err.to_string().contains("YAPI_UID must be a positive integer"));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = raw_from(&[
            ("YAPI_BASE_URL", "ftp://yapi.example.com"),
            ("YAPI_TOKEN", "abc"),
            ("YAPI_UID", "1"),
        ])
        .validate()
        .unwrap_err();

        assert_eq!(err.issues, vec![("YAPI_BASE_URL", "YAPI_BASE_URL must be a valid URL".to_string())]);
    }
}
