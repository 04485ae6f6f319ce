// Authentication for yapi-mcp
// YAPI web sessions authenticate with the `_yapi_token` and `_yapi_uid` cookies

pub trait AuthStrategy {
    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder;
}

/// Cookie credentials, fixed at construction and sent on every call.
#[derive(Clone)]
pub struct CookieAuth {
    token: String,
    uid: u64,
}

impl CookieAuth {
    pub fn new(token: impl Into<String>, uid: u64) -> Self {
        Self { token: token.into(), uid }
    }

    pub fn cookie_header(&self) -> String {
        format!("_yapi_token={}; _yapi_uid={}", self.token, self.uid)
    }
}

impl AuthStrategy for CookieAuth {
    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header(reqwest::header::COOKIE, self.cookie_header())
    }
}

// Keep the token out of logs
impl std::fmt::Debug for CookieAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieAuth")
            .field("token", &"<redacted>")
            .field("uid", &self.uid)
            .finish()
    }
}
