#![allow(dead_code)]

/// In-process stub YAPI server for client and dispatch tests
use axum::{
    extract::State,
    http::{header::COOKIE, HeaderMap, StatusCode, Uri},
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use yapi_mcp::{Config, YapiClient};

#[derive(Clone)]
pub struct Canned {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Canned {
    pub fn ok(data: Value) -> Self {
        Self::envelope(0, "成功！", data)
    }

    pub fn envelope(errcode: i64, errmsg: &str, data: Value) -> Self {
        let body = serde_json::json!({ "errcode": errcode, "errmsg": errmsg, "data": data });
        Self { status: 200, body: body.to_string(), delay: None }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self { status, body: body.to_string(), delay: None }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub query: String,
    pub cookie: Option<String>,
}

#[derive(Clone)]
struct StubState {
    responses: Arc<HashMap<String, Canned>>,
    log: Arc<Mutex<Vec<Recorded>>>,
}

async fn handle(State(state): State<StubState>, uri: Uri, headers: HeaderMap) -> (StatusCode, String) {
    state.log.lock().unwrap().push(Recorded {
        path: uri.path().to_string(),
        query: uri.query().unwrap_or_default().to_string(),
        cookie: headers.get(COOKIE).and_then(|v| v.to_str().ok()).map(|s| s.to_string()),
    });

    match state.responses.get(uri.path()).cloned() {
        Some(canned) => {
            if let Some(delay) = canned.delay {
                tokio::time::sleep(delay).await;
            }
            (StatusCode::from_u16(canned.status).unwrap(), canned.body)
        }
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}

pub struct Stub {
    pub base_url: String,
    log: Arc<Mutex<Vec<Recorded>>>,
}

impl Stub {
    pub async fn start(responses: Vec<(&str, Canned)>) -> Self {
        let state = StubState {
            responses: Arc::new(responses.into_iter().map(|(p, c)| (p.to_string(), c)).collect()),
            log: Arc::new(Mutex::new(Vec::new())),
        };
        let log = state.log.clone();
        let app = Router::new().fallback(handle).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url: format!("http://{}", addr), log }
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|r| r.path).collect()
    }

    pub fn client(&self) -> YapiClient {
        client_for(&self.base_url, Duration::from_secs(5))
    }
}

pub fn client_for(base_url: &str, timeout: Duration) -> YapiClient {
    let config = Config {
        base_url: base_url.to_string(),
        token: "tok".to_string(),
        uid: 7,
        timeout,
        log_level: "info".to_string(),
    };
    YapiClient::new(&config).unwrap()
}

pub fn project_json() -> Value {
    serde_json::json!({
        "_id": 11,
        "name": "Demo",
        "desc": "Demo project",
        "basepath": "/api",
        "project_type": "private",
        "tag": ["core"],
        "env": [{
            "_id": "e1",
            "name": "local",
            "domain": "http://127.0.0.1:8080",
            "header": [],
            "global": []
        }],
        "add_time": 1700000000,
        "up_time": 1700000000
    })
}

pub fn summary_json(id: u64, path: &str, title: &str) -> Value {
    serde_json::json!({
        "_id": id,
        "project_id": 11,
        "catid": 7,
        "title": title,
        "path": path,
        "method": "GET",
        "uid": 7,
        "status": "done",
        "edit_uid": 0
    })
}

pub fn interface_json() -> Value {
    serde_json::json!({
        "_id": 99,
        "project_id": 11,
        "catid": 7,
        "title": "Get user",
        "path": "/api/users/{id}",
        "method": "GET",
        "status": "done",
        "desc": "",
        "markdown": "",
        "req_body_type": "",
        "req_body_form": [],
        "req_body_other": "",
        "req_params": [{ "_id": "p1", "name": "id", "example": "1", "desc": "user id" }],
        "req_headers": [],
        "req_query": [],
        "res_body_type": "json",
        "res_body": "{\"id\":1}",
        "tag": []
    })
}
