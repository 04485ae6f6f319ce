/// Integration tests for the YAPI client against an in-process stub server
mod common;

use common::{client_for, interface_json, project_json, summary_json, Canned, Stub};
use serde_json::json;
use std::time::Duration;
use yapi_mcp::{InterfaceStatus, Method, ReqBodyType, YapiError};

#[tokio::test]
async fn get_project_decodes_data_and_sends_cookie() {
    let stub = Stub::start(vec![("/api/project/get", Canned::ok(project_json()))]).await;

    let project = stub.client().get_project(11).await.expect("project should load");

    assert_eq!(project.id, 11);
    assert_eq!(project.name, "Demo");
    assert_eq!(project.env.len(), 1);
    assert_eq!(project.env[0].domain, "http://127.0.0.1:8080");

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/api/project/get");
    assert_eq!(calls[0].query, "id=11");
    assert_eq!(calls[0].cookie.as_deref(), Some("_yapi_token=tok; _yapi_uid=7"));
}

#[tokio::test]
async fn every_operation_hits_its_endpoint_with_credentials() {
    let page = json!({ "count": 1, "total": 1, "list": [summary_json(99, "/a", "A")] });
    let stub = Stub::start(vec![
        ("/api/project/get", Canned::ok(project_json())),
        ("/api/interface/getCatMenu", Canned::ok(json!([{ "_id": 7, "name": "Users", "desc": "", "project_id": 11, "index": 0 }]))),
        ("/api/interface/list", Canned::ok(page.clone())),
        ("/api/interface/list_cat", Canned::ok(page)),
        ("/api/interface/get", Canned::ok(interface_json())),
        ("/api/interface/list_menu", Canned::ok(json!([{ "_id": 7, "name": "Users", "desc": "", "list": [] }]))),
    ])
    .await;
    let client = stub.client();

    client.get_project(11).await.unwrap();
    client.get_cat_menu(11).await.unwrap();
    client.list_interfaces(11, 2, 20).await.unwrap();
    client.list_by_category(7, 1, 50).await.unwrap();
    client.get_interface(99).await.unwrap();
    client.get_full_menu(11).await.unwrap();

    let calls = stub.calls();
    let seen: Vec<(String, String)> = calls.iter().map(|c| (c.path.clone(), c.query.clone())).collect();
    assert_eq!(
        seen,
        vec![
            ("/api/project/get".to_string(), "id=11".to_string()),
            ("/api/interface/getCatMenu".to_string(), "project_id=11".to_string()),
            ("/api/interface/list".to_string(), "project_id=11&page=2&limit=20".to_string()),
            ("/api/interface/list_cat".to_string(), "catid=7&page=1&limit=50".to_string()),
            ("/api/interface/get".to_string(), "id=99".to_string()),
            ("/api/interface/list_menu".to_string(), "project_id=11".to_string()),
        ]
    );
    assert!(calls
        .iter()
        .all(|c| c.cookie.as_deref() == Some("_yapi_token=tok; _yapi_uid=7")));
}

#[tokio::test]
async fn business_error_surfaces_remote_code_and_message() {
    let stub = Stub::start(vec![(
        "/api/project/get",
        Canned::envelope(40011, "project not exist", serde_json::Value::Null),
    )])
    .await;

    let err = stub.client().get_project(404).await.unwrap_err();

    assert!(matches!(err, YapiError::RemoteBusiness { code: 40011, .. }));
    assert_eq!(err.to_string(), "YAPI Error 40011: project not exist");
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let stub = Stub::start(vec![("/api/project/get", Canned::raw(502, "upstream down"))]).await;

    let err = stub.client().get_project(11).await.unwrap_err();

    match &err {
        YapiError::HttpStatus { status, reason } => {
            assert_eq!(*status, 502);
            assert_eq!(reason, "Bad Gateway");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
    assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
}

#[tokio::test]
async fn unknown_endpoint_is_http_404() {
    let stub = Stub::start(vec![]).await;
    let err = stub.client().get_cat_menu(11).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 404: Not Found");
}

#[tokio::test]
async fn html_body_is_malformed_response() {
    let stub = Stub::start(vec![("/api/project/get", Canned::raw(200, "<html>login</html>"))]).await;

    let err = stub.client().get_project(11).await.unwrap_err();

    assert!(matches!(err, YapiError::MalformedResponse(_)), "got {:?}", err);
    assert!(err.to_string().starts_with("Failed to parse response as JSON"));
}

#[tokio::test]
async fn unexpected_data_shape_is_malformed_response() {
    let stub = Stub::start(vec![("/api/interface/getCatMenu", Canned::ok(json!({ "not": "a list" })))]).await;

    let err = stub.client().get_cat_menu(11).await.unwrap_err();

    assert!(matches!(err, YapiError::MalformedResponse(_)), "got {:?}", err);
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // Grab a free port, then close it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}", addr), Duration::from_secs(5));
    let err = client.get_project(11).await.unwrap_err();

    assert!(matches!(err, YapiError::Transport(_)), "got {:?}", err);
    assert!(err.to_string().starts_with("Network error: "));
}

#[tokio::test]
async fn slow_server_hits_the_configured_timeout() {
    let stub = Stub::start(vec![(
        "/api/project/get",
        Canned::ok(project_json()).delayed(Duration::from_secs(3)),
    )])
    .await;

    let client = client_for(&stub.base_url, Duration::from_millis(200));
    let err = client.get_project(11).await.unwrap_err();

    assert!(matches!(err, YapiError::Transport(_)), "got {:?}", err);
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn base_url_sub_path_is_preserved() {
    let stub = Stub::start(vec![("/yapi/api/project/get", Canned::ok(project_json()))]).await;

    let client = client_for(&format!("{}/yapi", stub.base_url), Duration::from_secs(5));
    client.get_project(11).await.expect("sub-path deployment should work");

    assert_eq!(stub.paths(), vec!["/yapi/api/project/get".to_string()]);
}

#[tokio::test]
async fn interface_detail_decodes_loose_fields() {
    let mut detail = interface_json();
    detail["method"] = json!("POST");
    detail["status"] = json!("testing");
    detail["req_body_type"] = json!("form");
    detail["req_body_form"] = json!([
        { "name": "file", "type": "file", "required": "1", "example": null, "desc": "upload" },
        { "name": "note", "type": "text", "required": "0" }
    ]);
    detail["desc"] = serde_json::Value::Null;
    let stub = Stub::start(vec![("/api/interface/get", Canned::ok(detail))]).await;

    let detail = stub.client().get_interface(99).await.unwrap();

    assert_eq!(detail.summary.method, Method::POST);
    assert_eq!(detail.summary.status, InterfaceStatus::Testing);
    assert_eq!(detail.req_body_type, Some(ReqBodyType::Form));
    assert!(detail.req_body_form[0].required);
    assert!(!detail.req_body_form[1].required);
    assert_eq!(detail.req_body_form[0].example, "");
    assert_eq!(detail.desc, "");
}
