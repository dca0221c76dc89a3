mod common;

use actix_web::{http::StatusCode, test};
use chrono::DateTime;
use common::{setup_test_app, test_config};
use serde_json::Value;
use std::{fs, path::PathBuf};

fn static_fixture(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "livekit-token-server-{name}-{}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create static dir");
    fs::write(dir.join("index.html"), "<html>conference</html>").expect("write index.html");
    fs::write(dir.join("app.js"), "class LiveKitConference {}").expect("write app.js");
    dir
}

#[actix_web::test]
async fn test_health_reports_ok_with_timestamp() {
    let app = setup_test_app(test_config()).await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    let time = body["time"].as_str().expect("time is a string");
    assert!(DateTime::parse_from_rfc3339(time).is_ok(), "unparseable time {time}");
}

#[actix_web::test]
async fn test_unmatched_paths_are_served_from_static_dir() {
    let mut config = test_config();
    config.static_dir = static_fixture("assets");
    let app = setup_test_app(config).await;

    let req = test::TestRequest::get().uri("/app.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, "class LiveKitConference {}");

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "<html>conference</html>");
}

#[actix_web::test]
async fn test_unknown_static_file_is_not_found() {
    let mut config = test_config();
    config.static_dir = static_fixture("missing");
    let app = setup_test_app(config).await;

    let req = test::TestRequest::get().uri("/nope.css").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
