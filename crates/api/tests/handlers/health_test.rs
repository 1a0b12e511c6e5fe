use serde_json::Value;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_version_reports_package_version() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/version").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["version"].is_string());
}
