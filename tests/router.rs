//! In-process router tests, no sockets involved.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use quoter::config::{parse_config, QuoterConfig};
use quoter::http::HttpServer;
use serde_json::Value;
use tower::ServiceExt;

async fn call(server: &HttpServer, uri: &str) -> (StatusCode, String) {
    let response = server
        .router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

const GRUNWALD_2016: &str = "/quote?vehicle_type=semitrailer&brand=GRUNWALD&year=2016\
    &price=5000000&downpayment=0.1&VAT_included=yes";

#[tokio::test]
async fn test_quote_body() {
    let server = HttpServer::new(QuoterConfig::default());
    let (status, body) = call(&server, GRUNWALD_2016).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["monthly_payment"]["value"].as_i64().unwrap() > 0);
    assert_eq!(json["monthly_payment"]["VAT_included"], true);
    assert_eq!(json["downpayment"]["value"], 500_000);
    assert_eq!(json["downpayment"]["VAT_included"], true);
}

#[tokio::test]
async fn test_generated_request_id() {
    let server = HttpServer::new(QuoterConfig::default());
    let response = server
        .router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(id.len(), 36, "{id}");
    assert_eq!(id.matches('-').count(), 4, "{id}");
}

#[tokio::test]
async fn test_unknown_route() {
    let server = HttpServer::new(QuoterConfig::default());
    let (status, _) = call(&server, "/quotes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rules_from_config() {
    let config = parse_config(
        r#"
        [service]
        update_date = "2022-06-30"

        [rules]
        revision = "test"
        vehicle_types = ["semitrailer"]

        [rules.brands]
        russian = ["TONAR"]
        european = ["KRONE"]
        "#,
    )
    .unwrap();
    let server = HttpServer::new(config);

    let (_, date) = call(&server, "/calc_update_date").await;
    assert_eq!(date, "2022-06-30");

    // GRUNWALD is no longer on the list.
    let (status, body) = call(&server, GRUNWALD_2016).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["kind"], "disallowed_brand");

    let (_, brands) = call(&server, "/brands").await;
    let json: Value = serde_json::from_str(&brands).unwrap();
    assert_eq!(json["brands"]["european"], serde_json::json!(["KRONE"]));
}
