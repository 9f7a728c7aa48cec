//! Integration tests for the JSON APIs.

use serde_json::Value;

mod common;

#[tokio::test]
async fn resolves_sections_over_the_api() {
    let (addr, shutdown) = common::start_gateway().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("http://{addr}/api/section"))
        .query(&[("path", "/onemoney/about")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["section"], "onemoney");

    let body: Value = client
        .get(format!("http://{addr}/api/section"))
        .query(&[("path", "/"), ("host", "d2bd7hfw4pwyvv.cloudfront.net")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["section"], "onemoney");

    // No query at all: path defaults to "/", host to the request's own
    // Host header (loopback), which belongs to no brand.
    let body: Value = client
        .get(format!("http://{addr}/api/section"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["section"], "default");

    shutdown.trigger();
}

#[tokio::test]
async fn form_options_follow_the_resolved_section() {
    let (addr, shutdown) = common::start_gateway().await;
    let client = reqwest::Client::new();

    let options: Value = client
        .get(format!("http://{addr}/api/form-options"))
        .query(&[("path", "/employment")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let values: Vec<&str> = options
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["value"].as_str().unwrap())
        .collect();
    assert!(values.contains(&"BFSI"));

    let options: Value = client
        .get(format!("http://{addr}/api/form-options"))
        .query(&[("path", "/nowhere")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(options.as_array().unwrap().len(), 1);
    assert_eq!(options[0]["value"], "General");

    shutdown.trigger();
}

#[tokio::test]
async fn metadata_api_returns_brand_copy() {
    let (addr, shutdown) = common::start_gateway().await;
    let client = reqwest::Client::new();

    let meta: Value = client
        .get(format!("http://{addr}/api/metadata"))
        .query(&[("path", "/"), ("host", "moneyone.in")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(meta["title"].as_str().unwrap().contains("MoneyOne"));

    shutdown.trigger();
}

#[tokio::test]
async fn health_reports_version_and_traffic() {
    let (addr, shutdown) = common::start_gateway().await;
    let client = reqwest::Client::new();

    // Serve one page so the counter moves.
    client
        .get(format!("http://{addr}/equal/values"))
        .send()
        .await
        .unwrap();

    let health: Value = client
        .get(format!("http://{addr}/healthz"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "operational");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
    assert!(health["requests_served"].as_u64().unwrap() >= 1);

    shutdown.trigger();
}

#[tokio::test]
async fn request_id_attached_and_preserved() {
    let (addr, shutdown) = common::start_gateway().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{addr}/healthz"))
        .send()
        .await
        .unwrap();
    let generated = res.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(!generated.is_empty());

    let res = client
        .get(format!("http://{addr}/healthz"))
        .header("x-request-id", "test-correlation-id")
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers().get("x-request-id").unwrap(),
        "test-correlation-id"
    );

    shutdown.trigger();
}
