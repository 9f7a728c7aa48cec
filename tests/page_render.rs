//! Integration tests for Host-header-driven page rendering.

mod common;

#[tokio::test]
async fn shell_follows_the_host_header() {
    let (addr, shutdown) = common::start_gateway().await;
    let client = reqwest::Client::new();

    let html = client
        .get(format!("http://{addr}/"))
        .header("host", "onemoney.in")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("data-section=\"onemoney\""));
    assert!(html.contains("Account Aggregator"));
    // onemoney ships its own footer in its layout.
    assert!(!html.contains("<footer"));

    let html = client
        .get(format!("http://{addr}/"))
        .header("host", "equal.in")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("data-section=\"equal\""));
    assert!(html.contains("<footer"));

    shutdown.trigger();
}

#[tokio::test]
async fn footer_links_shortened_on_dedicated_brand_host() {
    let (addr, shutdown) = common::start_gateway().await;
    let client = reqwest::Client::new();

    let html = client
        .get(format!("http://{addr}/"))
        .header("host", "moneyone.in")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("href=\"/products/finpro\""));
    assert!(!html.contains("href=\"/moneyone/products/finpro\""));

    shutdown.trigger();
}

#[tokio::test]
async fn unknown_requests_render_the_default_shell() {
    let (addr, shutdown) = common::start_gateway().await;
    let client = reqwest::Client::new();

    let html = client
        .get(format!("http://{addr}/pricing"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("<title>Welcome</title>"));
    assert!(html.contains("data-section=\"default\""));

    shutdown.trigger();
}

#[tokio::test]
async fn scroll_script_is_served() {
    let (addr, shutdown) = common::start_gateway().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{addr}/assets/scroll-to-hash.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/javascript"
    );
    let body = res.text().await.unwrap();
    assert!(body.contains("maxAttempts"));
    assert!(body.contains("hashchange"));

    shutdown.trigger();
}
