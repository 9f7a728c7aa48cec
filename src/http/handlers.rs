//! Request handlers.

use std::sync::atomic::Ordering;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, Uri};
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::request::X_REQUEST_ID;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::render::assets::SCROLL_TO_HASH_JS;
use crate::render::render_page;
use crate::sections::{self, FormOption, SectionId, SectionMetadata};

/// Query parameters shared by the section APIs. Both are optional: `path`
/// falls back to `/`, `host` to the request's own Host header.
#[derive(Deserialize)]
pub struct SectionQuery {
    pub path: Option<String>,
    pub host: Option<String>,
}

#[derive(Serialize)]
pub struct SectionResponse {
    pub section: SectionId,
    pub path: String,
    pub host: String,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
    pub requests_served: u64,
}

fn request_host(headers: &HeaderMap) -> String {
    headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn effective_inputs(query: SectionQuery, headers: &HeaderMap) -> (String, String) {
    let path = query.path.unwrap_or_else(|| "/".to_string());
    let host = query.host.unwrap_or_else(|| request_host(headers));
    (path, host)
}

pub async fn get_section(
    Query(query): Query<SectionQuery>,
    headers: HeaderMap,
) -> Json<SectionResponse> {
    let (path, host) = effective_inputs(query, &headers);
    let section = sections::resolve(&path, &host);

    Json(SectionResponse { section, path, host })
}

pub async fn get_form_options(
    Query(query): Query<SectionQuery>,
    headers: HeaderMap,
) -> Json<&'static [FormOption]> {
    let (path, host) = effective_inputs(query, &headers);
    Json(sections::form_options(&path, &host))
}

pub async fn get_metadata(
    Query(query): Query<SectionQuery>,
    headers: HeaderMap,
) -> Json<Option<&'static SectionMetadata>> {
    let (path, host) = effective_inputs(query, &headers);
    Json(sections::metadata(&path, &host))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "operational",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        requests_served: state.requests_served.load(Ordering::Relaxed),
    })
}

pub async fn scroll_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        SCROLL_TO_HASH_JS,
    )
}

/// Catch-all page handler: resolve the section for the request and serve
/// the section-aware shell.
pub async fn page(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Html<String> {
    let start = Instant::now();
    let path = uri.path();
    let host = request_host(&headers);

    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let section = sections::resolve(path, &host);
    tracing::debug!(
        request_id = %request_id,
        path = %path,
        host = %host,
        section = %section,
        "Rendering page shell"
    );

    let html = render_page(path, &host);

    state.requests_served.fetch_add(1, Ordering::Relaxed);
    metrics::record_request(section, 200, start);

    Html(html)
}
