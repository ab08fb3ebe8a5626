use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use archive_store::StreamStore;
use archive_web::config::ServerConfig;
use archive_web::routes;
use archive_web::state::AppState;
use axum::body::Body;
use axum::extract::Query;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Fixture rows matching the hosted `streams` table shape.
#[allow(dead_code)]
pub fn sample_rows() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Ep1",
            "description": "Season opener",
            "date": "2024-03-01T23:00:00Z",
            "season": "S1",
            "streamer": "grian",
            "smp": true,
            "subtitles": false,
            "tags": ["funny"],
            "youtube_url": "https://youtube.com/watch?v=abc123"
        }),
        json!({
            "id": 2,
            "title": "Ep2",
            "description": "The rivals return",
            "date": "2024-03-08T18:00:00Z",
            "season": "S2",
            "streamer": "scar",
            "smp": false,
            "subtitles": true,
            "tags": ["serious"],
            "youtube_url": "https://youtube.com/watch?v=def456"
        }),
        json!({
            "id": 3,
            "title": "Build Battle",
            "date": "2024-04-02T18:00:00Z",
            "youtube_url": "https://youtube.com/watch?v=ghi789"
        }),
    ]
}

/// Serve an in-process mock of the hosted table API and return its base
/// URL. The mock honors the `id=eq.N` row filter.
pub async fn mock_store(rows: Vec<Value>) -> String {
    let router = Router::new().route(
        "/rest/v1/streams",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let rows = rows.clone();
            async move {
                let filtered: Vec<Value> = match params.get("id") {
                    Some(filter) => rows
                        .into_iter()
                        .filter(|row| {
                            filter
                                .strip_prefix("eq.")
                                .is_some_and(|want| row["id"].to_string() == want)
                        })
                        .collect(),
                    None => rows,
                };
                Json(Value::Array(filtered))
            }
        }),
    );
    serve(router).await
}

/// Serve a table-store mock that fails every request with a 500.
#[allow(dead_code)]
pub async fn failing_store() -> String {
    let router = Router::new().route(
        "/rest/v1/streams",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR.into_response() }),
    );
    serve(router).await
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Build a test `ServerConfig` pointing at the given mock store.
pub fn test_config(store_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_url: store_url.to_string(),
        store_api_key: "test-api-key".to_string(),
    }
}

/// Build the full application router with all middleware layers, backed by
/// a mock store serving `rows`.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub async fn build_test_app(rows: Vec<Value>) -> Router {
    let base_url = mock_store(rows).await;
    build_app_against(&base_url)
}

/// Build the application router against an arbitrary store base URL
/// (e.g. a failing mock).
#[allow(dead_code)]
pub fn build_app_against(store_url: &str) -> Router {
    let config = test_config(store_url);
    let store = StreamStore::new(config.store_url.clone(), config.store_api_key.clone());

    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::archive::router())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Issue a GET request against the in-process app.
pub async fn get_page(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body into JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
