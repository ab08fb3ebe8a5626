//! Integration tests for the table-store client, run against an in-process
//! mock of the hosted table API bound to an ephemeral port.

use std::collections::HashMap;

use archive_store::{StoreError, StreamStore};
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

const API_KEY: &str = "test-api-key";

fn sample_rows() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Ep1",
            "description": "Season opener",
            "date": "2024-03-01T18:00:00Z",
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
            "date": "2024-03-08T18:00:00Z",
            "season": "S2",
            "smp": false,
            "tags": ["serious"],
            "youtube_url": "https://youtube.com/watch?v=def456"
        }),
    ]
}

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A well-behaved mock: honors the `id=eq.N` row filter and rejects
/// requests without the expected api key headers.
fn mock_table_store(rows: Vec<Value>) -> Router {
    Router::new().route(
        "/rest/v1/streams",
        get(move |Query(params): Query<HashMap<String, String>>, headers: HeaderMap| {
            let rows = rows.clone();
            async move {
                let key_ok = headers.get("apikey").is_some_and(|v| v == API_KEY)
                    && headers
                        .get("authorization")
                        .is_some_and(|v| v == &format!("Bearer {API_KEY}"));
                if !key_ok {
                    return StatusCode::UNAUTHORIZED.into_response();
                }

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
                Json(Value::Array(filtered)).into_response()
            }
        }),
    )
}

// ---------------------------------------------------------------------------
// fetch_all
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_all_returns_decoded_records() {
    let base = serve(mock_table_store(sample_rows())).await;
    let store = StreamStore::new(base, API_KEY);

    let records = store.fetch_all().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].title, "Ep1");
    assert_eq!(
        records[0].date.date_naive(),
        chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
    assert_eq!(records[0].tags.as_deref(), Some(["funny".to_string()].as_slice()));
    // Optional columns absent from the row decode as None.
    assert_eq!(records[1].description, None);
    assert_eq!(records[1].streamer, None);
}

#[tokio::test]
async fn fetch_all_maps_non_success_status() {
    let router = Router::new().route(
        "/rest/v1/streams",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = serve(router).await;
    let store = StreamStore::new(base, API_KEY);

    let err = store.fetch_all().await.unwrap_err();
    match err {
        StoreError::Status { status } => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_all_maps_decode_failure() {
    let router = Router::new().route("/rest/v1/streams", get(|| async { "not json" }));
    let base = serve(router).await;
    let store = StreamStore::new(base, API_KEY);

    let err = store.fetch_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Decode(_)), "got {err:?}");
}

// ---------------------------------------------------------------------------
// fetch_by_id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_by_id_returns_the_matching_record() {
    let base = serve(mock_table_store(sample_rows())).await;
    let store = StreamStore::new(base, API_KEY);

    let record = store.fetch_by_id(2).await.unwrap().expect("record exists");
    assert_eq!(record.id, 2);
    assert_eq!(record.title, "Ep2");
}

#[tokio::test]
async fn fetch_by_id_absent_record_is_none() {
    let base = serve(mock_table_store(sample_rows())).await;
    let store = StreamStore::new(base, API_KEY);

    assert!(store.fetch_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn fetch_by_id_discards_a_mismatched_row() {
    // A misbehaving store that ignores the row filter and always returns
    // the first row, regardless of the requested id.
    let rows = sample_rows();
    let router = Router::new().route(
        "/rest/v1/streams",
        get(move || {
            let row = rows[0].clone();
            async move { Json(Value::Array(vec![row])) }
        }),
    );
    let base = serve(router).await;
    let store = StreamStore::new(base, API_KEY);

    // The response carries id 1; the request asked for id 2. The row must
    // be discarded rather than rendered for the wrong stream.
    assert!(store.fetch_by_id(2).await.unwrap().is_none());
}

#[tokio::test]
async fn transport_failure_is_reported() {
    // Nothing listens on this port.
    let store = StreamStore::new("http://127.0.0.1:1", API_KEY);
    let err = store.fetch_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Transport(_)), "got {err:?}");
}
