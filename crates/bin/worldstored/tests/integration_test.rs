//! End-to-end smoke tests for the full worldstored stack.
//!
//! Each test spins up the complete application (a temporary data directory,
//! the real JSON file repository, the real service, the real axum router) and
//! exercises the HTTP layer via `tower::ServiceExt::oneshot`; no TCP port is
//! bound.

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;
use worldstore_adapter_http_axum::router::{self, RouterOptions};
use worldstore_adapter_http_axum::state::AppState;
use worldstore_adapter_storage_json_fs::JsonFileWorldRepository;
use worldstore_app::services::world_service::WorldService;

struct TestWorld {
    _dir: TempDir,
    path: PathBuf,
    backup_path: PathBuf,
}

impl TestWorld {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("temporary directory should be created");
        let path = dir.path().join("data").join("world.json");
        let backup_path = dir.path().join("data").join("world.json.bak");
        Self {
            _dir: dir,
            path,
            backup_path,
        }
    }

    fn seeded(value: &Value) -> Self {
        let world = Self::new();
        std::fs::create_dir_all(world.path.parent().unwrap()).unwrap();
        std::fs::write(&world.path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
        world
    }

    /// Build a fully-wired router over this world's document path.
    fn app(&self) -> axum::Router {
        let repo = JsonFileWorldRepository::new(&self.path);
        let state = AppState::new(WorldService::new(repo));
        router::build(state, &RouterOptions::default())
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

fn get_world() -> Request<Body> {
    Request::builder()
        .uri("/api/world")
        .body(Body::empty())
        .unwrap()
}

fn post_world(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/world")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let world = TestWorld::new();

    let resp = world
        .app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// GET /api/world
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_seeded_document() {
    let world = TestWorld::seeded(&json!({"objects": [], "spawners": []}));

    let resp = world.app().oneshot(get_world()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"objects": [], "spawners": []}));
}

#[tokio::test]
async fn should_return_error_when_document_missing() {
    let world = TestWorld::new();

    let resp = world.app().oneshot(get_world()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("failed to read"));
}

#[tokio::test]
async fn should_return_error_when_document_corrupt() {
    let world = TestWorld::new();
    std::fs::create_dir_all(world.path.parent().unwrap()).unwrap();
    std::fs::write(&world.path, "{\"objects\": [").unwrap();

    let resp = world.app().oneshot(get_world()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("failed to parse"));
}

// ---------------------------------------------------------------------------
// POST /api/world
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_save_back_up_and_serve_posted_world() {
    let world = TestWorld::seeded(&json!({"objects": [], "spawners": []}));
    let app = world.app();
    let posted = json!({"objects": [{"id": "a", "instances": [1, 2]}], "spawners": []});

    let resp = app
        .clone()
        .oneshot(post_world(posted.to_string()))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "World data saved successfully"})
    );
    assert_eq!(
        read_json(&world.backup_path),
        json!({"objects": [], "spawners": []})
    );

    let resp = app.oneshot(get_world()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, posted);
}

#[tokio::test]
async fn should_create_document_without_backup_on_first_save() {
    let world = TestWorld::new();

    let resp = world
        .app()
        .oneshot(post_world(r#"{"objects": [], "spawners": []}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(&world.path), json!({"objects": [], "spawners": []}));
    assert!(!world.backup_path.exists());
}

#[tokio::test]
async fn should_keep_same_document_in_both_files_when_saved_twice() {
    let world = TestWorld::seeded(&json!({"objects": [], "spawners": []}));
    let app = world.app();
    let doc = json!({"objects": [{"id": "tree", "instances": []}], "spawners": [{"rate": 2}]});

    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(post_world(doc.to_string()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    assert_eq!(read_json(&world.path), doc);
    assert_eq!(read_json(&world.backup_path), doc);
}

#[tokio::test]
async fn should_leave_document_unchanged_when_body_malformed() {
    let seeded = json!({"objects": [{"id": "keep"}], "spawners": []});
    let world = TestWorld::seeded(&seeded);
    let app = world.app();

    let resp = app
        .clone()
        .oneshot(post_world("this is not json"))
        .await
        .unwrap();

    assert!(!resp.status().is_success());
    let body = body_json(resp).await;
    assert!(body["error"].is_string());
    assert_eq!(read_json(&world.path), seeded);
    assert!(!world.backup_path.exists());

    let resp = app.oneshot(get_world()).await.unwrap();
    assert_eq!(body_json(resp).await, seeded);
}

#[tokio::test]
async fn should_round_trip_unknown_fields_in_order() {
    let world = TestWorld::new();
    let app = world.app();
    let raw = r##"{"version":3,"spawners":[],"objects":[{"instances":[],"id":"z","tint":"#fff"}]}"##;

    let resp = app.clone().oneshot(post_world(raw)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get_world()).await.unwrap();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(std::str::from_utf8(&bytes).unwrap(), raw);
}

#[tokio::test]
async fn should_keep_integers_beyond_64_bits_exact() {
    let world = TestWorld::new();
    let app = world.app();
    let raw = r#"{"objects":[{"id":"a","seed":123456789012345678901234567890}],"spawners":[]}"#;

    let resp = app.clone().oneshot(post_world(raw)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let on_disk = std::fs::read_to_string(&world.path).unwrap();
    assert!(on_disk.contains("\"seed\": 123456789012345678901234567890"));

    let resp = app.oneshot(get_world()).await.unwrap();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(std::str::from_utf8(&bytes).unwrap(), raw);
}

// ---------------------------------------------------------------------------
// Body limit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_answer_json_error_when_body_over_limit() {
    let world = TestWorld::seeded(&json!({"objects": [], "spawners": []}));
    let repo = JsonFileWorldRepository::new(&world.path);
    let app = router::build(
        AppState::new(WorldService::new(repo)),
        &RouterOptions { max_body_bytes: 8 },
    );

    let resp = app
        .oneshot(post_world(r#"{"objects": [{"id": "big"}], "spawners": []}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());
    assert_eq!(read_json(&world.path), json!({"objects": [], "spawners": []}));
}
