//! Integration tests for the project gateway.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_studio(app: axum::Router, pin: &str) -> String {
    let json = body_json(
        post_json(
            app,
            "/api/v1/studios",
            json!({ "pin": pin, "name": "Atelier X" }),
        )
        .await,
    )
    .await;
    json["data"]["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Test: saving a project applies the schema defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_project_applies_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let studio_id = create_studio(app.clone(), "123456").await;

    let response = post_json(
        app,
        "/api/v1/projects",
        json!({
            "pin": "123456",
            "studio_id": studio_id,
            "name": "Urban Loft Conversion",
            "stage": "concept"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let project = body_json(response).await["data"].clone();
    assert_eq!(project["name"], "Urban Loft Conversion");
    assert_eq!(project["stage"], "concept");
    assert_eq!(project["project_type"], "residential");
    assert_eq!(project["studio_id"], studio_id);
}

// ---------------------------------------------------------------------------
// Test: upsert semantics -- stage overwrites, empty fields preserve
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_upsert_overwrites_stage_and_preserves_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let studio_id = create_studio(app.clone(), "123456").await;

    let first = body_json(
        post_json(
            app.clone(),
            "/api/v1/projects",
            json!({
                "pin": "123456",
                "studio_id": studio_id,
                "name": "Urban Loft Conversion",
                "stage": "concept",
                "materials": "oak and steel"
            }),
        )
        .await,
    )
    .await["data"]
        .clone();

    let second = body_json(
        post_json(
            app,
            "/api/v1/projects",
            json!({
                "pin": "123456",
                "studio_id": studio_id,
                "name": "Urban Loft Conversion",
                "stage": "construction",
                "materials": ""
            }),
        )
        .await,
    )
    .await["data"]
        .clone();

    assert_eq!(first["id"], second["id"]);
    // The wizard moved the project forward...
    assert_eq!(second["stage"], "construction");
    // ...without losing the materials entered earlier.
    assert_eq!(second["materials"], "oak and steel");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

// ---------------------------------------------------------------------------
// Test: by-studio lookup is scoped by PIN
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn by_studio_lookup_is_pin_scoped(pool: PgPool) {
    let app = common::build_test_app(pool);
    let studio_id = create_studio(app.clone(), "123456").await;

    post_json(
        app.clone(),
        "/api/v1/projects",
        json!({
            "pin": "123456",
            "studio_id": studio_id,
            "name": "Urban Loft Conversion",
            "stage": "concept"
        }),
    )
    .await;

    let response = get(
        app.clone(),
        &format!("/api/v1/projects/by-studio/{studio_id}?pin=123456"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Urban Loft Conversion");

    // A different session sees nothing.
    let response = get(
        app,
        &format!("/api/v1/projects/by-studio/{studio_id}?pin=654321"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: empty project name is a 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_project_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let studio_id = create_studio(app.clone(), "123456").await;

    let response = post_json(
        app,
        "/api/v1/projects",
        json!({ "pin": "123456", "studio_id": studio_id, "name": "", "stage": "concept" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
