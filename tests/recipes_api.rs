// tests/recipes_api.rs

//! End-to-end tests of the recipe HTTP API.

mod common;

use axum::http::StatusCode;
use common::{count_rows, send, setup_test_app};
use serde_json::{json, Value};

fn omelette() -> Value {
    json!({
        "name": "Omelette",
        "instructions": "Beat eggs, cook.",
        "ingredients": [{"name": "egg"}, {"name": "salt"}]
    })
}

#[tokio::test]
async fn test_create_returns_created_recipe() {
    let (_temp, _db, app) = setup_test_app();

    let (status, body) = send(&app, "POST", "/api/recipes", Some(omelette())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Omelette",
            "instructions": "Beat eggs, cook.",
            "ingredients": [{"id": 1, "name": "egg"}, {"id": 2, "name": "salt"}]
        })
    );
}

#[tokio::test]
async fn test_create_then_get() {
    let (_temp, _db, app) = setup_test_app();

    let (_, created) = send(&app, "POST", "/api/recipes", Some(omelette())).await;
    let uri = format!("/api/recipes/{}", created["id"]);
    let (status, fetched) = send(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_list_empty() {
    let (_temp, _db, app) = setup_test_app();

    let (status, body) = send(&app, "GET", "/api/recipes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_returns_all_recipes() {
    let (_temp, _db, app) = setup_test_app();

    send(&app, "POST", "/api/recipes", Some(omelette())).await;
    send(
        &app,
        "POST",
        "/api/recipes",
        Some(json!({"name": "Tea", "instructions": "Steep leaves."})),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/recipes", None).await;

    assert_eq!(status, StatusCode::OK);
    let recipes = body.as_array().unwrap();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0]["ingredients"].as_array().unwrap().len(), 2);
    assert_eq!(recipes[1]["name"], "Tea");
    assert_eq!(recipes[1]["ingredients"], json!([]));
}

#[tokio::test]
async fn test_create_missing_name_persists_nothing() {
    let (_temp, db_path, app) = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/recipes",
        Some(json!({"instructions": "Beat eggs, cook.", "ingredients": [{"name": "egg"}]})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to create recipe");
    assert!(body["error"].as_str().unwrap().contains("name"));
    assert_eq!(count_rows(&db_path, "recipe"), 0);
    assert_eq!(count_rows(&db_path, "ingredient"), 0);
}

#[tokio::test]
async fn test_create_with_malformed_json() {
    let (_temp, db_path, app) = setup_test_app();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/recipes")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(count_rows(&db_path, "recipe"), 0);
}

#[tokio::test]
async fn test_partial_update() {
    let (_temp, _db, app) = setup_test_app();
    let (_, created) = send(&app, "POST", "/api/recipes", Some(omelette())).await;
    let uri = format!("/api/recipes/{}", created["id"]);

    let (status, updated) = send(&app, "PUT", &uri, Some(json!({"name": "X"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "X");
    assert_eq!(updated["instructions"], created["instructions"]);
    assert_eq!(updated["ingredients"], created["ingredients"]);

    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_instructions_only() {
    let (_temp, _db, app) = setup_test_app();
    let (_, created) = send(&app, "POST", "/api/recipes", Some(omelette())).await;
    let uri = format!("/api/recipes/{}", created["id"]);

    let (status, updated) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({"instructions": "Whisk eggs, fold, serve."})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Omelette");
    assert_eq!(updated["instructions"], "Whisk eggs, fold, serve.");
}

#[tokio::test]
async fn test_delete_cascades() {
    let (_temp, db_path, app) = setup_test_app();
    let (_, created) = send(&app, "POST", "/api/recipes", Some(omelette())).await;
    let uri = format!("/api/recipes/{}", created["id"]);
    assert_eq!(count_rows(&db_path, "ingredient"), 2);

    let (status, body) = send(&app, "DELETE", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Recipe deleted successfully"}));

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(count_rows(&db_path, "recipe"), 0);
    assert_eq!(count_rows(&db_path, "ingredient"), 0);
}

#[tokio::test]
async fn test_missing_id_is_not_found() {
    let (_temp, db_path, app) = setup_test_app();
    send(&app, "POST", "/api/recipes", Some(omelette())).await;

    let (status, body) = send(&app, "GET", "/api/recipes/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Recipe not found");

    let (status, _) = send(&app, "PUT", "/api/recipes/999", Some(json!({"name": "X"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/recipes/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(count_rows(&db_path, "recipe"), 1);
    assert_eq!(count_rows(&db_path, "ingredient"), 2);

    let (_, fetched) = send(&app, "GET", "/api/recipes/1", None).await;
    assert_eq!(fetched["name"], "Omelette");
}

#[tokio::test]
async fn test_non_numeric_id_is_not_found() {
    let (_temp, _db, app) = setup_test_app();

    let (status, _) = send(&app, "GET", "/api/recipes/omelette", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_welcome_message() {
    let (_temp, _db, app) = setup_test_app();

    let (status, body) = send(&app, "GET", "/api", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Recipe Book"));
}
