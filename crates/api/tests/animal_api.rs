//! HTTP-level integration tests for the `/animals` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, backed by the in-memory store.

mod common;

use axum::http::header::LOCATION;
use axum::http::{Method, StatusCode};
use common::{body_json, create_animal, delete, get, post_json, put_json, send_json};
use serde_json::json;

fn golden_retriever() -> serde_json::Value {
    json!({
        "species": "DOG",
        "breed": "Golden Retriever",
        "sex": "MALE",
        "approximateAge": 3,
        "size": "LARGE",
        "imageUrl": "http://url.com/golden.jpg",
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_location_and_body() {
    let app = common::build_test_app();
    let response = post_json(app, "/animals", golden_retriever()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers().get(LOCATION).cloned();
    let json = body_json(response).await;

    let id = json["id"].as_i64().unwrap();
    assert_eq!(location.unwrap(), format!("/animals/{id}").as_str());
    assert_eq!(json["species"], "DOG");
    assert_eq!(json["breed"], "Golden Retriever");
    assert_eq!(json["sex"], "MALE");
    assert_eq!(json["approximateAge"], 3);
    assert_eq!(json["size"], "LARGE");
    assert_eq!(json["imageUrl"], "http://url.com/golden.jpg");
}

#[tokio::test]
async fn create_normalizes_enum_case() {
    let cases = [
        ("male", "small", "MALE", "SMALL"),
        ("Female", "Medium", "FEMALE", "MEDIUM"),
        ("mAlE", "lArGe", "MALE", "LARGE"),
        ("FEMALE", "SMALL", "FEMALE", "SMALL"),
    ];

    let app = common::build_test_app();
    for (sex, size, expected_sex, expected_size) in cases {
        let response = post_json(
            app.clone(),
            "/animals",
            json!({"species": "CAT", "sex": sex, "size": size}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED, "sex={sex} size={size}");

        let json = body_json(response).await;
        assert_eq!(json["sex"], expected_sex);
        assert_eq!(json["size"], expected_size);
    }
}

#[tokio::test]
async fn create_with_empty_body_persists_empty_record() {
    let app = common::build_test_app();
    let response = post_json(app, "/animals", json!({})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert!(json["species"].is_null());
    assert!(json["sex"].is_null());
    assert!(json["size"].is_null());
}

#[tokio::test]
async fn create_with_invalid_sex_returns_400_naming_value() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/animals",
        json!({"species": "DOG", "sex": "macho"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_ENUM_VALUE");
    assert_eq!(json["error"], "Invalid sex: macho");

    // Nothing was persisted.
    let list = body_json(get(app, "/animals").await).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn create_with_invalid_size_returns_400_naming_value() {
    let app = common::build_test_app();
    let response = post_json(app, "/animals", json!({"size": "Enormous"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid size: Enormous");
}

#[tokio::test]
async fn create_with_malformed_json_is_client_error() {
    let app = common::build_test_app();
    let response = send_json(app, Method::POST, "/animals", "{not json".to_string()).await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn create_with_wrong_field_type_is_client_error() {
    let app = common::build_test_app();
    let response = post_json(app, "/animals", json!({"approximateAge": "three"})).await;
    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// List / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_empty_returns_empty_array() {
    let app = common::build_test_app();
    let response = get(app, "/animals").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn list_returns_all_in_creation_order() {
    let app = common::build_test_app();
    let first = create_animal(&app, golden_retriever()).await;
    let second = create_animal(&app, json!({"species": "CAT"})).await;

    let response = get(app, "/animals").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["id"], first);
    assert_eq!(arr[1]["id"], second);
    assert_eq!(arr[1]["species"], "CAT");
}

#[tokio::test]
async fn get_by_id_returns_record() {
    let app = common::build_test_app();
    let id = create_animal(&app, golden_retriever()).await;

    let response = get(app, &format!("/animals/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["breed"], "Golden Retriever");
}

#[tokio::test]
async fn get_nonexistent_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/animals/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Animal with id 999 not found");
}

#[tokio::test]
async fn get_with_non_numeric_id_is_400() {
    let app = common::build_test_app();
    let response = get(app, "/animals/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn partial_update_leaves_absent_fields_unchanged() {
    let app = common::build_test_app();
    let id = create_animal(&app, golden_retriever()).await;

    let response = put_json(app.clone(), &format!("/animals/{id}"), json!({"species": "CAT"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["species"], "CAT");
    assert_eq!(json["breed"], "Golden Retriever");
    assert_eq!(json["sex"], "MALE");
    assert_eq!(json["approximateAge"], 3);
    assert_eq!(json["size"], "LARGE");
    assert_eq!(json["imageUrl"], "http://url.com/golden.jpg");

    // The change is persisted.
    let stored = body_json(get(app, &format!("/animals/{id}")).await).await;
    assert_eq!(stored, json);
}

#[tokio::test]
async fn update_normalizes_enums() {
    let app = common::build_test_app();
    let id = create_animal(&app, golden_retriever()).await;

    let response = put_json(
        app,
        &format!("/animals/{id}"),
        json!({"sex": "female", "size": "medium", "approximateAge": 4}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["sex"], "FEMALE");
    assert_eq!(json["size"], "MEDIUM");
    assert_eq!(json["approximateAge"], 4);
    assert_eq!(json["species"], "DOG");
}

#[tokio::test]
async fn update_with_null_fields_leaves_them_unchanged() {
    let app = common::build_test_app();
    let id = create_animal(&app, golden_retriever()).await;

    let response = put_json(
        app,
        &format!("/animals/{id}"),
        json!({"breed": null, "size": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["breed"], "Golden Retriever");
    assert_eq!(json["size"], "LARGE");
}

#[tokio::test]
async fn update_nonexistent_returns_404() {
    let app = common::build_test_app();
    let response = put_json(app, "/animals/999", json!({"species": "CAT"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_nonexistent_with_invalid_enum_returns_404() {
    let app = common::build_test_app();
    let response = put_json(app, "/animals/999", json!({"sex": "unknown"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_invalid_enum_returns_400_and_keeps_record() {
    let app = common::build_test_app();
    let id = create_animal(&app, golden_retriever()).await;
    let before = body_json(get(app.clone(), &format!("/animals/{id}")).await).await;

    let response = put_json(
        app.clone(),
        &format!("/animals/{id}"),
        json!({"species": "CAT", "size": "tiny"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid size: tiny");

    let after = body_json(get(app, &format!("/animals/{id}")).await).await;
    assert_eq!(after, before);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_returns_confirmation_and_removes_record() {
    let app = common::build_test_app();
    let id = create_animal(&app, golden_retriever()).await;

    let response = delete(app.clone(), &format!("/animals/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Animal deleted successfully"})
    );

    // Subsequent GET should 404.
    let response = get(app, &format!("/animals/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_nonexistent_returns_404_without_mutating_store() {
    let app = common::build_test_app();
    create_animal(&app, golden_retriever()).await;

    let response = delete(app.clone(), "/animals/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let list = body_json(get(app, "/animals").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_get_delete_get_lifecycle() {
    let app = common::build_test_app();

    let response = post_json(app.clone(), "/animals", json!({"species": "DOG", "sex": "male"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["sex"], "MALE");
    let id = created["id"].as_i64().unwrap();

    let response = get(app.clone(), &format!("/animals/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let response = delete(app.clone(), &format!("/animals/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, &format!("/animals/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
