//! Requests rejected before any SQL runs. These use a pool that cannot
//! connect, so a passing test also proves storage was never reached.

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use common::{delete, get, lazy_app, post_json, put_json, send_request};
use serde_json::json;

#[tokio::test]
async fn non_numeric_id_is_400() {
    let (status, json) = get(lazy_app(), "/products/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid product ID");
}

#[tokio::test]
async fn zero_and_negative_ids_are_400() {
    for uri in ["/products/0", "/products/-4"] {
        let (status, _) = get(lazy_app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }

    let (status, _) = delete(lazy_app(), "/products/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = put_json(lazy_app(), "/products/x", json!({"price": 2.0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_empty_name_is_400() {
    let (status, json) = post_json(lazy_app(), "/products", json!({"name": "", "price": 1.5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "name must not be empty");
}

#[tokio::test]
async fn create_with_non_positive_price_is_400() {
    let (status, json) = post_json(
        lazy_app(),
        "/products",
        json!({"name": "Pen", "price": 0, "stock": 3}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "price must be greater than 0");
}

#[tokio::test]
async fn create_with_negative_stock_is_400() {
    let (status, json) = post_json(
        lazy_app(),
        "/products",
        json!({"name": "Pen", "price": 1.5, "stock": -1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "stock must not be negative");
}

#[tokio::test]
async fn create_missing_required_field_is_400() {
    let (status, json) = post_json(lazy_app(), "/products", json!({"name": "Pen"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("price"));
}

#[tokio::test]
async fn unparseable_body_is_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/products")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = send_request(lazy_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn update_with_invalid_field_is_400_before_existence_check() {
    let (status, json) = put_json(lazy_app(), "/products/1", json!({"stock": -2})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "stock must not be negative");

    let (status, json) = put_json(lazy_app(), "/products/1", json!({"name": null})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "name must not be null");
}

#[tokio::test]
async fn storage_failure_is_a_generic_500() {
    let (status, json) = get(lazy_app(), "/products").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal Server Error");
}

#[tokio::test]
async fn price_sent_as_string_is_400() {
    let (status, json) = post_json(
        lazy_app(),
        "/products",
        json!({"name": "Pen", "price": "1.5"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("price"));

    let (status, _) = put_json(lazy_app(), "/products/1", json!({"price": "2.0"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_body_is_413() {
    let name = "x".repeat(3 * 1024 * 1024);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/products")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"name": name, "price": 1.5}).to_string()))
        .unwrap();
    let (status, json) = send_request(lazy_app(), request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(json["error"].is_string());
}
