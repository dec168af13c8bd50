use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    error::AppResult,
    extract::{JsonBody, ProductId},
    models::Product,
    response::{DeletedProduct, ErrorBody, ProductList, ProductMessage},
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products, newest first", body = ProductList),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<ProductList>> {
    let resp = product_service::list_products(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 400, description = "Invalid product ID", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<Product>> {
    let resp = product_service::get_product(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductMessage),
        (status = 400, description = "Malformed or invalid payload", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ProductMessage>)> {
    let resp = product_service::create_product(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductMessage),
        (status = 400, description = "Malformed ID or invalid payload", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> AppResult<Json<ProductMessage>> {
    let resp = product_service::update_product(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeletedProduct),
        (status = 400, description = "Invalid product ID", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<DeletedProduct>> {
    let resp = product_service::delete_product(&state, id).await?;
    Ok(Json(resp))
}
