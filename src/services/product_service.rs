use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    error::{AppError, AppResult},
    models::Product,
    response::{DeletedProduct, ProductList, ProductMessage},
    state::AppState,
    update_clause::UpdateClause,
    validation::{validate_create, validate_update},
};

pub async fn list_products(state: &AppState) -> AppResult<ProductList> {
    let products = state.products.list_all().await?;
    Ok(ProductList::from(products))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    Ok(state.products.get_by_id(id).await?)
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ProductMessage> {
    let new_product = validate_create(payload)?;
    let product = state.products.create(&new_product).await?;

    Ok(ProductMessage::new("Product created successfully", product))
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<ProductMessage> {
    let changes = validate_update(payload)?;

    if !state.products.exists_by_id(id).await? {
        return Err(AppError::NotFound);
    }

    if changes.is_empty() {
        tracing::debug!(product_id = id, "no fields supplied, refreshing updated_at only");
    }

    let clause = UpdateClause::new(changes);
    let product = state.products.update(id, &clause).await?;

    Ok(ProductMessage::new("Product updated successfully", product))
}

pub async fn delete_product(state: &AppState, id: i32) -> AppResult<DeletedProduct> {
    if !state.products.exists_by_id(id).await? {
        return Err(AppError::NotFound);
    }

    let id = state.products.delete(id).await?;

    Ok(DeletedProduct {
        message: "Product deleted successfully".to_string(),
        id,
    })
}
