use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub products: Vec<Product>,
    pub count: usize,
}

impl From<Vec<Product>> for ProductList {
    fn from(products: Vec<Product>) -> Self {
        Self {
            count: products.len(),
            products,
        }
    }
}

/// Body returned by create and update.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductMessage {
    pub message: String,
    pub product: Product,
}

impl ProductMessage {
    pub fn new(message: impl Into<String>, product: Product) -> Self {
        Self {
            message: message.into(),
            product,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedProduct {
    pub message: String,
    pub id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
