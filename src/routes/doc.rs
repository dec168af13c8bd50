use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    models::Product,
    response::{DeletedProduct, ErrorBody, ProductList, ProductMessage},
    routes::{health, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product
    ),
    components(
        schemas(
            Product,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            ProductMessage,
            DeletedProduct,
            ErrorBody,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
