use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

use super::patch::Patch;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    /// Must be a JSON number; strings are rejected.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 1.5)]
    pub price: Decimal,
    /// Defaults to 0 when omitted.
    #[serde(default)]
    pub stock: i32,
}

/// Partial update; fields left out of the payload are not touched.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default, deserialize_with = "price_patch")]
    #[schema(value_type = Option<f64>)]
    pub price: Patch<Decimal>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub stock: Patch<i32>,
}

#[derive(Deserialize)]
#[serde(transparent)]
struct PriceNumber(#[serde(with = "rust_decimal::serde::float")] Decimal);

fn price_patch<'de, D>(deserializer: D) -> Result<Patch<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Patch::<PriceNumber>::deserialize(deserializer)?.map(|PriceNumber(price)| price))
}
