//! Business-rule checks applied to product payloads before any SQL runs.
//!
//! Validation turns a decoded request into a value the store accepts as-is:
//! [`NewProduct`] for creates and [`ProductChanges`] for partial updates.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::dto::{
    patch::Patch,
    products::{CreateProductRequest, UpdateProductRequest},
};

pub const MAX_NAME_CHARS: usize = 100;

/// Fractional digits kept by the `price` column.
pub const PRICE_SCALE: u32 = 2;

/// Largest value `NUMERIC(10, 2)` can hold: 9_999_999_999 at scale 2, split
/// into 32-bit words.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("name must be at most {max} characters", max = MAX_NAME_CHARS)]
    NameTooLong,

    #[error("price must be greater than 0")]
    NonPositivePrice,

    #[error("price must have at most {scale} decimal places", scale = PRICE_SCALE)]
    PriceTooPrecise,

    #[error("price must not exceed {max}", max = MAX_PRICE)]
    PriceTooLarge,

    #[error("stock must not be negative")]
    NegativeStock,

    #[error("{0} must not be null")]
    NullField(&'static str),
}

/// A create payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
}

/// The fields of an update payload that were explicitly provided, already
/// checked. All `None` means a timestamp-only update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock.is_none()
    }
}

pub fn validate_create(request: CreateProductRequest) -> Result<NewProduct, ValidationError> {
    check_name(&request.name)?;
    check_price(request.price)?;
    check_stock(request.stock)?;

    Ok(NewProduct {
        name: request.name,
        price: request.price,
        stock: request.stock,
    })
}

pub fn validate_update(request: UpdateProductRequest) -> Result<ProductChanges, ValidationError> {
    let name = present("name", request.name)?;
    if let Some(name) = &name {
        check_name(name)?;
    }

    let price = present("price", request.price)?;
    if let Some(price) = price {
        check_price(price)?;
    }

    let stock = present("stock", request.stock)?;
    if let Some(stock) = stock {
        check_stock(stock)?;
    }

    Ok(ProductChanges { name, price, stock })
}

fn present<T>(field: &'static str, patch: Patch<T>) -> Result<Option<T>, ValidationError> {
    match patch {
        Patch::Absent => Ok(None),
        Patch::Null => Err(ValidationError::NullField(field)),
        Patch::Value(value) => Ok(Some(value)),
    }
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

fn check_price(price: Decimal) -> Result<(), ValidationError> {
    if price <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice);
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::PriceTooPrecise);
    }
    if price > MAX_PRICE {
        return Err(ValidationError::PriceTooLarge);
    }
    Ok(())
}

fn check_stock(stock: i32) -> Result<(), ValidationError> {
    if stock < 0 {
        return Err(ValidationError::NegativeStock);
    }
    Ok(())
}
