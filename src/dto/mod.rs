pub mod patch;
pub mod products;
