pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod extract;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod update_clause;
pub mod validation;
