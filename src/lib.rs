pub mod db;

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod notifications;
pub mod transactions;
pub mod users;

pub mod config;
pub mod constants;
pub mod errors;
pub mod schema;

pub use errors::{Error, Result};
