// satellitedb-core/src/domain/mod.rs

pub mod config;
pub mod database;
pub mod error;
pub mod url;

pub use database::DatabaseType;
pub use url::{ConnectionUrl, create_db_url};
