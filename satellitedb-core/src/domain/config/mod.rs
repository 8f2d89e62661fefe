// satellitedb-core/src/domain/config/mod.rs

pub mod app;
pub mod db;
pub mod lookup;

pub use app::AppConfig;
pub use db::{ConnectionParams, db_section, sqlite_url};
