// satellitedb-core/src/application/mod.rs

pub mod generate;

pub use generate::{resolve_db_url, run_generation};
