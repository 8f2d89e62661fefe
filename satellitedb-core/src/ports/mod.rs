// satellitedb-core/src/ports/mod.rs

pub mod generator;

pub use generator::{GenerationRequest, SchemaGenerator};
