// satellitedb-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// The schema-generation collaborator seam.
pub mod ports;

// 2. Domain
// Database types, config extraction, URL construction.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// YAML loading, log file, external generator process.
pub mod infrastructure;

// 4. Application (Use Cases)
// The generation flow: load -> extract -> build URL -> delegate.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::SatelliteError;
