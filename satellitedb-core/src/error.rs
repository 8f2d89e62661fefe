// satellitedb-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SatelliteError {
    // --- DOMAIN ERRORS (config shape, URL construction) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Parsing, external process) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl From<std::io::Error> for SatelliteError {
    fn from(err: std::io::Error) -> Self {
        SatelliteError::Infrastructure(InfrastructureError::Io(err))
    }
}
