// satellitedb-core/src/infrastructure/generator/dry_run.rs

use std::cell::RefCell;
use std::io::{self, Write};
use tracing::{error, info};

use crate::error::SatelliteError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::generator::{GenerationRequest, SchemaGenerator};

/// Prints the request as pretty JSON instead of generating anything.
/// The password in the URL is masked.
pub struct DryRunGenerator<W: Write> {
    out: RefCell<W>,
}

impl DryRunGenerator<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DryRunGenerator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> SchemaGenerator for DryRunGenerator<W> {
    fn generate(&self, request: &GenerationRequest) -> Result<(), SatelliteError> {
        info!("Dry run, schema generator not invoked");
        let json = serde_json::to_string_pretty(request).map_err(|e| {
            error!("Dry run request could not be serialized - {}", e);
            InfrastructureError::Json(e)
        })?;

        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", json)
            .and_then(|()| out.flush())
            .map_err(|e| {
                error!("Dry run output could not be written - {}", e);
                InfrastructureError::Io(e)
            })?;
        Ok(())
    }
}
