// satellitedb-core/src/infrastructure/generator/process.rs

use std::process::Command;
use tracing::{error, info};

use crate::error::SatelliteError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::generator::{GenerationRequest, SchemaGenerator};

pub const DEFAULT_GENERATOR: &str = "schema_generator";

/// Runs an external program as the schema generator.
///
/// The program receives five positional arguments:
/// `db_type db_url target_location file_format objects`, where `objects`
/// is the comma-joined object list. Its stdout and stderr are inherited.
#[derive(Debug, Clone)]
pub struct ProcessGenerator {
    program: String,
}

impl ProcessGenerator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn arguments(request: &GenerationRequest) -> [String; 5] {
        [
            request.db_type.to_string(),
            request.db_url.as_str().to_string(),
            request.target_location.clone(),
            request.file_format.clone(),
            request.db_objects.join(","),
        ]
    }
}

impl Default for ProcessGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATOR)
    }
}

impl SchemaGenerator for ProcessGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<(), SatelliteError> {
        info!(
            "Running schema generator '{}' for {} into {}",
            self.program, request.db_url, request.target_location
        );

        let status = Command::new(&self.program)
            .args(Self::arguments(request))
            .status()
            .map_err(|source| {
                error!("Schema generator could not be started - {}: {}", self.program, source);
                InfrastructureError::GeneratorSpawn {
                    program: self.program.clone(),
                    source,
                }
            })?;

        if !status.success() {
            error!("Schema generator '{}' failed with {}", self.program, status);
            return Err(InfrastructureError::GeneratorFailed {
                program: self.program.clone(),
                status,
            }
            .into());
        }

        info!("Schema generator finished");
        Ok(())
    }
}
