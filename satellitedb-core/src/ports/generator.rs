// satellitedb-core/src/ports/generator.rs

// The schema-generation collaborator. Whatever introspects the database and
// writes schema files lives behind this trait; this crate only hands it
// resolved, validated inputs.

use serde::{Serialize, Serializer};

use crate::domain::{ConnectionUrl, DatabaseType};
use crate::error::SatelliteError;

/// Everything the generator receives. All values are present and the URL is
/// non-empty by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub db_type: DatabaseType,
    #[serde(serialize_with = "redacted_url")]
    pub db_url: ConnectionUrl,
    pub target_location: String,
    pub file_format: String,
    pub db_objects: Vec<String>,
}

fn redacted_url<S: Serializer>(url: &ConnectionUrl, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&url.redacted())
}

pub trait SchemaGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<(), SatelliteError>;
}
