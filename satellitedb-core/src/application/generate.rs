// satellitedb-core/src/application/generate.rs
//
// USE CASE: resolve configuration and hand the schema generator its inputs.
//
// Strictly linear: app config -> app fields -> db config -> db URL ->
// generator. The first failure is logged once and returned; nothing is
// retried.

use serde_yaml::Value;
use tracing::{error, info, instrument};

use crate::domain::config::{AppConfig, ConnectionParams, db_section, sqlite_url};
use crate::domain::error::DomainError;
use crate::domain::{ConnectionUrl, DatabaseType, create_db_url};
use crate::error::SatelliteError;
use crate::infrastructure::config::{ConfigPaths, load_cfg};
use crate::ports::generator::{GenerationRequest, SchemaGenerator};

#[instrument(skip_all)]
pub fn run_generation(
    paths: &ConfigPaths,
    generator: &dyn SchemaGenerator,
) -> Result<GenerationRequest, SatelliteError> {
    info!("Loading app config from file - {}", paths.app.display());
    let app_doc = load_cfg(&paths.app)?.ok_or_else(|| empty_config("App"))?;
    let app = AppConfig::from_value(&app_doc)?;

    info!("Loading database config from file - {}", paths.db.display());
    let db_doc = load_cfg(&paths.db)?.ok_or_else(|| empty_config("DB"))?;

    info!("Creating DB URL");
    let db_url = resolve_db_url(app.db_type, &db_doc)?;

    let request = GenerationRequest {
        db_type: app.db_type,
        db_url,
        target_location: app.schema_dump_loc,
        file_format: app.file_format,
        db_objects: app.db_objects,
    };

    generator.generate(&request)?;
    Ok(request)
}

/// sqlite reads `db_url` verbatim; other types assemble it from their
/// connection section.
pub fn resolve_db_url(db_type: DatabaseType, db_cfg: &Value) -> Result<ConnectionUrl, DomainError> {
    db_section(db_cfg, db_type)?;

    match db_type {
        DatabaseType::Sqlite => ConnectionUrl::new(sqlite_url(db_cfg)?),
        DatabaseType::Postgresql => {
            let params = ConnectionParams::from_section(db_cfg, db_type)?;
            create_db_url(db_type, &params)
        }
    }
}

fn empty_config(which: &str) -> DomainError {
    error!("{} config is empty", which);
    DomainError::ConfigEmpty(which.to_string())
}
