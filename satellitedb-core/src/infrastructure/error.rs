// satellitedb-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(satellitedb::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(satellitedb::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Config file not found - {}", .0.display())]
    #[diagnostic(code(satellitedb::infra::config_missing))]
    ConfigNotFound(PathBuf),

    // --- OUTPUT ---
    #[error("JSON Serialization Error: {0}")]
    #[diagnostic(code(satellitedb::infra::json))]
    Json(#[from] serde_json::Error),

    // --- SCHEMA GENERATOR PROCESS ---
    #[error("Could not start schema generator '{program}': {source}")]
    #[diagnostic(
        code(satellitedb::infra::generator_spawn),
        help("Is the generator installed and on PATH? See --generator.")
    )]
    GeneratorSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema generator '{program}' failed with {status}")]
    #[diagnostic(code(satellitedb::infra::generator_failed))]
    GeneratorFailed { program: String, status: ExitStatus },
}
