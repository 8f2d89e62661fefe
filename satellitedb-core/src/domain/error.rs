// satellitedb-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("{0} config is empty")]
    #[diagnostic(
        code(satellitedb::domain::config_empty),
        help("The file exists but holds no YAML document.")
    )]
    ConfigEmpty(String),

    #[error("Key not found - {0}")]
    #[diagnostic(code(satellitedb::domain::missing_key))]
    MissingConfigKey(String),

    #[error("Invalid value for '{key}': expected {expected}")]
    #[diagnostic(code(satellitedb::domain::invalid_value))]
    InvalidConfigValue { key: String, expected: &'static str },

    #[error("Unsupported database type: {0}")]
    #[diagnostic(
        code(satellitedb::domain::unsupported_db_type),
        help("Supported values for db_config.db_type are 'postgresql' and 'sqlite'.")
    )]
    UnsupportedDatabaseType(String),

    #[error("Database type '{0}' has no entry in the DB config")]
    #[diagnostic(
        code(satellitedb::domain::db_type_not_configured),
        help("Add a top-level '{0}' section to db.yml.")
    )]
    DbTypeNotConfigured(String),

    #[error("One of the DB parameter is empty")]
    #[diagnostic(code(satellitedb::domain::missing_field))]
    MissingField(#[source] validator::ValidationErrors),

    #[error("DB url is empty")]
    #[diagnostic(code(satellitedb::domain::empty_url))]
    EmptyUrl,
}
