// satellitedb-core/src/domain/config/app.rs

use serde_yaml::Value;
use std::fmt;
use tracing::error;

use super::lookup::{require_string, require_string_list};
use crate::domain::database::DatabaseType;
use crate::domain::error::DomainError;

/// Application settings resolved from `app.yml`.
#[derive(Clone, PartialEq)]
pub struct AppConfig {
    pub db_type: DatabaseType,
    /// Object kinds (tables, views, ...) the generator should include.
    pub db_objects: Vec<String>,
    pub remote_url: String,
    pub access_token: String,
    pub schema_dump_loc: String,
    pub file_format: String,
}

impl AppConfig {
    /// Extracts the six required fields from a loaded document.
    ///
    /// The database type is parsed here so an unsupported tag fails before
    /// the DB config is ever read.
    pub fn from_value(root: &Value) -> Result<Self, DomainError> {
        let db_type_tag = require_string(root, &["db_config", "db_type"])?;
        let db_objects = require_string_list(root, &["db_config", "db_objects"])?;
        let remote_url = require_string(root, &["github_config", "remote_url"])?;
        let access_token = require_string(root, &["github_config", "access_token"])?;
        let schema_dump_loc = require_string(root, &["output", "schema_dump_loc"])?;
        let file_format = require_string(root, &["output", "file_format"])?;

        let db_type = db_type_tag.parse::<DatabaseType>().inspect_err(|_| {
            error!("Unsupported database type - {}", db_type_tag);
        })?;

        Ok(Self {
            db_type,
            db_objects,
            remote_url,
            access_token,
            schema_dump_loc,
            file_format,
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("db_type", &self.db_type)
            .field("db_objects", &self.db_objects)
            .field("remote_url", &self.remote_url)
            .field("access_token", &"****")
            .field("schema_dump_loc", &self.schema_dump_loc)
            .field("file_format", &self.file_format)
            .finish()
    }
}
