// satellitedb-core/src/domain/config/db.rs

use serde_yaml::Value;
use std::fmt;
use tracing::error;
use validator::Validate;

use super::lookup::{invalid, require, scalar_text};
use crate::domain::database::DatabaseType;
use crate::domain::error::DomainError;

/// Connection fields of one `db.yml` section, as text.
#[derive(Clone, PartialEq, Validate)]
pub struct ConnectionParams {
    #[validate(length(min = 1))]
    pub host_name: String,
    #[validate(length(min = 1))]
    pub port: String,
    #[validate(length(min = 1))]
    pub database_name: String,
    #[validate(length(min = 1))]
    pub schema_name: String,
    #[validate(length(min = 1))]
    pub user_name: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl ConnectionParams {
    /// Reads the six connection keys under `db_cfg[db_type]`.
    ///
    /// Absent keys fail here; present-but-empty values are left for the URL
    /// builder to reject.
    pub fn from_section(db_cfg: &Value, db_type: DatabaseType) -> Result<Self, DomainError> {
        let field = |key: &str| -> Result<String, DomainError> {
            let path = [db_type.as_str(), key];
            scalar_text(require(db_cfg, &path)?).ok_or_else(|| invalid(&path, "a scalar value"))
        };

        Ok(Self {
            host_name: field("host_name")?,
            port: field("port")?,
            database_name: field("database_name")?,
            schema_name: field("schema_name")?,
            user_name: field("user_name")?,
            password: field("password")?,
        })
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host_name", &self.host_name)
            .field("port", &self.port)
            .field("database_name", &self.database_name)
            .field("schema_name", &self.schema_name)
            .field("user_name", &self.user_name)
            .field("password", &"****")
            .finish()
    }
}

/// The `db_cfg[db_type]` section, or a descriptive error when the type has
/// no entry at all.
pub fn db_section(db_cfg: &Value, db_type: DatabaseType) -> Result<&Value, DomainError> {
    db_cfg.get(db_type.as_str()).ok_or_else(|| {
        error!("No DB config section for database type - {}", db_type);
        DomainError::DbTypeNotConfigured(db_type.to_string())
    })
}

/// `db_cfg["sqlite"]["db_url"]`, verbatim. Shape is not validated.
pub fn sqlite_url(db_cfg: &Value) -> Result<String, DomainError> {
    let path = [DatabaseType::Sqlite.as_str(), "db_url"];
    scalar_text(require(db_cfg, &path)?).ok_or_else(|| invalid(&path, "a scalar value"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DB_YAML: &str = r#"
postgresql:
  host_name: localhost
  port: 5432
  database_name: mydb
  schema_name: public
  user_name: u
  password: p
sqlite:
  db_url: sqlite:///var/data/app.db
"#;

    #[test]
    fn test_reads_postgres_section() -> anyhow::Result<()> {
        let root: Value = serde_yaml::from_str(DB_YAML)?;
        let params = ConnectionParams::from_section(&root, DatabaseType::Postgresql)?;

        assert_eq!(params.host_name, "localhost");
        assert_eq!(params.port, "5432");
        assert_eq!(params.schema_name, "public");
        assert!(params.validate().is_ok());
        Ok(())
    }

    #[test]
    fn test_missing_connection_key() -> anyhow::Result<()> {
        let yaml = DB_YAML.replace("  schema_name: public\n", "");
        let root: Value = serde_yaml::from_str(&yaml)?;

        let err = ConnectionParams::from_section(&root, DatabaseType::Postgresql);
        assert!(matches!(
            err,
            Err(DomainError::MissingConfigKey(ref k)) if k == "postgresql.schema_name"
        ));
        Ok(())
    }

    #[test]
    fn test_null_field_reads_empty_and_fails_validation() -> anyhow::Result<()> {
        let yaml = DB_YAML.replace("password: p", "password: ~");
        let root: Value = serde_yaml::from_str(&yaml)?;

        let params = ConnectionParams::from_section(&root, DatabaseType::Postgresql)?;
        assert_eq!(params.password, "");
        assert!(params.validate().is_err());
        assert!(format!("{:?}", params).contains("****"));
        Ok(())
    }

    #[test]
    fn test_db_section_absent() -> anyhow::Result<()> {
        let root: Value = serde_yaml::from_str("sqlite:\n  db_url: sqlite:///x.db\n")?;
        let err = db_section(&root, DatabaseType::Postgresql);
        assert!(matches!(err, Err(DomainError::DbTypeNotConfigured(ref t)) if t == "postgresql"));
        Ok(())
    }

    #[test]
    fn test_sqlite_url_is_verbatim() -> anyhow::Result<()> {
        let root: Value = serde_yaml::from_str(DB_YAML)?;
        assert_eq!(sqlite_url(&root)?, "sqlite:///var/data/app.db");
        Ok(())
    }
}
