// satellitedb-core/src/domain/database.rs

use serde::Serialize;
use std::fmt;

use crate::domain::error::DomainError;

/// Database engines a connection URL can be resolved for. Tags are matched
/// exactly: they double as the section keys of the DB config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    Postgresql,
    Sqlite,
}

impl DatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgresql => "postgresql",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DatabaseType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgresql" => Ok(Self::Postgresql),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(DomainError::UnsupportedDatabaseType(s.to_string())),
        }
    }
}
