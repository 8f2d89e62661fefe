// satellitedb-core/src/domain/url.rs

use std::fmt;
use tracing::{error, warn};
use validator::Validate;

use crate::domain::config::ConnectionParams;
use crate::domain::database::DatabaseType;
use crate::domain::error::DomainError;

const RESERVED_URL_CHARS: [char; 8] = [':', '/', '?', '#', '[', ']', '@', '%'];

/// A resolved connection URL. Never empty once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionUrl(String);

impl ConnectionUrl {
    /// Rejects empty or single-character URLs.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.chars().count() > 1 {
            Ok(Self(raw))
        } else {
            error!("DB url is empty");
            Err(DomainError::EmptyUrl)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The URL with the password of its userinfo part masked.
    pub fn redacted(&self) -> String {
        let raw = self.0.as_str();
        let Some(scheme_end) = raw.find("://") else {
            return raw.to_string();
        };
        let rest = &raw[scheme_end + 3..];
        let Some(at) = rest.rfind('@') else {
            return raw.to_string();
        };
        match rest[..at].find(':') {
            Some(colon) => format!(
                "{}://{}:****{}",
                &raw[..scheme_end],
                &rest[..colon],
                &rest[at..]
            ),
            None => raw.to_string(),
        }
    }
}

impl fmt::Display for ConnectionUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for ConnectionUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConnectionUrl").field(&self.redacted()).finish()
    }
}

/// Builds `<type>://<user>:<password>@<host>:<port>/<database>?<schema>`.
///
/// Fields are substituted verbatim, without percent-encoding. Only types
/// whose URL is assembled from parts are accepted; sqlite URLs are read
/// from config as-is and never reach this function.
pub fn create_db_url(
    db_type: DatabaseType,
    params: &ConnectionParams,
) -> Result<ConnectionUrl, DomainError> {
    match db_type {
        DatabaseType::Postgresql => {}
        DatabaseType::Sqlite => {
            error!("Cannot assemble a URL from parts for database type - {}", db_type);
            return Err(DomainError::UnsupportedDatabaseType(db_type.to_string()));
        }
    }

    if let Err(errors) = params.validate() {
        error!("One of the DB parameter is empty");
        return Err(DomainError::MissingField(errors));
    }

    if [&params.user_name, &params.password]
        .iter()
        .any(|s| s.contains(RESERVED_URL_CHARS))
    {
        warn!("DB credentials contain reserved URL characters, the URL is not encoded");
    }

    ConnectionUrl::new(format!(
        "{}://{}:{}@{}:{}/{}?{}",
        db_type,
        params.user_name,
        params.password,
        params.host_name,
        params.port,
        params.database_name,
        params.schema_name
    ))
}
