// satellitedb-core/src/infrastructure/config/loader.rs

use serde_yaml::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, instrument};

use crate::infrastructure::error::InfrastructureError;

/// Locations of the two configuration files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub app: PathBuf,
    pub db: PathBuf,
}

impl ConfigPaths {
    /// `<base>/config/app.yml` and `<base>/config/db.yml`. A `.yaml` file is
    /// used instead only when the `.yml` one is absent.
    pub fn from_base_dir(base_dir: &Path) -> Self {
        let config_dir = base_dir.join("config");
        Self {
            app: find_config(&config_dir, "app"),
            db: find_config(&config_dir, "db"),
        }
    }
}

fn find_config(config_dir: &Path, stem: &str) -> PathBuf {
    let yml = config_dir.join(format!("{stem}.yml"));
    let yaml = config_dir.join(format!("{stem}.yaml"));
    if !yml.exists() && yaml.exists() {
        yaml
    } else {
        yml
    }
}

/// Loads a YAML file as a generic document.
///
/// Returns `Ok(None)` when the file holds no data. No schema validation
/// happens here; callers extract and check the keys they need.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_cfg(path: &Path) -> Result<Option<Value>, InfrastructureError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            error!("Config file not found - {}", path.display());
            return Err(InfrastructureError::ConfigNotFound(path.to_path_buf()));
        }
        Err(e) => {
            error!("Config file could not be read - {}: {}", path.display(), e);
            return Err(InfrastructureError::Io(e));
        }
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_yaml::from_str(&content).inspect_err(|e| {
        error!("Config file is not valid YAML - {}: {}", path.display(), e);
    })?;

    Ok(match value {
        Value::Null => None,
        value => Some(value),
    })
}
