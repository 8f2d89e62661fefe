// satellitedb-core/src/domain/config/lookup.rs
//
// Nested key lookups over a loaded YAML document. Every failure is logged
// once, at the point it is detected, with the dotted key path.

use serde_yaml::Value;
use tracing::error;

use crate::domain::error::DomainError;

/// Walks `path` from `root`, failing on the first absent key.
pub fn require<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Value, DomainError> {
    let mut current = root;
    for (depth, key) in path.iter().enumerate() {
        current = match current.get(*key) {
            Some(next) => next,
            None => {
                let missing = path[..=depth].join(".");
                error!("Key not found - {}", missing);
                return Err(DomainError::MissingConfigKey(missing));
            }
        };
    }
    Ok(current)
}

/// Textual form of a scalar, verbatim. `null` reads as the empty string;
/// sequences and mappings have no textual form.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) => None,
        Value::Tagged(tagged) => scalar_text(&tagged.value),
    }
}

/// A required, non-null scalar.
pub fn require_string(root: &Value, path: &[&str]) -> Result<String, DomainError> {
    let value = require(root, path)?;
    match value {
        Value::Null => Err(invalid(path, "a non-null scalar")),
        other => scalar_text(other).ok_or_else(|| invalid(path, "a scalar value")),
    }
}

/// A required sequence of non-null scalars.
pub fn require_string_list(root: &Value, path: &[&str]) -> Result<Vec<String>, DomainError> {
    let Value::Sequence(items) = require(root, path)? else {
        return Err(invalid(path, "a list of strings"));
    };

    items
        .iter()
        .map(|item| match item {
            Value::Null => None,
            other => scalar_text(other),
        })
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| invalid(path, "a list of strings"))
}

pub(crate) fn invalid(path: &[&str], expected: &'static str) -> DomainError {
    let key = path.join(".");
    error!("Invalid value for key - {} (expected {})", key, expected);
    DomainError::InvalidConfigValue { key, expected }
}
