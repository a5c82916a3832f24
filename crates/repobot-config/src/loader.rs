//! Loading configuration documents into a [`ConfigStore`].
//!
//! The document is plain JSON. Keys are taken as written: they are expected
//! to have been sanitized by whatever produced the file.

use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::store::ConfigStore;

/// Parse a configuration document from a JSON string.
///
/// An empty (or whitespace-only) document yields an empty store.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the text is not valid JSON, or
/// [`ConfigError::NotAnObject`] if the top-level value is not an object.
pub fn from_json_str(content: &str) -> Result<ConfigStore> {
    if content.trim().is_empty() {
        return Ok(ConfigStore::default());
    }

    let config: Value = serde_json::from_str(content).map_err(ConfigError::Parse)?;
    into_store(config)
}

/// Read and parse a configuration document from `reader`.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if reading fails, otherwise the same errors
/// as [`from_json_str`].
pub fn from_reader<R: Read>(mut reader: R) -> Result<ConfigStore> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    from_json_str(&content)
}

/// Load a configuration document from the file at `path`.
///
/// Unlike an absent entry inside the document, a missing file is an error:
/// the caller asked for this specific file.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file cannot be read, otherwise the
/// same errors as [`from_json_str`].
pub fn load_config(path: &Path) -> Result<ConfigStore> {
    debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)?;
    let store = from_json_str(&content)?;
    debug!(repos = store.list_repos().len(), "config loaded");
    Ok(store)
}

fn into_store(config: Value) -> Result<ConfigStore> {
    if !config.is_object() {
        return Err(ConfigError::NotAnObject {
            found: json_type_name(&config),
        });
    }
    Ok(ConfigStore::new(config))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
