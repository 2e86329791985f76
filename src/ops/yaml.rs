// SPDX-License-Identifier: Apache-2.0

//! YAML configuration reading.
//!
//! This module reads pipeline configuration files written in YAML and
//! returns them as typed mappings.

use crate::domain::{ConfigMap, Result, UtilError};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Describes a JSON value's kind for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Reads a YAML file and returns its contents as a [`ConfigMap`].
///
/// The document root must be a non-empty mapping; anything else (including
/// an empty or missing file) fails with [`UtilError::Format`]. Logs an info
/// event on success.
///
/// # Examples
///
/// ```no_run
/// use pipekit::ops::read_yaml;
///
/// # fn main() -> pipekit::domain::Result<()> {
/// let config = read_yaml("params.yaml")?;
/// let epochs = config.get_i64("epochs");
/// # Ok(())
/// # }
/// ```
pub fn read_yaml<P: AsRef<Path>>(path: P) -> Result<ConfigMap> {
    let path = path.as_ref();
    let path_display = path.display().to_string();

    let content = fs::read_to_string(path)
        .map_err(|e| UtilError::format(&path_display, "failed to read YAML file", e))?;

    let value: Value = serde_yaml::from_str(&content)
        .map_err(|e| UtilError::format(&path_display, "failed to parse YAML", e))?;

    let map = match value {
        Value::Object(map) => map,
        Value::Null => {
            return Err(UtilError::format_msg(&path_display, "YAML file is empty"));
        }
        other => {
            return Err(UtilError::format_msg(
                &path_display,
                format!("document root is {}, expected a mapping", value_kind(&other)),
            ));
        }
    };

    if map.is_empty() {
        return Err(UtilError::format_msg(&path_display, "YAML file is empty"));
    }

    tracing::info!("YAML file loaded successfully: {}", path_display);
    Ok(ConfigMap::from(map))
}
