// SPDX-License-Identifier: Apache-2.0

//! JSON file persistence for metrics and report mappings.

use crate::domain::{ConfigMap, Result, UtilError};
use crate::ops::yaml::value_kind;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Serializes a mapping to pretty-printed JSON and writes it to `path`,
/// overwriting any existing file.
///
/// Output uses 4-space indentation. Logs an info event on completion.
///
/// # Examples
///
/// ```no_run
/// use pipekit::domain::ConfigMap;
/// use pipekit::ops::write_json;
///
/// # fn main() -> pipekit::domain::Result<()> {
/// let mut scores = ConfigMap::new();
/// scores.insert("accuracy", 0.94);
/// write_json("artifacts/scores.json", &scores)?;
/// # Ok(())
/// # }
/// ```
pub fn write_json<P: AsRef<Path>>(path: P, data: &ConfigMap) -> Result<()> {
    let path = path.as_ref();
    let path_display = path.display().to_string();

    // serde_json::to_string_pretty is fixed at two spaces; reports use four.
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut ser)
        .map_err(|e| UtilError::format(&path_display, "failed to serialize JSON", e))?;

    fs::write(path, buf)?;
    tracing::info!("JSON file saved at: {}", path_display);
    Ok(())
}

/// Parses a JSON file and returns its contents as a [`ConfigMap`].
///
/// The document root must be an object; invalid JSON or a non-object root
/// fails with [`UtilError::Format`], and a missing file fails with
/// [`UtilError::NotFound`]. Logs an info event on success.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<ConfigMap> {
    let path = path.as_ref();
    let path_display = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            UtilError::not_found(&path_display)
        } else {
            UtilError::Io(e)
        }
    })?;

    let value: Value = serde_json::from_str(&content)
        .map_err(|e| UtilError::format(&path_display, "failed to parse JSON", e))?;

    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(UtilError::format_msg(
                &path_display,
                format!("document root is {}, expected an object", value_kind(&other)),
            ));
        }
    };

    tracing::info!("JSON file loaded from: {}", path_display);
    Ok(ConfigMap::from(map))
}
