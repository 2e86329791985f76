// SPDX-License-Identifier: Apache-2.0

//! Binary artifact persistence.
//!
//! This module serializes arbitrary in-memory values (trained models,
//! preprocessing state) to binary artifact files and back. The on-disk
//! format is bincode: opaque, not portable across differing layouts, but
//! round-trippable within one implementation.

use crate::domain::{Result, UtilError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serializes `data` to a binary artifact file, overwriting any existing
/// file.
///
/// Logs an info event on completion. A codec failure is reported as
/// [`UtilError::Corruption`].
///
/// # Examples
///
/// ```no_run
/// use pipekit::ops::write_binary;
///
/// # fn main() -> pipekit::domain::Result<()> {
/// let weights: Vec<f64> = vec![0.1, 0.2, 0.3];
/// write_binary(&weights, "artifacts/weights.bin")?;
/// # Ok(())
/// # }
/// ```
pub fn write_binary<T: Serialize, P: AsRef<Path>>(data: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    let path_display = path.display().to_string();

    let bytes = bincode::serialize(data)
        .map_err(|e| UtilError::corruption(&path_display, "failed to encode artifact", e))?;
    fs::write(path, bytes)?;

    tracing::info!("Binary artifact saved at: {}", path_display);
    Ok(())
}

/// Deserializes a binary artifact file back into an in-memory value.
///
/// Fails with [`UtilError::Corruption`] if the file is missing or is not a
/// valid artifact of this format. Logs an info event on success.
pub fn read_binary<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let path_display = path.display().to_string();

    let bytes = fs::read(path)
        .map_err(|e| UtilError::corruption(&path_display, "failed to read artifact", e))?;
    let data = bincode::deserialize(&bytes)
        .map_err(|e| UtilError::corruption(&path_display, "failed to decode artifact", e))?;

    tracing::info!("Binary artifact loaded from: {}", path_display);
    Ok(data)
}
