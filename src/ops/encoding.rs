// SPDX-License-Identifier: Apache-2.0

//! Base64 transcoding of files.
//!
//! These helpers move image payloads (or any other file) across text-safe
//! channels: a file's raw bytes to a base64 string and back. The standard
//! alphabet is used, with no line wrapping.

use crate::domain::{Result, UtilError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Decodes a base64 string and writes the raw bytes to `destination`,
/// overwriting any existing file.
///
/// Fails with [`UtilError::Encoding`] if `encoded` is not valid base64.
///
/// # Examples
///
/// ```no_run
/// use pipekit::ops::decode_base64_to_file;
///
/// # fn main() -> pipekit::domain::Result<()> {
/// decode_base64_to_file("aGVsbG8=", "inputs/image.jpg")?;
/// # Ok(())
/// # }
/// ```
pub fn decode_base64_to_file<P: AsRef<Path>>(encoded: &str, destination: P) -> Result<()> {
    let bytes = STANDARD.decode(encoded)?;
    fs::write(destination, bytes)?;
    Ok(())
}

/// Reads a file's raw bytes and returns their base64 encoding.
///
/// Fails with [`UtilError::NotFound`] if `source` does not exist.
pub fn encode_file_to_base64<P: AsRef<Path>>(source: P) -> Result<String> {
    let source = source.as_ref();

    let bytes = fs::read(source).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            UtilError::not_found(source.display().to_string())
        } else {
            UtilError::Io(e)
        }
    })?;

    Ok(STANDARD.encode(bytes))
}
