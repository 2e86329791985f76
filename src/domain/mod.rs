// SPDX-License-Identifier: Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the core types used throughout the library: the
//! error taxonomy and the typed mapping returned by the config readers.
//! It is independent of any particular file format or filesystem concern.

pub mod config_map;
pub mod errors;

// Re-export commonly used types
pub use config_map::ConfigMap;
pub use errors::{Result, UtilError};
