// SPDX-License-Identifier: Apache-2.0

//! File I/O, serialization, and encoding helpers for machine-learning
//! pipelines.
//!
//! This crate provides the small set of stateless utilities a training
//! pipeline needs around its orchestration code: reading YAML configuration,
//! creating artifact directories, persisting JSON reports and binary model
//! artifacts, reporting file sizes, and converting files to and from base64.
//!
//! # Layout
//!
//! - **Domain Layer**: Core types ([`domain::ConfigMap`], error taxonomy)
//! - **Operations**: Stateless functions, one module per concern
//!   ([`ops::yaml`], [`ops::json`], [`ops::binary`], [`ops::fsops`],
//!   [`ops::encoding`])
//!
//! Every operation is synchronous, re-reads or re-writes from scratch on
//! each call, and surfaces failures immediately as [`domain::UtilError`]
//! values. Progress is reported through `tracing` info events; the crate
//! never installs a subscriber.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pipekit::prelude::*;
//!
//! # fn main() -> pipekit::domain::Result<()> {
//! let config = read_yaml("params.yaml")?;
//! ensure_directories(&["artifacts/models"], true)?;
//!
//! let mut scores = ConfigMap::new();
//! scores.insert("accuracy", 0.94);
//! write_json("artifacts/scores.json", &scores)?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod domain;
pub mod ops;

/// Commonly used types and functions.
///
/// This module re-exports the most commonly used items for convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigMap, Result, UtilError};
    pub use crate::ops::{
        decode_base64_to_file, encode_file_to_base64, ensure_directories, file_size_kb,
        read_binary, read_json, read_yaml, write_binary, write_json,
    };
}
