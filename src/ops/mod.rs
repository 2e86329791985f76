// SPDX-License-Identifier: Apache-2.0

//! Operations layer containing the file helpers.
//!
//! Each module covers one concern: YAML configuration, JSON reports, binary
//! artifacts, filesystem housekeeping, and base64 transcoding. The functions
//! are stateless and independent of one another.

pub mod binary;
pub mod encoding;
pub mod fsops;
pub mod json;
pub mod yaml;

// Re-export the operations at the layer root
pub use binary::{read_binary, write_binary};
pub use encoding::{decode_base64_to_file, encode_file_to_base64};
pub use fsops::{ensure_directories, file_size_kb};
pub use json::{read_json, write_json};
pub use yaml::read_yaml;
