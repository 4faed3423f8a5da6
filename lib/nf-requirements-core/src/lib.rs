//! Loading of network function requirement manifests
//!
//! This library provides:
//! - Parsing of YAML/JSON manifest streams into DataNetwork resources
//! - Error types for the loading boundary

pub mod error;
pub mod manifest;

pub use error::{CoreError, Result};
pub use manifest::{load_data_networks, parse_data_networks};
