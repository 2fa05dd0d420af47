//! CLI command implementations for spoilmap operations.
//!
//! Available commands:
//! - **evaluate**: Score a file of batch snapshots and recommend routing
//! - **init**: Initialize a new spoilmap configuration file
//! - **validate-config**: Validate a scoring configuration file

pub mod evaluate;
pub mod init;
pub mod validate_config;

pub use evaluate::{evaluate_batches, EvaluateConfig};
pub use init::init_config;
pub use validate_config::validate_config_file;
