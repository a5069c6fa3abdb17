//! Configuration model for envscript.
//!
//! This module defines the optional `--config` YAML file. It supports
//! forward-compatible parsing (unknown fields are ignored), defaults for every
//! field, and validation of environment keys.
//!
//! ```yaml
//! environment:
//!   PROJECT_ROOT: /work/app
//! substitute_env_vars: true
//! format: json
//! ```

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::parse_assignment;
pub use types::OutputFormat;
