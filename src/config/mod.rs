//! JSON configuration for the command-line tools.

pub mod edge;

pub use edge::{load_config, EdgeOutputConfig, EdgeToolConfig};
