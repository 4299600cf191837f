//! Configuration for the BINVOX tooling.
//!
//! Settings persist to disk as a RON file and can be overridden from the command
//! line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE, CodecConfig, Config, DebugConfig, OutputConfig};
pub use error::ConfigError;
