//! Command-line overrides shared by the BINVOX tools.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Global command-line options.
///
/// Meant to be flattened into a tool's own parser. Values override settings
/// loaded from `config.ron`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    /// Log level (error, warn, info, debug, trace) or a full filter directive.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Sort voxels into traversal order before building.
    #[arg(long, global = true)]
    pub sort: bool,

    /// Write compact JSON instead of indented JSON.
    #[arg(long, global = true)]
    pub compact: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// Flags only ever switch behavior on; leaving a flag off keeps the file value.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.sort {
            self.codec.sort_before_build = true;
        }
        if args.compact {
            self.output.pretty_json = false;
        }
    }
}
