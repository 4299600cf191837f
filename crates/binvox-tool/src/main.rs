//! `binvox`: inspect, convert and create BINVOX voxel files.
//!
//! Run with: `cargo run -p binvox-tool -- info model.binvox`

mod commands;
mod error;

use std::path::PathBuf;

use binvox_config::{CliArgs, Config};
use binvox_format::{Dimension, Translation};
use clap::{Parser, Subcommand};

use crate::commands::NewGrid;
use crate::error::ToolError;

/// Directory name under the OS config directory.
const APP_NAME: &str = "binvox";

#[derive(Parser, Debug)]
#[command(name = "binvox", about = "Inspect, convert and create BINVOX voxel files")]
struct Cli {
    #[command(flatten)]
    global: CliArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the header and voxel statistics of a file.
    Info {
        input: PathBuf,
    },
    /// Print the parsed file as JSON.
    Dump {
        input: PathBuf,
        /// Write JSON to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Parse a file and write a freshly encoded copy.
    Rebuild {
        input: PathBuf,
        output: PathBuf,
    },
    /// Create a file from a JSON voxel list, or an empty grid.
    New {
        output: PathBuf,
        /// Grid extents.
        #[arg(long, num_args = 3, value_names = ["DEPTH", "WIDTH", "HEIGHT"], required = true)]
        dim: Vec<u32>,
        /// Grid translation.
        #[arg(long, num_args = 3, value_names = ["DEPTH", "WIDTH", "HEIGHT"], allow_negative_numbers = true)]
        translate: Option<Vec<f64>>,
        /// Grid scale (defaults to `codec.default_scale`).
        #[arg(long)]
        scale: Option<f64>,
        /// JSON array of `{"x", "y", "z"}` voxels.
        #[arg(long)]
        voxels: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Load or create config, then apply CLI overrides
    let config_dir = resolve_config_dir(&cli.global);
    let mut config = match &config_dir {
        Ok(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
        Err(e) => {
            eprintln!("{e}, using default config");
            Config::default()
        }
    };
    config.apply_cli_overrides(&cli.global);

    let log_dir = config_dir.ok().map(|dir| dir.join("logs"));
    binvox_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    if let Err(e) = run(cli.command, &config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn resolve_config_dir(args: &CliArgs) -> Result<PathBuf, ToolError> {
    match &args.config {
        Some(dir) => Ok(dir.clone()),
        None => dirs::config_dir()
            .map(|dir| dir.join(APP_NAME))
            .ok_or(ToolError::NoConfigDir),
    }
}

fn run(command: Command, config: &Config) -> Result<(), ToolError> {
    let mut stdout = std::io::stdout().lock();
    match command {
        Command::Info { input } => commands::info(&input, &mut stdout),
        Command::Dump { input, output } => {
            commands::dump(&input, output.as_deref(), config, &mut stdout)
        }
        Command::Rebuild { input, output } => {
            commands::rebuild(&input, &output, config).map(|_| ())
        }
        Command::New {
            output,
            dim,
            translate,
            scale,
            voxels,
        } => {
            let grid = NewGrid {
                dimension: Dimension::new(dim[0], dim[1], dim[2]),
                translate: translate
                    .map(|t| Translation::new(t[0], t[1], t[2]))
                    .unwrap_or_default(),
                scale,
            };
            commands::create(&output, &grid, voxels.as_deref(), config).map(|_| ())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new_command() {
        let cli = Cli::try_parse_from([
            "binvox",
            "new",
            "out.binvox",
            "--dim",
            "4",
            "5",
            "6",
            "--translate",
            "-1.5",
            "0",
            "2",
            "--sort",
        ])
        .unwrap();

        assert!(cli.global.sort);
        match cli.command {
            Command::New {
                dim,
                translate,
                scale,
                ..
            } => {
                assert_eq!(dim, vec![4, 5, 6]);
                assert_eq!(translate, Some(vec![-1.5, 0.0, 2.0]));
                assert_eq!(scale, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_new_requires_three_extents() {
        let result = Cli::try_parse_from(["binvox", "new", "out.binvox", "--dim", "4", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["binvox", "info", "a.binvox", "--log-level", "debug"])
            .unwrap();
        assert_eq!(cli.global.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Command::Info { .. }));
    }
}
