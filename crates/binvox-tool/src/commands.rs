//! Implementations of the `binvox` subcommands.
//!
//! All file access for the tool happens here; the codec itself only sees byte
//! buffers.

use std::io::Write;
use std::path::Path;

use binvox_config::{CodecConfig, Config};
use binvox_format::{Builder, Dimension, Parser, Translation, Voxel, VoxelData};
use tracing::{info, warn};

use crate::error::ToolError;

/// Reads and parses a BINVOX file.
pub fn read_binvox(path: &Path) -> Result<VoxelData, ToolError> {
    let bytes = std::fs::read(path).map_err(|source| ToolError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Parser::new()
        .parse(&bytes)
        .map_err(|source| ToolError::Binvox {
            path: path.to_path_buf(),
            source,
        })
}

/// Builds `data` and writes it to `path`, sorting first if configured.
///
/// Returns the number of bytes written.
pub fn write_binvox(
    path: &Path,
    mut data: VoxelData,
    codec: &CodecConfig,
) -> Result<usize, ToolError> {
    if codec.sort_before_build {
        data.sort_voxels();
    } else if !data.is_sorted() {
        warn!(
            path = %path.display(),
            "voxels are not in traversal order; out-of-order voxels will be dropped (use --sort)"
        );
    }

    let bytes = Builder::new().build(&data);
    std::fs::write(path, &bytes).map_err(|source| ToolError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote binvox file");
    Ok(bytes.len())
}

/// `binvox info`: prints a summary of the file.
pub fn info(input: &Path, out: &mut impl Write) -> Result<(), ToolError> {
    let data = read_binvox(input)?;
    let Dimension {
        depth,
        width,
        height,
    } = data.dimension;
    let Translation {
        depth: tx,
        width: ty,
        height: tz,
    } = data.translate;

    writeln!(out, "dimension: {depth} x {width} x {height} (depth x width x height)")
        .map_err(ToolError::Output)?;
    writeln!(out, "translate: {tx} {ty} {tz}").map_err(ToolError::Output)?;
    writeln!(out, "scale: {}", data.scale).map_err(ToolError::Output)?;
    writeln!(
        out,
        "voxels: {} ({:.2}% occupied)",
        data.voxels.len(),
        data.occupancy() * 100.0
    )
    .map_err(ToolError::Output)?;

    let outside = data.out_of_bounds().count();
    if outside > 0 {
        writeln!(out, "out of bounds: {outside}").map_err(ToolError::Output)?;
    }
    Ok(())
}

/// `binvox dump`: writes the parsed file as JSON to `output` or `out`.
pub fn dump(
    input: &Path,
    output: Option<&Path>,
    config: &Config,
    out: &mut impl Write,
) -> Result<(), ToolError> {
    let data = read_binvox(input)?;
    let json = if config.output.pretty_json {
        serde_json::to_string_pretty(&data)
    } else {
        serde_json::to_string(&data)
    }
    .map_err(ToolError::JsonEncode)?;

    match output {
        Some(path) => std::fs::write(path, json).map_err(|source| ToolError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => writeln!(out, "{json}").map_err(ToolError::Output),
    }
}

/// `binvox rebuild`: parses `input` and writes a freshly built copy to `output`.
pub fn rebuild(input: &Path, output: &Path, config: &Config) -> Result<usize, ToolError> {
    let data = read_binvox(input)?;
    write_binvox(output, data, &config.codec)
}

/// Parameters of `binvox new`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGrid {
    pub dimension: Dimension,
    pub translate: Translation,
    pub scale: Option<f64>,
}

/// `binvox new`: writes a grid from a JSON voxel list, or an empty grid.
///
/// The JSON file holds an array of `{"x": .., "y": .., "z": ..}` objects.
pub fn create(
    output: &Path,
    grid: &NewGrid,
    voxels_json: Option<&Path>,
    config: &Config,
) -> Result<usize, ToolError> {
    let mut data = VoxelData::new(grid.dimension);
    data.translate = grid.translate;
    data.scale = grid.scale.unwrap_or(config.codec.default_scale);

    if let Some(path) = voxels_json {
        data.voxels = read_voxel_list(path)?;
    }

    let outside = data.out_of_bounds().count();
    if outside > 0 {
        warn!(outside, "voxels outside the grid will not be encoded");
    }
    write_binvox(output, data, &config.codec)
}

fn read_voxel_list(path: &Path) -> Result<Vec<Voxel>, ToolError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ToolError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ToolError::Json {
        path: path.to_path_buf(),
        source,
    })
}
