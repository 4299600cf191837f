//! Reads BINVOX buffers back into [`VoxelData`].

use crate::error::BinvoxError;
use crate::header::decode_header;
use crate::rle::{decode_runs, runs_from_bytes};
use crate::voxel::VoxelData;

/// Decodes BINVOX byte buffers.
///
/// Each call starts from offset 0 with fresh state, so one parser can be reused.
#[derive(Debug, Default, Clone, Copy)]
pub struct Parser;

impl Parser {
    /// Creates a parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a complete buffer.
    ///
    /// # Errors
    ///
    /// Returns the [`BinvoxError`] for the first malformed header line. The voxel
    /// body itself is never rejected: an odd trailing byte is dropped and runs past
    /// the end of the grid yield out-of-bounds voxels (see [`VoxelData::out_of_bounds`]).
    pub fn parse(&self, buffer: &[u8]) -> Result<VoxelData, BinvoxError> {
        let (header, body_offset) = decode_header(buffer)?;
        let runs = runs_from_bytes(&buffer[body_offset..]);
        let voxels = decode_runs(&header.dimension, &runs);

        tracing::debug!(
            runs = runs.len(),
            voxels = voxels.len(),
            "parsed binvox body"
        );

        Ok(VoxelData {
            dimension: header.dimension,
            translate: header.translate,
            scale: header.scale,
            voxels,
        })
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
