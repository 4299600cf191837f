//! Assembles BINVOX buffers.

use crate::header::{Header, encode_header};
use crate::rle::{encode_runs, runs_to_bytes};
use crate::voxel::VoxelData;

/// Turns [`VoxelData`] into a BINVOX byte buffer.
///
/// The builder holds no state between calls. Voxels are expected in traversal order
/// (see [`VoxelData::sort_voxels`]); they are not sorted or validated here.
#[derive(Debug, Default, Clone, Copy)]
pub struct Builder;

impl Builder {
    /// Creates a builder.
    pub fn new() -> Self {
        Self
    }

    /// Encodes `data` as header bytes followed by run-length body bytes.
    pub fn build(&self, data: &VoxelData) -> Vec<u8> {
        let header = encode_header(&Header::of(data));
        let runs = encode_runs(&data.dimension, &data.voxels);

        let mut buf = Vec::with_capacity(header.len() + runs.len() * 2);
        buf.extend_from_slice(&header);
        buf.extend_from_slice(&runs_to_bytes(&runs));

        tracing::debug!(
            dimension = ?data.dimension,
            voxels = data.voxels.len(),
            runs = runs.len(),
            bytes = buf.len(),
            "built binvox buffer"
        );
        buf
    }
}
