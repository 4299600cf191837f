//! Reading and writing of BINVOX (version 1) voxel occupancy files.
//!
//! A BINVOX buffer is a five-line ASCII header followed by a run-length encoded
//! bitmap of occupied and empty cells. [`Builder`] turns a [`VoxelData`] into such
//! a buffer and [`Parser`] does the reverse. Both work purely on in-memory bytes;
//! reading and writing files is left to the caller.

pub mod builder;
pub mod error;
pub mod header;
pub mod parser;
pub mod rle;
pub mod voxel;

pub use builder::Builder;
pub use error::BinvoxError;
pub use header::{Header, decode_header, encode_header};
pub use parser::Parser;
pub use rle::{MAX_RUN, RunPair, decode_runs, encode_runs, runs_from_bytes, runs_to_bytes};
pub use voxel::{Dimension, Translation, Voxel, VoxelData};

/// Builds a complete BINVOX buffer from `data`.
///
/// Shorthand for `Builder::new().build(data)`.
pub fn build(data: &VoxelData) -> Vec<u8> {
    Builder::new().build(data)
}

/// Parses a complete BINVOX buffer.
///
/// Shorthand for `Parser::new().parse(buffer)`.
pub fn parse(buffer: &[u8]) -> Result<VoxelData, BinvoxError> {
    Parser::new().parse(buffer)
}
