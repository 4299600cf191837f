//! Parser tests, including full build/parse round-trips.

use super::*;
use crate::builder::Builder;
use crate::voxel::{Dimension, Translation, Voxel};

/// Deterministic sparse fill: a cell is occupied when a cheap hash of its
/// coordinates falls under `per_mille`.
fn scattered(dimension: Dimension, per_mille: u32) -> VoxelData {
    let mut data = VoxelData::new(dimension);
    data.translate = Translation::new(-12.25, 3.5, 0.0);
    data.scale = 24.5;
    for x in 0..dimension.depth {
        for z in 0..dimension.height {
            for y in 0..dimension.width {
                let h = x.wrapping_mul(73_856_093)
                    ^ y.wrapping_mul(19_349_663)
                    ^ z.wrapping_mul(83_492_791);
                if h % 1000 < per_mille {
                    data.voxels.push(Voxel::new(x, y, z));
                }
            }
        }
    }
    data
}

#[test]
fn test_parse_single_voxel_column() {
    let mut bytes = b"#binvox 1\ndim 1 1 2\ntranslate 0 0 0\nscale 1\ndata\n".to_vec();
    bytes.extend_from_slice(&[1, 1, 0, 1]);

    let data = Parser::new().parse(&bytes).expect("parse failed");
    assert_eq!(data.dimension, Dimension::new(1, 1, 2));
    assert_eq!(data.translate, Translation::default());
    assert_eq!(data.scale, 1.0);
    assert_eq!(data.voxels, vec![Voxel::ORIGIN]);
}

#[test]
fn test_roundtrip_scattered_grids() {
    for &(dimension, density) in &[
        (Dimension::new(1, 1, 1), 500),
        (Dimension::new(2, 2, 2), 1000),
        (Dimension::new(4, 7, 3), 300),
        (Dimension::new(16, 16, 16), 50),
        (Dimension::new(32, 20, 9), 900),
        (Dimension::new(5, 64, 2), 0),
    ] {
        let original = scattered(dimension, density);
        assert!(original.is_sorted());

        let bytes = Builder::new().build(&original);
        let parsed = Parser::new()
            .parse(&bytes)
            .unwrap_or_else(|e| panic!("parse failed for {dimension:?}: {e}"));
        assert_eq!(parsed, original, "mismatch for {dimension:?} at {density}/1000");
    }
}

#[test]
fn test_roundtrip_long_runs() {
    // A solid slab followed by empty space forces runs well beyond 255 cells.
    let dimension = Dimension::new(8, 32, 32);
    let mut data = VoxelData::new(dimension);
    for x in 0..3 {
        for z in 0..32 {
            for y in 0..32 {
                data.voxels.push(Voxel::new(x, y, z));
            }
        }
    }

    let bytes = Builder::new().build(&data);
    let parsed = Parser::new().parse(&bytes).expect("parse failed");
    assert_eq!(parsed, data);
}

#[test]
fn test_parse_rejects_bad_signature() {
    let bytes = b"#binvox 2\ndim 2 2 2\ntranslate 0 0 0\nscale 1\ndata\n\x01\x08";
    assert_eq!(
        Parser::new().parse(bytes),
        Err(BinvoxError::InvalidSignature("#binvox 2".to_string()))
    );
}

#[test]
fn test_parse_rejects_short_dimension_line() {
    let bytes = b"#binvox 1\ndim 2 2\ntranslate 0 0 0\nscale 1\ndata\n\x01\x08";
    assert!(matches!(
        Parser::new().parse(bytes),
        Err(BinvoxError::InvalidDimensionLine(_))
    ));
}

#[test]
fn test_parse_header_only() {
    let data = Parser::new()
        .parse(b"#binvox 1\ndim 3 3 3\ntranslate 0 0 0\nscale 1\ndata\n")
        .expect("parse failed");
    assert!(data.voxels.is_empty());
}

#[test]
fn test_parse_drops_odd_trailing_byte() {
    let mut bytes = b"#binvox 1\ndim 1 2 1\ntranslate 0 0 0\nscale 1\ndata\n".to_vec();
    bytes.extend_from_slice(&[0, 1, 1, 1, 1]);

    let data = Parser::new().parse(&bytes).expect("parse failed");
    assert_eq!(data.voxels, vec![Voxel::new(0, 1, 0)]);
}

#[test]
fn test_parse_overlong_body_yields_out_of_bounds() {
    let mut bytes = b"#binvox 1\ndim 1 2 2\ntranslate 0 0 0\nscale 1\ndata\n".to_vec();
    bytes.extend_from_slice(&[1, 6]);

    let data = Parser::new().parse(&bytes).expect("parse failed");
    assert_eq!(data.voxels.len(), 6);
    let outside: Vec<_> = data.out_of_bounds().copied().collect();
    assert_eq!(outside, vec![Voxel::new(1, 0, 0), Voxel::new(1, 1, 0)]);
}

#[test]
fn test_parser_is_reusable() {
    let parser = Parser::new();
    let a = crate::build(&scattered(Dimension::new(3, 3, 3), 400));
    let b = crate::build(&scattered(Dimension::new(2, 5, 4), 700));

    let first = parser.parse(&a).expect("parse a");
    let second = parser.parse(&b).expect("parse b");
    let again = parser.parse(&a).expect("parse a again");
    assert_eq!(first, again);
    assert_ne!(first.dimension, second.dimension);
}
