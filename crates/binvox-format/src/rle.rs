//! Run-length encoding of the BINVOX occupancy bitmap.
//!
//! The body of a BINVOX buffer is a sequence of `(state, count)` byte pairs: `count`
//! consecutive cells that are all empty (`state == 0`) or all occupied
//! (`state == 1`). Cells are visited with `x` (depth) slowest, then `z` (height),
//! then `y` (width) fastest.

use crate::voxel::{Dimension, Voxel};

/// Longest run a single pair can describe.
pub const MAX_RUN: u8 = u8::MAX;

/// A single run: `count` consecutive cells in `state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPair {
    /// 1 for occupied, 0 for empty.
    pub state: u8,
    /// Number of cells in the run (1..=255).
    pub count: u8,
}

impl RunPair {
    pub const fn new(state: u8, count: u8) -> Self {
        Self { state, count }
    }
}

/// Encodes an ordered voxel list into runs over the whole grid.
///
/// `voxels` must already be in traversal order. A cell counts as occupied only if
/// the next unconsumed voxel sits exactly on it; anything else is skipped over
/// silently.
pub fn encode_runs(dimension: &Dimension, voxels: &[Voxel]) -> Vec<RunPair> {
    let mut runs = Vec::new();
    let mut cursor = 0;
    let mut state = u8::from(voxels.first() == Some(&Voxel::ORIGIN));
    let mut count: u8 = 0;

    for i in 0..dimension.depth {
        for j in 0..dimension.height {
            for k in 0..dimension.width {
                // y follows the innermost (width) loop, z the middle (height) loop.
                let occupied = voxels.get(cursor) == Some(&Voxel::new(i, k, j));
                if occupied {
                    cursor += 1;
                }
                let value = u8::from(occupied);

                if value == state {
                    count += 1;
                    if count == MAX_RUN {
                        runs.push(RunPair::new(state, count));
                        count = 0;
                    }
                } else {
                    if count > 0 {
                        runs.push(RunPair::new(state, count));
                    }
                    state = value;
                    count = 1;
                }
            }
        }
    }

    if count > 0 {
        runs.push(RunPair::new(state, count));
    }

    if cursor < voxels.len() {
        tracing::warn!(
            consumed = cursor,
            total = voxels.len(),
            "voxels left unencoded; input was out of order, duplicated or out of bounds"
        );
    }
    tracing::trace!(runs = runs.len(), "encoded voxel runs");
    runs
}

/// Expands runs back into the ordered list of occupied voxels.
///
/// The `x` coordinate is never wrapped: runs covering more than the grid volume
/// produce voxels with `x >= depth`. This is logged, not rejected. Only
/// `state == 1` marks a cell occupied.
pub fn decode_runs(dimension: &Dimension, runs: &[RunPair]) -> Vec<Voxel> {
    let mut voxels = Vec::new();
    let (mut x, mut y, mut z) = (0u32, 0u32, 0u32);
    let mut cells: u64 = 0;

    for run in runs {
        for _ in 0..run.count {
            if run.state == 1 {
                voxels.push(Voxel::new(x, y, z));
            }
            y += 1;
            if y == dimension.width {
                y = 0;
                z += 1;
            }
            if z == dimension.height {
                z = 0;
                x += 1;
            }
        }
        cells += u64::from(run.count);
    }

    if cells > dimension.cell_count() {
        tracing::warn!(
            cells,
            grid = dimension.cell_count(),
            "run lengths exceed grid volume; trailing voxels are out of bounds"
        );
    }
    voxels
}

/// Flattens runs into `[state, count, state, count, ...]`.
pub fn runs_to_bytes(runs: &[RunPair]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(runs.len() * 2);
    for run in runs {
        buf.push(run.state);
        buf.push(run.count);
    }
    buf
}

/// Reads `(state, count)` pairs from `data`.
///
/// A trailing odd byte cannot form a pair and is dropped.
pub fn runs_from_bytes(data: &[u8]) -> Vec<RunPair> {
    let pairs = data.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        tracing::warn!(len = data.len(), "odd voxel body length; last byte ignored");
    }
    pairs.map(|pair| RunPair::new(pair[0], pair[1])).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn all_cells(dim: &Dimension) -> Vec<Voxel> {
        let mut voxels = Vec::new();
        for x in 0..dim.depth {
            for z in 0..dim.height {
                for y in 0..dim.width {
                    voxels.push(Voxel::new(x, y, z));
                }
            }
        }
        voxels
    }

    #[test]
    fn test_full_grid_single_run() {
        let dim = Dimension::new(2, 2, 2);
        let runs = encode_runs(&dim, &all_cells(&dim));
        assert_eq!(runs, vec![RunPair::new(1, 8)]);
    }

    #[test]
    fn test_empty_grid_single_run() {
        let dim = Dimension::new(2, 2, 2);
        let runs = encode_runs(&dim, &[]);
        assert_eq!(runs, vec![RunPair::new(0, 8)]);
    }

    #[test]
    fn test_two_cell_column() {
        let dim = Dimension::new(1, 1, 2);
        let runs = encode_runs(&dim, &[Voxel::ORIGIN]);
        assert_eq!(runs_to_bytes(&runs), vec![1, 1, 0, 1]);
    }

    #[test]
    fn test_y_follows_width_and_z_follows_height() {
        // depth 1, width 3, height 2: cells in order (y,z) = (0,0) (1,0) (2,0) (0,1) (1,1) (2,1)
        let dim = Dimension::new(1, 3, 2);

        let runs = encode_runs(&dim, &[Voxel::new(0, 1, 0)]);
        assert_eq!(
            runs,
            vec![RunPair::new(0, 1), RunPair::new(1, 1), RunPair::new(0, 4)]
        );

        let runs = encode_runs(&dim, &[Voxel::new(0, 0, 1)]);
        assert_eq!(
            runs,
            vec![RunPair::new(0, 3), RunPair::new(1, 1), RunPair::new(0, 2)]
        );
    }

    #[test]
    fn test_decode_coordinate_order() {
        let dim = Dimension::new(2, 3, 2);
        let runs = vec![
            RunPair::new(0, 4),
            RunPair::new(1, 1),
            RunPair::new(0, 2),
            RunPair::new(1, 1),
        ];
        let voxels = decode_runs(&dim, &runs);
        // Cell 4 is (x0, z1, y1); cell 7 is (x1, z0, y1).
        assert_eq!(voxels, vec![Voxel::new(0, 1, 1), Voxel::new(1, 1, 0)]);
    }

    #[test]
    fn test_run_of_exactly_255_has_no_leftover() {
        let dim = Dimension::new(1, 255, 1);
        let runs = encode_runs(&dim, &[]);
        assert_eq!(runs, vec![RunPair::new(0, 255)]);
    }

    #[test]
    fn test_long_runs_split_at_255() {
        let dim = Dimension::new(1, 600, 1);
        let runs = encode_runs(&dim, &[]);
        assert_eq!(
            runs,
            vec![RunPair::new(0, 255), RunPair::new(0, 255), RunPair::new(0, 90)]
        );
    }

    #[test]
    fn test_switch_after_full_run_emits_no_zero_count() {
        // 255 occupied cells followed by one empty cell.
        let dim = Dimension::new(1, 256, 1);
        let voxels: Vec<Voxel> = (0..255).map(|y| Voxel::new(0, y, 0)).collect();
        let runs = encode_runs(&dim, &voxels);
        assert_eq!(runs, vec![RunPair::new(1, 255), RunPair::new(0, 1)]);
        assert!(runs.iter().all(|run| run.count >= 1));
    }

    #[test]
    fn test_unsorted_voxels_are_skipped() {
        let dim = Dimension::new(1, 2, 1);
        // The origin is listed after (0,1,0), so the cursor never reaches it.
        let runs = encode_runs(&dim, &[Voxel::new(0, 1, 0), Voxel::ORIGIN]);
        assert_eq!(runs, vec![RunPair::new(0, 1), RunPair::new(1, 1)]);
    }

    #[test]
    fn test_encode_decode_checkerboard() {
        // Odd width keeps neighbouring cells in opposite states across row wraps.
        let dim = Dimension::new(3, 3, 5);
        let voxels: Vec<Voxel> = all_cells(&dim)
            .into_iter()
            .filter(|v| (v.x + v.y + v.z) % 2 == 0)
            .collect();
        let runs = encode_runs(&dim, &voxels);
        assert!(runs.iter().all(|run| run.count == 1));
        assert_eq!(decode_runs(&dim, &runs), voxels);
    }

    #[test]
    fn test_decode_overflow_grows_x() {
        let dim = Dimension::new(1, 1, 1);
        let voxels = decode_runs(&dim, &[RunPair::new(1, 3)]);
        assert_eq!(
            voxels,
            vec![Voxel::new(0, 0, 0), Voxel::new(1, 0, 0), Voxel::new(2, 0, 0)]
        );
    }

    #[test]
    fn test_decode_ignores_non_binary_state() {
        let dim = Dimension::new(1, 4, 1);
        let voxels = decode_runs(&dim, &[RunPair::new(7, 2), RunPair::new(1, 2)]);
        assert_eq!(voxels, vec![Voxel::new(0, 2, 0), Voxel::new(0, 3, 0)]);
    }

    #[test]
    fn test_odd_trailing_byte_dropped() {
        let runs = runs_from_bytes(&[1, 3, 0, 2, 1]);
        assert_eq!(runs, vec![RunPair::new(1, 3), RunPair::new(0, 2)]);
    }

    #[test]
    fn test_runs_bytes_layout() {
        let runs = vec![RunPair::new(0, 200), RunPair::new(1, 17)];
        let bytes = runs_to_bytes(&runs);
        assert_eq!(bytes, vec![0, 200, 1, 17]);
        assert_eq!(runs_from_bytes(&bytes), runs);
    }
}
