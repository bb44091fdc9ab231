mod build;
mod search;
mod types;

use std::fmt;

use types::BinGrid;
pub(crate) use types::{NIL, REMOVED};

/// Static 3D bucket index with find-and-consume radius queries.
///
/// Points are binned into a uniform grid, sorted by bin for cache locality,
/// and threaded into one intrusive singly linked list per bucket. Every point
/// returned by `radius_search` is unlinked and stays invisible to later
/// searches until `reset` restores the post-construction state.
#[derive(Debug)]
pub struct PointBin3D {
    // Flat n x 3 coordinate buffers, caller order and bin-sorted order.
    original_points: Vec<f64>,
    points: Vec<f64>,
    // Maps sorted index back to the caller-visible original index.
    original_indices: Vec<u32>,
    grid: BinGrid,
    // Bucket table (flat 3D) and per-point links. NIL marks an empty bucket
    // or list end; REMOVED marks an unlinked point's own slot.
    first_member: Vec<u32>,
    next_member: Vec<u32>,
    // Snapshot taken right after construction, restored by reset.
    initial_first_member: Vec<u32>,
    initial_next_member: Vec<u32>,
    // Sorted indices consumed since the last reset.
    found_buffer: Vec<u32>,
    found_count: usize,
}

impl PointBin3D {
    pub fn n_points(&self) -> usize {
        self.original_indices.len()
    }

    /// Input coordinates in caller order, flat row-major n x 3.
    pub fn original_points(&self) -> &[f64] {
        &self.original_points
    }

    pub fn origin(&self) -> [f64; 3] {
        self.grid.origin
    }

    pub fn bin_widths(&self) -> [f64; 3] {
        self.grid.bin_widths
    }

    pub fn bin_shape(&self) -> [i64; 3] {
        self.grid.shape
    }

    pub fn found_count(&self) -> usize {
        self.found_count
    }

    /// Original indices of every point consumed since the last reset.
    ///
    /// Owned copy; the order is unspecified and callers must treat the
    /// result as a set.
    pub fn found_indices(&self) -> Vec<u32> {
        self.found_buffer[..self.found_count]
            .iter()
            .map(|&sorted| self.original_indices[sorted as usize])
            .collect()
    }

    /// Restores the bucket table and links to their post-construction state
    /// and clears the accumulated results. Never reallocates.
    pub fn reset(&mut self) {
        self.first_member.copy_from_slice(&self.initial_first_member);
        self.next_member.copy_from_slice(&self.initial_next_member);
        self.found_count = 0;
    }
}

impl fmt::Display for PointBin3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PointBin3D(n_points: {}, found_count: {})",
            self.n_points(),
            self.found_count
        )
    }
}
