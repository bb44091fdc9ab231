use super::types::{validate_bin_widths, validate_points, BinGrid, NIL};
use super::PointBin3D;
use crate::error::PointBinResult;

impl PointBin3D {
    /// Builds the index from a flat row-major `n x 3` coordinate buffer and
    /// three positive bin widths.
    ///
    /// All validation happens before the first allocation; on error no
    /// partial state is observable.
    pub fn new(points: &[f64], bin_widths: &[f64]) -> PointBinResult<Self> {
        let n_points = validate_points(points)?;
        let bin_widths = validate_bin_widths(bin_widths)?;

        // Origin is the per-axis minimum over all input points.
        let mut origin = [f64::INFINITY; 3];
        for row in points.chunks_exact(3) {
            for axis in 0..3 {
                if row[axis] < origin[axis] {
                    origin[axis] = row[axis];
                }
            }
        }

        let mut shape = [0i64; 3];
        let mut bin_coords = Vec::with_capacity(n_points);
        for row in points.chunks_exact(3) {
            let mut coord = [0i64; 3];
            for axis in 0..3 {
                coord[axis] = ((row[axis] - origin[axis]) / bin_widths[axis]).floor() as i64;
                if coord[axis] >= shape[axis] {
                    shape[axis] = coord[axis];
                }
            }
            bin_coords.push(coord);
        }
        for extent in shape.iter_mut() {
            *extent += 1;
        }

        let grid = BinGrid {
            origin,
            bin_widths,
            shape,
        };

        // Stable sort by linear bucket key so bucket members end up
        // contiguous in the point store.
        let mut order: Vec<u32> = (0..n_points as u32).collect();
        order.sort_by_key(|&i| {
            let coord = bin_coords[i as usize];
            coord[0] * shape[1] * shape[2] + coord[1] * shape[2] + coord[2]
        });

        let mut sorted_points = Vec::with_capacity(n_points * 3);
        let mut original_indices = Vec::with_capacity(n_points);
        for &orig in order.iter() {
            let base = orig as usize * 3;
            sorted_points.extend_from_slice(&points[base..base + 3]);
            original_indices.push(orig);
        }

        // Head-insertion in ascending sorted order; bucket members come out
        // in reverse sorted-index order, which is deterministic but carries
        // no meaning.
        let mut first_member = vec![NIL; grid.bucket_count()];
        let mut next_member = vec![NIL; n_points];
        for (sorted, &orig) in order.iter().enumerate() {
            let coord = bin_coords[orig as usize];
            let bucket = grid.bucket_index(coord[0], coord[1], coord[2]);
            next_member[sorted] = first_member[bucket];
            first_member[bucket] = sorted as u32;
        }

        let initial_first_member = first_member.clone();
        let initial_next_member = next_member.clone();

        Ok(PointBin3D {
            original_points: points.to_vec(),
            points: sorted_points,
            original_indices,
            grid,
            first_member,
            next_member,
            initial_first_member,
            initial_next_member,
            found_buffer: vec![NIL; n_points],
            found_count: 0,
        })
    }
}
