use super::types::validate_search_radius;
use super::{PointBin3D, NIL, REMOVED};
use crate::error::PointBinResult;

impl PointBin3D {
    /// Finds every still-linked point within `radius` of the query point and
    /// unlinks it from its bucket, making it invisible to later searches
    /// until `reset`. Results accumulate in the buffer read by
    /// `found_indices` / `found_count`.
    ///
    /// Points at distance exactly `radius` are included.
    pub fn radius_search(&mut self, x: f64, y: f64, z: f64, radius: f64) -> PointBinResult<()> {
        validate_search_radius(radius)?;

        let min_bin = self.grid.bin_coord(x - radius, y - radius, z - radius);
        let max_bin = self.grid.bin_coord(x + radius, y + radius, z + radius);

        // Clamp into the populated grid; a query fully outside yields an
        // empty range and no matches.
        let mut lo = [0i64; 3];
        let mut hi = [0i64; 3];
        for axis in 0..3 {
            lo[axis] = min_bin[axis].max(0);
            hi[axis] = max_bin[axis].min(self.grid.shape[axis] - 1);
        }

        let radius_sq = radius * radius;

        for ix in lo[0]..=hi[0] {
            for iy in lo[1]..=hi[1] {
                for iz in lo[2]..=hi[2] {
                    let bucket = self.grid.bucket_index(ix, iy, iz);
                    let mut prev = NIL;
                    let mut cursor = self.first_member[bucket];

                    while cursor != NIL {
                        let i = cursor as usize;
                        let next = self.next_member[i];

                        let dx = self.points[i * 3] - x;
                        let dy = self.points[i * 3 + 1] - y;
                        let dz = self.points[i * 3 + 2] - z;
                        let dist_sq = dx * dx + dy * dy + dz * dz;

                        if dist_sq <= radius_sq {
                            if prev == NIL {
                                self.first_member[bucket] = next;
                            } else {
                                self.next_member[prev as usize] = next;
                            }
                            self.next_member[i] = REMOVED;
                            self.found_buffer[self.found_count] = cursor;
                            self.found_count += 1;
                        } else {
                            prev = cursor;
                        }
                        cursor = next;
                    }
                }
            }
        }

        Ok(())
    }
}
