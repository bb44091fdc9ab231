use crate::error::{PointBinError, PointBinResult};

pub(crate) const NIL: u32 = u32::MAX;
pub(crate) const REMOVED: u32 = u32::MAX - 1;

/// Uniform grid parameters: origin, per-axis bin widths, integer extents.
/// Fixed at construction.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BinGrid {
    pub(crate) origin: [f64; 3],
    pub(crate) bin_widths: [f64; 3],
    pub(crate) shape: [i64; 3],
}

impl BinGrid {
    #[inline(always)]
    pub(crate) fn bin_coord(&self, x: f64, y: f64, z: f64) -> [i64; 3] {
        [
            ((x - self.origin[0]) / self.bin_widths[0]).floor() as i64,
            ((y - self.origin[1]) / self.bin_widths[1]).floor() as i64,
            ((z - self.origin[2]) / self.bin_widths[2]).floor() as i64,
        ]
    }

    // Row-major flat index into the bucket table. Coordinates must already
    // be clamped into [0, shape).
    #[inline(always)]
    pub(crate) fn bucket_index(&self, ix: i64, iy: i64, iz: i64) -> usize {
        (ix * self.shape[1] * self.shape[2] + iy * self.shape[2] + iz) as usize
    }

    #[inline(always)]
    pub(crate) fn bucket_count(&self) -> usize {
        (self.shape[0] * self.shape[1] * self.shape[2]) as usize
    }
}

pub(crate) fn validate_points(points: &[f64]) -> PointBinResult<usize> {
    if points.is_empty() {
        return Err(PointBinError::EmptyPointSet);
    }
    if points.len() % 3 != 0 {
        return Err(PointBinError::InvalidPointsLength { len: points.len() });
    }
    Ok(points.len() / 3)
}

pub(crate) fn validate_bin_widths(bin_widths: &[f64]) -> PointBinResult<[f64; 3]> {
    if bin_widths.len() != 3 {
        return Err(PointBinError::InvalidBinWidthsLength {
            len: bin_widths.len(),
        });
    }
    for (axis, &width) in bin_widths.iter().enumerate() {
        if !width.is_finite() || width <= 0.0 {
            return Err(PointBinError::InvalidBinWidth { axis, width });
        }
    }
    Ok([bin_widths[0], bin_widths[1], bin_widths[2]])
}

pub(crate) fn validate_search_radius(radius: f64) -> PointBinResult<()> {
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(PointBinError::InvalidSearchRadius { radius });
    }
    Ok(())
}
