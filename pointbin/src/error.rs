use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointBinError {
    EmptyPointSet,
    InvalidPointsLength { len: usize },
    InvalidBinWidthsLength { len: usize },
    InvalidBinWidth { axis: usize, width: f64 },
    InvalidSearchRadius { radius: f64 },
}

pub type PointBinResult<T> = Result<T, PointBinError>;

impl fmt::Display for PointBinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointBinError::EmptyPointSet => {
                write!(f, "point set must contain at least one point")
            }
            PointBinError::InvalidPointsLength { len } => {
                write!(
                    f,
                    "points buffer length must be a non-zero multiple of 3 (len: {})",
                    len
                )
            }
            PointBinError::InvalidBinWidthsLength { len } => {
                write!(f, "bin widths must have exactly 3 components (len: {})", len)
            }
            PointBinError::InvalidBinWidth { axis, width } => {
                write!(
                    f,
                    "bin widths must be finite and positive (axis: {}, width: {})",
                    axis, width
                )
            }
            PointBinError::InvalidSearchRadius { radius } => {
                write!(
                    f,
                    "search radius must be finite and non-negative (radius: {})",
                    radius
                )
            }
        }
    }
}

impl std::error::Error for PointBinError {}
