pub mod error;
pub mod pointbin;

pub use error::{PointBinError, PointBinResult};
pub use pointbin::PointBin3D;
