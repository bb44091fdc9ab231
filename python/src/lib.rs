use pyo3::prelude::*;
use pyo3::types::PyModule;

mod pointbin;

use crate::pointbin::PyPointBin3D;

#[pymodule]
fn pointbin3d(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyPointBin3D>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
