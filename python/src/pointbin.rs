use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use ::pointbin::{PointBin3D, PointBinError};

fn map_pointbin_error(err: PointBinError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Destructive 3D radius-search index over a fixed point set.
///
/// Points found by `radius_search` are removed from later results until
/// `reset` restores the freshly constructed state.
#[pyclass(name = "PointBin3D", unsendable)]
pub struct PyPointBin3D {
    inner: PointBin3D,
}

#[pymethods]
impl PyPointBin3D {
    #[new]
    pub fn new(
        points: PyReadonlyArray2<f64>,
        bin_widths: PyReadonlyArray1<f64>,
    ) -> PyResult<Self> {
        let points = points.as_array();
        if points.ncols() != 3 {
            return Err(PyValueError::new_err(
                "points must have exactly 3 columns (x, y, z)",
            ));
        }
        let flat: Vec<f64> = points.iter().copied().collect();
        let bin_widths: Vec<f64> = bin_widths.as_array().iter().copied().collect();

        Ok(PyPointBin3D {
            inner: PointBin3D::new(&flat, &bin_widths).map_err(map_pointbin_error)?,
        })
    }

    pub fn radius_search(
        &mut self,
        query_point: PyReadonlyArray1<f64>,
        radius: f64,
    ) -> PyResult<()> {
        let query = query_point.as_array();
        if query.len() != 3 {
            return Err(PyValueError::new_err(
                "query point must have exactly 3 elements",
            ));
        }
        self.inner
            .radius_search(query[0], query[1], query[2], radius)
            .map_err(map_pointbin_error)
    }

    pub fn found_indices<'py>(&self, py: Python<'py>) -> &'py PyArray1<i64> {
        let indices: Vec<i64> = self
            .inner
            .found_indices()
            .into_iter()
            .map(|i| i as i64)
            .collect();
        indices.into_pyarray(py)
    }

    pub fn found_count(&self) -> usize {
        self.inner.found_count()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn original_points<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray2<f64>> {
        let n = self.inner.n_points();
        let points = Array2::from_shape_vec((n, 3), self.inner.original_points().to_vec())
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(points.into_pyarray(py))
    }

    pub fn origin<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        self.inner.origin().to_vec().into_pyarray(py)
    }

    pub fn bin_shape<'py>(&self, py: Python<'py>) -> &'py PyArray1<i64> {
        self.inner.bin_shape().to_vec().into_pyarray(py)
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}
