use crate::error::LinalgError;
use crate::matrix::elimination;
use crate::matrix::matrix::Matrix;
use crate::matrix::operand;
use crate::matrix::vector::Vector;
use crate::utils::is_integer_within_tolerance;
use pyo3::exceptions::{PyArithmeticError, PyIndexError, PyTypeError, PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<LinalgError> for PyErr {
    fn from(error: LinalgError) -> PyErr {
        let message = error.to_string();
        match error {
            LinalgError::TypeMismatch { .. } => PyTypeError::new_err(message),
            LinalgError::IndexOutOfBounds { .. } | LinalgError::RangeOutOfBounds { .. } => {
                PyIndexError::new_err(message)
            }
            LinalgError::DivisionByZero => PyZeroDivisionError::new_err(message),
            LinalgError::SingularMatrix => PyArithmeticError::new_err(message),
            _ => PyValueError::new_err(message),
        }
    }
}

#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Vector")]
pub struct PyVector {
    pub inner: Vector<f64>,
}

#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Matrix")]
pub struct PyMatrix {
    pub inner: Matrix<f64>,
}

impl From<Matrix<f64>> for PyMatrix {
    fn from(inner: Matrix<f64>) -> Self {
        PyMatrix { inner }
    }
}

impl From<Vector<f64>> for PyVector {
    fn from(inner: Vector<f64>) -> Self {
        PyVector { inner }
    }
}

#[pymethods]
impl PyVector {
    #[new]
    #[pyo3(signature = (size, contents=None))]
    pub fn new(size: usize, contents: Option<Vec<f64>>) -> PyResult<Self> {
        Ok(Vector::new(size, contents)?.into())
    }

    pub fn to_list(&self) -> Vec<f64> {
        self.inner.to_list()
    }

    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    pub fn __getitem__(&self, i: usize) -> PyResult<f64> {
        Ok(self.inner.at(i)?)
    }

    pub fn __add__(&self, rhs: &PyVector) -> PyResult<PyVector> {
        Ok((&self.inner + &rhs.inner)?.into())
    }

    pub fn __sub__(&self, rhs: &PyVector) -> PyResult<PyVector> {
        Ok((&self.inner - &rhs.inner)?.into())
    }

    pub fn __eq__(&self, rhs: &PyVector) -> bool {
        self.inner == rhs.inner
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn times(&self, k: f64) -> PyVector {
        self.inner.scale(&k).into()
    }

    pub fn dot(&self, rhs: &PyVector) -> PyResult<f64> {
        Ok(self.inner.dot(&rhs.inner)?)
    }

    pub fn mag(&self) -> f64 {
        self.inner.magnitude()
    }

    pub fn normalize(&self) -> PyResult<PyVector> {
        Ok(crate::matrix::vector::normalize(&self.inner)?.into())
    }
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(Matrix::from_list(lines)?.into())
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner + &rhs.inner)?.into())
    }

    pub fn __sub__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner - &rhs.inner)?.into())
    }

    pub fn __mul__(&self, py: Python<'_>, rhs: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        if let Ok(other) = rhs.downcast::<PyMatrix>() {
            let product = (&self.inner * &other.get().inner)?;
            return Ok(Py::new(py, PyMatrix::from(product))?.into_any());
        }
        if let Ok(other) = rhs.downcast::<PyVector>() {
            let product = (&self.inner * &other.get().inner)?;
            return Ok(Py::new(py, PyVector::from(product))?.into_any());
        }
        Err(PyTypeError::new_err(
            "a matrix can only be multiplied by a Matrix or a Vector",
        ))
    }

    pub fn __eq__(&self, rhs: &Bound<'_, PyAny>) -> bool {
        if let Ok(other) = rhs.downcast::<PyMatrix>() {
            return self.inner == other.get().inner;
        }
        if let Ok(other) = rhs.downcast::<PyVector>() {
            return self.inner == other.get().inner;
        }
        false
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    #[getter]
    #[allow(non_snake_case)]
    pub fn T(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    pub fn at(&self, i: usize, j: usize) -> PyResult<f64> {
        Ok(self.inner.at(i, j)?)
    }

    pub fn swap_rows(&self, a: usize, b: usize) -> PyResult<PyMatrix> {
        Ok(self.inner.swap_rows(a, b)?.into())
    }

    pub fn swap_cols(&self, a: usize, b: usize) -> PyResult<PyMatrix> {
        Ok(self.inner.swap_cols(a, b)?.into())
    }

    pub fn block(&self, pos: (usize, usize), size: (usize, usize)) -> PyResult<PyMatrix> {
        Ok(self.inner.block(pos, size)?.into())
    }

    #[pyo3(signature = (track=false))]
    pub fn echelon_form(&self, track: bool) -> PyResult<(PyMatrix, Option<PyMatrix>, f64)> {
        let result = elimination::echelon_form(&self.inner, track)?;
        Ok((
            result.reduced.into(),
            result.elimination.map(PyMatrix::from),
            result.sign,
        ))
    }

    #[pyo3(signature = (track=false))]
    pub fn rref(&self, track: bool) -> PyResult<(PyMatrix, Option<PyMatrix>)> {
        let result = elimination::reduced_echelon_form(&self.inner, track)?;
        Ok((result.reduced.into(), result.elimination.map(PyMatrix::from)))
    }

    pub fn determinant(&self) -> PyResult<f64> {
        Ok(elimination::determinant(&self.inner)?)
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(elimination::inverse(&self.inner)?.into())
    }

    pub fn rank(&self) -> PyResult<usize> {
        Ok(elimination::rank(&self.inner)?)
    }

    pub fn solve(&self, target: Vec<f64>) -> PyResult<Vec<f64>> {
        Ok(elimination::solve(&self.inner, &Vector::from_list(target))?.to_list())
    }
}

#[pyfunction]
pub fn identity_matrix(n: usize) -> PyMatrix {
    crate::matrix::matrix::identity_matrix::<f64>(n).into()
}

#[pyfunction]
pub fn augment(a: &PyMatrix, b: &Bound<'_, PyAny>) -> PyResult<PyMatrix> {
    if let Ok(other) = b.downcast::<PyMatrix>() {
        return Ok(operand::augment(&a.inner, &other.get().inner)?.into());
    }
    if let Ok(other) = b.downcast::<PyVector>() {
        return Ok(operand::augment(&a.inner, &other.get().inner)?.into());
    }
    Err(PyTypeError::new_err(
        "only a Matrix or a Vector can be augmented onto a matrix",
    ))
}

#[pyfunction]
#[pyo3(signature = (value, tolerance=1e-9))]
pub fn is_integer(value: f64, tolerance: f64) -> bool {
    is_integer_within_tolerance(value, tolerance)
}
