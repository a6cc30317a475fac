pub mod matrix {
    pub mod display;
    pub mod elimination;
    pub mod matrix;
    pub mod operand;
    pub mod vector;
}
pub mod rings {
    pub mod fraction;
    pub mod scalar;
}

pub mod error;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use error::{LinalgError, LinalgResult};
pub use matrix::elimination::{
    determinant, echelon_form, inverse, rank, reduced_echelon_form, solve, Elimination,
};
pub use matrix::matrix::{identity_matrix, swap_cols, swap_rows, Matrix};
pub use matrix::operand::{augment, transpose, Operand, Product};
pub use matrix::vector::{normalize, Vector};
pub use rings::fraction::Fraction;
pub use rings::scalar::Scalar;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyVector>()?;
    m.add_class::<python::PyMatrix>()?;
    m.add_function(wrap_pyfunction!(python::identity_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(python::augment, m)?)?;
    m.add_function(wrap_pyfunction!(python::is_integer, m)?)?;
    Ok(())
}
