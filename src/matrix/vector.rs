use crate::error::{LinalgError, LinalgResult};
use crate::rings::scalar::Scalar;
use std::ops;

/// Fixed size sequence of scalars.
///
/// Every stored value goes through [`Scalar::normalize`]. Cloning copies the
/// backing storage, two vectors never alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    pub(crate) n: usize,
    pub(crate) elems: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Vector of `size` elements, zero filled when `contents` is `None`.
    pub fn new(size: usize, contents: Option<Vec<T>>) -> LinalgResult<Self> {
        match contents {
            None => Ok(Vector::zeros(size)),
            Some(elems) => {
                if elems.len() != size {
                    return Err(LinalgError::dimension(
                        format!("{size} elements"),
                        format!("{} elements", elems.len()),
                    ));
                }
                Ok(Vector::from_list(elems))
            }
        }
    }

    pub fn zeros(size: usize) -> Self {
        Vector {
            n: size,
            elems: vec![T::zero(); size],
        }
    }

    pub fn from_list(elems: Vec<T>) -> Self {
        Vector {
            n: elems.len(),
            elems: elems.into_iter().map(Scalar::normalize).collect(),
        }
    }

    pub fn to_list(&self) -> Vec<T> {
        self.elems.clone()
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub fn at(&self, i: usize) -> LinalgResult<T> {
        self.elems
            .get(i)
            .cloned()
            .ok_or(LinalgError::IndexOutOfBounds {
                index: i,
                len: self.n,
            })
    }

    pub fn set(&mut self, i: usize, value: T) -> LinalgResult<()> {
        let len = self.n;
        let slot = self
            .elems
            .get_mut(i)
            .ok_or(LinalgError::IndexOutOfBounds { index: i, len })?;
        *slot = value.normalize();
        Ok(())
    }

    pub fn scale(&self, k: &T) -> Vector<T> {
        Vector::from_list(self.elems.iter().map(|x| x.clone() * k.clone()).collect())
    }

    pub fn dot(&self, other: &Vector<T>) -> LinalgResult<T> {
        self.check_same_size(other)?;
        Ok(self
            .elems
            .iter()
            .zip(other.elems.iter())
            .map(|(a, b)| a.clone() * b.clone())
            .sum::<T>()
            .normalize())
    }

    pub fn magnitude(&self) -> f64 {
        self.elems
            .iter()
            .map(|x| x.as_f64() * x.as_f64())
            .sum::<f64>()
            .sqrt()
    }

    /// Elementwise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Vector<T>, tolerance: f64) -> bool {
        self.n == other.n
            && self
                .elems
                .iter()
                .zip(other.elems.iter())
                .all(|(a, b)| (a.as_f64() - b.as_f64()).abs() <= tolerance)
    }

    // self <- self + k * other
    pub(crate) fn add_scaled_in_place(&mut self, other: &Vector<T>, k: &T) {
        for (a, b) in self.elems.iter_mut().zip(other.elems.iter()) {
            *a = (a.clone() + k.clone() * b.clone()).normalize();
        }
    }

    pub(crate) fn scale_in_place(&mut self, k: &T) {
        for a in self.elems.iter_mut() {
            *a = (a.clone() * k.clone()).normalize();
        }
    }

    fn check_same_size(&self, other: &Vector<T>) -> LinalgResult<()> {
        if self.n != other.n {
            return Err(LinalgError::dimension(
                format!("vector of size {}", self.n),
                format!("vector of size {}", other.n),
            ));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Vector<T>, f: impl Fn(T, T) -> T) -> LinalgResult<Vector<T>> {
        self.check_same_size(other)?;
        Ok(Vector::from_list(
            self.elems
                .iter()
                .zip(other.elems.iter())
                .map(|(a, b)| f(a.clone(), b.clone()))
                .collect(),
        ))
    }
}

/// Unit vector pointing in the direction of `v`.
pub fn normalize<T: Scalar>(v: &Vector<T>) -> LinalgResult<Vector<f64>> {
    let magnitude = v.magnitude();
    if magnitude == 0.0 {
        return Err(LinalgError::DivisionByZero);
    }
    Ok(Vector::from_list(
        v.elems.iter().map(|x| x.as_f64() / magnitude).collect(),
    ))
}

impl<T: Scalar> ops::Add<&Vector<T>> for &Vector<T> {
    type Output = LinalgResult<Vector<T>>;

    fn add(self, rhs: &Vector<T>) -> LinalgResult<Vector<T>> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> ops::Sub<&Vector<T>> for &Vector<T> {
    type Output = LinalgResult<Vector<T>>;

    fn sub(self, rhs: &Vector<T>) -> LinalgResult<Vector<T>> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Scalar> ops::Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.scale(&rhs)
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(elems: Vec<T>) -> Self {
        Vector::from_list(elems)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
