use crate::error::{LinalgError, LinalgResult};
use crate::matrix::matrix::Matrix;
use crate::matrix::vector::Vector;
use crate::rings::scalar::Scalar;
use std::ops;

/// Right hand side of a polymorphic operation.
#[derive(Debug)]
pub enum Operand<'a, T> {
    Scalar(&'a T),
    Vector(&'a Vector<T>),
    Matrix(&'a Matrix<T>),
}

/// Result of [`Matrix::multiply`] and [`Vector::multiply`].
#[derive(Debug, Clone)]
pub enum Product<T> {
    Scalar(T),
    Vector(Vector<T>),
    Matrix(Matrix<T>),
}

impl<T> Operand<'_, T> {
    fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Vector(_) => "vector",
            Operand::Matrix(_) => "matrix",
        }
    }
}

impl<'a, T> From<&'a Vector<T>> for Operand<'a, T> {
    fn from(v: &'a Vector<T>) -> Self {
        Operand::Vector(v)
    }
}

impl<'a, T> From<&'a Matrix<T>> for Operand<'a, T> {
    fn from(a: &'a Matrix<T>) -> Self {
        Operand::Matrix(a)
    }
}

impl<T: Scalar> PartialEq for Product<T> {
    fn eq(&self, other: &Product<T>) -> bool {
        match (self, other) {
            (Product::Scalar(a), Product::Scalar(b)) => a == b,
            (Product::Vector(a), Product::Vector(b)) => a == b,
            (Product::Matrix(a), Product::Matrix(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Scalar> Product<T> {
    pub fn into_matrix(self) -> LinalgResult<Matrix<T>> {
        match self {
            Product::Matrix(a) => Ok(a),
            other => Err(LinalgError::TypeMismatch {
                operation: "read a matrix from",
                operand: other.kind(),
            }),
        }
    }

    pub fn into_vector(self) -> LinalgResult<Vector<T>> {
        match self {
            Product::Vector(v) => Ok(v),
            other => Err(LinalgError::TypeMismatch {
                operation: "read a vector from",
                operand: other.kind(),
            }),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Product::Scalar(_) => "scalar",
            Product::Vector(_) => "vector",
            Product::Matrix(_) => "matrix",
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Matrix product with a matrix or a vector. Scalars are rejected.
    pub fn multiply<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> LinalgResult<Product<T>>
    where
        T: 'a,
    {
        match rhs.into() {
            Operand::Matrix(other) => self.mul_matrix(other).map(Product::Matrix),
            Operand::Vector(v) => self.mul_vector(v).map(Product::Vector),
            operand => Err(LinalgError::TypeMismatch {
                operation: "multiply a matrix",
                operand: operand.kind(),
            }),
        }
    }

    fn mul_matrix(&self, other: &Matrix<T>) -> LinalgResult<Matrix<T>> {
        if self.n != other.m {
            return Err(LinalgError::dimension(
                format!("{} rows on the right", self.n),
                format!("{} rows", other.m),
            ));
        }

        let columns = other.transpose();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                columns
                    .rows
                    .iter()
                    .map(|col| row.dot(col))
                    .collect::<LinalgResult<Vec<T>>>()
            })
            .collect::<LinalgResult<Vec<_>>>()?;

        Matrix::new(self.m, other.n, rows)
    }

    fn mul_vector(&self, v: &Vector<T>) -> LinalgResult<Vector<T>> {
        if self.n != v.n {
            return Err(LinalgError::dimension(
                format!("vector of size {}", self.n),
                format!("vector of size {}", v.n),
            ));
        }

        Ok(Vector::from_list(
            self.rows
                .iter()
                .map(|row| row.dot(v))
                .collect::<LinalgResult<_>>()?,
        ))
    }
}

impl<T: Scalar> Vector<T> {
    /// Scalar multiplication. Any other operand is a type mismatch.
    pub fn times(&self, k: Operand<'_, T>) -> LinalgResult<Vector<T>> {
        match k {
            Operand::Scalar(k) => Ok(self.scale(k)),
            operand => Err(LinalgError::TypeMismatch {
                operation: "scale a vector",
                operand: operand.kind(),
            }),
        }
    }

    /// Scaling by a scalar, dot product with a vector.
    pub fn multiply(&self, rhs: Operand<'_, T>) -> LinalgResult<Product<T>> {
        match rhs {
            Operand::Scalar(k) => Ok(Product::Vector(self.scale(k))),
            Operand::Vector(v) => self.dot(v).map(Product::Scalar),
            operand => Err(LinalgError::TypeMismatch {
                operation: "multiply a vector",
                operand: operand.kind(),
            }),
        }
    }
}

/// Matrix transpose. A vector of length `n` becomes an `n x 1` column.
pub fn transpose<'a, T: Scalar + 'a>(a: impl Into<Operand<'a, T>>) -> LinalgResult<Matrix<T>> {
    match a.into() {
        Operand::Matrix(a) => Ok(a.transpose()),
        Operand::Vector(v) => Ok(column(v)),
        operand => Err(LinalgError::TypeMismatch {
            operation: "transpose",
            operand: operand.kind(),
        }),
    }
}

/// `[A | B]`, the columns of `b` appended to `a` and marked as augmented.
pub fn augment<'a, T: Scalar + 'a>(
    a: &Matrix<T>,
    b: impl Into<Operand<'a, T>>,
) -> LinalgResult<Matrix<T>> {
    let b = match b.into() {
        Operand::Matrix(b) => b.clone(),
        Operand::Vector(v) => column(v),
        operand => {
            return Err(LinalgError::TypeMismatch {
                operation: "augment",
                operand: operand.kind(),
            })
        }
    };

    if a.m != b.m {
        return Err(LinalgError::dimension(
            format!("{} rows", a.m),
            format!("{} rows", b.m),
        ));
    }

    let rows: Vec<Vector<T>> = a
        .rows
        .iter()
        .zip(b.rows.iter())
        .map(|(left, right)| Vector {
            n: left.n + right.n,
            elems: left.elems.iter().chain(right.elems.iter()).cloned().collect(),
        })
        .collect();

    Matrix::new(a.m, a.n + b.n, rows)?.with_aug(b.n)
}

fn column<T: Scalar>(v: &Vector<T>) -> Matrix<T> {
    Matrix {
        m: v.n,
        n: 1,
        rows: v
            .elems
            .iter()
            .map(|x| Vector {
                n: 1,
                elems: vec![x.clone()],
            })
            .collect(),
        aug: 0,
    }
}

impl<T: Scalar> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = LinalgResult<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> LinalgResult<Matrix<T>> {
        self.mul_matrix(rhs)
    }
}

impl<T: Scalar> ops::Mul<&Vector<T>> for &Matrix<T> {
    type Output = LinalgResult<Vector<T>>;

    fn mul(self, rhs: &Vector<T>) -> LinalgResult<Vector<T>> {
        self.mul_vector(rhs)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
