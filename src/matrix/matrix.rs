use crate::error::{LinalgError, LinalgResult};
use crate::matrix::vector::Vector;
use crate::rings::scalar::Scalar;
use std::ops;

/// Dense `m x n` matrix stored as `m` row vectors.
///
/// The last `aug` columns form the augmented block, the split point is
/// `n - aug`. A matrix owns its rows: cloning deep copies them.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    pub(crate) m: usize,
    pub(crate) n: usize,
    pub(crate) rows: Vec<Vector<T>>,
    pub(crate) aug: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Builds an `m x n` matrix from `m` rows, each a [`Vector`] or a `Vec`.
    pub fn new<R: Into<Vector<T>>>(m: usize, n: usize, rows: Vec<R>) -> LinalgResult<Self> {
        if rows.len() != m {
            return Err(LinalgError::dimension(
                format!("{m} rows"),
                format!("{} rows", rows.len()),
            ));
        }

        let rows = rows
            .into_iter()
            .map(|row| {
                let row: Vector<T> = row.into();
                if row.n != n {
                    return Err(LinalgError::dimension(
                        format!("rows of length {n}"),
                        format!("a row of length {}", row.n),
                    ));
                }
                Ok(row)
            })
            .collect::<LinalgResult<Vec<_>>>()?;

        Ok(Matrix { m, n, rows, aug: 0 })
    }

    pub fn zeros(m: usize, n: usize) -> Self {
        Matrix {
            m,
            n,
            rows: (0..m).map(|_| Vector::zeros(n)).collect(),
            aug: 0,
        }
    }

    /// Shape is inferred from the lines, which must all have the same length.
    pub fn from_list(lines: Vec<Vec<T>>) -> LinalgResult<Self> {
        let m = lines.len();
        let n = lines.first().map(|l| l.len()).unwrap_or(0);
        Matrix::new(m, n, lines)
    }

    /// Marks the last `aug` columns as the augmented block.
    pub fn with_aug(mut self, aug: usize) -> LinalgResult<Self> {
        if aug > self.n {
            return Err(LinalgError::dimension(
                format!("at most {} augmented columns", self.n),
                format!("{aug} augmented columns"),
            ));
        }
        self.aug = aug;
        Ok(self)
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.rows.iter().map(|row| row.to_list()).collect()
    }

    pub fn rows(&self) -> usize {
        self.m
    }

    pub fn cols(&self) -> usize {
        self.n
    }

    pub fn aug(&self) -> usize {
        self.aug
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    pub fn is_square(&self) -> bool {
        self.m == self.n
    }

    pub fn row(&self, i: usize) -> LinalgResult<&Vector<T>> {
        self.check_row(i)?;
        Ok(&self.rows[i])
    }

    pub fn col(&self, j: usize) -> LinalgResult<Vector<T>> {
        self.check_col(j)?;
        Ok(Vector::from_list(
            self.rows.iter().map(|row| row.elems[j].clone()).collect(),
        ))
    }

    pub fn at(&self, i: usize, j: usize) -> LinalgResult<T> {
        self.row(i)?.at(j)
    }

    pub fn edit_entry(&mut self, i: usize, j: usize, value: T) -> LinalgResult<()> {
        self.check_row(i)?;
        self.rows[i].set(j, value)
    }

    pub fn swap_rows_in_place(&mut self, a: usize, b: usize) -> LinalgResult<()> {
        self.check_row(a)?;
        self.check_row(b)?;
        self.rows.swap(a, b);
        Ok(())
    }

    pub fn swap_cols_in_place(&mut self, a: usize, b: usize) -> LinalgResult<()> {
        self.check_col(a)?;
        self.check_col(b)?;
        for row in self.rows.iter_mut() {
            row.elems.swap(a, b);
        }
        Ok(())
    }

    /// Copy of the matrix with rows `a` and `b` exchanged.
    pub fn swap_rows(&self, a: usize, b: usize) -> LinalgResult<Self> {
        let mut swapped = self.clone();
        swapped.swap_rows_in_place(a, b)?;
        Ok(swapped)
    }

    /// Copy of the matrix with columns `a` and `b` exchanged.
    pub fn swap_cols(&self, a: usize, b: usize) -> LinalgResult<Self> {
        let mut swapped = self.clone();
        swapped.swap_cols_in_place(a, b)?;
        Ok(swapped)
    }

    /// Elementary row operation `row[dst] <- row[dst] + scale * row[src]`.
    pub fn row_add(&mut self, src: usize, dst: usize, scale: &T) -> LinalgResult<()> {
        self.check_row(src)?;
        self.check_row(dst)?;
        let source = self.rows[src].clone();
        self.rows[dst].add_scaled_in_place(&source, scale);
        Ok(())
    }

    /// Elementary row operation `row[i] <- scale * row[i]`.
    pub fn row_scale(&mut self, i: usize, scale: &T) -> LinalgResult<()> {
        self.check_row(i)?;
        self.rows[i].scale_in_place(scale);
        Ok(())
    }

    /// Sub-matrix of `size = (rows, cols)` whose top left corner is `pos`.
    ///
    /// Columns of the block that fall in the augmented region stay augmented.
    pub fn block(&self, pos: (usize, usize), size: (usize, usize)) -> LinalgResult<Self> {
        // saturated ends always fall outside the matrix
        let end = (pos.0.saturating_add(size.0), pos.1.saturating_add(size.1));
        if end.0 > self.m || end.1 > self.n {
            return Err(LinalgError::RangeOutOfBounds {
                end,
                shape: self.shape(),
            });
        }

        let split = self.n - self.aug;
        let aug = end.1.saturating_sub(split.max(pos.1));

        Ok(Matrix {
            m: size.0,
            n: size.1,
            rows: self.rows[pos.0..end.0]
                .iter()
                .map(|row| Vector {
                    n: size.1,
                    elems: row.elems[pos.1..end.1].to_vec(),
                })
                .collect(),
            aug,
        })
    }

    /// The augmented block, the columns right of the split point.
    pub fn get_augmented(&self) -> LinalgResult<Self> {
        self.check_augmented()?;
        let mut block = self.block((0, self.n - self.aug), (self.m, self.aug))?;
        block.aug = 0;
        Ok(block)
    }

    /// Everything left of the split point.
    pub fn get_non_augmented(&self) -> LinalgResult<Self> {
        self.check_augmented()?;
        let mut block = self.block((0, 0), (self.m, self.n - self.aug))?;
        block.aug = 0;
        Ok(block)
    }

    pub fn transpose(&self) -> Self {
        Matrix {
            m: self.n,
            n: self.m,
            rows: (0..self.n)
                .map(|j| Vector {
                    n: self.m,
                    elems: self.rows.iter().map(|row| row.elems[j].clone()).collect(),
                })
                .collect(),
            aug: 0,
        }
    }

    /// Entrywise comparison with an absolute tolerance, the augmentation is ignored.
    pub fn approx_eq(&self, other: &Matrix<T>, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .rows
                .iter()
                .zip(other.rows.iter())
                .all(|(a, b)| a.approx_eq(b, tolerance))
    }

    pub(crate) fn check_row(&self, i: usize) -> LinalgResult<()> {
        if i >= self.m {
            return Err(LinalgError::IndexOutOfBounds {
                index: i,
                len: self.m,
            });
        }
        Ok(())
    }

    fn check_col(&self, j: usize) -> LinalgResult<()> {
        if j >= self.n {
            return Err(LinalgError::IndexOutOfBounds {
                index: j,
                len: self.n,
            });
        }
        Ok(())
    }

    fn check_augmented(&self) -> LinalgResult<()> {
        if self.aug == 0 {
            return Err(LinalgError::InvalidState(
                "matrix has no augmented columns".into(),
            ));
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Matrix<T>) -> LinalgResult<()> {
        if self.shape() != other.shape() {
            return Err(LinalgError::dimension(
                format!("{}x{} matrix", self.m, self.n),
                format!("{}x{} matrix", other.m, other.n),
            ));
        }
        Ok(())
    }
}

pub fn identity_matrix<T: Scalar>(n: usize) -> Matrix<T> {
    Matrix {
        m: n,
        n,
        rows: (0..n)
            .map(|i| Vector {
                n,
                elems: (0..n)
                    .map(|j| if i == j { T::one() } else { T::zero() })
                    .collect(),
            })
            .collect(),
        aug: 0,
    }
}

pub fn swap_rows<T: Scalar>(a: &Matrix<T>, i: usize, j: usize) -> LinalgResult<Matrix<T>> {
    a.swap_rows(i, j)
}

pub fn swap_cols<T: Scalar>(a: &Matrix<T>, i: usize, j: usize) -> LinalgResult<Matrix<T>> {
    a.swap_cols(i, j)
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Matrix<T>) -> bool {
        self.shape() == other.shape() && self.rows == other.rows
    }
}

// A vector compares as an `n x 1` column
impl<T: Scalar> PartialEq<Vector<T>> for Matrix<T> {
    fn eq(&self, other: &Vector<T>) -> bool {
        self.n == 1
            && self.m == other.n
            && self
                .rows
                .iter()
                .zip(other.elems.iter())
                .all(|(row, x)| row.elems[0] == *x)
    }
}

impl<T: Scalar> PartialEq<Matrix<T>> for Vector<T> {
    fn eq(&self, other: &Matrix<T>) -> bool {
        other == self
    }
}

impl<T: Scalar> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = LinalgResult<Matrix<T>>;

    fn add(self, rhs: &Matrix<T>) -> LinalgResult<Matrix<T>> {
        self.check_same_shape(rhs)?;
        Ok(Matrix {
            m: self.m,
            n: self.n,
            rows: self
                .rows
                .iter()
                .zip(rhs.rows.iter())
                .map(|(a, b)| a + b)
                .collect::<LinalgResult<_>>()?,
            aug: 0,
        })
    }
}

impl<T: Scalar> ops::Sub<&Matrix<T>> for &Matrix<T> {
    type Output = LinalgResult<Matrix<T>>;

    fn sub(self, rhs: &Matrix<T>) -> LinalgResult<Matrix<T>> {
        self.check_same_shape(rhs)?;
        Ok(Matrix {
            m: self.m,
            n: self.n,
            rows: self
                .rows
                .iter()
                .zip(rhs.rows.iter())
                .map(|(a, b)| a - b)
                .collect::<LinalgResult<_>>()?,
            aug: 0,
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::fraction::Fraction;
    use proptest::prelude::*;

    fn matrix(lines: &[&[f64]]) -> Matrix<f64> {
        Matrix::from_list(lines.iter().map(|l| l.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_matrix_new() {
        let a = Matrix::<f64>::new(2, 2, vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(a.to_list(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

        let rows = vec![Vector::from_list(vec![1.0, 2.0, 3.0])];
        let b = Matrix::<f64>::new(1, 3, rows.clone()).unwrap();
        assert_eq!(b.row(0).unwrap(), &rows[0]);

        assert!(matches!(
            Matrix::<f64>::new(3, 2, vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
            Err(LinalgError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            Matrix::<f64>::new(2, 2, vec![vec![1.0, 2.0], vec![3.0]]),
            Err(LinalgError::DimensionMismatch { .. })
        ));
        assert!(Matrix::<f64>::from_list(vec![vec![1.0], vec![2.0, 3.0]]).is_err());

        let z = Matrix::<f64>::zeros(2, 3);
        assert_eq!(z.shape(), (2, 3));
        assert!(z.to_list().iter().flatten().all(|x| *x == 0.0));
        assert!(Matrix::<f64>::zeros(0, 0).to_list().is_empty());

        assert!(z.clone().with_aug(4).is_err());
        assert_eq!(z.with_aug(1).unwrap().aug(), 1);
    }

    #[test]
    fn test_matrix_add_sub() {
        let a1 = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        let a2 = matrix(&[&[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0], &[1.0, 2.0, 3.0]]);

        assert_eq!(
            (&a1 + &a2).unwrap(),
            matrix(&[&[5.0, 7.0, 9.0], &[11.0, 13.0, 15.0], &[8.0, 10.0, 12.0]])
        );
        assert_eq!(
            (&a1 - &a2).unwrap(),
            matrix(&[&[-3.0, -3.0, -3.0], &[-3.0, -3.0, -3.0], &[6.0, 6.0, 6.0]])
        );
        assert!(matches!(
            &a1 + &Matrix::zeros(3, 2),
            Err(LinalgError::DimensionMismatch { .. })
        ));
        assert!((&a1 - &Matrix::zeros(2, 3)).is_err());
    }

    #[test]
    fn test_matrix_at() {
        let a = matrix(&[&[1.0, 5.0], &[6.0, 2.0], &[7.0, 7.0]]);
        assert_eq!(a.at(1, 0), Ok(6.0));
        assert_eq!(
            a.at(3, 0),
            Err(LinalgError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            a.at(0, 2),
            Err(LinalgError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(a.col(1).unwrap(), Vector::from_list(vec![5.0, 2.0, 7.0]));
        assert!(a.col(2).is_err());
    }

    #[test]
    fn test_swap_rows_and_cols() {
        let mut a8 = matrix(&[&[1.0, 5.0], &[6.0, 2.0], &[7.0, 7.0]]);
        let a10 = swap_rows(&a8, 1, 2).unwrap();
        assert_eq!(a8, matrix(&[&[1.0, 5.0], &[6.0, 2.0], &[7.0, 7.0]]));
        assert_eq!(a10, matrix(&[&[1.0, 5.0], &[7.0, 7.0], &[6.0, 2.0]]));

        a8.swap_rows_in_place(1, 2).unwrap();
        assert_eq!(a8, a10);
        assert!(a8.swap_rows_in_place(0, 3).is_err());

        let mut a9 = matrix(&[&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0]]);
        let a11 = swap_cols(&a9, 1, 2).unwrap();
        assert_eq!(a9, matrix(&[&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0]]));
        assert_eq!(a11, matrix(&[&[1.0, 3.0, 2.0, 4.0], &[5.0, 7.0, 6.0, 8.0]]));

        a9.swap_cols_in_place(1, 2).unwrap();
        assert_eq!(a9, a11);
        assert!(a9.swap_cols(4, 0).is_err());
    }

    #[test]
    fn test_row_operations() {
        let mut a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        a.row_add(0, 1, &-3.0).unwrap();
        assert_eq!(a, matrix(&[&[1.0, 2.0], &[0.0, -2.0]]));

        a.row_scale(1, &-0.5).unwrap();
        assert_eq!(a, matrix(&[&[1.0, 2.0], &[0.0, 1.0]]));

        a.row_add(1, 1, &1.0).unwrap();
        assert_eq!(a, matrix(&[&[1.0, 2.0], &[0.0, 2.0]]));

        a.edit_entry(0, 1, 0.30000000000000004 * 10.0).unwrap();
        assert_eq!(a.at(0, 1), Ok(3.0));

        assert!(a.row_add(2, 0, &1.0).is_err());
        assert!(a.row_scale(2, &1.0).is_err());
        assert!(a.edit_entry(0, 2, 1.0).is_err());
    }

    #[test]
    fn test_block() {
        let a = matrix(&[
            &[1.0, 2.0, 3.0, 4.0],
            &[5.0, 6.0, 7.0, 8.0],
            &[9.0, 10.0, 11.0, 12.0],
        ]);
        assert_eq!(
            a.block((1, 1), (2, 2)).unwrap(),
            matrix(&[&[6.0, 7.0], &[10.0, 11.0]])
        );
        assert_eq!(a.block((0, 0), (0, 0)).unwrap().shape(), (0, 0));
        assert_eq!(
            a.block((2, 0), (2, 1)),
            Err(LinalgError::RangeOutOfBounds {
                end: (4, 1),
                shape: (3, 4)
            })
        );
        assert!(a.block((0, 3), (1, 2)).is_err());
    }

    #[test]
    fn test_block_size_overflow() {
        let a = identity_matrix::<f64>(2);
        assert_eq!(
            a.block((1, 0), (usize::MAX, 1)),
            Err(LinalgError::RangeOutOfBounds {
                end: (usize::MAX, 1),
                shape: (2, 2)
            })
        );
        assert!(matches!(
            a.block((0, usize::MAX), (1, usize::MAX)),
            Err(LinalgError::RangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_augmented_split() {
        let a = matrix(&[&[1.0, 2.0, 1.0, 0.0], &[3.0, 4.0, 0.0, 1.0]])
            .with_aug(2)
            .unwrap();
        assert_eq!(a.get_augmented().unwrap(), identity_matrix::<f64>(2));
        assert_eq!(a.get_augmented().unwrap().aug(), 0);
        assert_eq!(
            a.get_non_augmented().unwrap(),
            matrix(&[&[1.0, 2.0], &[3.0, 4.0]])
        );
        assert_eq!(a.block((0, 1), (2, 2)).unwrap().aug(), 1);
        assert_eq!(a.block((0, 0), (2, 2)).unwrap().aug(), 0);

        let plain = matrix(&[&[1.0]]);
        assert!(matches!(
            plain.get_augmented(),
            Err(LinalgError::InvalidState(_))
        ));
        assert!(matches!(
            plain.get_non_augmented(),
            Err(LinalgError::InvalidState(_))
        ));
    }

    #[test]
    fn test_equality() {
        let a6 = matrix(&[&[0.0, 2.0], &[3.0, 0.0]]);
        let a7 = matrix(&[&[3.0, 1.0], &[4.0, 7.0]]);
        assert_ne!(a6, a7);
        assert_eq!(a6, a6.clone());
        assert_ne!(matrix(&[&[1.0, 2.0]]), matrix(&[&[1.0], &[2.0]]));

        let column = matrix(&[&[1.0], &[2.0], &[3.0]]);
        let v = Vector::from_list(vec![1.0, 2.0, 3.0]);
        assert!(column == v);
        assert!(v == column);
        assert!(matrix(&[&[1.0, 2.0, 3.0]]) != v);

        // augmentation does not take part in equality
        assert_eq!(a6.clone().with_aug(1).unwrap(), a6);
    }

    #[test]
    fn test_identity_and_transpose() {
        let i3 = identity_matrix::<f64>(3);
        assert_eq!(
            i3,
            matrix(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]])
        );

        let a5 = matrix(&[
            &[1.0, 2.0, 3.0],
            &[4.0, 5.0, 6.0],
            &[7.0, 8.0, 9.0],
            &[10.0, 11.0, 12.0],
        ]);
        assert_eq!(
            a5.transpose(),
            matrix(&[
                &[1.0, 4.0, 7.0, 10.0],
                &[2.0, 5.0, 8.0, 11.0],
                &[3.0, 6.0, 9.0, 12.0]
            ])
        );
        assert_eq!(a5.transpose().transpose(), a5);

        let exact = identity_matrix::<Fraction>(2);
        assert_eq!(exact.at(1, 1), Ok(Fraction::from(1i64)));
    }

    #[test]
    fn test_copy_is_deep() {
        let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let mut b = a.clone();
        b.edit_entry(0, 0, 9.0).unwrap();
        assert_eq!(a.at(0, 0), Ok(1.0));
        assert_ne!(a.rows[0].elems.as_ptr(), b.rows[0].elems.as_ptr());
    }

    fn lines_to_matrix(lines: Vec<Vec<i64>>) -> Matrix<f64> {
        Matrix::from_list(
            lines
                .into_iter()
                .map(|l| l.into_iter().map(|x| x as f64).collect())
                .collect(),
        )
        .unwrap()
    }

    fn shaped_matrix(m: usize, n: usize) -> impl Strategy<Value = Matrix<f64>> {
        prop::collection::vec(prop::collection::vec(-50i64..50, n), m).prop_map(lines_to_matrix)
    }

    fn small_matrix() -> impl Strategy<Value = Matrix<f64>> {
        (1usize..5, 1usize..5).prop_flat_map(|(m, n)| shaped_matrix(m, n))
    }

    // three independent matrices sharing one shape
    fn matrix_triple() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>, Matrix<f64>)> {
        (1usize..5, 1usize..5).prop_flat_map(|(m, n)| {
            (shaped_matrix(m, n), shaped_matrix(m, n), shaped_matrix(m, n))
        })
    }

    proptest! {
        #[test]
        fn prop_transpose_involution(a in small_matrix()) {
            prop_assert_eq!(a.transpose().transpose(), a);
        }

        #[test]
        fn prop_add_associative((a, b, c) in matrix_triple()) {
            let left = (&(&a + &b).unwrap() + &c).unwrap();
            let right = (&a + &(&b + &c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }
    }
}
