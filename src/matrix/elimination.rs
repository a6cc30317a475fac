//! Gaussian elimination and the operations built on it.
//!
//! Pivots are taken on the diagonal: column `j` is reduced with row `j`,
//! after swapping in the first row below with a non-zero entry. A column
//! without such a row is skipped, so rank deficient input never fails.

use crate::error::{LinalgError, LinalgResult};
use crate::matrix::matrix::{identity_matrix, Matrix};
use crate::matrix::operand::augment;
use crate::matrix::vector::Vector;
use crate::rings::scalar::Scalar;
use log::{debug, trace};
use num_traits::{One, Zero};

/// Outcome of [`echelon_form`] or [`reduced_echelon_form`].
#[derive(Debug, Clone)]
pub struct Elimination<T> {
    pub reduced: Matrix<T>,
    /// `E` with `E * A == reduced`, when tracking was requested.
    pub elimination: Option<Matrix<T>>,
    /// `(-1)^swaps`, the determinant of `E` for the forward pass.
    pub sign: T,
}

// Working state, every row operation is mirrored on `e`
struct Eliminator<T> {
    u: Matrix<T>,
    e: Option<Matrix<T>>,
    sign: T,
}

impl<T: Scalar> Eliminator<T> {
    fn new(a: &Matrix<T>, track: bool) -> Self {
        Eliminator {
            u: a.clone(),
            e: track.then(|| identity_matrix(a.m)),
            sign: T::one(),
        }
    }

    #[inline(always)]
    fn entry(&self, i: usize, j: usize) -> &T {
        &self.u.rows[i].elems[j]
    }

    fn swap(&mut self, a: usize, b: usize) -> LinalgResult<()> {
        trace!("R{a} <-> R{b}");
        self.u.swap_rows_in_place(a, b)?;
        if let Some(e) = self.e.as_mut() {
            e.swap_rows_in_place(a, b)?;
        }
        self.sign = -self.sign.clone();
        Ok(())
    }

    // Adds `scale * R[src]` to `R[dst]` and sets `R[dst][col]` to zero,
    // `scale` being chosen to cancel it
    fn cancel(&mut self, src: usize, dst: usize, col: usize, scale: &T) -> LinalgResult<()> {
        trace!("R{dst} <- R{dst} + ({}) * R{src}", scale);
        self.u.row_add(src, dst, scale)?;
        self.u.rows[dst].elems[col] = T::zero();
        if let Some(e) = self.e.as_mut() {
            e.row_add(src, dst, scale)?;
        }
        Ok(())
    }

    fn normalize_pivot(&mut self, row: usize, pivot: &T) -> LinalgResult<()> {
        let scale = T::one() / pivot.clone();
        trace!("R{row} <- ({}) * R{row}", scale);
        self.u.row_scale(row, &scale)?;
        self.u.rows[row].elems[row] = T::one();
        if let Some(e) = self.e.as_mut() {
            e.row_scale(row, &scale)?;
        }
        Ok(())
    }

    fn forward(&mut self) -> LinalgResult<()> {
        let (m, n) = self.u.shape();

        for j in 0..m.min(n) {
            if self.entry(j, j).is_zero() {
                match (j + 1..m).find(|&i| !self.entry(i, j).is_zero()) {
                    Some(i) => {
                        debug!("pivot for column {j} found in row {i}");
                        self.swap(i, j)?;
                    }
                    None => {
                        debug!("column {j} has no pivot, skipping");
                        continue;
                    }
                }
            }

            let pivot = self.entry(j, j).clone();
            for i in j + 1..m {
                let below = self.entry(i, j);
                if below.is_zero() {
                    continue;
                }
                let scale = -(below.clone() / pivot.clone());
                self.cancel(j, i, j, &scale)?;
            }
        }
        Ok(())
    }

    fn backward(&mut self) -> LinalgResult<()> {
        let (m, n) = self.u.shape();

        for j in (0..m.min(n)).rev() {
            let pivot = self.entry(j, j).clone();
            if pivot.is_zero() {
                continue;
            }
            if !pivot.is_one() {
                self.normalize_pivot(j, &pivot)?;
            }

            for i in 0..j {
                let above = self.entry(i, j);
                if above.is_zero() {
                    continue;
                }
                let scale = -above.clone();
                self.cancel(j, i, j, &scale)?;
            }
        }
        Ok(())
    }

    fn finish(self) -> Elimination<T> {
        Elimination {
            reduced: self.u,
            elimination: self.e,
            sign: self.sign,
        }
    }
}

/// Row echelon form of `a`. The input is left untouched.
///
/// With `track`, the result carries `E` such that `E * a == reduced`.
pub fn echelon_form<T: Scalar>(a: &Matrix<T>, track: bool) -> LinalgResult<Elimination<T>> {
    let mut eliminator = Eliminator::new(a, track);
    eliminator.forward()?;
    Ok(eliminator.finish())
}

/// Reduced row echelon form of `a`: every pivot is 1 and alone in its column.
///
/// Tracking covers both passes, `E * a == reduced` holds here as well.
pub fn reduced_echelon_form<T: Scalar>(
    a: &Matrix<T>,
    track: bool,
) -> LinalgResult<Elimination<T>> {
    let mut eliminator = Eliminator::new(a, track);
    eliminator.forward()?;
    eliminator.backward()?;
    Ok(eliminator.finish())
}

pub fn determinant<T: Scalar>(a: &Matrix<T>) -> LinalgResult<T> {
    check_square(a)?;
    let Elimination { reduced, sign, .. } = echelon_form(a, false)?;

    let diagonal = (0..reduced.m)
        .map(|i| reduced.rows[i].elems[i].clone())
        .fold(T::one(), |acc, x| acc * x);
    Ok((diagonal / sign).normalize())
}

/// Gauss-Jordan inversion: `rref([A | I]) == [I | A^-1]`.
pub fn inverse<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    check_square(a)?;
    if a.n == 0 {
        return Ok(Matrix::zeros(0, 0));
    }
    let identity = identity_matrix::<T>(a.n);
    let reduced = reduced_echelon_form(&augment(a, &identity)?, false)?.reduced;

    if reduced.get_non_augmented()? != identity {
        debug!("{}x{} matrix is singular", a.m, a.n);
        return Err(LinalgError::SingularMatrix);
    }
    reduced.get_augmented()
}

/// Unique solution of `a * x == b` for a square non-singular `a`.
pub fn solve<T: Scalar>(a: &Matrix<T>, b: &Vector<T>) -> LinalgResult<Vector<T>> {
    check_square(a)?;
    let system = augment(a, b)?;
    if a.n == 0 {
        return Ok(Vector::zeros(0));
    }
    let reduced = reduced_echelon_form(&system, false)?.reduced;

    if reduced.get_non_augmented()? != identity_matrix::<T>(a.n) {
        debug!("no unique solution, {}x{} matrix is singular", a.m, a.n);
        return Err(LinalgError::SingularMatrix);
    }
    reduced.col(a.n)
}

/// Number of linearly independent rows.
///
/// Counted with a staircase elimination, so rank deficient columns do not
/// leave later pivots off the diagonal uncounted.
pub fn rank<T: Scalar>(a: &Matrix<T>) -> LinalgResult<usize> {
    let mut mat = a.clone();
    let mut rank = 0;

    for col in 0..mat.n {
        if rank >= mat.m {
            break;
        }
        let pivot_row = match (rank..mat.m).find(|&r| !mat.rows[r].elems[col].is_zero()) {
            Some(r) => r,
            None => continue,
        };
        mat.swap_rows_in_place(rank, pivot_row)?;

        let pivot = mat.rows[rank].elems[col].clone();
        for r in rank + 1..mat.m {
            let below = mat.rows[r].elems[col].clone();
            if !below.is_zero() {
                mat.row_add(rank, r, &-(below / pivot.clone()))?;
                mat.rows[r].elems[col] = T::zero();
            }
        }
        rank += 1;
    }
    Ok(rank)
}

/// Whether the leading entry of every row is strictly right of the one
/// above, with zero rows at the bottom.
pub fn is_ref<T: Scalar>(a: &Matrix<T>) -> bool {
    leading_columns(a).is_some()
}

pub fn is_rref<T: Scalar>(a: &Matrix<T>) -> bool {
    let leads = match leading_columns(a) {
        Some(leads) => leads,
        None => return false,
    };

    leads.iter().enumerate().all(|(i, col)| {
        a.rows[i].elems[*col].is_one()
            && (0..a.m).all(|r| r == i || a.rows[r].elems[*col].is_zero())
    })
}

// Leading column of each non-zero row, `None` if not in echelon form
fn leading_columns<T: Scalar>(a: &Matrix<T>) -> Option<Vec<usize>> {
    let mut leads: Vec<usize> = vec![];
    let mut seen_zero_row = false;

    for row in a.rows.iter() {
        match row.elems.iter().position(|x| !x.is_zero()) {
            None => seen_zero_row = true,
            Some(col) => {
                if seen_zero_row || leads.last().is_some_and(|last| col <= *last) {
                    return None;
                }
                leads.push(col);
            }
        }
    }
    Some(leads)
}

/// Elementary matrix exchanging rows `a` and `b`.
pub fn elementary_row_swap<T: Scalar>(n: usize, a: usize, b: usize) -> LinalgResult<Matrix<T>> {
    identity_matrix(n).swap_rows(a, b)
}

/// Elementary matrix adding `scale * R[src]` to `R[dst]`.
pub fn elementary_row_add<T: Scalar>(
    n: usize,
    src: usize,
    dst: usize,
    scale: &T,
) -> LinalgResult<Matrix<T>> {
    let mut e = identity_matrix(n);
    e.row_add(src, dst, scale)?;
    Ok(e)
}

/// Elementary matrix multiplying `R[row]` by `scale`.
pub fn elementary_row_scale<T: Scalar>(n: usize, row: usize, scale: &T) -> LinalgResult<Matrix<T>> {
    let mut e = identity_matrix(n);
    e.row_scale(row, scale)?;
    Ok(e)
}

fn check_square<T: Scalar>(a: &Matrix<T>) -> LinalgResult<()> {
    if !a.is_square() {
        return Err(LinalgError::dimension(
            "a square matrix",
            format!("{}x{} matrix", a.m, a.n),
        ));
    }
    Ok(())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
