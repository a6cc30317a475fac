use crate::matrix::matrix::Matrix;
use crate::matrix::vector::Vector;
use crate::rings::scalar::Scalar;
use itertools::Itertools;
use std::fmt;

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.elems.iter().map(Scalar::render).join(", "))
    }
}

/// One line per row, entries right aligned in columns one wider than the
/// longest entry, with a `|` before the augmented block.
impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.elems.iter().map(Scalar::render).collect())
            .collect();

        let width = cells
            .iter()
            .flatten()
            .map(|cell| cell.chars().count() + 1)
            .fold(2, usize::max);
        let split = (self.aug > 0).then(|| self.n - self.aug);

        for row in cells.iter() {
            write!(f, "[")?;
            for (j, cell) in row.iter().enumerate() {
                if split == Some(j) {
                    write!(f, " |")?;
                }
                write!(f, "{:>width$}", cell)?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
