use crate::rings::fraction::Fraction;
use crate::utils::{is_integer, snap_to_integer};
use num_traits::{One, ToPrimitive, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Element a [`Vector`](crate::matrix::vector::Vector) or
/// [`Matrix`](crate::matrix::matrix::Matrix) can hold.
///
/// Containers call [`Scalar::normalize`] once on every value they store, so
/// "effectively integer" floats never leak rounding noise into comparisons.
pub trait Scalar:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
{
    /// Canonical form of the value (integer snapping for floats).
    fn normalize(self) -> Self;

    fn as_f64(&self) -> f64;

    /// Text used by the matrix pretty printer.
    fn render(&self) -> String;
}

impl Scalar for f64 {
    #[inline(always)]
    fn normalize(self) -> f64 {
        snap_to_integer(self)
    }

    #[inline(always)]
    fn as_f64(&self) -> f64 {
        *self
    }

    fn render(&self) -> String {
        if self.is_finite() && is_integer(*self) {
            format!("{}", self.round() + 0.0)
        } else {
            format!("{:.2}", self)
        }
    }
}

impl Scalar for Fraction {
    // Always kept reduced by construction
    fn normalize(self) -> Fraction {
        self
    }

    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_scalar() {
        assert_eq!(2.9999999999999996_f64.normalize(), 3.0);
        assert_eq!(0.1_f64.normalize(), 0.1);
        assert_eq!(4.0_f64.render(), "4");
        assert_eq!((-7.0_f64).render(), "-7");
        assert_eq!(1.5_f64.render(), "1.50");
        assert_eq!((1.0_f64 / 3.0).render(), "0.33");
    }

    #[test]
    fn test_fraction_scalar() {
        let f = Fraction::from_str("-4/6").unwrap();
        assert_eq!(f.clone().normalize(), f);
        assert_eq!(f.render(), "-2/3");
        assert!((f.as_f64() + 2.0 / 3.0).abs() < 1e-12);
    }
}
