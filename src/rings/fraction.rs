use crate::error::{LinalgError, LinalgResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;

/// Exact rational number, always stored reduced with a positive denominator.
#[derive(Debug, Clone)]
pub struct Fraction {
    pub num: BigInt,
    pub den: BigInt,
}

impl Fraction {
    pub fn new(num: BigInt, den: BigInt) -> LinalgResult<Self> {
        if den.is_zero() {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(Self::reduced(num, den))
    }

    // `den` must be non-zero
    fn reduced(num: BigInt, den: BigInt) -> Self {
        let g = num.gcd(&den);
        let num = num / &g;
        let den = den / &g;

        if den.is_negative() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn from_str(s: &str) -> LinalgResult<Self> {
        let mut nums = s.trim().split('/');
        let num = nums
            .next()
            .ok_or_else(|| LinalgError::Parse("no number".into()))?;
        let den = nums.next().unwrap_or("1");
        if nums.next().is_some() {
            return Err(LinalgError::Parse(format!("too many '/' in {s:?}")));
        }

        let parse = |part: &str| {
            BigInt::parse_bytes(part.trim().as_bytes(), 10)
                .ok_or_else(|| LinalgError::Parse(format!("invalid number {part:?}")))
        };
        Fraction::new(parse(num)?, parse(den)?)
    }

    pub fn recip(&self) -> LinalgResult<Self> {
        Fraction::new(self.den.clone(), self.num.clone())
    }

    pub fn checked_div(&self, rhs: &Fraction) -> LinalgResult<Self> {
        Fraction::new(&self.num * &rhs.den, &self.den * &rhs.num)
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }
}

impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        (&self.num / &self.den).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        (&self.num / &self.den).to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.num.to_f64()? / self.den.to_f64()?)
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::reduced(self.num + rhs.num, self.den);
        }

        Fraction::reduced(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::reduced(self.num * rhs.num, self.den * rhs.den)
    }
}

/// Panics on a zero divisor, like integer division. See [`Fraction::checked_div`].
impl ops::Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        if rhs.is_zero() {
            panic!("attempt to divide a fraction by zero");
        }
        Fraction::reduced(self.num * rhs.den, self.den * rhs.num)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(1i64)
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(0i64)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * *rhs
    }
}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Eq for Fraction {}
impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        // denominators are positive, cross multiplication keeps the order
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fr(s: &str) -> Fraction {
        Fraction::from_str(s).unwrap()
    }

    #[test]
    fn test_fraction_reduced() {
        let f = fr("6/-4");
        assert_eq!(f.num, BigInt::from(-3));
        assert_eq!(f.den, BigInt::from(2));
        assert_eq!(f.to_string(), "-3/2");
        assert_eq!(fr("10/5").to_string(), "2");
        assert!(fr("10/5").is_integer());
    }

    #[test]
    fn test_fraction_errors() {
        assert_eq!(Fraction::from_str("1/0"), Err(LinalgError::DivisionByZero));
        assert!(matches!(Fraction::from_str("a/2"), Err(LinalgError::Parse(_))));
        assert!(matches!(Fraction::from_str("1/2/3"), Err(LinalgError::Parse(_))));
        assert_eq!(Fraction::zero().recip(), Err(LinalgError::DivisionByZero));
        assert_eq!(
            fr("1/2").checked_div(&Fraction::zero()),
            Err(LinalgError::DivisionByZero)
        );
    }

    #[test]
    fn test_fraction_arithmetic() {
        assert_eq!(fr("1/2") + fr("1/3"), fr("5/6"));
        assert_eq!(fr("1/2") - fr("1/3"), fr("1/6"));
        assert_eq!(fr("2/3") * fr("3/4"), fr("1/2"));
        assert_eq!(fr("2/3") / fr("4/3"), fr("1/2"));
        assert_eq!(-fr("2/3"), fr("-2/3"));
        assert_eq!(fr("3/7").recip().unwrap(), fr("7/3"));
        assert_eq!(fr("14/7"), 2i64);
        assert_ne!(fr("15/7"), 2i64);
        assert!(fr("-1/2") < fr("1/3"));
        assert_eq!(fr("3/4").to_f64(), Some(0.75));
        assert_eq!(
            vec![fr("1/2"), fr("1/4"), fr("1/4")].into_iter().sum::<Fraction>(),
            1i64
        );
    }

    #[test]
    #[should_panic]
    fn test_fraction_div_by_zero_panics() {
        let _ = fr("1/2") / Fraction::zero();
    }
}
