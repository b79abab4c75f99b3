//! A small complex number type, mostly useful as an element type which is ordered but not totally ordered.
//!
//! [`Complex`] compares by *magnitude*: two numbers at the same distance from zero are neither less nor greater than each other, so the type implements [`PartialOrd`] but not [`Ord`]. Equality is approximate, with an absolute tolerance of [`TOLERANCE`] per component.
//!
//! ```rust
//! use kary::complex::Complex;
//!
//! let z: Complex = "3 + 4i".parse()?;
//! assert_eq!(z.abs(), 5.0);
//! assert_eq!(z * Complex::new(0.0, 1.0), Complex::new(-4.0, 3.0));
//! assert_eq!(z.to_string(), "3+4i");
//! assert!(Complex::new(1.0, 1.0) < z);
//! # Ok::<(), kary::complex::ParseComplexError>(())
//! ```
//!
//! [`Complex`]: struct.Complex.html " "
//! [`TOLERANCE`]: constant.TOLERANCE.html " "
//! [`PartialOrd`]: https://doc.rust-lang.org/std/cmp/trait.PartialOrd.html " "
//! [`Ord`]: https://doc.rust-lang.org/std/cmp/trait.Ord.html " "

use std::{
    cmp::Ordering,
    error::Error,
    fmt::{self, Formatter, Display},
    num::ParseFloatError,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

/// The largest difference between two components which still counts as equal.
pub const TOLERANCE: f64 = 0.001;

/// A complex number with `f64` components.
#[derive(Copy, Clone, Debug, Default)]
pub struct Complex {
    re: f64,
    im: f64,
}
impl Complex {
    /// Creates a complex number from its real and imaginary parts.
    #[inline(always)]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
    /// Returns the real part.
    #[inline(always)]
    pub const fn re(self) -> f64 {
        self.re
    }
    /// Returns the imaginary part.
    #[inline(always)]
    pub const fn im(self) -> f64 {
        self.im
    }
    /// Returns `true` if both components are exactly zero, `false` otherwise.
    #[inline]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
    /// Returns the magnitude, i.e. the distance from zero on the complex plane.
    #[inline]
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }
    /// Adds one to the real part, returning the value from before the increment.
    #[inline]
    pub fn increment(&mut self) -> Self {
        let previous = *self;
        self.re += 1.0;
        previous
    }
}

impl Neg for Complex {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}
impl Add for Complex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}
impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl Sub for Complex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}
impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl Mul for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}
impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Two numbers are equal if each pair of components differs by no more than [`TOLERANCE`]. Not transitive.
///
/// [`TOLERANCE`]: constant.TOLERANCE.html " "
impl PartialEq for Complex {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        (self.re - other.re).abs() <= TOLERANCE && (self.im - other.im).abs() <= TOLERANCE
    }
}
/// Compares by magnitude. Numbers which are equal compare as such; different numbers of the same magnitude are incomparable.
impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.abs().partial_cmp(&other.abs())? {
            Ordering::Equal => None,
            ordering => Some(ordering),
        }
    }
}

/// Formats the number as `re+imi` or `re-imi`, such as `3+4i` or `5-6i`.
impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.im >= 0.0 { '+' } else { '-' };
        write!(f, "{}{}{}i", self.re, sign, self.im.abs())
    }
}

/// Parses the format produced by the [`Display`] implementation. Whitespace is ignored anywhere in the input.
///
/// [`Display`]: #impl-Display " "
impl FromStr for Complex {
    type Err = ParseComplexError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let body = compact
            .strip_suffix('i')
            .ok_or(ParseComplexError::MissingImaginaryUnit)?;
        // The sign which separates the parts: not the leading one, and not an exponent sign
        let bytes = body.as_bytes();
        let split = (1..bytes.len())
            .rev()
            .find(|&i| {
                matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E')
            })
            .ok_or(ParseComplexError::MissingSign)?;
        let re = body[..split].parse::<f64>()?;
        let im = body[split + 1..].parse::<f64>()?;
        let im = if bytes[split] == b'-' { -im } else { im };
        Ok(Self::new(re, im))
    }
}

/// The error type returned when parsing a [`Complex`] from a string fails.
///
/// [`Complex`]: struct.Complex.html " "
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseComplexError {
    /// The input did not end with the imaginary unit `i`.
    MissingImaginaryUnit,
    /// No `+` or `-` separates the real part from the imaginary one.
    MissingSign,
    /// One of the parts is not a valid floating-point number.
    InvalidNumber(ParseFloatError),
}
impl From<ParseFloatError> for ParseComplexError {
    #[inline]
    fn from(op: ParseFloatError) -> Self {
        Self::InvalidNumber(op)
    }
}
impl Display for ParseComplexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingImaginaryUnit => f.pad("complex number must end with `i`"),
            Self::MissingSign => f.pad("expected `+` or `-` between the real and imaginary parts"),
            Self::InvalidNumber(e) => write!(f, "invalid component: {}", e),
        }
    }
}
impl Error for ParseComplexError {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidNumber(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);
        assert_eq!(a + b, Complex::new(4.0, 1.0));
        assert_eq!(a - b, Complex::new(-2.0, 3.0));
        assert_eq!(a * b, Complex::new(5.0, 5.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        c -= Complex::new(1.0, 0.0);
        c *= Complex::new(0.0, 1.0);
        assert_eq!(c, Complex::new(-1.0, 3.0));
    }

    #[test]
    fn increment_returns_previous_value() {
        let mut z = Complex::new(1.5, 2.0);
        assert_eq!(z.increment(), Complex::new(1.5, 2.0));
        assert_eq!(z, Complex::new(2.5, 2.0));
        assert_eq!(z.re(), 2.5);
        assert_eq!(z.im(), 2.0);
    }

    #[test]
    fn zero_and_magnitude() {
        assert!(Complex::default().is_zero());
        assert!(!Complex::new(0.0, 0.0001).is_zero());
        assert_eq!(Complex::new(-5.0, 12.0).abs(), 13.0);
    }

    #[test]
    fn equality_is_approximate() {
        assert_eq!(Complex::new(1.0, 1.0), Complex::new(1.0005, 0.9995));
        assert_ne!(Complex::new(1.0, 1.0), Complex::new(1.002, 1.0));
    }

    #[test]
    fn ordering_by_magnitude() {
        let small = Complex::new(1.0, 1.0);
        let big = Complex::new(3.0, 4.0);
        assert!(small < big);
        assert!(big > small);
        assert_eq!(small.partial_cmp(&small), Some(Ordering::Equal));
        // Same magnitude, different numbers
        let rotated = Complex::new(4.0, 3.0);
        assert_eq!(big.partial_cmp(&rotated), None);
        assert!(!(big < rotated) && !(big > rotated));
    }

    #[test]
    fn display() {
        assert_eq!(Complex::new(3.0, 4.0).to_string(), "3+4i");
        assert_eq!(Complex::new(5.0, -6.0).to_string(), "5-6i");
        assert_eq!(Complex::new(-0.5, 0.0).to_string(), "-0.5+0i");
    }

    #[test]
    fn parsing() {
        assert_eq!("3+4i".parse::<Complex>(), Ok(Complex::new(3.0, 4.0)));
        assert_eq!(" 5 - 6 i ".parse::<Complex>(), Ok(Complex::new(5.0, -6.0)));
        assert_eq!("-1.5e2+2E-1i".parse::<Complex>(), Ok(Complex::new(-150.0, 0.2)));
        let z = Complex::new(-2.25, -0.75);
        assert_eq!(z.to_string().parse::<Complex>(), Ok(z));
    }

    #[test]
    fn parsing_errors() {
        assert_eq!(
            "3+4".parse::<Complex>(),
            Err(ParseComplexError::MissingImaginaryUnit),
        );
        assert_eq!("-4i".parse::<Complex>(), Err(ParseComplexError::MissingSign));
        assert!(matches!(
            "x+4i".parse::<Complex>(),
            Err(ParseComplexError::InvalidNumber(..)),
        ));
    }
}
