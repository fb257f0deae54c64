use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Div<f64> for Complex {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        Self {
            real: self.real / divisor,
            imag: self.imag / divisor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, -4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Complex::new(-3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_magnitude_does_not_overflow_for_large_parts() {
        let c = Complex::new(1e200, 1e200);

        assert!(c.magnitude_squared().is_infinite());
        assert!(c.magnitude().is_finite());
    }

    #[test]
    fn test_add_and_sub_are_inverse() {
        let a = Complex::new(1.5, -2.0);
        let b = Complex::new(-0.25, 7.0);

        assert_eq!((a + b) - b, a);
        assert_eq!(a - a, Complex::ZERO);
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        let c = Complex::new(2.0, 3.0);
        assert_eq!(c * c, Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_mul_by_i_rotates() {
        let i = Complex::new(0.0, 1.0);
        assert_eq!(Complex::new(1.0, 0.0) * i, i);
        assert_eq!(i * i, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_div_by_scalar() {
        let c = Complex::new(4.0, -2.0) / 2.0;
        assert_eq!(c, Complex::new(2.0, -1.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::new(1.0, 2.0).is_finite());
        assert!(!Complex::new(f64::INFINITY, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::NAN).is_finite());
    }
}
