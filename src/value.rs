//! Numeric input normalization.

/// A numeric value normalized for rendering.
///
/// All entry points funnel integers and both floating-point widths into this
/// single representation, so `format(42, ..)` and `format(42.0, ..)` take the
/// same rendering path. The `is_integer` hint records that the value arrived
/// through an integer conversion; renderers that care about exact integers
/// (spell-out, ordinal) also accept floats with a zero fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    pub value: f64,
    pub is_integer: bool,
}

impl Number {
    /// Returns true if the value is mathematically an integer.
    pub fn is_integral(&self) -> bool {
        self.is_integer || (self.value.is_finite() && self.value.fract() == 0.0)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number {
            value,
            is_integer: false,
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number {
            value: value as f64,
            is_integer: false,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number {
            value: value as f64,
            is_integer: true,
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number {
            value: value as f64,
            is_integer: true,
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number {
            value: value as f64,
            is_integer: true,
        }
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number {
            value: value as f64,
            is_integer: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_sources_carry_hint() {
        assert!(Number::from(42).is_integer);
        assert!(Number::from(42u64).is_integer);
        assert!(!Number::from(42.0).is_integer);
    }

    #[test]
    fn test_integral_floats() {
        assert!(Number::from(42.0).is_integral());
        assert!(!Number::from(42.5).is_integral());
        assert!(!Number::from(f64::NAN).is_integral());
    }
}
