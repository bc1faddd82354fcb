use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexSquareError {
    InvalidSide { side: f64 },
}

impl fmt::Display for ComplexSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSide { side } => {
                write!(f, "complex square side must be positive and finite: {}", side)
            }
        }
    }
}

impl Error for ComplexSquareError {}

/// Axis-aligned square of the complex plane, anchored at its minimum corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexSquare {
    origin: Complex,
    side: f64,
}

impl ComplexSquare {
    pub fn new(origin: Complex, side: f64) -> Result<Self, ComplexSquareError> {
        if !side.is_finite() || side <= 0.0 {
            return Err(ComplexSquareError::InvalidSide { side });
        }

        Ok(Self { origin, side })
    }

    #[must_use]
    pub fn origin(&self) -> Complex {
        self.origin
    }

    #[must_use]
    pub fn side(&self) -> f64 {
        self.side
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.origin.real <= point.real
            && self.origin.imag <= point.imag
            && point.real <= self.origin.real + self.side
            && point.imag <= self.origin.imag + self.side
    }
}
