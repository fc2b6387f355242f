//! Quadratic description of the bridge arch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ArchError;

/// Coefficients of the arch profile `a·x² + b·x + c`.
///
/// `a` controls the curvature of the arch, `b` shifts its crown and `c` sets the
/// height at `x = 0`. The real roots of the profile are the support positions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Quadratic (curvature) coefficient.
    pub a: f64,
    /// Linear coefficient.
    pub b: f64,
    /// Constant coefficient.
    pub c: f64,
}

impl Coefficients {
    /// Create a set of coefficients.
    ///
    /// # Examples
    /// ```
    /// use bridgearch::Coefficients;
    ///
    /// let arch = Coefficients::new(1.0, -3.0, 2.0);
    /// assert_eq!(arch.discriminant(), 1.0);
    /// ```
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Return the discriminant `b² − 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Height of the arch at horizontal position `x`.
    #[must_use]
    pub fn height_at(&self, x: f64) -> f64 {
        self.a * x.powi(2) + self.b * x + self.c
    }

    /// Check that the coefficients describe a proper quadratic.
    ///
    /// # Errors
    ///
    /// Returns [`ArchError::NonFiniteCoefficient`] when any coefficient is NaN or
    /// infinite and [`ArchError::NotQuadratic`] when `a` is zero.
    pub fn validate(&self) -> Result<(), ArchError> {
        for (name, value) in [('a', self.a), ('b', self.b), ('c', self.c)] {
            if !value.is_finite() {
                return Err(ArchError::NonFiniteCoefficient { name, value });
            }
        }
        if self.a == 0.0 {
            return Err(ArchError::NotQuadratic);
        }
        Ok(())
    }

    /// Render the arch equation, e.g. `1x² + (-4)x + (0) = 0`.
    #[must_use]
    pub fn equation(&self) -> String {
        self.to_string()
    }
}

/// The demonstration arch `x² − 4x`, supported at 0 and 4.
impl Default for Coefficients {
    fn default() -> Self {
        Self::new(1.0, -4.0, 0.0)
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x² + ({})x + ({}) = 0", self.a, self.b, self.c)
    }
}

/// Convenience helper for creating [`Coefficients`].
///
/// # Examples
/// ```
/// use bridgearch::coefficients;
///
/// let arch = coefficients(1.0, 0.0, 1.0);
/// assert!(arch.discriminant() < 0.0);
/// ```
#[must_use]
pub const fn coefficients(a: f64, b: f64, c: f64) -> Coefficients {
    Coefficients::new(a, b, c)
}
