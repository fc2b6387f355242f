//! Error types produced while validating or solving an arch profile.

use thiserror::Error;

/// Error returned when a set of coefficients cannot describe a quadratic arch.
///
/// A negative discriminant is *not* an error: an arch without real supports is a
/// valid answer and is reported through [`Option::None`] or
/// [`Evaluation::NoRealSupports`](crate::Evaluation::NoRealSupports). The variants
/// below cover inputs for which the quadratic formula itself is undefined.
///
/// # Examples
///
/// ```
/// use bridgearch::{solve_roots, ArchError, Coefficients};
///
/// let flat = Coefficients::new(0.0, 2.0, -4.0);
/// let error = solve_roots(&flat).expect_err("linear profile rejected");
/// assert_eq!(error, ArchError::NotQuadratic);
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ArchError {
    /// Returned when the curvature coefficient `a` is zero.
    #[error("coefficient a must be non-zero for a quadratic arch")]
    NotQuadratic,
    /// Returned when a coefficient is NaN or infinite.
    #[error("coefficient {name} must be finite (received {value})")]
    NonFiniteCoefficient {
        /// Name of the offending coefficient (`a`, `b` or `c`).
        name: char,
        /// Rejected value.
        value: f64,
    },
    /// Returned when finite coefficients overflow double precision while solving
    /// or sampling the arch.
    #[error("{quantity} overflows double precision")]
    NumericOverflow {
        /// What could not be represented (`discriminant`, `roots` or `arch`).
        quantity: &'static str,
    },
}
