//! Support positions of the arch from the quadratic formula.

use serde::Serialize;
use uom::si::{f64::Length, length::meter};

use crate::arch::Coefficients;
use crate::errors::ArchError;

/// The two real roots of an arch profile, i.e. where the arch meets the ground.
///
/// The order follows the quadratic formula: `x1` takes `+√D` and `x2` takes
/// `−√D`, so `x1` is not necessarily the smaller root.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Roots {
    /// Root computed with `+√D`.
    pub x1: f64,
    /// Root computed with `−√D`.
    pub x2: f64,
}

impl Roots {
    /// Create a root pair.
    #[must_use]
    pub const fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }

    /// The smaller of the two support positions.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.x1.min(self.x2)
    }

    /// The larger of the two support positions.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.x1.max(self.x2)
    }

    /// Distance between the supports, with positions read as metres.
    ///
    /// # Examples
    /// ```
    /// use bridgearch::Roots;
    /// use uom::si::length::meter;
    ///
    /// let span = Roots::new(4.0, 0.0).span();
    /// assert_eq!(span.get::<meter>(), 4.0);
    /// ```
    #[must_use]
    pub fn span(&self) -> Length {
        Length::new::<meter>(self.max() - self.min())
    }

    /// Both roots in solver order.
    #[must_use]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x1, self.x2]
    }
}

/// Solve `a·x² + b·x + c = 0` for the support positions of the arch.
///
/// Returns `Ok(None)` when the discriminant is negative and the arch never touches
/// the ground.
///
/// # Errors
///
/// Returns [`ArchError`] when the coefficients do not describe a quadratic (see
/// [`Coefficients::validate`]) and [`ArchError::NumericOverflow`] when the
/// discriminant or either root cannot be represented as a finite `f64`.
///
/// # Examples
/// ```
/// use bridgearch::{solve_roots, Coefficients, Roots};
///
/// let roots = solve_roots(&Coefficients::new(1.0, -3.0, 2.0))?;
/// assert_eq!(roots, Some(Roots::new(2.0, 1.0)));
///
/// let floating = solve_roots(&Coefficients::new(1.0, 0.0, 1.0))?;
/// assert_eq!(floating, None);
/// # Ok::<(), bridgearch::ArchError>(())
/// ```
pub fn solve_roots(coefficients: &Coefficients) -> Result<Option<Roots>, ArchError> {
    coefficients.validate()?;
    let Coefficients { a, b, .. } = *coefficients;
    let discriminant = coefficients.discriminant();
    if !discriminant.is_finite() {
        return Err(ArchError::NumericOverflow {
            quantity: "discriminant",
        });
    }
    if discriminant < 0.0 {
        log::debug!("discriminant {discriminant} is negative; no real supports");
        return Ok(None);
    }
    let root = discriminant.sqrt();
    let roots = Roots::new((-b + root) / (2.0 * a), (-b - root) / (2.0 * a));
    if !(roots.x1.is_finite() && roots.x2.is_finite()) {
        return Err(ArchError::NumericOverflow { quantity: "roots" });
    }
    log::debug!(
        "discriminant {discriminant} gives supports at {} and {}",
        roots.x1,
        roots.x2
    );
    Ok(Some(roots))
}
