//! One full pass over an arch: validate, solve, classify, plot.

use serde::Serialize;

use crate::arch::Coefficients;
use crate::errors::ArchError;
use crate::parity::{QueryOutcome, SupportParity, SupportQuery};
use crate::plot::BridgePlot;
use crate::solver::{solve_roots, Roots};

/// Everything derived from an arch that touches the ground.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BridgeAnalysis {
    /// Input profile.
    pub coefficients: Coefficients,
    /// Rendered equation.
    pub equation: String,
    /// `b² − 4ac`, never negative here.
    pub discriminant: f64,
    /// Support positions.
    pub roots: Roots,
    /// Parity of each support.
    pub parity: SupportParity,
    /// Chart of platform and arch.
    pub plot: BridgePlot,
}

impl BridgeAnalysis {
    /// Answer a yes/no question about the supports.
    ///
    /// # Examples
    /// ```
    /// use bridgearch::{evaluate, Coefficients, SupportQuery};
    ///
    /// let evaluation = evaluate(Coefficients::new(1.0, -3.0, 2.0))?;
    /// let analysis = evaluation.analysis().expect("arch has supports");
    /// assert!(analysis.query(SupportQuery::AnyEven).satisfied);
    /// assert!(!analysis.query(SupportQuery::AllEven).satisfied);
    /// # Ok::<(), bridgearch::ArchError>(())
    /// ```
    #[must_use]
    pub fn query(&self, query: SupportQuery) -> QueryOutcome {
        self.parity.query(query)
    }
}

/// Result of evaluating an arch.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    /// The discriminant is negative: the arch never reaches the ground, so there is
    /// nothing to classify or plot.
    NoRealSupports {
        /// Input profile.
        coefficients: Coefficients,
        /// Rendered equation.
        equation: String,
        /// The negative discriminant.
        discriminant: f64,
    },
    /// The arch has two real supports.
    Supported(BridgeAnalysis),
}

impl Evaluation {
    /// The analysis, when the arch has real supports.
    #[must_use]
    pub fn analysis(&self) -> Option<&BridgeAnalysis> {
        match self {
            Self::Supported(analysis) => Some(analysis),
            Self::NoRealSupports { .. } => None,
        }
    }

    /// The rendered equation.
    #[must_use]
    pub fn equation(&self) -> &str {
        match self {
            Self::Supported(analysis) => &analysis.equation,
            Self::NoRealSupports { equation, .. } => equation,
        }
    }
}

/// Evaluate an arch profile.
///
/// Parity classification and plotting only run when the profile has real roots.
///
/// # Errors
///
/// Returns [`ArchError`] when the coefficients do not describe a quadratic, or when
/// the roots or the sampled arch overflow double precision.
///
/// # Examples
/// ```
/// use bridgearch::{evaluate, Coefficients, Evaluation};
///
/// let evaluation = evaluate(Coefficients::new(1.0, 0.0, 1.0))?;
/// assert!(matches!(evaluation, Evaluation::NoRealSupports { .. }));
/// # Ok::<(), bridgearch::ArchError>(())
/// ```
pub fn evaluate(coefficients: Coefficients) -> Result<Evaluation, ArchError> {
    let equation = coefficients.equation();
    log::debug!("evaluating arch {equation}");
    let discriminant = coefficients.discriminant();
    let Some(roots) = solve_roots(&coefficients)? else {
        return Ok(Evaluation::NoRealSupports {
            coefficients,
            equation,
            discriminant,
        });
    };
    let parity = SupportParity::classify(&roots);
    log::debug!(
        "support parity: first even = {}, second even = {}",
        parity.first,
        parity.second
    );
    let plot = BridgePlot::new(&coefficients, &roots)?;
    Ok(Evaluation::Supported(BridgeAnalysis {
        coefficients,
        equation,
        discriminant,
        roots,
        parity,
        plot,
    }))
}
