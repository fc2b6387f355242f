//! Parity classification of support positions.
//!
//! Parity is tested on the raw floating-point value with `x % 2 == 0`. Nothing is
//! rounded first, so only exactly even integer-valued positions count as even.

use std::fmt;

use serde::Serialize;

use crate::solver::Roots;

/// Return `true` when `x % 2` is exactly zero.
///
/// # Examples
/// ```
/// use bridgearch::is_even;
///
/// assert!(is_even(4.0));
/// assert!(!is_even(3.0));
/// assert!(!is_even(3.5));
/// assert!(!is_even(2.0000001));
/// ```
#[must_use]
pub fn is_even(x: f64) -> bool {
    x % 2.0 == 0.0
}

/// Parity of a single support position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    /// The position is an even integer.
    Even,
    /// Anything else, including every non-integer position.
    Odd,
}

impl Parity {
    /// Classify a position.
    #[must_use]
    pub fn of(x: f64) -> Self {
        if is_even(x) {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => f.write_str("even"),
            Self::Odd => f.write_str("odd"),
        }
    }
}

/// Parity of both supports, in solver order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SupportParity {
    /// Whether the first root is even.
    pub first: bool,
    /// Whether the second root is even.
    pub second: bool,
}

impl SupportParity {
    /// Classify both roots of an arch.
    #[must_use]
    pub fn classify(roots: &Roots) -> Self {
        Self {
            first: is_even(roots.x1),
            second: is_even(roots.x2),
        }
    }

    /// `true` when at least one support is even.
    #[must_use]
    pub fn any_even(&self) -> bool {
        self.first || self.second
    }

    /// `true` when both supports are even.
    #[must_use]
    pub fn all_even(&self) -> bool {
        self.first && self.second
    }

    /// Answer one of the support questions.
    #[must_use]
    pub fn query(&self, query: SupportQuery) -> QueryOutcome {
        let satisfied = match query {
            SupportQuery::AnyEven => self.any_even(),
            SupportQuery::AllEven => self.all_even(),
        };
        QueryOutcome::new(query, satisfied)
    }
}

/// The two yes/no questions a user can ask about the supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportQuery {
    /// Is at least one support position even?
    AnyEven,
    /// Are both support positions even?
    AllEven,
}

impl SupportQuery {
    /// The question as shown to the user.
    #[must_use]
    pub const fn question(self) -> &'static str {
        match self {
            Self::AnyEven => "Is any support position even?",
            Self::AllEven => "Are all support positions even?",
        }
    }
}

/// Answer to a [`SupportQuery`], with the message presented to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QueryOutcome {
    /// The question that was asked.
    pub query: SupportQuery,
    /// Whether the answer is "yes".
    pub satisfied: bool,
    /// Success or failure message.
    pub message: &'static str,
}

impl QueryOutcome {
    /// Pair an answer with its user-facing message.
    fn new(query: SupportQuery, satisfied: bool) -> Self {
        let message = match (query, satisfied) {
            (SupportQuery::AnyEven, true) => {
                "Yes! At least one of the support positions is even."
            }
            (SupportQuery::AnyEven, false) => "None of the support positions is even.",
            (SupportQuery::AllEven, true) => "Yes! Both support positions are even.",
            (SupportQuery::AllEven, false) => "No, not all support positions are even.",
        };
        Self {
            query,
            satisfied,
            message,
        }
    }
}
