#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod arch;
pub mod errors;
pub mod evaluation;
pub mod geometry;
pub mod parity;
pub mod plot;
pub mod solver;

pub use arch::{coefficients, Coefficients};
pub use errors::ArchError;
pub use evaluation::{evaluate, BridgeAnalysis, Evaluation};
pub use geometry::Point;
pub use parity::{is_even, Parity, QueryOutcome, SupportParity, SupportQuery};
pub use plot::{BridgePlot, LineStyle, Series};
pub use solver::{solve_roots, Roots};
