use bridgearch::{Coefficients, SupportQuery};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

/// Question that can be asked about the supports from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryArg {
    /// Is at least one support position even?
    AnyEven,
    /// Are both support positions even?
    AllEven,
}

impl From<QueryArg> for SupportQuery {
    fn from(value: QueryArg) -> Self {
        match value {
            QueryArg::AnyEven => SupportQuery::AnyEven,
            QueryArg::AllEven => SupportQuery::AllEven,
        }
    }
}

/// Longer description printed by `--help`.
const LONG_ABOUT: &str = "\
Model a bridge arch as the quadratic a·x² + b·x + c. The real roots of the \
equation are the positions of the bridge supports; each support is checked for \
parity and the bridge is summarised as a chart.";

/// Step-by-step instructions printed after the option list.
const INSTRUCTIONS: &str = "\
How to use:
  1. Set the bridge parameters: choose a, b and c to shape the arch.
  2. Read the solutions: the roots of the equation are the support positions.
     An arch that never meets the ground has no real solutions.
  3. Evaluate the solutions: pass --query any-even and/or --query all-even to
     check whether some or all support positions are even.
  4. Interpret the chart: the platform of the bridge is the black line between
     the supports, the arch is the red line. Use --json to hand the chart to a
     plotting tool.
  5. Experiment: change a, b and c to see how the structure and its supports
     move.";

/// Bridge arch simulator: solve a quadratic arch for its supports and plot it.
#[derive(Parser, Debug)]
#[command(name = "bridgearch")]
#[command(about = "Model a bridge arch as a quadratic curve and locate its supports")]
#[command(long_about = LONG_ABOUT, after_help = INSTRUCTIONS)]
#[command(version)]
pub struct Cli {
    /// Coefficient a (curvature of the arch)
    #[arg(
        short = 'a',
        long = "coef-a",
        env = "BRIDGEARCH_A",
        default_value_t = 1.0,
        allow_negative_numbers = true
    )]
    pub a: f64,

    /// Coefficient b (linear term of the arch)
    #[arg(
        short = 'b',
        long = "coef-b",
        env = "BRIDGEARCH_B",
        default_value_t = -4.0,
        allow_negative_numbers = true
    )]
    pub b: f64,

    /// Coefficient c (height of the arch at x = 0)
    #[arg(
        short = 'c',
        long = "coef-c",
        env = "BRIDGEARCH_C",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub c: f64,

    /// Ask a question about the supports (repeatable)
    #[arg(short, long = "query", value_enum)]
    pub queries: Vec<QueryArg>,

    /// Print the full evaluation as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Coefficients collected from the arguments.
    pub fn coefficients(&self) -> Coefficients {
        Coefficients::new(self.a, self.b, self.c)
    }

    /// Queries in the order they were given.
    pub fn support_queries(&self) -> Vec<SupportQuery> {
        self.queries.iter().copied().map(SupportQuery::from).collect()
    }

    /// Log level selected by `-v` flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
