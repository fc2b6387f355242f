use bridgearch::{BridgeAnalysis, Evaluation, Parity, QueryOutcome, SupportQuery};
use serde::Serialize;
use std::fmt::Write;
use uom::si::length::meter;

/// Message shown when the arch never meets the ground.
pub const NO_REAL_SOLUTIONS: &str = "The arch equation has no real solutions.";

/// Render a textual report of an arch evaluation followed by the answers to
/// `queries`.
///
/// Queries are skipped when the arch has no supports, the same way the plot is.
#[must_use]
pub fn render_evaluation(evaluation: &Evaluation, queries: &[SupportQuery]) -> String {
    let mut output = String::new();

    // State the arch first so every number below can be traced back to it.
    writeln!(&mut output, "Bridge arch equation: {}", evaluation.equation())
        .expect("writing to string cannot fail");

    match evaluation {
        Evaluation::NoRealSupports { discriminant, .. } => {
            // A negative discriminant means the curve never reaches y = 0, so
            // there are no supports to classify and nothing to draw.
            writeln!(&mut output, "Discriminant: {discriminant}")
                .expect("writing to string cannot fail");
            writeln!(&mut output, "{NO_REAL_SOLUTIONS}").expect("writing to string cannot fail");
        }
        Evaluation::Supported(analysis) => {
            render_analysis(&mut output, analysis);

            // Answer the questions in the order they were asked, each with the
            // verdict up front and the full message after it.
            for &query in queries {
                let outcome = analysis.query(query);
                let mark = if outcome.satisfied { "yes" } else { "no" };
                writeln!(
                    &mut output,
                    "{} [{mark}] {}",
                    query.question(),
                    outcome.message
                )
                .expect("writing to string cannot fail");
            }
        }
    }

    output
}

/// Machine-readable counterpart of [`render_evaluation`].
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Full evaluation, plot series included.
    pub evaluation: &'a Evaluation,
    /// Answers to the requested queries; empty when the arch has no supports.
    pub queries: Vec<QueryOutcome>,
}

impl<'a> JsonReport<'a> {
    /// Answer `queries` against `evaluation`.
    pub fn new(evaluation: &'a Evaluation, queries: &[SupportQuery]) -> Self {
        let queries: Vec<QueryOutcome> = evaluation
            .analysis()
            .map(|analysis| queries.iter().map(|&query| analysis.query(query)).collect())
            .unwrap_or_default();
        Self {
            evaluation,
            queries,
        }
    }
}

/// Render an evaluation and its query answers as pretty-printed JSON.
///
/// # Errors
///
/// Propagates [`serde_json::Error`] from serialization.
pub fn render_json(
    evaluation: &Evaluation,
    queries: &[SupportQuery],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport::new(evaluation, queries))
}

/// Append roots, parity and a plot summary for an arch with supports.
fn render_analysis(output: &mut String, analysis: &BridgeAnalysis) {
    // The support positions are the two roots, printed in formula order (+√D
    // first) rather than sorted.
    writeln!(output, "Discriminant: {}", analysis.discriminant)
        .expect("writing to string cannot fail");
    writeln!(output, "Solution 1: {}", analysis.roots.x1).expect("writing to string cannot fail");
    writeln!(output, "Solution 2: {}", analysis.roots.x2).expect("writing to string cannot fail");

    // Parity is read straight off the raw roots: only exactly even integer
    // positions count, so most real-valued arches report "odd".
    writeln!(
        output,
        "The position of the first support is {}.",
        Parity::of(analysis.roots.x1)
    )
    .expect("writing to string cannot fail");
    writeln!(
        output,
        "The position of the second support is {}.",
        Parity::of(analysis.roots.x2)
    )
    .expect("writing to string cannot fail");

    // The span is the length of the platform between the two supports.
    writeln!(
        output,
        "Span between supports: {:.3} m",
        analysis.roots.span().get::<meter>()
    )
    .expect("writing to string cannot fail");

    // Summarise the chart rather than drawing it: the platform is the black
    // line on the ground, the arch is the red curve reaching past each support.
    let plot = &analysis.plot;
    let (lo, hi) = plot.x_range();
    writeln!(output, "{} ({lo:.3} m to {hi:.3} m):", plot.title)
        .expect("writing to string cannot fail");
    for series in plot.series() {
        writeln!(
            output,
            "  {}: {} points, {} line",
            series.name,
            series.points.len(),
            series.line.color
        )
        .expect("writing to string cannot fail");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgearch::{evaluate, Coefficients};

    #[test]
    fn reports_supports_parity_and_plot() {
        let evaluation = evaluate(Coefficients::new(1.0, -3.0, 2.0)).expect("valid arch");
        let report = render_evaluation(&evaluation, &[]);
        assert!(report.contains("Bridge arch equation: 1x² + (-3)x + (2) = 0"));
        assert!(report.contains("Solution 1: 2\n"));
        assert!(report.contains("Solution 2: 1\n"));
        assert!(report.contains("The position of the first support is even."));
        assert!(report.contains("The position of the second support is odd."));
        assert!(report.contains("Span between supports: 1.000 m"));
        assert!(report.contains("Platform: 2 points, black line"));
        assert!(report.contains("Arch: 100 points, red line"));
    }

    #[test]
    fn reports_missing_solutions_without_queries() {
        let evaluation = evaluate(Coefficients::new(1.0, 0.0, 1.0)).expect("valid arch");
        let report = render_evaluation(&evaluation, &[SupportQuery::AnyEven]);
        assert!(report.contains(NO_REAL_SOLUTIONS));
        assert!(!report.contains("Solution 1"));
        assert!(!report.contains("Is any support position even?"));
    }

    #[test]
    fn answers_queries_in_order() {
        let evaluation = evaluate(Coefficients::default()).expect("valid arch");
        let report = render_evaluation(
            &evaluation,
            &[SupportQuery::AllEven, SupportQuery::AnyEven],
        );
        let all = report
            .find("Yes! Both support positions are even.")
            .expect("all-even answered");
        let any = report
            .find("Yes! At least one of the support positions is even.")
            .expect("any-even answered");
        assert!(all < any);
    }

    #[test]
    fn json_report_carries_query_answers() {
        let evaluation = evaluate(Coefficients::new(1.0, -3.0, 2.0)).expect("valid arch");
        let json = render_json(&evaluation, &[SupportQuery::AllEven]).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["evaluation"]["status"], "supported");
        assert_eq!(value["queries"][0]["query"], "all_even");
        assert_eq!(value["queries"][0]["satisfied"], false);
    }

    #[test]
    fn json_report_without_supports_has_no_answers() {
        let evaluation = evaluate(Coefficients::new(1.0, 0.0, 1.0)).expect("valid arch");
        let report = JsonReport::new(&evaluation, &[SupportQuery::AnyEven]);
        assert!(report.queries.is_empty());
    }
}
