//! Chart description of the bridge: the flat platform between the supports and
//! the arch curve drawn over and slightly beyond them.
//!
//! Nothing here draws pixels. A [`BridgePlot`] is plain data that serializes to
//! JSON for whatever charting front end renders it.

use ndarray::Array1;
use serde::Serialize;

use crate::arch::Coefficients;
use crate::errors::ArchError;
use crate::geometry::Point;
use crate::solver::Roots;

/// Number of samples taken along the arch curve.
pub const ARCH_SAMPLES: usize = 100;

/// Distance the arch curve extends past each support.
pub const ARCH_MARGIN: f64 = 1.0;

/// Stroke used to draw a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LineStyle {
    /// Named colour.
    pub color: &'static str,
    /// Stroke width in pixels.
    pub width: u32,
}

/// A named polyline on the chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    /// Legend label.
    pub name: &'static str,
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Stroke.
    pub line: LineStyle,
}

impl Series {
    /// The platform (deck) of the bridge: a straight line between both supports.
    #[must_use]
    pub fn platform(roots: &Roots) -> Self {
        Self {
            name: "Platform",
            points: vec![Point::on_ground(roots.x1), Point::on_ground(roots.x2)],
            line: LineStyle {
                color: "black",
                width: 4,
            },
        }
    }

    /// The arch curve, sampled from one margin past the left support to one
    /// margin past the right support.
    ///
    /// # Errors
    ///
    /// See [`sample_arch`].
    pub fn arch(coefficients: &Coefficients, roots: &Roots) -> Result<Self, ArchError> {
        Ok(Self {
            name: "Arch",
            points: sample_arch(coefficients, roots)?,
            line: LineStyle {
                color: "red",
                width: 3,
            },
        })
    }
}

/// Sample [`ARCH_SAMPLES`] evenly spaced points of the arch over
/// `[min(roots) − ARCH_MARGIN, max(roots) + ARCH_MARGIN]`, endpoints included.
///
/// # Errors
///
/// Returns [`ArchError::NumericOverflow`] when a sample position or height is not
/// finite, e.g. a very flat arch whose far support sits near `f64::MAX`.
///
/// # Examples
/// ```
/// use bridgearch::{plot::sample_arch, Coefficients, Roots};
///
/// let points = sample_arch(&Coefficients::default(), &Roots::new(4.0, 0.0))?;
/// assert_eq!(points.len(), 100);
/// assert_eq!(points[0].x, -1.0);
/// assert_eq!(points[0].y, 5.0);
/// # Ok::<(), bridgearch::ArchError>(())
/// ```
pub fn sample_arch(coefficients: &Coefficients, roots: &Roots) -> Result<Vec<Point>, ArchError> {
    let xs = Array1::linspace(
        roots.min() - ARCH_MARGIN,
        roots.max() + ARCH_MARGIN,
        ARCH_SAMPLES,
    );
    let ys = xs.mapv(|x| coefficients.height_at(x));
    if !(xs.iter().all(|x| x.is_finite()) && ys.iter().all(|y| y.is_finite())) {
        return Err(ArchError::NumericOverflow { quantity: "arch" });
    }
    Ok(xs
        .iter()
        .zip(ys.iter())
        .map(|(&x, &y)| Point::new(x, y))
        .collect())
}

/// Complete chart for one evaluated arch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BridgePlot {
    /// Chart title.
    pub title: &'static str,
    /// Horizontal axis label.
    pub x_axis_title: &'static str,
    /// Vertical axis label.
    pub y_axis_title: &'static str,
    /// Whether the legend is displayed.
    pub show_legend: bool,
    /// Chart width in pixels.
    pub width: u32,
    /// Chart height in pixels.
    pub height: u32,
    /// Platform series.
    pub platform: Series,
    /// Arch series.
    pub arch: Series,
}

impl BridgePlot {
    /// Build the chart for an arch and its supports.
    ///
    /// # Errors
    ///
    /// Returns [`ArchError::NumericOverflow`] when the arch cannot be sampled in
    /// double precision.
    pub fn new(coefficients: &Coefficients, roots: &Roots) -> Result<Self, ArchError> {
        Ok(Self {
            title: "Simplified Bridge Representation",
            x_axis_title: "Position (metres)",
            y_axis_title: "Height (metres)",
            show_legend: true,
            width: 700,
            height: 400,
            platform: Series::platform(roots),
            arch: Series::arch(coefficients, roots)?,
        })
    }

    /// Both series in drawing order.
    #[must_use]
    pub fn series(&self) -> [&Series; 2] {
        [&self.platform, &self.arch]
    }

    /// Horizontal extent covered by the chart.
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        let xs = self.series().into_iter().flat_map(|s| s.points.iter().map(|p| p.x));
        xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::arch::coefficients;

    #[test]
    fn platform_joins_both_supports_at_ground_level() {
        let platform = Series::platform(&Roots::new(2.0, 1.0));
        assert_eq!(platform.points, vec![Point::new(2.0, 0.0), Point::new(1.0, 0.0)]);
        assert_eq!(platform.line.color, "black");
    }

    #[test]
    fn arch_spans_one_metre_past_each_support() {
        let arch = coefficients(1.0, -3.0, 2.0);
        let points = sample_arch(&arch, &Roots::new(2.0, 1.0)).expect("finite samples");
        assert_eq!(points.len(), ARCH_SAMPLES);

        let first = points.first().expect("samples present");
        let last = points.last().expect("samples present");
        assert_relative_eq!(first.x, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(last.x, 3.0, epsilon = 1.0e-12);
        assert_relative_eq!(first.y, 2.0, epsilon = 1.0e-9);
        assert_relative_eq!(last.y, 2.0, epsilon = 1.0e-9);
    }

    #[test]
    fn arch_samples_are_evenly_spaced_and_on_the_curve() {
        let arch = Coefficients::default();
        let points = sample_arch(&arch, &Roots::new(4.0, 0.0)).expect("finite samples");
        let step = 6.0 / (ARCH_SAMPLES - 1) as f64;
        for pair in points.windows(2) {
            assert_relative_eq!(pair[1].x - pair[0].x, step, epsilon = 1.0e-9);
        }
        for p in &points {
            assert_relative_eq!(p.y, arch.height_at(p.x), epsilon = 1.0e-12);
        }
    }

    #[test]
    fn overflowing_heights_are_rejected() {
        // Supports at 0 and −1e300: a·x² overflows across almost the whole span.
        let arch = coefficients(1.0e-300, 1.0, 0.0);
        let error = sample_arch(&arch, &Roots::new(0.0, -1.0e300)).expect_err("heights overflow");
        assert_eq!(error, ArchError::NumericOverflow { quantity: "arch" });
    }

    #[test]
    fn chart_layout() {
        let plot = BridgePlot::new(&Coefficients::default(), &Roots::new(4.0, 0.0))
            .expect("finite samples");
        assert_eq!(plot.series()[0].name, "Platform");
        assert_eq!(plot.series()[1].name, "Arch");
        assert_eq!((plot.width, plot.height), (700, 400));
        let (lo, hi) = plot.x_range();
        assert_relative_eq!(lo, -1.0, epsilon = 1.0e-12);
        assert_relative_eq!(hi, 5.0, epsilon = 1.0e-9);
    }

    #[test]
    fn serializes_for_chart_front_ends() {
        let plot = BridgePlot::new(&Coefficients::default(), &Roots::new(4.0, 0.0))
            .expect("finite samples");
        let json = serde_json::to_value(&plot).expect("plot serializes");
        assert_eq!(json["platform"]["name"], "Platform");
        assert_eq!(json["arch"]["line"]["color"], "red");
        assert_eq!(json["arch"]["points"].as_array().map(Vec::len), Some(100));
    }
}
