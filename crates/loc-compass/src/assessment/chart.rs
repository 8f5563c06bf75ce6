use std::f64::consts::PI;
use std::fmt;
use std::fmt::Write as _;

use super::shell::escape_text;

/// Fixed radial scale bounds for the competency radar.
pub const RADIAL_MIN: f64 = 0.0;
pub const RADIAL_MAX: f64 = 5.0;

/// Inline notice shown in place of the chart when the capability is missing
/// or fails.
pub const CHART_UNAVAILABLE_NOTICE: &str = "Chart visualization is not available";

/// Input to the draw-radar-chart capability: a drawing target, category
/// labels, and the matching numeric values on the 0-5 scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub target_id: String,
    pub dataset_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("chart backend unavailable")]
    Unavailable,
    #[error("chart rendering failed: {0}")]
    Backend(String),
}

/// A rendered chart bound to its drawing target. The scoring component owns
/// at most one at a time; dropping it releases the instance.
#[derive(Debug)]
pub struct RadarChart {
    pub target_id: String,
    pub markup: String,
}

/// Capability boundary for radar-chart rendering. Backends must tolerate
/// being invoked repeatedly; the previous instance is always dropped before
/// a new draw.
pub trait ChartRenderer: fmt::Debug {
    fn draw(&self, spec: &ChartSpec) -> Result<RadarChart, ChartError>;
}

/// Always-failing backend, standing in for a host without charting support.
#[derive(Debug, Default)]
pub struct UnavailableChartRenderer;

impl ChartRenderer for UnavailableChartRenderer {
    fn draw(&self, _spec: &ChartSpec) -> Result<RadarChart, ChartError> {
        Err(ChartError::Unavailable)
    }
}

/// Server-side radar renderer emitting a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgRadarRenderer {
    pub size: u32,
}

impl Default for SvgRadarRenderer {
    fn default() -> Self {
        Self { size: 420 }
    }
}

impl SvgRadarRenderer {
    fn point(&self, axis: usize, axes: usize, radius_fraction: f64) -> (f64, f64) {
        let center = f64::from(self.size) / 2.0;
        // Chart radius leaves a margin for the axis labels.
        let radius = center * 0.72;
        let angle = -PI / 2.0 + (2.0 * PI * axis as f64) / axes as f64;
        (
            center + radius * radius_fraction * angle.cos(),
            center + radius * radius_fraction * angle.sin(),
        )
    }
}

impl ChartRenderer for SvgRadarRenderer {
    fn draw(&self, spec: &ChartSpec) -> Result<RadarChart, ChartError> {
        if spec.labels.len() != spec.values.len() {
            return Err(ChartError::Backend(format!(
                "{} labels for {} values",
                spec.labels.len(),
                spec.values.len()
            )));
        }
        let axes = spec.labels.len();
        if axes < 3 {
            return Err(ChartError::Backend(
                "a radar chart needs at least three axes".to_string(),
            ));
        }

        let size = self.size;
        let mut svg = String::new();
        let _ = write!(
            svg,
            "<svg class=\"radar-chart\" role=\"img\" viewBox=\"0 0 {size} {size}\" \
             xmlns=\"http://www.w3.org/2000/svg\">"
        );
        let _ = write!(svg, "<title>{}</title>", escape_text(&spec.dataset_label));

        // Concentric grid rings, one per scale step.
        for ring in 1..=RADIAL_MAX as usize {
            let fraction = ring as f64 / RADIAL_MAX;
            let mut points = String::new();
            for axis in 0..axes {
                let (x, y) = self.point(axis, axes, fraction);
                let _ = write!(points, "{x:.1},{y:.1} ");
            }
            let _ = write!(
                svg,
                "<polygon class=\"radar-grid\" points=\"{}\" fill=\"none\" \
                 stroke=\"#d0d7de\" stroke-width=\"1\"/>",
                points.trim_end()
            );
        }

        // Axis spokes and labels.
        let center = f64::from(size) / 2.0;
        for (axis, label) in spec.labels.iter().enumerate() {
            let (x, y) = self.point(axis, axes, 1.0);
            let _ = write!(
                svg,
                "<line x1=\"{center:.1}\" y1=\"{center:.1}\" x2=\"{x:.1}\" y2=\"{y:.1}\" \
                 stroke=\"#d0d7de\" stroke-width=\"1\"/>"
            );
            let (lx, ly) = self.point(axis, axes, 1.12);
            let anchor = if lx < center - 1.0 {
                "end"
            } else if lx > center + 1.0 {
                "start"
            } else {
                "middle"
            };
            let _ = write!(
                svg,
                "<text x=\"{lx:.1}\" y=\"{ly:.1}\" text-anchor=\"{anchor}\" \
                 font-size=\"12\">{}</text>",
                escape_text(label)
            );
        }

        // Value polygon, clamped to the fixed radial bounds.
        let mut points = String::new();
        for (axis, value) in spec.values.iter().enumerate() {
            let fraction = (value.clamp(RADIAL_MIN, RADIAL_MAX) - RADIAL_MIN)
                / (RADIAL_MAX - RADIAL_MIN);
            let (x, y) = self.point(axis, axes, fraction);
            let _ = write!(points, "{x:.1},{y:.1} ");
        }
        let _ = write!(
            svg,
            "<polygon class=\"radar-series\" points=\"{}\" \
             fill=\"rgba(52, 152, 219, 0.2)\" stroke=\"rgba(52, 152, 219, 1)\" \
             stroke-width=\"3\"/>",
            points.trim_end()
        );
        svg.push_str("</svg>");

        Ok(RadarChart {
            target_id: spec.target_id.clone(),
            markup: svg,
        })
    }
}
