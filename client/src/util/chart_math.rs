//! Geometry for the analytics SVG charts.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

use std::f64::consts::{FRAC_PI_2, TAU};

/// One named, colored count in a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Series {
    pub label: &'static str,
    pub value: i64,
    pub color: &'static str,
}

/// Bar rectangle in plot coordinates (origin top-left).
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub label: &'static str,
    pub color: &'static str,
    pub value: i64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Pie wedge as an SVG path.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub color: &'static str,
    pub fraction: f64,
    pub path: String,
}

/// Fraction of each slot a bar occupies.
const BAR_FILL: f64 = 0.6;

/// Lay out one bar per series across a `width` × `height` plot, scaled to the largest value.
#[allow(clippy::cast_precision_loss)]
pub fn bar_layout(series: &[Series], width: f64, height: f64) -> Vec<BarGeometry> {
    if series.is_empty() {
        return Vec::new();
    }
    let max = series.iter().map(|s| s.value.max(0)).max().unwrap_or(0);
    let slot = width / series.len() as f64;
    let bar_width = slot * BAR_FILL;
    series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let bar_height = if max > 0 {
                s.value.max(0) as f64 / max as f64 * height
            } else {
                0.0
            };
            BarGeometry {
                label: s.label,
                color: s.color,
                value: s.value,
                x: slot * i as f64 + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

/// Wedges for every positive series, clockwise from twelve o'clock.
///
/// Returns nothing when the total is zero.
#[allow(clippy::cast_precision_loss)]
pub fn pie_slices(series: &[Series], cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total: i64 = series.iter().map(|s| s.value.max(0)).sum();
    if total <= 0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    let mut slices = Vec::new();
    for s in series.iter().filter(|s| s.value > 0) {
        let fraction = s.value as f64 / total as f64;
        let end = start + fraction * TAU;
        slices.push(PieSlice {
            label: s.label,
            color: s.color,
            fraction,
            path: wedge_path(cx, cy, radius, start, end, fraction),
        });
        start = end;
    }
    slices
}

fn wedge_path(cx: f64, cy: f64, r: f64, start: f64, end: f64, fraction: f64) -> String {
    if fraction >= 1.0 {
        // A single arc cannot close on itself, so a full disc is two half arcs.
        return format!(
            "M {cx:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {:.2} Z",
            cy - r,
            cy + r,
            cy - r
        );
    }
    let (x1, y1) = (cx + r * start.cos(), cy + r * start.sin());
    let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
    let large_arc = u8::from(fraction > 0.5);
    format!(
        "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
    )
}

/// Label like `Published: 40%`.
pub fn slice_label(label: &str, fraction: f64) -> String {
    format!("{label}: {:.0}%", fraction * 100.0)
}
