//! jianji-chart
//!
//! Radar-chart geometry. Maps N labeled values in [0, 100] onto polygon
//! coordinates for an N-axis radar plot. Pure geometry — no domain
//! semantics, no state, no randomness; the same inputs always produce
//! identical output.

pub mod error;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use error::ChartError;

/// Fraction of the half-size used as the outer plot radius; the rest is
/// margin for labels.
const RADIUS_FRACTION: f64 = 0.7;

/// Reference levels (percent) for the background grid polygons.
pub const GRID_LEVELS: [f64; 4] = [25.0, 50.0, 75.0, 100.0];

/// How far beyond the outer radius label anchors sit.
pub const LABEL_OFFSET: f64 = 25.0;

/// One input axis: label plus a value in [0, 100]. Out-of-range values
/// are clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AxisValue {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One concentric background polygon at a fixed reference level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GridPolygon {
    pub level: f64,
    pub points: Vec<Point>,
}

/// Anchor position for an axis label, just beyond the outer radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabelAnchor {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Complete geometry for one radar chart render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RadarGeometry {
    pub size: f64,
    pub center: Point,
    pub max_radius: f64,
    /// Data polygon vertices, one per axis, in input order.
    pub vertices: Vec<Point>,
    /// Background polygons at [`GRID_LEVELS`].
    pub grid: Vec<GridPolygon>,
    /// Axis line endpoints at the outer radius (lines run from center).
    pub axis_endpoints: Vec<Point>,
    pub labels: Vec<LabelAnchor>,
}

/// Angle of axis `i` of `n`: equal spacing of 2π/n, starting at the top
/// (−90°) and proceeding clockwise.
fn axis_angle(i: usize, n: usize) -> f64 {
    (std::f64::consts::TAU * i as f64) / n as f64 - std::f64::consts::FRAC_PI_2
}

fn point_at(center: f64, radius: f64, angle: f64) -> Point {
    Point {
        x: center + radius * angle.cos(),
        y: center + radius * angle.sin(),
    }
}

/// Compute the full chart geometry for `data` at the given render size.
/// A radar chart needs at least three axes; fewer is rejected.
pub fn radar_geometry(data: &[AxisValue], size: f64) -> Result<RadarGeometry, ChartError> {
    if data.len() < 3 {
        return Err(ChartError::TooFewAxes { axes: data.len() });
    }

    let n = data.len();
    let center = size / 2.0;
    let max_radius = center * RADIUS_FRACTION;

    let vertices = data
        .iter()
        .enumerate()
        .map(|(i, axis)| {
            let value = axis.value.clamp(0.0, 100.0);
            point_at(center, max_radius * value / 100.0, axis_angle(i, n))
        })
        .collect();

    let grid = GRID_LEVELS
        .iter()
        .map(|&level| GridPolygon {
            level,
            points: (0..n)
                .map(|i| point_at(center, max_radius * level / 100.0, axis_angle(i, n)))
                .collect(),
        })
        .collect();

    let axis_endpoints = (0..n)
        .map(|i| point_at(center, max_radius, axis_angle(i, n)))
        .collect();

    let labels = data
        .iter()
        .enumerate()
        .map(|(i, axis)| {
            let p = point_at(center, max_radius + LABEL_OFFSET, axis_angle(i, n));
            LabelAnchor {
                label: axis.label.clone(),
                x: p.x,
                y: p.y,
            }
        })
        .collect();

    Ok(RadarGeometry {
        size,
        center: Point {
            x: center,
            y: center,
        },
        max_radius,
        vertices,
        grid,
        axis_endpoints,
        labels,
    })
}
