// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diamond marker geometry.

use kurbo::{BezPath, Point, Rect};

/// Per-render marker extents in pixels, shared by the whole row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerMetrics {
    /// Marker width: the configured unit width converted to pixels.
    pub width_px: f64,
    /// Marker height: the width, clamped to the viewport height.
    pub height_px: f64,
}

impl MarkerMetrics {
    /// Computes extents from the unit width, the scale factor, and the
    /// viewport height.
    pub fn measure(unit_width: f64, scale_factor: f64, viewport_height: f64) -> Self {
        let width_px = unit_width * scale_factor;
        // f64::min would swallow a NaN width; a poisoned configuration has
        // to stay degenerate all the way to the surface.
        let height_px = if width_px.is_nan() {
            f64::NAN
        } else {
            width_px.min(viewport_height)
        };
        Self {
            width_px,
            height_px,
        }
    }
}

/// One diamond glyph: a center plus pixel half-extents.
///
/// Markers are ephemeral. Each render pass rebuilds the full set and no
/// identity is carried from one pass to the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Glyph center in surface pixels.
    pub center: Point,
    /// Half of the glyph width.
    pub half_width: f64,
    /// Half of the glyph height.
    pub half_height: f64,
}

impl Marker {
    /// Creates a marker centered at `(cx, cy)` with the row's extents.
    pub fn new(cx: f64, cy: f64, metrics: MarkerMetrics) -> Self {
        Self {
            center: Point::new(cx, cy),
            half_width: metrics.width_px / 2.0,
            half_height: metrics.height_px / 2.0,
        }
    }

    /// The diamond's vertices in drawing order: top, right, bottom, left.
    pub fn points(&self) -> [Point; 4] {
        let Point { x: cx, y: cy } = self.center;
        [
            Point::new(cx, cy - self.half_height),
            Point::new(cx + self.half_width, cy),
            Point::new(cx, cy + self.half_height),
            Point::new(cx - self.half_width, cy),
        ]
    }

    /// A closed path tracing the diamond.
    pub fn path(&self) -> BezPath {
        let [top, right, bottom, left] = self.points();
        let mut path = BezPath::new();
        path.move_to(top);
        path.line_to(right);
        path.line_to(bottom);
        path.line_to(left);
        path.close_path();
        path
    }

    /// The glyph's axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.half_width,
            self.center.y - self.half_height,
            self.center.x + self.half_width,
            self.center.y + self.half_height,
        )
    }
}
