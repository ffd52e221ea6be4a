// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The domain-to-pixel scale.

/// A linear mapping from a value domain onto a pixel span starting at zero.
///
/// Unlike a general-purpose chart scale there is no guard against a
/// degenerate domain: when `max == min` the factor divides out to infinity
/// or NaN, and every mapped coordinate degenerates with it. The widget
/// renders straight through that, so bad bounds produce invisible geometry
/// rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    factor: f64,
}

impl LinearScale {
    /// Creates a scale mapping `domain` onto `0..span_px`.
    pub fn new(domain: (f64, f64), span_px: f64) -> Self {
        let (min, max) = domain;
        Self {
            domain_min: min,
            factor: span_px / (max - min),
        }
    }

    /// Pixels per domain unit.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Maps a domain value to a pixel offset from the span's left edge.
    ///
    /// The mapping is not clamped; values outside the domain land outside
    /// the span.
    pub fn map(&self, x: f64) -> f64 {
        (x - self.domain_min) * self.factor
    }

    /// Whether mapped coordinates will be unusable.
    ///
    /// True when the factor is non-finite (empty or NaN domain) or
    /// non-positive (inverted domain, or a zero-width span). Rendering
    /// proceeds regardless; this is a probe for hosts that want to know
    /// before handing a surface to a renderer.
    pub fn is_degenerate(&self) -> bool {
        !self.factor.is_finite() || self.factor <= 0.0
    }
}
