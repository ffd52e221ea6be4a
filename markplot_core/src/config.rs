// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot configuration and marker generation.

extern crate alloc;

use alloc::vec::Vec;

use crate::attrs::{self, Attr, AttrError};
use crate::marker::{Marker, MarkerMetrics};
use crate::scale::LinearScale;
use crate::surface::Viewport;

/// The widget's parsed configuration: input values plus the scale inputs.
///
/// A configuration holds still for the duration of one render pass;
/// attribute changes mutate it between frames.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    /// Input values in domain units. Order preserved, duplicates allowed.
    pub values: Vec<f64>,
    /// Lower bound of the value domain.
    pub domain_min: f64,
    /// Upper bound of the value domain. Must exceed `domain_min` for a
    /// usable scale.
    pub domain_max: f64,
    /// Marker width in domain units.
    pub unit_width: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            domain_min: 0.0,
            domain_max: 100.0,
            unit_width: 1.0,
        }
    }
}

impl PlotConfig {
    /// Applies one string-encoded attribute value.
    ///
    /// An empty value restores the attribute's default, the way a host
    /// reflects an attribute that is present but blank. Malformed `data`
    /// is an error and leaves the previous values in place; the numeric
    /// attributes never fail, they parse to NaN (see [`Attr`]).
    pub fn set(&mut self, attr: Attr, raw: &str) -> Result<(), AttrError> {
        if raw.is_empty() {
            self.reset(attr);
            return Ok(());
        }
        match attr {
            Attr::Data => self.values = attrs::parse_data(raw)?,
            Attr::Min => self.domain_min = attrs::parse_number(raw),
            Attr::Max => self.domain_max = attrs::parse_number(raw),
            Attr::Width => self.unit_width = attrs::parse_number(raw),
        }
        Ok(())
    }

    /// Restores one attribute to its default.
    pub fn reset(&mut self, attr: Attr) {
        let defaults = Self::default();
        match attr {
            Attr::Data => self.values = defaults.values,
            Attr::Min => self.domain_min = defaults.domain_min,
            Attr::Max => self.domain_max = defaults.domain_max,
            Attr::Width => self.unit_width = defaults.unit_width,
        }
    }

    /// Instantiates the horizontal scale for a viewport.
    pub fn scale(&self, viewport: Viewport) -> LinearScale {
        LinearScale::new((self.domain_min, self.domain_max), viewport.width)
    }

    /// Generates one diamond marker per value for the given viewport.
    ///
    /// The contract of a render pass:
    /// - the scale maps `domain_min` to pixel `0` and `domain_max` to the
    ///   viewport width;
    /// - markers are `unit_width` domain units wide, converted to pixels,
    ///   and as tall as they are wide, clamped to the viewport height;
    /// - every marker sits on the viewport's vertical midline;
    /// - values are emitted in input order, duplicates and out-of-domain
    ///   positions included, with no sorting, filtering, or clipping.
    ///
    /// A degenerate configuration (NaN bounds, `domain_max <= domain_min`)
    /// still yields one marker per value; the coordinates are non-finite
    /// and the glyphs render as nothing.
    pub fn markers(&self, viewport: Viewport) -> Vec<Marker> {
        let scale = self.scale(viewport);
        let metrics = MarkerMetrics::measure(self.unit_width, scale.factor(), viewport.height);
        let cy = viewport.height / 2.0;
        self.values
            .iter()
            .map(|&x| Marker::new(scale.map(x), cy, metrics))
            .collect()
    }
}
