// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element styling.

use peniko::Brush;
use peniko::color::palette::css;

/// Visual styling for an element's markers.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotStyle {
    /// Fill paint for the diamond glyphs.
    pub fill: Brush,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            fill: Brush::Solid(css::BLACK),
        }
    }
}

impl PlotStyle {
    /// Convenience constructor for a solid fill.
    pub fn solid(fill: impl Into<Brush>) -> Self {
        Self { fill: fill.into() }
    }
}
