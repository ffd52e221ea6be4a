// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The marker plot element.

use crate::attrs::{Attr, AttrError};
use crate::config::PlotConfig;
use crate::style::PlotStyle;
use crate::surface::Surface;

/// A marker plot element: parsed configuration, styling, and a private
/// drawing surface.
///
/// The surface is encapsulated the way a shadow root encapsulates a
/// widget's internals. Hosts may inspect it ([`MarkerPlot::surface`]) and
/// lay its box out ([`crate::Stage::resize`]), but only the element's own
/// [`render`](MarkerPlot::render) pass touches the content.
#[derive(Clone, Debug)]
pub struct MarkerPlot<S> {
    config: PlotConfig,
    style: PlotStyle,
    surface: S,
}

impl<S: Surface> MarkerPlot<S> {
    /// Creates an element with default configuration and styling.
    pub fn new(surface: S) -> Self {
        Self {
            config: PlotConfig::default(),
            style: PlotStyle::default(),
            surface,
        }
    }

    /// Builder-style override of the element style.
    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Creates an element and applies a batch of attributes, the way a
    /// host hands over a freshly parsed tag. Fails fast on malformed
    /// `data`; nothing is rendered here either way.
    pub fn from_attrs<'a, I>(surface: S, attrs: I) -> Result<Self, AttrError>
    where
        I: IntoIterator<Item = (Attr, &'a str)>,
    {
        let mut element = Self::new(surface);
        for (attr, raw) in attrs {
            element.set_attribute(attr, raw)?;
        }
        Ok(element)
    }

    /// The parsed configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// The element style.
    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// Read access to the private surface, for export and inspection.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub(crate) fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Applies one string-encoded attribute value. See [`PlotConfig::set`].
    pub fn set_attribute(&mut self, attr: Attr, raw: &str) -> Result<(), AttrError> {
        self.config.set(attr, raw)
    }

    /// Restores one attribute to its default, as when a host removes the
    /// attribute outright.
    pub fn reset_attribute(&mut self, attr: Attr) {
        self.config.reset(attr);
    }

    /// Runs one full render pass.
    ///
    /// The surface is measured here, not at construction, so the pass
    /// reflects the box after layout has settled. Previous content is
    /// replaced wholesale: rendering twice leaves one glyph per value,
    /// not two.
    pub fn render(&mut self) {
        let viewport = self.surface.size();
        let markers = self.config.markers(viewport);
        self.surface.clear();
        for marker in &markers {
            self.surface.fill_path(&marker.path(), &self.style.fill);
        }
    }
}
