// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element's private drawing surface.

use kurbo::BezPath;
use peniko::Brush;

/// A width and height pair describing a surface's layout box in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Box width in pixels.
    pub width: f64,
    /// Box height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport from a width and a height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The drawing surface an element renders into.
///
/// Each element owns its surface privately: content is mutated only by the
/// element's own render pass, while the layout box (`size`/`set_size`) is
/// the host's to manage. Surface chrome such as a border is not content
/// and survives [`Surface::clear`].
pub trait Surface {
    /// The current layout box. Read at render time, never cached.
    fn size(&self) -> Viewport;

    /// Lays the box out. Hosts call this; elements only observe the result
    /// on their next render.
    fn set_size(&mut self, size: Viewport);

    /// Removes all recorded content, leaving chrome intact.
    fn clear(&mut self);

    /// Records one filled path.
    fn fill_path(&mut self, path: &BezPath, brush: &Brush);
}
