// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG drawing-surface backend for marker plot elements.
//!
//! [`SvgSurface`] implements [`markplot_core::Surface`] by recording filled
//! paths and exporting a standalone SVG document: the bordered surface box
//! plus one `<path>` per recorded shape.
//!
//! The backend targets document embedding and inspection rather than
//! pixel-perfect rasterization:
//! - solid brushes serialize to hex colors plus an opacity attribute when
//!   translucent; other brush kinds fall back to `none`;
//! - non-finite coordinates are written verbatim (`NaN`, `inf`), which SVG
//!   viewers treat as unrenderable geometry, so a degraded plot stays
//!   silently blank here just as it does in the element model.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write as _;

use kurbo::{BezPath, PathEl};
use markplot_core::{Surface, Viewport};
use peniko::color::palette::css;
use peniko::{Brush, Color};

/// The default surface box: a 10 em wide, 10 px tall inline strip at the
/// common 16 px em size.
pub const DEFAULT_SIZE: Viewport = Viewport {
    width: 160.0,
    height: 10.0,
};

/// Border chrome drawn around the surface box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    /// Border color.
    pub color: Color,
    /// Border width in pixels.
    pub width: f64,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            color: css::BLACK,
            width: 1.0,
        }
    }
}

/// A recording surface that exports SVG.
///
/// The border is chrome, not content: [`Surface::clear`] wipes recorded
/// shapes, and an empty plot still exports its bordered box.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    size: Viewport,
    border: Option<Border>,
    shapes: Vec<(BezPath, Brush)>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl SvgSurface {
    /// Creates a surface with the given box and the default border.
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            border: Some(Border::default()),
            shapes: Vec::new(),
        }
    }

    /// Builder-style override of the border chrome. `None` removes it.
    pub fn with_border(mut self, border: Option<Border>) -> Self {
        self.border = border;
        self
    }

    /// Number of shapes currently recorded.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Exports the surface as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.size.width, self.size.height, self.size.width, self.size.height
        ));
        out.push('\n');

        if let Some(border) = &self.border {
            // Inset by half the stroke width so the border is not clipped
            // at the viewBox edge.
            let inset = border.width / 2.0;
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none""#,
                inset,
                inset,
                self.size.width - border.width,
                self.size.height - border.width,
            ));
            write_paint_attr(&mut out, "stroke", &Brush::Solid(border.color));
            out.push_str(&format!(r#" stroke-width="{}"/>"#, border.width));
            out.push('\n');
        }

        for (path, brush) in &self.shapes {
            let d = path_data(path);
            out.push_str(&format!(r#"<path d="{d}""#));
            write_paint_attr(&mut out, "fill", brush);
            out.push_str("/>\n");
        }

        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn set_size(&mut self, size: Viewport) {
        self.size = size;
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn fill_path(&mut self, path: &BezPath, brush: &Brush) {
        self.shapes.push((path.clone(), brush.clone()));
    }
}

/// Builds an SVG path `d` string by hand; `BezPath::to_svg` is not
/// available without `std`.
fn path_data(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", p.x, p.y);
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", p.x, p.y);
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(d, "Q{} {} {} {}", p1.x, p1.y, p2.x, p2.y);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(d, "C{} {} {} {} {} {}", p1.x, p1.y, p2.x, p2.y, p3.x, p3.y);
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}
