// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec::Vec;

use kurbo::{BezPath, Rect, Shape as _};
use peniko::Brush;
use peniko::color::palette::css;

use crate::{Attr, ElementId, MarkerPlot, PlotStyle, Stage, StageError, Surface, Viewport};

/// A surface that records every fill and counts clears.
#[derive(Clone, Debug, Default)]
struct RecordingSurface {
    size: Viewport,
    fills: Vec<(BezPath, Brush)>,
    clears: usize,
}

impl RecordingSurface {
    fn sized(width: f64, height: f64) -> Self {
        Self {
            size: Viewport::new(width, height),
            ..Self::default()
        }
    }

    fn fill_bounds(&self, at: usize) -> Rect {
        self.fills[at].0.bounding_box()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn set_size(&mut self, size: Viewport) {
        self.size = size;
    }

    fn clear(&mut self) {
        self.fills.clear();
        self.clears += 1;
    }

    fn fill_path(&mut self, path: &BezPath, brush: &Brush) {
        self.fills.push((path.clone(), brush.clone()));
    }
}

fn assert_rect_close(a: Rect, b: Rect) {
    let eps = 1e-9;
    assert!((a.x0 - b.x0).abs() <= eps, "x0 {a:?} != {b:?}");
    assert!((a.y0 - b.y0).abs() <= eps, "y0 {a:?} != {b:?}");
    assert!((a.x1 - b.x1).abs() <= eps, "x1 {a:?} != {b:?}");
    assert!((a.y1 - b.y1).abs() <= eps, "y1 {a:?} != {b:?}");
}

#[test]
fn attach_schedules_exactly_one_first_render() {
    let mut stage = Stage::new();
    let id = stage.attach(MarkerPlot::new(RecordingSurface::sized(160.0, 10.0)));
    assert!(stage.is_render_pending(id));
    assert_eq!(stage.run_frame(), 1);
    assert!(!stage.is_render_pending(id));
    assert_eq!(stage.run_frame(), 0, "a frame with no changes renders nothing");
}

#[test]
fn render_replaces_instead_of_appending() {
    let mut element = MarkerPlot::new(RecordingSurface::sized(160.0, 10.0));
    element.set_attribute(Attr::Data, "[10, 20, 30]").unwrap();
    element.render();
    assert_eq!(element.surface().fills.len(), 3);
    element.render();
    assert_eq!(element.surface().fills.len(), 3);
    assert_eq!(element.surface().clears, 2);
}

#[test]
fn attribute_changes_coalesce_into_one_render() {
    let mut stage = Stage::new();
    let id = stage.attach(MarkerPlot::new(RecordingSurface::sized(160.0, 10.0)));
    assert_eq!(stage.run_frame(), 1);

    stage.set_attribute(id, Attr::Data, "[1, 2]").unwrap();
    stage.set_attribute(id, Attr::Min, "0").unwrap();
    stage.set_attribute(id, Attr::Max, "10").unwrap();
    assert_eq!(stage.run_frame(), 1);

    let surface = stage.element(id).unwrap().surface();
    assert_eq!(surface.fills.len(), 2);
    assert_eq!(surface.clears, 2);
}

#[test]
fn surface_is_measured_at_render_time() {
    let mut stage = Stage::new();
    let id = stage.attach(MarkerPlot::new(RecordingSurface::sized(0.0, 0.0)));
    stage.set_attribute(id, Attr::Data, "[100]").unwrap();

    // Layout settles after the attribute landed but before the frame runs.
    stage.resize(id, Viewport::new(160.0, 10.0)).unwrap();
    assert_eq!(stage.run_frame(), 1);

    // The value at the domain maximum sits on the right edge of the final
    // box, not the zero-sized box the element was attached with.
    let surface = stage.element(id).unwrap().surface();
    assert_rect_close(surface.fill_bounds(0), Rect::new(159.2, 4.2, 160.8, 5.8));
}

#[test]
fn resize_alone_schedules_nothing() {
    let mut stage = Stage::new();
    let id = stage.attach(MarkerPlot::new(RecordingSurface::sized(160.0, 10.0)));
    assert_eq!(stage.run_frame(), 1);

    stage.resize(id, Viewport::new(320.0, 16.0)).unwrap();
    assert!(!stage.is_render_pending(id));
    assert_eq!(stage.run_frame(), 0);
}

#[test]
fn failed_data_update_keeps_the_previous_render() {
    let mut stage = Stage::new();
    let id = stage.attach(MarkerPlot::new(RecordingSurface::sized(160.0, 10.0)));
    stage.set_attribute(id, Attr::Data, "[25, 75]").unwrap();
    assert_eq!(stage.run_frame(), 1);

    let err = stage.set_attribute(id, Attr::Data, "[25, oops]").unwrap_err();
    assert!(matches!(err, StageError::Attr { element, .. } if element == id));
    assert!(!stage.is_render_pending(id));
    assert_eq!(stage.run_frame(), 0);

    let element = stage.element(id).unwrap();
    assert_eq!(element.config().values, [25.0, 75.0]);
    assert_eq!(element.surface().fills.len(), 2);
}

#[test]
fn detach_cancels_the_pending_render() {
    let mut stage = Stage::new();
    let id = stage.attach(MarkerPlot::new(RecordingSurface::sized(160.0, 10.0)));
    assert_eq!(stage.len(), 1);
    assert!(stage.detach(id).is_some());
    assert!(stage.is_empty());
    assert_eq!(stage.run_frame(), 0);
    assert!(stage.detach(id).is_none());
}

#[test]
fn unknown_ids_are_reported() {
    let mut stage: Stage<RecordingSurface> = Stage::new();
    let missing = ElementId(42);
    let err = stage.set_attribute(missing, Attr::Min, "0").unwrap_err();
    assert!(matches!(err, StageError::UnknownElement(id) if id == missing));
    assert!(stage.resize(missing, Viewport::new(160.0, 10.0)).is_err());
    assert!(stage.remove_attribute(missing, Attr::Data).is_err());
}

#[test]
fn empty_data_clears_to_a_blank_surface() {
    let mut stage = Stage::new();
    let id = stage.attach(MarkerPlot::new(RecordingSurface::sized(160.0, 10.0)));
    stage.set_attribute(id, Attr::Data, "[40]").unwrap();
    stage.run_frame();

    stage.set_attribute(id, Attr::Data, "[]").unwrap();
    assert_eq!(stage.run_frame(), 1);
    let surface = stage.element(id).unwrap().surface();
    assert!(surface.fills.is_empty());
    assert_eq!(surface.clears, 2, "an empty plot still clears old content");
}

#[test]
fn rendered_geometry_matches_the_scale() {
    let mut stage = Stage::new();
    let id = stage.attach(MarkerPlot::new(RecordingSurface::sized(160.0, 10.0)));
    stage.set_attribute(id, Attr::Data, "[0, 50, 100]").unwrap();
    assert_eq!(stage.run_frame(), 1);

    // Default domain 0..100 over 160px: markers 1.6px wide and tall,
    // centered on the midline at x = 0, 80, 160.
    let surface = stage.element(id).unwrap().surface();
    assert_eq!(surface.fills.len(), 3);
    assert_rect_close(surface.fill_bounds(0), Rect::new(-0.8, 4.2, 0.8, 5.8));
    assert_rect_close(surface.fill_bounds(1), Rect::new(79.2, 4.2, 80.8, 5.8));
    assert_rect_close(surface.fill_bounds(2), Rect::new(159.2, 4.2, 160.8, 5.8));
}

#[test]
fn remove_attribute_restores_the_default_and_schedules() {
    let mut stage = Stage::new();
    let id = stage.attach(MarkerPlot::new(RecordingSurface::sized(160.0, 10.0)));
    stage.set_attribute(id, Attr::Max, "500").unwrap();
    stage.run_frame();

    stage.remove_attribute(id, Attr::Max).unwrap();
    assert!(stage.is_render_pending(id));
    assert_eq!(stage.element(id).unwrap().config().domain_max, 100.0);
}

#[test]
fn from_attrs_applies_the_batch_or_fails_fast() {
    let element = MarkerPlot::from_attrs(
        RecordingSurface::sized(160.0, 10.0),
        [(Attr::Data, "[5]"), (Attr::Max, "10"), (Attr::Width, "2")],
    )
    .unwrap();
    assert_eq!(element.config().values, [5.0]);
    assert_eq!(element.config().domain_max, 10.0);
    assert_eq!(element.config().unit_width, 2.0);

    let invalid = MarkerPlot::from_attrs(
        RecordingSurface::sized(160.0, 10.0),
        [(Attr::Data, "not json")],
    );
    assert!(invalid.is_err());
}

#[test]
fn degenerate_bounds_render_invisible_markers() {
    let mut stage = Stage::new();
    let id = stage.attach(MarkerPlot::new(RecordingSurface::sized(160.0, 10.0)));
    stage.set_attribute(id, Attr::Data, "[50]").unwrap();
    stage.set_attribute(id, Attr::Min, "50").unwrap();
    stage.set_attribute(id, Attr::Max, "50").unwrap();
    assert_eq!(stage.run_frame(), 1);

    // One fill is still recorded, with coordinates no renderer can place.
    let surface = stage.element(id).unwrap().surface();
    assert_eq!(surface.fills.len(), 1);
    assert!(surface.fill_bounds(0).x0.is_nan());
}

#[test]
fn custom_style_reaches_the_surface() {
    let mut element = MarkerPlot::new(RecordingSurface::sized(160.0, 10.0))
        .with_style(PlotStyle::solid(css::TOMATO));
    element.set_attribute(Attr::Data, "[50]").unwrap();
    element.render();
    assert_eq!(element.surface().fills[0].1, Brush::Solid(css::TOMATO));
}

#[test]
fn elements_schedule_independently() {
    let mut stage = Stage::new();
    let first = stage.attach(MarkerPlot::new(RecordingSurface::sized(160.0, 10.0)));
    let second = stage.attach(MarkerPlot::new(RecordingSurface::sized(160.0, 10.0)));
    assert_eq!(stage.run_frame(), 2);

    stage.set_attribute(second, Attr::Data, "[1]").unwrap();
    assert!(!stage.is_render_pending(first));
    assert!(stage.is_render_pending(second));
    assert_eq!(stage.run_frame(), 1);
    assert!(stage.element(first).unwrap().surface().fills.is_empty());
    assert_eq!(stage.element(second).unwrap().surface().fills.len(), 1);
}
