// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker plot demos.
mod html;

use markplot_core::{Attr, MarkerPlot, PlotStyle, Stage, Viewport};
use markplot_svg::{Border, SvgSurface};
use peniko::color::palette::css;

fn main() {
    let sections = vec![
        viewing_positions_demo(),
        defaults_demo(),
        duplicates_and_outliers_demo(),
        styled_demo(),
        wide_box_demo(),
        empty_demo(),
        degenerate_domain_demo(),
        invalid_data_demo(),
    ];

    let html = html::render_report("Marker plot demo", &sections);
    std::fs::write("markplot_demo.html", html).expect("write markplot_demo.html");
    println!("wrote markplot_demo.html");
}

/// Attaches one element with the given attributes, runs a frame, and
/// exports its surface.
fn render_plot(surface: SvgSurface, attrs: &[(Attr, &str)]) -> String {
    let mut stage = Stage::new();
    let element =
        MarkerPlot::from_attrs(surface, attrs.iter().copied()).expect("valid demo attributes");
    let id = stage.attach(element);
    stage.run_frame();
    stage.element(id).expect("attached above").surface().to_svg()
}

fn viewing_positions_demo() -> html::HtmlSection {
    // Positions visited inside a 90-minute recording, marked in one-minute
    // units: the motivating use case.
    let svg = render_plot(
        SvgSurface::default(),
        &[
            (Attr::Data, "[0, 420, 440, 2700, 5155]"),
            (Attr::Min, "0"),
            (Attr::Max, "5400"),
            (Attr::Width, "60"),
        ],
    );
    html::HtmlSection {
        title: "Viewing positions",
        description: "Five positions visited in a 90-minute recording (5400s domain), each marker \
            one minute of the domain wide. The two markers near the seven-minute mark overlap.",
        svg,
    }
}

fn defaults_demo() -> html::HtmlSection {
    // Only `data` is set; min/max/width fall back to 0/100/1.
    let svg = render_plot(SvgSurface::default(), &[(Attr::Data, "[5, 25, 50, 75, 95]")]);
    html::HtmlSection {
        title: "Defaults",
        description: "Only the data attribute is set, so the domain defaults to 0..100 and each \
            marker is one domain unit wide (1.6px here).",
        svg,
    }
}

fn duplicates_and_outliers_demo() -> html::HtmlSection {
    let svg = render_plot(
        SvgSurface::default(),
        &[(Attr::Data, "[50, 50, 50, -10, 110]"), (Attr::Width, "4")],
    );
    html::HtmlSection {
        title: "Duplicates and outliers",
        description: "Values are neither deduplicated nor clipped: three markers stack at 50, and \
            the out-of-domain values sit beyond the box edges, hidden by the viewBox.",
        svg,
    }
}

fn styled_demo() -> html::HtmlSection {
    let surface = SvgSurface::default().with_border(Some(Border {
        color: css::DARK_GRAY,
        width: 1.0,
    }));
    let mut stage = Stage::new();
    let id = stage.attach(MarkerPlot::new(surface).with_style(PlotStyle::solid(css::TOMATO)));
    stage
        .set_attribute(id, Attr::Data, "[10, 40, 55, 90]")
        .expect("valid data");
    stage
        .set_attribute(id, Attr::Width, "3")
        .expect("valid width");
    stage.run_frame();
    html::HtmlSection {
        title: "Styling",
        description: "A solid tomato fill and a gray border, configured on the element and its \
            surface instead of the attribute set.",
        svg: stage.element(id).expect("attached above").surface().to_svg(),
    }
}

fn wide_box_demo() -> html::HtmlSection {
    // Markers are as tall as they are wide until the box height caps them.
    let svg = render_plot(
        SvgSurface::new(Viewport::new(320.0, 16.0)),
        &[(Attr::Data, "[20, 50, 80]"), (Attr::Width, "10")],
    );
    html::HtmlSection {
        title: "Height clamping",
        description: "In a 320x16 box a 10-unit marker would be 32px tall; its height is clamped \
            to the 16px viewport while the width stays 32px.",
        svg,
    }
}

fn empty_demo() -> html::HtmlSection {
    let svg = render_plot(SvgSurface::default(), &[]);
    html::HtmlSection {
        title: "Empty plot",
        description: "No data renders no markers; the bordered strip is still exported.",
        svg,
    }
}

fn degenerate_domain_demo() -> html::HtmlSection {
    // min == max: the scale degenerates and every coordinate is non-finite.
    let svg = render_plot(
        SvgSurface::default(),
        &[(Attr::Data, "[50, 60]"), (Attr::Min, "50"), (Attr::Max, "50")],
    );
    html::HtmlSection {
        title: "Degenerate domain",
        description: "With min == max the scale divides by zero. The markers are still emitted, \
            with NaN/infinite coordinates that no viewer can place, so the plot degrades to the \
            empty strip instead of erroring.",
        svg,
    }
}

fn invalid_data_demo() -> html::HtmlSection {
    let mut stage = Stage::new();
    let id = stage.attach(MarkerPlot::new(SvgSurface::default()));
    stage
        .set_attribute(id, Attr::Data, "[25, 75]")
        .expect("valid data");
    stage.run_frame();

    // A malformed update is rejected outright and schedules nothing; the
    // previous render stays on the surface.
    let err = stage
        .set_attribute(id, Attr::Data, "[25, oops]")
        .expect_err("malformed data must be rejected");
    println!("rejected update: {err}");
    stage.run_frame();

    html::HtmlSection {
        title: "Malformed data fails fast",
        description: "An update with invalid JSON is surfaced as an error to the caller; the \
            markers from the last valid render stay visible.",
        svg: stage.element(id).expect("attached above").surface().to_svg(),
    }
}
