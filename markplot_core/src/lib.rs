// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core element model for the marker plot widget.
//!
//! A marker plot is a small inline visualization: a row of diamond glyphs
//! drawn along a horizontal axis, one per input value, positioned by a
//! linear scale from the value domain onto the surface's pixel width.
//!
//! The crate models the widget the way a custom element behaves in a host
//! document, without depending on one:
//! - **Attributes** ([`Attr`], [`PlotConfig`]) are optional and
//!   string-encoded; `data` is a JSON array of numbers and fails fast when
//!   malformed, while the numeric bounds parse leniently to a NaN sentinel
//!   that degrades rendering instead of erroring.
//! - **Rendering** ([`PlotConfig::markers`], [`MarkerPlot::render`]) is an
//!   idempotent full redraw into the element's private [`Surface`],
//!   measured at render time so layout has settled first.
//! - **Scheduling** ([`FrameQueue`], [`Stage`]) defers renders to the next
//!   frame: attach and attribute changes schedule, pending requests
//!   coalesce, and [`Stage::run_frame`] is the display-refresh tick.

#![no_std]

extern crate alloc;

mod attrs;
mod config;
mod element;
#[cfg(test)]
mod element_tests;
mod frame;
mod marker;
mod scale;
mod stage;
mod style;
mod surface;

pub use attrs::{Attr, AttrError};
pub use config::PlotConfig;
pub use element::MarkerPlot;
pub use frame::FrameQueue;
pub use marker::{Marker, MarkerMetrics};
pub use scale::LinearScale;
pub use stage::{ElementId, Stage, StageError};
pub use style::PlotStyle;
pub use surface::{Surface, Viewport};
