// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! String-encoded attribute parsing.
//!
//! The widget's whole external interface is four optional attributes,
//! handed over as strings by the host. `data` is strict: malformed JSON is
//! surfaced to the caller as an error. The numeric attributes are lenient:
//! unparseable text becomes a NaN sentinel that flows through the scale
//! into degenerate, invisible geometry.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// The observed attribute set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    /// `data`: JSON-encoded array of input values. Defaults to `[]`.
    Data,
    /// `min`: lower bound of the value domain. Defaults to `0`.
    Min,
    /// `max`: upper bound of the value domain. Defaults to `100`.
    Max,
    /// `width`: marker width in domain units. Defaults to `1`.
    Width,
}

impl Attr {
    /// Looks an attribute up by its host-facing name.
    ///
    /// Returns `None` for any other name; the widget observes nothing else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "data" => Some(Self::Data),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "width" => Some(Self::Width),
            _ => None,
        }
    }

    /// The host-facing attribute name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Min => "min",
            Self::Max => "max",
            Self::Width => "width",
        }
    }
}

/// Errors produced while applying an attribute value.
#[derive(Debug)]
pub enum AttrError {
    /// The `data` attribute was not a JSON array of numbers.
    InvalidData(serde_json::Error),
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidData(err) => write!(f, "invalid `data` attribute: {err}"),
        }
    }
}

impl core::error::Error for AttrError {}

/// Parses the `data` attribute: a JSON-encoded array of numbers.
pub(crate) fn parse_data(raw: &str) -> Result<Vec<f64>, AttrError> {
    serde_json::from_str(raw).map_err(AttrError::InvalidData)
}

/// Parses a numeric attribute leniently, to NaN when unparseable.
pub(crate) fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}
