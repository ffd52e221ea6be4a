// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single-threaded host model.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::attrs::{Attr, AttrError};
use crate::element::MarkerPlot;
use crate::frame::FrameQueue;
use crate::surface::{Surface, Viewport};

/// Identifies an attached element within a [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Errors returned by stage operations.
#[derive(Debug)]
pub enum StageError {
    /// The element id is not attached to this stage.
    UnknownElement(ElementId),
    /// Applying an attribute to an attached element failed.
    Attr {
        /// The element the attribute was applied to.
        element: ElementId,
        /// The underlying attribute error.
        err: AttrError,
    },
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement(id) => write!(f, "no element {id:?} on this stage"),
            Self::Attr { element, err } => write!(f, "element {element:?}: {err}"),
        }
    }
}

impl core::error::Error for StageError {}

/// A single-threaded host for marker plot elements.
///
/// The stage stands in for the UI loop of a host document: it owns the
/// attached elements, routes attribute changes, and runs one frame at a
/// time. Renders are never immediate. Attaching and attribute changes only
/// schedule, and [`Stage::run_frame`] is the display-refresh tick that
/// performs the work, so a request superseded between frames leaves stale
/// content on the surface until the tick. Nothing is shared across threads
/// and nothing renders reentrantly.
#[derive(Debug)]
pub struct Stage<S> {
    elements: HashMap<ElementId, MarkerPlot<S>>,
    queue: FrameQueue,
    next_id: u64,
}

impl<S> Default for Stage<S> {
    fn default() -> Self {
        Self {
            elements: HashMap::new(),
            queue: FrameQueue::new(),
            next_id: 0,
        }
    }
}

impl<S: Surface> Stage<S> {
    /// Creates an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an element and schedules its first render.
    pub fn attach(&mut self, element: MarkerPlot<S>) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, element);
        self.queue.schedule(id);
        id
    }

    /// Detaches an element, cancelling any pending render for it.
    pub fn detach(&mut self, id: ElementId) -> Option<MarkerPlot<S>> {
        self.queue.cancel(id);
        self.elements.remove(&id)
    }

    /// Read access to an attached element.
    pub fn element(&self, id: ElementId) -> Option<&MarkerPlot<S>> {
        self.elements.get(&id)
    }

    /// Number of attached elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no elements are attached.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether a render is pending for `id`.
    pub fn is_render_pending(&self, id: ElementId) -> bool {
        self.queue.is_scheduled(id)
    }

    /// Applies one attribute value and schedules a render.
    ///
    /// On error nothing is scheduled; the element's previous configuration
    /// and surface content stay in effect.
    pub fn set_attribute(
        &mut self,
        id: ElementId,
        attr: Attr,
        raw: &str,
    ) -> Result<(), StageError> {
        let element = self
            .elements
            .get_mut(&id)
            .ok_or(StageError::UnknownElement(id))?;
        element
            .set_attribute(attr, raw)
            .map_err(|err| StageError::Attr { element: id, err })?;
        self.queue.schedule(id);
        Ok(())
    }

    /// Removes an attribute, restoring its default, and schedules a render.
    pub fn remove_attribute(&mut self, id: ElementId, attr: Attr) -> Result<(), StageError> {
        let element = self
            .elements
            .get_mut(&id)
            .ok_or(StageError::UnknownElement(id))?;
        element.reset_attribute(attr);
        self.queue.schedule(id);
        Ok(())
    }

    /// Lays out an element's surface box.
    ///
    /// Resizing does not schedule a render; the new box is observed by
    /// whichever render runs next.
    pub fn resize(&mut self, id: ElementId, size: Viewport) -> Result<(), StageError> {
        let element = self
            .elements
            .get_mut(&id)
            .ok_or(StageError::UnknownElement(id))?;
        element.surface_mut().set_size(size);
        Ok(())
    }

    /// Runs one frame: every pending element renders exactly once.
    ///
    /// Returns the number of elements rendered. Ids whose element was
    /// detached after scheduling are skipped.
    pub fn run_frame(&mut self) -> usize {
        let pending: Vec<ElementId> = self.queue.drain().collect();
        let mut rendered = 0;
        for id in pending {
            if let Some(element) = self.elements.get_mut(&id) {
                element.render();
                rendered += 1;
            }
        }
        rendered
    }
}
