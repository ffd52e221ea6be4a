// Copyright 2025 the Markplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred render scheduling.

use smallvec::SmallVec;

use crate::stage::ElementId;

/// Pending render requests for the next frame.
///
/// The queue models "render on the next display refresh": scheduling an
/// element that is already pending replaces the earlier request rather
/// than queueing a second one, so however many changes land between
/// frames, each element renders at most once when the frame runs.
#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    pending: SmallVec<[ElementId; 4]>,
}

impl FrameQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a render for `id` on the next frame.
    ///
    /// Returns `false` when a request was already pending; the new request
    /// supersedes it and the element keeps its place in the queue.
    pub fn schedule(&mut self, id: ElementId) -> bool {
        if self.is_scheduled(id) {
            return false;
        }
        self.pending.push(id);
        true
    }

    /// Cancels a pending request. Returns whether one was pending.
    pub fn cancel(&mut self, id: ElementId) -> bool {
        match self.pending.iter().position(|&pending| pending == id) {
            Some(at) => {
                self.pending.remove(at);
                true
            }
            None => false,
        }
    }

    /// Whether a render is pending for `id`.
    pub fn is_scheduled(&self, id: ElementId) -> bool {
        self.pending.contains(&id)
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no requests are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Empties the queue, yielding ids in first-request order.
    pub fn drain(&mut self) -> impl Iterator<Item = ElementId> + '_ {
        self.pending.drain(..)
    }
}
