// Overture
// Copyright (c) 2026 The Project Overture Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `queue` module provides sample handoff queues.

use std::collections::VecDeque;

use parking_lot::Mutex;

/// A thread-safe FIFO queue of media samples.
///
/// The decode side enqueues samples as they are produced, and the playback loop dequeues them
/// as they become ready for presentation. The queue is unbounded; pacing is the surrounding
/// pipeline's concern.
pub struct SampleQueue<T> {
    /// Queued samples in decode order.
    samples: Mutex<VecDeque<T>>,
}

impl<T> SampleQueue<T> {
    /// Instantiate an empty `SampleQueue`.
    pub fn new() -> SampleQueue<T> {
        SampleQueue { samples: Mutex::new(VecDeque::new()) }
    }

    /// Push a sample onto the back of the queue.
    pub fn enqueue(&self, sample: T) {
        self.samples.lock().push_back(sample);
    }

    /// Pop the sample at the front of the queue.
    pub fn dequeue(&self) -> Option<T> {
        self.samples.lock().pop_front()
    }

    /// Pop the sample at the front of the queue only if it satisfies `ready`.
    ///
    /// The playback loop uses this to hold a sample back until its presentation time has
    /// arrived. Samples behind the front sample are never examined; the queue is strictly
    /// in decode order.
    pub fn dequeue_when<F>(&self, ready: F) -> Option<T>
    where
        F: FnOnce(&T) -> bool,
    {
        let mut samples = self.samples.lock();

        match samples.front() {
            Some(sample) if ready(sample) => samples.pop_front(),
            _ => None,
        }
    }

    /// Get the number of queued samples.
    pub fn len(&self) -> usize {
        self.samples.lock().len()
    }

    /// Returns `true` if no samples are queued.
    pub fn is_empty(&self) -> bool {
        self.samples.lock().is_empty()
    }
}

impl<T> Default for SampleQueue<T> {
    fn default() -> Self {
        SampleQueue::new()
    }
}
