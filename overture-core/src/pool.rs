// Overture
// Copyright (c) 2026 The Project Overture Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `pool` module provides sample reuse pools.
//!
//! Decoding produces one video sample per frame. Allocating fresh storage for every frame
//! churns the allocator at the pipeline's full frame rate, so frame samples are recycled
//! through a [`SamplePool`] instead: released instances are reset and handed out again, and
//! their buffers retain their allocations across reuse.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;
use parking_lot::Mutex;

use crate::sample::video::VideoFrameSample;

/// A capability for objects that can be recycled through a [`SamplePool`].
pub trait Poolable: Default {
    /// Reset the object back to its unset state.
    ///
    /// Called when the object is released back to the pool. Implementations should retain
    /// allocations where possible; contents need not be cleared, only invalidated.
    fn reset(&mut self);
}

/// A pool of reusable sample instances.
///
/// [`acquire`](SamplePool::acquire) hands out a previously released instance when one is
/// available and lazily constructs one otherwise. The pool grows to the high-water mark of
/// concurrently outstanding instances and never shrinks.
///
/// Acquire and release may be called from different threads. Wrap the pool in an `Arc` to
/// share it between the decode and render sides of a pipeline.
pub struct SamplePool<T: Poolable> {
    /// Instances released and awaiting reuse.
    available: Mutex<Vec<T>>,
    /// Total number of instances constructed over the pool's lifetime.
    created: AtomicUsize,
    /// Number of instances currently handed out.
    outstanding: AtomicUsize,
}

impl<T: Poolable> SamplePool<T> {
    /// Instantiate an empty `SamplePool`.
    pub fn new() -> SamplePool<T> {
        SamplePool {
            available: Mutex::new(Vec::new()),
            created: AtomicUsize::new(0),
            outstanding: AtomicUsize::new(0),
        }
    }

    /// Acquire a sample instance, constructing one if none are available for reuse.
    ///
    /// The instance's prior contents are undefined until the caller initializes it.
    pub fn acquire(&self) -> T {
        self.outstanding.fetch_add(1, Ordering::AcqRel);

        match self.available.lock().pop() {
            Some(sample) => sample,
            None => {
                let created = self.created.fetch_add(1, Ordering::AcqRel) + 1;
                debug!("sample pool grew to {} instances", created);
                T::default()
            }
        }
    }

    /// Release a sample instance back to the pool for reuse.
    ///
    /// The instance is reset before it becomes available again. The caller relinquishes its
    /// claim on the sample's contents.
    pub fn release(&self, mut sample: T) {
        sample.reset();
        self.available.lock().push(sample);
        self.outstanding.fetch_sub(1, Ordering::AcqRel);
    }

    /// Get the number of instances waiting in the pool for reuse.
    pub fn available(&self) -> usize {
        self.available.lock().len()
    }

    /// Get the number of instances currently handed out.
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }

    /// Get the total number of instances the pool has constructed.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::Acquire)
    }
}

impl<T: Poolable> Default for SamplePool<T> {
    fn default() -> Self {
        SamplePool::new()
    }
}

/// A pool of recycled video frame samples.
pub type VideoSamplePool = SamplePool<VideoFrameSample>;

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::VideoSamplePool;
    use crate::sample::video::{Dimensions, VideoFrameSample, VideoSample};
    use crate::units::Timespan;

    #[test]
    fn verify_reuse_after_release() {
        let pool = VideoSamplePool::new();

        let samples: Vec<VideoFrameSample> = (0..3).map(|_| pool.acquire()).collect();

        assert_eq!(pool.created(), 3);
        assert_eq!(pool.outstanding(), 3);
        assert_eq!(pool.available(), 0);

        for sample in samples {
            pool.release(sample);
        }

        assert_eq!(pool.outstanding(), 0);
        assert_eq!(pool.available(), 3);

        // A second cycle must reuse, not grow.
        let samples: Vec<VideoFrameSample> = (0..3).map(|_| pool.acquire()).collect();

        assert_eq!(pool.created(), 3);
        assert_eq!(pool.available(), 0);

        for sample in samples {
            pool.release(sample);
        }
    }

    #[test]
    fn verify_release_resets() {
        let pool = VideoSamplePool::new();

        let mut sample = pool.acquire();

        let duration = Timespan::from_millis(20);

        sample.init(&[0; 100], Dimensions::new(2, 10), 10, Timespan::ZERO, duration).unwrap();

        pool.release(sample);

        let sample = pool.acquire();

        assert!(sample.buffer().is_empty());
        assert_eq!(sample.dim(), Dimensions::default());
        assert_eq!(sample.stride(), 0);
    }

    #[test]
    fn verify_concurrent_acquire_release() {
        const NUM_THREADS: usize = 4;
        const NUM_CYCLES: usize = 250;

        let pool = Arc::new(VideoSamplePool::new());

        let threads: Vec<_> = (0..NUM_THREADS)
            .map(|_| {
                let pool = Arc::clone(&pool);

                thread::spawn(move || {
                    for _ in 0..NUM_CYCLES {
                        let mut sample = pool.acquire();

                        sample
                            .init(
                                &[0; 64],
                                Dimensions::new(4, 4),
                                16,
                                Timespan::ZERO,
                                Timespan::ZERO,
                            )
                            .unwrap();

                        pool.release(sample);
                    }
                })
            })
            .collect();

        for thread in threads {
            thread.join().unwrap();
        }

        // Each thread holds at most one instance at a time, so the pool never needs to grow
        // beyond the thread count, and every handed out instance must have come back.
        assert!(pool.created() <= NUM_THREADS);
        assert_eq!(pool.outstanding(), 0);
        assert_eq!(pool.available(), pool.created());
    }
}
