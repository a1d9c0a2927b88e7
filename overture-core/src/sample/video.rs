// Overture
// Copyright (c) 2026 The Project Overture Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded video frame samples.

use crate::errors::{invalid_sample_error, Result};
use crate::pool::Poolable;
use crate::sample::{MediaSample, SampleKind};
use crate::units::Timespan;

/// Width and height of a video frame in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Instantiate new `Dimensions`.
    pub const fn new(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }
}

/// The in-memory layout of a frame's pixel data.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit blue, green, red, and alpha channels packed into 32 bits per pixel.
    #[default]
    Bgra8,
}

impl PixelFormat {
    /// Get the number of bytes each pixel occupies.
    pub fn bytes_per_pixel(&self) -> u32 {
        match *self {
            PixelFormat::Bgra8 => 4,
        }
    }
}

/// A read-only view of a decoded video frame sample.
pub trait VideoSample: MediaSample {
    /// Get the frame's pixel data.
    fn buffer(&self) -> &[u8];

    /// Get the width and height of the frame.
    fn dim(&self) -> Dimensions;

    /// Get the width and height at which the frame should be presented.
    fn output_dim(&self) -> Dimensions;

    /// Get the number of bytes per pixel row.
    fn stride(&self) -> u32;

    /// Get the pixel format.
    fn format(&self) -> PixelFormat;

    /// Returns `true` if the renderer may cache this sample.
    fn is_cacheable(&self) -> bool;

    /// Returns `true` if the pixel data is sRGB encoded and must be sampled sRGB-aware.
    fn is_output_srgb(&self) -> bool;
}

/// A video frame sample produced by the decoder pipeline.
///
/// A `VideoFrameSample` owns one decoded frame worth of pixel data, decoupling the sample's
/// lifetime from the decoder's transient output buffer. Instances are recycled through a
/// [`SamplePool`](crate::pool::SamplePool): a recycled instance holds no meaningful state until
/// [`init`](VideoFrameSample::init) repopulates it.
///
/// ## Realtime Safety
///
/// Reinitializing a recycled sample only allocates if the new frame is larger than any frame
/// the sample previously held.
#[derive(Clone, Debug, Default)]
pub struct VideoFrameSample {
    /// The sample's pixel data.
    buffer: Vec<u8>,
    /// Width and height of the frame.
    dim: Dimensions,
    /// Duration for which the sample is valid.
    duration: Timespan,
    /// The pixel format.
    format: PixelFormat,
    /// Width and height of the output.
    output_dim: Dimensions,
    /// Number of bytes per pixel row.
    stride: u32,
    /// Presentation time for which the sample was generated.
    time: Timespan,
}

impl VideoFrameSample {
    /// Instantiate an empty `VideoFrameSample`.
    pub fn new() -> VideoFrameSample {
        Default::default()
    }

    /// Initialize the sample with one decoded frame.
    ///
    /// The pixel data is copied out of `buffer` into storage owned by the sample. The declared
    /// geometry is validated against the buffer length before any state changes: on error the
    /// sample is left exactly as it was.
    pub fn init(
        &mut self,
        buffer: &[u8],
        dim: Dimensions,
        stride: u32,
        time: Timespan,
        duration: Timespan,
    ) -> Result<()> {
        if buffer.is_empty() {
            return invalid_sample_error("video: empty frame buffer");
        }

        if stride == 0 {
            return invalid_sample_error("video: zero stride");
        }

        // Every row of the declared height must fit within the buffer, or the renderer would
        // read out-of-bounds.
        if u64::from(stride) * u64::from(dim.height) > buffer.len() as u64 {
            return invalid_sample_error("video: frame buffer smaller than declared geometry");
        }

        self.buffer.clear();
        self.buffer.extend_from_slice(buffer);
        self.dim = dim;
        self.duration = duration;
        self.format = PixelFormat::Bgra8;
        self.output_dim = dim;
        self.stride = stride;
        self.time = time;

        Ok(())
    }
}

impl MediaSample for VideoFrameSample {
    fn kind(&self) -> SampleKind {
        SampleKind::Video
    }

    fn time(&self) -> Timespan {
        self.time
    }

    fn duration(&self) -> Timespan {
        self.duration
    }
}

impl VideoSample for VideoFrameSample {
    fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    fn dim(&self) -> Dimensions {
        self.dim
    }

    fn output_dim(&self) -> Dimensions {
        self.output_dim
    }

    fn stride(&self) -> u32 {
        self.stride
    }

    fn format(&self) -> PixelFormat {
        self.format
    }

    fn is_cacheable(&self) -> bool {
        true
    }

    fn is_output_srgb(&self) -> bool {
        true
    }
}

impl Poolable for VideoFrameSample {
    fn reset(&mut self) {
        // Keep the allocation. The next init overwrites the contents.
        self.buffer.clear();
        self.dim = Dimensions::default();
        self.duration = Timespan::ZERO;
        self.output_dim = Dimensions::default();
        self.stride = 0;
        self.time = Timespan::ZERO;
    }
}
