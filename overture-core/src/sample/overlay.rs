// Overture
// Copyright (c) 2026 The Project Overture Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Overlay text samples for subtitles and captions.

use std::str;

use lazy_static::lazy_static;
use regex_lite::Regex;

use crate::errors::{invalid_sample_error, Result};
use crate::sample::{MediaSample, SampleKind};
use crate::units::Timespan;

/// A normalized 2D position hint for overlay placement.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OverlayPosition {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl OverlayPosition {
    /// Instantiate a new `OverlayPosition`.
    pub const fn new(x: f32, y: f32) -> OverlayPosition {
        OverlayPosition { x, y }
    }
}

/// A read-only view of an overlay text sample.
pub trait OverlaySample: MediaSample {
    /// Get the overlay text.
    fn text(&self) -> &str;

    /// Get the position at which the overlay should be placed, if any.
    fn position(&self) -> Option<OverlayPosition>;
}

/// Strip HTML-like formatting tags from `text`.
///
/// A tag is an angle-bracketed run whose body is composed of plain characters and
/// single-quoted, double-quoted, or unquoted attribute values. Every non-overlapping tag match
/// is discarded and the remaining spans are concatenated in their original order. Text
/// containing no tags passes through unchanged.
fn strip_markup(text: &str) -> String {
    lazy_static! {
        static ref MARKUP: Regex =
            Regex::new(r#"<(?:[^>=]|='[^']*'|="[^"]*"|=[^'"][^\s>]*)*>"#).unwrap();
    }

    let mut stripped = String::with_capacity(text.len());
    let mut pos = 0;

    for tag in MARKUP.find_iter(text) {
        stripped.push_str(&text[pos..tag.start()]);
        pos = tag.end();
    }

    stripped.push_str(&text[pos..]);
    stripped
}

/// An overlay text sample produced by the decoder pipeline.
///
/// Subtitle payloads frequently carry HTML-like formatting tags. Styled rendering is not
/// supported, so initialization normalizes the payload down to plain text and the renderer
/// draws it as-is. Overlay cues are infrequent relative to video frames and are not pooled.
#[derive(Clone, Debug, Default)]
pub struct OverlayTextSample {
    /// Duration for which the sample is valid.
    duration: Timespan,
    /// The position hint supplied by the decoder.
    position: OverlayPosition,
    /// The normalized overlay text.
    text: String,
    /// Presentation time for which the sample was generated.
    time: Timespan,
}

impl OverlayTextSample {
    /// Instantiate an empty `OverlayTextSample`.
    pub fn new() -> OverlayTextSample {
        Default::default()
    }

    /// Initialize the sample with one subtitle cue.
    ///
    /// The payload must be UTF-8 encoded text; formatting markup is stripped. A negative
    /// `duration` marks the cue as valid until superseded and is stored as
    /// [`Timespan::INFINITE`]. On error the sample is left exactly as it was.
    pub fn init(
        &mut self,
        buffer: &[u8],
        position: OverlayPosition,
        time: Timespan,
        duration: Timespan,
    ) -> Result<()> {
        let text = match str::from_utf8(buffer) {
            Ok(text) => text,
            _ => return invalid_sample_error("overlay: text payload is not valid utf-8"),
        };

        self.duration = if duration < Timespan::ZERO { Timespan::INFINITE } else { duration };
        self.position = position;
        self.text = strip_markup(text);
        self.time = time;

        Ok(())
    }

    /// Get the position hint recorded at initialization.
    ///
    /// This is the raw value supplied by the decoder. The [`OverlaySample`] read contract does
    /// not surface a position for this sample type.
    pub fn position_hint(&self) -> OverlayPosition {
        self.position
    }
}

impl MediaSample for OverlayTextSample {
    fn kind(&self) -> SampleKind {
        SampleKind::Subtitle
    }

    fn time(&self) -> Timespan {
        self.time
    }

    fn duration(&self) -> Timespan {
        self.duration
    }
}

impl OverlaySample for OverlayTextSample {
    fn text(&self) -> &str {
        &self.text
    }

    fn position(&self) -> Option<OverlayPosition> {
        None
    }
}
