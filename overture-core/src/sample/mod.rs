// Overture
// Copyright (c) 2026 The Project Overture Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `sample` module provides the generic media sample capability, and the concrete decoded
//! sample types produced by the decoder pipeline.

pub mod overlay;
pub mod video;

use crate::units::Timespan;

/// A `SampleKind` identifies the kind of media a sample carries.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SampleKind {
    /// A decoded video frame.
    Video,
    /// Closed caption text.
    Caption,
    /// Subtitle text.
    Subtitle,
    /// Generic overlay text.
    Text,
}

/// A read-only capability common to all decoded media samples.
///
/// The playback host consumes every sample through this interface and dispatches on
/// [`kind`](MediaSample::kind) when it needs the kind-specific accessors.
pub trait MediaSample: Send + Sync {
    /// Get the kind of media this sample carries.
    fn kind(&self) -> SampleKind;

    /// Get the presentation time at which the sample becomes visible.
    fn time(&self) -> Timespan;

    /// Get the duration for which the sample is valid.
    fn duration(&self) -> Timespan;
}
