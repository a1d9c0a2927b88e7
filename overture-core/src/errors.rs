// Overture
// Copyright (c) 2026 The Project Overture Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `errors` module defines the common error type.

use std::error;
use std::fmt;
use std::result;

/// `Error` provides an enumeration of all possible errors reported by Overture.
#[derive(Debug)]
pub enum Error {
    /// The decoder supplied a malformed sample payload. The sample cannot be populated and
    /// should be dropped, continuing with the next one.
    InvalidSample(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidSample(msg) => {
                write!(f, "invalid sample: {}", msg)
            }
        }
    }
}

impl error::Error for Error {
    fn cause(&self) -> Option<&dyn error::Error> {
        match *self {
            Error::InvalidSample(_) => None,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Convenience function to create an invalid sample error.
pub fn invalid_sample_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::InvalidSample(desc))
}
