// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong between parsing the parameters and
//! writing the image.  Numeric overflow inside the recurrence is not
//! here: an orbit that overflows has simply escaped.

use failure::Fail;

/// The error type for every fallible operation in this crate.
#[derive(Debug, Fail)]
pub enum MandelbrotError {
    /// A sampling axis was asked for zero samples.
    #[fail(display = "the sample count must be at least 1")]
    EmptyGrid,

    /// The iteration bound was zero.
    #[fail(display = "the iteration bound must be at least 1")]
    NoIterations,

    /// The bounds of the region are not finite, or describe a
    /// rectangle with no width or no height.
    #[fail(display = "invalid region: {}", _0)]
    InvalidRegion(String),

    /// The exponent was not a positive integer.
    #[fail(display = "the power must be an integer of at least 1, got {}", _0)]
    InvalidPower(f64),

    /// No color map is registered under that name.
    #[fail(display = "unknown colormap: {}", _0)]
    UnknownColormap(String),

    /// The image could not be encoded or written.
    #[fail(display = "could not write {}: {}", path, reason)]
    Write {
        /// Where we tried to put the image.
        path: String,
        /// What the encoder said.
        reason: String,
    },

    /// One of the threads rendering a band of rows panicked.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,
}

/// Shorthand for results carrying a `MandelbrotError`.
pub type Result<T> = std::result::Result<T, MandelbrotError>;
