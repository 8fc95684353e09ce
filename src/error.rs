// greyrice -- a lossless raster image codec
// Copyright (C) 2026 greyrice contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! The `error` module defines the error type returned by the safe,
//! allocating wrapper in [`crate::image`].
//!
//! The core codec (`encode`, `decode`, `header` in [`crate::raster`]) is
//! infallible by contract: it validates its preconditions with
//! `debug_assert!` and trusts them in release builds, exactly as the
//! stream format's performance budget requires. Everything that can go
//! wrong is therefore only detectable *before* calling the core, which
//! is what this type is for.

use std::error;
use std::fmt;

/// An error detected by the [`crate::image`] wrapper before it would have
/// corrupted a stream or overrun a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// `w` or `h` was zero, or exceeded the 16-bit header field width.
    InvalidGeometry {
        /// The offending width.
        w: u16,
        /// The offending height.
        h: u16,
    },
    /// The sample slice passed to `encode_image` did not have `w * h` bytes.
    SampleCountMismatch {
        /// The number of samples the geometry requires.
        expected: usize,
        /// The number of samples actually supplied.
        actual: usize,
    },
    /// The caller-provided buffer is smaller than `recommended_capacity`
    /// would allocate, and too small to safely hold the header alone.
    CapacityTooSmall {
        /// The minimum byte count needed.
        needed: usize,
        /// The byte count actually provided.
        provided: usize,
    },
    /// `decode_image` was asked to decode with a geometry that does not
    /// match the geometry encoded in the stream's header.
    ShapeMismatch {
        /// The `(w, h)` read from the stream header.
        expected: (u16, u16),
        /// The `(w, h)` the caller asked to decode into.
        actual: (u16, u16),
    },
    /// The stream is shorter than the 32-bit header, or not a multiple
    /// of 8 bytes.
    StreamTooShort {
        /// The minimum byte count a well-formed stream must have.
        needed: usize,
        /// The byte count actually supplied.
        actual: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CodecError::InvalidGeometry { w, h } => {
                write!(f, "invalid geometry {}x{}: width and height must be in 1..=65535", w, h)
            }
            CodecError::SampleCountMismatch { expected, actual } => {
                write!(f, "expected {} samples for this geometry, got {}", expected, actual)
            }
            CodecError::CapacityTooSmall { needed, provided } => {
                write!(f, "output buffer too small: need at least {} bytes, got {}", needed, provided)
            }
            CodecError::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "stream header declares {}x{}, but {}x{} was requested",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            CodecError::StreamTooShort { needed, actual } => {
                write!(f, "stream too short: need at least {} bytes, got {}", needed, actual)
            }
        }
    }
}

impl error::Error for CodecError {}

/// Either `T` on success, or a [`CodecError`] on failure.
pub type CodecResult<T> = Result<T, CodecError>;
