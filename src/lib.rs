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

//! A lossless compression codec for 8-bit single-channel (greyscale)
//! raster images.
//!
//! The codec is a straight-line producer/consumer pair built from four
//! cooperating layers: a 64-bit bit buffer ([`bitstream`]), an adaptive
//! Rice/Golomb entropy coder ([`rice`]), left-neighbour prediction with
//! modulo-256 delta folding ([`predictor`]), and a raster driver that
//! walks samples in row-major order ([`raster`]). It targets embedded
//! deployment — thermal-foil displays, IR sensor capture, diagnostic
//! greyscale imagery — where both CPU and output size must stay small.
//!
//! Image I/O, directory traversal, and CLI argument parsing are not
//! this crate's job; it consumes a `(samples, w, h)` triple and
//! produces (or consumes) a byte buffer, leaving the host application
//! to supply both ends.
//!
//! Two API surfaces are provided:
//!
//! - [`raster::encode`] / [`raster::decode`] / [`raster::header`] are
//!   the infallible-by-contract core, matching the stream format's
//!   performance budget exactly (debug assertions only, no allocation,
//!   no `Result`).
//! - [`encode_image`] / [`decode_image`] / [`read_header`] allocate and
//!   validate for you, returning a [`CodecError`] instead of relying on
//!   the caller to uphold preconditions.
//!
//! ```
//! use greyrice::{encode_image, decode_image, Geometry};
//!
//! let geometry = Geometry::new(4, 2).unwrap();
//! let samples = vec![10, 20, 30, 40, 50, 60, 70, 80];
//! let stream = encode_image(&samples, geometry).unwrap();
//! let decoded = decode_image(&stream, geometry).unwrap();
//! assert_eq!(decoded, samples);
//! ```

pub mod bitstream;
pub mod error;
pub mod image;
pub mod predictor;
pub mod raster;
pub mod rice;

pub use error::{CodecError, CodecResult};
pub use image::{decode_image, encode_image, read_header, recommended_capacity, Geometry};
pub use raster::{decode, decode_with_params, encode, encode_with_params, header};
pub use rice::RiceParams;
