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

//! A safe, allocating wrapper around the infallible core in
//! [`crate::raster`], for callers who would rather get a `Result` than
//! uphold the core's preconditions themselves.

use crate::error::{CodecError, CodecResult};
use crate::raster;

/// The width and height of a greyscale raster image, each constrained
/// to `1..=65535` so they fit in the stream's 16-bit header fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    w: u16,
    h: u16,
}

impl Geometry {
    /// Validates and constructs a `Geometry`. Both `w` and `h` must be
    /// non-zero (they are always at most `u16::MAX` by type).
    pub fn new(w: u16, h: u16) -> CodecResult<Geometry> {
        if w == 0 || h == 0 {
            return Err(CodecError::InvalidGeometry { w, h });
        }
        Ok(Geometry { w, h })
    }

    /// The width in samples.
    pub fn width(&self) -> u16 {
        self.w
    }

    /// The height in samples.
    pub fn height(&self) -> u16 {
        self.h
    }

    /// The total number of samples, `w * h`.
    pub fn len(&self) -> usize {
        self.w as usize * self.h as usize
    }

    /// Always `false`: `Geometry::new` rejects zero width or height.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// The output capacity recommended for encoding an image of this
/// geometry: `4 * w * h` bytes (spec's worst-case escape-heavy bound is
/// 2.4x expansion; 4x leaves comfortable headroom), rounded up to the
/// next multiple of 8 and with the 8-byte header word added.
pub fn recommended_capacity(w: u16, h: u16) -> usize {
    let payload = 4 * w as usize * h as usize;
    let with_header = payload + 8;
    (with_header + 7) / 8 * 8
}

/// Encodes `samples` (exactly `geometry.len()` bytes, row-major) into a
/// freshly-allocated `Vec<u8>` sized to the number of bytes actually
/// written.
pub fn encode_image(samples: &[u8], geometry: Geometry) -> CodecResult<Vec<u8>> {
    if samples.len() != geometry.len() {
        return Err(CodecError::SampleCountMismatch { expected: geometry.len(), actual: samples.len() });
    }

    let capacity = recommended_capacity(geometry.w, geometry.h);
    let mut buffer = vec![0u8; capacity];
    let written = raster::encode(samples, geometry.w, geometry.h, &mut buffer, capacity);
    buffer.truncate(written);
    Ok(buffer)
}

/// Reads only the geometry header from `stream`, without decoding any
/// samples.
pub fn read_header(stream: &[u8]) -> CodecResult<Geometry> {
    if stream.len() < 8 {
        return Err(CodecError::StreamTooShort { needed: 8, actual: stream.len() });
    }
    let (w, h) = raster::header(stream);
    Geometry::new(w, h)
}

/// Decodes `stream` into a freshly-allocated `Vec<u8>` of
/// `geometry.len()` samples.
///
/// Returns [`CodecError::ShapeMismatch`] if the stream's header
/// declares a different `(w, h)` than `geometry`.
pub fn decode_image(stream: &[u8], geometry: Geometry) -> CodecResult<Vec<u8>> {
    if stream.len() < 8 || stream.len() % 8 != 0 {
        return Err(CodecError::StreamTooShort { needed: 8, actual: stream.len() });
    }

    let (stream_w, stream_h) = raster::header(stream);
    if (stream_w, stream_h) != (geometry.w, geometry.h) {
        return Err(CodecError::ShapeMismatch {
            expected: (stream_w, stream_h),
            actual: (geometry.w, geometry.h),
        });
    }

    let mut output = vec![0u8; geometry.len()];
    raster::decode(stream, stream.len(), &mut output, geometry.w, geometry.h);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_rejects_zero_dimensions() {
        assert!(Geometry::new(0, 10).is_err());
        assert!(Geometry::new(10, 0).is_err());
        assert!(Geometry::new(10, 10).is_ok());
    }

    #[test]
    fn recommended_capacity_is_multiple_of_eight() {
        for (w, h) in [(1u16, 1u16), (3, 5), (640, 480), (65535, 1)] {
            assert_eq!(recommended_capacity(w, h) % 8, 0);
        }
    }

    #[test]
    fn encode_then_decode_roundtrips() {
        let geometry = Geometry::new(16, 9).unwrap();
        let samples: Vec<u8> = (0..geometry.len()).map(|i| (i * 7) as u8).collect();
        let encoded = encode_image(&samples, geometry).unwrap();
        assert_eq!(encoded.len() % 8, 0);

        let header = read_header(&encoded).unwrap();
        assert_eq!(header, geometry);

        let decoded = decode_image(&encoded, geometry).unwrap();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn sample_count_mismatch_is_rejected() {
        let geometry = Geometry::new(4, 4).unwrap();
        let err = encode_image(&[0u8; 3], geometry).unwrap_err();
        assert_eq!(err, CodecError::SampleCountMismatch { expected: 16, actual: 3 });
    }

    #[test]
    fn decode_rejects_shape_mismatch() {
        let geometry = Geometry::new(4, 4).unwrap();
        let samples = vec![7u8; geometry.len()];
        let encoded = encode_image(&samples, geometry).unwrap();

        let wrong_geometry = Geometry::new(2, 8).unwrap();
        let err = decode_image(&encoded, wrong_geometry).unwrap_err();
        assert_eq!(
            err,
            CodecError::ShapeMismatch { expected: (4, 4), actual: (2, 8) }
        );
    }

    #[test]
    fn decode_rejects_short_stream() {
        let geometry = Geometry::new(4, 4).unwrap();
        let err = decode_image(&[0u8; 4], geometry).unwrap_err();
        assert_eq!(err, CodecError::StreamTooShort { needed: 8, actual: 4 });
    }
}
