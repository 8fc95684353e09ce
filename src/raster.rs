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

//! The raster driver: a single forward pass over samples in row-major
//! order, threading `(prediction, k)` through the predictor and Rice
//! layers, plus the 32-bit geometry header shared by encoder and
//! decoder.
//!
//! These are the core entry points described by the stream contract:
//! infallible by contract, validated only by `debug_assert!`. Callers
//! who want `Result`-based validation should use [`crate::image`]
//! instead.

use crate::bitstream::{BitReader, BitWriter};
use crate::predictor::{from_rice, to_rice};
use crate::rice::{decode_symbol, encode_symbol, RiceParams};

/// Encodes `input` (`w * h` samples, row-major) into `output` using the
/// default, wire-compatible [`RiceParams`]. See [`encode_with_params`].
pub fn encode(input: &[u8], w: u16, h: u16, output: &mut [u8], max_bytes: usize) -> usize {
    encode_with_params(input, w, h, output, max_bytes, &RiceParams::default_params())
}

/// Encodes `input` (`w * h` samples, row-major) into `output`, emitting
/// the 16+16 bit geometry header followed by one Rice codeword per
/// sample, and returns the number of bytes written (always a multiple
/// of 8).
///
/// `max_bytes` must be a multiple of 8 and large enough to hold the
/// header plus the worst-case escape-coded payload; see
/// [`crate::image::recommended_capacity`]. `output.len()` must be at
/// least `max_bytes`. Preconditions are checked with `debug_assert!`
/// only, per the stream format's performance contract.
pub fn encode_with_params(
    input: &[u8],
    w: u16,
    h: u16,
    output: &mut [u8],
    max_bytes: usize,
    params: &RiceParams,
) -> usize {
    debug_assert!(max_bytes % 8 == 0);
    debug_assert!(w >= 1 && h >= 1);
    debug_assert_eq!(input.len(), w as usize * h as usize);
    debug_assert!(output.len() >= max_bytes);

    log::debug!("encoding {}x{} image ({} samples)", w, h, input.len());

    let mut writer = BitWriter::new(&mut output[..max_bytes]);
    writer.push_bits(w as u32, 16);
    writer.push_bits(h as u32, 16);

    let mut prediction: u8 = 0;
    let mut k = params.start_k;
    for &sample in input {
        let rice = to_rice(sample, prediction);
        encode_symbol(&mut writer, rice, k, params);
        prediction = sample;
        k = params.next_k(rice);
    }

    let bytes_written = writer.flush();
    log::trace!("wrote {} bytes ({:.3} bpp)", bytes_written, bytes_written as f64 * 8.0 / input.len().max(1) as f64);
    bytes_written
}

/// Reads only the 32-bit geometry header from `input`, without
/// decoding any samples.
pub fn header(input: &[u8]) -> (u16, u16) {
    debug_assert!(input.len() >= 8);
    // The header lives entirely within the first 64-bit word; reading
    // just that word does not mutate any decoder state.
    let mut reader = BitReader::new(&input[..8]);
    let w = reader.pull_bits(16) as u16;
    let h = reader.pull_bits(16) as u16;
    (w, h)
}

/// Decodes `bytes` bytes of `input` into `output` (`w * h` samples)
/// using the default, wire-compatible [`RiceParams`]. See
/// [`decode_with_params`].
pub fn decode(input: &[u8], bytes: usize, output: &mut [u8], w: u16, h: u16) -> usize {
    decode_with_params(input, bytes, output, w, h, &RiceParams::default_params())
}

/// Decodes `bytes` bytes of `input` (a stream produced by
/// [`encode_with_params`] with the same `params`) into `output`
/// (`w * h` samples), and returns `w * h` on success.
///
/// `bytes` must be a multiple of 8, and `w`/`h` must match the stream's
/// header. Preconditions are checked with `debug_assert!` only.
pub fn decode_with_params(
    input: &[u8],
    bytes: usize,
    output: &mut [u8],
    w: u16,
    h: u16,
    params: &RiceParams,
) -> usize {
    debug_assert!(bytes % 8 == 0);
    debug_assert!(output.len() >= w as usize * h as usize);

    log::debug!("decoding {}x{} image from {} bytes", w, h, bytes);

    let mut reader = BitReader::new(&input[..bytes]);
    let stream_w = reader.pull_bits(16) as u16;
    let stream_h = reader.pull_bits(16) as u16;
    debug_assert_eq!((stream_w, stream_h), (w, h));

    let n = w as usize * h as usize;
    let mut prediction: u8 = 0;
    let mut k = params.start_k;
    for sample in output[..n].iter_mut() {
        let rice = decode_symbol(&mut reader, k, params);
        let value = from_rice(rice, prediction);
        *sample = value;
        prediction = value;
        k = params.next_k(rice);
    }

    n
}
