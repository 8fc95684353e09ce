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

//! Left-neighbour prediction and the delta-folding / signed-to-unsigned
//! mapping that turns a predicted sample into the `rice` value the
//! [`crate::rice`] layer codes.
//!
//! The predictor itself is trivial (the previous sample in raster
//! order, not reset at row boundaries — see [`crate::raster`]); this
//! module is purely the arithmetic that turns `(sample, prediction)`
//! into a `rice` value in `[0, 255]` and back.

/// Maps `(sample, prediction)` to a `rice` value in `[0, 255]`.
///
/// `delta = sample - prediction` is computed in wrapping 8-bit
/// arithmetic, then folded into `[-128, 127]` by the two modulo-256
/// corrections, then mapped to an unsigned value by interleaving
/// non-negative and negative deltas (`0, -1, 1, -2, 2, ...` maps to
/// `0, 1, 2, 3, 4, ...`).
pub fn to_rice(sample: u8, prediction: u8) -> u8 {
    let mut delta = sample as i32 - prediction as i32;
    if delta < 0 {
        delta += 256;
    }
    if delta >= 128 {
        delta -= 256;
    }
    debug_assert!((-128..=127).contains(&delta));

    let rice = if delta >= 0 { delta * 2 } else { -delta * 2 - 1 };
    debug_assert!((0..=255).contains(&rice));
    rice as u8
}

/// The inverse of [`to_rice`]: recovers `sample` from `(rice, prediction)`.
pub fn from_rice(rice: u8, prediction: u8) -> u8 {
    let rice = rice as i32;
    let delta = if rice % 2 == 0 { rice / 2 } else { -(rice / 2) - 1 };
    // Wrapping add realises "(prediction + delta) mod 256" exactly: a
    // negative `i32` cast to `u8` truncates to its two's-complement low
    // byte, which is the same residue `wrapping_add` expects.
    prediction.wrapping_add(delta as u8)
}
