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

//! The Rice/Golomb codeword layer: encoding and decoding of a single
//! 8-bit `rice` value with an adaptive parameter `k`, plus the two
//! adaptation-table presets a [`RiceParams`] can select between.

use crate::bitstream::{BitReader, BitWriter};

const fn calibrated_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut rice = 0usize;
    while rice < 256 {
        let mut bits: u32 = 0;
        while (1usize << bits) < rice {
            bits += 1;
        }
        if bits > 1 {
            bits -= 1;
        }
        table[rice] = bits as u8;
        rice += 1;
    }
    table
}

const fn legacy_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut rice = 0usize;
    while rice < 256 {
        let mut bits: u32 = 0;
        while (1usize << bits) < rice {
            bits += 1;
        }
        table[rice] = bits as u8;
        rice += 1;
    }
    table
}

/// The calibrated adaptation table used by [`RiceParams::default`].
///
/// `K4RICE_CALIBRATED[rice]` is `bits` from the formula below, with an
/// empirically-calibrated "-1 lowering" applied whenever `bits > 1`:
///
/// ```text
/// bits = 0
/// while (1 << bits) < rice: bits += 1
/// if bits > 1: bits -= 1
/// ```
pub const K4RICE_CALIBRATED: [u8; 256] = calibrated_table();

/// The uncalibrated adaptation table used by [`RiceParams::legacy`],
/// recovered from an earlier revision of the reference implementation.
/// Same formula as [`K4RICE_CALIBRATED`] but without the "-1 lowering".
pub const K4RICE_LEGACY: [u8; 256] = legacy_table();

/// The frozen constants and adaptation table that together define a
/// wire-compatible Rice coding variant. A stream encoded under one
/// `RiceParams` preset is only decodable under the same preset; nothing
/// in the bit stream identifies which preset produced it.
#[derive(Clone, Copy, Debug)]
pub struct RiceParams {
    /// Maximum unary quotient before the encoder switches to the escape
    /// (raw 8-bit) representation.
    pub cut_off: u8,
    /// The initial Rice parameter, used for the very first symbol of a
    /// call to `encode`/`decode`.
    pub start_k: u8,
    /// Maps an emitted `rice` value to the `k` to use for the next
    /// symbol.
    pub adaptation_table: &'static [u8; 256],
}

impl RiceParams {
    /// The current, wire-compatible stream format: `cut_off = 11`,
    /// `start_k = 7`, calibrated adaptation table.
    pub const fn default_params() -> RiceParams {
        RiceParams { cut_off: 11, start_k: 7, adaptation_table: &K4RICE_CALIBRATED }
    }

    /// The earlier, now wire-*incompatible* stream format: `cut_off = 4`,
    /// `start_k = 3`, uncalibrated adaptation table. Provided only for
    /// decoding streams produced by that earlier format; never mixed
    /// with [`RiceParams::default_params`].
    pub const fn legacy() -> RiceParams {
        RiceParams { cut_off: 4, start_k: 3, adaptation_table: &K4RICE_LEGACY }
    }

    /// Looks up the next `k` for the given emitted `rice` value.
    #[inline]
    pub fn next_k(&self, rice: u8) -> u8 {
        self.adaptation_table[rice as usize]
    }
}

impl Default for RiceParams {
    fn default() -> RiceParams {
        RiceParams::default_params()
    }
}

/// Encodes `rice` (an 8-bit unsigned symbol) with parameter `k`: a unary
/// quotient of up to `params.cut_off` zero bits followed by a one-bit
/// terminator, then either the `k`-bit remainder, or — if the quotient
/// would have exceeded the cut-off — the raw 8-bit `rice` value.
pub fn encode_symbol(writer: &mut BitWriter, rice: u8, k: u8, params: &RiceParams) {
    let rice = rice as u32;
    let q = rice >> k;
    if q < params.cut_off as u32 {
        writer.push_zeros(q);
        writer.push_bit_1();
        let r = rice & ((1u32 << k) - 1);
        writer.push_bits(r, k);
    } else {
        writer.push_zeros(params.cut_off as u32);
        writer.push_bit_1();
        writer.push_bits(rice, 8);
    }
}

/// Decodes a single `rice` value encoded by [`encode_symbol`] with the
/// same `k` and `params`.
pub fn decode_symbol(reader: &mut BitReader, k: u8, params: &RiceParams) -> u8 {
    let q = reader.pull_unary(params.cut_off);
    let rice = if q < params.cut_off as u32 {
        let r = reader.pull_bits(k);
        (q << k) | r
    } else {
        reader.pull_bits(8)
    };
    rice as u8
}
