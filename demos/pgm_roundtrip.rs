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

//! Reads a binary PGM (P5) file, round-trips it through `greyrice`, and
//! reports the compressed size. This is a demonstration of the library
//! API, not part of its public contract — PGM parsing is deliberately
//! minimal and rejects anything but the plain 8-bit binary form.

use std::env;
use std::fs;
use std::io;

use greyrice::{decode_image, encode_image, Geometry};

fn read_pgm(path: &str) -> io::Result<(Geometry, Vec<u8>)> {
    let data = fs::read(path)?;
    let mut fields = Vec::with_capacity(4);
    let mut pos = 0;

    while fields.len() < 4 {
        while pos < data.len() && data[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if data[pos] == b'#' {
            while pos < data.len() && data[pos] != b'\n' {
                pos += 1;
            }
            continue;
        }
        let start = pos;
        while pos < data.len() && !data[pos].is_ascii_whitespace() {
            pos += 1;
        }
        fields.push(std::str::from_utf8(&data[start..pos]).expect("non-utf8 PGM header field").to_string());
    }
    pos += 1; // the single whitespace byte separating the header from the raster

    if fields[0] != "P5" {
        panic!("only plain binary PGM (P5) is supported, got {:?}", fields[0]);
    }
    let w: u16 = fields[1].parse().expect("bad width");
    let h: u16 = fields[2].parse().expect("bad height");
    let maxval: u32 = fields[3].parse().expect("bad maxval");
    if maxval != 255 {
        panic!("only 8-bit PGM (maxval 255) is supported, got {}", maxval);
    }

    let geometry = Geometry::new(w, h).expect("invalid geometry in PGM header");
    let samples = data[pos..pos + geometry.len()].to_vec();
    Ok((geometry, samples))
}

fn main() {
    env_logger_init();

    let arg = env::args().nth(1).expect("usage: pgm_roundtrip <file.pgm>");
    let (geometry, samples) = read_pgm(&arg).expect("failed to read PGM file");

    let encoded = encode_image(&samples, geometry).expect("encode_image failed");
    println!(
        "{}x{}: {} raw bytes -> {} encoded bytes ({:.3} bits/pixel)",
        geometry.width(),
        geometry.height(),
        samples.len(),
        encoded.len(),
        encoded.len() as f64 * 8.0 / samples.len() as f64,
    );

    let decoded = decode_image(&encoded, geometry).expect("decode_image failed");
    assert_eq!(decoded, samples, "round-trip mismatch");
    println!("round-trip verified bit-for-bit");
}

fn env_logger_init() {
    pretty_env_logger::try_init().ok();
}
