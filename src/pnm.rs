// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Plain (P3) PPM reading and writing
//!
//! The loader is strict: the declared dimensions must match what the
//! caller expects, every sample must be an integer inside the file's
//! own declared range, and the file must hold exactly width * height
//! pixels, no more, no less.  The carver never runs on a partially
//! loaded grid.
//!
//! The declared max value is capped at 255.  Larger maxvals are legal
//! PPM but pointless for this pipeline, and rejecting them keeps the
//! 8-bit pixel storage honest instead of silently truncating.

use crate::grid::{rgb, PixelGrid};
use failure::Fail;
use itertools::iproduct;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Everything that can go wrong between a file on disk and a fully
/// populated grid.
#[derive(Debug, Fail)]
pub enum PnmError {
    #[fail(display = "i/o failure: {}", _0)]
    Io(#[fail(cause)] io::Error),
    #[fail(display = "type is {} instead of P3", _0)]
    BadMagic(String),
    #[fail(display = "read non-integer value {}", _0)]
    NonNumeric(String),
    #[fail(
        display = "input {} ({}) does not match value in file ({})",
        dimension, expected, found
    )]
    SizeMismatch {
        dimension: &'static str,
        expected: u32,
        found: i64,
    },
    #[fail(display = "max color value {} is not in 1..=255", _0)]
    BadMaxValue(i64),
    #[fail(display = "invalid color value {}", _0)]
    ColorOutOfRange(i64),
    #[fail(display = "not enough color values")]
    TooFewValues,
    #[fail(display = "too many color values")]
    TooManyValues,
}

impl From<io::Error> for PnmError {
    fn from(e: io::Error) -> Self {
        PnmError::Io(e)
    }
}

fn next_number<'a, I>(tokens: &mut I) -> Result<i64, PnmError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(PnmError::TooFewValues)?;
    token
        .parse::<i64>()
        .map_err(|_| PnmError::NonNumeric(token.to_string()))
}

fn next_channel<'a, I>(tokens: &mut I, max_value: i64) -> Result<u8, PnmError>
where
    I: Iterator<Item = &'a str>,
{
    let value = next_number(tokens)?;
    if value < 0 || value > max_value {
        return Err(PnmError::ColorOutOfRange(value));
    }
    Ok(value as u8)
}

/// Read a plain PPM into a grid, checking the declared dimensions
/// against the caller's expected ones.
pub fn load<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<PixelGrid, PnmError> {
    let contents = fs::read_to_string(path)?;
    let mut tokens = contents.split_whitespace();

    let magic = tokens.next().ok_or(PnmError::TooFewValues)?;
    if magic != "P3" {
        return Err(PnmError::BadMagic(magic.to_string()));
    }

    let file_width = next_number(&mut tokens)?;
    if file_width != i64::from(width) {
        return Err(PnmError::SizeMismatch {
            dimension: "width",
            expected: width,
            found: file_width,
        });
    }

    let file_height = next_number(&mut tokens)?;
    if file_height != i64::from(height) {
        return Err(PnmError::SizeMismatch {
            dimension: "height",
            expected: height,
            found: file_height,
        });
    }

    let max_value = next_number(&mut tokens)?;
    if max_value < 1 || max_value > 255 {
        return Err(PnmError::BadMaxValue(max_value));
    }

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for _ in 0..width as usize * height as usize {
        let r = next_channel(&mut tokens, max_value)?;
        let g = next_channel(&mut tokens, max_value)?;
        let b = next_channel(&mut tokens, max_value)?;
        pixels.push(rgb(r, g, b));
    }

    if tokens.next().is_some() {
        return Err(PnmError::TooManyValues);
    }

    // The loop above read exactly width * height pixels.
    Ok(PixelGrid::from_pixels(width, height, pixels).unwrap())
}

/// Write a grid as a plain PPM with a max value of 255.
pub fn store<P: AsRef<Path>>(path: P, grid: &PixelGrid) -> Result<(), PnmError> {
    let (width, height) = grid.dimensions();
    let mut out = BufWriter::new(fs::File::create(path)?);
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", width, height)?;
    writeln!(out, "255")?;
    for (y, x) in iproduct!(0..height, 0..width) {
        let p = grid.get_pt(x, y).0;
        writeln!(out, "{} {} {}", p[0], p[1], p[2])?;
    }
    Ok(())
}
