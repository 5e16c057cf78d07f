// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid
//!
//! An addressable two-dimensional field of RGB pixels, the one
//! mutable object the whole carving pipeline revolves around.  The
//! loader builds one, the carver consumes it and hands back a
//! narrower one.

use image::Rgb;
use std::ops::{Index, IndexMut};

/// Shorthand constructor for an 8-bit RGB pixel.
pub fn rgb(r: u8, g: u8, b: u8) -> Rgb<u8> {
    Rgb([r, g, b])
}

/// A rectangular, owned field of 8-bit RGB pixels addressed by
/// (column, row), both 0-indexed.  The backing store is a single
/// contiguous `Vec`; construction either allocates the whole field
/// or fails, never leaving a half-built grid behind.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb<u8>>,
}

impl PixelGrid {
    /// A new grid of the given dimensions, filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        PixelGrid {
            width,
            height,
            pixels: vec![rgb(0, 0, 0); width as usize * height as usize],
        }
    }

    /// Build a grid from an already-assembled row-major pixel
    /// vector.  Returns `None` if the vector doesn't hold exactly
    /// width * height pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb<u8>>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(PixelGrid {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from flat row-major channel samples, three per
    /// pixel.  Returns `None` on a length mismatch.
    pub fn from_raw(width: u32, height: u32, samples: &[u8]) -> Option<Self> {
        if samples.len() != width as usize * height as usize * 3 {
            return None;
        }
        let pixels = samples
            .chunks(3)
            .map(|c| rgb(c[0], c[1], c[2]))
            .collect();
        PixelGrid::from_pixels(width, height, pixels)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the pixel at a single address.
    pub fn get_pt(&self, x: u32, y: u32) -> Rgb<u8> {
        self.pixels[self.get_index(x, y)]
    }

    /// Get a mutable reference to the pixel at a single address.
    pub fn get_pt_mut(&mut self, x: u32, y: u32) -> &mut Rgb<u8> {
        let index = self.get_index(x, y);
        &mut self.pixels[index]
    }

    /// Set the pixel at a single address.
    pub fn put_pt(&mut self, x: u32, y: u32, p: Rgb<u8>) {
        *self.get_pt_mut(x, y) = p
    }
}

impl Index<(u32, u32)> for PixelGrid {
    type Output = Rgb<u8>;

    /// A convenience addressing mode for getting pixels.
    fn index(&self, (x, y): (u32, u32)) -> &Rgb<u8> {
        let index = self.get_index(x, y);
        &self.pixels[index]
    }
}

impl IndexMut<(u32, u32)> for PixelGrid {
    /// A convenience addressing mode for setting pixels.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Rgb<u8> {
        let index = self.get_index(x, y);
        &mut self.pixels[index]
    }
}
