// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel
//!
//! The energy of a pixel is the sum of the squared channel
//! differences between its two horizontal neighbors and between its
//! two vertical neighbors.  Neighbors wrap around the grid edge: the
//! "left" neighbor of column 0 is column width-1, and so on.  This is
//! a wraparound, not a clamp, so edge pixels compare against the
//! opposite edge.
//!
//! Seams are routed through pixels where this value is minimal,
//! which preserves the high-energy (detailed) regions of the image.

use crate::cq;
use crate::grid::PixelGrid;
use crate::pixelpairs::energy_of_pair;
use image::{GrayImage, ImageBuffer, Luma};
use itertools::iproduct;
use std::cmp;

/// A single pixel's energy.  The per-axis maximum is 3 × 255², well
/// past 16 bits, so this has to be wide.
pub type Energy = u32;

/// Compute the energy of the pixel at (x, y).
///
/// Each axis contributes independently.  An axis shorter than three
/// pixels has no meaningful gradient and contributes zero; this is
/// the degenerate-input rule, not an error.
pub fn energy(grid: &PixelGrid, x: u32, y: u32) -> Energy {
    let (width, height) = grid.dimensions();

    let energy_dx = cq!(width < 3, 0, {
        let left = grid.get_pt(cq!(x == 0, width - 1, x - 1), y);
        let right = grid.get_pt(cq!(x == width - 1, 0, x + 1), y);
        energy_of_pair(&left, &right)
    });

    let energy_dy = cq!(height < 3, 0, {
        let up = grid.get_pt(x, cq!(y == 0, height - 1, y - 1));
        let down = grid.get_pt(x, cq!(y == height - 1, 0, y + 1));
        energy_of_pair(&up, &down)
    });

    energy_dx + energy_dy
}

/// Compute the energy of every pixel, row-major.
pub fn energy_map(grid: &PixelGrid) -> Vec<Energy> {
    let (width, height) = grid.dimensions();
    iproduct!(0..height, 0..width)
        .map(|(y, x)| energy(grid, x, y))
        .collect()
}

/// Scale an energy field to an 8-bit graymap for visualization.  The
/// brightest pixel marks the highest-energy point of the image.
pub fn energy_to_image(energies: &[Energy], width: u32, height: u32) -> GrayImage {
    let mut out: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::new(width, height);
    let factor = cmp::max(1, energies.iter().cloned().max().unwrap_or(1));
    for (i, e) in energies.iter().enumerate() {
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        out.put_pixel(x, y, Luma([(e * 255 / factor) as u8]));
    }
    out
}
