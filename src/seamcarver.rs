// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The driving loop: find the cheapest vertical seam, remove it,
//! repeat until the image is narrow enough.

use crate::greedy::find_min_vertical_seam;
use crate::grid::PixelGrid;
use failure::Fail;

/// The configuration errors the carver can reject a request with.
/// Both are detected before any carving begins; nothing is mutated
/// on failure.
#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// A target dimension of zero leaves nothing to carve toward.
    #[fail(display = "target dimensions must be greater than zero")]
    ZeroTarget,
    /// Seam carving only removes pixels; it cannot upscale.
    #[fail(
        display = "cannot carve a {}x{} image up to {}x{}",
        width, height, target_width, target_height
    )]
    Upscale {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },
}

/// Delete one traced seam from the grid, producing a grid one column
/// narrower.  Pixels left of the seam keep their columns; pixels
/// right of it move one column left to close the gap.
pub fn remove_vertical_seam(grid: &PixelGrid, seam: &[u32]) -> PixelGrid {
    let (width, height) = grid.dimensions();
    let mut out = PixelGrid::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        for x in 0..width {
            if x == cut {
                continue;
            }
            out.put_pt(if x < cut { x } else { x - 1 }, y, grid.get_pt(x, y));
        }
    }
    out
}

// It isn't necessary at this point to be using a struct-based
// implementation, but it lays the groundwork for caching
// intermediate results between carves.

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a> {
    grid: &'a PixelGrid,
}

impl<'a> SeamCarver<'a> {
    /// Creates a new SeamCarver with a grid to be carved.
    pub fn new(grid: &'a PixelGrid) -> Self {
        SeamCarver { grid }
    }

    /// Given a desired new width and height, repeatedly carve seams
    /// out of the image until it is `target_width` wide.
    ///
    /// The target height is validated the same way as the width but
    /// never acted on: horizontal carving is out of scope for this
    /// crate, so the image keeps its full height.
    pub fn carve(&self, target_width: u32, target_height: u32) -> Result<PixelGrid, CarveError> {
        let (width, height) = self.grid.dimensions();
        if target_width == 0 || target_height == 0 {
            return Err(CarveError::ZeroTarget);
        }
        if target_width > width || target_height > height {
            return Err(CarveError::Upscale {
                width,
                height,
                target_width,
                target_height,
            });
        }

        let mut scratch = self.grid.clone();
        while scratch.width() > target_width {
            let seam = find_min_vertical_seam(&scratch);
            scratch = remove_vertical_seam(&scratch, &seam);
        }
        Ok(scratch)
    }
}

/// A convenience wrapper: carve `grid` down to `target_width`
/// columns.
pub fn seamcarve(
    grid: &PixelGrid,
    target_width: u32,
    target_height: u32,
) -> Result<PixelGrid, CarveError> {
    SeamCarver::new(grid).carve(target_width, target_height)
}
