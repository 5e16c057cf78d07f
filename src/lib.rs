// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware narrowing for plain (P3) PPM images.
//!
//! Repeatedly finds and removes the vertical seam with the least
//! accumulated energy, shrinking the image one column at a time until
//! it reaches the requested width.

pub mod ternary;

pub mod grid;
pub use crate::grid::{rgb, PixelGrid};

pub mod pixelpairs;

pub mod energy;
pub use crate::energy::{energy, energy_map, energy_to_image, Energy};

pub mod seamfinder;
pub use crate::seamfinder::SeamFinder;

pub mod greedy;
pub use crate::greedy::{find_min_vertical_seam, trace_vertical_seam, GreedySeam};

pub mod seamcarver;
pub use crate::seamcarver::{remove_vertical_seam, seamcarve, CarveError, SeamCarver};

pub mod pnm;
pub use crate::pnm::{load, store, PnmError};
