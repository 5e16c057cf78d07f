// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the relative distance
//! between the colors that make them up: the classic
//! d(R²) + d(G²) + d(B²).

use image::{Pixel, Primitive};
use num_traits::NumCast;

/// (Pixel, Pixel) -> Energy
///
/// Takes the channels (R,G,B) from two pixels, maps the difference
/// between each channel, squares it, and sums them all up.  This is
/// the rusty expression of:
///
/// ```text
///        |Δ|² = (Δr)²+(Δg)²+(Δb)²
/// ```
///
/// The difference is squared, so which pixel comes first is
/// irrelevant.
#[inline]
pub fn energy_of_pair<P, S>(p1: &P, p2: &P) -> u32
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    p1.channels()
        .iter()
        .zip(p2.channels())
        .map(|(c1, c2)| {
            let c1: i32 = NumCast::from(*c1).unwrap();
            let c2: i32 = NumCast::from(*c2).unwrap();
            (c1 - c2) * (c1 - c2)
        })
        .sum::<i32>() as u32
}
