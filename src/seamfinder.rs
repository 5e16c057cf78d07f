// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// finders as well as caching.  Only vertical seams are spoken for;
/// narrowing is the only direction this crate carves in.
pub trait SeamFinder {
    /// Once a SeamFinder has a grid (or whatever it needs to make a
    /// rational decision), request a vertical seam: one column index
    /// per row, top to bottom.
    fn find_vertical_seam(&self) -> Vec<u32>;
}
