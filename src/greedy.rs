// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The greedy seam finder
//!
//! Traces a vertical seam one row at a time, always stepping to the
//! cheapest of the three pixels reachable below the current one.
//! This is a local search: it never backtracks and never reconsiders
//! an earlier row, so it can miss the true global minimum through a
//! given starting column.  That is a deliberate characteristic of
//! this finder, not a bug — swapping in a shortest-path search would
//! change the visible output.

use crate::cq;
use crate::energy::{energy, Energy};
use crate::grid::PixelGrid;
use crate::seamfinder::SeamFinder;

/// Trace a single seam from `start_col` on row 0 down to the last
/// row, returning the column indices (one per row) and the total
/// accumulated energy, starting pixel included.
///
/// At each row the candidates are the pixel directly below and its
/// two diagonal neighbors; candidates outside the grid count as
/// infinitely expensive.  Straight down wins whenever it is no worse
/// than either diagonal; a tie between the diagonals goes to the
/// left (lower column); otherwise the strictly cheaper diagonal
/// wins.
pub fn trace_vertical_seam(grid: &PixelGrid, start_col: u32) -> (Vec<u32>, u64) {
    let (width, height) = grid.dimensions();
    let mut seam = Vec::with_capacity(height as usize);
    let mut col = start_col;
    let mut total = u64::from(energy(grid, col, 0));
    seam.push(col);

    for y in 1..height {
        let down = energy(grid, col, y);
        let left = cq!(col == 0, Energy::max_value(), energy(grid, col - 1, y));
        let right = cq!(col + 1 >= width, Energy::max_value(), energy(grid, col + 1, y));

        let step = if down <= left && down <= right {
            down
        } else if left <= right {
            col -= 1;
            left
        } else {
            col += 1;
            right
        };

        seam.push(col);
        total += u64::from(step);
    }

    (seam, total)
}

/// Trace a seam from every possible starting column and keep the one
/// with the smallest total energy.  On a tie the earliest starting
/// column wins.
pub fn find_min_vertical_seam(grid: &PixelGrid) -> Vec<u32> {
    let (width, _) = grid.dimensions();
    (0..width)
        .map(|start| trace_vertical_seam(grid, start))
        .min_by_key(|&(_, total)| total)
        .map(|(seam, _)| seam)
        .unwrap()
}

/// The basic seam engine: just a simple grid reference holder.
pub struct GreedySeam<'a> {
    grid: &'a PixelGrid,
}

impl<'a> GreedySeam<'a> {
    /// Takes a reference to a grid, and holds onto it.
    pub fn new(grid: &'a PixelGrid) -> Self {
        GreedySeam { grid }
    }
}

impl<'a> SeamFinder for GreedySeam<'a> {
    fn find_vertical_seam(&self) -> Vec<u32> {
        find_min_vertical_seam(self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::rgb;

    fn gray_grid(width: u32, height: u32, values: &[u8]) -> PixelGrid {
        let pixels = values.iter().map(|&v| rgb(v, v, v)).collect();
        PixelGrid::from_pixels(width, height, pixels).unwrap()
    }

    // 6x5, values picked to have no obvious structure.
    const SCATTER: [u8; 30] = [
        12, 200, 3, 90, 45, 7, 66, 1, 240, 13, 99, 50, 8, 120, 31, 77, 2, 180, 140, 9, 60, 25,
        210, 4, 5, 160, 88, 0, 33, 100,
    ];

    #[test]
    fn seams_are_connected_and_in_range() {
        let grid = gray_grid(6, 5, &SCATTER);
        for start in 0..6 {
            let (seam, _) = trace_vertical_seam(&grid, start);
            assert_eq!(seam.len(), 5);
            assert_eq!(seam[0], start);
            for pair in seam.windows(2) {
                let diff = (i64::from(pair[0]) - i64::from(pair[1])).abs();
                assert!(diff <= 1);
            }
            for &col in &seam {
                assert!(col < 6);
            }
        }
    }

    #[test]
    fn diagonal_tie_prefers_the_lower_column() {
        // Row 0 is flat; on row 1 the two diagonals below column 1
        // cost 75 each while straight down costs 300.
        let grid = gray_grid(3, 2, &[7, 7, 7, 0, 5, 10]);
        let (seam, total) = trace_vertical_seam(&grid, 1);
        assert_eq!(seam, [1, 0]);
        assert_eq!(total, 75);
    }

    #[test]
    fn strictly_cheaper_diagonal_wins() {
        // From column 1: down costs 27, left 12, right 3.
        let grid = gray_grid(3, 2, &[7, 7, 7, 0, 1, 3]);
        let (seam, total) = trace_vertical_seam(&grid, 1);
        assert_eq!(seam, [1, 2]);
        assert_eq!(total, 3);
    }

    #[test]
    fn straight_down_wins_a_full_tie() {
        let grid = gray_grid(4, 6, &[9; 24]);
        for start in 0..4 {
            let (seam, total) = trace_vertical_seam(&grid, start);
            assert_eq!(seam, vec![start; 6]);
            assert_eq!(total, 0);
        }
    }

    #[test]
    fn single_column_grid_never_strays() {
        let grid = gray_grid(1, 4, &[0, 50, 100, 150]);
        let (seam, _) = trace_vertical_seam(&grid, 0);
        assert_eq!(seam, [0, 0, 0, 0]);
    }

    #[test]
    fn global_minimum_beats_every_start() {
        let grid = gray_grid(6, 5, &SCATTER);
        let best = find_min_vertical_seam(&grid);
        let (_, best_total) = trace_vertical_seam(&grid, best[0]);
        for start in 0..6 {
            let (_, total) = trace_vertical_seam(&grid, start);
            assert!(best_total <= total);
        }
    }

    #[test]
    fn tied_minima_go_to_the_first_start() {
        // Every seam of a solid image costs zero; the scan keeps the
        // first one it found.
        let grid = gray_grid(5, 5, &[42; 25]);
        assert_eq!(find_min_vertical_seam(&grid), vec![0; 5]);
    }

    #[test]
    fn finder_trait_matches_the_free_function() {
        let grid = gray_grid(6, 5, &SCATTER);
        let finder = GreedySeam::new(&grid);
        assert_eq!(finder.find_vertical_seam(), find_min_vertical_seam(&grid));
    }
}
