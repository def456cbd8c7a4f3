// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dual-gradient seam search.
//!
//! Finding a vertical seam is a single-source shortest-path problem on
//! a DAG whose topological layers are the image rows: each pixel has
//! up to three successors in the row below (down-left, down, and
//! down-right).  One relaxation sweep down the rows fills an
//! accumulated-distance table and a predecessor table; walking the
//! predecessors back up from the cheapest bottom pixel yields the
//! seam.  Horizontal seams run the same search over a transposed copy
//! of the image.

use crate::cq;
use crate::energy::{calculate_energy, BORDER_ENERGY};
use crate::grid::Grid;
use crate::seamfinder::SeamFinder;
use crate::transpose::transpose;
use image::{GenericImageView, Pixel, Primitive};

/// Given an energy field, return the list of x-coordinates that, when
/// paired with the range `(0..height)`, give the XY coordinates of the
/// minimum-energy top-to-bottom seam.
///
/// The field must be at least 1x1; a zero-width grid has no columns
/// to choose from and panics.  [`crate::SeamCarver`] guarantees this
/// for every grid it builds.
pub fn energy_to_vertical_seam(energy: &Grid<f64>) -> Vec<u32> {
    let (width, height) = (energy.width, energy.height);
    let mut dist: Grid<f64> = Grid::new(width, height);
    let mut pred: Grid<u32> = Grid::new(width, height);

    // The top row is a border row, so its accumulated distance is the
    // sentinel, and each top cell is its own predecessor, which is
    // what terminates the backward walk.
    for x in 0..width {
        dist[(x, 0)] = BORDER_ENERGY;
        pred[(x, 0)] = x;
        for y in 1..height {
            dist[(x, y)] = f64::INFINITY;
        }
    }

    let maxw = width - 1;
    // Relax each pixel's three successors in the row below, in
    // left-to-right offset order.  Strictly-less updates mean the
    // first candidate wins ties.
    for y in 0..height - 1 {
        for x in 0..width {
            let base = dist[(x, y)];
            for nx in cq!(x == 0, 0, x - 1)..=cq!(x == maxw, maxw, x + 1) {
                let next = base + energy[(nx, y + 1)];
                if next < dist[(nx, y + 1)] {
                    dist[(nx, y + 1)] = next;
                    pred[(nx, y + 1)] = x;
                }
            }
        }
    }

    // The cheapest ending column; the leftmost wins ties.
    let mut seam_col = (0..width)
        .min_by(|a, b| dist[(*a, height - 1)].total_cmp(&dist[(*b, height - 1)]))
        .unwrap();
    // Working backwards, collect the column of every row on the path,
    // then reverse.
    (0..height)
        .rev()
        .fold(Vec::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = pred[(seam_col, y)];
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// The basic seam engine: a holder for the image reference, plus the
/// pair of searches the [`SeamFinder`] trait asks for.
pub struct DualGradient<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
}

impl<'a, I, P, S> DualGradient<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Takes a reference to an image, and holds onto it.
    pub fn new(image: &'a I) -> Self {
        DualGradient { image }
    }
}

impl<'a, I, P, S> SeamFinder for DualGradient<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    fn find_vertical_seam(&self) -> Vec<u32> {
        energy_to_vertical_seam(&calculate_energy(self.image))
    }

    // The search itself only knows top-to-bottom; a transposed copy
    // turns the left-to-right problem into that one.
    fn find_horizontal_seam(&self) -> Vec<u32> {
        energy_to_vertical_seam(&calculate_energy(&transpose(self.image)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_cheap_diagonal() {
        // Row 0 is overridden by the sentinel; below it, a diagonal of
        // cheap cells pulls the seam from column 0 out to column 2.
        #[rustfmt::skip]
        let cells = vec![
            1.0, 9.0, 9.0, 9.0,
            9.0, 1.0, 9.0, 9.0,
            9.0, 9.0, 1.0, 9.0,
        ];
        let energy = Grid::from_raw(4, 3, cells).unwrap();
        assert_eq!(energy_to_vertical_seam(&energy), vec![0, 1, 2]);
    }

    #[test]
    fn ties_break_left_and_straight() {
        let energy = Grid::from_raw(3, 3, vec![0.0; 9]).unwrap();
        assert_eq!(energy_to_vertical_seam(&energy), vec![0, 0, 0]);
    }

    #[test]
    fn single_column_has_only_one_path() {
        let energy = Grid::from_raw(1, 4, vec![5.0; 4]).unwrap();
        assert_eq!(energy_to_vertical_seam(&energy), vec![0, 0, 0, 0]);
    }

    #[test]
    fn single_row_picks_the_leftmost_column() {
        // With one row the sentinel initialization applies uniformly,
        // so the tie resolves to column zero.
        let energy = Grid::from_raw(4, 1, vec![3.0, 1.0, 2.0, 4.0]).unwrap();
        assert_eq!(energy_to_vertical_seam(&energy), vec![0]);
    }

    #[test]
    fn seam_is_eight_connected() {
        #[rustfmt::skip]
        let cells = vec![
            2.0, 8.0, 1.0, 7.0, 3.0,
            6.0, 2.0, 9.0, 1.0, 8.0,
            1.0, 7.0, 3.0, 8.0, 2.0,
            5.0, 1.0, 6.0, 2.0, 9.0,
        ];
        let energy = Grid::from_raw(5, 4, cells).unwrap();
        let seam = energy_to_vertical_seam(&energy);
        assert_eq!(seam.len(), 4);
        for pair in seam.windows(2) {
            let (a, b) = (i64::from(pair[0]), i64::from(pair[1]));
            assert!((a - b).abs() <= 1);
        }
        assert!(seam.iter().all(|x| *x < 5));
    }
}
