// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dual-gradient energy function.
//!
//! A pixel's energy is the magnitude of the local color gradient:
//! high across edges in the picture, zero across flat color.  The
//! seam search removes low-energy pixels first, which is the entire
//! trick of content-aware resizing.

use crate::cq;
use crate::grid::Grid;
use image::{GenericImageView, GrayImage, Luma, Pixel, Primitive};
use itertools::{iproduct, zip};
use num_traits::NumCast;

/// The energy assigned to every border pixel.  Large enough to
/// dominate any interior gradient: the per-channel differences are at
/// most 255, so an interior energy tops out at `sqrt(6 * 255^2) ≈ 625`.
pub const BORDER_ENERGY: f64 = 1000.0;

// Channel-wise squared difference between two pixels:
//
//        |Δ|² = (Δr)² + (Δg)² + (Δb)²
//
// mapped over the channel pairs, folded into a sum.  The subpixels
// must be integral and fit in an i32; the `NumCast` step panics on a
// non-finite float channel, which no supported buffer produces.
// The `as` cast is exact: squared 8-bit deltas top out at 65025.
fn channel_delta_sq<S>(p1: &[S], p2: &[S]) -> f64
where
    S: Primitive + 'static,
{
    zip(p1, p2)
        .map(|(c1, c2)| {
            let c1: i32 = NumCast::from(*c1).unwrap();
            let c2: i32 = NumCast::from(*c2).unwrap();
            let d = c1 - c2;
            (d * d) as f64
        })
        .sum()
}

/// The dual-gradient energy of one pixel.
///
/// Border pixels get the [`BORDER_ENERGY`] sentinel; the central
/// difference below needs both opposite neighbors, so it is undefined
/// there.  Interior pixels get `sqrt(|Δx|² + |Δy|²)`, the per-channel
/// squared differences of the left/right and up/down neighbor pairs.
/// The pixel's own color never enters into its energy.
///
/// Callers must pass in-range coordinates; [`crate::SeamCarver::energy`]
/// is the validated public entry point.  The pixel type is generic,
/// but the math assumes integer channels no wider than 8 bits, per
/// the RGB contract of the crate.
pub fn pixel_energy<I, P, S>(image: &I, x: u32, y: u32) -> f64
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
        return BORDER_ENERGY;
    }

    let channels_at = |x, y| image.get_pixel(x, y).to_rgb().channels().to_owned();
    let dx = channel_delta_sq(&channels_at(x + 1, y), &channels_at(x - 1, y));
    let dy = channel_delta_sq(&channels_at(x, y + 1), &channels_at(x, y - 1));
    (dx + dy).sqrt()
}

/// Compute the energy of every pixel in an image.  Recomputed fresh
/// before each seam search; a removal changes neighbor relationships
/// across a whole band of the image, so there is nothing worth caching.
pub fn calculate_energy<I, P, S>(image: &I) -> Grid<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut field = Grid::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        field[(x, y)] = pixel_energy(image, x, y);
    }
    field
}

/// Render an energy field as a grayscale image, rescaled so the
/// hottest pixel is white.  Driver convenience for eyeballing what the
/// carver considers important.
pub fn energy_to_image(field: &Grid<f64>) -> GrayImage {
    let mut max = 0.0f64;
    for (y, x) in iproduct!(0..field.height, 0..field.width) {
        max = max.max(field[(x, y)]);
    }

    let mut out = GrayImage::new(field.width, field.height);
    for (y, x) in iproduct!(0..field.height, 0..field.width) {
        let v = cq!(max > 0.0, (field[(x, y)] * 255.0 / max).round() as u8, 0);
        out.put_pixel(x, y, Luma([v]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, RgbImage};

    fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        ImageBuffer::from_pixel(width, height, Rgb(color))
    }

    #[test]
    fn border_pixels_get_the_sentinel() {
        let img = ImageBuffer::from_fn(4, 3, |x, y| Rgb([(x * 60) as u8, (y * 80) as u8, 200]));
        for x in 0..4 {
            assert_eq!(pixel_energy(&img, x, 0), BORDER_ENERGY);
            assert_eq!(pixel_energy(&img, x, 2), BORDER_ENERGY);
        }
        for y in 0..3 {
            assert_eq!(pixel_energy(&img, 0, y), BORDER_ENERGY);
            assert_eq!(pixel_energy(&img, 3, y), BORDER_ENERGY);
        }
    }

    #[test]
    fn uniform_interior_has_zero_energy() {
        let img = solid(4, 4, [90, 120, 30]);
        assert_eq!(pixel_energy(&img, 1, 1), 0.0);
        assert_eq!(pixel_energy(&img, 2, 2), 0.0);
    }

    #[test]
    fn interior_energy_is_the_gradient_magnitude() {
        let mut img = solid(3, 3, [0, 0, 0]);
        img.put_pixel(0, 1, Rgb([40, 40, 40]));
        img.put_pixel(2, 1, Rgb([50, 50, 50]));
        img.put_pixel(1, 0, Rgb([20, 20, 20]));
        img.put_pixel(1, 2, Rgb([60, 60, 60]));

        // dx = 3 * 10^2, dy = 3 * 40^2
        let expected = (300.0f64 + 4800.0).sqrt();
        assert!((pixel_energy(&img, 1, 1) - expected).abs() < 1e-9);
    }

    #[test]
    fn bright_center_is_invisible_to_the_central_difference() {
        let mut img = solid(3, 3, [10, 10, 10]);
        img.put_pixel(1, 1, Rgb([255, 255, 255]));
        // Both neighbor pairs match each other, so the gradient is zero.
        assert_eq!(pixel_energy(&img, 1, 1), 0.0);
    }

    #[test]
    fn field_covers_every_pixel() {
        let field = calculate_energy(&solid(3, 3, [7, 7, 7]));
        for (y, x) in iproduct!(0..3u32, 0..3u32) {
            let expected = cq!(x == 1 && y == 1, 0.0, BORDER_ENERGY);
            assert_eq!(field[(x, y)], expected);
        }
    }

    #[test]
    fn energy_image_rescales_to_full_white() {
        let map = energy_to_image(&calculate_energy(&solid(3, 3, [7, 7, 7])));
        assert_eq!(map.get_pixel(0, 0).0, [255]);
        assert_eq!(map.get_pixel(1, 1).0, [0]);
    }
}
