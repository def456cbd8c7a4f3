// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carver façade.
//!
//! [`SeamCarver`] owns the pixel buffer for its whole lifetime and is
//! the only thing that replaces it.  Every removal validates its
//! arguments first, builds a complete replacement buffer, and only
//! then swaps it in, so a failed call leaves the image exactly as it
//! was.

use crate::dualgradient::DualGradient;
use crate::energy::pixel_energy;
use crate::error::{CarveError, Result};
use crate::seamfinder::SeamFinder;
use crate::transpose::transpose;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use tracing::debug;

// The seam pixel is skipped and every row below it shifts up by one.
// Reading row `y + skip` from the old buffer keeps each index in
// range even when a stale seam names a row that no longer exists; a
// garbage seam produces a meaningless picture, never a bad access.
fn remove_row_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width, height - 1);
    for x in 0..width {
        let mut skip = 0;
        for y in 0..height - 1 {
            if seam[x as usize] == y {
                skip = 1;
            }
            imgbuf.put_pixel(x, y, image.get_pixel(x, y + skip));
        }
    }
    imgbuf
}

#[derive(PartialEq, Copy, Clone)]
enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        if self == Carve::Width {
            Carve::Height
        } else {
            Carve::Width
        }
    }
}

/// A seam carver, holding the image it will shrink.
pub struct SeamCarver<P, S>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: ImageBuffer<P, Vec<S>>,
}

impl<P, S> SeamCarver<P, S>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Takes ownership of the image to be carved.  The image must be
    /// at least one pixel in each dimension.
    pub fn new(image: ImageBuffer<P, Vec<S>>) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyImage);
        }
        Ok(SeamCarver { image })
    }

    /// Width of the current picture.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the current picture.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// A copy of the current picture.  A copy, so no caller can
    /// mutate the carver's state out from under it, and no later
    /// carve invalidates what the caller got back.
    pub fn picture(&self) -> ImageBuffer<P, Vec<S>> {
        self.image.clone()
    }

    /// The dual-gradient energy of the pixel at column `x`, row `y`.
    /// Border pixels report the sentinel; out-of-range coordinates are
    /// an error, never a probe of the underlying buffer.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        let (width, height) = self.image.dimensions();
        if x >= width || y >= height {
            return Err(CarveError::OutOfRange {
                x,
                y,
                width,
                height,
            });
        }
        Ok(pixel_energy(&self.image, x, y))
    }

    /// The current minimum-energy top-to-bottom seam, one column per
    /// row.
    pub fn find_vertical_seam(&self) -> Vec<u32> {
        DualGradient::new(&self.image).find_vertical_seam()
    }

    /// The current minimum-energy left-to-right seam, one row per
    /// column.
    pub fn find_horizontal_seam(&self) -> Vec<u32> {
        DualGradient::new(&self.image).find_horizontal_seam()
    }

    /// Remove a left-to-right seam, shrinking the picture to
    /// `width x (height - 1)`.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        let (width, height) = self.image.dimensions();
        if seam.len() != width as usize {
            return Err(CarveError::SeamLength {
                actual: seam.len(),
                expected: width,
            });
        }
        if height <= 1 {
            return Err(CarveError::TooSmall { width, height });
        }
        self.image = remove_row_seam(&self.image, seam);
        Ok(())
    }

    /// Remove a top-to-bottom seam, shrinking the picture to
    /// `(width - 1) x height`.  Transposes, reuses the row-removal
    /// logic, and transposes back.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        let (width, height) = self.image.dimensions();
        if seam.len() != height as usize {
            return Err(CarveError::SeamLength {
                actual: seam.len(),
                expected: height,
            });
        }
        if width <= 1 {
            return Err(CarveError::TooSmall { width, height });
        }
        self.image = transpose(&remove_row_seam(&transpose(&self.image), seam));
        Ok(())
    }

    /// Repeatedly carve seams until the picture is `new_width` by
    /// `new_height`, alternating directions while both dimensions are
    /// oversized.  Carving can only shrink; asking for a larger (or
    /// zero-sized) picture is an error, reported before anything is
    /// touched.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = self.image.dimensions();
        if new_width == 0 || new_height == 0 {
            return Err(CarveError::EmptyImage);
        }
        if new_width > width || new_height > height {
            return Err(CarveError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }

        let mut direction = Carve::Width;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.carve_once(Carve::Width)?;
        }
        while self.height() > new_height {
            self.carve_once(Carve::Height)?;
        }
        Ok(())
    }

    fn carve_once(&mut self, direction: Carve) -> Result<()> {
        if direction == Carve::Width {
            let seam = self.find_vertical_seam();
            self.remove_vertical_seam(&seam)?;
        } else {
            let seam = self.find_horizontal_seam();
            self.remove_horizontal_seam(&seam)?;
        }
        debug!("carved to {}x{}", self.width(), self.height());
        Ok(())
    }
}
