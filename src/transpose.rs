// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Grid transposition.
//!
//! Every horizontal operation in this crate is the matching vertical
//! operation run against a transposed copy of the image.  That keeps
//! the dynamic program written exactly once, and transposition is its
//! own inverse, so round-tripping is trivially checkable.

use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

/// A new buffer with the row and column roles swapped: pixel `(x, y)`
/// of the output is pixel `(y, x)` of the input.
pub fn transpose<I, P, S>(image: &I) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut out = ImageBuffer::new(height, width);
    for y in 0..height {
        for x in 0..width {
            out.put_pixel(y, x, image.get_pixel(x, y));
        }
    }
    out
}
