// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! A seam is a connected path of pixels, one per row (vertical) or one
//! per column (horizontal), spanning the full image.  Removing the
//! seam with the least accumulated energy shrinks the image by one
//! pixel in one dimension while disturbing its content as little as
//! possible.  The [`SeamCarver`] façade owns the pixel buffer and
//! exposes the energy, seam-search, and seam-removal operations.

mod ternary;

pub mod carver;
pub mod dualgradient;
pub mod energy;
pub mod error;
pub mod grid;
pub mod seamfinder;
pub mod transpose;

pub use carver::SeamCarver;
pub use energy::{calculate_energy, energy_to_image, BORDER_ENERGY};
pub use error::{CarveError, Result};
pub use seamfinder::SeamFinder;
