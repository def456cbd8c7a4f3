//! Crate error type.  Every failure here is a caller contract
//! violation: detected synchronously, reported to the immediate
//! caller, and never accompanied by a partial mutation of the image.

use failure::Fail;

pub type Result<T> = std::result::Result<T, CarveError>;

#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// The image (or a requested target size) has a zero dimension.
    #[fail(display = "image must be at least 1x1")]
    EmptyImage,

    /// A pixel coordinate outside the current image was queried.
    #[fail(display = "pixel ({}, {}) is outside the {}x{} image", x, y, width, height)]
    OutOfRange { x: u32, y: u32, width: u32, height: u32 },

    /// A seam of the wrong length was handed to a removal operation.
    #[fail(display = "seam has {} entries, expected {}", actual, expected)]
    SeamLength { actual: usize, expected: u32 },

    /// Removing the seam would leave a zero-sized image.
    #[fail(display = "cannot remove a seam from a {}x{} image", width, height)]
    TooSmall { width: u32, height: u32 },

    /// Seam carving only shrinks; it cannot enlarge.
    #[fail(
        display = "cannot carve a {}x{} image up to {}x{}",
        width, height, new_width, new_height
    )]
    Upscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },
}
