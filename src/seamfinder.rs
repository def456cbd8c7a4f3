/// How seams are requested from an image.  A deliberately small
/// interface, leaving room for alternative search engines (forward
/// energy, cached partial recomputation) behind the same pair of
/// calls.
pub trait SeamFinder {
    /// The minimum-energy top-to-bottom seam: one column index per
    /// row, adjacent entries differing by at most one.
    fn find_vertical_seam(&self) -> Vec<u32>;

    /// The minimum-energy left-to-right seam: one row index per
    /// column, adjacent entries differing by at most one.
    fn find_horizontal_seam(&self) -> Vec<u32>;
}
