use std::ops::{Index, IndexMut};

/// A flat, addressable two-dimensional scratch map.  One type serves
/// every per-pixel table the carver needs: the `f64` energy field, the
/// `f64` accumulated-distance table, and the `u32` predecessor table
/// built during a seam search.
#[derive(Debug)]
pub struct Grid<T: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<T>,
}

impl<T: Default + Copy> Grid<T> {
    /// A new grid with every cell at `T::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![T::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major cell vector.  Returns `None` when the
    /// vector length does not match the dimensions.
    pub fn from_raw(width: u32, height: u32, cells: Vec<T>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(Grid {
            width,
            height,
            cells,
        })
    }

    // Keep the index math in exactly one place.  This is the same
    // row-major layout image.rs uses for its buffers.
    fn cell_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<T: Default + Copy> Index<(u32, u32)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (u32, u32)) -> &T {
        let index = self.cell_index(x, y);
        &self.cells[index]
    }
}

impl<T: Default + Copy> IndexMut<(u32, u32)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut T {
        let index = self.cell_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_is_row_major() {
        let mut grid: Grid<u32> = Grid::new(3, 2);
        grid[(2, 0)] = 7;
        grid[(0, 1)] = 9;
        assert_eq!(grid.cells, vec![0, 0, 7, 9, 0, 0]);
        assert_eq!(grid[(2, 0)], 7);
        assert_eq!(grid[(0, 1)], 9);
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(Grid::from_raw(2, 2, vec![1u32, 2, 3]).is_none());
        let grid = Grid::from_raw(2, 2, vec![1u32, 2, 3, 4]).unwrap();
        assert_eq!(grid[(1, 1)], 4);
    }
}
