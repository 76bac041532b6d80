// grid.rs - Dense row-major grid storage

use std::ops::{Index, IndexMut};

use crate::error::{GridError, GridResult};

/// Cell position as `(x, y)`: column first, then row.
pub type CellPos = (usize, usize);

/// A rectangular grid of `T`, stored row-major in a single `Vec`.
///
/// The grid owns its storage outright. It is `Clone` but never `Copy`, so
/// duplicating a large grid always shows up as an explicit `.clone()`.
///
/// Meant for plain value tags (small integers, fieldless enums). Every cell
/// starts out as `T::default()`, so element types without a meaningful
/// default are a poor fit.
///
/// Every coordinate-taking accessor except [`get`](Self::get) and
/// [`get_mut`](Self::get_mut) panics when `x >= width` or `y >= height`, in
/// release builds as well as debug builds. Hot loops should walk
/// [`rows`](Self::rows) / [`row_mut`](Self::row_mut) instead of indexing cell
/// by cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DenseGrid<T> {
    width: usize,
    height: usize,
    values: Vec<T>, // len == width * height
}

fn checked_len(width: usize, height: usize) -> GridResult<usize> {
    width
        .checked_mul(height)
        .ok_or(GridError::DimensionOverflow { width, height })
}

#[inline]
fn linear_offset(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

fn default_values<T: Default>(width: usize, height: usize) -> GridResult<Vec<T>> {
    let len = checked_len(width, height)?;
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .map_err(|_| GridError::AllocationFailed { width, height })?;
    values.resize_with(len, T::default);
    Ok(values)
}

impl<T: Default> DenseGrid<T> {
    /// Creates a `width` x `height` grid with every cell set to `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize` or the storage can't be
    /// allocated.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(grid) => grid,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(width: usize, height: usize) -> GridResult<Self> {
        Ok(Self {
            width,
            height,
            values: default_values(width, height)?,
        })
    }

    /// Changes the dimensions, keeping every cell that lies inside both the
    /// old and the new rectangle at the same `(x, y)`. All other cells of the
    /// new grid are `T::default()`; cells that fall outside are dropped.
    ///
    /// This always allocates a fresh buffer and moves the intersection over
    /// row by row, so it costs `O(min(w, new_w) * min(h, new_h))` on top of
    /// the allocation. Avoid calling it per frame on large grids.
    ///
    /// # Panics
    ///
    /// Panics if `new_width * new_height` overflows `usize` or the new
    /// storage can't be allocated.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        if let Err(e) = self.try_resize(new_width, new_height) {
            panic!("{e}");
        }
    }

    /// Like [`resize`](Self::resize), but reports an overflowing or
    /// unallocatable size instead of panicking. The grid is left untouched on
    /// error.
    pub fn try_resize(&mut self, new_width: usize, new_height: usize) -> GridResult<()> {
        let mut values = default_values(new_width, new_height)?;

        let copy_width = self.width.min(new_width);
        let copy_height = self.height.min(new_height);

        if self.width == new_width {
            // Same row stride: the kept rows are one contiguous prefix.
            let n = copy_width * copy_height;
            values[..n].swap_with_slice(&mut self.values[..n]);
        } else {
            for y in 0..copy_height {
                let old = linear_offset(0, y, self.width);
                let new = linear_offset(0, y, new_width);
                values[new..new + copy_width]
                    .swap_with_slice(&mut self.values[old..old + copy_width]);
            }
        }

        tracing::debug!(
            old_width = self.width,
            old_height = self.height,
            new_width,
            new_height,
            "resized grid"
        );

        self.values = values;
        self.width = new_width;
        self.height = new_height;
        debug_assert_eq!(self.values.len(), self.width * self.height);
        Ok(())
    }

    /// Resets every cell to `T::default()`. Dimensions are unchanged.
    pub fn clear(&mut self) {
        self.values.fill_with(T::default);
    }
}

impl<T> DenseGrid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of cells, `width * height`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) is out of bounds for a {}x{} grid",
            self.width,
            self.height
        );
        linear_offset(x, y, self.width)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if self.contains(x, y) {
            self.values.get(linear_offset(x, y, self.width))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if self.contains(x, y) {
            self.values.get_mut(linear_offset(x, y, self.width))
        } else {
            None
        }
    }

    /// Overwrites the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let offset = self.offset(x, y);
        self.values[offset] = value;
    }

    /// Row `y` as a slice of `width` cells.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row {y} is out of bounds for a grid of height {}", self.height);
        let start = linear_offset(0, y, self.width);
        &self.values[start..start + self.width]
    }

    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row {y} is out of bounds for a grid of height {}", self.height);
        let start = linear_offset(0, y, self.width);
        &mut self.values[start..start + self.width]
    }

    /// Rows from top (`y == 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Every cell in row-major order, paired with its position.
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, &T)> + '_ {
        let width = self.width;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, value)| ((i % width, i / width), value))
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.values.fill(value);
    }
}

impl<T> Index<CellPos> for DenseGrid<T> {
    type Output = T;

    fn index(&self, (x, y): CellPos) -> &Self::Output {
        &self.values[self.offset(x, y)]
    }
}

impl<T> IndexMut<CellPos> for DenseGrid<T> {
    fn index_mut(&mut self, (x, y): CellPos) -> &mut Self::Output {
        let offset = self.offset(x, y);
        &mut self.values[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn new_is_all_default() {
        let grid: DenseGrid<u8> = DenseGrid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.len(), 12);
        assert!(grid.cells().all(|(_, v)| *v == 0));
    }

    #[test]
    fn default_is_empty() {
        let grid: DenseGrid<u8> = DenseGrid::default();
        assert!(grid.is_empty());
        assert_eq!(grid.dimensions(), (0, 0));
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.rows().count(), 0);
    }

    #[test]
    fn degenerate_dimensions() {
        let grid: DenseGrid<u8> = DenseGrid::new(0, 5);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 5);
        assert!(grid.rows().all(<[u8]>::is_empty));

        let grid: DenseGrid<u8> = DenseGrid::new(7, 0);
        assert!(grid.is_empty());
        assert!(!grid.contains(0, 0));
    }

    #[test]
    fn set_touches_one_cell() {
        let mut grid: DenseGrid<u8> = DenseGrid::new(5, 4);
        grid.set(3, 2, 9);
        for ((x, y), v) in grid.cells() {
            let expected = if (x, y) == (3, 2) { 9 } else { 0 };
            assert_eq!(*v, expected, "cell ({x}, {y})");
        }
        assert_eq!(grid[(3, 2)], 9);
        assert_eq!(grid.row(2), &[0, 0, 0, 9, 0]);
    }

    #[test]
    fn index_mut_writes_through() {
        let mut grid: DenseGrid<char> = DenseGrid::new(2, 2);
        grid[(1, 0)] = 'x';
        *grid.get_mut(0, 1).unwrap() = 'y';
        assert_eq!(grid.row(0), &['\0', 'x']);
        assert_eq!(grid.row(1), &['y', '\0']);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let mut grid: DenseGrid<u8> = DenseGrid::new(3, 2);
        assert_eq!(grid.get(2, 1), Some(&0));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert!(grid.get_mut(3, 2).is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_past_width_panics() {
        let grid: DenseGrid<u8> = DenseGrid::new(3, 2);
        let _ = grid[(3, 0)];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_past_height_panics() {
        let mut grid: DenseGrid<u8> = DenseGrid::new(3, 2);
        grid.set(0, 2, 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn x_does_not_wrap_into_next_row() {
        // (3, 0) would alias (0, 1) without the per-axis check
        let mut grid: DenseGrid<u8> = DenseGrid::new(3, 2);
        grid[(3, 0)] = 1;
    }

    #[test]
    fn try_new_reports_overflow() {
        let err = DenseGrid::<u8>::try_new(usize::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            GridError::DimensionOverflow {
                width: usize::MAX,
                height: 2
            }
        );
    }

    #[test]
    fn try_new_reports_unallocatable_size() {
        // fits in usize, but not in the address space
        let err = DenseGrid::<u8>::try_new(usize::MAX / 2, 2).unwrap_err();
        assert_eq!(
            err,
            GridError::AllocationFailed {
                width: usize::MAX / 2,
                height: 2
            }
        );
    }

    #[test]
    fn try_resize_unallocatable_leaves_grid_untouched() {
        let mut grid: DenseGrid<u8> = DenseGrid::new(2, 2);
        grid.set(0, 1, 3);
        let err = grid.try_resize(usize::MAX / 2, 2).unwrap_err();
        assert!(matches!(err, GridError::AllocationFailed { .. }));
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid[(0, 1)], 3);
    }

    #[test]
    fn try_resize_overflow_leaves_grid_untouched() {
        let mut grid: DenseGrid<u8> = DenseGrid::new(2, 2);
        grid.set(1, 1, 5);
        assert!(grid.try_resize(2, usize::MAX).is_err());
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid[(1, 1)], 5);
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn resize_overflow_panics() {
        let mut grid: DenseGrid<u8> = DenseGrid::new(2, 2);
        grid.resize(usize::MAX, usize::MAX);
    }

    #[test]
    fn resize_same_width_keeps_prefix() {
        let mut grid: DenseGrid<u8> = DenseGrid::new(3, 3);
        for (i, row) in (0u8..).zip(0..3) {
            grid.row_mut(row).fill(i + 1);
        }
        grid.resize(3, 2);
        assert_eq!(grid.row(0), &[1, 1, 1]);
        assert_eq!(grid.row(1), &[2, 2, 2]);

        grid.resize(3, 4);
        assert_eq!(grid.row(1), &[2, 2, 2]);
        assert_eq!(grid.row(2), &[0, 0, 0]);
        assert_eq!(grid.row(3), &[0, 0, 0]);
    }

    #[test]
    fn resize_relayouts_on_width_change() {
        let mut grid: DenseGrid<u8> = DenseGrid::new(2, 2);
        grid.set(0, 1, 7);
        grid.resize(4, 2);
        // linear offset 2 in the old layout, 4 in the new one
        assert_eq!(grid[(0, 1)], 7);
        assert_eq!(grid.row(0), &[0, 0, 0, 0]);
        assert_eq!(grid.row(1), &[7, 0, 0, 0]);
    }

    #[test]
    fn resize_to_empty_and_back() {
        let mut grid: DenseGrid<u8> = DenseGrid::new(3, 3);
        grid.fill(4);
        grid.resize(0, 0);
        assert!(grid.is_empty());
        grid.resize(2, 2);
        assert!(grid.cells().all(|(_, v)| *v == 0));
    }

    #[test]
    fn resize_moves_non_copy_values() {
        let mut grid: DenseGrid<String> = DenseGrid::new(2, 2);
        grid.set(1, 0, "kept".to_string());
        grid.set(1, 1, "dropped".to_string());
        grid.resize(2, 1);
        assert_eq!(grid[(1, 0)], "kept");
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn clear_and_fill() {
        let mut grid: DenseGrid<u8> = DenseGrid::new(3, 2);
        grid.fill(2);
        assert!(grid.cells().all(|(_, v)| *v == 2));
        grid.clear();
        assert_eq!(grid, DenseGrid::new(3, 2));
    }

    #[test]
    fn clone_is_deep() {
        let mut grid: DenseGrid<u8> = DenseGrid::new(2, 2);
        let copy = grid.clone();
        grid.set(0, 0, 1);
        assert_eq!(copy[(0, 0)], 0);
        assert_ne!(grid, copy);
    }

    #[test]
    fn cells_are_row_major() {
        let grid: DenseGrid<u8> = DenseGrid::new(2, 2);
        let positions: Vec<CellPos> = grid.cells().map(|(pos, _)| pos).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    #[traced_test]
    fn resize_is_logged() {
        let mut grid: DenseGrid<u8> = DenseGrid::new(3, 2);
        grid.resize(2, 3);
        assert!(logs_contain("resized grid"));
        assert!(logs_contain("new_width=2"));
    }
}
