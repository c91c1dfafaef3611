use crate::element::Element;
use crate::error::Error;
use core::fmt::{Debug, Formatter};
use log::{debug, trace};

/// Element access shared by the 2D array representations in this crate.
///
/// Negative coordinates yield `IndexOutOfBounds`.
pub trait Array2D<T> {
    fn get(&self, row: isize, column: isize) -> Result<T, Error>;
    fn set(&mut self, row: isize, column: isize, value: T) -> Result<(), Error>;
    fn row_count(&self) -> usize;
    fn column_count(&self) -> usize;
}

/// Validates constructor dimensions. Returns `(rows, columns, rows * columns)`.
pub(crate) fn checked_shape(rows: isize, columns: isize) -> Result<(usize, usize, usize), Error> {
    let invalid = || {
        debug!("rejecting dimension {} x {}", rows, columns);
        Error::InvalidDimension { rows, columns }
    };
    if rows < 0 || columns < 0 {
        return Err(invalid());
    }
    let (r, c) = (rows as usize, columns as usize);
    let len = r.checked_mul(c).ok_or_else(invalid)?;
    Ok((r, c, len))
}

/// Reserves room for `len` cells, failing with `InvalidDimension` when the
/// storage would exceed `isize::MAX` bytes or cannot be allocated.
fn reserve_cells<T>(rows: usize, columns: usize, len: usize) -> Result<Vec<T>, Error> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len).map_err(|e| {
        debug!("cannot allocate {} x {}: {}", rows, columns, e);
        Error::InvalidDimension {
            rows: rows as isize,
            columns: columns as isize,
        }
    })?;
    Ok(vec)
}

/// Maps `(row, column)` to its row-major offset, or fails if either coordinate
/// is outside the array.
pub(crate) fn checked_offset(
    rows: usize,
    columns: usize,
    row: isize,
    column: isize,
) -> Result<usize, Error> {
    if row < 0 || column < 0 || row as usize >= rows || column as usize >= columns {
        return Err(Error::IndexOutOfBounds {
            row,
            column,
            rows,
            columns,
        });
    }
    Ok(row as usize * columns + column as usize)
}

/// A fixed-size, row-major 2D array. Cell `(i, j)` lives at `vec[i * columns + j]`.
///
/// The shape is set at construction and never changes.
#[derive(Clone)]
pub struct Dense2DArray<T> {
    vec: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T: Element> Dense2DArray<T> {
    /// Allocates a `rows` x `columns` array with every cell set to `fill`.
    pub fn create(rows: isize, columns: isize, fill: T) -> Result<Self, Error> {
        let (rows, columns, len) = checked_shape(rows, columns)?;
        debug!("Dense2DArray<{}>: allocating {} x {}", T::KIND, rows, columns);
        let mut vec = reserve_cells(rows, columns, len)?;
        vec.resize(len, fill);
        Ok(Self { vec, rows, columns })
    }

    /// Allocates an array with every cell set to `T::ZERO`.
    pub fn zeroed(rows: isize, columns: isize) -> Result<Self, Error> {
        Self::create(rows, columns, T::ZERO)
    }

    /// Allocates an array where cell `(i, j)` is `f(i, j)`. `f` is called in
    /// row-major order.
    pub fn from_fn<F>(rows: isize, columns: isize, mut f: F) -> Result<Self, Error>
    where
        F: FnMut(usize, usize) -> T,
    {
        let (rows, columns, len) = checked_shape(rows, columns)?;
        debug!(
            "Dense2DArray<{}>: building {} x {} from fn",
            T::KIND,
            rows,
            columns
        );
        let mut vec = reserve_cells(rows, columns, len)?;
        for i in 0..rows {
            for j in 0..columns {
                vec.push(f(i, j));
            }
        }
        Ok(Self { vec, rows, columns })
    }

    pub fn get(&self, row: isize, column: isize) -> Result<T, Error> {
        let offset = checked_offset(self.rows, self.columns, row, column)?;
        Ok(self.vec[offset])
    }

    pub fn set(&mut self, row: isize, column: isize, value: T) -> Result<(), Error> {
        let offset = checked_offset(self.rows, self.columns, row, column)?;
        self.vec[offset] = value;
        Ok(())
    }

    pub fn fill(&mut self, value: T) {
        trace!(
            "Dense2DArray<{}>: fill {} cells with {:?}",
            T::KIND,
            self.vec.len(),
            value
        );
        for cell in self.vec.iter_mut() {
            *cell = value;
        }
    }
}

impl<T> Dense2DArray<T> {
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Returns the number of cells, `rows * columns`.
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn get_ref(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.rows && column < self.columns {
            self.vec.get(row * self.columns + column)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if row < self.rows && column < self.columns {
            self.vec.get_mut(row * self.columns + column)
        } else {
            None
        }
    }

    /// Iterates all cells in row-major order: row 0 left to right, then row 1, etc.
    pub fn iter(&self) -> impl Iterator<Item = &T> + DoubleEndedIterator + ExactSizeIterator + '_ {
        self.vec.iter()
    }

    /// Iterates `(row, column, &value)` in row-major order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let columns = self.columns;
        self.vec
            .iter()
            .enumerate()
            .map(move |(offset, value)| (offset / columns, offset % columns, value))
    }

    /// `vec` must already hold `rows * columns` cells in row-major order.
    pub(crate) fn from_parts(vec: Vec<T>, rows: usize, columns: usize) -> Self {
        debug_assert_eq!(vec.len(), rows * columns);
        Self { vec, rows, columns }
    }

    fn row_values(&self, row: usize) -> &[T] {
        &self.vec[row * self.columns..(row + 1) * self.columns]
    }
}

impl<T: Element> Array2D<T> for Dense2DArray<T> {
    fn get(&self, row: isize, column: isize) -> Result<T, Error> {
        Dense2DArray::get(self, row, column)
    }

    fn set(&mut self, row: isize, column: isize, value: T) -> Result<(), Error> {
        Dense2DArray::set(self, row, column, value)
    }

    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns
    }
}

// (row, column)
impl<T> core::ops::Index<(usize, usize)> for Dense2DArray<T> {
    type Output = T;
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && column < self.columns,
            "index ({}, {}) out of bounds for {} x {} array",
            row,
            column,
            self.rows,
            self.columns
        );
        &self.vec[row * self.columns + column]
    }
}

// (row, column)
impl<T> core::ops::IndexMut<(usize, usize)> for Dense2DArray<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows && column < self.columns,
            "index ({}, {}) out of bounds for {} x {} array",
            row,
            column,
            self.rows,
            self.columns
        );
        &mut self.vec[row * self.columns + column]
    }
}

impl<T: Debug> Debug for Dense2DArray<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.debug_list()
            .entries((0..self.rows).map(|row| self.row_values(row)))
            .finish()
    }
}
