use crate::array2::{checked_offset, checked_shape, Array2D, Dense2DArray};
use crate::error::Error;
use bit_vec::BitVec;
use core::fmt::{Debug, Formatter};
use log::{debug, trace};

/// `BitArray2` is a boolean 2D array that stores one bit per cell, rather than
/// the one byte per cell that `Dense2DArray<bool>` uses.
///
/// The layout is row-major, the same as `Dense2DArray`: cell `(i, j)` is bit
/// `i * columns + j`. Access goes through `get`/`set` by value; since cells
/// are packed, no `&bool` into the storage can be handed out.
#[derive(Clone)]
pub struct BitArray2 {
    bits: BitVec,
    rows: usize,
    columns: usize,
}

impl BitArray2 {
    pub fn create(rows: isize, columns: isize, fill: bool) -> Result<Self, Error> {
        let (rows, columns, len) = checked_shape(rows, columns)?;
        debug!("BitArray2: allocating {} x {} ({} bits)", rows, columns, len);
        Ok(Self {
            bits: BitVec::from_elem(len, fill),
            rows,
            columns,
        })
    }

    pub fn get(&self, row: isize, column: isize) -> Result<bool, Error> {
        let offset = checked_offset(self.rows, self.columns, row, column)?;
        Ok(self.bits[offset])
    }

    pub fn set(&mut self, row: isize, column: isize, value: bool) -> Result<(), Error> {
        let offset = checked_offset(self.rows, self.columns, row, column)?;
        self.bits.set(offset, value);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn fill(&mut self, value: bool) {
        trace!("BitArray2: fill {} bits with {}", self.bits.len(), value);
        if value {
            self.bits.set_all();
        } else {
            self.bits.clear();
        }
    }

    /// Iterates all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter()
    }

    /// Returns the number of cells that are `true`.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&b| b).count()
    }

    pub fn to_dense(&self) -> Dense2DArray<bool> {
        Dense2DArray::from_parts(self.bits.iter().collect(), self.rows, self.columns)
    }
}

impl From<&Dense2DArray<bool>> for BitArray2 {
    fn from(dense: &Dense2DArray<bool>) -> Self {
        Self {
            bits: dense.iter().copied().collect(),
            rows: dense.row_count(),
            columns: dense.column_count(),
        }
    }
}

impl Array2D<bool> for BitArray2 {
    fn get(&self, row: isize, column: isize) -> Result<bool, Error> {
        BitArray2::get(self, row, column)
    }

    fn set(&mut self, row: isize, column: isize, value: bool) -> Result<(), Error> {
        BitArray2::set(self, row, column, value)
    }

    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns
    }
}

impl Debug for BitArray2 {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        let columns = self.columns;
        fmt.debug_list()
            .entries((0..self.rows).map(|row| {
                (0..columns)
                    .map(|col| if self.bits[row * columns + col] { '1' } else { '0' })
                    .collect::<String>()
            }))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::init_test;

    #[test]
    fn create_and_access() {
        init_test();
        let mut m = BitArray2::create(3, 4, false).unwrap();
        assert_eq!((m.row_count(), m.column_count(), m.len()), (3, 4, 12));
        m.set(0, 0, true).unwrap();
        m.set(2, 3, true).unwrap();
        m.set(2, 3, true).unwrap();
        assert_eq!(m.get(0, 0), Ok(true));
        assert_eq!(m.get(0, 1), Ok(false));
        assert_eq!(m.get(2, 3), Ok(true));
        assert_eq!(m.count_ones(), 2);
        assert_eq!((m.row_count(), m.column_count()), (3, 4));
    }

    #[test]
    fn errors_match_dense() {
        init_test();
        assert_eq!(
            BitArray2::create(-1, 5, true).err(),
            Some(Error::InvalidDimension {
                rows: -1,
                columns: 5
            })
        );
        assert!(BitArray2::create(5, -1, true).is_err());

        let mut m = BitArray2::create(3, 4, true).unwrap();
        let dense = Dense2DArray::create(3, 4, true).unwrap();
        for &(row, column) in [(3, 0), (0, 4), (-1, 0), (0, -1)].iter() {
            assert_eq!(m.get(row, column), dense.get(row, column));
            assert!(m.set(row, column, false).is_err());
        }
        assert_eq!(m.count_ones(), 12);
    }

    #[test]
    fn fill() {
        init_test();
        let mut m = BitArray2::create(2, 5, false).unwrap();
        m.fill(true);
        assert!(m.iter().all(|b| b));
        m.fill(false);
        assert_eq!(m.count_ones(), 0);
        assert_eq!(m.len(), 10);
    }

    #[test]
    fn dense_round_trip_keeps_layout() {
        init_test();
        let dense = Dense2DArray::from_fn(3, 2, |i, j| (i + j) % 2 == 0).unwrap();
        let bits = BitArray2::from(&dense);
        assert_eq!((bits.row_count(), bits.column_count()), (3, 2));
        for (i, j, &v) in dense.iter_indexed() {
            assert_eq!(bits.get(i as isize, j as isize), Ok(v));
        }
        assert!(bits.to_dense().iter().eq(dense.iter()));
        assert_eq!(format!("{:?}", bits), r#"["10", "01", "10"]"#);
    }

    #[test]
    fn empty() {
        init_test();
        let m = BitArray2::create(0, 7, true).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.iter().count(), 0);
        assert_eq!(m.to_dense().len(), 0);
        assert_eq!(m.to_dense().column_count(), 7);
    }
}
