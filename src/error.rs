use core::fmt::{Display, Formatter};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A constructor was given a negative dimension, or `rows * columns`
    /// does not fit in `usize`.
    InvalidDimension { rows: isize, columns: isize },

    /// A coordinate fell outside `[0, rows)` or `[0, columns)`.
    IndexOutOfBounds {
        row: isize,
        column: isize,
        rows: usize,
        columns: usize,
    },
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            Error::InvalidDimension { rows, columns } => {
                write!(fmt, "invalid dimension {} x {}", rows, columns)
            }
            Error::IndexOutOfBounds {
                row,
                column,
                rows,
                columns,
            } => write!(
                fmt,
                "index ({}, {}) out of bounds for {} x {} array",
                row, column, rows, columns
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_coordinates() {
        let e = Error::IndexOutOfBounds {
            row: -1,
            column: 4,
            rows: 3,
            columns: 4,
        };
        assert_eq!(e.to_string(), "index (-1, 4) out of bounds for 3 x 4 array");

        let e = Error::InvalidDimension {
            rows: 5,
            columns: -1,
        };
        assert_eq!(e.to_string(), "invalid dimension 5 x -1");
    }
}
