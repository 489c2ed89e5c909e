use std::fmt::{self, Debug, Display, Formatter};

use gridly::prelude::*;
use gridly_grids::*;
use joinery::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Cell {
    Off,
    On,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Off
    }
}

impl Cell {
    #[inline]
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Off),
            1 => Some(Cell::On),
            _ => None,
        }
    }

    #[inline]
    pub fn is_on(self) -> bool {
        self == Cell::On
    }

    #[inline]
    pub fn value(self) -> u8 {
        match self {
            Cell::Off => 0,
            Cell::On => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum MatrixError {
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {column}) has value {value}; only 0 or 1 are allowed")]
    NotBinary {
        row: usize,
        column: usize,
        value: u8,
    },

    #[error("matrix dimensions are too large")]
    TooLarge,
}

/// A rectangular grid of binary cells. Reads outside the bounds are "off".
#[derive(Clone)]
pub struct Matrix {
    grid: VecGrid<Cell>,
}

impl Matrix {
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MatrixError::Ragged {
                    row: row_index,
                    expected: width,
                    found: row.len(),
                });
            }

            if let Some((column, &value)) = row
                .iter()
                .enumerate()
                .find(|&(_, &value)| Cell::from_value(value).is_none())
            {
                return Err(MatrixError::NotBinary {
                    row: row_index,
                    column,
                    value,
                });
            }
        }

        let num_rows = to_isize(rows.len())?;
        let num_columns = to_isize(width)?;

        let mut grid: VecGrid<Cell> =
            VecGrid::new(Rows(num_rows) + Columns(num_columns)).ok_or(MatrixError::TooLarge)?;

        for (row, values) in (0..num_rows).map(Row).zip(rows.iter()) {
            for (column, &value) in (0..num_columns).map(Column).zip(values.as_ref().iter()) {
                if value == 1 {
                    grid[row + column] = Cell::On;
                }
            }
        }

        Ok(Matrix { grid })
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.grid.dimensions().rows.0 as usize
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.grid.dimensions().columns.0 as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0 || self.num_columns() == 0
    }

    #[inline]
    fn get(&self, location: Location) -> Option<Cell> {
        self.grid.get(location).ok().copied()
    }

    #[inline]
    pub fn is_on(&self, location: Location) -> bool {
        self.get(location).map_or(false, Cell::is_on)
    }

    /// Every on-cell, in row-major order.
    pub fn on_cells(&self) -> Vec<Location> {
        let mut cells = Vec::new();

        for row in self.grid.row_range() {
            for column in self.grid.column_range() {
                let location = row + column;
                if self.grid[location].is_on() {
                    cells.push(location);
                }
            }
        }

        cells
    }

    fn row_values(&self, row: Row) -> impl Iterator<Item = u8> + Clone + '_ {
        self.grid
            .column_range()
            .map(move |column| self.grid[row + column].value())
    }
}

fn to_isize(value: usize) -> Result<isize, MatrixError> {
    if value > isize::max_value() as usize {
        Err(MatrixError::TooLarge)
    } else {
        Ok(value as isize)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.grid.dimensions() == other.grid.dimensions()
            && self
                .grid
                .row_range()
                .all(|row| self.row_values(row).eq(other.row_values(row)))
    }
}

impl Eq for Matrix {}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in self.grid.row_range() {
            writeln!(f, "{}", self.row_values(row).join_with(' '))?;
        }
        Ok(())
    }
}

impl Debug for Matrix {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "Matrix({}x{})\n{}",
            self.num_rows(),
            self.num_columns(),
            self
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: isize, column: isize) -> Location {
        Row(row) + Column(column)
    }

    #[test]
    fn builds_from_rows() {
        let matrix = Matrix::from_rows(&[vec![1, 0, 1], vec![0, 1, 0]]).unwrap();

        assert_eq!(matrix.num_rows(), 2);
        assert_eq!(matrix.num_columns(), 3);
        assert_eq!(matrix.get(loc(0, 0)), Some(Cell::On));
        assert_eq!(matrix.get(loc(0, 1)), Some(Cell::Off));
        assert_eq!(matrix.get(loc(1, 1)), Some(Cell::On));
    }

    #[test]
    fn out_of_bounds_is_not_on() {
        let matrix = Matrix::from_rows(&[vec![1, 1], vec![1, 1]]).unwrap();

        assert_eq!(matrix.get(loc(-1, 0)), None);
        assert_eq!(matrix.get(loc(0, 2)), None);
        assert!(!matrix.is_on(loc(2, 1)));
        assert!(!matrix.is_on(loc(-1, -1)));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Matrix::from_rows(&[vec![1, 0], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn rejects_non_binary_values() {
        let err = Matrix::from_rows(&[vec![0, 2]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotBinary {
                row: 0,
                column: 1,
                value: 2
            }
        );
    }

    #[test]
    fn error_display() {
        let err = MatrixError::Ragged {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "row 2 has 3 columns, expected 4");

        let err = MatrixError::NotBinary {
            row: 0,
            column: 1,
            value: 7,
        };
        assert_eq!(
            err.to_string(),
            "cell (0, 1) has value 7; only 0 or 1 are allowed"
        );
    }

    #[test]
    fn empty_matrices() {
        let no_rows: &[Vec<u8>] = &[];
        let matrix = Matrix::from_rows(no_rows).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.num_columns(), 0);
        assert!(matrix.on_cells().is_empty());

        let empty_rows = Matrix::from_rows(&[Vec::<u8>::new(), Vec::new()]).unwrap();
        assert!(empty_rows.is_empty());
        assert_eq!(empty_rows.num_rows(), 2);
        assert!(empty_rows.on_cells().is_empty());
    }

    #[test]
    fn on_cells_are_row_major() {
        let matrix = Matrix::from_rows(&[vec![0, 1, 1], vec![1, 0, 0], vec![0, 0, 1]]).unwrap();

        assert_eq!(
            matrix.on_cells(),
            vec![loc(0, 1), loc(0, 2), loc(1, 0), loc(2, 2)]
        );
    }

    #[test]
    fn displays_rows() {
        let matrix = Matrix::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(matrix.to_string(), "1 0\n0 1\n");
    }

    #[test]
    fn equality_compares_cells() {
        let a = Matrix::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap();
        let b = Matrix::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap();
        let c = Matrix::from_rows(&[vec![1, 0], vec![1, 1]]).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
