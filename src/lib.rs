//! Largest 8-connected region of 1s in a binary matrix.
//!
//! ```
//! use largest_region::{largest_region_size, Matrix};
//!
//! let matrix = Matrix::from_rows(&[vec![1, 1, 0], vec![0, 0, 0], vec![0, 1, 1]]).unwrap();
//! assert_eq!(largest_region_size(&matrix), Ok(2));
//! ```

pub mod adjacency;
pub mod cli;
pub mod matrix;
pub mod prompt;
pub mod regions;

pub use crate::adjacency::{neighbors, Adjacency};
pub use crate::matrix::{Cell, Matrix, MatrixError};
pub use crate::prompt::{parse_row, PromptError, Prompter};
pub use crate::regions::{
    find_regions, largest, largest_region_size, partition, Region, RegionError,
};
