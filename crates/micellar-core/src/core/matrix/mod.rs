//! Dense block-matrix primitives used to reduce atom-level adjacency to
//! molecule-level adjacency.

mod blocks;
mod mask;

pub use blocks::{block_assemble, block_diagonal_fill, block_partition, block_sum};
pub use mask::threshold_mask;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error(
        "matrix of shape {rows}x{cols} cannot be split into {block_rows}x{block_cols} blocks"
    )]
    IndivisibleBlocks {
        rows: usize,
        cols: usize,
        block_rows: usize,
        block_cols: usize,
    },

    #[error("operation requires a square matrix, got shape {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("index {index} is out of bounds for a matrix of side {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
