use super::MatrixError;
use nalgebra::DMatrix;

fn check_divisible(
    matrix: &DMatrix<f64>,
    block_shape: (usize, usize),
) -> Result<(usize, usize), MatrixError> {
    let (rows, cols) = matrix.shape();
    let (block_rows, block_cols) = block_shape;

    if block_rows == 0 || block_cols == 0 || rows % block_rows != 0 || cols % block_cols != 0 {
        return Err(MatrixError::IndivisibleBlocks {
            rows,
            cols,
            block_rows,
            block_cols,
        });
    }

    Ok((rows / block_rows, cols / block_cols))
}

/// Splits a matrix into a regular grid of blocks of shape `block_shape`.
///
/// The returned grid preserves positional ordering: `grid[i][j]` is the block
/// at row-block `i`, column-block `j` of the original matrix. Downstream code
/// indexes blocks positionally, so this ordering must not change.
pub fn block_partition(
    matrix: &DMatrix<f64>,
    block_shape: (usize, usize),
) -> Result<Vec<Vec<DMatrix<f64>>>, MatrixError> {
    let (n_row_blocks, n_col_blocks) = check_divisible(matrix, block_shape)?;

    let grid = (0..n_row_blocks)
        .map(|i| {
            (0..n_col_blocks)
                .map(|j| {
                    matrix
                        .view((i * block_shape.0, j * block_shape.1), block_shape)
                        .into_owned()
                })
                .collect()
        })
        .collect();

    Ok(grid)
}

/// Reassembles a block grid produced by [`block_partition`] into a single
/// matrix. Exact inverse of the partition for any valid block shape.
pub fn block_assemble(grid: &[Vec<DMatrix<f64>>]) -> DMatrix<f64> {
    let Some(first_row) = grid.first() else {
        return DMatrix::zeros(0, 0);
    };
    let Some(first) = first_row.first() else {
        return DMatrix::zeros(0, 0);
    };

    let (block_rows, block_cols) = first.shape();
    let mut matrix = DMatrix::zeros(grid.len() * block_rows, first_row.len() * block_cols);

    for (i, row) in grid.iter().enumerate() {
        for (j, block) in row.iter().enumerate() {
            matrix
                .view_mut((i * block_rows, j * block_cols), (block_rows, block_cols))
                .copy_from(block);
        }
    }

    matrix
}

/// Reduces each `block_shape` block of a matrix to the scalar sum of its
/// entries, producing a matrix of shape `(rows / block_shape.0, cols / block_shape.1)`.
pub fn block_sum(
    matrix: &DMatrix<f64>,
    block_shape: (usize, usize),
) -> Result<DMatrix<f64>, MatrixError> {
    let (n_row_blocks, n_col_blocks) = check_divisible(matrix, block_shape)?;

    Ok(DMatrix::from_fn(n_row_blocks, n_col_blocks, |i, j| {
        matrix
            .view((i * block_shape.0, j * block_shape.1), block_shape)
            .sum()
    }))
}

/// Fills every `block_size` x `block_size` block along the main diagonal with
/// `value`, in place.
pub fn block_diagonal_fill(
    matrix: &mut DMatrix<f64>,
    block_size: usize,
    value: f64,
) -> Result<(), MatrixError> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    if block_size == 0 || rows % block_size != 0 {
        return Err(MatrixError::IndivisibleBlocks {
            rows,
            cols,
            block_rows: block_size,
            block_cols: block_size,
        });
    }

    for block in 0..rows / block_size {
        let start = block * block_size;
        matrix
            .view_mut((start, start), (block_size, block_size))
            .fill(value);
    }

    Ok(())
}
