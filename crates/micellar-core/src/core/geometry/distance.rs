use nalgebra::{DMatrix, Point3, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Squared distance between two points under the minimum-image convention.
///
/// Each displacement component whose magnitude exceeds half the cell length on
/// that axis is wrapped by one cell length before squaring. Axes with a
/// non-positive cell length are treated as non-periodic.
fn minimum_image_sq(a: &Point3<f64>, b: &Point3<f64>, cell: &Vector3<f64>) -> f64 {
    let mut displacement = a - b;

    for axis in 0..3 {
        let length = cell[axis];
        if length > 0.0 {
            if displacement[axis] > 0.5 * length {
                displacement[axis] -= length;
            } else if displacement[axis] < -0.5 * length {
                displacement[axis] += length;
            }
        }
    }

    displacement.norm_squared()
}

fn distance_row(row: usize, coords: &[Point3<f64>], cell: &Vector3<f64>) -> Vec<f64> {
    coords
        .iter()
        .map(|other| minimum_image_sq(&coords[row], other, cell))
        .collect()
}

/// Computes the N x N matrix of squared Euclidean distances between `coords`
/// under periodic boundary conditions.
///
/// The outer loop is processed in row blocks of at most `batch_size` rows, so
/// the intermediate displacement work is bounded by O(batch_size * N) while
/// only the final matrix is fully materialized. With the `parallel` feature,
/// rows within a batch are computed concurrently; the result is identical.
pub fn periodic_distance_matrix(
    coords: &[Point3<f64>],
    cell: &Vector3<f64>,
    batch_size: usize,
) -> DMatrix<f64> {
    let n = coords.len();
    let batch_size = batch_size.max(1);
    let mut matrix = DMatrix::zeros(n, n);

    for batch_start in (0..n).step_by(batch_size) {
        let batch_end = (batch_start + batch_size).min(n);

        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<f64>> = (batch_start..batch_end)
            .map(|i| distance_row(i, coords, cell))
            .collect();

        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<f64>> = (batch_start..batch_end)
            .into_par_iter()
            .map(|i| distance_row(i, coords, cell))
            .collect();

        for (offset, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                matrix[(batch_start + offset, j)] = value;
            }
        }
    }

    matrix
}
