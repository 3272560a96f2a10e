use nalgebra::DMatrix;

/// Returns a binary mask with 1.0 wherever `lower < x < upper`.
///
/// Both bounds are strict, so a zero diagonal stays zero for any
/// `lower >= 0`.
pub fn threshold_mask(matrix: &DMatrix<f64>, lower: f64, upper: f64) -> DMatrix<f64> {
    matrix.map(|x| if x > lower && x < upper { 1.0 } else { 0.0 })
}
