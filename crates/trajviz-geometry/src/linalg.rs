use crate::error::GeometryError;

/// Transform a batch of points with a rotation and a translation.
///
/// Computes `dst[i] = rotation * points[i] + translation` for every point.
///
/// # Arguments
///
/// * `points` - The points to be transformed.
/// * `rotation` - A 3x3 rotation matrix.
/// * `translation` - A translation vector.
/// * `dst` - A pre-allocated buffer of the same length as `points`.
///
/// Example:
///
/// ```
/// use trajviz_geometry::linalg::transform_points;
///
/// let points = vec![[2.0, 2.0, 2.0], [3.0, 4.0, 5.0]];
/// let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let translation = [1.0, 0.0, 0.0];
/// let mut dst = vec![[0.0; 3]; points.len()];
/// transform_points(&points, &rotation, &translation, &mut dst).unwrap();
/// assert_eq!(dst[0], [3.0, 2.0, 2.0]);
/// ```
pub fn transform_points(
    points: &[[f64; 3]],
    rotation: &[[f64; 3]; 3],
    translation: &[f64; 3],
    dst: &mut [[f64; 3]],
) -> Result<(), GeometryError> {
    if points.len() != dst.len() {
        return Err(GeometryError::LengthMismatch(points.len(), dst.len()));
    }

    let rotation_mat = faer::Mat::<f64>::from_fn(3, 3, |i, j| rotation[i][j]);
    let translation_col = faer::col![translation[0], translation[1], translation[2]];

    for (point_dst, point_src) in dst.iter_mut().zip(points.iter()) {
        let point_src_col = faer::col![point_src[0], point_src[1], point_src[2]];
        let point_dst_col = &rotation_mat * point_src_col + &translation_col;
        for (i, val) in point_dst_col.iter().enumerate().take(3) {
            point_dst[i] = *val;
        }
    }

    Ok(())
}

/// Apply a 3x3 linear map to a batch of points.
///
/// Computes `dst[i] = matrix * points[i]` for every point.
///
/// PRECONDITION: dst is a pre-allocated buffer of the same length as points.
pub fn apply_matrix3(
    points: &[[f64; 3]],
    matrix: &[[f64; 3]; 3],
    dst: &mut [[f64; 3]],
) -> Result<(), GeometryError> {
    transform_points(points, matrix, &[0.0; 3], dst)
}

/// Multiply a 3x3 matrix by a 3-vector.
pub fn matvec3(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for (i, row) in matrix.iter().enumerate() {
        out[i] = row[0] * vector[0] + row[1] * vector[1] + row[2] * vector[2];
    }
    out
}

/// Transpose a 3x3 matrix.
pub fn transpose3(matrix: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut out = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = matrix[j][i];
        }
    }
    out
}

/// Invert a 3x3 matrix in closed form via its adjugate.
///
/// Returns `None` when the matrix is singular (determinant below 1e-12 in
/// absolute value).
pub fn invert_matrix3(m: &[[f64; 3]; 3]) -> Option<[[f64; 3]; 3]> {
    let c00 = m[1][1] * m[2][2] - m[1][2] * m[2][1];
    let c01 = m[1][2] * m[2][0] - m[1][0] * m[2][2];
    let c02 = m[1][0] * m[2][1] - m[1][1] * m[2][0];

    let det = m[0][0] * c00 + m[0][1] * c01 + m[0][2] * c02;
    if det.abs() < 1e-12 {
        return None;
    }

    let inv_det = 1.0 / det;
    Some([
        [
            c00 * inv_det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
        ],
        [
            c01 * inv_det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
        ],
        [
            c02 * inv_det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
        ],
    ])
}
