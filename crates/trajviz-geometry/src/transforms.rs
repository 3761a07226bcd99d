use crate::error::GeometryError;
use crate::linalg;
use crate::pose::Pose;

/// Append a unit coordinate to every point.
///
/// # Arguments
///
/// * `points` - A batch of 3D points.
///
/// # Returns
///
/// The points in homogeneous coordinates `[x, y, z, 1]`.
pub fn to_homogeneous(points: &[[f64; 3]]) -> Vec<[f64; 4]> {
    points
        .iter()
        .map(|p| [p[0], p[1], p[2], 1.0])
        .collect()
}

/// Invert a camera-to-world pose.
///
/// By default the rotation is inverted by transposition, which is cheaper
/// and numerically preferable for orthonormal rotations. With
/// `use_explicit_inverse` the rotation block is inverted in closed form
/// instead, failing on a singular block.
///
/// PRECONDITION: when using the transpose shortcut the rotation must be (at
/// least approximately) orthonormal, else the result is wrong with no error
/// raised.
///
/// Example:
///
/// ```
/// use trajviz_geometry::pose::Pose;
/// use trajviz_geometry::transforms::invert_pose;
///
/// let pose = Pose::new(Pose::identity().rotation, [1.0, 2.0, 3.0]);
/// let inv = invert_pose(&pose, false).unwrap();
/// assert_eq!(inv.translation, [-1.0, -2.0, -3.0]);
/// ```
pub fn invert_pose(pose: &Pose, use_explicit_inverse: bool) -> Result<Pose, GeometryError> {
    let rotation_inv = if use_explicit_inverse {
        linalg::invert_matrix3(&pose.rotation).ok_or(GeometryError::SingularRotation)?
    } else {
        linalg::transpose3(&pose.rotation)
    };

    // t' = -R⁻¹ * t
    let t = linalg::matvec3(&rotation_inv, &pose.translation);
    let translation_inv = [-t[0], -t[1], -t[2]];

    Ok(Pose::new(rotation_inv, translation_inv))
}

/// Map world-frame points into the camera frame.
///
/// # Arguments
///
/// * `points` - A batch of points in world coordinates.
/// * `pose` - The camera-to-world pose.
/// * `dst` - A pre-allocated buffer of the same length as `points`.
pub fn world_to_camera(
    points: &[[f64; 3]],
    pose: &Pose,
    dst: &mut [[f64; 3]],
) -> Result<(), GeometryError> {
    let pose_inv = invert_pose(pose, false)?;
    linalg::transform_points(points, &pose_inv.rotation, &pose_inv.translation, dst)
}

/// Map camera-frame points into the world frame by applying the pose directly.
///
/// # Arguments
///
/// * `points` - A batch of points in camera coordinates.
/// * `pose` - The camera-to-world pose.
/// * `dst` - A pre-allocated buffer of the same length as `points`.
pub fn camera_to_world(
    points: &[[f64; 3]],
    pose: &Pose,
    dst: &mut [[f64; 3]],
) -> Result<(), GeometryError> {
    linalg::transform_points(points, &pose.rotation, &pose.translation, dst)
}

/// Map camera-frame rays to image-frame coordinates with the intrinsic matrix.
pub fn camera_to_image(
    points: &[[f64; 3]],
    intrinsics: &[[f64; 3]; 3],
    dst: &mut [[f64; 3]],
) -> Result<(), GeometryError> {
    linalg::apply_matrix3(points, intrinsics, dst)
}

/// Map image-frame coordinates back to camera-frame rays.
///
/// Fails with [`GeometryError::SingularIntrinsic`] when the intrinsic matrix
/// cannot be inverted.
pub fn image_to_camera(
    points: &[[f64; 3]],
    intrinsics: &[[f64; 3]; 3],
    dst: &mut [[f64; 3]],
) -> Result<(), GeometryError> {
    let intrinsics_inv =
        linalg::invert_matrix3(intrinsics).ok_or(GeometryError::SingularIntrinsic)?;
    linalg::apply_matrix3(points, &intrinsics_inv, dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // rotation of 30 degrees about z
    fn test_pose() -> Pose {
        let (s, c) = (std::f64::consts::FRAC_PI_6).sin_cos();
        Pose::new(
            [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
            [1.0, -2.0, 0.5],
        )
    }

    fn test_intrinsics() -> [[f64; 3]; 3] {
        [[500.0, 0.0, 320.0], [0.0, 500.0, 240.0], [0.0, 0.0, 1.0]]
    }

    #[test]
    fn test_to_homogeneous() {
        let points = vec![[1.0, 2.0, 3.0]];
        let hom = to_homogeneous(&points);
        assert_eq!(hom, vec![[1.0, 2.0, 3.0, 1.0]]);
    }

    #[test]
    fn test_world_camera_roundtrip() -> Result<(), GeometryError> {
        let pose = test_pose();
        let points = vec![[0.3, -0.7, 2.0], [1.5, 0.0, -4.0], [0.0, 0.0, 0.0]];

        let mut in_camera = vec![[0.0; 3]; points.len()];
        let mut back_in_world = vec![[0.0; 3]; points.len()];
        world_to_camera(&points, &pose, &mut in_camera)?;
        camera_to_world(&in_camera, &pose, &mut back_in_world)?;

        for (restored, original) in back_in_world.iter().zip(points.iter()) {
            for i in 0..3 {
                assert_relative_eq!(restored[i], original[i], epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_image_camera_roundtrip() -> Result<(), GeometryError> {
        let intrinsics = test_intrinsics();
        let points = vec![[0.1, -0.2, 1.0], [0.0, 0.0, 1.0]];

        let mut in_image = vec![[0.0; 3]; points.len()];
        let mut back_in_camera = vec![[0.0; 3]; points.len()];
        camera_to_image(&points, &intrinsics, &mut in_image)?;
        image_to_camera(&in_image, &intrinsics, &mut back_in_camera)?;

        for (restored, original) in back_in_camera.iter().zip(points.iter()) {
            for i in 0..3 {
                assert_relative_eq!(restored[i], original[i], epsilon = 1e-9);
            }
        }
        Ok(())
    }

    #[test]
    fn test_image_to_camera_singular() {
        let singular = [[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let points = vec![[1.0, 1.0, 1.0]];
        let mut dst = vec![[0.0; 3]; 1];
        let result = image_to_camera(&points, &singular, &mut dst);
        assert_eq!(result, Err(GeometryError::SingularIntrinsic));
    }

    #[test]
    fn test_invert_pose_twice() -> Result<(), GeometryError> {
        let pose = test_pose();
        let restored = invert_pose(&invert_pose(&pose, false)?, false)?;
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(restored.rotation[i][j], pose.rotation[i][j], epsilon = 1e-12);
            }
            assert_relative_eq!(restored.translation[i], pose.translation[i], epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_invert_pose_explicit_matches_transpose() -> Result<(), GeometryError> {
        let pose = test_pose();
        let by_transpose = invert_pose(&pose, false)?;
        let by_inverse = invert_pose(&pose, true)?;
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(
                    by_transpose.rotation[i][j],
                    by_inverse.rotation[i][j],
                    epsilon = 1e-12
                );
            }
            assert_relative_eq!(
                by_transpose.translation[i],
                by_inverse.translation[i],
                epsilon = 1e-12
            );
        }
        Ok(())
    }

    #[test]
    fn test_inverted_rotation_is_orthonormal() -> Result<(), GeometryError> {
        let pose = test_pose();
        let inv = invert_pose(&pose, false)?;
        // R * R^T must be the identity
        let rt = crate::linalg::transpose3(&inv.rotation);
        for i in 0..3 {
            let row = crate::linalg::matvec3(&inv.rotation, &[rt[0][i], rt[1][i], rt[2][i]]);
            for (j, val) in row.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(*val, expected, epsilon = 1e-12);
            }
        }
        Ok(())
    }
}
