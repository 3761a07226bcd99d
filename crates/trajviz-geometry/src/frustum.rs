use crate::error::GeometryError;
use crate::pose::Pose;
use crate::transforms::camera_to_world;

/// The canonical unit pyramid in the camera frame: four base corners on the
/// plane z = 1 and the apex at the camera center.
pub const CANONICAL_VERTICES: [[f64; 3]; 5] = [
    [-0.5, -0.5, 1.0],
    [0.5, -0.5, 1.0],
    [0.5, 0.5, 1.0],
    [-0.5, 0.5, 1.0],
    [0.0, 0.0, 0.0],
];

/// Traversal order turning the 5 pyramid vertices into one connected
/// polyline: base perimeter, apex, then the two remaining base-apex edges.
pub const WIREFRAME_ORDER: [usize; 10] = [0, 1, 2, 3, 0, 4, 1, 2, 4, 3];

/// Number of points in the wireframe polyline.
pub const MESH_LEN: usize = WIREFRAME_ORDER.len();

/// Number of leading polyline points forming the base face of the pyramid.
pub const MESH_BASE_LEN: usize = 4;

/// Index of the apex (the camera center) within the wireframe polyline.
pub const MESH_APEX_INDEX: usize = 5;

/// Build the wireframe pyramid mesh of a camera frustum in world coordinates.
///
/// The canonical vertices are scaled by `scale`, mapped camera-to-world with
/// the given pose, and reordered into the fixed 10-point polyline suitable
/// for a single connected wireframe draw call. With `scale = 0` all points
/// collapse to the pose translation.
///
/// A non-positive scale is permitted here; callers that want to skip drawing
/// for `scale <= 0` are expected to do so themselves.
///
/// # Arguments
///
/// * `pose` - The camera-to-world pose.
/// * `scale` - Visual size of the pyramid.
///
/// # Returns
///
/// The 10 polyline points in world coordinates.
///
/// Example:
///
/// ```
/// use trajviz_geometry::frustum::{camera_frustum_mesh, MESH_APEX_INDEX};
/// use trajviz_geometry::pose::Pose;
///
/// let mesh = camera_frustum_mesh(&Pose::identity(), 1.0).unwrap();
/// assert_eq!(mesh[MESH_APEX_INDEX], [0.0, 0.0, 0.0]);
/// assert_eq!(mesh[0], [-0.5, -0.5, 1.0]);
/// ```
pub fn camera_frustum_mesh(pose: &Pose, scale: f64) -> Result<[[f64; 3]; MESH_LEN], GeometryError> {
    let mut scaled = CANONICAL_VERTICES;
    for vertex in scaled.iter_mut() {
        for coord in vertex.iter_mut() {
            *coord *= scale;
        }
    }

    let mut world = [[0.0; 3]; CANONICAL_VERTICES.len()];
    camera_to_world(&scaled, pose, &mut world)?;

    let mut mesh = [[0.0; 3]; MESH_LEN];
    for (point, &vertex_index) in mesh.iter_mut().zip(WIREFRAME_ORDER.iter()) {
        *point = world[vertex_index];
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_pose_unit_scale() -> Result<(), GeometryError> {
        let mesh = camera_frustum_mesh(&Pose::identity(), 1.0)?;
        // identity pose performs no transform
        assert_eq!(mesh[MESH_APEX_INDEX], [0.0, 0.0, 0.0]);
        assert_eq!(mesh[0], [-0.5, -0.5, 1.0]);
        assert_eq!(mesh[1], [0.5, -0.5, 1.0]);
        assert_eq!(mesh[2], [0.5, 0.5, 1.0]);
        assert_eq!(mesh[3], [-0.5, 0.5, 1.0]);
        // the polyline closes the base perimeter before visiting the apex
        assert_eq!(mesh[4], mesh[0]);
        Ok(())
    }

    #[test]
    fn test_zero_scale_collapses_to_translation() -> Result<(), GeometryError> {
        let pose = Pose::new(Pose::identity().rotation, [3.0, -1.0, 2.0]);
        let mesh = camera_frustum_mesh(&pose, 0.0)?;
        for point in mesh.iter() {
            assert_eq!(*point, [3.0, -1.0, 2.0]);
        }
        Ok(())
    }

    #[test]
    fn test_translated_pose_moves_apex() -> Result<(), GeometryError> {
        let pose = Pose::new(Pose::identity().rotation, [1.0, 0.0, 0.0]);
        let mesh = camera_frustum_mesh(&pose, 1.0)?;
        assert_eq!(mesh[MESH_APEX_INDEX], [1.0, 0.0, 0.0]);
        assert_eq!(mesh[0], [0.5, -0.5, 1.0]);
        Ok(())
    }

    #[test]
    fn test_scale_shrinks_base() -> Result<(), GeometryError> {
        let mesh = camera_frustum_mesh(&Pose::identity(), 0.5)?;
        assert_eq!(mesh[0], [-0.25, -0.25, 0.5]);
        assert_eq!(mesh[MESH_APEX_INDEX], [0.0, 0.0, 0.0]);
        Ok(())
    }
}
