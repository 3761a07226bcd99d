/// A rigid camera-to-world transform: a 3x3 rotation and a 3x1 translation.
///
/// The rotation block is expected to be orthonormal. This is never checked;
/// a malformed rotation silently produces wrong geometry downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// The rotation matrix (camera axes expressed in world coordinates).
    pub rotation: [[f64; 3]; 3],
    /// The camera center in world coordinates.
    pub translation: [f64; 3],
}

impl Pose {
    /// Creates a new pose from a rotation matrix and a translation vector.
    pub fn new(rotation: [[f64; 3]; 3], translation: [f64; 3]) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// The identity pose (camera frame coincides with the world frame).
    pub fn identity() -> Self {
        Self {
            rotation: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            translation: [0.0, 0.0, 0.0],
        }
    }

    /// Creates a pose from a 3x4 matrix `[R | t]`.
    pub fn from_matrix3x4(matrix: &[[f64; 4]; 3]) -> Self {
        let mut rotation = [[0.0; 3]; 3];
        let mut translation = [0.0; 3];
        for i in 0..3 {
            rotation[i][..3].copy_from_slice(&matrix[i][..3]);
            translation[i] = matrix[i][3];
        }
        Self {
            rotation,
            translation,
        }
    }

    /// Creates a pose from a 4x4 homogeneous matrix by taking its top 3 rows.
    ///
    /// The bottom row is not validated; an input whose bottom row is not
    /// `(0, 0, 0, 1)` is truncated all the same.
    pub fn from_matrix4x4(matrix: &[[f64; 4]; 4]) -> Self {
        Self::from_matrix3x4(&[matrix[0], matrix[1], matrix[2]])
    }

    /// Returns the pose as a 3x4 matrix `[R | t]`.
    pub fn to_matrix3x4(&self) -> [[f64; 4]; 3] {
        let mut matrix = [[0.0; 4]; 3];
        for i in 0..3 {
            matrix[i][..3].copy_from_slice(&self.rotation[i][..3]);
            matrix[i][3] = self.translation[i];
        }
        matrix
    }
}
