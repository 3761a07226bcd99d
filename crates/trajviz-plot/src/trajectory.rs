use trajviz_geometry::pose::Pose;

/// An ordered sequence of camera poses over time.
///
/// This is the explicit form of the trajectory objects produced by external
/// trajectory-evaluation tooling: only the pose sequence and its count are
/// read, never mutated. Implement it on an adapter around whatever
/// trajectory type the surrounding application uses.
pub trait PoseSequence {
    /// The poses in temporal order.
    fn poses(&self) -> &[Pose];

    /// The number of poses.
    fn num_poses(&self) -> usize {
        self.poses().len()
    }

    /// Whether the sequence holds no poses.
    fn is_empty(&self) -> bool {
        self.poses().is_empty()
    }
}

impl PoseSequence for [Pose] {
    fn poses(&self) -> &[Pose] {
        self
    }
}

impl PoseSequence for Vec<Pose> {
    fn poses(&self) -> &[Pose] {
        self.as_slice()
    }
}

impl<T: PoseSequence + ?Sized> PoseSequence for &T {
    fn poses(&self) -> &[Pose] {
        (**self).poses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_pose_sequence() {
        let traj = vec![Pose::identity(), Pose::identity()];
        assert_eq!(traj.num_poses(), 2);
        assert!(!PoseSequence::is_empty(&traj));
        assert_eq!(traj.poses().len(), 2);
    }

    #[test]
    fn test_empty_slice() {
        let traj: &[Pose] = &[];
        assert_eq!(traj.num_poses(), 0);
        assert!(PoseSequence::is_empty(&traj));
    }
}
