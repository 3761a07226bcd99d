use trajviz_geometry::error::GeometryError;

/// An error type for the plot module.
#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    /// Error propagated from the underlying geometry.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Error when two trajectories to be compared differ in pose count.
    #[error("Trajectory lengths differ ({0} vs {1})")]
    TrajectoryLengthMismatch(usize, usize),

    /// Error reported by the rerun recording stream.
    #[cfg(feature = "rerun")]
    #[error(transparent)]
    Rerun(#[from] ::rerun::RecordingStreamError),
}
