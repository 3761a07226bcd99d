/// An error type for the geometry module.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Error when the intrinsic matrix cannot be inverted.
    #[error("Intrinsic matrix is singular and cannot be inverted")]
    SingularIntrinsic,

    /// Error when the rotation block cannot be inverted explicitly.
    #[error("Rotation block is singular and cannot be inverted")]
    SingularRotation,

    /// Error when the source and destination buffers differ in length.
    #[error("Source length ({0}) does not match the destination length ({1})")]
    LengthMismatch(usize, usize),
}
