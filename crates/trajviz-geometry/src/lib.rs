#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the geometry module.
pub mod error;

/// Camera frustum wireframe construction.
pub mod frustum;

/// Linear algebra utilities.
pub mod linalg;

/// Rigid camera-to-world pose.
pub mod pose;

/// Coordinate transforms between world, camera and image frames.
pub mod transforms;
