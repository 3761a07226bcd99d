#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// The 3D plot-axis abstraction drawing commands are issued against.
pub mod axis;

/// Error types for the plot module.
pub mod error;

/// Trajectory comparison overlays.
pub mod overlay;

/// Rerun-backed plot axis.
#[cfg(feature = "rerun")]
pub mod rerun;

/// Colors, line styles and overlay styling defaults.
pub mod style;

/// Pose sequence abstraction over trajectory containers.
pub mod trajectory;
