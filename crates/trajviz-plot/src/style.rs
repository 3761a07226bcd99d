use serde::{Deserialize, Serialize};

/// An RGB color with components in `[0, 1]`.
pub type Color = [f32; 3];

/// Style of a batch of line segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line color.
    pub color: Color,
    /// Line width in points.
    pub width: f32,
}

/// Styling of a two-trajectory comparison overlay.
///
/// The defaults reproduce the classic comparison look: a purple reference
/// camera drawn thin, a teal estimate drawn thicker, and a red segment
/// connecting the two camera centers at each time step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    /// Color of the reference (ground-truth) camera.
    pub reference_color: Color,
    /// Color of the estimated camera.
    pub estimate_color: Color,
    /// Color of the segment connecting matched camera centers.
    pub error_color: Color,
    /// Wireframe width of the reference camera.
    pub reference_line_width: f32,
    /// Wireframe width of the estimated camera.
    pub estimate_line_width: f32,
    /// Width of the center-to-center error segment.
    pub error_line_width: f32,
    /// Opacity of the filled base face of each pyramid.
    pub face_alpha: f32,
    /// Radius of the filled-circle marker at each camera center.
    pub center_marker_radius: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            reference_color: [0.7, 0.2, 0.7],
            estimate_color: [0.0, 0.6, 0.7],
            error_color: [1.0, 0.0, 0.0],
            reference_line_width: 0.5,
            estimate_line_width: 1.0,
            error_line_width: 3.0,
            face_alpha: 0.2,
            center_marker_radius: 2.0,
        }
    }
}
