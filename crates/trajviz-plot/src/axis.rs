use crate::error::PlotError;
use crate::style::{Color, LineStyle};

/// A mutable 3D plot axis that overlay functions issue drawing commands
/// against.
///
/// The caller owns the axis and its surrounding figure or window; this crate
/// only mutates it. Implementations decide how commands map onto their
/// backend (the `rerun` feature ships a rerun-backed axis).
pub trait PlotAxis3 {
    /// Add a batch of straight line segments with a uniform style.
    fn add_line_segments(
        &mut self,
        segments: &[[[f64; 3]; 2]],
        style: &LineStyle,
    ) -> Result<(), PlotError>;

    /// Add a filled, semi-transparent planar polygon.
    fn add_filled_polygon(
        &mut self,
        corners: &[[f64; 3]],
        color: Color,
        alpha: f32,
    ) -> Result<(), PlotError>;

    /// Place a filled-circle marker at a point.
    fn scatter_point(&mut self, point: [f64; 3], color: Color, radius: f32)
        -> Result<(), PlotError>;

    /// Place a text label at a point.
    fn place_text(
        &mut self,
        position: [f64; 3],
        text: &str,
        font_size: f32,
        color: Color,
    ) -> Result<(), PlotError>;
}
