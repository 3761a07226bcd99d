use crate::axis::PlotAxis3;
use crate::error::PlotError;
use crate::style::{Color, LineStyle};

/// A [`PlotAxis3`] backed by a rerun recording stream.
///
/// The caller owns the stream (and the viewer connected to it) and is
/// responsible for flushing it; this axis only logs under the given entity
/// root. Every drawing command is logged under a fresh child entity so that
/// repeated calls accumulate instead of overwriting each other.
pub struct RerunAxis {
    rec: ::rerun::RecordingStream,
    root: String,
    next_entity: usize,
}

impl RerunAxis {
    /// Creates a new axis logging under `root` in the given stream.
    pub fn new(rec: ::rerun::RecordingStream, root: impl Into<String>) -> Self {
        Self {
            rec,
            root: root.into(),
            next_entity: 0,
        }
    }

    fn next_path(&mut self, kind: &str) -> String {
        let path = format!("{}/{}/{}", self.root, kind, self.next_entity);
        self.next_entity += 1;
        path
    }
}

fn to_rerun_color(color: Color, alpha: f32) -> ::rerun::Color {
    ::rerun::Color::from_unmultiplied_rgba(
        (color[0].clamp(0.0, 1.0) * 255.0).round() as u8,
        (color[1].clamp(0.0, 1.0) * 255.0).round() as u8,
        (color[2].clamp(0.0, 1.0) * 255.0).round() as u8,
        (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

fn to_f32(point: [f64; 3]) -> [f32; 3] {
    [point[0] as f32, point[1] as f32, point[2] as f32]
}

impl PlotAxis3 for RerunAxis {
    fn add_line_segments(
        &mut self,
        segments: &[[[f64; 3]; 2]],
        style: &LineStyle,
    ) -> Result<(), PlotError> {
        let path = self.next_path("lines");
        let strips: Vec<[[f32; 3]; 2]> = segments
            .iter()
            .map(|s| [to_f32(s[0]), to_f32(s[1])])
            .collect();
        let color = to_rerun_color(style.color, 1.0);
        self.rec.log(
            path,
            &::rerun::LineStrips3D::new(strips)
                .with_colors(std::iter::repeat(color).take(segments.len()))
                .with_radii(
                    std::iter::repeat(::rerun::Radius::new_ui_points(style.width))
                        .take(segments.len()),
                ),
        )?;
        Ok(())
    }

    fn add_filled_polygon(
        &mut self,
        corners: &[[f64; 3]],
        color: Color,
        alpha: f32,
    ) -> Result<(), PlotError> {
        if corners.len() < 3 {
            return Ok(());
        }
        let path = self.next_path("faces");
        let vertices: Vec<[f32; 3]> = corners.iter().map(|c| to_f32(*c)).collect();
        // fan triangulation; the corners are planar and convex
        let triangles: Vec<[u32; 3]> = (1..corners.len() as u32 - 1)
            .map(|i| [0, i, i + 1])
            .collect();
        let vertex_color = to_rerun_color(color, alpha);
        self.rec.log(
            path,
            &::rerun::Mesh3D::new(vertices)
                .with_triangle_indices(triangles)
                .with_vertex_colors(std::iter::repeat(vertex_color).take(corners.len())),
        )?;
        Ok(())
    }

    fn scatter_point(
        &mut self,
        point: [f64; 3],
        color: Color,
        radius: f32,
    ) -> Result<(), PlotError> {
        let path = self.next_path("points");
        self.rec.log(
            path,
            &::rerun::Points3D::new([to_f32(point)])
                .with_colors([to_rerun_color(color, 1.0)])
                .with_radii([::rerun::Radius::new_ui_points(radius)]),
        )?;
        Ok(())
    }

    fn place_text(
        &mut self,
        position: [f64; 3],
        text: &str,
        _font_size: f32,
        color: Color,
    ) -> Result<(), PlotError> {
        // the viewer controls label size; font_size has no rerun equivalent
        let path = self.next_path("labels");
        self.rec.log(
            path,
            &::rerun::Points3D::new([to_f32(position)])
                .with_colors([to_rerun_color(color, 1.0)])
                .with_labels([text.to_owned()]),
        )?;
        Ok(())
    }
}
