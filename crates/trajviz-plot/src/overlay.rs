use trajviz_geometry::frustum::{camera_frustum_mesh, MESH_APEX_INDEX, MESH_BASE_LEN, MESH_LEN};
use trajviz_geometry::pose::Pose;

use crate::axis::PlotAxis3;
use crate::error::PlotError;
use crate::style::{Color, LineStyle, OverlayStyle};
use crate::trajectory::PoseSequence;

/// Draw the frustum wireframe of every pose in a trajectory.
///
/// The wireframes of all poses are decomposed into consecutive point-pair
/// segments and submitted as one batched draw call with a uniform color and
/// solid style. A non-positive `scale` issues no drawing commands at all.
///
/// # Arguments
///
/// * `ax` - The plot axis to draw into.
/// * `traj` - The trajectory whose poses are drawn.
/// * `scale` - Visual size of the pyramids.
/// * `color` - Color shared by all wireframes.
pub fn draw_frustum_wireframes<A, T>(
    ax: &mut A,
    traj: &T,
    scale: f64,
    color: Color,
) -> Result<(), PlotError>
where
    A: PlotAxis3 + ?Sized,
    T: PoseSequence + ?Sized,
{
    if scale <= 0.0 {
        return Ok(());
    }

    let mut segments = Vec::with_capacity(traj.num_poses() * (MESH_LEN - 1));
    for pose in traj.poses() {
        let mesh = camera_frustum_mesh(pose, scale)?;
        for pair in mesh.windows(2) {
            segments.push([pair[0], pair[1]]);
        }
    }
    if segments.is_empty() {
        return Ok(());
    }

    ax.add_line_segments(&segments, &LineStyle { color, width: 1.0 })
}

/// Draw one matched pose pair: both frustums plus the error segment
/// connecting their camera centers.
///
/// Each camera is drawn as a semi-transparent filled base face, a full
/// wireframe and a filled-circle marker at the apex; the reference camera is
/// drawn first and thinner.
pub fn overlay_two_trajectories<A>(
    ax: &mut A,
    pose: &Pose,
    pose_ref: &Pose,
    scale: f64,
    style: &OverlayStyle,
) -> Result<(), PlotError>
where
    A: PlotAxis3 + ?Sized,
{
    let mesh = camera_frustum_mesh(pose, scale)?;
    let mesh_ref = camera_frustum_mesh(pose_ref, scale)?;

    draw_camera(
        ax,
        &mesh_ref,
        style.reference_color,
        style.reference_line_width,
        style,
    )?;
    draw_camera(
        ax,
        &mesh,
        style.estimate_color,
        style.estimate_line_width,
        style,
    )?;

    // position error at this time step
    ax.add_line_segments(
        &[[mesh[MESH_APEX_INDEX], mesh_ref[MESH_APEX_INDEX]]],
        &LineStyle {
            color: style.error_color,
            width: style.error_line_width,
        },
    )
}

fn draw_camera<A>(
    ax: &mut A,
    mesh: &[[f64; 3]; MESH_LEN],
    color: Color,
    line_width: f32,
    style: &OverlayStyle,
) -> Result<(), PlotError>
where
    A: PlotAxis3 + ?Sized,
{
    ax.add_filled_polygon(&mesh[..MESH_BASE_LEN], color, style.face_alpha)?;

    let mut segments = Vec::with_capacity(MESH_LEN - 1);
    for pair in mesh.windows(2) {
        segments.push([pair[0], pair[1]]);
    }
    ax.add_line_segments(
        &segments,
        &LineStyle {
            color,
            width: line_width,
        },
    )?;

    ax.scatter_point(mesh[MESH_APEX_INDEX], color, style.center_marker_radius)
}

/// Compare two time-synchronized trajectories pose by pose.
///
/// Poses are paired positionally, not by timestamp; the caller is
/// responsible for prior synchronization and alignment. Fails with
/// [`PlotError::TrajectoryLengthMismatch`] when the pose counts differ.
///
/// # Arguments
///
/// * `ax` - The plot axis to draw into.
/// * `traj` - The estimated trajectory.
/// * `traj_ref` - The reference (ground-truth) trajectory.
/// * `scale` - Visual size of the pyramids.
/// * `style` - Overlay colors and widths.
pub fn compare_trajectories<A, T, U>(
    ax: &mut A,
    traj: &T,
    traj_ref: &U,
    scale: f64,
    style: &OverlayStyle,
) -> Result<(), PlotError>
where
    A: PlotAxis3 + ?Sized,
    T: PoseSequence + ?Sized,
    U: PoseSequence + ?Sized,
{
    if traj.num_poses() != traj_ref.num_poses() {
        return Err(PlotError::TrajectoryLengthMismatch(
            traj.num_poses(),
            traj_ref.num_poses(),
        ));
    }

    log::debug!(
        "comparing trajectories with {} pose pairs, scale {}",
        traj.num_poses(),
        scale
    );

    for (pose, pose_ref) in traj.poses().iter().zip(traj_ref.poses().iter()) {
        overlay_two_trajectories(ax, pose, pose_ref, scale, style)?;
    }
    Ok(())
}

/// Label every camera center with its index in the trajectory.
pub fn draw_camera_indices<A, T>(
    ax: &mut A,
    traj: &T,
    font_size: f32,
    color: Color,
) -> Result<(), PlotError>
where
    A: PlotAxis3 + ?Sized,
    T: PoseSequence + ?Sized,
{
    for (i, pose) in traj.poses().iter().enumerate() {
        ax.place_text(pose.translation, &i.to_string(), font_size, color)?;
    }
    Ok(())
}
