use trajviz_geometry::pose::Pose;
use trajviz_plot::axis::PlotAxis3;
use trajviz_plot::overlay::{compare_trajectories, draw_camera_indices, draw_frustum_wireframes};
use trajviz_plot::rerun::RerunAxis;
use trajviz_plot::style::{LineStyle, OverlayStyle};
use trajviz_plot::trajectory::PoseSequence;

/// A camera moving along an arc, looking along its direction of travel.
fn arc_trajectory(num_poses: usize, radius: f64, lateral_offset: f64) -> Vec<Pose> {
    (0..num_poses)
        .map(|i| {
            let angle = i as f64 / num_poses as f64 * std::f64::consts::PI;
            let (s, c) = angle.sin_cos();
            Pose::new(
                [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
                [radius * c + lateral_offset, radius * s, 0.1 * angle],
            )
        })
        .collect()
}

fn draw_center_polyline(
    ax: &mut RerunAxis,
    traj: &[Pose],
    style: &LineStyle,
) -> Result<(), trajviz_plot::error::PlotError> {
    let segments: Vec<[[f64; 3]; 2]> = traj
        .windows(2)
        .map(|pair| [pair[0].translation, pair[1].translation])
        .collect();
    ax.add_line_segments(&segments, style)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let rec = ::rerun::RecordingStreamBuilder::new("trajviz comparison").spawn()?;
    rec.log_static("world", &::rerun::ViewCoordinates::RIGHT_HAND_Z_UP())?;

    // synthetic, pre-aligned trajectories: ground truth and a perturbed
    // estimate standing in for the output of an external sync/align step
    let traj_ref = arc_trajectory(20, 2.0, 0.0);
    let traj_est = arc_trajectory(20, 2.0, 0.08);
    log::info!("drawing {} pose pairs", traj_ref.num_poses());

    let style = OverlayStyle::default();
    let mut ax = RerunAxis::new(rec.clone(), "world/compare");

    draw_center_polyline(
        &mut ax,
        &traj_ref,
        &LineStyle {
            color: [0.5, 0.5, 0.5],
            width: 1.0,
        },
    )?;
    draw_center_polyline(
        &mut ax,
        &traj_est,
        &LineStyle {
            color: style.estimate_color,
            width: 1.0,
        },
    )?;

    // marker_scale controls the size of the pose pyramids
    let marker_scale = 0.15;
    compare_trajectories(&mut ax, &traj_est, &traj_ref, marker_scale, &style)?;
    draw_camera_indices(&mut ax, &traj_ref, 10.0, [0.0, 0.0, 0.0])?;

    // a third trajectory drawn as plain wireframes, no comparison overlay
    let traj_02 = arc_trajectory(20, 2.1, -0.05);
    draw_frustum_wireframes(&mut ax, &traj_02, marker_scale, [0.8, 0.4, 0.0])?;

    Ok(())
}
