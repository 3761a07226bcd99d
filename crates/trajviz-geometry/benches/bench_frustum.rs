use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use trajviz_geometry::frustum::camera_frustum_mesh;
use trajviz_geometry::pose::Pose;

fn bench_camera_frustum_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera_frustum_mesh");

    for num_poses in [100, 1000, 10000].iter() {
        group.throughput(criterion::Throughput::Elements(*num_poses as u64));
        let parameter_string = format!("{}", num_poses);

        let poses: Vec<Pose> = (0..*num_poses)
            .map(|i| {
                let angle = i as f64 * 0.01;
                let (s, c) = angle.sin_cos();
                Pose::new(
                    [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
                    [angle.cos(), angle.sin(), 0.0],
                )
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("camera_frustum_mesh", &parameter_string),
            &poses,
            |b, poses| {
                b.iter(|| {
                    for pose in poses.iter() {
                        black_box(camera_frustum_mesh(pose, 0.1).unwrap());
                    }
                });
            },
        );
    }
}

criterion_group!(benches, bench_camera_frustum_mesh);
criterion_main!(benches);
