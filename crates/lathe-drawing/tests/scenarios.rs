//! End-to-end stroke scenarios through `Drawing` and `BufferSink`.

use std::f64::consts::PI;

use approx::assert_relative_eq;
use lathe_drawing::{BufferSink, Drawing, DrawingConfig, DrawingState};
use lathe_math::{axis_distance, Point3};

fn full_turn(rows: usize, columns: usize) -> DrawingConfig {
    DrawingConfig {
        rows,
        columns,
        sweep_radians: 2.0 * PI,
        ..Default::default()
    }
}

fn draw_vase(drawing: &mut Drawing<BufferSink>, sink: &mut BufferSink) {
    drawing.start_stroke(Point3::new(1.0, 0.0, 0.0));
    drawing.line_to(Point3::new(2.0, 1.25, 0.0), sink);
    drawing.line_to(Point3::new(2.0, 3.75, 0.0), sink);
    drawing.line_to(Point3::new(1.0, 5.0, 0.0), sink);
}

#[test]
fn test_vase_profile_revolves_into_circles() {
    let mut sink = BufferSink::new();
    let mut drawing = Drawing::new(full_turn(50, 50)).unwrap();
    draw_vase(&mut drawing, &mut sink);
    drawing.end_stroke();

    let stroke = &drawing.strokes()[0];
    let fitted = stroke.curve().fitted_samples().unwrap();
    assert_eq!(fitted.len(), 3 * 10 + 1);

    let surface = stroke.surface().unwrap();
    assert_eq!(surface.rows(), 50);
    assert_eq!(surface.num_triangles(), 49 * 49 * 2);

    for (i, p) in surface.profile_samples().iter().enumerate() {
        for j in 0..50 {
            let v = surface.vertex(i, j);
            assert_relative_eq!(axis_distance(&v), p.x, epsilon = 1e-5);
            assert_relative_eq!(v.y, p.y, epsilon = 1e-5);
        }
        // Full turn: the last column closes back onto the first.
        let (first, last) = (surface.vertex(i, 0), surface.vertex(i, 49));
        assert!((first - last).norm() < 1e-5);
    }

    assert_eq!(surface.vertex(0, 0).y, 0.0);
    assert_relative_eq!(surface.vertex(49, 0).y, 5.0, epsilon = 1e-6);
}

#[test]
fn test_sink_holds_latest_buffers() {
    let mut sink = BufferSink::new();
    let mut drawing = Drawing::new(full_turn(20, 12)).unwrap();
    draw_vase(&mut drawing, &mut sink);

    let stroke = &drawing.strokes()[0];
    let mesh = sink.mesh(*stroke.handle().unwrap()).unwrap();
    let surface = stroke.surface().unwrap();
    assert_eq!(mesh.positions, surface.positions());
    assert_eq!(mesh.normals, surface.normals());
    assert_eq!(mesh.indices.len(), 19 * 11 * 6);
    assert_eq!(mesh.uploads, 2);

    let guide = sink.guide(0).unwrap();
    assert_eq!(guide.path.len(), 200);
    assert_eq!(guide.markers.len(), 4);
}

#[test]
fn test_jittery_samples_keep_min_spacing() {
    let config = DrawingConfig {
        min_spacing: 0.1,
        ..full_turn(10, 10)
    };
    let mut sink = BufferSink::new();
    let mut drawing = Drawing::new(config).unwrap();

    drawing.start_stroke(Point3::new(1.0, 0.0, 0.0));
    for i in 1..300 {
        let y = i as f64 * 0.02;
        let jitter = if i % 3 == 0 { 0.01 } else { -0.01 };
        drawing.line_to(Point3::new(1.0 + jitter, y, 0.0), &mut sink);
    }

    let points = drawing.strokes()[0].curve().control_points();
    assert!(points.len() > 4);
    for w in points.windows(2) {
        assert!((w[1] - w[0]).norm() >= 0.1);
    }
}

#[test]
fn test_clear_after_three_strokes() {
    let mut sink = BufferSink::new();
    let mut drawing = Drawing::new(full_turn(10, 10)).unwrap();

    for k in 0..3 {
        let x = 1.0 + k as f64;
        drawing.start_stroke(Point3::new(x, 0.0, 0.0));
        drawing.line_to(Point3::new(x, 1.0, 0.0), &mut sink);
        drawing.line_to(Point3::new(x + 0.5, 2.0, 0.0), &mut sink);
    }
    assert_eq!(drawing.state(), DrawingState::Active(2));
    assert_eq!(sink.live_meshes(), 3);
    assert_eq!(sink.guide_count(), 3);

    drawing.clear(&mut sink);
    assert!(drawing.strokes().is_empty());
    assert_eq!(drawing.state(), DrawingState::Idle);
    assert_eq!(sink.live_meshes(), 0);
    assert_eq!(sink.guide_count(), 0);

    // Nothing is active after a clear.
    assert!(!drawing.line_to(Point3::new(5.0, 5.0, 0.0), &mut sink));
}

#[test]
fn test_completed_strokes_stay_untouched() {
    let mut sink = BufferSink::new();
    let mut drawing = Drawing::new(full_turn(10, 10)).unwrap();

    draw_vase(&mut drawing, &mut sink);
    drawing.end_stroke();
    let before = drawing.strokes()[0].surface().unwrap().positions().to_vec();

    drawing.start_stroke(Point3::new(3.0, 0.0, 0.0));
    drawing.line_to(Point3::new(3.0, 2.0, 0.0), &mut sink);
    drawing.line_to(Point3::new(2.5, 3.0, 0.0), &mut sink);

    assert_eq!(drawing.strokes()[0].surface().unwrap().positions(), &before[..]);
    assert_eq!(drawing.strokes()[0].surface().unwrap().generation(), 3);
}
