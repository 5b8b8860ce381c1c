use morphcloud_common::{MorphError, Rgb};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::geometry::{PointCloud, ShapeSet};
use crate::math::{length3, Point3};
use crate::transition::point_size;

/// Shape `k` is a small cluster of `count` points around `(10k, 0, 0)`.
fn cluster(k: usize, count: usize) -> PointCloud {
    let center = 10.0 * k as f32;
    let points = (0..count)
        .map(|i| {
            let f = i as f32;
            [center + (f * 0.37).sin(), (f * 0.53).cos(), (f * 0.11).sin()]
        })
        .collect();
    PointCloud::new(format!("cluster{k}"), points)
}

fn shape_set(counts: &[usize]) -> ShapeSet {
    ShapeSet::new(counts.iter().enumerate().map(|(k, &n)| cluster(k, n)).collect()).unwrap()
}

fn cloud(counts: &[usize]) -> MorphableCloud {
    let mut rng = StdRng::seed_from_u64(42);
    MorphableCloud::from_shapes(&shape_set(counts), CloudSettings::default(), &mut rng).unwrap()
}

fn distance(a: Point3, b: Point3) -> f32 {
    length3([a[0] - b[0], a[1] - b[1], a[2] - b[2]])
}

// ===== End-to-end =====

#[test]
fn four_shape_catalog_morphs_to_target() {
    let mut cloud = cloud(&[100, 250, 80, 300]);
    assert_eq!(cloud.positions().len(), 300);
    for buffer in cloud.positions().buffers() {
        assert_eq!(buffer.len(), 300);
    }
    assert_eq!(cloud.attributes().len(), 300);
    assert_eq!(cloud.current_index(), Some(0));

    cloud.advance_frame(1.0).unwrap();
    cloud.begin_morph(2).unwrap();
    assert!(cloud.is_morphing());

    cloud.advance_frame(1.0).unwrap();
    assert_eq!(cloud.progress(), 0.0);
    cloud.advance_frame(3.5).unwrap();
    assert_eq!(cloud.progress(), 1.0);
    assert_eq!(cloud.uniforms().progress, 1.0);
    assert_eq!(cloud.current_index(), Some(2));
    assert!(!cloud.is_morphing());
}

#[test]
fn padded_points_belong_to_their_shape() {
    let set = shape_set(&[100, 250, 80, 300]);
    let cloud = MorphableCloud::from_shapes(
        &set,
        CloudSettings::default(),
        &mut StdRng::seed_from_u64(3),
    )
    .unwrap();
    for (k, shape) in set.shapes().iter().enumerate() {
        let buffer = cloud.positions().buffer(k).unwrap();
        assert_eq!(&buffer[..shape.len()], shape.points.as_slice());
        for p in &buffer[shape.len()..] {
            assert!(shape.points.contains(p));
        }
    }
}

#[test]
fn finished_morph_lands_on_target_shape() {
    let mut cloud = cloud(&[50, 50]);
    cloud.begin_morph(1).unwrap();
    cloud.advance_frame(0.0).unwrap();
    cloud.advance_frame(2.5).unwrap();
    for i in 0..50 {
        let out = cloud.evaluate_vertex(i).unwrap();
        assert!(out.local_progress > 0.999);
        // cluster 1 sits around x = 10
        assert!((out.position[0] - 10.0).abs() < 1.5, "x = {}", out.position[0]);
    }
}

// ===== Morph requests =====

#[test]
fn progress_never_decreases_during_a_morph() {
    let mut cloud = cloud(&[20, 30, 40]);
    cloud.begin_morph(1).unwrap();
    let mut prev = cloud.progress();
    for frame in 1..=180 {
        cloud.advance_frame(frame as f32 / 60.0).unwrap();
        assert!(cloud.progress() >= prev);
        prev = cloud.progress();
    }
    assert_eq!(prev, 1.0);
}

#[test]
fn retarget_mid_morph_jumps_from_requested_shape() {
    // The "from" binding switches to the previously requested shape rather
    // than the blended positions on screen, so points visibly jump.
    let mut cloud = cloud(&[200, 200, 200]);
    cloud.begin_morph(1).unwrap();
    cloud.advance_frame(0.0).unwrap();
    cloud.advance_frame(0.25).unwrap();
    let before: Vec<Point3> = (0..200)
        .map(|i| cloud.evaluate_vertex(i).unwrap().position)
        .collect();

    cloud.begin_morph(2).unwrap();
    assert_eq!(
        cloud.bindings(),
        AttributeBindings {
            current: 1,
            target: 2
        }
    );
    assert_eq!(cloud.progress(), 0.0);
    assert_eq!(cloud.current_index(), Some(2));

    cloud.advance_frame(0.25).unwrap();
    let max_jump = (0..200)
        .map(|i| distance(before[i], cloud.evaluate_vertex(i).unwrap().position))
        .fold(0.0_f32, f32::max);
    assert!(max_jump > 5.0, "max jump {max_jump}");
}

#[test]
fn request_after_a_frame_gap_still_ramps() {
    let mut cloud = cloud(&[20, 30]);
    let start = cloud.uniforms().color_a;
    let white = Rgb::new(1.0, 1.0, 1.0);

    cloud.advance_frame(1.0).unwrap();
    cloud.begin_morph(1).unwrap();
    cloud.set_color(ColorSlot::A, white);

    // Nothing was drawn for ten seconds; the ramp starts on this frame.
    cloud.advance_frame(11.0).unwrap();
    assert_eq!(cloud.progress(), 0.0);
    assert_eq!(cloud.uniforms().color_a, start);
    assert!(cloud.is_morphing());

    cloud.advance_frame(12.25).unwrap();
    let progress = cloud.progress();
    assert!(progress > 0.0 && progress < 1.0, "progress = {progress}");
    let mid = cloud.uniforms().color_a;
    assert!(mid.b > start.b && mid.b < 1.0);

    cloud.advance_frame(13.5).unwrap();
    assert_eq!(cloud.progress(), 1.0);
    assert_eq!(cloud.uniforms().color_a, white);
    assert!(!cloud.is_morphing());
}

#[test]
fn self_morph_is_legal() {
    let mut cloud = cloud(&[10, 20]);
    cloud.begin_morph(0).unwrap();
    assert_eq!(
        cloud.bindings(),
        AttributeBindings {
            current: 0,
            target: 0
        }
    );
    cloud.advance_frame(1.0).unwrap();
    for i in 0..20 {
        let out = cloud.evaluate_vertex(i).unwrap();
        assert!(out.position.iter().all(|c| c.is_finite()));
        assert!((0.0..=1.0).contains(&out.local_progress));
    }
}

#[test]
fn invalid_index_is_rejected_without_mutation() {
    let mut cloud = cloud(&[10, 20]);
    cloud.begin_morph(1).unwrap();
    cloud.advance_frame(1.0).unwrap();
    let progress = cloud.progress();
    let bindings = cloud.bindings();

    let err = cloud.begin_morph(2).unwrap_err();
    assert_eq!(err, MorphError::InvalidShapeIndex { index: 2, count: 2 });
    assert_eq!(cloud.progress(), progress);
    assert_eq!(cloud.bindings(), bindings);
    assert_eq!(cloud.current_index(), Some(1));
}

// ===== Clock =====

#[test]
fn time_uniform_advances_at_rest() {
    let mut cloud = cloud(&[10]);
    cloud.advance_frame(0.5).unwrap();
    assert_eq!(cloud.uniforms().time, 0.5);
    cloud.advance_frame(0.5).unwrap();
    cloud.advance_frame(7.25).unwrap();
    assert_eq!(cloud.uniforms().time, 7.25);
    assert_eq!(cloud.progress(), 0.0);
}

#[test]
fn backwards_clock_is_rejected() {
    let mut cloud = cloud(&[10]);
    cloud.advance_frame(2.0).unwrap();
    let err = cloud.advance_frame(1.5).unwrap_err();
    assert_eq!(
        err,
        MorphError::ClockWentBackwards {
            previous: 2.0,
            now: 1.5
        }
    );
    assert_eq!(cloud.elapsed(), 2.0);
    assert_eq!(cloud.uniforms().time, 2.0);
    assert!(cloud.advance_frame(f32::NAN).is_err());
}

// ===== Colors =====

#[test]
fn set_color_eases_into_uniforms() {
    let mut cloud = cloud(&[10]);
    let start = cloud.uniforms().color_a;
    let white = Rgb::new(1.0, 1.0, 1.0);

    cloud.advance_frame(1.0).unwrap();
    cloud.set_color(ColorSlot::A, white);
    assert_eq!(cloud.color_target(ColorSlot::A), white);

    cloud.advance_frame(1.0).unwrap();
    assert_eq!(cloud.uniforms().color_a, start);

    cloud.advance_frame(2.0).unwrap();
    let mid = cloud.uniforms().color_a;
    assert!(mid.b > start.b && mid.b < 1.0);

    cloud.advance_frame(3.5).unwrap();
    assert_eq!(cloud.uniforms().color_a, white);
}

#[test]
fn zero_transition_snaps_colors() {
    let mut cloud = cloud(&[10]);
    cloud.set_color_transition(0.0);
    cloud.set_color(ColorSlot::B, Rgb::BLACK);
    cloud.advance_frame(0.0).unwrap();
    assert_eq!(cloud.uniforms().color_b, Rgb::BLACK);
}

// ===== Viewport =====

#[test]
fn resize_scales_point_size_with_height_and_ratio() {
    let mut cloud = cloud(&[10]);
    let size = cloud.attributes().sizes()[0];

    cloud.resize(800.0, 600.0, 1.0);
    let small = point_size(size, cloud.uniforms().size, cloud.uniforms().resolution[1], -16.0);

    cloud.resize(1600.0, 900.0, 2.0);
    assert_eq!(cloud.uniforms().resolution, [3200.0, 1800.0]);
    let large = point_size(size, cloud.uniforms().size, cloud.uniforms().resolution[1], -16.0);

    assert!((large - small * 3.0).abs() <= small * 1e-5);
}

#[test]
fn resize_caps_pixel_ratio() {
    let mut cloud = cloud(&[10]);
    cloud.resize(1000.0, 500.0, 3.0);
    assert_eq!(cloud.uniforms().resolution, [2000.0, 1000.0]);
}

// ===== Construction =====

#[test]
fn attribute_length_must_match() {
    let mut rng = StdRng::seed_from_u64(0);
    let positions = crate::geometry::normalize(&shape_set(&[10, 12]), &mut rng).unwrap();
    let attributes = PerVertexAttributes::generate(11, &mut rng);
    let err = MorphableCloud::new(positions, attributes, CloudSettings::default()).unwrap_err();
    assert_eq!(
        err,
        MorphError::AttributeLengthMismatch {
            expected: 12,
            actual: 11
        }
    );
}

#[test]
fn initial_shape_must_exist() {
    let settings = CloudSettings {
        initial_shape: 3,
        ..CloudSettings::default()
    };
    let err =
        MorphableCloud::from_shapes(&shape_set(&[5, 5]), settings, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
    assert_eq!(err, MorphError::InvalidShapeIndex { index: 3, count: 2 });
}

#[test]
fn degenerate_shape_fails_construction() {
    let err = MorphableCloud::from_shapes(
        &shape_set(&[5, 0]),
        CloudSettings::default(),
        &mut StdRng::seed_from_u64(0),
    )
    .unwrap_err();
    assert_eq!(err, MorphError::DegenerateGeometry { shape: 1 });
}

#[test]
fn evaluate_vertex_rejects_out_of_range_point() {
    let cloud = cloud(&[10]);
    assert!(cloud.evaluate_vertex(9).is_ok());
    assert!(cloud.evaluate_vertex(10).is_err());
}

// ===== CloudSlot =====

#[test]
fn empty_slot_reports_not_loaded() {
    let mut slot = CloudSlot::default();
    assert!(!slot.is_loaded());
    assert_eq!(slot.shape_count(), 0);
    assert_eq!(slot.current_index(), None);
    assert_eq!(slot.begin_morph(0).unwrap_err(), MorphError::NotLoaded);
    assert_eq!(slot.advance_frame(1.0).unwrap_err(), MorphError::NotLoaded);
    assert_eq!(
        slot.set_color(ColorSlot::A, Rgb::BLACK).unwrap_err(),
        MorphError::NotLoaded
    );
}

#[test]
fn loaded_slot_forwards_to_cloud() {
    let mut slot = CloudSlot::default();
    slot.load(cloud(&[10, 20, 30]));
    assert!(slot.is_loaded());
    assert_eq!(slot.shape_count(), 3);
    assert_eq!(slot.current_index(), Some(0));

    slot.begin_morph(2).unwrap();
    slot.advance_frame(0.0).unwrap();
    slot.advance_frame(2.5).unwrap();
    assert_eq!(slot.current_index(), Some(2));
    assert_eq!(slot.get().unwrap().progress(), 1.0);
}
