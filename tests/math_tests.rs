use aabb_physics::bodies::PriorFrameFootprint;
use aabb_physics::math::{BoundingBox, Segment, Vector2};
use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_box(rng: &mut StdRng) -> BoundingBox {
    BoundingBox::from_size(
        Vector2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)),
        rng.gen_range(0.0..40.0),
        rng.gen_range(0.0..40.0),
    )
}

#[test]
fn test_overlap_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..2000 {
        let a = random_box(&mut rng);
        let b = random_box(&mut rng);
        assert_eq!(a.overlaps(&b), b.overlaps(&a), "{a:?} vs {b:?}");
    }
}

#[test]
fn test_box_geometry() {
    let bounds = BoundingBox::from_geometry(Vector2::new(10.0, 20.0), Vector2::new(2.0, 0.5), 8.0, 8.0);

    assert_relative_eq!(bounds.left(), 2.0);
    assert_relative_eq!(bounds.right(), 18.0);
    assert_relative_eq!(bounds.top(), 18.0);
    assert_relative_eq!(bounds.bottom(), 22.0);
    assert_relative_eq!(bounds.width(), 16.0);
    assert_relative_eq!(bounds.height(), 4.0);

    assert_eq!(bounds.top_left(), Vector2::new(2.0, 18.0));
    assert_eq!(bounds.bottom_right(), Vector2::new(18.0, 22.0));
    assert_eq!(bounds.mid_top(), Vector2::new(10.0, 18.0));
    assert_eq!(bounds.mid_right(), Vector2::new(18.0, 20.0));
}

#[test]
fn test_contains_point_is_inclusive() {
    let bounds = BoundingBox::from_size(Vector2::new(0.0, 0.0), 10.0, 10.0);

    assert!(bounds.contains_point(Vector2::new(5.0, 5.0)));
    assert!(bounds.contains_point(Vector2::new(-5.0, 0.0)));
    assert!(!bounds.contains_point(Vector2::new(5.1, 0.0)));
}

#[test]
fn test_zero_area_box_never_overlaps() {
    let point = BoundingBox::from_size(Vector2::new(0.0, 0.0), 0.0, 0.0);
    let big = BoundingBox::from_size(Vector2::new(0.0, 0.0), 100.0, 100.0);

    assert!(!point.overlaps(&big));
    assert!(!big.overlaps(&point));
}

#[test]
fn test_segment_against_box_edges() {
    let bounds = BoundingBox::from_size(Vector2::new(20.0, 0.0), 10.0, 10.0);
    let ray = Segment::from_ray(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 30.0);

    let hits: Vec<Vector2> = bounds.edges().iter().filter_map(|edge| ray.intersect(edge)).collect();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().any(|hit| (hit.x - 15.0).abs() < 1e-5));
    assert!(hits.iter().any(|hit| (hit.x - 25.0).abs() < 1e-5));
}

#[test]
fn test_footprint_capture_overwrites() {
    let mut footprint = PriorFrameFootprint::default();
    footprint.capture(&BoundingBox::from_size(Vector2::new(1.0, 2.0), 4.0, 6.0));
    footprint.capture(&BoundingBox::from_size(Vector2::new(10.0, 20.0), 2.0, 2.0));

    assert_eq!(footprint.get_position(), Vector2::new(10.0, 20.0));
    assert_relative_eq!(footprint.left(), 9.0);
    assert_relative_eq!(footprint.right(), 11.0);
    assert_relative_eq!(footprint.top(), 19.0);
    assert_relative_eq!(footprint.bottom(), 21.0);
}
