use stratum_ui::geometry::{Rect, RotatedRect, Vec2};

const TAU: f32 = std::f32::consts::TAU;

#[test]
fn corner_rotation_round_trips() {
    let rect = Rect::new(12, 34, 56, 78);
    let theta = 0.83;
    let rotated = RotatedRect::new(rect, theta);
    let aligned = RotatedRect::new(rect, 0.0).corners();
    let origin = rect.pos();
    for (corner, expected) in rotated.corners().iter().zip(aligned.iter()) {
        let back = corner.rotated_about(origin, -theta);
        assert!((back.x - expected.x).abs() < 1e-3, "{back:?} vs {expected:?}");
        assert!((back.y - expected.y).abs() < 1e-3, "{back:?} vs {expected:?}");
    }
}

#[test]
fn unrotated_intersection_matches_aabb_overlap() {
    let a = RotatedRect::new(Rect::new(0, 0, 10, 10), 0.0);
    let overlapping = RotatedRect::new(Rect::new(5, 5, 10, 10), 0.0);
    let separate = RotatedRect::new(Rect::new(11, 11, 5, 5), 0.0);
    assert!(a.intersects(&overlapping));
    assert!(overlapping.intersects(&a));
    assert!(!a.intersects(&separate));
    assert!(!separate.intersects(&a));
}

#[test]
fn touching_edges_count_as_intersecting() {
    let a = RotatedRect::new(Rect::new(0, 0, 10, 10), 0.0);
    let touching = RotatedRect::new(Rect::new(10, 0, 10, 10), 0.0);
    assert!(a.intersects(&touching));
    assert!(touching.intersects(&a));
}

#[test]
fn full_turn_is_equivalent_to_unrotated() {
    let base = RotatedRect::new(Rect::new(20, 20, 40, 30), 0.0);
    let turned = RotatedRect::new(Rect::new(20, 20, 40, 30), TAU);
    let clearly_inside = RotatedRect::new(Rect::new(30, 25, 5, 5), 0.0);
    let clearly_outside = RotatedRect::new(Rect::new(200, 200, 5, 5), 0.0);
    assert_eq!(
        base.intersects(&clearly_inside),
        turned.intersects(&clearly_inside)
    );
    assert_eq!(
        base.intersects(&clearly_outside),
        turned.intersects(&clearly_outside)
    );
    assert!(turned.contains(Vec2::new(30.0, 30.0)));
    assert!(!turned.contains(Vec2::new(200.0, 200.0)));
}

#[test]
fn contains_is_boundary_inclusive() {
    let rect = RotatedRect::new(Rect::new(0, 0, 10, 10), 0.0);
    assert!(rect.contains(Vec2::new(0.0, 0.0)));
    assert!(rect.contains(Vec2::new(10.0, 10.0)));
    assert!(rect.contains(Vec2::new(10.0, 5.0)));
    assert!(!rect.contains(Vec2::new(10.5, 5.0)));
}

#[test]
fn rotated_rect_rejects_points_outside_its_rotated_footprint() {
    // 45° rotation about the top-left swings the rect's body to the upper
    // right of its origin.
    let rect = RotatedRect::new(Rect::new(0, 0, 20, 20), -std::f32::consts::FRAC_PI_4);
    // The old axis-aligned far corner is no longer inside.
    assert!(!rect.contains(Vec2::new(19.0, 19.0)));
    // A point along the rotated diagonal is.
    assert!(rect.contains(Vec2::new(14.0, 0.5)));
}
