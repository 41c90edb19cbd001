use platform_motion::math::{to_radians, Aabb, Vector2};
use std::f32::consts::PI;
use approx::assert_relative_eq;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, 5.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum, Vector2::new(5.0, 7.0));

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff, Vector2::new(3.0, 3.0));

    // Scalar multiplication, both sides
    assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(2.0 * v1, Vector2::new(2.0, 4.0));

    // Dot and cross
    assert_eq!(v1.dot(&v2), 1.0 * 4.0 + 2.0 * 5.0);
    assert_eq!(v1.cross(&v2), 1.0 * 5.0 - 2.0 * 4.0);

    // Length
    assert_relative_eq!(v1.length(), 5.0f32.sqrt());
    assert_relative_eq!(v1.distance(&v2), 18.0f32.sqrt());

    // Negation and compound assignment
    let mut v = -v1;
    assert_eq!(v, Vector2::new(-1.0, -2.0));
    v += v2;
    v *= 0.5;
    assert_eq!(v, Vector2::new(1.5, 1.5));
}

#[test]
fn test_normalize_or_zero() {
    let v = Vector2::new(3.0, 4.0);
    let n = v.normalize_or_zero();
    assert_relative_eq!(n.length(), 1.0);
    assert_relative_eq!(n, Vector2::new(0.6, 0.8));

    // Zero and non-finite vectors never produce NaN directions
    assert_eq!(Vector2::ZERO.normalize_or_zero(), Vector2::ZERO);
    assert_eq!(Vector2::new(1.0e-9, 0.0).normalize_or_zero(), Vector2::ZERO);
    assert_eq!(Vector2::new(f32::NAN, 1.0).normalize_or_zero(), Vector2::ZERO);
    assert_eq!(Vector2::new(f32::INFINITY, 0.0).normalize_or_zero(), Vector2::ZERO);

    assert!(Vector2::ZERO.direction_and_length().is_none());
    let (direction, length) = Vector2::new(0.0, -2.0).direction_and_length().unwrap();
    assert_eq!(direction, Vector2::new(0.0, -1.0));
    assert_relative_eq!(length, 2.0);
}

#[test]
fn test_perpendicular_and_tangent() {
    let normal = Vector2::new(-0.6, 0.8);

    // Tangent runs along the surface, rightwards and uphill for this slope
    let tangent = normal.tangent();
    assert_relative_eq!(tangent, Vector2::new(0.8, 0.6));
    assert_relative_eq!(tangent.dot(&normal), 0.0);

    let perp = Vector2::unit_x().perpendicular();
    assert_eq!(perp, Vector2::UP);
}

#[test]
fn test_rotation() {
    let v = Vector2::unit_x().rotated(PI / 2.0);
    assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);

    let v = Vector2::new(1.0, 1.0).rotated(to_radians(180.0));
    assert_relative_eq!(v, Vector2::new(-1.0, -1.0), epsilon = 1e-6);
}

#[test]
fn test_nalgebra_conversion() {
    let v = Vector2::new(1.5, -2.5);
    let na_v = v.to_nalgebra();
    assert_eq!(na_v.x, 1.5);
    assert_eq!(na_v.y, -2.5);

    let back: Vector2 = na_v.into();
    assert_eq!(back, v);

    let array: [f32; 2] = v.into();
    assert_eq!(array, [1.5, -2.5]);
    assert_eq!(Vector2::from((1.5, -2.5)), v);
}

#[test]
fn test_lerp() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(10.0, -4.0);
    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
    assert_relative_eq!(a.lerp(&b, 0.25), Vector2::new(2.5, -1.0));
}

#[test]
fn test_aabb_operations() {
    let aabb1 = Aabb::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0));
    let aabb2 = Aabb::new(Vector2::new(1.0, 1.0), Vector2::new(3.0, 3.0));
    let aabb3 = Aabb::new(Vector2::new(5.0, 5.0), Vector2::new(6.0, 6.0));

    // Intersection
    assert!(aabb1.intersects(&aabb2));
    assert!(!aabb1.intersects(&aabb3));

    // Containment
    assert!(aabb1.contains_point(Vector2::new(1.0, 1.0)));
    assert!(aabb1.contains_point(Vector2::new(2.0, 0.0)));
    assert!(!aabb1.contains_point(Vector2::new(2.1, 1.0)));

    // Union
    let union = aabb1.union(&aabb3);
    assert_eq!(union.min, Vector2::new(0.0, 0.0));
    assert_eq!(union.max, Vector2::new(6.0, 6.0));

    // Center and extents
    assert_eq!(aabb1.center(), Vector2::new(1.0, 1.0));
    assert_eq!(aabb1.extents(), Vector2::new(2.0, 2.0));
    assert_eq!(aabb1.half_extents(), Vector2::new(1.0, 1.0));

    let centered = Aabb::from_center_half_extents(Vector2::new(1.0, 1.0), Vector2::new(1.0, 1.0));
    assert_eq!(centered, aabb1);

    // Expand
    let expanded = aabb1.expand(0.5);
    assert_eq!(expanded.min, Vector2::new(-0.5, -0.5));
    assert_eq!(expanded.max, Vector2::new(2.5, 2.5));
}

#[test]
fn test_aabb_sweep() {
    let aabb = Aabb::from_center_half_extents(Vector2::ZERO, Vector2::new(0.5, 0.5));
    let swept = aabb.swept(Vector2::new(3.0, -1.0));
    assert_eq!(swept.min, Vector2::new(-0.5, -1.5));
    assert_eq!(swept.max, Vector2::new(3.5, 0.5));

    let points = [Vector2::new(1.0, -2.0), Vector2::new(-3.0, 4.0), Vector2::new(0.0, 0.0)];
    let bounds = Aabb::from_points(&points).unwrap();
    assert_eq!(bounds.min, Vector2::new(-3.0, -2.0));
    assert_eq!(bounds.max, Vector2::new(1.0, 4.0));
    assert!(Aabb::from_points(&[]).is_none());
}
