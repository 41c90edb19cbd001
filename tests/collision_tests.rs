mod common;

use approx::assert_relative_eq;
use platform_motion::collision::{
    Collider, CollisionGroup, CollisionScene, Contact, ContactBuffer, ContactClassifier,
    ContactFilter, ContactKind, LayerMatrix, PositionState, ShapeCast, StateTransitions,
    MAX_CONTACTS,
};
use platform_motion::core::MotionConfig;
use platform_motion::math::Vector2;
use platform_motion::shapes::ConvexPolygon;

use common::unit_box;

fn floor() -> Collider {
    // Top surface at y = 0
    Collider::new_box(Vector2::new(0.0, -0.5), Vector2::new(10.0, 0.5)).unwrap()
}

#[test]
fn test_classifier_thresholds() {
    let classifier = MotionConfig::default().classifier();

    assert_eq!(classifier.classify(Vector2::UP), ContactKind::Ground);
    assert_eq!(classifier.classify(Vector2::new(-0.6, 0.8)), ContactKind::Ground);
    assert_eq!(classifier.classify(Vector2::new(1.0, 0.0)), ContactKind::LeftWall);
    assert_eq!(classifier.classify(Vector2::new(-1.0, 0.0)), ContactKind::RightWall);
    assert_eq!(classifier.classify(Vector2::new(0.0, -1.0)), ContactKind::Ceiling);

    // 45 degrees is neither ground nor wall
    let diagonal = Vector2::new(1.0, 1.0).normalize_or_zero();
    assert_eq!(classifier.classify(diagonal), ContactKind::Steep);

    // Exactly on the threshold is not ground
    let edge = Vector2::new((1.0f32 - 0.65 * 0.65).sqrt(), 0.65);
    assert_eq!(classifier.classify(edge), ContactKind::Steep);
}

#[test]
fn test_ground_wins_at_corners() {
    // Thresholds loose enough that one normal passes both tests
    let classifier = ContactClassifier::new(0.5, 0.5);
    let corner = Vector2::new(0.6, 0.8);
    assert_eq!(classifier.classify(corner), ContactKind::Ground);
}

#[test]
fn test_position_state_record() {
    let mut state = PositionState::default();
    state.record(ContactKind::Ground);
    assert!(state.grounded);
    assert!(state.push_bottom);

    state.record(ContactKind::RightWall);
    state.record(ContactKind::Steep);
    assert!(state.push_right);
    assert!(!state.push_left);
    assert!(!state.push_top);

    state.reset();
    assert_eq!(state, PositionState::default());
}

#[test]
fn test_state_transitions() {
    let airborne = PositionState::default();
    let mut landed = PositionState::default();
    landed.record(ContactKind::Ground);
    landed.record(ContactKind::LeftWall);

    let transitions = landed.transitions_from(&airborne);
    assert_eq!(transitions, StateTransitions::LANDED | StateTransitions::BEGAN_PUSH_LEFT);

    let transitions = airborne.transitions_from(&landed);
    assert_eq!(transitions, StateTransitions::LEFT_GROUND | StateTransitions::ENDED_PUSH_LEFT);

    assert!(landed.transitions_from(&landed).is_empty());
}

#[test]
fn test_contact_buffer_overflow() {
    let mut buffer = ContactBuffer::new();
    for i in 0..MAX_CONTACTS {
        assert!(buffer.push(Contact::new(Vector2::UP, i as f32)));
    }
    assert!(buffer.is_full());
    assert!(!buffer.push(Contact::new(Vector2::UP, 100.0)));
    assert_eq!(buffer.len(), MAX_CONTACTS);
    assert_eq!(buffer.dropped(), 1);

    buffer.clear();
    assert!(buffer.is_empty());
    assert_eq!(buffer.dropped(), 0);
}

#[test]
fn test_contact_buffer_keeps_nearest() {
    let mut buffer = ContactBuffer::new();
    for i in (0..MAX_CONTACTS + 4).rev() {
        buffer.insert_by_distance(Contact::new(Vector2::UP, i as f32));
    }

    assert_eq!(buffer.len(), MAX_CONTACTS);
    assert_eq!(buffer.dropped(), 4);
    let distances: Vec<f32> = buffer.iter().map(|c| c.distance).collect();
    let expected: Vec<f32> = (0..MAX_CONTACTS).map(|i| i as f32).collect();
    assert_eq!(distances, expected);
}

#[test]
fn test_layer_matrix() {
    let mut layers = LayerMatrix::new();
    assert!(layers.collides(CollisionGroup::PLAYER, CollisionGroup::ENEMY).unwrap());

    layers.set_collision(CollisionGroup::PLAYER, CollisionGroup::ENEMY, false).unwrap();
    assert!(!layers.collides(CollisionGroup::PLAYER, CollisionGroup::ENEMY).unwrap());
    assert!(!layers.collides(CollisionGroup::ENEMY, CollisionGroup::PLAYER).unwrap());
    assert!(layers.collides(CollisionGroup::PLAYER, CollisionGroup::STATIC).unwrap());

    let filter = ContactFilter::for_layer(&layers, CollisionGroup::PLAYER).unwrap();
    assert!(filter.ignore_triggers);
    assert!(filter.accepts(CollisionGroup::STATIC, false));
    assert!(!filter.accepts(CollisionGroup::ENEMY, false));
    assert!(!filter.accepts(CollisionGroup::PICKUP, true));

    // A layer must be exactly one bit
    assert!(layers
        .collision_mask(CollisionGroup::PLAYER | CollisionGroup::ENEMY)
        .is_err());
    assert!(ContactFilter::for_layer(&layers, CollisionGroup::empty()).is_err());
}

#[test]
fn test_scene_cast_hits_floor() {
    let mut scene = CollisionScene::new();
    scene.add_collider(floor());

    let mut hits = ContactBuffer::new();
    let filter = ContactFilter::default();
    let down = Vector2::new(0.0, -1.0);

    scene.cast(&unit_box(), Vector2::new(0.0, 2.0), down, 5.0, &filter, &mut hits);
    assert_eq!(hits.len(), 1);
    let contact = hits.as_slice()[0];
    assert_relative_eq!(contact.normal, Vector2::UP);
    assert_relative_eq!(contact.distance, 1.5, epsilon = 1e-5);

    // Too short to reach
    scene.cast(&unit_box(), Vector2::new(0.0, 2.0), down, 1.0, &filter, &mut hits);
    assert!(hits.is_empty());

    // Moving away
    scene.cast(&unit_box(), Vector2::new(0.0, 2.0), Vector2::UP, 5.0, &filter, &mut hits);
    assert!(hits.is_empty());

    // Sliding along the surface just above it
    scene.cast(&unit_box(), Vector2::new(0.0, 0.51), Vector2::unit_x(), 5.0, &filter, &mut hits);
    assert!(hits.is_empty());
}

#[test]
fn test_scene_cast_slope_normal() {
    let mut scene = CollisionScene::new();
    let ramp = ConvexPolygon::ramp(Vector2::ZERO, 4.0, 3.0).unwrap();
    scene.add_collider(Collider::new(ramp, Vector2::ZERO));

    let mut hits = ContactBuffer::new();
    scene.cast(
        &unit_box(),
        Vector2::new(2.0, 5.0),
        Vector2::new(0.0, -1.0),
        10.0,
        &ContactFilter::default(),
        &mut hits,
    );

    assert_eq!(hits.len(), 1);
    let contact = hits.as_slice()[0];
    assert_relative_eq!(contact.normal, Vector2::new(-0.6, 0.8), epsilon = 1e-5);
    // The bottom-right corner meets the slope at y = 1.875
    assert_relative_eq!(contact.distance, 2.625, epsilon = 1e-4);
}

#[test]
fn test_scene_cast_wall_and_ceiling() {
    let mut scene = CollisionScene::new();
    scene.add_collider(Collider::new_box(Vector2::new(3.0, 0.0), Vector2::new(0.5, 5.0)).unwrap());
    scene.add_collider(Collider::new_box(Vector2::new(0.0, 4.0), Vector2::new(5.0, 0.5)).unwrap());

    let mut hits = ContactBuffer::new();
    let filter = ContactFilter::default();

    scene.cast(&unit_box(), Vector2::ZERO, Vector2::unit_x(), 5.0, &filter, &mut hits);
    assert_eq!(hits.len(), 1);
    assert_relative_eq!(hits.as_slice()[0].normal, Vector2::new(-1.0, 0.0));
    assert_relative_eq!(hits.as_slice()[0].distance, 2.0, epsilon = 1e-5);

    scene.cast(&unit_box(), Vector2::ZERO, Vector2::UP, 5.0, &filter, &mut hits);
    assert_eq!(hits.len(), 1);
    assert_relative_eq!(hits.as_slice()[0].normal, Vector2::new(0.0, -1.0));
    assert_relative_eq!(hits.as_slice()[0].distance, 3.0, epsilon = 1e-5);
}

#[test]
fn test_scene_cast_respects_filter() {
    let mut scene = CollisionScene::new();
    scene.add_collider(floor().with_group(CollisionGroup::ENEMY));
    scene.add_collider(
        Collider::new_box(Vector2::new(0.0, 1.0), Vector2::new(2.0, 0.25))
            .unwrap()
            .with_group(CollisionGroup::PICKUP)
            .as_trigger(),
    );

    let mut hits = ContactBuffer::new();
    let origin = Vector2::new(0.0, 3.0);
    let down = Vector2::new(0.0, -1.0);

    // Default filter skips the trigger but hits the enemy floor
    scene.cast(&unit_box(), origin, down, 10.0, &ContactFilter::default(), &mut hits);
    assert_eq!(hits.len(), 1);
    assert_relative_eq!(hits.as_slice()[0].distance, 2.5, epsilon = 1e-5);

    // Static-only mask skips both
    let statics = ContactFilter::new(CollisionGroup::STATIC, true);
    scene.cast(&unit_box(), origin, down, 10.0, &statics, &mut hits);
    assert!(hits.is_empty());

    // Accepting triggers reports the pickup first
    let everything = ContactFilter::new(CollisionGroup::ALL, false);
    scene.cast(&unit_box(), origin, down, 10.0, &everything, &mut hits);
    assert_eq!(hits.len(), 2);
    assert_relative_eq!(hits.as_slice()[0].distance, 1.25, epsilon = 1e-5);
}

#[test]
fn test_scene_cast_overflow_keeps_nearest() {
    let mut scene = CollisionScene::new();
    for i in 0..MAX_CONTACTS + 4 {
        let top = -(i as f32);
        scene.add_collider(
            Collider::new_box(Vector2::new(0.0, top - 0.25), Vector2::new(5.0, 0.25)).unwrap(),
        );
    }

    let mut hits = ContactBuffer::new();
    scene.cast(
        &unit_box(),
        Vector2::new(0.0, 2.0),
        Vector2::new(0.0, -1.0),
        100.0,
        &ContactFilter::default(),
        &mut hits,
    );

    assert_eq!(hits.len(), MAX_CONTACTS);
    assert_eq!(hits.dropped(), 4);
    assert_relative_eq!(hits.as_slice()[0].distance, 1.5, epsilon = 1e-4);
    assert_relative_eq!(
        hits.as_slice()[MAX_CONTACTS - 1].distance,
        1.5 + (MAX_CONTACTS - 1) as f32,
        epsilon = 1e-4
    );
}

#[test]
fn test_scene_cast_from_inside_overlap() {
    let mut scene = CollisionScene::new();
    scene.add_collider(floor());

    let mut hits = ContactBuffer::new();
    let filter = ContactFilter::default();
    let sunk = Vector2::new(0.0, 0.4);

    // Pushing further in reports a zero-distance contact
    scene.cast(&unit_box(), sunk, Vector2::new(0.0, -1.0), 1.0, &filter, &mut hits);
    assert_eq!(hits.len(), 1);
    assert_relative_eq!(hits.as_slice()[0].normal, Vector2::UP);
    assert_eq!(hits.as_slice()[0].distance, 0.0);

    // Moving out is free
    scene.cast(&unit_box(), sunk, Vector2::UP, 1.0, &filter, &mut hits);
    assert!(hits.is_empty());
}

#[test]
fn test_scene_collider_management() {
    let mut scene = CollisionScene::new();
    let handle = scene.add_collider(floor());
    assert_eq!(scene.collider_count(), 1);

    scene.set_collider_position(handle, Vector2::new(0.0, -5.0)).unwrap();
    assert_eq!(scene.get_collider(handle).unwrap().get_position(), Vector2::new(0.0, -5.0));

    scene.remove_collider(handle).unwrap();
    assert!(scene.get_collider(handle).is_err());
    assert!(scene.set_collider_position(handle, Vector2::ZERO).is_err());
}

#[test]
fn test_polygon_construction() {
    assert!(ConvexPolygon::new(vec![Vector2::ZERO]).is_err());
    assert!(ConvexPolygon::new(vec![Vector2::ZERO, Vector2::ZERO]).is_err());
    assert!(ConvexPolygon::new(vec![Vector2::ZERO, Vector2::new(f32::NAN, 0.0)]).is_err());

    let segment = ConvexPolygon::segment(Vector2::new(-1.0, 0.0), Vector2::new(1.0, 0.0)).unwrap();
    assert_eq!(segment.get_axes().len(), 1);

    // Opposite edges of a rectangle share an axis
    let rect = ConvexPolygon::rectangle(Vector2::new(2.0, 1.0)).unwrap();
    assert_eq!(rect.get_axes().len(), 2);
    assert_eq!(rect.get_local_bounds().max, Vector2::new(2.0, 1.0));

    let (min, max) = rect.project(Vector2::new(10.0, 0.0), Vector2::unit_x());
    assert_relative_eq!(min, 8.0);
    assert_relative_eq!(max, 12.0);

    let slab = ConvexPolygon::tilted_slab(Vector2::ZERO, platform_motion::math::to_radians(30.0), 2.0, 0.5).unwrap();
    assert_eq!(slab.get_vertices().len(), 4);
    assert_eq!(slab.get_axes().len(), 2);
}
