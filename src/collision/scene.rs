use log::trace;

use crate::collision::{CollisionGroup, Contact, ContactBuffer, ContactFilter, ShapeCast};
use crate::core::{ColliderHandle, HandleStorage};
use crate::math::Vector2;
use crate::shapes::{BoxShape, ConvexPolygon};
use crate::Result;

/// Projected speeds below this are treated as motion parallel to an axis
const PARALLEL_EPSILON: f32 = 1.0e-7;

/// A piece of scene geometry
#[derive(Debug, Clone)]
pub struct Collider {
    /// The collider's shape in local space
    shape: ConvexPolygon,

    /// World-space translation of the shape
    position: Vector2,

    /// The layer this collider belongs to
    group: CollisionGroup,

    /// Triggers are reported only to filters that accept them
    is_trigger: bool,
}

impl Collider {
    /// Creates a solid collider on the [`CollisionGroup::STATIC`] layer
    pub fn new(shape: ConvexPolygon, position: Vector2) -> Self {
        Self {
            shape,
            position,
            group: CollisionGroup::STATIC,
            is_trigger: false,
        }
    }

    /// Creates a solid axis-aligned box collider
    pub fn new_box(center: Vector2, half_extents: Vector2) -> Result<Self> {
        Ok(Self::new(ConvexPolygon::rectangle(half_extents)?, center))
    }

    /// Moves the collider to another layer
    pub fn with_group(mut self, group: CollisionGroup) -> Self {
        self.group = group;
        self
    }

    /// Marks the collider as a trigger volume
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Returns the collider's shape
    pub fn get_shape(&self) -> &ConvexPolygon {
        &self.shape
    }

    /// Returns the collider's world-space translation
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Sets the collider's world-space translation
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Returns the collider's layer
    pub fn get_group(&self) -> CollisionGroup {
        self.group
    }

    /// Returns whether the collider is a trigger
    pub fn is_trigger(&self) -> bool {
        self.is_trigger
    }
}

/// Reference [`ShapeCast`] backend: a flat list of convex colliders tested
/// one by one with a separating-axis sweep.
#[derive(Debug, Clone, Default)]
pub struct CollisionScene {
    colliders: HandleStorage<ColliderHandle, Collider>,
}

impl CollisionScene {
    /// Creates an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collider and returns its handle
    pub fn add_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.colliders.add(collider)
    }

    /// Removes a collider
    pub fn remove_collider(&mut self, handle: ColliderHandle) -> Result<Collider> {
        self.colliders.remove(handle)
    }

    /// Gets a collider by handle
    pub fn get_collider(&self, handle: ColliderHandle) -> Result<&Collider> {
        self.colliders.get(handle)
    }

    /// Moves a collider, e.g. a kinematic platform
    pub fn set_collider_position(&mut self, handle: ColliderHandle, position: Vector2) -> Result<()> {
        self.colliders.get_mut(handle)?.set_position(position);
        Ok(())
    }

    /// Returns the number of colliders in the scene
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }
}

impl ShapeCast for CollisionScene {
    fn cast(
        &self,
        shape: &BoxShape,
        origin: Vector2,
        direction: Vector2,
        max_distance: f32,
        filter: &ContactFilter,
        hits: &mut ContactBuffer,
    ) {
        hits.clear();

        let swept = shape
            .get_world_bounds(origin)
            .swept(direction * max_distance);

        for (handle, collider) in self.colliders.iter() {
            if !filter.accepts(collider.group, collider.is_trigger) {
                continue;
            }
            if !swept.intersects(&collider.shape.get_world_bounds(collider.position)) {
                continue;
            }
            if let Some(contact) = sweep_box(
                shape,
                origin,
                direction,
                max_distance,
                &collider.shape,
                collider.position,
            ) {
                trace!("cast hit collider {:?}: {:?}", handle, contact);
                hits.insert_by_distance(contact);
            }
        }
    }
}

/// Sweeps an axis-aligned box against a convex polygon using the separating
/// axis theorem on the box axes plus the polygon's edge normals.
///
/// Returns the first touching contact along `direction` within
/// `max_distance`. A polygon already overlapping the box is reported at
/// distance zero, with the minimum-penetration normal, but only when
/// `direction` pushes further into it; moving out of an overlap is free.
pub fn sweep_box(
    shape: &BoxShape,
    origin: Vector2,
    direction: Vector2,
    max_distance: f32,
    polygon: &ConvexPolygon,
    position: Vector2,
) -> Option<Contact> {
    let mut enter = f32::NEG_INFINITY;
    let mut exit = f32::INFINITY;
    let mut enter_normal = Vector2::ZERO;

    let mut min_depth = f32::INFINITY;
    let mut depth_normal = Vector2::ZERO;

    let box_axes = [Vector2::unit_x(), Vector2::unit_y()];
    for &axis in box_axes.iter().chain(polygon.get_axes()) {
        let radius = shape.projected_radius(axis);
        let center = axis.dot(&origin);
        let (box_min, box_max) = (center - radius, center + radius);
        let (poly_min, poly_max) = polygon.project(position, axis);

        // Depth needed to push the box out along +axis or -axis
        let push_positive = poly_max - box_min;
        let push_negative = box_max - poly_min;
        if push_positive <= push_negative {
            if push_positive < min_depth {
                min_depth = push_positive;
                depth_normal = axis;
            }
        } else if push_negative < min_depth {
            min_depth = push_negative;
            depth_normal = -axis;
        }

        let speed = axis.dot(&direction);
        if speed.abs() < PARALLEL_EPSILON {
            if box_max < poly_min || box_min > poly_max {
                return None;
            }
            continue;
        }

        let t0 = (poly_min - box_max) / speed;
        let t1 = (poly_max - box_min) / speed;
        let (axis_enter, axis_exit) = if t0 < t1 { (t0, t1) } else { (t1, t0) };

        if axis_enter > enter {
            enter = axis_enter;
            enter_normal = if speed > 0.0 { -axis } else { axis };
        }
        exit = exit.min(axis_exit);

        if enter > exit {
            return None;
        }
    }

    if exit < 0.0 || enter > max_distance {
        return None;
    }

    if enter < 0.0 {
        // Started inside the polygon
        if direction.dot(&depth_normal) < 0.0 {
            return Some(Contact::new(depth_normal, 0.0));
        }
        return None;
    }

    Some(Contact::new(enter_normal, enter))
}
