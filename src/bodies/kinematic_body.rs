use crate::collision::{ContactFilter, PositionState};
use crate::math::Vector2;
use crate::shapes::BoxShape;

/// A kinematic subject moved by the motion integrator.
///
/// The body owns all per-subject simulation state. Velocity and ground normal
/// are only written by the integrator and resolver; everything else in the
/// crate reads them through the getters.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    /// The center of the body's box in world space
    position: Vector2,

    /// The body's velocity
    velocity: Vector2,

    /// Gravity acting on this body (already scaled by its modifier)
    gravity: Vector2,

    /// Normal of the most recent blocking ground contact
    ground_normal: Vector2,

    /// Contact state for the current tick
    state: PositionState,

    /// Contact state of the previous tick, kept for edge detection
    prev_state: PositionState,

    /// The swept shape
    shape: BoxShape,

    /// Filter used for every cast the body issues
    filter: ContactFilter,
}

impl KinematicBody {
    /// Creates a body at rest with no gravity
    pub fn new(shape: BoxShape, position: Vector2, filter: ContactFilter) -> Self {
        Self {
            position,
            velocity: Vector2::ZERO,
            gravity: Vector2::ZERO,
            ground_normal: Vector2::UP,
            state: PositionState::default(),
            prev_state: PositionState::default(),
            shape,
            filter,
        }
    }

    /// Sets the body's gravity
    pub fn with_gravity(mut self, gravity: Vector2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets the body's initial velocity
    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Places the body somewhere else without sweeping
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Returns the body's velocity
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Returns the gravity acting on the body
    pub fn get_gravity(&self) -> Vector2 {
        self.gravity
    }

    /// Returns the normal of the most recent ground contact
    pub fn get_ground_normal(&self) -> Vector2 {
        self.ground_normal
    }

    /// Returns this tick's contact state
    pub fn get_state(&self) -> PositionState {
        self.state
    }

    /// Returns last tick's contact state
    pub fn get_prev_state(&self) -> PositionState {
        self.prev_state
    }

    /// Returns whether the body touched ground during its last tick
    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    /// Returns the swept shape
    pub fn get_shape(&self) -> &BoxShape {
        &self.shape
    }

    /// Returns the body's contact filter
    pub fn get_filter(&self) -> &ContactFilter {
        &self.filter
    }

    pub(crate) fn velocity_mut(&mut self) -> &mut Vector2 {
        &mut self.velocity
    }

    pub(crate) fn set_gravity(&mut self, gravity: Vector2) {
        self.gravity = gravity;
    }

    pub(crate) fn set_ground_normal(&mut self, normal: Vector2) {
        // Stored normal is always unit length
        let normal = normal.normalize_or_zero();
        self.ground_normal = if normal.is_zero() { Vector2::UP } else { normal };
    }

    pub(crate) fn state_mut(&mut self) -> &mut PositionState {
        &mut self.state
    }

    /// Stores the current state as the previous one and clears the current
    pub(crate) fn begin_tick(&mut self) {
        self.prev_state = self.state;
        self.state.reset();
    }

    pub(crate) fn translate(&mut self, offset: Vector2) {
        self.position += offset;
    }
}
