use crate::error::MotionError;
use crate::math::Vector2;
use crate::Result;

/// Moves a point back and forth along a closed loop of waypoints at constant
/// speed, dwelling at each waypoint for a fixed time.
///
/// The mover never queries collisions; whatever it carries is positioned by
/// the caller from [`WaypointMover::get_position`].
#[derive(Debug, Clone)]
pub struct WaypointMover {
    /// The waypoints, visited in order and then from the start again
    waypoints: Vec<Vector2>,

    /// Distance covered per second
    speed: f32,

    /// Dwell time at each reached waypoint
    pause_time: f32,

    /// The current position
    position: Vector2,

    /// Index of the waypoint last reached
    current_index: usize,

    /// Index of the waypoint being travelled to
    next_index: usize,

    /// Unit direction from the current to the next waypoint
    direction: Vector2,

    /// Remaining dwell time
    pause_timer: f32,
}

impl WaypointMover {
    /// Creates a mover standing on the first waypoint and heading for the second
    pub fn new(waypoints: Vec<Vector2>, speed: f32, pause_time: f32) -> Result<Self> {
        if waypoints.len() < 2 {
            return Err(MotionError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        if let Some(bad) = waypoints.iter().find(|w| !w.is_finite()) {
            return Err(MotionError::InvalidParameter(format!(
                "Waypoint {} is not finite",
                bad
            )));
        }
        if !(speed.is_finite() && speed >= 0.0) {
            return Err(MotionError::InvalidParameter(format!(
                "Speed must be non-negative and finite, got {}",
                speed
            )));
        }
        if !(pause_time.is_finite() && pause_time >= 0.0) {
            return Err(MotionError::InvalidParameter(format!(
                "Pause time must be non-negative and finite, got {}",
                pause_time
            )));
        }

        let position = waypoints[0];
        let direction = (waypoints[1] - waypoints[0]).normalize_or_zero();

        Ok(Self {
            waypoints,
            speed,
            pause_time,
            position,
            current_index: 0,
            next_index: 1,
            direction,
            pause_timer: 0.0,
        })
    }

    /// Advances the mover by `dt` seconds and returns the new position
    pub fn step(&mut self, dt: f32) -> Vector2 {
        if self.pause_timer > 0.0 {
            self.pause_timer -= dt;
            return self.position;
        }

        let distance = self.speed * dt;
        let target = self.waypoints[self.next_index];

        if self.position.distance(&target) <= distance {
            self.position = target;
            self.pause_timer = self.pause_time;

            let count = self.waypoints.len();
            self.current_index = (self.current_index + 1) % count;
            self.next_index = (self.current_index + 1) % count;

            // Coincident waypoints give a zero direction
            self.direction = (self.waypoints[self.next_index]
                - self.waypoints[self.current_index])
                .normalize_or_zero();
        } else {
            self.position += self.direction * distance;
        }

        self.position
    }

    /// Returns the current position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Returns the waypoints
    pub fn get_waypoints(&self) -> &[Vector2] {
        &self.waypoints
    }

    /// Returns the speed
    pub fn get_speed(&self) -> f32 {
        self.speed
    }

    /// Returns the dwell time
    pub fn get_pause_time(&self) -> f32 {
        self.pause_time
    }

    /// Returns the index of the waypoint last reached
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the index of the waypoint being travelled to
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Returns the remaining dwell time
    pub fn pause_timer(&self) -> f32 {
        self.pause_timer
    }

    /// Returns whether the mover is dwelling at a waypoint
    pub fn is_paused(&self) -> bool {
        self.pause_timer > 0.0
    }

    /// Returns the unit direction of travel
    pub fn get_direction(&self) -> Vector2 {
        self.direction
    }

    /// Returns the velocity the mover travels with while not paused
    pub fn get_velocity(&self) -> Vector2 {
        if self.is_paused() {
            Vector2::ZERO
        } else {
            self.direction * self.speed
        }
    }
}
