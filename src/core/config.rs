use crate::collision::ContactClassifier;
use crate::error::MotionError;
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How the per-tick displacement is derived from velocity and acceleration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum IntegrationMode {
    /// `velocity * dt + 0.5 * acceleration * dt^2`
    #[default]
    ConstantAcceleration,

    /// `velocity * dt`
    Simplified,
}

/// What happens to the ground normal while a subject is airborne
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum GroundNormalPolicy {
    /// Reset to straight up at the start of any tick that follows an airborne tick
    #[default]
    ResetWhenAirborne,

    /// Keep the last ground normal until a new ground contact replaces it
    Persistent,
}

/// Configuration parameters for the motion simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MotionConfig {
    /// The fixed time step for the simulation
    pub time_step: f32,

    /// The maximum number of fixed ticks run for a single call to `MotionWorld::step`
    pub max_substeps: u32,

    /// Process-wide gravity, scaled per subject by its gravity modifier
    pub gravity: Vector2,

    /// Displacements at or below this length are not cast at all
    pub min_move_distance: f32,

    /// Skin kept between a subject and every surface it touches
    pub shell_radius: f32,

    /// A contact normal with `y` above this is ground
    pub min_ground_normal_y: f32,

    /// A contact normal with `|x|` above this is a wall
    pub min_wall_normal_x: f32,

    /// How displacement is integrated
    pub integration_mode: IntegrationMode,

    /// How the ground normal behaves while airborne
    pub ground_normal_policy: GroundNormalPolicy,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            max_substeps: 10,
            gravity: Vector2::new(0.0, -9.81),
            min_move_distance: 0.001,
            shell_radius: 0.01,
            min_ground_normal_y: 0.65,
            min_wall_normal_x: 0.95,
            integration_mode: IntegrationMode::default(),
            ground_normal_policy: GroundNormalPolicy::default(),
        }
    }
}

impl MotionConfig {
    /// Checks that every parameter is usable
    pub fn validate(&self) -> Result<()> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(invalid("time_step must be positive", self.time_step));
        }
        if self.max_substeps == 0 {
            return Err(MotionError::InvalidParameter(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(MotionError::InvalidParameter(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !(self.min_move_distance.is_finite() && self.min_move_distance >= 0.0) {
            return Err(invalid("min_move_distance must be non-negative", self.min_move_distance));
        }
        if !(self.shell_radius.is_finite() && self.shell_radius >= 0.0) {
            return Err(invalid("shell_radius must be non-negative", self.shell_radius));
        }
        // The slope speed-up divides by the ground normal's y, which is always
        // above this threshold for a ground contact.
        if !(self.min_ground_normal_y > 0.0 && self.min_ground_normal_y < 1.0) {
            return Err(invalid("min_ground_normal_y must lie in (0, 1)", self.min_ground_normal_y));
        }
        if !(self.min_wall_normal_x > 0.0 && self.min_wall_normal_x < 1.0) {
            return Err(invalid("min_wall_normal_x must lie in (0, 1)", self.min_wall_normal_x));
        }
        Ok(())
    }

    /// Returns the contact classifier described by this configuration
    pub fn classifier(&self) -> ContactClassifier {
        ContactClassifier::new(self.min_ground_normal_y, self.min_wall_normal_x)
    }
}

fn invalid(message: &str, value: f32) -> MotionError {
    MotionError::InvalidParameter(format!("{}, got {}", message, value))
}
