use crate::error::MotionError;
use crate::math::Vector2;
use crate::policies::{InputSnapshot, PolicyContext, PresentationFrame, VelocityCommand, VelocityPolicy};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis values inside this band never flip the sprite
const FLIP_DEAD_ZONE: f32 = 0.01;

/// What releasing jump early does to an ascending jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum JumpCutMode {
    /// Switch to the heavier fall gravity for the rest of the jump
    #[default]
    FallGravity,

    /// Halve the upward velocity once
    HalveVelocity,
}

/// Vertical phase of the player state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalPhase {
    /// Standing on ground
    Grounded,

    /// Airborne and moving up
    Ascending,

    /// Airborne and not moving up
    Descending,
}

impl VerticalPhase {
    /// Derives the phase from a policy context
    pub fn of(context: &PolicyContext) -> Self {
        if context.grounded {
            Self::Grounded
        } else if context.velocity.y > 0.0 {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

/// Tuning for [`PlayerPolicy`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PlayerConfig {
    /// Apex height of a full jump
    pub jump_height: f32,

    /// Fall gravity is ascent gravity scaled by `jump_distance / fall_distance`
    pub jump_distance: f32,

    /// See `jump_distance`
    pub fall_distance: f32,

    /// Top horizontal speed
    pub max_speed: f32,

    /// Early-release behaviour
    pub jump_cut: JumpCutMode,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            jump_height: 2.0,
            jump_distance: 3.0,
            fall_distance: 1.5,
            max_speed: 7.0,
            jump_cut: JumpCutMode::default(),
        }
    }
}

impl PlayerConfig {
    /// Checks that every parameter is positive and finite
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("jump_height", self.jump_height),
            ("jump_distance", self.jump_distance),
            ("fall_distance", self.fall_distance),
            ("max_speed", self.max_speed),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(MotionError::InvalidParameter(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Vertical speed at take-off, `2·h·v / h`.
    ///
    /// The apex lies `jump_height` up and `jump_height` across at full speed;
    /// `jump_distance` only shapes the fall through [`Self::fall_gravity_scale`].
    pub fn jump_take_off_speed(&self) -> f32 {
        2.0 * self.jump_height * self.max_speed / self.jump_height
    }

    /// Gravity magnitude while ascending, `2·h·v² / h²`
    pub fn ascent_gravity_magnitude(&self) -> f32 {
        2.0 * self.jump_height * self.max_speed * self.max_speed
            / (self.jump_height * self.jump_height)
    }

    /// Ratio of fall gravity to ascent gravity
    pub fn fall_gravity_scale(&self) -> f32 {
        self.jump_distance / self.fall_distance
    }
}

/// Velocity policy for a player-controlled platformer character
#[derive(Debug, Clone)]
pub struct PlayerPolicy {
    /// Tuning
    config: PlayerConfig,

    /// Gravity while ascending (set on spawn)
    ascent_gravity: Vector2,

    /// Gravity while falling (set on spawn)
    fall_gravity: Vector2,

    /// Sprite currently faces left
    facing_left: bool,

    /// Phase seen on the most recent tick
    phase: VerticalPhase,
}

impl PlayerPolicy {
    /// Creates a player policy
    pub fn new(config: PlayerConfig) -> Result<Self> {
        config.validate()?;

        let ascent_gravity = Vector2::new(0.0, -config.ascent_gravity_magnitude());
        let fall_gravity = ascent_gravity * config.fall_gravity_scale();

        Ok(Self {
            config,
            ascent_gravity,
            fall_gravity,
            facing_left: false,
            phase: VerticalPhase::Descending,
        })
    }

    /// Returns the tuning
    pub fn get_config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Vertical speed applied on take-off
    pub fn jump_take_off_speed(&self) -> f32 {
        self.config.jump_take_off_speed()
    }

    /// Gravity used while ascending
    pub fn ascent_gravity(&self) -> Vector2 {
        self.ascent_gravity
    }

    /// Gravity used while falling
    pub fn fall_gravity(&self) -> Vector2 {
        self.fall_gravity
    }

    /// Phase seen on the most recent tick
    pub fn phase(&self) -> VerticalPhase {
        self.phase
    }

    /// Whether the sprite faces left
    pub fn is_facing_left(&self) -> bool {
        self.facing_left
    }

    fn update_facing(&mut self, horizontal: f32) {
        if self.facing_left {
            if horizontal > FLIP_DEAD_ZONE {
                self.facing_left = false;
            }
        } else if horizontal < -FLIP_DEAD_ZONE {
            self.facing_left = true;
        }
    }
}

impl VelocityPolicy for PlayerPolicy {
    fn name(&self) -> &str {
        "Player"
    }

    fn on_spawn(&mut self, gravity: Vector2) -> Vector2 {
        let direction = match gravity.normalize_or_zero() {
            d if d.is_zero() => Vector2::new(0.0, -1.0),
            d => d,
        };

        self.ascent_gravity = direction * self.config.ascent_gravity_magnitude();
        self.fall_gravity = self.ascent_gravity * self.config.fall_gravity_scale();
        self.ascent_gravity
    }

    fn compute_velocity(&mut self, input: &InputSnapshot, context: &PolicyContext) -> VelocityCommand {
        self.phase = VerticalPhase::of(context);
        self.update_facing(input.horizontal);

        let mut command = VelocityCommand::horizontal(input.horizontal * self.config.max_speed);

        if input.jump.pressed && context.grounded {
            command.gravity = Some(self.ascent_gravity);
            command.vertical_velocity = Some(self.jump_take_off_speed());
        } else if input.jump.released && context.velocity.y > 0.0 {
            match self.config.jump_cut {
                JumpCutMode::FallGravity => command.gravity = Some(self.fall_gravity),
                JumpCutMode::HalveVelocity => {
                    command.vertical_velocity = Some(context.velocity.y * 0.5)
                }
            }
        }

        // Once descending, always fall with the heavier gravity
        let vertical = command.vertical_velocity.unwrap_or(context.velocity.y);
        let gravity = command.gravity.unwrap_or(context.gravity);
        if vertical < 0.0 && gravity != self.fall_gravity {
            command.gravity = Some(self.fall_gravity);
        }

        command
    }

    fn presentation(&self, context: &PolicyContext) -> PresentationFrame {
        PresentationFrame {
            grounded: context.grounded,
            normalized_horizontal_speed: context.velocity.x.abs() / self.config.max_speed,
            flip_horizontal: self.facing_left,
        }
    }
}
