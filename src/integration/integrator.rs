use crate::bodies::KinematicBody;
use crate::collision::{PositionState, ShapeCast, StateTransitions};
use crate::core::{GroundNormalPolicy, IntegrationMode, MotionConfig};
use crate::integration::{MovementResolver, ResolveOutcome};
use crate::math::Vector2;
use crate::policies::VelocityCommand;

/// Horizontal speed along a slope whose projection onto the x axis equals
/// `target_x`
pub fn slope_adjusted_speed(target_x: f32, ground_normal: Vector2) -> f32 {
    target_x * (1.0 / ground_normal.y)
}

/// Everything one fixed tick produced for a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Contact state at the end of the tick
    pub state: PositionState,

    /// Changes against the previous tick's state
    pub transitions: StateTransitions,

    /// The slope-aligned horizontal pass
    pub horizontal: ResolveOutcome,

    /// The vertical pass
    pub vertical: ResolveOutcome,
}

/// Advances kinematic bodies one fixed tick at a time
#[derive(Debug, Clone)]
pub struct MotionIntegrator {
    /// How displacement is derived from velocity
    integration_mode: IntegrationMode,

    /// What happens to the ground normal in the air
    ground_normal_policy: GroundNormalPolicy,

    /// The resolver run twice per tick
    resolver: MovementResolver,
}

impl MotionIntegrator {
    /// Creates an integrator from the simulation configuration
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            integration_mode: config.integration_mode,
            ground_normal_policy: config.ground_normal_policy,
            resolver: MovementResolver::new(config),
        }
    }

    /// Returns the integration mode
    pub fn integration_mode(&self) -> IntegrationMode {
        self.integration_mode
    }

    /// Returns the ground normal policy
    pub fn ground_normal_policy(&self) -> GroundNormalPolicy {
        self.ground_normal_policy
    }

    /// Returns the movement resolver
    pub fn resolver(&self) -> &MovementResolver {
        &self.resolver
    }

    /// Runs one fixed tick for `body`.
    ///
    /// The command is applied first, then gravity is integrated and the
    /// displacement is resolved in two passes: along the ground, then
    /// vertically.
    pub fn step<B: ShapeCast + ?Sized>(
        &mut self,
        body: &mut KinematicBody,
        command: &VelocityCommand,
        backend: &B,
        dt: f32,
    ) -> TickReport {
        if let Some(gravity) = command.gravity {
            body.set_gravity(gravity);
        }
        if let Some(vertical) = command.vertical_velocity {
            body.velocity_mut().y = vertical;
        }

        body.begin_tick();

        let acceleration = body.get_gravity();
        *body.velocity_mut() += acceleration * dt;

        if self.ground_normal_policy == GroundNormalPolicy::ResetWhenAirborne
            && !body.get_prev_state().grounded
        {
            body.set_ground_normal(Vector2::UP);
        }

        let ground_normal = body.get_ground_normal();
        body.velocity_mut().x = slope_adjusted_speed(command.target_x, ground_normal);

        let move_along_ground = Vector2::new(ground_normal.y, -ground_normal.x).normalize_or_zero();

        let velocity = body.get_velocity();
        let delta = match self.integration_mode {
            IntegrationMode::ConstantAcceleration => velocity * dt + acceleration * (0.5 * dt * dt),
            IntegrationMode::Simplified => velocity * dt,
        };

        let horizontal = self
            .resolver
            .resolve(body, backend, move_along_ground * delta.x, false);
        let vertical = self
            .resolver
            .resolve(body, backend, Vector2::new(0.0, delta.y), true);

        let state = body.get_state();
        TickReport {
            state,
            transitions: state.transitions_from(&body.get_prev_state()),
            horizontal,
            vertical,
        }
    }
}
