use crate::core::SubjectHandle;
use crate::math::Vector2;
use crate::policies::InputSnapshot;

/// Read-only view of a subject handed to its policy each tick.
///
/// `grounded` and `velocity` describe the end of the previous tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyContext {
    /// The subject's velocity
    pub velocity: Vector2,

    /// Whether the subject stood on ground last tick
    pub grounded: bool,

    /// Gravity currently acting on the subject
    pub gravity: Vector2,

    /// The subject's ground normal
    pub ground_normal: Vector2,
}

/// What a policy wants the integrator to do this tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VelocityCommand {
    /// Desired horizontal velocity, overwriting the current one
    pub target_x: f32,

    /// Replace the vertical velocity before integrating (e.g. a jump)
    pub vertical_velocity: Option<f32>,

    /// Replace the gravity acting on the subject from this tick on
    pub gravity: Option<Vector2>,
}

impl VelocityCommand {
    /// A command that only sets the horizontal target
    pub fn horizontal(target_x: f32) -> Self {
        Self {
            target_x,
            ..Self::default()
        }
    }
}

/// Values handed to the presentation layer after each tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PresentationFrame {
    /// Whether the subject is standing on ground
    pub grounded: bool,

    /// `|velocity.x| / max_speed`
    pub normalized_horizontal_speed: f32,

    /// Whether the sprite should be mirrored
    pub flip_horizontal: bool,
}

/// One-way consumer of presentation frames
pub trait PresentationSink {
    /// Receives the frame for one subject
    fn present(&mut self, subject: SubjectHandle, frame: PresentationFrame);
}

impl PresentationSink for Vec<(SubjectHandle, PresentationFrame)> {
    fn present(&mut self, subject: SubjectHandle, frame: PresentationFrame) {
        self.push((subject, frame));
    }
}

/// Computes a subject's desired velocity from input, once per fixed tick
pub trait VelocityPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the name of the policy
    fn name(&self) -> &str;

    /// Called once when the subject is spawned with the gravity it would get
    /// by default; returns the gravity the subject should start with.
    fn on_spawn(&mut self, gravity: Vector2) -> Vector2 {
        gravity
    }

    /// Decides this tick's horizontal target and any vertical overrides
    fn compute_velocity(&mut self, input: &InputSnapshot, context: &PolicyContext) -> VelocityCommand;

    /// Builds the frame for the presentation layer
    fn presentation(&self, context: &PolicyContext) -> PresentationFrame {
        PresentationFrame {
            grounded: context.grounded,
            ..PresentationFrame::default()
        }
    }
}

/// A policy that never moves on its own; the subject only falls and slides
#[derive(Debug, Clone, Copy, Default)]
pub struct PassivePolicy;

impl VelocityPolicy for PassivePolicy {
    fn name(&self) -> &str {
        "Passive"
    }

    fn compute_velocity(&mut self, _input: &InputSnapshot, _context: &PolicyContext) -> VelocityCommand {
        VelocityCommand::default()
    }
}
