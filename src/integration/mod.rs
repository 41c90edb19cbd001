mod resolver;
mod integrator;

pub use self::resolver::{MovementResolver, ResolveOutcome};
pub use self::integrator::{slope_adjusted_speed, MotionIntegrator, TickReport};
