mod input;
mod policy;
mod player;

pub use self::input::{ButtonState, InputSnapshot};
pub use self::policy::{
    PassivePolicy, PolicyContext, PresentationFrame, PresentationSink, VelocityCommand,
    VelocityPolicy,
};
pub use self::player::{JumpCutMode, PlayerConfig, PlayerPolicy, VerticalPhase};
