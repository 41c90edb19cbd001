pub mod world;
pub mod config;
pub mod storage;
pub mod events;

pub use self::world::{MotionWorld, Platform, Subject};
pub use self::config::{GroundNormalPolicy, IntegrationMode, MotionConfig};
pub use self::storage::{Handle, HandleStorage};
pub use self::events::{EventQueue, TransitionEvent, WaypointEvent};

/// A unique identifier for a moving subject in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectHandle(pub(crate) u32);

/// A unique identifier for a collider in a collision scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderHandle(pub(crate) u32);

/// A unique identifier for a moving platform in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlatformHandle(pub(crate) u32);

impl Handle for SubjectHandle {
    fn from_raw(id: u32) -> Self {
        Self(id)
    }

    fn kind() -> &'static str {
        "Subject"
    }
}

impl Handle for ColliderHandle {
    fn from_raw(id: u32) -> Self {
        Self(id)
    }

    fn kind() -> &'static str {
        "Collider"
    }
}

impl Handle for PlatformHandle {
    fn from_raw(id: u32) -> Self {
        Self(id)
    }

    fn kind() -> &'static str {
        "Platform"
    }
}
