pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod integration;
pub mod policies;
pub mod platforms;

/// Re-export common types for easier usage
pub use crate::core::{MotionConfig, MotionWorld, SubjectHandle, ColliderHandle, PlatformHandle};
pub use crate::bodies::KinematicBody;
pub use crate::collision::{Collider, CollisionGroup, CollisionScene, ContactFilter, PositionState, ShapeCast};
pub use crate::integration::{MotionIntegrator, MovementResolver};
pub use crate::policies::{InputSnapshot, PlayerConfig, PlayerPolicy, VelocityPolicy};
pub use crate::platforms::WaypointMover;
pub use crate::math::Vector2;

/// Error types for the motion core
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum MotionError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("A waypoint path needs at least 2 waypoints, got {count}")]
        TooFewWaypoints { count: usize },
    }
}

/// Result type for motion core operations
pub type Result<T> = std::result::Result<T, error::MotionError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
