mod waypoint_mover;

pub use self::waypoint_mover::WaypointMover;
