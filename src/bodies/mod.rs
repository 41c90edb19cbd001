mod kinematic_body;

pub use self::kinematic_body::KinematicBody;
