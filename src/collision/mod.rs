mod contact;
mod collision_filter;
mod shape_cast;
mod classifier;
pub mod scene;

pub use self::contact::{Contact, ContactBuffer, MAX_CONTACTS};
pub use self::collision_filter::{CollisionGroup, CollisionMask, ContactFilter, LayerMatrix, LAYER_COUNT};
pub use self::shape_cast::ShapeCast;
pub use self::classifier::{ContactClassifier, ContactKind, PositionState, StateTransitions};
pub use self::scene::{Collider, CollisionScene};
