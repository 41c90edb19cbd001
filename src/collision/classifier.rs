use bitflags::bitflags;

use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How a subject is touching the world during the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PositionState {
    /// Standing on a ground-classified surface
    pub grounded: bool,

    /// Pressed against a wall on the subject's left (normal points +x)
    pub push_left: bool,

    /// Pressed against a wall on the subject's right (normal points -x)
    pub push_right: bool,

    /// Pressed against something below (set together with `grounded`)
    pub push_bottom: bool,

    /// Pressed against a ceiling
    pub push_top: bool,
}

impl PositionState {
    /// Clears every flag
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sets the flags implied by one classified contact
    pub fn record(&mut self, kind: ContactKind) {
        match kind {
            ContactKind::Ground => {
                self.grounded = true;
                self.push_bottom = true;
            }
            ContactKind::LeftWall => self.push_left = true,
            ContactKind::RightWall => self.push_right = true,
            ContactKind::Ceiling => self.push_top = true,
            ContactKind::Steep => {}
        }
    }

    /// Computes the edge transitions from `previous` to `self`
    pub fn transitions_from(&self, previous: &PositionState) -> StateTransitions {
        let mut transitions = StateTransitions::empty();

        let edges = [
            (previous.grounded, self.grounded, StateTransitions::LANDED, StateTransitions::LEFT_GROUND),
            (previous.push_left, self.push_left, StateTransitions::BEGAN_PUSH_LEFT, StateTransitions::ENDED_PUSH_LEFT),
            (previous.push_right, self.push_right, StateTransitions::BEGAN_PUSH_RIGHT, StateTransitions::ENDED_PUSH_RIGHT),
            (previous.push_top, self.push_top, StateTransitions::BEGAN_PUSH_TOP, StateTransitions::ENDED_PUSH_TOP),
        ];

        for (was, is, began, ended) in edges {
            match (was, is) {
                (false, true) => transitions.insert(began),
                (true, false) => transitions.insert(ended),
                _ => {}
            }
        }

        transitions
    }
}

bitflags! {
    /// Edge transitions of [`PositionState`] between two consecutive ticks
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct StateTransitions: u16 {
        /// Became grounded this tick
        const LANDED           = 0x0001;

        /// Was grounded last tick, is not now
        const LEFT_GROUND      = 0x0002;

        /// Started pushing against a wall on the left
        const BEGAN_PUSH_LEFT  = 0x0004;

        /// Stopped pushing against a wall on the left
        const ENDED_PUSH_LEFT  = 0x0008;

        /// Started pushing against a wall on the right
        const BEGAN_PUSH_RIGHT = 0x0010;

        /// Stopped pushing against a wall on the right
        const ENDED_PUSH_RIGHT = 0x0020;

        /// Hit a ceiling
        const BEGAN_PUSH_TOP   = 0x0040;

        /// Left a ceiling
        const ENDED_PUSH_TOP   = 0x0080;
    }
}

/// Label given to a contact by its normal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Flat enough to stand on
    Ground,

    /// Near-vertical surface on the subject's left
    LeftWall,

    /// Near-vertical surface on the subject's right
    RightWall,

    /// Downward-facing surface
    Ceiling,

    /// Too steep to stand on, not vertical enough to be a wall
    Steep,
}

/// Labels contacts by normal-angle thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ContactClassifier {
    /// A normal with `y` above this is ground
    pub min_ground_normal_y: f32,

    /// A normal with `|x|` above this is a wall
    pub min_wall_normal_x: f32,
}

impl ContactClassifier {
    /// Creates a classifier from the two thresholds
    pub fn new(min_ground_normal_y: f32, min_wall_normal_x: f32) -> Self {
        Self {
            min_ground_normal_y,
            min_wall_normal_x,
        }
    }

    /// Classifies a unit contact normal.
    ///
    /// Ground is tested first, so a corner normal that passes both the ground
    /// and a wall threshold counts as ground.
    pub fn classify(&self, normal: Vector2) -> ContactKind {
        if normal.y > self.min_ground_normal_y {
            ContactKind::Ground
        } else if normal.x > self.min_wall_normal_x {
            ContactKind::LeftWall
        } else if normal.x < -self.min_wall_normal_x {
            ContactKind::RightWall
        } else if normal.y < -self.min_ground_normal_y {
            ContactKind::Ceiling
        } else {
            ContactKind::Steep
        }
    }
}
