#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// State of a digital button for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ButtonState {
    /// Went down this tick
    pub pressed: bool,

    /// Went up this tick
    pub released: bool,

    /// Is down
    pub held: bool,
}

impl ButtonState {
    /// A button that went down this tick
    pub fn just_pressed() -> Self {
        Self {
            pressed: true,
            released: false,
            held: true,
        }
    }

    /// A button that went up this tick
    pub fn just_released() -> Self {
        Self {
            pressed: false,
            released: true,
            held: false,
        }
    }

    /// A button held down since an earlier tick
    pub fn held() -> Self {
        Self {
            pressed: false,
            released: false,
            held: true,
        }
    }

    /// Returns the state with this tick's edges removed
    pub fn without_edges(self) -> Self {
        Self {
            pressed: false,
            released: false,
            held: self.held,
        }
    }
}

/// Per-tick input snapshot handed to a velocity policy
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct InputSnapshot {
    /// Horizontal axis in [-1, 1]
    pub horizontal: f32,

    /// The jump button
    pub jump: ButtonState,
}

impl InputSnapshot {
    /// Creates a snapshot, clamping the axis into range
    pub fn new(horizontal: f32, jump: ButtonState) -> Self {
        let horizontal = if horizontal.is_finite() {
            horizontal.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        Self { horizontal, jump }
    }

    /// Only a horizontal axis value
    pub fn axis(horizontal: f32) -> Self {
        Self::new(horizontal, ButtonState::default())
    }

    /// Returns the snapshot as it should be seen by any further tick in the
    /// same frame: axes and held buttons persist, edges fire only once.
    pub fn without_edges(self) -> Self {
        Self {
            horizontal: self.horizontal,
            jump: self.jump.without_edges(),
        }
    }
}
