use crate::math::{Aabb, Vector2};
use crate::error::MotionError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// An axis-aligned box, the swept shape of every kinematic subject
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BoxShape {
    /// The half-extents of the box (half-width, half-height)
    half_extents: Vector2,
}

impl BoxShape {
    /// Creates a new box with the given half-extents
    pub fn new(half_extents: Vector2) -> Result<Self> {
        if !half_extents.is_finite() || half_extents.x <= 0.0 || half_extents.y <= 0.0 {
            return Err(MotionError::InvalidParameter(format!(
                "box half extents must be positive and finite, got {}",
                half_extents
            )));
        }

        Ok(Self { half_extents })
    }

    /// Creates a new box with the given full dimensions
    pub fn new_with_dimensions(width: f32, height: f32) -> Result<Self> {
        Self::new(Vector2::new(width * 0.5, height * 0.5))
    }

    /// Returns the half-extents of the box
    pub fn get_half_extents(&self) -> Vector2 {
        self.half_extents
    }

    /// Returns the full dimensions of the box
    pub fn get_dimensions(&self) -> Vector2 {
        self.half_extents * 2.0
    }

    /// Returns the world-space bounds of the box centered at `position`
    pub fn get_world_bounds(&self, position: Vector2) -> Aabb {
        Aabb::from_center_half_extents(position, self.half_extents)
    }

    /// Returns the half-width of the box projected onto a unit axis
    #[inline]
    pub fn projected_radius(&self, axis: Vector2) -> f32 {
        axis.x.abs() * self.half_extents.x + axis.y.abs() * self.half_extents.y
    }
}
