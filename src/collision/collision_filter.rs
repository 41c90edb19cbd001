use bitflags::bitflags;

use crate::error::MotionError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

bitflags! {
    /// A bit mask of collision layers. A collider belongs to exactly one layer;
    /// masks combine several.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
    pub struct CollisionGroup: u32 {
        /// Default layer
        const DEFAULT   = 0x00000001;

        /// Level geometry
        const STATIC    = 0x00000002;

        /// Moving platforms
        const PLATFORM  = 0x00000004;

        /// Player characters
        const PLAYER    = 0x00000008;

        /// Non-player characters
        const ENEMY     = 0x00000010;

        /// Pickups and other trigger volumes
        const PICKUP    = 0x00000020;

        /// All layers
        const ALL       = 0xFFFFFFFF;
    }
}

/// Type alias for a collision mask (what layers this subject collides with)
pub type CollisionMask = CollisionGroup;

/// Number of distinct layers a [`CollisionGroup`] can express
pub const LAYER_COUNT: usize = 32;

/// Filter applied to every shape cast a subject issues.
///
/// Built once at subject construction and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ContactFilter {
    /// Skip colliders flagged as triggers
    pub ignore_triggers: bool,

    /// Layers the cast may report
    pub layer_mask: CollisionMask,
}

impl Default for ContactFilter {
    fn default() -> Self {
        Self {
            ignore_triggers: true,
            layer_mask: CollisionMask::ALL,
        }
    }
}

impl ContactFilter {
    /// Creates a filter from an explicit mask
    pub fn new(layer_mask: CollisionMask, ignore_triggers: bool) -> Self {
        Self {
            ignore_triggers,
            layer_mask,
        }
    }

    /// Builds the filter for a subject on `layer`, using the layer matrix to
    /// decide which layers it collides with. Triggers are always ignored.
    pub fn for_layer(matrix: &LayerMatrix, layer: CollisionGroup) -> Result<Self> {
        Ok(Self::new(matrix.collision_mask(layer)?, true))
    }

    /// Returns whether a collider on `group` passes this filter
    #[inline]
    pub fn accepts(&self, group: CollisionGroup, is_trigger: bool) -> bool {
        if is_trigger && self.ignore_triggers {
            return false;
        }
        self.layer_mask.intersects(group)
    }
}

/// Symmetric layer-vs-layer collision matrix.
///
/// Every pair of layers collides unless explicitly disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct LayerMatrix {
    /// Collision mask for each layer index
    masks: [CollisionMask; LAYER_COUNT],
}

impl Default for LayerMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerMatrix {
    /// Creates a matrix where every layer collides with every other
    pub fn new() -> Self {
        Self {
            masks: [CollisionMask::ALL; LAYER_COUNT],
        }
    }

    /// Enables or disables collision between two layers (in both directions)
    pub fn set_collision(&mut self, a: CollisionGroup, b: CollisionGroup, enabled: bool) -> Result<()> {
        let index_a = layer_index(a)?;
        let index_b = layer_index(b)?;

        self.masks[index_a].set(b, enabled);
        self.masks[index_b].set(a, enabled);

        Ok(())
    }

    /// Returns whether two layers collide
    pub fn collides(&self, a: CollisionGroup, b: CollisionGroup) -> Result<bool> {
        Ok(self.masks[layer_index(a)?].intersects(b))
    }

    /// Returns the mask of layers that `layer` collides with
    pub fn collision_mask(&self, layer: CollisionGroup) -> Result<CollisionMask> {
        Ok(self.masks[layer_index(layer)?])
    }
}

/// Returns the bit index of a single-layer group
fn layer_index(layer: CollisionGroup) -> Result<usize> {
    if layer.bits().count_ones() != 1 {
        return Err(MotionError::InvalidParameter(format!(
            "expected exactly one collision layer, got {:#010x}",
            layer.bits()
        )));
    }
    Ok(layer.bits().trailing_zeros() as usize)
}
