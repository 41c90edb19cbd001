use crate::math::{Aabb, Vector2};
use crate::error::MotionError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A convex polygon in local space, used for static and kinematic scene geometry.
///
/// Two vertices describe a line segment (a thin ledge). Three or more describe a
/// closed convex polygon; convexity is not checked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ConvexPolygon {
    /// The vertices of the polygon in order
    vertices: Vec<Vector2>,

    /// Unit edge normals used as separating axes (duplicates removed)
    axes: Vec<Vector2>,

    /// The local bounds of the polygon
    local_bounds: Aabb,
}

impl ConvexPolygon {
    /// Creates a polygon from an ordered list of vertices
    pub fn new(vertices: Vec<Vector2>) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(MotionError::InvalidParameter(format!(
                "a polygon needs at least 2 vertices, got {}",
                vertices.len()
            )));
        }
        if let Some(bad) = vertices.iter().find(|v| !v.is_finite()) {
            return Err(MotionError::InvalidParameter(format!(
                "polygon vertex {} is not finite",
                bad
            )));
        }

        let edge_count = if vertices.len() == 2 { 1 } else { vertices.len() };
        let mut axes: Vec<Vector2> = Vec::with_capacity(edge_count);
        for i in 0..edge_count {
            let edge = vertices[(i + 1) % vertices.len()] - vertices[i];
            let axis = edge.perpendicular().normalize_or_zero();
            if axis.is_zero() {
                continue;
            }
            // Parallel edges share a separating axis
            if axes.iter().any(|a| a.cross(&axis).abs() < 1.0e-5) {
                continue;
            }
            axes.push(axis);
        }

        if axes.is_empty() {
            return Err(MotionError::InvalidParameter(
                "polygon is degenerate (all vertices coincide)".to_string(),
            ));
        }

        let local_bounds = Aabb::from_points(&vertices).ok_or_else(|| {
            MotionError::InvalidParameter("polygon has no vertices".to_string())
        })?;

        Ok(Self {
            vertices,
            axes,
            local_bounds,
        })
    }

    /// Creates an axis-aligned rectangle centered on the local origin
    pub fn rectangle(half_extents: Vector2) -> Result<Self> {
        let h = half_extents;
        Self::new(vec![
            Vector2::new(-h.x, -h.y),
            Vector2::new(h.x, -h.y),
            Vector2::new(h.x, h.y),
            Vector2::new(-h.x, h.y),
        ])
    }

    /// Creates a line segment between two local points
    pub fn segment(a: Vector2, b: Vector2) -> Result<Self> {
        Self::new(vec![a, b])
    }

    /// Creates a right-triangle ramp whose base runs from `base_start` along +x
    /// for `width`, rising to `height` at the high end.
    ///
    /// A negative `width` produces a ramp rising towards -x.
    pub fn ramp(base_start: Vector2, width: f32, height: f32) -> Result<Self> {
        let base_end = base_start + Vector2::new(width, 0.0);
        let top = base_end + Vector2::new(0.0, height);
        Self::new(vec![base_start, base_end, top])
    }

    /// Creates a flat slab of the given thickness whose top surface passes through
    /// `anchor`, tilted by `angle` radians (counter-clockwise) and extending
    /// `half_length` to each side of the anchor along the surface.
    pub fn tilted_slab(anchor: Vector2, angle: f32, half_length: f32, thickness: f32) -> Result<Self> {
        let along = Vector2::unit_x().rotated(angle);
        let down = -Vector2::unit_y().rotated(angle) * thickness;
        let left = anchor - along * half_length;
        let right = anchor + along * half_length;
        Self::new(vec![left + down, right + down, right, left])
    }

    /// Returns the vertices of the polygon
    pub fn get_vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Returns the unit separating axes of the polygon
    pub fn get_axes(&self) -> &[Vector2] {
        &self.axes
    }

    /// Returns the bounds of the polygon in local space
    pub fn get_local_bounds(&self) -> Aabb {
        self.local_bounds
    }

    /// Returns the bounds of the polygon translated to `position`
    pub fn get_world_bounds(&self, position: Vector2) -> Aabb {
        self.local_bounds.translated(position)
    }

    /// Projects the polygon, translated to `position`, onto a unit axis
    pub fn project(&self, position: Vector2, axis: Vector2) -> (f32, f32) {
        let offset = axis.dot(&position);
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for vertex in &self.vertices {
            let p = axis.dot(vertex) + offset;
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }
}
