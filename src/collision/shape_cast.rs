use crate::collision::{ContactBuffer, ContactFilter};
use crate::math::Vector2;
use crate::shapes::BoxShape;

/// A swept shape query against scene geometry.
///
/// This is the seam to the collision backend. The resolver calls it
/// synchronously and only reads the contacts written into `hits`.
pub trait ShapeCast {
    /// Sweeps `shape`, centered at `origin`, along the unit vector `direction`
    /// for at most `max_distance`, writing every surface touched along the
    /// way into `hits`.
    ///
    /// The resolver hands over an empty `hits` on every call, so
    /// implementations only append. Colliders the filter rejects
    /// must not be reported. Colliders already overlapping the shape at the
    /// start of the sweep are reported with a distance of zero.
    fn cast(
        &self,
        shape: &BoxShape,
        origin: Vector2,
        direction: Vector2,
        max_distance: f32,
        filter: &ContactFilter,
        hits: &mut ContactBuffer,
    );
}

impl<T: ShapeCast + ?Sized> ShapeCast for &T {
    fn cast(
        &self,
        shape: &BoxShape,
        origin: Vector2,
        direction: Vector2,
        max_distance: f32,
        filter: &ContactFilter,
        hits: &mut ContactBuffer,
    ) {
        (**self).cast(shape, origin, direction, max_distance, filter, hits)
    }
}
