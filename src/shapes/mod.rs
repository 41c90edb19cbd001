pub mod box_shape;
pub mod convex_polygon;

pub use self::box_shape::BoxShape;
pub use self::convex_polygon::ConvexPolygon;
