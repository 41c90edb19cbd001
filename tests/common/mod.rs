#![allow(dead_code)]

use std::cell::RefCell;

use platform_motion::collision::{Contact, ContactBuffer, ContactFilter, ShapeCast};
use platform_motion::math::Vector2;
use platform_motion::shapes::BoxShape;

/// Installs a test logger once; later calls are ignored
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A unit-square subject
pub fn unit_box() -> BoxShape {
    BoxShape::new(Vector2::new(0.5, 0.5)).unwrap()
}

/// A backend that reports a fixed set of surfaces.
///
/// A surface is reported by a cast when it faces the cast direction and lies
/// within the cast distance. Every cast is recorded.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    pub surfaces: Vec<Contact>,
    pub casts: RefCell<Vec<(Vector2, f32)>>,
}

impl ScriptedBackend {
    pub fn new(surfaces: Vec<Contact>) -> Self {
        Self {
            surfaces,
            casts: RefCell::new(Vec::new()),
        }
    }

    pub fn cast_count(&self) -> usize {
        self.casts.borrow().len()
    }
}

impl ShapeCast for ScriptedBackend {
    fn cast(
        &self,
        _shape: &BoxShape,
        _origin: Vector2,
        direction: Vector2,
        max_distance: f32,
        _filter: &ContactFilter,
        hits: &mut ContactBuffer,
    ) {
        hits.clear();
        self.casts.borrow_mut().push((direction, max_distance));
        for surface in &self.surfaces {
            if surface.distance <= max_distance && direction.dot(&surface.normal) < 0.0 {
                hits.push(*surface);
            }
        }
    }
}
