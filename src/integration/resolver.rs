use log::trace;

use crate::bodies::KinematicBody;
use crate::collision::{ContactBuffer, ContactClassifier, ContactKind, ShapeCast};
use crate::core::MotionConfig;
use crate::math::Vector2;

/// What one resolver call did
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolveOutcome {
    /// Length of the displacement asked for
    pub requested: f32,

    /// Distance actually travelled
    pub travelled: f32,

    /// Contacts reported by the cast
    pub contacts: usize,

    /// Contacts the cast could not fit in the buffer
    pub dropped_contacts: usize,

    /// True when the displacement was too small to cast
    pub skipped: bool,
}

impl ResolveOutcome {
    /// Returns whether some surface shortened the move
    pub fn was_blocked(&self) -> bool {
        !self.skipped && self.travelled < self.requested
    }
}

/// Moves a body as far as it safely can along one displacement, clipping its
/// velocity against every blocking surface on the way.
#[derive(Debug, Clone)]
pub struct MovementResolver {
    /// Contact labelling thresholds
    classifier: ContactClassifier,

    /// Displacements at or below this are not cast
    min_move_distance: f32,

    /// Skin subtracted from every contact distance
    shell_radius: f32,

    /// Scratch contact buffer, refilled on every call
    hits: ContactBuffer,
}

impl MovementResolver {
    /// Creates a resolver from the simulation configuration
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            classifier: config.classifier(),
            min_move_distance: config.min_move_distance,
            shell_radius: config.shell_radius,
            hits: ContactBuffer::new(),
        }
    }

    /// Returns the classifier used to label contacts
    pub fn classifier(&self) -> &ContactClassifier {
        &self.classifier
    }

    /// Moves `body` along `displacement`.
    ///
    /// `y_movement` marks the vertical pass: only then does a ground contact
    /// replace the body's ground normal, and its normal loses the x component
    /// before clipping so the body is not pushed sideways down a slope.
    pub fn resolve<B: ShapeCast + ?Sized>(
        &mut self,
        body: &mut KinematicBody,
        backend: &B,
        displacement: Vector2,
        y_movement: bool,
    ) -> ResolveOutcome {
        let (direction, requested) = match displacement.direction_and_length() {
            Some((direction, length)) if length > self.min_move_distance => (direction, length),
            _ => {
                return ResolveOutcome {
                    requested: displacement.length(),
                    skipped: true,
                    ..ResolveOutcome::default()
                };
            }
        };

        self.hits.clear();
        backend.cast(
            body.get_shape(),
            body.get_position(),
            direction,
            requested + self.shell_radius,
            body.get_filter(),
            &mut self.hits,
        );

        if self.hits.dropped() > 0 {
            trace!(
                "contact buffer full, {} contact(s) ignored",
                self.hits.dropped()
            );
        }

        let mut distance = requested;
        for contact in self.hits.iter() {
            let mut normal = contact.normal;

            let kind = self.classifier.classify(normal);
            body.state_mut().record(kind);

            if kind == ContactKind::Ground && y_movement {
                body.set_ground_normal(normal);
                normal.x = 0.0;
            }

            let velocity = body.velocity_mut();
            let projection = velocity.dot(&normal);
            if projection < 0.0 {
                *velocity -= normal * projection;
            }

            let allowed = (contact.distance - self.shell_radius).max(0.0);
            distance = distance.min(allowed);
        }

        body.translate(direction * distance);

        ResolveOutcome {
            requested,
            travelled: distance,
            contacts: self.hits.len(),
            dropped_contacts: self.hits.dropped(),
            skipped: false,
        }
    }
}
