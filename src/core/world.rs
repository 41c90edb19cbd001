use log::{debug, warn};

use crate::bodies::KinematicBody;
use crate::collision::{Collider, CollisionGroup, CollisionScene, ContactFilter, LayerMatrix};
use crate::core::{
    ColliderHandle, EventQueue, HandleStorage, MotionConfig, PlatformHandle, SubjectHandle,
    TransitionEvent, WaypointEvent,
};
use crate::error::MotionError;
use crate::integration::{MotionIntegrator, TickReport};
use crate::math::Vector2;
use crate::platforms::WaypointMover;
use crate::policies::{InputSnapshot, PolicyContext, PresentationSink, VelocityPolicy};
use crate::shapes::BoxShape;
use crate::Result;

/// A moving character: its body, the policy that drives it and its input
#[derive(Debug)]
pub struct Subject {
    /// The simulated body
    body: KinematicBody,

    /// Decides the body's velocity every tick
    policy: Box<dyn VelocityPolicy>,

    /// Input for the coming ticks; edges are consumed by the first one
    input: InputSnapshot,

    /// Scale applied to the world gravity at spawn
    gravity_modifier: f32,

    /// What the most recent tick produced
    last_report: Option<TickReport>,
}

impl Subject {
    /// Returns the subject's body
    pub fn get_body(&self) -> &KinematicBody {
        &self.body
    }

    /// Returns the subject's policy
    pub fn get_policy(&self) -> &dyn VelocityPolicy {
        self.policy.as_ref()
    }

    /// Returns the pending input
    pub fn get_input(&self) -> InputSnapshot {
        self.input
    }

    /// Returns the gravity modifier the subject was spawned with
    pub fn get_gravity_modifier(&self) -> f32 {
        self.gravity_modifier
    }

    /// Returns the report of the most recent tick, if any ran yet
    pub fn get_last_report(&self) -> Option<&TickReport> {
        self.last_report.as_ref()
    }

    /// The read-only view handed to the policy
    pub fn context(&self) -> PolicyContext {
        PolicyContext {
            velocity: self.body.get_velocity(),
            grounded: self.body.is_grounded(),
            gravity: self.body.get_gravity(),
            ground_normal: self.body.get_ground_normal(),
        }
    }
}

/// A scene collider moved along waypoints
#[derive(Debug, Clone)]
pub struct Platform {
    /// Drives the collider's position
    mover: WaypointMover,

    /// The collider being moved
    collider: ColliderHandle,
}

impl Platform {
    /// Returns the waypoint mover
    pub fn get_mover(&self) -> &WaypointMover {
        &self.mover
    }

    /// Returns the collider the platform moves
    pub fn get_collider(&self) -> ColliderHandle {
        self.collider
    }
}

/// Owns the scene, every subject and every platform, and steps them with a
/// fixed time step.
///
/// Each tick moves all platforms first and then all subjects in ascending
/// handle order. Subjects standing on a platform are not carried by it.
pub struct MotionWorld {
    /// Configuration for the simulation
    config: MotionConfig,

    /// Which layers collide with which
    layers: LayerMatrix,

    /// Static and platform geometry
    scene: CollisionScene,

    /// All subjects in the world
    subjects: HandleStorage<SubjectHandle, Subject>,

    /// All moving platforms in the world
    platforms: HandleStorage<PlatformHandle, Platform>,

    /// Advances subjects
    integrator: MotionIntegrator,

    /// Events produced by the last call to `step`
    events: EventQueue,

    /// Optional consumer of presentation frames
    sink: Option<Box<dyn PresentationSink>>,

    /// Frame time not yet simulated
    accumulator: f32,

    /// The total elapsed simulation time
    time: f32,
}

impl Default for MotionWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionWorld {
    /// Creates a new world with default settings
    pub fn new() -> Self {
        let config = MotionConfig::default();
        Self {
            integrator: MotionIntegrator::new(&config),
            config,
            layers: LayerMatrix::new(),
            scene: CollisionScene::new(),
            subjects: HandleStorage::new(),
            platforms: HandleStorage::new(),
            events: EventQueue::new(),
            sink: None,
            accumulator: 0.0,
            time: 0.0,
        }
    }

    /// Creates a new world with the given configuration
    pub fn with_config(config: MotionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            integrator: MotionIntegrator::new(&config),
            config,
            ..Self::new()
        })
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Returns the simulation configuration
    pub fn get_config(&self) -> &MotionConfig {
        &self.config
    }

    /// Returns the layer matrix
    pub fn get_layers(&self) -> &LayerMatrix {
        &self.layers
    }

    /// Returns the layer matrix for editing.
    ///
    /// Filters are built when a subject spawns, so edits only affect subjects
    /// spawned afterwards.
    pub fn get_layers_mut(&mut self) -> &mut LayerMatrix {
        &mut self.layers
    }

    /// Returns the collision scene
    pub fn get_scene(&self) -> &CollisionScene {
        &self.scene
    }

    /// Returns the collision scene for editing
    pub fn get_scene_mut(&mut self) -> &mut CollisionScene {
        &mut self.scene
    }

    /// Adds a static collider to the scene
    pub fn add_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.scene.add_collider(collider)
    }

    /// Installs the consumer of presentation frames
    pub fn set_presentation_sink(&mut self, sink: Box<dyn PresentationSink>) {
        self.sink = Some(sink);
    }

    /// Removes and returns the presentation sink
    pub fn take_presentation_sink(&mut self) -> Option<Box<dyn PresentationSink>> {
        self.sink.take()
    }

    /// Spawns a subject.
    ///
    /// Its contact filter comes from the layer matrix row of `layer`, and its
    /// gravity is the world gravity scaled by `gravity_modifier` as adjusted
    /// by the policy's `on_spawn`.
    pub fn spawn_subject(
        &mut self,
        shape: BoxShape,
        position: Vector2,
        layer: CollisionGroup,
        gravity_modifier: f32,
        mut policy: Box<dyn VelocityPolicy>,
    ) -> Result<SubjectHandle> {
        if !position.is_finite() {
            return Err(MotionError::InvalidParameter(format!(
                "Subject position must be finite, got {}",
                position
            )));
        }
        if !gravity_modifier.is_finite() {
            return Err(MotionError::InvalidParameter(format!(
                "Gravity modifier must be finite, got {}",
                gravity_modifier
            )));
        }

        let filter = ContactFilter::for_layer(&self.layers, layer)?;
        let gravity = policy.on_spawn(self.config.gravity * gravity_modifier);
        let body = KinematicBody::new(shape, position, filter).with_gravity(gravity);

        let handle = self.subjects.add(Subject {
            body,
            policy,
            input: InputSnapshot::default(),
            gravity_modifier,
            last_report: None,
        });
        debug!("spawned subject {:?} at {}", handle, position);
        Ok(handle)
    }

    /// Removes a subject from the world
    pub fn remove_subject(&mut self, handle: SubjectHandle) -> Result<Subject> {
        self.subjects.remove(handle)
    }

    /// Gets a reference to a subject
    pub fn get_subject(&self, handle: SubjectHandle) -> Result<&Subject> {
        self.subjects.get(handle)
    }

    /// Teleports a subject without sweeping
    pub fn set_subject_position(&mut self, handle: SubjectHandle, position: Vector2) -> Result<()> {
        self.subjects.get_mut(handle)?.body.set_position(position);
        Ok(())
    }

    /// Sets the input a subject sees from the next tick on.
    ///
    /// Button edges are seen by the first tick only; the axis and held
    /// buttons persist until replaced.
    pub fn set_input(&mut self, handle: SubjectHandle, input: InputSnapshot) -> Result<()> {
        self.subjects.get_mut(handle)?.input = input;
        Ok(())
    }

    /// Adds a moving platform, placing `collider` at the mover's position
    pub fn add_platform(&mut self, mut collider: Collider, mover: WaypointMover) -> PlatformHandle {
        collider.set_position(mover.get_position());
        let collider = self.scene.add_collider(collider);
        self.platforms.add(Platform { mover, collider })
    }

    /// Removes a platform and its collider
    pub fn remove_platform(&mut self, handle: PlatformHandle) -> Result<Platform> {
        let platform = self.platforms.remove(handle)?;
        self.scene.remove_collider(platform.collider)?;
        Ok(platform)
    }

    /// Gets a reference to a platform
    pub fn get_platform(&self, handle: PlatformHandle) -> Result<&Platform> {
        self.platforms.get(handle)
    }

    /// Returns the events produced by the last call to `step` or `tick`
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns the event queue for draining
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Returns the number of subjects
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Returns the number of platforms
    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }

    /// Advances the world by `frame_time` seconds and returns how many fixed
    /// ticks ran.
    ///
    /// Time is accumulated and consumed in `time_step` increments, at most
    /// `max_substeps` per call. Time beyond that budget is dropped.
    pub fn step(&mut self, frame_time: f32) -> u32 {
        self.events.clear();

        if frame_time.is_finite() && frame_time > 0.0 {
            self.accumulator += frame_time;
        }

        let time_step = self.config.time_step;
        let mut steps = 0;
        while self.accumulator >= time_step && steps < self.config.max_substeps {
            self.run_tick(time_step);
            self.accumulator -= time_step;
            steps += 1;
        }

        if self.accumulator >= time_step {
            warn!(
                "substep budget of {} exhausted, dropping {:.4}s of simulation time",
                self.config.max_substeps,
                self.accumulator - self.accumulator % time_step
            );
            self.accumulator %= time_step;
        }

        steps
    }

    /// Runs exactly one fixed tick, ignoring the accumulator
    pub fn tick(&mut self) {
        self.events.clear();
        self.run_tick(self.config.time_step);
    }

    /// Removes every subject, platform and collider
    pub fn clear(&mut self) {
        self.subjects.clear();
        self.platforms.clear();
        self.scene = CollisionScene::new();
        self.events.clear();
        self.accumulator = 0.0;
    }

    fn run_tick(&mut self, dt: f32) {
        self.time += dt;

        for (handle, platform) in self.platforms.iter_mut() {
            let reached = platform.mover.current_index();
            let position = platform.mover.step(dt);

            if let Err(err) = self.scene.set_collider_position(platform.collider, position) {
                warn!("platform {:?} lost its collider: {}", handle, err);
            }

            if platform.mover.current_index() != reached {
                self.events.add_waypoint_event(WaypointEvent {
                    platform: handle,
                    waypoint: platform.mover.current_index(),
                    time: self.time,
                });
            }
        }

        for (handle, subject) in self.subjects.iter_mut() {
            let context = subject.context();
            let command = subject.policy.compute_velocity(&subject.input, &context);
            let report = self
                .integrator
                .step(&mut subject.body, &command, &self.scene, dt);

            subject.input = subject.input.without_edges();
            subject.last_report = Some(report);

            if !report.transitions.is_empty() {
                debug!(
                    "{} subject {:?}: {:?}",
                    subject.policy.name(),
                    handle,
                    report.transitions
                );
                self.events.add_transition_event(TransitionEvent {
                    subject: handle,
                    transitions: report.transitions,
                    time: self.time,
                });
            }
        }

        if let Some(sink) = self.sink.as_mut() {
            for (handle, subject) in self.subjects.iter() {
                sink.present(handle, subject.policy.presentation(&subject.context()));
            }
        }
    }
}
