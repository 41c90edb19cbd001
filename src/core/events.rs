use crate::collision::StateTransitions;
use crate::core::{PlatformHandle, SubjectHandle};
use std::collections::VecDeque;

/// A subject's contact state changed during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionEvent {
    /// The subject whose state changed
    pub subject: SubjectHandle,

    /// What changed
    pub transitions: StateTransitions,

    /// Simulation time at the end of the tick
    pub time: f32,
}

/// A moving platform arrived at one of its waypoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointEvent {
    /// The platform
    pub platform: PlatformHandle,

    /// Index of the waypoint reached
    pub waypoint: usize,

    /// Simulation time at the end of the tick
    pub time: f32,
}

/// A queue of motion events, refilled by every call to `MotionWorld::step`
#[derive(Debug, Default)]
pub struct EventQueue {
    /// Contact state transitions
    transition_events: VecDeque<TransitionEvent>,

    /// Waypoint arrivals
    waypoint_events: VecDeque<WaypointEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            transition_events: VecDeque::new(),
            waypoint_events: VecDeque::new(),
        }
    }

    /// Adds a transition event to the queue
    pub fn add_transition_event(&mut self, event: TransitionEvent) {
        self.transition_events.push_back(event);
    }

    /// Adds a waypoint event to the queue
    pub fn add_waypoint_event(&mut self, event: WaypointEvent) {
        self.waypoint_events.push_back(event);
    }

    /// Gets the next transition event from the queue
    pub fn next_transition_event(&mut self) -> Option<TransitionEvent> {
        self.transition_events.pop_front()
    }

    /// Gets the next waypoint event from the queue
    pub fn next_waypoint_event(&mut self) -> Option<WaypointEvent> {
        self.waypoint_events.pop_front()
    }

    /// Returns whether there are any transition events in the queue
    pub fn has_transition_events(&self) -> bool {
        !self.transition_events.is_empty()
    }

    /// Returns whether there are any waypoint events in the queue
    pub fn has_waypoint_events(&self) -> bool {
        !self.waypoint_events.is_empty()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.transition_events.is_empty() && self.waypoint_events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.transition_events.clear();
        self.waypoint_events.clear();
    }

    /// Gets all transition events containing any of the given flags
    pub fn get_transition_events_with(&self, flags: StateTransitions) -> Vec<&TransitionEvent> {
        self.transition_events
            .iter()
            .filter(|e| e.transitions.intersects(flags))
            .collect()
    }

    /// Gets all transition events for a specific subject
    pub fn get_transition_events_for_subject(&self, subject: SubjectHandle) -> Vec<&TransitionEvent> {
        self.transition_events
            .iter()
            .filter(|e| e.subject == subject)
            .collect()
    }

    /// Gets all waypoint events for a specific platform
    pub fn get_waypoint_events_for_platform(&self, platform: PlatformHandle) -> Vec<&WaypointEvent> {
        self.waypoint_events
            .iter()
            .filter(|e| e.platform == platform)
            .collect()
    }
}
