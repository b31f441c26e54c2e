//! Sensor seams for the override states.
//!
//! Both sensors are polled once per tick through [`TickContext`]
//! [`crate::TickContext`]; the framework never subscribes to callbacks.  One
//! shared implementation serves every agent — the queries are keyed by
//! [`AgentId`] / [`PartId`].

use roam_core::{AgentId, PartId};

/// Reports momentary loss of consciousness from threat contacts.
pub trait ThreatSensor: Send + Sync {
    /// `true` while `agent` is unconscious.  The sensor owns the duration;
    /// the controller only polls.
    fn is_unconscious(&self, agent: AgentId) -> bool;
}

/// Reports which physical parts are currently held by external actors.
///
/// The controller checks each of its *own* part handles — a global "who
/// grasps what" registry answers for all agents at once.
pub trait GraspSensor: Send + Sync {
    /// `true` while any external actor holds `part`.
    fn is_held(&self, part: PartId) -> bool;
}

/// Sensors that never fire — for tests and disturbance-free scenes.
pub struct NullSensors;

impl ThreatSensor for NullSensors {
    fn is_unconscious(&self, _agent: AgentId) -> bool {
        false
    }
}

impl GraspSensor for NullSensors {
    fn is_held(&self, _part: PartId) -> bool {
        false
    }
}
