//! Host-fed sensor registries.
//!
//! The physics host records grabs and knockouts here between ticks; during a
//! tick the registries answer the sensor polls for every agent at once,
//! read-only.  Both are plain FxHash sets — membership is the entire model.

use rustc_hash::FxHashSet;

use roam_behavior::{GraspSensor, ThreatSensor};
use roam_core::{AgentId, PartId};

// ── GraspState ────────────────────────────────────────────────────────────────

/// Which physical parts are currently held by external actors.
#[derive(Default)]
pub struct GraspState {
    held: FxHashSet<PartId>,
}

impl GraspState {
    /// Record that an actor took hold of `part`.
    pub fn grab(&mut self, part: PartId) {
        self.held.insert(part);
    }

    /// Record that `part` was let go.
    pub fn release(&mut self, part: PartId) {
        self.held.remove(&part);
    }

    /// Drop every recorded grasp.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

impl GraspSensor for GraspState {
    fn is_held(&self, part: PartId) -> bool {
        self.held.contains(&part)
    }
}

// ── ThreatState ───────────────────────────────────────────────────────────────

/// Which agents are currently unconscious from threat contacts.
///
/// The host owns the duration: agents stay down exactly as long as their
/// entry stays in the set.
#[derive(Default)]
pub struct ThreatState {
    unconscious: FxHashSet<AgentId>,
}

impl ThreatState {
    pub fn knock_out(&mut self, agent: AgentId) {
        self.unconscious.insert(agent);
    }

    pub fn restore(&mut self, agent: AgentId) {
        self.unconscious.remove(&agent);
    }

    pub fn clear(&mut self) {
        self.unconscious.clear();
    }

    pub fn down_count(&self) -> usize {
        self.unconscious.len()
    }
}

impl ThreatSensor for ThreatState {
    fn is_unconscious(&self, agent: AgentId) -> bool {
        self.unconscious.contains(&agent)
    }
}
