//! Visitor state enum and the per-walk waypoint sequence.

use glam::Vec3;

use roam_core::PointId;

// ── AgentState ────────────────────────────────────────────────────────────────

/// The finite states a visitor can be in.
///
/// Exactly one is active per tick.  The normal cycle is
/// `Idle → Walking → Observing → Idle`; `Grabbed` and `KnockedOut` are
/// sensor-dictated overrides layered on top of it, and `Fleeing` is the
/// recovery path out of both.
///
/// Timers live inside the variants and are re-randomized on every
/// (re-)entry — there is no cross-entry state to leak.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentState {
    /// Standing around, waiting out a randomized pause before picking the
    /// next interest point.
    Idle { remaining: f32 },

    /// Following a waypoint path toward `goal`'s viewing position.
    Walking { path: WaypointPath, goal: PointId },

    /// Holding a facing toward the visited point for a randomized duration.
    Observing { point: PointId, remaining: f32 },

    /// Hurrying toward a point away from the last recorded threat.
    Fleeing { target: Vec3, remaining: f32 },

    /// Unconscious.  Entirely passive; the threat-contact sensor owns the
    /// duration.
    KnockedOut,

    /// Held by an external actor.  Entirely passive; exits are handled by
    /// the override checks alone.
    Grabbed,
}

impl AgentState {
    /// Short lower-case label for logs and output rows.
    pub fn label(&self) -> &'static str {
        match self {
            AgentState::Idle { .. }      => "idle",
            AgentState::Walking { .. }   => "walking",
            AgentState::Observing { .. } => "observing",
            AgentState::Fleeing { .. }   => "fleeing",
            AgentState::KnockedOut       => "knocked_out",
            AgentState::Grabbed          => "grabbed",
        }
    }
}

// ── WaypointPath ──────────────────────────────────────────────────────────────

/// The corner sequence for one `Walking` episode, with a cursor over the
/// corner currently being walked toward.
///
/// Owned by the controller for the duration of the episode and discarded —
/// never reused — when the episode ends; a fresh path is planned on every
/// `Walking` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointPath {
    corners: Vec<Vec3>,
    cursor:  usize,
}

impl WaypointPath {
    /// Wrap an ordered corner list.  The caller has already dropped the
    /// planner's leading corner (the start position itself).
    pub fn new(corners: Vec<Vec3>) -> Self {
        Self { corners, cursor: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.corners.len()
    }

    /// The corner currently being walked toward, or `None` past the end.
    pub fn current(&self) -> Option<Vec3> {
        self.corners.get(self.cursor).copied()
    }

    /// Step the cursor to the next corner and return it.
    pub fn advance(&mut self) -> Option<Vec3> {
        self.cursor += 1;
        self.current()
    }

    /// Corners not yet reached, including the current one.
    pub fn remaining(&self) -> usize {
        self.corners.len().saturating_sub(self.cursor)
    }
}
