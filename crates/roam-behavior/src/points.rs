//! Interest points — the static observation targets visitors walk between.

use glam::Vec3;

use roam_core::math::flat_normalize;

/// A point in the world a visitor can choose to visit and observe.
///
/// Built once from static scene data at load time and immutable thereafter.
/// The viewing position is computed at construction: the visitor stands
/// `stand_off` metres back along the facing direction and looks along it at
/// the exhibit.
///
/// Controllers reference points by [`PointId`][roam_core::PointId] into a
/// borrowed slice — the set is shared read-only, never copied or owned by
/// any one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestPoint {
    position:  Vec3,
    facing:    Vec3,
    stand_off: f32,
    view_pos:  Vec3,
}

impl InterestPoint {
    /// Build a point from raw scene data.
    ///
    /// `facing` is flattened and normalized; a facing with no horizontal
    /// component falls back to +Z so the point stays usable.
    pub fn new(position: Vec3, facing: Vec3, stand_off: f32) -> Self {
        let facing = flat_normalize(facing).unwrap_or(Vec3::Z);
        let view_pos = Vec3::new(
            position.x - facing.x * stand_off,
            0.0,
            position.z - facing.z * stand_off,
        );
        Self { position, facing, stand_off, view_pos }
    }

    /// The exhibit's world position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit direction the visitor faces while observing (toward the exhibit).
    pub fn facing(&self) -> Vec3 {
        self.facing
    }

    /// Stand-off distance between viewer and exhibit.
    pub fn stand_off(&self) -> f32 {
        self.stand_off
    }

    /// Where a visitor stands to observe: `stand_off` metres back along the
    /// facing direction, at ground level.
    pub fn view_pos(&self) -> Vec3 {
        self.view_pos
    }
}
