//! Walkable-surface queries: the [`NavMesh`] trait and a room-graph-backed
//! reference implementation.
//!
//! # Pluggability
//!
//! The behavior controller plans paths exclusively through this trait, so a
//! host engine swaps in its real navigation mesh without touching any
//! framework crate.  [`DoorwayNav`] is the coarse fallback for hosts that
//! have no mesh: every point inside a room rectangle counts as walkable, and
//! paths run straight corner-to-corner through the BFS door sequence.

use glam::Vec3;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use roam_core::math::flat_distance;
use roam_core::RoomId;

use crate::graph::RoomGraph;

// ── NavMesh trait ─────────────────────────────────────────────────────────────

/// Fine-grained navigation queries consumed by the behavior controller.
///
/// # Contract
///
/// - `sample_position` snaps an arbitrary point to the nearest walkable
///   ground within `max_radius`, or reports failure.
/// - `compute_path` returns the corner polyline between two *walkable*
///   points.  The first corner is the start position itself; callers that
///   want "corners still ahead" drop it.  `None` means no valid path.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: the simulation's agent tick phase
/// may run on a thread pool, and all agents share one instance read-only.
pub trait NavMesh: Send + Sync {
    /// Snap `point` to walkable ground within `max_radius` of it.
    fn sample_position(&self, point: Vec3, max_radius: f32) -> Option<Vec3>;

    /// Ordered corner sequence from `from` to `to`, starting with `from`.
    fn compute_path(&self, from: Vec3, to: Vec3) -> Option<Vec<Vec3>>;
}

// ── R-tree room entry ─────────────────────────────────────────────────────────

/// Entry stored in the room-snap R-tree: a room's ground rectangle with its
/// `RoomId`.
#[derive(Clone)]
struct RoomRect {
    min: [f32; 2], // [x_min, z_min]
    max: [f32; 2], // [x_max, z_max]
    id:  RoomId,
}

impl RTreeObject for RoomRect {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

impl PointDistance for RoomRect {
    /// Squared distance from `point` to the rectangle (zero inside it).
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = (self.min[0] - point[0]).max(0.0).max(point[0] - self.max[0]);
        let dz = (self.min[1] - point[1]).max(0.0).max(point[1] - self.max[1]);
        dx * dx + dz * dz
    }
}

// ── DoorwayNav ────────────────────────────────────────────────────────────────

/// [`NavMesh`] implementation backed purely by a [`RoomGraph`].
///
/// Sampling clamps points into the nearest room rectangle; paths are the
/// door positions of the shortest door sequence, bracketed by the two
/// endpoints.  Good enough for headless simulation and for scenes whose
/// rooms are genuinely open rectangles; a real mesh beats it everywhere else.
pub struct DoorwayNav {
    graph:    RoomGraph,
    snap_idx: RTree<RoomRect>,
}

impl DoorwayNav {
    /// Wrap `graph`, bulk-loading the R-tree used for nearest-room snapping.
    pub fn new(graph: RoomGraph) -> Self {
        let entries: Vec<RoomRect> = graph
            .rooms()
            .map(|(id, room)| RoomRect {
                min: [room.bounds.x_min, room.bounds.z_min],
                max: [room.bounds.x_max, room.bounds.z_max],
                id,
            })
            .collect();
        let snap_idx = RTree::bulk_load(entries);
        Self { graph, snap_idx }
    }

    /// The underlying room graph (for diagnostics and direct routing).
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// Nearest room rectangle to `point`, by ground-plane distance.
    fn nearest_room(&self, point: Vec3) -> Option<RoomId> {
        self.snap_idx
            .nearest_neighbor(&[point.x, point.z])
            .map(|r| r.id)
    }
}

impl NavMesh for DoorwayNav {
    fn sample_position(&self, point: Vec3, max_radius: f32) -> Option<Vec3> {
        // Inside a room: already walkable, just drop to ground level.
        if self.graph.room_of(point).is_some() {
            return Some(Vec3::new(point.x, 0.0, point.z));
        }

        // Outside: clamp into the nearest rectangle, accept within radius.
        let room = self.nearest_room(point)?;
        let clamped = self.graph.room(room)?.bounds.clamp(point);
        if flat_distance(point, clamped) <= max_radius {
            Some(clamped)
        } else {
            None
        }
    }

    fn compute_path(&self, from: Vec3, to: Vec3) -> Option<Vec<Vec3>> {
        let route = self.graph.shortest_door_path(from, to).ok()?;

        let mut corners = Vec::with_capacity(route.door_count() + 2);
        corners.push(Vec3::new(from.x, 0.0, from.z));
        for door in route.positions(&self.graph) {
            corners.push(Vec3::new(door.x, 0.0, door.z));
        }
        corners.push(Vec3::new(to.x, 0.0, to.z));
        Some(corners)
    }
}
