//! Door-sequence routing over the room graph.
//!
//! # Why BFS, not Dijkstra
//!
//! Every door traversal costs the same — one door — so breadth-first order
//! already yields the minimum door count, with no priority queue.  Note that
//! minimum *door count* is not minimum walking distance; the fine-grained
//! navigation layer owns metric optimality.
//!
//! Ties between equally-short routes are broken by BFS's FIFO visitation
//! order, which follows adjacency insertion order, which is door declaration
//! order.  Callers that compare routes for equality can rely on this.

use std::collections::VecDeque;

use glam::Vec3;

use roam_core::{DoorId, RoomId};

use crate::graph::RoomGraph;
use crate::RoomsError;

// ── DoorRoute ─────────────────────────────────────────────────────────────────

/// The result of a routing query: the doors to pass through, in order from
/// source to destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoorRoute {
    /// Doors to traverse in order.  Empty when source and destination share
    /// a room.
    pub doors: Vec<DoorId>,
}

impl DoorRoute {
    /// `true` when no door needs to be crossed (same-room route).
    pub fn is_trivial(&self) -> bool {
        self.doors.is_empty()
    }

    /// Number of doors crossed.
    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// World positions of the route's doors, in traversal order.
    ///
    /// Skips ids the graph no longer knows — impossible for routes produced
    /// by the same graph.
    pub fn positions(&self, graph: &RoomGraph) -> Vec<Vec3> {
        self.doors
            .iter()
            .filter_map(|&d| graph.door(d).map(|door| door.position))
            .collect()
    }
}

// ── Routing queries ───────────────────────────────────────────────────────────

impl RoomGraph {
    /// Shortest door sequence between the rooms containing `from` and `to`.
    ///
    /// # Errors
    ///
    /// - [`RoomsError::OutsideRooms`] when either endpoint lies outside every
    ///   room — an expected runtime condition; callers treat it as "no route".
    /// - [`RoomsError::Disconnected`] when both rooms resolve but no door
    ///   sequence links them.  The graph is expected connected by
    ///   construction, so this is a data-integrity defect, not a condition
    ///   to retry.
    pub fn shortest_door_path(&self, from: Vec3, to: Vec3) -> Result<DoorRoute, RoomsError> {
        let from_room = self.room_of(from).ok_or(RoomsError::OutsideRooms(from))?;
        let to_room   = self.room_of(to).ok_or(RoomsError::OutsideRooms(to))?;
        self.route_rooms(from_room, to_room)
    }

    /// Shortest door sequence between two rooms (minimum door count).
    ///
    /// Same-room queries return an empty (trivial) route.
    pub fn route_rooms(&self, from: RoomId, to: RoomId) -> Result<DoorRoute, RoomsError> {
        if from == to {
            return Ok(DoorRoute { doors: Vec::new() });
        }

        let n = self.room_count();
        // parent_room[r] / parent_door[r] = how BFS first reached room r.
        let mut parent_room = vec![RoomId::INVALID; n];
        let mut parent_door = vec![DoorId::INVALID; n];
        let mut visited     = vec![false; n];

        let mut queue = VecDeque::new();
        visited[from.index()] = true;
        queue.push_back(from);

        while let Some(room) = queue.pop_front() {
            for &(neighbor, door) in self.doors_of(room) {
                if visited[neighbor.index()] {
                    continue;
                }
                visited[neighbor.index()] = true;
                parent_room[neighbor.index()] = room;
                parent_door[neighbor.index()] = door;

                if neighbor == to {
                    return Ok(reconstruct(&parent_room, &parent_door, from, to));
                }
                queue.push_back(neighbor);
            }
        }

        tracing::warn!(
            %from, %to,
            "no door sequence between rooms — graph violates the connectivity invariant"
        );
        Err(RoomsError::Disconnected { from, to })
    }
}

/// Walk parent pointers from `to` back to `from`, then reverse into
/// source→destination order.
fn reconstruct(
    parent_room: &[RoomId],
    parent_door: &[DoorId],
    from: RoomId,
    to:   RoomId,
) -> DoorRoute {
    let mut doors = Vec::new();
    let mut cur = to;
    while cur != from {
        doors.push(parent_door[cur.index()]);
        cur = parent_room[cur.index()];
    }
    doors.reverse();
    DoorRoute { doors }
}
