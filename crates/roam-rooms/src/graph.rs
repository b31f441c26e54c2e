//! Room/door graph representation and builder.
//!
//! # Data layout
//!
//! Rooms and doors are stored in **declaration order** and indexed by
//! [`RoomId`] / [`DoorId`].  Adjacency is a per-room list of
//! `(neighbor, door)` pairs built once from the door list; each door
//! contributes both directions.  Order matters twice:
//!
//! - `room_of` assigns a point to the *first* room in declaration order whose
//!   bounds contain it (the tie-break when bounds touch on a shared wall).
//! - BFS visits neighbors in adjacency insertion order, which is door
//!   declaration order — so equally-short routes resolve deterministically.
//!
//! Containment is 2-D: only x and z are tested, y is ignored.  A balcony
//! point five metres above the floor still belongs to the room below it.

use glam::Vec3;

use roam_core::{DoorId, RoomId};

use crate::RoomsError;

// ── RoomBounds ────────────────────────────────────────────────────────────────

/// Axis-aligned room footprint on the ground plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoomBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl RoomBounds {
    pub fn new(x_min: f32, x_max: f32, z_min: f32, z_max: f32) -> Self {
        Self { x_min, x_max, z_min, z_max }
    }

    /// `true` when the point's x/z coordinates fall inside (or on) the bounds.
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.z >= self.z_min && p.z <= self.z_max
    }

    /// Geometric center at ground level.
    #[inline]
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.x_min + self.x_max) * 0.5,
            0.0,
            (self.z_min + self.z_max) * 0.5,
        )
    }

    /// Nearest point inside the bounds to `p`, at ground level.
    #[inline]
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.x_min, self.x_max),
            0.0,
            p.z.clamp(self.z_min, self.z_max),
        )
    }
}

// ── Room & Door ───────────────────────────────────────────────────────────────

/// One room of the scene.  Its `RoomId` is its position in the graph's room
/// list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Room {
    pub bounds: RoomBounds,
}

/// A door connecting two rooms, with its world position (used as a routing
/// waypoint).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Door {
    pub room_a:   RoomId,
    pub room_b:   RoomId,
    pub position: Vec3,
}

// ── RoomGraph ─────────────────────────────────────────────────────────────────

/// Static room/door topology, read-only after construction.
///
/// Do not construct directly; use [`RoomGraphBuilder`] (or the CSV loader in
/// [`crate::layout`]), which validates door indices and preserves
/// declaration order.
pub struct RoomGraph {
    rooms: Vec<Room>,
    doors: Vec<Door>,

    /// `adjacency[room]` = `(neighbor, door)` pairs in door-declaration order.
    adjacency: Vec<Vec<(RoomId, DoorId)>>,
}

impl RoomGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    // ── Element access ────────────────────────────────────────────────────

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn door(&self, id: DoorId) -> Option<&Door> {
        self.doors.get(id.index())
    }

    /// `(neighbor, door)` pairs for `room`, in door-declaration order.
    ///
    /// Returns an empty slice for an out-of-range id.
    pub fn doors_of(&self, room: RoomId) -> &[(RoomId, DoorId)] {
        self.adjacency
            .get(room.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterator over all rooms paired with their ids, in declaration order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.rooms
            .iter()
            .enumerate()
            .map(|(i, r)| (RoomId(i as u32), r))
    }

    // ── Containment queries ───────────────────────────────────────────────

    /// The first room in declaration order whose bounds contain `p`, or
    /// `None` when the point lies outside every room.
    pub fn room_of(&self, p: Vec3) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|r| r.bounds.contains(p))
            .map(|i| RoomId(i as u32))
    }

    /// Geometric center of `room` at ground level.
    ///
    /// Returns the origin for an out-of-range id — this query feeds
    /// diagnostics, not routing, so a sentinel beats an error path.
    pub fn room_center(&self, room: RoomId) -> Vec3 {
        self.rooms
            .get(room.index())
            .map(|r| r.bounds.center())
            .unwrap_or(Vec3::ZERO)
    }

    /// `true` when every room is reachable from room 0.
    ///
    /// The graph is expected connected by construction; routing surfaces a
    /// violation as [`crate::RoomsError::Disconnected`].
    pub fn is_connected(&self) -> bool {
        if self.rooms.is_empty() {
            return true;
        }
        let mut visited = vec![false; self.rooms.len()];
        let mut stack = vec![RoomId(0)];
        visited[0] = true;
        while let Some(room) = stack.pop() {
            for &(neighbor, _) in self.doors_of(room) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    stack.push(neighbor);
                }
            }
        }
        visited.iter().all(|&v| v)
    }

    pub(crate) fn from_parts(rooms: Vec<Room>, doors: Vec<Door>) -> Self {
        // Symmetric adjacency: each door contributes both directions, in
        // door-declaration order.
        let mut adjacency: Vec<Vec<(RoomId, DoorId)>> = vec![Vec::new(); rooms.len()];
        for (i, door) in doors.iter().enumerate() {
            let id = DoorId(i as u32);
            adjacency[door.room_a.index()].push((door.room_b, id));
            adjacency[door.room_b.index()].push((door.room_a, id));
        }
        Self { rooms, doors, adjacency }
    }
}

// ── RoomGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoomGraph`] incrementally, then call [`build`](Self::build).
///
/// Rooms and doors keep their insertion order; see the module docs for why
/// that order is load-bearing.
///
/// # Example
///
/// ```
/// use glam::Vec3;
/// use roam_rooms::RoomGraphBuilder;
///
/// let mut b = RoomGraphBuilder::new();
/// let lobby = b.add_room(-8.0, 8.0, -6.0, 6.0);
/// let hall  = b.add_room(-8.0, 8.0, 6.0, 18.0);
/// b.add_door(lobby, hall, Vec3::new(0.0, 0.0, 6.0));
/// let graph = b.build().unwrap();
/// assert_eq!(graph.room_count(), 2);
/// assert_eq!(graph.door_count(), 1);
/// ```
pub struct RoomGraphBuilder {
    rooms: Vec<Room>,
    doors: Vec<Door>,
}

impl RoomGraphBuilder {
    pub fn new() -> Self {
        Self { rooms: Vec::new(), doors: Vec::new() }
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    pub fn add_room(&mut self, x_min: f32, x_max: f32, z_min: f32, z_max: f32) -> RoomId {
        let id = RoomId(self.rooms.len() as u32);
        self.rooms.push(Room {
            bounds: RoomBounds::new(x_min, x_max, z_min, z_max),
        });
        id
    }

    /// Add a door between `a` and `b` at `position`.
    ///
    /// Room validity is checked in [`build`](Self::build), not here, so
    /// layouts can declare doors before all rooms when loaded from records.
    pub fn add_door(&mut self, a: RoomId, b: RoomId, position: Vec3) -> DoorId {
        let id = DoorId(self.doors.len() as u32);
        self.doors.push(Door { room_a: a, room_b: b, position });
        id
    }

    pub fn room_count(&self) -> usize { self.rooms.len() }
    pub fn door_count(&self) -> usize { self.doors.len() }

    /// Validate door indices and produce a [`RoomGraph`].
    ///
    /// A disconnected result is *not* an error here — partial layouts are
    /// legal while a scene streams in — but it is logged, because routing
    /// across the gap will fail at query time.
    pub fn build(self) -> Result<RoomGraph, RoomsError> {
        for (i, door) in self.doors.iter().enumerate() {
            for room in [door.room_a, door.room_b] {
                if room.index() >= self.rooms.len() {
                    return Err(RoomsError::DoorRoomOutOfRange { door: i, room });
                }
            }
        }

        let graph = RoomGraph::from_parts(self.rooms, self.doors);
        if !graph.is_connected() {
            tracing::warn!(
                rooms = graph.room_count(),
                doors = graph.door_count(),
                "room graph is not connected; cross-gap routing will fail"
            );
        }
        Ok(graph)
    }
}

impl Default for RoomGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
