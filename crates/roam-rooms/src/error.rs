//! Spatial-subsystem error type.

use glam::Vec3;
use thiserror::Error;

use roam_core::RoomId;

/// Errors produced by `roam-rooms`.
#[derive(Debug, Error)]
pub enum RoomsError {
    /// The query point lies outside every room — an expected runtime
    /// condition; callers treat it as "no route".
    #[error("point ({:.2}, {:.2}) lies outside every room", .0.x, .0.z)]
    OutsideRooms(Vec3),

    /// Both rooms resolved but no door sequence links them.  The graph is
    /// expected connected by construction, so this indicates bad layout
    /// data, not a transient condition.
    #[error("no door sequence from {from} to {to} (disconnected graph)")]
    Disconnected { from: RoomId, to: RoomId },

    #[error("door {door} references out-of-range room {room}")]
    DoorRoomOutOfRange { door: usize, room: RoomId },

    #[error("layout parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RoomsResult<T> = Result<T, RoomsError>;
