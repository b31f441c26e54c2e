//! CSV room/door layout loader.
//!
//! # CSV format
//!
//! Two files, one row per room / per door.  **Row order is significant** —
//! it becomes declaration order, which drives containment tie-breaks and BFS
//! determinism (see [`crate::graph`]).
//!
//! `rooms.csv`:
//!
//! ```csv
//! x_min,x_max,z_min,z_max
//! -8,8,-6,6
//! -8,8,6,18
//! ```
//!
//! `doors.csv` (`room_a`/`room_b` are zero-based row indices into
//! `rooms.csv`):
//!
//! ```csv
//! room_a,room_b,x,y,z
//! 0,1,0,0,6
//! ```

use std::io::Read;
use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use roam_core::RoomId;

use crate::graph::{RoomGraph, RoomGraphBuilder};
use crate::RoomsError;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RoomRecord {
    x_min: f32,
    x_max: f32,
    z_min: f32,
    z_max: f32,
}

#[derive(Deserialize)]
struct DoorRecord {
    room_a: u32,
    room_b: u32,
    x:      f32,
    y:      f32,
    z:      f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RoomGraph`] from `rooms.csv` / `doors.csv` files.
pub fn load_layout_csv(rooms_path: &Path, doors_path: &Path) -> Result<RoomGraph, RoomsError> {
    let rooms = std::fs::File::open(rooms_path).map_err(RoomsError::Io)?;
    let doors = std::fs::File::open(doors_path).map_err(RoomsError::Io)?;
    load_layout_reader(rooms, doors)
}

/// Like [`load_layout_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s) or embedded layout data.
pub fn load_layout_reader<A: Read, B: Read>(
    rooms: A,
    doors: B,
) -> Result<RoomGraph, RoomsError> {
    let mut builder = RoomGraphBuilder::new();

    // ── Rooms, in row order ───────────────────────────────────────────────
    let mut room_reader = csv::Reader::from_reader(rooms);
    for result in room_reader.deserialize::<RoomRecord>() {
        let r = result.map_err(|e| RoomsError::Parse(e.to_string()))?;
        builder.add_room(r.x_min, r.x_max, r.z_min, r.z_max);
    }

    // ── Doors, in row order ───────────────────────────────────────────────
    let mut door_reader = csv::Reader::from_reader(doors);
    for result in door_reader.deserialize::<DoorRecord>() {
        let d = result.map_err(|e| RoomsError::Parse(e.to_string()))?;
        builder.add_door(
            RoomId(d.room_a),
            RoomId(d.room_b),
            Vec3::new(d.x, d.y, d.z),
        );
    }

    builder.build()
}
