//! The reference museum layout: 6 rooms, 7 doors, 8 exhibits.
//!
//! The lobby is the hub with a door to each of its four neighbors; two
//! peripheral-to-peripheral doors (sculpture hall ↔ west gallery, east
//! gallery ↔ archive) give the far rooms second routes.
//!
//! ```text
//!   WestGallery | SculptureHall
//!   ------------+--------------
//!   Atrium      | Lobby  | EastGallery
//!               +--------+------------
//!               |     Archive
//! ```

use glam::Vec3;

use roam_behavior::InterestPoint;
use roam_rooms::{RoomGraph, RoomGraphBuilder};

/// Room names indexed by `RoomId`, for display only.
pub const ROOM_NAMES: [&str; 6] = [
    "Lobby",
    "SculptureHall",
    "WestGallery",
    "EastGallery",
    "Atrium",
    "Archive",
];

/// Build the 6-room / 7-door museum graph.
pub fn build_rooms() -> RoomGraph {
    let mut b = RoomGraphBuilder::new();

    let lobby     = b.add_room(-8.0, 8.0, -6.0, 6.0);
    let sculpture = b.add_room(-8.0, 8.0, 6.0, 18.0);
    let west      = b.add_room(-24.0, -8.0, 6.0, 18.0);
    let east      = b.add_room(8.0, 24.0, -6.0, 6.0);
    let atrium    = b.add_room(-24.0, -8.0, -6.0, 6.0);
    let archive   = b.add_room(-8.0, 24.0, -18.0, -6.0);

    // Hub doors first, then the two peripheral shortcuts.
    b.add_door(lobby, sculpture, Vec3::new(0.0, 0.0, 6.0));
    b.add_door(lobby, east,      Vec3::new(8.0, 0.0, 0.0));
    b.add_door(lobby, atrium,    Vec3::new(-8.0, 0.0, 0.0));
    b.add_door(lobby, archive,   Vec3::new(0.0, 0.0, -6.0));
    b.add_door(sculpture, west,  Vec3::new(-8.0, 0.0, 12.0));
    b.add_door(atrium, west,     Vec3::new(-16.0, 0.0, 6.0));
    b.add_door(east, archive,    Vec3::new(16.0, 0.0, -6.0));

    b.build().expect("museum layout is valid")
}

/// The eight exhibits.  Each entry is `(position, facing, stand_off)` —
/// facing points from the viewer toward the exhibit, so the computed viewing
/// spot lies inside the exhibit's room.
pub fn build_exhibits() -> Vec<InterestPoint> {
    let entries: [(Vec3, Vec3, f32); 8] = [
        // Lobby: information desk and the donor wall.
        (Vec3::new(0.0, 1.0, -3.0), Vec3::new(0.0, 0.0, -1.0), 1.5),
        (Vec3::new(6.0, 1.4, 4.0),  Vec3::new(1.0, 0.0, 0.0),  1.5),
        // Sculpture hall: two plinths along the walls.
        (Vec3::new(5.0, 1.2, 12.0),  Vec3::new(1.0, 0.0, 0.0),  1.8),
        (Vec3::new(-5.0, 1.2, 16.0), Vec3::new(-1.0, 0.0, 0.0), 1.8),
        // West gallery: the large canvas on the far wall.
        (Vec3::new(-22.0, 1.5, 12.0), Vec3::new(-1.0, 0.0, 0.0), 2.5),
        // East gallery: the tapestry.
        (Vec3::new(20.0, 1.5, 0.0), Vec3::new(1.0, 0.0, 0.0), 2.0),
        // Atrium: the fountain, viewed from the north.
        (Vec3::new(-16.0, 0.8, 0.0), Vec3::new(0.0, 0.0, 1.0), 2.0),
        // Archive: the manuscript case.
        (Vec3::new(8.0, 1.0, -16.0), Vec3::new(0.0, 0.0, -1.0), 1.5),
    ];

    entries.iter()
        .map(|&(position, facing, stand_off)| InterestPoint::new(position, facing, stand_off))
        .collect()
}
