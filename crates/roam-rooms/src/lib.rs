//! `roam-rooms` — coarse spatial model for the `rust_roam` framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`graph`]   | `RoomBounds`, `Room`, `Door`, `RoomGraph`, `RoomGraphBuilder`  |
//! | [`router`]  | `DoorRoute` + BFS `shortest_door_path` / `route_rooms`         |
//! | [`nav`]     | `NavMesh` trait, `DoorwayNav` room-graph-backed reference impl |
//! | [`layout`]  | CSV room/door layout loader                                    |
//! | [`error`]   | `RoomsError`, `RoomsResult<T>`                                 |
//!
//! # Two levels of navigation
//!
//! The room graph answers *coarse* questions: which room contains a point,
//! and which doors connect two rooms.  Fine-grained walkable-surface queries
//! go through the [`NavMesh`] trait, which a host engine implements against
//! its real navigation mesh.  [`DoorwayNav`] implements the same trait on top
//! of the room graph alone — every point inside a room rectangle is treated
//! as walkable and paths run straight corner-to-corner through the door
//! sequence — so headless runs and hosts without a mesh still navigate.

pub mod error;
pub mod graph;
pub mod layout;
pub mod nav;
pub mod router;


pub use error::{RoomsError, RoomsResult};
pub use graph::{Door, Room, RoomBounds, RoomGraph, RoomGraphBuilder};
pub use layout::{load_layout_csv, load_layout_reader};
pub use nav::{DoorwayNav, NavMesh};
pub use router::DoorRoute;
