//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `RoamError` via `From` impls or keep them separate.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{AgentId, RoomId};

/// The top-level error type for `roam-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RoamError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `roam-*` crates.
pub type RoamResult<T> = Result<T, RoamError>;
