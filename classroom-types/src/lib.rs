/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Shared data model for the Overcast classroom lobby.
//!
//! This crate defines the types passed between the breakout engine, the
//! provider client and the web frontend. It is intentionally
//! framework-agnostic: no Dioxus, no wasm-bindgen, no provider SDK types.

pub mod breakout;
pub mod catalog;
pub mod classroom;
pub mod error;
pub mod session;
pub mod user;

pub use breakout::{BreakoutRoom, BreakoutSession};
pub use catalog::ClassroomCatalog;
pub use classroom::{Classroom, ClassroomStatus};
pub use error::CatalogError;
pub use session::{ConnectionState, Participant, ParticipantId, VideoSession};
pub use user::{Location, LocationType, UserMode};

/// Interpret an optional configuration string as a boolean.
///
/// `"true"` and `"1"` (case-insensitive) are truthy; everything else,
/// including `None`, is false.
pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}
