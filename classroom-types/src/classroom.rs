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

//! Classroom records shown in the lobby.

use serde::{Deserialize, Serialize};

/// Lifecycle of a classroom as displayed on its lobby card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassroomStatus {
    #[default]
    NotStarted,
    InSession,
    Ended,
    Full,
}

impl std::fmt::Display for ClassroomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ClassroomStatus::NotStarted => "not-started",
            ClassroomStatus::InSession => "in-session",
            ClassroomStatus::Ended => "ended",
            ClassroomStatus::Full => "full",
        };
        f.write_str(label)
    }
}

/// A named, capacity-bounded video room.
///
/// `room_url` is the provider address passed to `join_room`; it is static
/// configuration and never derived at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: u32,
    pub name: String,
    pub room_url: String,
    pub max_capacity: u32,
    /// Last known occupancy. `None` when the lobby has no live count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_capacity: Option<u32>,
    #[serde(default)]
    pub status: ClassroomStatus,
}

impl Classroom {
    pub fn occupancy(&self) -> u32 {
        self.current_capacity.unwrap_or(0)
    }

    pub fn is_full(&self) -> bool {
        self.occupancy() >= self.max_capacity
    }

    /// Occupancy as a percentage of capacity, clamped to `0..=100`.
    pub fn capacity_percentage(&self) -> u32 {
        if self.max_capacity == 0 {
            return 100;
        }
        let pct = (u64::from(self.occupancy()) * 100) / u64::from(self.max_capacity);
        pct.min(100) as u32
    }
}
