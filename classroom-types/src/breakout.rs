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

//! Serializable record of a running breakout session.
//!
//! Breakout rooms have no media isolation: `room_url` stays empty until the
//! provider plan supports real sub-rooms.

use serde::{Deserialize, Serialize};

use crate::session::ParticipantId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakoutRoom {
    pub id: String,
    pub name: String,
    pub assigned_participant_ids: Vec<ParticipantId>,
    #[serde(default)]
    pub room_url: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakoutSession {
    pub rooms: Vec<BreakoutRoom>,
    pub is_active: bool,
    /// Participant id of the instructor who started the session.
    pub created_by: ParticipantId,
}

impl BreakoutSession {
    pub fn total_assigned(&self) -> usize {
        self.rooms
            .iter()
            .map(|r| r.assigned_participant_ids.len())
            .sum()
    }
}
