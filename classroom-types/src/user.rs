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

use serde::{Deserialize, Serialize};

/// Which lobby view the local user has selected.
///
/// Instructors get the control panel (mute, breakout rooms); students only
/// see the video grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserMode {
    #[default]
    Student,
    Instructor,
}

impl UserMode {
    pub fn is_instructor(self) -> bool {
        matches!(self, UserMode::Instructor)
    }

    /// Badge label shown under the lobby hero.
    pub fn label(self) -> &'static str {
        match self {
            UserMode::Student => "Student Mode",
            UserMode::Instructor => "Instructor Mode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationType {
    Lobby,
    Classroom,
    BreakoutRoom,
}

/// Where the local user currently is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type")]
    pub kind: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classroom_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakout_room_id: Option<String>,
}

impl Location {
    pub fn lobby() -> Self {
        Self {
            kind: LocationType::Lobby,
            classroom_id: None,
            breakout_room_id: None,
        }
    }

    pub fn classroom(classroom_id: u32) -> Self {
        Self {
            kind: LocationType::Classroom,
            classroom_id: Some(classroom_id),
            breakout_room_id: None,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::lobby()
    }
}
