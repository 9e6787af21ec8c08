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

//! Live call state as observed from the provider.

use serde::{Deserialize, Serialize};

/// Opaque participant identifier issued by the video provider.
///
/// Unique per connected client for the lifetime of a call. Never persisted.
pub type ParticipantId = String;

/// Snapshot of one connected client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub participant_id: ParticipantId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub is_local: bool,
    pub is_muted: bool,
    pub is_owner: bool,
    #[serde(default)]
    pub has_audio_track: bool,
    #[serde(default)]
    pub has_video_track: bool,
}

impl Participant {
    /// Name shown on tiles and chips. Anonymous participants are "Guest".
    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Guest")
    }

    /// First letter of the display name, upper-cased, for avatar bubbles.
    pub fn initial(&self) -> String {
        avatar_initial(self.user_name.as_deref())
    }
}

/// Upper-cased first character of `name`, or `"?"` when there is none.
pub fn avatar_initial(name: Option<&str>) -> String {
    name.and_then(|n| n.trim().chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    #[default]
    Idle,
    Joining,
    Joined,
    Reconnecting,
    Left,
    Error,
}

/// The local view of one classroom call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSession {
    pub classroom_id: u32,
    pub room_url: String,
    pub participants: Vec<Participant>,
    pub local_participant: Option<Participant>,
    pub connection_state: ConnectionState,
    /// Milliseconds since the Unix epoch at which the local join completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<f64>,
}

impl VideoSession {
    pub fn new(classroom_id: u32, room_url: impl Into<String>) -> Self {
        Self {
            classroom_id,
            room_url: room_url.into(),
            participants: Vec::new(),
            local_participant: None,
            connection_state: ConnectionState::Idle,
            started_at: None,
        }
    }

    /// Participants other than the local one.
    pub fn remote_participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| !p.is_local)
    }
}
