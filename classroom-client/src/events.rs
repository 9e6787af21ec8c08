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

//! Framework-agnostic events emitted by video providers.
//!
//! Providers publish these on the [event bus](crate::event_bus); UI code
//! subscribes and refreshes its participant snapshot when they arrive.

use classroom_types::ParticipantId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientEvent {
    // === Call Events ===
    /// The local participant joined a call
    Joined {
        room_url: String,
        local_participant_id: ParticipantId,
    },

    /// The local participant left the call
    Left { room_url: String },

    // === Participant Events ===
    /// A remote participant joined
    ParticipantJoined(ParticipantId),

    /// A participant's name, audio flag or tracks changed
    ParticipantUpdated(ParticipantId),

    /// A remote participant left
    ParticipantLeft(ParticipantId),

    /// The provider reported an error outside of a pending call
    Error(String),
}

impl ClientEvent {
    /// True for events that change who is in the call or their state.
    pub fn affects_participants(&self) -> bool {
        !matches!(self, ClientEvent::Error(_))
    }
}
