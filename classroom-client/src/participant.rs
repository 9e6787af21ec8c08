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

//! Participant properties as exposed by a provider, and the snapshot that
//! turns them into [`Participant`] records for the UI.

use classroom_types::Participant;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::provider::{CallSession, VideoProvider};

/// Property keys accepted by
/// [`VideoProvider::get_participant_property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantProperty {
    DisplayName,
    AudioEnabled,
    VideoTrack,
    AudioTrack,
}

/// Provider-reported media track state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackState {
    Blocked,
    Off,
    Sendable,
    Loading,
    Interrupted,
    Playable,
}

impl TrackState {
    /// Whether the track carries (or is about to carry) media.
    pub fn is_live(self) -> bool {
        matches!(
            self,
            TrackState::Playable | TrackState::Loading | TrackState::Sendable
        )
    }
}

/// Media a tile can attach to a DOM element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Audio,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Text(Option<String>),
    Flag(bool),
    Track(Option<TrackState>),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => text.as_deref(),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            PropertyValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    /// `true` for a live track, `false` for anything else.
    pub fn has_live_track(&self) -> bool {
        matches!(self, PropertyValue::Track(Some(state)) if state.is_live())
    }
}

/// Build the current participant list, local participant first.
///
/// Participants that disappear between listing and property lookup are
/// skipped rather than failing the whole snapshot.
pub fn participant_snapshot(
    provider: &dyn VideoProvider,
    session: &CallSession,
) -> Result<Vec<Participant>, ProviderError> {
    let local_id = provider.local_participant_id(session)?;
    let mut participants = Vec::new();

    for id in provider.list_participants(session)? {
        match read_participant(provider, &id, id == local_id) {
            Ok(participant) => participants.push(participant),
            Err(ProviderError::UnknownParticipant(_)) => {
                log::debug!("Participant {id} left during snapshot");
            }
            Err(e) => return Err(e),
        }
    }

    participants.sort_by_key(|p| !p.is_local);
    Ok(participants)
}

fn read_participant(
    provider: &dyn VideoProvider,
    id: &str,
    is_local: bool,
) -> Result<Participant, ProviderError> {
    let user_name = provider
        .get_participant_property(id, ParticipantProperty::DisplayName)?
        .as_text()
        .map(str::to_string);
    let audio_enabled = provider
        .get_participant_property(id, ParticipantProperty::AudioEnabled)?
        .as_flag()
        .unwrap_or(false);
    let has_audio_track = provider
        .get_participant_property(id, ParticipantProperty::AudioTrack)?
        .has_live_track();
    let has_video_track = provider
        .get_participant_property(id, ParticipantProperty::VideoTrack)?
        .has_live_track();

    Ok(Participant {
        participant_id: id.to_string(),
        user_name,
        is_local,
        is_muted: !audio_enabled,
        is_owner: false,
        has_audio_track,
        has_video_track,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_tracks() {
        assert!(PropertyValue::Track(Some(TrackState::Playable)).has_live_track());
        assert!(PropertyValue::Track(Some(TrackState::Loading)).has_live_track());
        assert!(!PropertyValue::Track(Some(TrackState::Off)).has_live_track());
        assert!(!PropertyValue::Track(None).has_live_track());
        assert!(!PropertyValue::Flag(true).has_live_track());
    }

    #[test]
    fn accessors_only_match_their_variant() {
        assert_eq!(PropertyValue::Text(Some("Ada".into())).as_text(), Some("Ada"));
        assert_eq!(PropertyValue::Flag(true).as_text(), None);
        assert_eq!(PropertyValue::Flag(false).as_flag(), Some(false));
        assert_eq!(PropertyValue::Text(None).as_flag(), None);
    }

    #[test]
    fn track_state_uses_provider_strings() {
        let state: TrackState = serde_json::from_str("\"playable\"").unwrap();
        assert_eq!(state, TrackState::Playable);
    }
}
