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

//! In-memory [`VideoProvider`] with scripted participants and failures.
//!
//! Used by tests and by the UI's `fake-peers` build. Emits the same
//! [`ClientEvent`]s a real provider would.

use std::cell::RefCell;
use std::collections::HashMap;

use classroom_types::ParticipantId;
use futures::channel::oneshot;
use futures::future::{self, FutureExt, LocalBoxFuture};
use log::{debug, info};

use crate::error::ProviderError;
use crate::event_bus::emit_client_event;
use crate::events::ClientEvent;
use crate::participant::{ParticipantProperty, PropertyValue, TrackState};
use crate::provider::{CallSession, VideoProvider};

/// Id given to the local participant on join.
pub const LOOPBACK_LOCAL_ID: &str = "local";

#[derive(Debug, Clone)]
struct FakeParticipant {
    id: ParticipantId,
    user_name: Option<String>,
    audio: bool,
    video: bool,
}

impl FakeParticipant {
    fn track(&self, live: bool) -> PropertyValue {
        PropertyValue::Track(Some(if live {
            TrackState::Playable
        } else {
            TrackState::Off
        }))
    }
}

#[derive(Debug, Default)]
struct LoopbackState {
    session: Option<CallSession>,
    local: Option<FakeParticipant>,
    remotes: Vec<FakeParticipant>,
    join_failure: Option<ProviderError>,
    join_gate: Option<oneshot::Receiver<()>>,
    audio_failures: HashMap<ParticipantId, ProviderError>,
    audio_calls: Vec<(ParticipantId, bool)>,
}

impl LoopbackState {
    fn find(&self, id: &str) -> Option<&FakeParticipant> {
        self.local
            .iter()
            .chain(self.remotes.iter())
            .find(|p| p.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut FakeParticipant> {
        self.local
            .iter_mut()
            .chain(self.remotes.iter_mut())
            .find(|p| p.id == id)
    }

    fn check_session(&self, session: &CallSession) -> Result<(), ProviderError> {
        match &self.session {
            Some(current) if current == session => Ok(()),
            _ => Err(ProviderError::NotJoined),
        }
    }
}

#[derive(Debug, Default)]
pub struct LoopbackProvider {
    state: RefCell<LoopbackState>,
}

impl LoopbackProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider pre-seeded with one remote participant per name, ids
    /// `peer-1`, `peer-2`, ... and audio on.
    pub fn with_remotes(names: &[&str]) -> Self {
        let provider = Self::new();
        for (i, name) in names.iter().enumerate() {
            provider.add_remote(&format!("peer-{}", i + 1), Some(name));
        }
        provider
    }

    /// Add a remote participant. Emits `ParticipantJoined` while joined.
    pub fn add_remote(&self, id: &str, user_name: Option<&str>) {
        let joined = {
            let mut state = self.state.borrow_mut();
            state.remotes.retain(|p| p.id != id);
            state.remotes.push(FakeParticipant {
                id: id.to_string(),
                user_name: user_name.map(str::to_string),
                audio: true,
                video: false,
            });
            state.session.is_some()
        };
        if joined {
            emit_client_event(ClientEvent::ParticipantJoined(id.to_string()));
        }
    }

    /// Remove a remote participant. Emits `ParticipantLeft` while joined.
    pub fn remove_remote(&self, id: &str) {
        let (removed, joined) = {
            let mut state = self.state.borrow_mut();
            let before = state.remotes.len();
            state.remotes.retain(|p| p.id != id);
            (state.remotes.len() != before, state.session.is_some())
        };
        if removed && joined {
            emit_client_event(ClientEvent::ParticipantLeft(id.to_string()));
        }
    }

    /// Make the next `join_room` fail with `error`.
    pub fn fail_join(&self, error: ProviderError) {
        self.state.borrow_mut().join_failure = Some(error);
    }

    /// Keep the next `join_room` pending until the returned sender fires or
    /// is dropped.
    pub fn hold_join(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.state.borrow_mut().join_gate = Some(gate);
        release
    }

    /// Make every `set_participant_audio` for `id` fail with `error`.
    pub fn fail_audio_for(&self, id: &str, error: ProviderError) {
        self.state
            .borrow_mut()
            .audio_failures
            .insert(id.to_string(), error);
    }

    pub fn is_joined(&self) -> bool {
        self.state.borrow().session.is_some()
    }

    /// Every `set_participant_audio` call received, in order.
    pub fn audio_calls(&self) -> Vec<(ParticipantId, bool)> {
        self.state.borrow().audio_calls.clone()
    }

    fn join_now(&self, room_url: &str, display_name: &str) -> Result<CallSession, ProviderError> {
        let session = {
            let mut state = self.state.borrow_mut();
            if let Some(error) = state.join_failure.take() {
                return Err(error);
            }
            if let Some(current) = &state.session {
                return Ok(current.clone());
            }
            let session = CallSession::new(room_url, display_name);
            state.local = Some(FakeParticipant {
                id: LOOPBACK_LOCAL_ID.to_string(),
                user_name: Some(display_name.to_string()),
                audio: true,
                video: false,
            });
            state.session = Some(session.clone());
            session
        };
        info!("Loopback joined {room_url} as {display_name}");
        emit_client_event(ClientEvent::Joined {
            room_url: room_url.to_string(),
            local_participant_id: LOOPBACK_LOCAL_ID.to_string(),
        });
        Ok(session)
    }

    fn leave_now(&self, session: &CallSession) -> Result<(), ProviderError> {
        {
            let mut state = self.state.borrow_mut();
            state.check_session(session)?;
            state.session = None;
            state.local = None;
        }
        info!("Loopback left {}", session.room_url());
        emit_client_event(ClientEvent::Left {
            room_url: session.room_url().to_string(),
        });
        Ok(())
    }

    fn set_audio_now(&self, id: &str, enabled: bool) -> Result<(), ProviderError> {
        {
            let mut state = self.state.borrow_mut();
            if state.session.is_none() {
                return Err(ProviderError::NotJoined);
            }
            state.audio_calls.push((id.to_string(), enabled));
            if let Some(error) = state.audio_failures.get(id) {
                return Err(error.clone());
            }
            let participant = state
                .find_mut(id)
                .ok_or_else(|| ProviderError::UnknownParticipant(id.to_string()))?;
            participant.audio = enabled;
        }
        debug!("Loopback audio for {id} set to {enabled}");
        emit_client_event(ClientEvent::ParticipantUpdated(id.to_string()));
        Ok(())
    }
}

impl VideoProvider for LoopbackProvider {
    fn join_room<'a>(
        &'a self,
        room_url: &'a str,
        display_name: &'a str,
    ) -> LocalBoxFuture<'a, Result<CallSession, ProviderError>> {
        let gate = self.state.borrow_mut().join_gate.take();
        match gate {
            Some(gate) => async move {
                let _ = gate.await;
                self.join_now(room_url, display_name)
            }
            .boxed_local(),
            None => future::ready(self.join_now(room_url, display_name)).boxed_local(),
        }
    }

    fn leave_room<'a>(
        &'a self,
        session: &'a CallSession,
    ) -> LocalBoxFuture<'a, Result<(), ProviderError>> {
        future::ready(self.leave_now(session)).boxed_local()
    }

    fn list_participants(
        &self,
        session: &CallSession,
    ) -> Result<Vec<ParticipantId>, ProviderError> {
        let state = self.state.borrow();
        state.check_session(session)?;
        Ok(state
            .local
            .iter()
            .chain(state.remotes.iter())
            .map(|p| p.id.clone())
            .collect())
    }

    fn local_participant_id(&self, session: &CallSession) -> Result<ParticipantId, ProviderError> {
        let state = self.state.borrow();
        state.check_session(session)?;
        state
            .local
            .as_ref()
            .map(|p| p.id.clone())
            .ok_or(ProviderError::NotJoined)
    }

    fn get_participant_property(
        &self,
        participant_id: &str,
        key: ParticipantProperty,
    ) -> Result<PropertyValue, ProviderError> {
        let state = self.state.borrow();
        let participant = state
            .find(participant_id)
            .ok_or_else(|| ProviderError::UnknownParticipant(participant_id.to_string()))?;
        Ok(match key {
            ParticipantProperty::DisplayName => PropertyValue::Text(participant.user_name.clone()),
            ParticipantProperty::AudioEnabled => PropertyValue::Flag(participant.audio),
            ParticipantProperty::AudioTrack => participant.track(participant.audio),
            ParticipantProperty::VideoTrack => participant.track(participant.video),
        })
    }

    fn set_participant_audio<'a>(
        &'a self,
        participant_id: &'a str,
        enabled: bool,
    ) -> LocalBoxFuture<'a, Result<(), ProviderError>> {
        future::ready(self.set_audio_now(participant_id, enabled)).boxed_local()
    }
}
