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

//! The capabilities the classroom needs from a hosted video provider.
//!
//! Futures are [`LocalBoxFuture`]: providers live on the browser's single
//! thread and are driven with `wasm_bindgen_futures::spawn_local`.

use classroom_types::ParticipantId;
use futures::future::LocalBoxFuture;

use crate::error::ProviderError;
use crate::participant::{MediaKind, ParticipantProperty, PropertyValue};

/// Handle for a joined call, returned by [`VideoProvider::join_room`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSession {
    room_url: String,
    display_name: String,
}

impl CallSession {
    pub fn new(room_url: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            room_url: room_url.into(),
            display_name: display_name.into(),
        }
    }

    pub fn room_url(&self) -> &str {
        &self.room_url
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

pub trait VideoProvider {
    /// Join `room_url` as `display_name`.
    ///
    /// Fails with [`ProviderError::Connection`] or
    /// [`ProviderError::PermissionDenied`]; both are surfaced with Retry.
    fn join_room<'a>(
        &'a self,
        room_url: &'a str,
        display_name: &'a str,
    ) -> LocalBoxFuture<'a, Result<CallSession, ProviderError>>;

    fn leave_room<'a>(
        &'a self,
        session: &'a CallSession,
    ) -> LocalBoxFuture<'a, Result<(), ProviderError>>;

    /// Ids of everyone in the call, local participant included.
    fn list_participants(&self, session: &CallSession)
        -> Result<Vec<ParticipantId>, ProviderError>;

    fn local_participant_id(&self, session: &CallSession) -> Result<ParticipantId, ProviderError>;

    fn get_participant_property(
        &self,
        participant_id: &str,
        key: ParticipantProperty,
    ) -> Result<PropertyValue, ProviderError>;

    /// Enable or disable a participant's microphone. Requires the caller to
    /// be allowed to control other participants.
    fn set_participant_audio<'a>(
        &'a self,
        participant_id: &'a str,
        enabled: bool,
    ) -> LocalBoxFuture<'a, Result<(), ProviderError>>;

    /// Play a participant's track in the media element with DOM id
    /// `element_id`. Providers without real media do nothing.
    fn attach_media(
        &self,
        _participant_id: &str,
        _kind: MediaKind,
        _element_id: &str,
    ) -> Result<(), ProviderError> {
        Ok(())
    }
}
