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

//! [`VideoProvider`] backed by the hosted provider's browser SDK.
//!
//! The SDK script must be loaded by the page so that
//! `DailyIframe.createCallObject` exists on `window`. Provider events are
//! forwarded to the [event bus](crate::event_bus).

use std::cell::RefCell;
use std::collections::HashMap;

use classroom_types::ParticipantId;
use futures::future::{self, FutureExt, LocalBoxFuture};
use js_sys::{Object, Promise, Reflect};
use log::{error, info};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlMediaElement, MediaStream, MediaStreamTrack};

use crate::error::ProviderError;
use crate::event_bus::emit_client_event;
use crate::events::ClientEvent;
use crate::participant::{MediaKind, ParticipantProperty, PropertyValue, TrackState};
use crate::provider::{CallSession, VideoProvider};

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    type CallObject;

    #[wasm_bindgen(catch, js_namespace = DailyIframe, js_name = createCallObject)]
    fn create_call_object() -> Result<CallObject, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn join(this: &CallObject, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn leave(this: &CallObject) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &CallObject) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method)]
    fn participants(this: &CallObject) -> JsValue;

    #[wasm_bindgen(method, catch, js_name = updateParticipant)]
    fn update_participant(
        this: &CallObject,
        session_id: &str,
        updates: &JsValue,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &CallObject, event: &str, handler: &Closure<dyn FnMut(JsValue)>);
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawParticipant {
    session_id: String,
    user_name: Option<String>,
    local: bool,
    audio: bool,
    tracks: RawTracks,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTracks {
    audio: Option<RawTrack>,
    video: Option<RawTrack>,
}

#[derive(Debug, Deserialize)]
struct RawTrack {
    state: TrackState,
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    ["errorMsg", "message"]
        .iter()
        .find_map(|key| {
            Reflect::get(value, &JsValue::from_str(key))
                .ok()
                .and_then(|v| v.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

fn join_error(value: JsValue) -> ProviderError {
    let message = js_error_message(&value);
    let lower = message.to_lowercase();
    if lower.contains("permission") || lower.contains("notallowed") {
        ProviderError::PermissionDenied(message)
    } else {
        ProviderError::Connection(message)
    }
}

fn provider_error(value: JsValue) -> ProviderError {
    ProviderError::Provider(js_error_message(&value))
}

fn set_prop(target: &Object, key: &str, value: &JsValue) -> Result<(), ProviderError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(provider_error)
}

fn event_participant_id(event: &JsValue) -> Option<ParticipantId> {
    let participant = Reflect::get(event, &JsValue::from_str("participant")).ok()?;
    Reflect::get(&participant, &JsValue::from_str("session_id"))
        .ok()?
        .as_string()
}

#[derive(Default)]
pub struct JsCallProvider {
    call: RefCell<Option<CallObject>>,
    listeners: RefCell<Vec<Closure<dyn FnMut(JsValue)>>>,
}

impl JsCallProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn call(&self) -> Result<CallObject, ProviderError> {
        self.call.borrow().clone().ok_or(ProviderError::NotJoined)
    }

    fn ensure_call(&self) -> Result<CallObject, ProviderError> {
        if let Some(call) = self.call.borrow().as_ref() {
            return Ok(call.clone());
        }
        let call = create_call_object().map_err(join_error)?;
        self.register_listeners(&call);
        *self.call.borrow_mut() = Some(call.clone());
        Ok(call)
    }

    fn register_listeners(&self, call: &CallObject) {
        let forward = |name: &str, to_event: fn(ParticipantId) -> ClientEvent| {
            let name = name.to_string();
            let handler = Closure::new(move |event: JsValue| match event_participant_id(&event) {
                Some(id) => emit_client_event(to_event(id)),
                None => log::warn!("{name} event without participant id"),
            });
            call.on(&name, &handler);
            handler
        };

        let mut listeners = self.listeners.borrow_mut();
        listeners.push(forward("participant-joined", ClientEvent::ParticipantJoined));
        listeners.push(forward("participant-updated", ClientEvent::ParticipantUpdated));
        listeners.push(forward("participant-left", ClientEvent::ParticipantLeft));

        let on_error = Closure::new(|event: JsValue| {
            let message = js_error_message(&event);
            error!("Video provider error: {message}");
            emit_client_event(ClientEvent::Error(message));
        });
        call.on("error", &on_error);
        listeners.push(on_error);
    }

    fn raw_participants(&self) -> Result<HashMap<String, RawParticipant>, ProviderError> {
        let call = self.call()?;
        serde_wasm_bindgen::from_value(call.participants())
            .map_err(|e| ProviderError::Provider(format!("Unreadable participant list: {e}")))
    }

    fn with_participant<T>(
        &self,
        participant_id: &str,
        f: impl FnOnce(&RawParticipant) -> T,
    ) -> Result<T, ProviderError> {
        let participants = self.raw_participants()?;
        participants
            .values()
            .find(|p| p.session_id == participant_id)
            .map(f)
            .ok_or_else(|| ProviderError::UnknownParticipant(participant_id.to_string()))
    }

    async fn join_now(
        &self,
        room_url: &str,
        display_name: &str,
    ) -> Result<CallSession, ProviderError> {
        let call = self.ensure_call()?;
        let options = Object::new();
        set_prop(&options, "url", &JsValue::from_str(room_url))?;
        set_prop(&options, "userName", &JsValue::from_str(display_name))?;

        let promise = call.join(&options).map_err(join_error)?;
        JsFuture::from(promise).await.map_err(join_error)?;

        let session = CallSession::new(room_url, display_name);
        let local_participant_id = self.local_participant_id(&session)?;
        info!("Joined {room_url} as {display_name}");
        emit_client_event(ClientEvent::Joined {
            room_url: room_url.to_string(),
            local_participant_id,
        });
        Ok(session)
    }

    async fn leave_now(&self, session: &CallSession) -> Result<(), ProviderError> {
        let call = self.call()?;
        let promise = call.leave().map_err(provider_error)?;
        JsFuture::from(promise).await.map_err(provider_error)?;
        let promise = call.destroy().map_err(provider_error)?;
        JsFuture::from(promise).await.map_err(provider_error)?;

        self.call.borrow_mut().take();
        self.listeners.borrow_mut().clear();
        info!("Left {}", session.room_url());
        emit_client_event(ClientEvent::Left {
            room_url: session.room_url().to_string(),
        });
        Ok(())
    }

    fn set_audio_now(&self, participant_id: &str, enabled: bool) -> Result<(), ProviderError> {
        let is_local = self.with_participant(participant_id, |p| p.local)?;
        let updates = Object::new();
        set_prop(&updates, "setAudio", &JsValue::from_bool(enabled))?;
        let target = if is_local { "local" } else { participant_id };
        self.call()?
            .update_participant(target, &updates)
            .map_err(provider_error)?;
        Ok(())
    }
}

impl Drop for JsCallProvider {
    fn drop(&mut self) {
        if let Some(call) = self.call.get_mut().take() {
            if let Err(e) = call.destroy() {
                error!("Failed to destroy call object: {}", js_error_message(&e));
            }
        }
    }
}

impl VideoProvider for JsCallProvider {
    fn join_room<'a>(
        &'a self,
        room_url: &'a str,
        display_name: &'a str,
    ) -> LocalBoxFuture<'a, Result<CallSession, ProviderError>> {
        self.join_now(room_url, display_name).boxed_local()
    }

    fn leave_room<'a>(
        &'a self,
        session: &'a CallSession,
    ) -> LocalBoxFuture<'a, Result<(), ProviderError>> {
        self.leave_now(session).boxed_local()
    }

    fn list_participants(
        &self,
        _session: &CallSession,
    ) -> Result<Vec<ParticipantId>, ProviderError> {
        let raw = self.raw_participants()?;
        let mut participants: Vec<&RawParticipant> = raw.values().collect();
        participants.sort_by(|a, b| b.local.cmp(&a.local).then(a.session_id.cmp(&b.session_id)));
        Ok(participants.into_iter().map(|p| p.session_id.clone()).collect())
    }

    fn local_participant_id(&self, _session: &CallSession) -> Result<ParticipantId, ProviderError> {
        self.raw_participants()?
            .remove("local")
            .map(|p| p.session_id)
            .ok_or(ProviderError::NotJoined)
    }

    fn get_participant_property(
        &self,
        participant_id: &str,
        key: ParticipantProperty,
    ) -> Result<PropertyValue, ProviderError> {
        self.with_participant(participant_id, |p| match key {
            ParticipantProperty::DisplayName => PropertyValue::Text(p.user_name.clone()),
            ParticipantProperty::AudioEnabled => PropertyValue::Flag(p.audio),
            ParticipantProperty::AudioTrack => {
                PropertyValue::Track(p.tracks.audio.as_ref().map(|t| t.state))
            }
            ParticipantProperty::VideoTrack => {
                PropertyValue::Track(p.tracks.video.as_ref().map(|t| t.state))
            }
        })
    }

    fn set_participant_audio<'a>(
        &'a self,
        participant_id: &'a str,
        enabled: bool,
    ) -> LocalBoxFuture<'a, Result<(), ProviderError>> {
        future::ready(self.set_audio_now(participant_id, enabled)).boxed_local()
    }

    fn attach_media(
        &self,
        participant_id: &str,
        kind: MediaKind,
        element_id: &str,
    ) -> Result<(), ProviderError> {
        let is_local = self.with_participant(participant_id, |p| p.local)?;
        let key = if is_local { "local" } else { participant_id };
        let kind_key = match kind {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        };

        let track = [key, "tracks", kind_key, "persistentTrack"]
            .iter()
            .try_fold(self.call()?.participants(), |value, field| {
                Reflect::get(&value, &JsValue::from_str(field))
                    .ok()
                    .filter(|v| !v.is_undefined() && !v.is_null())
            });
        // No track yet; the tile retries on the next participant update.
        let Some(track) = track else {
            return Ok(());
        };
        let track: MediaStreamTrack = track
            .dyn_into()
            .map_err(|_| ProviderError::Provider(format!("{kind_key} track is not a MediaStreamTrack")))?;

        let element: HtmlMediaElement = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .and_then(|e| e.dyn_into().ok())
            .ok_or_else(|| ProviderError::Provider(format!("No media element #{element_id}")))?;

        let stream = MediaStream::new().map_err(provider_error)?;
        stream.add_track(&track);
        element.set_src_object(Some(&stream));
        Ok(())
    }
}
