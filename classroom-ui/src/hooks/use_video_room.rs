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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Call lifecycle hook
//!
//! Joins the classroom's provider room, keeps the participant list in sync
//! with the client event bus and leaves the call when the component using
//! it unmounts.
//!
//! A join that is still pending at unmount is never dropped: it runs to
//! completion and the call is left straight away.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use classroom_client::{
    participant_snapshot, subscribe_client_events, CallSession, ClientEvent, ProviderError,
    VideoProvider,
};
use classroom_types::{ConnectionState, VideoSession};
use dioxus::prelude::*;
use futures::future::{AbortHandle, AbortRegistration, Abortable};
use futures::{Stream, StreamExt};

use crate::context::ProviderCtx;

/// Reactive view of one call, returned by [`use_video_room`].
#[derive(Clone, Copy, PartialEq)]
pub struct VideoRoomHandle {
    /// Connection state and roster, local participant first.
    pub session: Signal<VideoSession>,
    /// Why the last join failed. Set while the state is `Error`.
    pub error: Signal<Option<ProviderError>>,
    attempt: Signal<u32>,
}

impl VideoRoomHandle {
    /// Join again after a failed attempt.
    pub fn retry(mut self) {
        log::info!("Retrying classroom join");
        *self.attempt.write() += 1;
    }
}

/// Join `room_url` as `display_name` for as long as the calling component
/// is mounted.
pub fn use_video_room(classroom_id: u32, room_url: String, display_name: String) -> VideoRoomHandle {
    let provider = use_context::<ProviderCtx>().0;

    let session = use_signal(|| VideoSession::new(classroom_id, room_url.clone()));
    let error = use_signal(|| None::<ProviderError>);
    let attempt = use_signal(|| 0u32);

    let joined = use_hook(|| Rc::new(RefCell::new(None::<CallSession>)));
    let follow_handle = use_hook(|| Rc::new(RefCell::new(None::<AbortHandle>)));
    // Bumped on every attempt and on unmount; a join that finishes under a
    // stale generation leaves instead of publishing.
    let generation = use_hook(|| Rc::new(Cell::new(0u64)));

    {
        let provider = provider.clone();
        let joined = joined.clone();
        let follow_handle = follow_handle.clone();
        let generation = generation.clone();
        let mut session = session;
        let mut error = error;
        use_effect(move || {
            // Re-run on retry
            let attempt_no = attempt();

            if let Some(h) = follow_handle.borrow_mut().take() {
                h.abort();
            }
            let current = generation.get() + 1;
            generation.set(current);

            error.set(None);
            session.write().connection_state = ConnectionState::Joining;

            let (abort_handle, abort_reg) = AbortHandle::new_pair();
            *follow_handle.borrow_mut() = Some(abort_handle);

            log::debug!("Join attempt {attempt_no} for {room_url}");
            let call = CallTask {
                provider: provider.clone(),
                joined: joined.clone(),
                generation: generation.clone(),
                current,
                session,
                error,
            };
            let room_url = room_url.clone();
            let display_name = display_name.clone();
            wasm_bindgen_futures::spawn_local(async move {
                call.run(room_url, display_name, abort_reg).await;
            });
        });
    }

    use_drop(move || {
        generation.set(generation.get() + 1);
        if let Some(h) = follow_handle.borrow_mut().take() {
            h.abort();
        }
        let current = joined.borrow_mut().take();
        if let Some(current) = current {
            wasm_bindgen_futures::spawn_local(async move {
                match provider.leave_room(&current).await {
                    Ok(()) => log::info!("Left {}", current.room_url()),
                    Err(e) => log::warn!("Failed to leave {}: {e}", current.room_url()),
                }
            });
        }
    });

    VideoRoomHandle {
        session,
        error,
        attempt,
    }
}

struct CallTask {
    provider: Rc<dyn VideoProvider>,
    joined: Rc<RefCell<Option<CallSession>>>,
    generation: Rc<Cell<u64>>,
    current: u64,
    session: Signal<VideoSession>,
    error: Signal<Option<ProviderError>>,
}

impl CallTask {
    fn is_stale(&self) -> bool {
        self.generation.get() != self.current
    }

    async fn run(mut self, room_url: String, display_name: String, follow: AbortRegistration) {
        let previous = self.joined.borrow_mut().take();
        if let Some(previous) = previous {
            if let Err(e) = self.provider.leave_room(&previous).await {
                log::warn!("Failed to leave previous call: {e}");
            }
        }

        // Subscribe before joining so no participant event slips past.
        let events = subscribe_client_events();

        let result = self.provider.join_room(&room_url, &display_name).await;

        if self.is_stale() {
            if let Ok(call) = result {
                log::info!("Join of {room_url} finished after the room closed, leaving");
                if let Err(e) = self.provider.leave_room(&call).await {
                    log::warn!("Failed to leave {room_url}: {e}");
                }
            }
            return;
        }

        let call = match result {
            Ok(call) => call,
            Err(e) => {
                log::error!("Failed to join {room_url}: {e}");
                self.session.write().connection_state = ConnectionState::Error;
                self.error.set(Some(e));
                return;
            }
        };
        *self.joined.borrow_mut() = Some(call.clone());
        log::info!("Joined {room_url} as {display_name}");

        self.refresh_participants(&call);
        {
            let mut session = self.session.write();
            session.connection_state = ConnectionState::Joined;
            session.started_at = Some(js_sys::Date::now());
        }

        let _ = Abortable::new(self.follow_events(&call, events), follow).await;
    }

    async fn follow_events(
        &mut self,
        call: &CallSession,
        mut events: impl Stream<Item = ClientEvent> + Unpin,
    ) {
        while let Some(event) = events.next().await {
            match event {
                ClientEvent::Error(message) => log::warn!("Provider error: {message}"),
                ClientEvent::Left { room_url } if room_url == call.room_url() => {
                    log::info!("Call {room_url} ended by the provider");
                    self.joined.borrow_mut().take();
                    self.session.write().connection_state = ConnectionState::Left;
                    return;
                }
                event if event.affects_participants() => self.refresh_participants(call),
                _ => {}
            }
        }
    }

    fn refresh_participants(&mut self, call: &CallSession) {
        match participant_snapshot(&*self.provider, call) {
            Ok(snapshot) => {
                let local = snapshot.iter().find(|p| p.is_local).cloned();
                let changed = {
                    let current = self.session.peek();
                    current.participants != snapshot || current.local_participant != local
                };
                if changed {
                    let mut session = self.session.write();
                    session.participants = snapshot;
                    session.local_participant = local;
                }
            }
            Err(e) => log::warn!("Could not refresh participants: {e}"),
        }
    }
}
