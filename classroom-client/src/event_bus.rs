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

//! Global event bus for provider events.
//!
//! A MPMC broadcast channel: any provider can emit, any component can
//! subscribe and receives every event emitted after it subscribed.
//!
//! # Example
//!
//! ```ignore
//! use classroom_client::{emit_client_event, subscribe_client_events, ClientEvent};
//!
//! let mut rx = subscribe_client_events();
//! wasm_bindgen_futures::spawn_local(async move {
//!     while let Ok(event) = rx.recv().await {
//!         if event.affects_participants() {
//!             // refresh participant list
//!         }
//!     }
//! });
//!
//! emit_client_event(ClientEvent::ParticipantJoined("abc".to_string()));
//! ```

use crate::events::ClientEvent;
use async_broadcast::{broadcast, InactiveReceiver, Receiver, Sender};
use once_cell::sync::Lazy;

/// Capacity of the event bus channel
pub const EVENT_BUS_CAPACITY: usize = 256;

// The inactive receiver keeps the channel open while nobody listens without
// retaining any messages.
static BUS: Lazy<(Sender<ClientEvent>, InactiveReceiver<ClientEvent>)> = Lazy::new(|| {
    let (mut sender, receiver) = broadcast(EVENT_BUS_CAPACITY);
    sender.set_overflow(true);
    (sender, receiver.deactivate())
});

/// Get the global sender for emitting client events.
pub fn global_client_sender() -> Sender<ClientEvent> {
    BUS.0.clone()
}

/// Subscribe to client events.
///
/// Each subscriber receives all events independently. A slow subscriber
/// loses the oldest events once [`EVENT_BUS_CAPACITY`] are queued.
pub fn subscribe_client_events() -> Receiver<ClientEvent> {
    BUS.0.new_receiver()
}

/// Emit a client event to all subscribers.
///
/// Never blocks. With no active subscribers the event is dropped.
pub fn emit_client_event(event: ClientEvent) {
    if let Err(e) = BUS.0.try_broadcast(event) {
        log::trace!("Client event not delivered: {e}");
    }
}
