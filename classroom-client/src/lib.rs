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

//! Client-side access to the hosted video provider used by the classroom.
//!
//! This crate makes no assumptions about the UI. It provides:
//!
//! - the [`VideoProvider`] capability trait, implemented by
//!   [`JsCallProvider`] (browser SDK, `wasm` feature) and
//!   [`LoopbackProvider`] (in-memory),
//! - instructor audio [`controls`] that fan out over many participants,
//! - a global [event bus](event_bus) of [`ClientEvent`]s,
//! - display-name [`storage`].
//!
//! # Outline of usage
//!
//! ```no_run
//! # async fn demo(provider: &dyn classroom_client::VideoProvider) -> Result<(), classroom_client::ProviderError> {
//! use classroom_client::{controls, participant_snapshot};
//!
//! let session = provider.join_room("https://overcast.daily.co/oc1", "Ada").await?;
//! let participants = participant_snapshot(provider, &session)?;
//! let ids: Vec<_> = participants.iter().map(|p| p.participant_id.clone()).collect();
//! let local = provider.local_participant_id(&session)?;
//! let remotes = controls::remote_participants(&ids, Some(&local));
//! let outcome = controls::mute_all(provider, &remotes).await;
//! if let Some(message) = outcome.failure_summary() {
//!     log::error!("{message}");
//! }
//! provider.leave_room(&session).await?;
//! # Ok(())
//! # }
//! ```

pub mod controls;
pub mod error;
pub mod event_bus;
pub mod events;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod js_provider;
pub mod loopback;
pub mod participant;
pub mod provider;
pub mod storage;

pub use controls::BulkOutcome;
pub use error::{ProviderError, StorageError};
pub use event_bus::{emit_client_event, global_client_sender, subscribe_client_events};
pub use events::ClientEvent;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use js_provider::JsCallProvider;
pub use loopback::{LoopbackProvider, LOOPBACK_LOCAL_ID};
pub use participant::{
    participant_snapshot, MediaKind, ParticipantProperty, PropertyValue, TrackState,
};
pub use provider::{CallSession, VideoProvider};
pub use storage::{KeyValueStore, MemoryStore, NameStore, USERNAME_KEY};
