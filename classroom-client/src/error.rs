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

use classroom_types::ParticipantId;
use thiserror::Error;

/// Errors returned by a [`VideoProvider`](crate::VideoProvider).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The call could not be reached.
    #[error("Unable to connect to the video call: {0}")]
    Connection(String),

    /// The browser refused camera or microphone access.
    #[error("Camera or microphone permission denied: {0}")]
    PermissionDenied(String),

    /// The operation needs a joined call.
    #[error("Not connected to a video call")]
    NotJoined,

    #[error("Unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    /// Any other failure reported by the provider.
    #[error("Video provider error: {0}")]
    Provider(String),
}

impl ProviderError {
    /// Whether asking the user to try again can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::Connection(_)
                | ProviderError::PermissionDenied(_)
                | ProviderError::Provider(_)
        )
    }
}

/// Errors returned by a [`KeyValueStore`](crate::storage::KeyValueStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No backing store exists (e.g. storage disabled in the browser).
    #[error("Storage is unavailable: {0}")]
    Unavailable(String),

    #[error("Display name cannot be empty")]
    EmptyName,

    #[error("Storage operation failed: {0}")]
    Backend(String),
}
