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

//! Instructor audio controls.

use classroom_types::ParticipantId;
use futures::future::join_all;
use log::{error, info};

use crate::error::ProviderError;
use crate::provider::VideoProvider;

/// Result of a bulk audio change. Every target ends up in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    pub succeeded: Vec<ParticipantId>,
    pub failed: Vec<(ParticipantId, ProviderError)>,
}

impl BulkOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// User-facing description of the failures, if any.
    pub fn failure_summary(&self) -> Option<String> {
        match self.failed.as_slice() {
            [] => None,
            [(id, e)] => Some(format!("Failed to update audio for {id}: {e}")),
            failed => Some(format!(
                "Failed to update audio for {} participants",
                failed.len()
            )),
        }
    }
}

/// Set audio for every id concurrently and wait for all of them.
///
/// A failure is logged and reported; it does not stop or undo the others.
pub async fn set_audio_for_all(
    provider: &dyn VideoProvider,
    participant_ids: &[ParticipantId],
    enabled: bool,
) -> BulkOutcome {
    let calls = participant_ids.iter().map(|id| async move {
        let result = provider.set_participant_audio(id, enabled).await;
        (id, result)
    });

    let mut outcome = BulkOutcome::default();
    for (id, result) in join_all(calls).await {
        match result {
            Ok(()) => outcome.succeeded.push(id.clone()),
            Err(e) => {
                error!("Failed to set audio={enabled} for {id}: {e}");
                outcome.failed.push((id.clone(), e));
            }
        }
    }
    info!(
        "Audio set to {enabled} for {}/{} participants",
        outcome.succeeded.len(),
        participant_ids.len()
    );
    outcome
}

pub async fn mute_all(provider: &dyn VideoProvider, participant_ids: &[ParticipantId]) -> BulkOutcome {
    set_audio_for_all(provider, participant_ids, false).await
}

pub async fn unmute_all(
    provider: &dyn VideoProvider,
    participant_ids: &[ParticipantId],
) -> BulkOutcome {
    set_audio_for_all(provider, participant_ids, true).await
}

/// Toggle one participant: a muted participant is unmuted and vice versa.
pub async fn mute_participant(
    provider: &dyn VideoProvider,
    participant_id: &str,
    currently_muted: bool,
) -> Result<(), ProviderError> {
    provider
        .set_participant_audio(participant_id, currently_muted)
        .await
        .inspect_err(|e| error!("Failed to toggle audio for {participant_id}: {e}"))
}

/// Everyone except the local participant, in input order.
pub fn remote_participants(ids: &[ParticipantId], local: Option<&str>) -> Vec<ParticipantId> {
    ids.iter()
        .filter(|id| Some(id.as_str()) != local)
        .cloned()
        .collect()
}
