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

use crate::flow::BreakoutPhase;

/// Errors returned by [`AssignmentSet`](crate::AssignmentSet) and
/// [`BreakoutFlow`](crate::BreakoutFlow).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakoutError {
    /// The requested number of groups is outside the supported bound.
    #[error("Invalid breakout configuration: {requested} rooms requested, must be between {min} and {max}")]
    InvalidConfiguration {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// A group index that does not exist in the current set.
    #[error("Breakout room {index} does not exist ({count} rooms configured)")]
    UnknownGroup { index: usize, count: usize },

    /// `start` was requested while some known participants are unassigned.
    #[error("{} participant(s) not assigned", unassigned.len())]
    NotReady { unassigned: Vec<ParticipantId> },

    /// The action is not allowed in the current phase.
    #[error("Cannot {action} while breakout rooms are {from}")]
    InvalidTransition {
        from: BreakoutPhase,
        action: &'static str,
    },
}
