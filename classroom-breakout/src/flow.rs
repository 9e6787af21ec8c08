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

//! Instructor breakout configuration flow.
//!
//! ```text
//!   Idle --begin--> Configuring --start--> Active --end--> Idle
//!                        |
//!                        +--cancel--> Idle
//! ```
//!
//! `start` only succeeds when every known participant is assigned. The
//! Active phase is displayed as running but establishes no media isolation;
//! `start` hands back [`START_PLACEHOLDER_NOTICE`] for the UI to show.

use classroom_types::{BreakoutSession, ParticipantId};
use log::{debug, info};
use rand::Rng;

use crate::assignment::{AssignTarget, AssignmentSet};
use crate::error::BreakoutError;

/// Shown when an instructor starts breakout rooms.
pub const START_PLACEHOLDER_NOTICE: &str =
    "Breakout rooms feature requires the video provider's Enterprise plan. This is a UI demo.";

/// Shown when an instructor ends breakout rooms.
pub const END_NOTICE: &str = "Breakout rooms ended. All participants returned to main session.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakoutPhase {
    Idle,
    Configuring,
    Active,
}

impl std::fmt::Display for BreakoutPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BreakoutPhase::Idle => "idle",
            BreakoutPhase::Configuring => "being configured",
            BreakoutPhase::Active => "active",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum FlowState {
    #[default]
    Idle,
    Configuring(AssignmentSet),
    Active(AssignmentSet),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreakoutFlow {
    state: FlowState,
}

impl BreakoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> BreakoutPhase {
        match self.state {
            FlowState::Idle => BreakoutPhase::Idle,
            FlowState::Configuring(_) => BreakoutPhase::Configuring,
            FlowState::Active(_) => BreakoutPhase::Active,
        }
    }

    /// The assignment set while configuring or active.
    pub fn assignments(&self) -> Option<&AssignmentSet> {
        match &self.state {
            FlowState::Idle => None,
            FlowState::Configuring(set) | FlowState::Active(set) => Some(set),
        }
    }

    fn invalid(&self, action: &'static str) -> BreakoutError {
        BreakoutError::InvalidTransition {
            from: self.phase(),
            action,
        }
    }

    fn configuring_mut(
        &mut self,
        action: &'static str,
    ) -> Result<&mut AssignmentSet, BreakoutError> {
        let from = self.phase();
        match &mut self.state {
            FlowState::Configuring(set) => Ok(set),
            _ => Err(BreakoutError::InvalidTransition { from, action }),
        }
    }

    /// Idle → Configuring with `group_count` empty rooms.
    ///
    /// An invalid count leaves the flow in Idle.
    pub fn begin(&mut self, group_count: usize) -> Result<(), BreakoutError> {
        if self.phase() != BreakoutPhase::Idle {
            return Err(self.invalid("begin configuration"));
        }
        let set = AssignmentSet::new(group_count)?;
        info!("Configuring {group_count} breakout rooms");
        self.state = FlowState::Configuring(set);
        Ok(())
    }

    pub fn assign(
        &mut self,
        participant_id: &str,
        target: AssignTarget,
    ) -> Result<(), BreakoutError> {
        let set = self.configuring_mut("assign participants")?;
        set.try_assign(participant_id, target)?;
        debug!("Breakout assignment {participant_id} -> {target:?}");
        Ok(())
    }

    /// Replace the current set with a balanced random assignment of
    /// `participant_ids` over the same number of rooms.
    pub fn auto_assign<R: Rng + ?Sized>(
        &mut self,
        participant_ids: &[ParticipantId],
        rng: &mut R,
    ) -> Result<(), BreakoutError> {
        let set = self.configuring_mut("auto assign")?;
        let group_count = set.group_count();
        *set = AssignmentSet::auto_assign(participant_ids, group_count, rng)?;
        info!(
            "Auto-assigned {} participants to {} breakout rooms",
            set.assigned().len(),
            set.group_count()
        );
        Ok(())
    }

    /// Drop departed participants from the current set, if any.
    pub fn retain_known(&mut self, known: &[ParticipantId]) {
        if let FlowState::Configuring(set) | FlowState::Active(set) = &mut self.state {
            set.retain_known(known);
        }
    }

    pub fn is_ready(&self, known: &[ParticipantId]) -> bool {
        matches!(&self.state, FlowState::Configuring(set) if set.is_ready(known))
    }

    /// Configuring → Active, only when everyone in `known` is assigned.
    pub fn start(&mut self, known: &[ParticipantId]) -> Result<&'static str, BreakoutError> {
        let set = self.configuring_mut("start breakout rooms")?;
        if !set.is_ready(known) {
            let unassigned = set.unassigned(known).into_iter().cloned().collect();
            return Err(BreakoutError::NotReady { unassigned });
        }
        let set = set.clone();
        info!("Breakout rooms active ({} rooms, placeholder)", set.group_count());
        self.state = FlowState::Active(set);
        Ok(START_PLACEHOLDER_NOTICE)
    }

    /// Active → Idle, discarding the assignment set.
    pub fn end(&mut self) -> Result<&'static str, BreakoutError> {
        if self.phase() != BreakoutPhase::Active {
            return Err(self.invalid("end breakout rooms"));
        }
        self.state = FlowState::Idle;
        info!("Breakout rooms ended");
        Ok(END_NOTICE)
    }

    /// Configuring → Idle, discarding the assignment set.
    pub fn cancel(&mut self) -> Result<(), BreakoutError> {
        if self.phase() != BreakoutPhase::Configuring {
            return Err(self.invalid("cancel configuration"));
        }
        self.state = FlowState::Idle;
        debug!("Breakout configuration cancelled");
        Ok(())
    }

    /// Record of the running session. `None` unless Active.
    pub fn session(&self, created_by: &str) -> Option<BreakoutSession> {
        match &self.state {
            FlowState::Active(set) => Some(BreakoutSession {
                rooms: set.to_breakout_rooms(true),
                is_active: true,
                created_by: created_by.to_string(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ids(names: &[&str]) -> Vec<ParticipantId> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn begin_with_invalid_count_stays_idle() {
        let mut flow = BreakoutFlow::new();
        assert!(matches!(
            flow.begin(7),
            Err(BreakoutError::InvalidConfiguration { requested: 7, .. })
        ));
        assert_eq!(flow.phase(), BreakoutPhase::Idle);
        assert!(flow.assignments().is_none());
    }

    #[test]
    fn full_cycle() {
        let known = ids(&["a", "b", "c"]);
        let mut flow = BreakoutFlow::new();
        flow.begin(2).unwrap();
        assert_eq!(flow.phase(), BreakoutPhase::Configuring);
        assert!(!flow.is_ready(&known));

        flow.auto_assign(&known, &mut StdRng::seed_from_u64(3)).unwrap();
        assert!(flow.is_ready(&known));

        assert_eq!(flow.start(&known), Ok(START_PLACEHOLDER_NOTICE));
        assert_eq!(flow.phase(), BreakoutPhase::Active);

        let session = flow.session("instructor-1").unwrap();
        assert!(session.is_active);
        assert_eq!(session.total_assigned(), 3);
        assert_eq!(session.created_by, "instructor-1");

        assert_eq!(flow.end(), Ok(END_NOTICE));
        assert_eq!(flow.phase(), BreakoutPhase::Idle);
        assert!(flow.assignments().is_none());
    }

    #[test]
    fn auto_assign_counts_each_participant_once() {
        let mut flow = BreakoutFlow::new();
        flow.begin(2).unwrap();
        flow.auto_assign(&ids(&["a", "b", "a", "c", "b"]), &mut StdRng::seed_from_u64(9))
            .unwrap();

        let set = flow.assignments().unwrap();
        assert_eq!(set.assigned().len(), 3);
        assert_eq!(set.groups().iter().map(|g| g.len()).sum::<usize>(), 3);
        assert!(flow.is_ready(&ids(&["a", "b", "c"])));
    }

    #[test]
    fn start_requires_everyone_assigned() {
        let known = ids(&["a", "b"]);
        let mut flow = BreakoutFlow::new();
        flow.begin(2).unwrap();
        flow.assign("a", AssignTarget::Group(0)).unwrap();

        assert_eq!(
            flow.start(&known),
            Err(BreakoutError::NotReady {
                unassigned: ids(&["b"])
            })
        );
        assert_eq!(flow.phase(), BreakoutPhase::Configuring);
    }

    #[test]
    fn cancel_discards_assignments() {
        let mut flow = BreakoutFlow::new();
        flow.begin(3).unwrap();
        flow.assign("a", AssignTarget::Group(2)).unwrap();
        flow.cancel().unwrap();
        assert_eq!(flow.phase(), BreakoutPhase::Idle);

        flow.begin(3).unwrap();
        assert!(!flow.assignments().unwrap().is_assigned("a"));
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        let mut flow = BreakoutFlow::new();
        assert!(matches!(
            flow.end(),
            Err(BreakoutError::InvalidTransition {
                from: BreakoutPhase::Idle,
                ..
            })
        ));
        assert!(flow.cancel().is_err());
        assert!(flow.assign("a", AssignTarget::Group(0)).is_err());
        assert!(flow.start(&[]).is_err());

        flow.begin(2).unwrap();
        assert!(flow.begin(2).is_err());
        assert!(flow.end().is_err());

        flow.start(&[]).unwrap();
        assert!(flow.cancel().is_err());
        assert!(flow.assign("a", AssignTarget::Group(0)).is_err());
    }

    #[test]
    fn error_messages_read_naturally() {
        let err = BreakoutError::InvalidTransition {
            from: BreakoutPhase::Active,
            action: "cancel configuration",
        };
        assert_eq!(
            err.to_string(),
            "Cannot cancel configuration while breakout rooms are active"
        );
        let err = BreakoutError::NotReady {
            unassigned: ids(&["a", "b"]),
        };
        assert_eq!(err.to_string(), "2 participant(s) not assigned");
    }
}
