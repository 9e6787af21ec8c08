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

//! Exclusive assignment of participants to breakout groups.

use std::collections::HashSet;

use classroom_types::{BreakoutRoom, ParticipantId};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::BreakoutError;

/// Smallest number of breakout rooms an instructor may configure.
pub const MIN_GROUPS: usize = 2;

/// Largest number of breakout rooms an instructor may configure.
pub const MAX_GROUPS: usize = 6;

/// One named breakout room and the participants assigned to it, in
/// assignment order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakoutGroup {
    name: String,
    participants: Vec<ParticipantId>,
}

impl BreakoutGroup {
    fn empty(index: usize) -> Self {
        Self {
            name: format!("Breakout Room {}", index + 1),
            participants: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn contains(&self, participant_id: &str) -> bool {
        self.participants.iter().any(|p| p == participant_id)
    }
}

/// Where [`AssignmentSet::assign`] should put a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignTarget {
    /// Move into the group at this index.
    Group(usize),
    /// Remove from whichever group holds the participant.
    Unassign,
}

/// Ordered breakout groups for one configuration session.
///
/// Invariant: a participant id appears in at most one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSet {
    groups: Vec<BreakoutGroup>,
}

fn check_group_count(group_count: usize) -> Result<(), BreakoutError> {
    if (MIN_GROUPS..=MAX_GROUPS).contains(&group_count) {
        Ok(())
    } else {
        Err(BreakoutError::InvalidConfiguration {
            requested: group_count,
            min: MIN_GROUPS,
            max: MAX_GROUPS,
        })
    }
}

impl AssignmentSet {
    /// Create `group_count` empty groups named "Breakout Room 1".."N".
    pub fn new(group_count: usize) -> Result<Self, BreakoutError> {
        check_group_count(group_count)?;
        Ok(Self {
            groups: (0..group_count).map(BreakoutGroup::empty).collect(),
        })
    }

    /// Distribute `participant_ids` across `group_count` fresh groups in a
    /// random order.
    ///
    /// Group sizes differ by at most one and every distinct input id lands in
    /// exactly one group. Duplicate ids in the input are collapsed.
    pub fn auto_assign<R: Rng + ?Sized>(
        participant_ids: &[ParticipantId],
        group_count: usize,
        rng: &mut R,
    ) -> Result<Self, BreakoutError> {
        let mut set = Self::new(group_count)?;

        let mut seen = HashSet::with_capacity(participant_ids.len());
        let mut shuffled: Vec<ParticipantId> = participant_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect();
        shuffled.shuffle(rng);

        for (i, id) in shuffled.into_iter().enumerate() {
            set.groups[i % group_count].participants.push(id);
        }
        Ok(set)
    }

    /// Move `participant_id` to `target`.
    ///
    /// The participant is first removed from any group holding it; an
    /// unassigned participant makes the removal a no-op. Assigning to the
    /// group that already holds the participant changes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `target` names a group index that does not exist. Callers
    /// build targets from [`groups`](Self::groups), so this is a programming
    /// error; use [`try_assign`](Self::try_assign) to get an error instead.
    pub fn assign(&mut self, participant_id: &str, target: AssignTarget) {
        if let Err(e) = self.try_assign(participant_id, target) {
            panic!("invalid breakout assignment for {participant_id}: {e}");
        }
    }

    /// Fallible form of [`assign`](Self::assign). State is untouched on error.
    pub fn try_assign(
        &mut self,
        participant_id: &str,
        target: AssignTarget,
    ) -> Result<(), BreakoutError> {
        if let AssignTarget::Group(index) = target {
            if index >= self.groups.len() {
                return Err(BreakoutError::UnknownGroup {
                    index,
                    count: self.groups.len(),
                });
            }
            if self.groups[index].contains(participant_id) {
                return Ok(());
            }
        }

        for group in &mut self.groups {
            group.participants.retain(|p| p != participant_id);
        }

        if let AssignTarget::Group(index) = target {
            self.groups[index]
                .participants
                .push(participant_id.to_string());
        }
        Ok(())
    }

    pub fn unassign(&mut self, participant_id: &str) {
        self.assign(participant_id, AssignTarget::Unassign);
    }

    pub fn groups(&self) -> &[BreakoutGroup] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Index of the group holding `participant_id`, if any.
    pub fn group_of(&self, participant_id: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(participant_id))
    }

    pub fn is_assigned(&self, participant_id: &str) -> bool {
        self.group_of(participant_id).is_some()
    }

    /// Every participant held by some group.
    pub fn assigned(&self) -> HashSet<&str> {
        self.groups
            .iter()
            .flat_map(|g| g.participants.iter().map(String::as_str))
            .collect()
    }

    /// Known participants that are in no group, in `known` order.
    pub fn unassigned<'a>(&self, known: &'a [ParticipantId]) -> Vec<&'a ParticipantId> {
        let assigned = self.assigned();
        known
            .iter()
            .filter(|id| !assigned.contains(id.as_str()))
            .collect()
    }

    /// True when the groups together hold exactly the known participants.
    pub fn is_ready(&self, known: &[ParticipantId]) -> bool {
        let known: HashSet<&str> = known.iter().map(String::as_str).collect();
        self.assigned() == known
    }

    /// Drop participants that are no longer in the call.
    pub fn retain_known(&mut self, known: &[ParticipantId]) {
        let known: HashSet<&str> = known.iter().map(String::as_str).collect();
        for group in &mut self.groups {
            group.participants.retain(|p| known.contains(p.as_str()));
        }
    }

    /// Shareable records for the groups, marked with `is_active`.
    pub fn to_breakout_rooms(&self, is_active: bool) -> Vec<BreakoutRoom> {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, g)| BreakoutRoom {
                id: format!("breakout-{}", i + 1),
                name: g.name.clone(),
                assigned_participant_ids: g.participants.clone(),
                room_url: String::new(),
                is_active,
            })
            .collect()
    }
}
