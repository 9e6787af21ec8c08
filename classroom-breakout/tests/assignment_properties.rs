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

//! Partition properties checked over many seeds, roster sizes and group counts.

use std::collections::HashSet;

use classroom_breakout::{AssignTarget, AssignmentSet, BreakoutFlow, MAX_GROUPS, MIN_GROUPS};
use classroom_types::ParticipantId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn roster(n: usize) -> Vec<ParticipantId> {
    (0..n).map(|i| format!("participant-{i}")).collect()
}

#[test]
fn auto_assign_is_balanced_and_exhaustive() {
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        for size in 0..=20 {
            let ids = roster(size);
            for groups in MIN_GROUPS..=MAX_GROUPS {
                let set = AssignmentSet::auto_assign(&ids, groups, &mut rng).unwrap();
                assert_eq!(set.group_count(), groups);

                let sizes: Vec<usize> = set.groups().iter().map(|g| g.len()).collect();
                let min = *sizes.iter().min().unwrap();
                let max = *sizes.iter().max().unwrap();
                assert!(
                    max - min <= 1,
                    "seed {seed}, {size} into {groups}: sizes {sizes:?}"
                );
                assert_eq!(sizes.iter().sum::<usize>(), size);

                let union: HashSet<&str> = set
                    .groups()
                    .iter()
                    .flat_map(|g| g.participants().iter().map(String::as_str))
                    .collect();
                let expected: HashSet<&str> = ids.iter().map(String::as_str).collect();
                assert_eq!(union, expected);
                assert!(set.is_ready(&ids));
            }
        }
    }
}

#[test]
fn auto_assign_order_depends_on_rng() {
    let ids = roster(12);
    let a = AssignmentSet::auto_assign(&ids, 3, &mut StdRng::seed_from_u64(1)).unwrap();
    let b = AssignmentSet::auto_assign(&ids, 3, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(a, b);

    let differs = (2..10u64).any(|seed| {
        AssignmentSet::auto_assign(&ids, 3, &mut StdRng::seed_from_u64(seed)).unwrap() != a
    });
    assert!(differs);
}

#[test]
fn random_moves_keep_membership_exclusive() {
    let ids = roster(10);
    let mut rng = StdRng::seed_from_u64(42);
    let mut set = AssignmentSet::new(4).unwrap();

    for _ in 0..500 {
        let id = &ids[rng.gen_range(0..ids.len())];
        let target = match rng.gen_range(0..=set.group_count()) {
            n if n == set.group_count() => AssignTarget::Unassign,
            n => AssignTarget::Group(n),
        };
        set.assign(id, target);

        for id in &ids {
            let holders = set.groups().iter().filter(|g| g.contains(id)).count();
            assert!(holders <= 1, "{id} held by {holders} groups");
            assert_eq!(holders == 1, set.is_assigned(id));
        }
        let total: usize = set.groups().iter().map(|g| g.len()).sum();
        assert_eq!(total, set.assigned().len());
    }
}

#[test]
fn departed_participants_no_longer_block_start() {
    let mut ids = roster(6);
    let mut flow = BreakoutFlow::new();
    flow.begin(2).unwrap();
    flow.auto_assign(&ids, &mut StdRng::seed_from_u64(9)).unwrap();

    ids.push("late-arrival".to_string());
    assert!(!flow.is_ready(&ids));

    ids.pop();
    ids.remove(0);
    assert!(!flow.is_ready(&ids));
    flow.retain_known(&ids);
    assert!(flow.is_ready(&ids));
    flow.start(&ids).unwrap();
}
