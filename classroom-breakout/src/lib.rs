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

//! Breakout-room participant assignment.
//!
//! Two layers:
//!
//! - [`AssignmentSet`] partitions participant ids across a small number of
//!   named groups and keeps every participant in at most one group.
//! - [`BreakoutFlow`] is the instructor-facing state machine
//!   (Idle → Configuring → Active → Idle) that owns an assignment set while
//!   it is being configured or shown as active.
//!
//! Everything here is synchronous and in-memory. The "active" phase is a
//! placeholder: no provider call backs it and no media isolation exists.
//!
//! ```
//! use classroom_breakout::{AssignTarget, AssignmentSet};
//!
//! let mut set = AssignmentSet::new(2)?;
//! set.assign("a", AssignTarget::Group(0));
//! set.assign("a", AssignTarget::Group(1));
//! assert_eq!(set.group_of("a"), Some(1));
//! # Ok::<(), classroom_breakout::BreakoutError>(())
//! ```

pub mod assignment;
pub mod error;
pub mod flow;

pub use assignment::{AssignTarget, AssignmentSet, BreakoutGroup, MAX_GROUPS, MIN_GROUPS};
pub use error::BreakoutError;
pub use flow::{BreakoutFlow, BreakoutPhase, END_NOTICE, START_PLACEHOLDER_NOTICE};
