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

//! Catalog configuration errors.

use thiserror::Error;

/// Errors raised while loading a classroom catalog. All of them are
/// configuration problems detected before any lobby state exists.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Classroom catalog is empty")]
    Empty,

    #[error("Classroom id {0} appears more than once")]
    DuplicateId(u32),

    #[error("Classroom {0} has no name")]
    MissingName(u32),

    #[error("Classroom {0} has no room URL")]
    MissingRoomUrl(u32),

    #[error("Classroom {0} has zero capacity")]
    ZeroCapacity(u32),

    #[error("Failed to parse classroom catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
