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

//! Static classroom catalog.
//!
//! The lobby always lists a fixed set of rooms. The default catalog ships six
//! cohorts; deployments can override it with a JSON array of [`Classroom`]
//! records (see [`ClassroomCatalog::from_json`]).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::classroom::{Classroom, ClassroomStatus};
use crate::error::CatalogError;

/// Number of rooms in the default catalog.
pub const DEFAULT_CLASSROOM_COUNT: u32 = 6;

/// Capacity of every room in the default catalog.
pub const DEFAULT_MAX_CAPACITY: u32 = 15;

/// Provider address used by the default catalog until real rooms are created.
pub const DEFAULT_ROOM_URL: &str = "https://overcast.daily.co/oc1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassroomCatalog {
    classrooms: Vec<Classroom>,
}

impl Default for ClassroomCatalog {
    fn default() -> Self {
        let classrooms = (1..=DEFAULT_CLASSROOM_COUNT)
            .map(|id| Classroom {
                id,
                name: format!("Cohort {id}"),
                room_url: DEFAULT_ROOM_URL.to_string(),
                max_capacity: DEFAULT_MAX_CAPACITY,
                current_capacity: None,
                status: ClassroomStatus::NotStarted,
            })
            .collect();
        Self { classrooms }
    }
}

impl ClassroomCatalog {
    /// Build a catalog from explicit records, validating them first.
    pub fn new(classrooms: Vec<Classroom>) -> Result<Self, CatalogError> {
        if classrooms.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for classroom in &classrooms {
            if !seen.insert(classroom.id) {
                return Err(CatalogError::DuplicateId(classroom.id));
            }
            if classroom.name.trim().is_empty() {
                return Err(CatalogError::MissingName(classroom.id));
            }
            if classroom.room_url.trim().is_empty() {
                return Err(CatalogError::MissingRoomUrl(classroom.id));
            }
            if classroom.max_capacity == 0 {
                return Err(CatalogError::ZeroCapacity(classroom.id));
            }
        }
        Ok(Self { classrooms })
    }

    /// Parse and validate a JSON array of classrooms.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let classrooms: Vec<Classroom> = serde_json::from_str(json)?;
        Self::new(classrooms)
    }

    pub fn all(&self) -> &[Classroom] {
        &self.classrooms
    }

    pub fn get(&self, id: u32) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.id == id)
    }

    /// Look up a classroom from a route segment such as `"3"`.
    pub fn get_by_route_id(&self, id: &str) -> Option<&Classroom> {
        id.trim().parse::<u32>().ok().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.classrooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classrooms.is_empty()
    }
}
