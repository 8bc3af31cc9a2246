// Roster - Student Records and Instrumented Algorithms
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Input rules for user-supplied student fields.
//!
//! These are stricter than the invariants [`Student`](crate::Student)
//! enforces on itself and are applied where text enters the system: ids
//! used for lookups and records typed in by a user.

use crate::rank::{MAX_MARK, MIN_MARK};
use crate::{Result, RosterError};

/// Shortest accepted id.
pub const MIN_ID_LENGTH: usize = 2;
/// Longest accepted id.
pub const MAX_ID_LENGTH: usize = 20;
/// Shortest accepted name.
pub const MIN_NAME_LENGTH: usize = 3;
/// Longest accepted name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Checks an id and returns it trimmed.
///
/// # Examples
///
/// ```
/// use roster_core::validation::validate_id;
///
/// assert_eq!(validate_id("  S001 ").unwrap(), "S001");
/// assert!(validate_id("S-1").is_err());
/// ```
pub fn validate_id(id: &str) -> Result<&str> {
    let id = id.trim();
    let len = id.chars().count();

    if id.is_empty() {
        return Err(RosterError::validation("id", "Student ID cannot be empty"));
    }
    if len < MIN_ID_LENGTH {
        return Err(RosterError::validation(
            "id",
            format!("Student ID must be at least {} characters", MIN_ID_LENGTH),
        ));
    }
    if len > MAX_ID_LENGTH {
        return Err(RosterError::validation(
            "id",
            format!("Student ID cannot exceed {} characters", MAX_ID_LENGTH),
        ));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(RosterError::validation(
            "id",
            "Student ID must contain only letters and numbers",
        ));
    }

    Ok(id)
}

/// Checks a name and returns it trimmed.
pub fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    let len = name.chars().count();

    if name.is_empty() {
        return Err(RosterError::validation(
            "name",
            "Student name cannot be empty",
        ));
    }
    if len < MIN_NAME_LENGTH {
        return Err(RosterError::validation(
            "name",
            format!(
                "Student name must be at least {} characters",
                MIN_NAME_LENGTH
            ),
        ));
    }
    if len > MAX_NAME_LENGTH {
        return Err(RosterError::validation(
            "name",
            format!("Student name cannot exceed {} characters", MAX_NAME_LENGTH),
        ));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace())
    {
        return Err(RosterError::validation(
            "name",
            "Student name must contain only letters and spaces",
        ));
    }

    Ok(name)
}

/// Checks a mark.
pub fn validate_mark(mark: f64) -> Result<f64> {
    if mark.is_nan() {
        return Err(RosterError::validation("mark", "Mark cannot be NaN"));
    }
    if mark.is_infinite() {
        return Err(RosterError::validation("mark", "Mark cannot be infinite"));
    }
    if mark < MIN_MARK {
        return Err(RosterError::validation(
            "mark",
            format!("Mark cannot be less than {:.1}", MIN_MARK),
        ));
    }
    if mark > MAX_MARK {
        return Err(RosterError::validation(
            "mark",
            format!("Mark cannot be greater than {:.1}", MAX_MARK),
        ));
    }
    Ok(mark)
}

/// Parses and checks a mark typed as text.
pub fn parse_mark(input: &str) -> Result<f64> {
    let mark = input.trim().parse::<f64>().map_err(|_| {
        RosterError::validation("mark", format!("Mark must be a number, got '{}'", input.trim()))
    })?;
    validate_mark(mark)
}
