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

//! The student record.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Rank, Result, RosterError};

/// One student.
///
/// Invariants, held across every mutation:
/// - `id` and `name` are trimmed and non-empty
/// - `mark` lies in `[0.0, 10.0]`
/// - `rank` is the band of the current `mark`
///
/// Two students are equal when their ids are equal; name and mark are not
/// part of identity.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Student {
    id: String,
    name: String,
    mark: f64,
    rank: Rank,
}

impl Student {
    /// Builds a student, trimming `id` and `name`.
    ///
    /// # Errors
    ///
    /// - [`RosterError::Validation`] if `id` or `name` is blank
    /// - [`RosterError::MarkOutOfRange`] if `mark` is outside `[0.0, 10.0]`
    pub fn new(id: &str, name: &str, mark: f64) -> Result<Self> {
        let id = id.trim();
        if id.is_empty() {
            return Err(RosterError::validation("id", "Student ID cannot be empty"));
        }

        Ok(Self {
            id: id.to_string(),
            name: checked_name(name)?.to_string(),
            mark,
            rank: Rank::from_mark(mark)?,
        })
    }

    /// Stand-in carrying only an id, used as a search target.
    pub(crate) fn key(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            mark: 0.0,
            rank: Rank::Fail,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> f64 {
        self.mark
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Replaces the name. Leaves the record unchanged on error.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = checked_name(name)?.to_string();
        Ok(())
    }

    /// Replaces the mark and recomputes the rank. Leaves the record
    /// unchanged on error.
    pub fn set_mark(&mut self, mark: f64) -> Result<()> {
        self.rank = Rank::from_mark(mark)?;
        self.mark = mark;
        Ok(())
    }
}

fn checked_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::validation(
            "name",
            "Student name cannot be empty",
        ));
    }
    Ok(name)
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student[id={}, name={}, mark={:.2}, rank={}]",
            self.id, self.name, self.mark, self.rank
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_trims_and_ranks() {
        let s = Student::new("  S001 ", " Alice Johnson  ", 9.5).unwrap();
        assert_eq!(s.id(), "S001");
        assert_eq!(s.name(), "Alice Johnson");
        assert_eq!(s.mark(), 9.5);
        assert_eq!(s.rank(), Rank::Excellent);
    }

    #[test]
    fn test_new_rejects_bad_fields() {
        assert!(matches!(
            Student::new(" ", "Alice", 5.0),
            Err(RosterError::Validation { field: "id", .. })
        ));
        assert!(matches!(
            Student::new("S1", "", 5.0),
            Err(RosterError::Validation { field: "name", .. })
        ));
        assert!(matches!(
            Student::new("S1", "Alice", 10.5),
            Err(RosterError::MarkOutOfRange { .. })
        ));
    }

    #[test]
    fn test_set_mark_updates_rank() {
        let mut s = Student::new("S1", "Alice", 4.0).unwrap();
        assert_eq!(s.rank(), Rank::Fail);

        s.set_mark(7.5).unwrap();
        assert_eq!(s.rank(), Rank::VeryGood);

        assert!(s.set_mark(-1.0).is_err());
        assert_eq!(s.mark(), 7.5);
        assert_eq!(s.rank(), Rank::VeryGood);
    }

    #[test]
    fn test_set_name_keeps_old_on_error() {
        let mut s = Student::new("S1", "Alice", 4.0).unwrap();
        assert!(s.set_name("   ").is_err());
        assert_eq!(s.name(), "Alice");
        s.set_name(" Bob ").unwrap();
        assert_eq!(s.name(), "Bob");
    }

    #[test]
    fn test_identity_is_id() {
        let a = Student::new("S1", "Alice", 4.0).unwrap();
        let b = Student::new("S1", "Someone Else", 9.0).unwrap();
        let c = Student::new("S2", "Alice", 4.0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Student> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        let s = Student::new("S001", "Alice Johnson", 9.5).unwrap();
        assert_eq!(
            s.to_string(),
            "Student[id=S001, name=Alice Johnson, mark=9.50, rank=Excellent]"
        );
    }
}
