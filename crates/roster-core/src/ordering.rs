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

//! Field comparators for students.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{Result, RosterError, Student};

/// Boxed comparator over students, ready to hand to a strategy.
pub type StudentComparator = Box<dyn Fn(&Student, &Student) -> Ordering + Send + Sync>;

/// Field students are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SortField {
    Id,
    Name,
    Mark,
    Rank,
}

impl SortField {
    pub const ALL: [SortField; 4] = [Self::Id, Self::Name, Self::Mark, Self::Rank];

    /// Compares two students on this field, ascending.
    ///
    /// Marks use a total order, so the comparison stays consistent even for
    /// values the record itself would reject.
    pub fn compare(self, a: &Student, b: &Student) -> Ordering {
        match self {
            Self::Id => a.id().cmp(b.id()),
            Self::Name => a.name().cmp(b.name()),
            Self::Mark => a.mark().total_cmp(&b.mark()),
            Self::Rank => a.rank().cmp(&b.rank()),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Mark => "mark",
            Self::Rank => "rank",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortField {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "mark" | "marks" => Ok(Self::Mark),
            "rank" => Ok(Self::Rank),
            _ => Err(RosterError::invalid_argument(format!(
                "unknown sort field '{}', expected one of: id, name, mark, rank",
                s
            ))),
        }
    }
}

/// Direction of an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SortOrder {
    #[default]
    Ascending,
    /// The ascending comparator with its result reversed.
    Descending,
}

impl SortOrder {
    pub fn key(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        })
    }
}

impl FromStr for SortOrder {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(RosterError::invalid_argument(format!(
                "unknown sort order '{}', expected asc or desc",
                s
            ))),
        }
    }
}

/// Builds the comparator for `field` in `order`.
///
/// # Examples
///
/// ```
/// use roster_core::{comparator, SortField, SortOrder, Student};
/// use std::cmp::Ordering;
///
/// let a = Student::new("S1", "Alice", 9.0).unwrap();
/// let b = Student::new("S2", "Bob", 6.0).unwrap();
///
/// let cmp = comparator(SortField::Mark, SortOrder::Descending);
/// assert_eq!(cmp(&a, &b), Ordering::Less);
/// ```
pub fn comparator(field: SortField, order: SortOrder) -> StudentComparator {
    match order {
        SortOrder::Ascending => Box::new(move |a: &Student, b: &Student| field.compare(a, b)),
        SortOrder::Descending => {
            Box::new(move |a: &Student, b: &Student| field.compare(a, b).reverse())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Student, Student) {
        (
            Student::new("S2", "Alice", 9.5).unwrap(),
            Student::new("S1", "Bob", 4.0).unwrap(),
        )
    }

    #[test]
    fn test_fields_ascending() {
        let (a, b) = pair();
        assert_eq!(SortField::Id.compare(&a, &b), Ordering::Greater);
        assert_eq!(SortField::Name.compare(&a, &b), Ordering::Less);
        assert_eq!(SortField::Mark.compare(&a, &b), Ordering::Greater);
        assert_eq!(SortField::Rank.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_descending_is_exact_reverse() {
        let (a, b) = pair();
        for field in SortField::ALL {
            let asc = comparator(field, SortOrder::Ascending);
            let desc = comparator(field, SortOrder::Descending);
            assert_eq!(desc(&a, &b), asc(&a, &b).reverse());
            assert_eq!(desc(&a, &a), Ordering::Equal);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Mark".parse::<SortField>().unwrap(), SortField::Mark);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!(
            "ascending".parse::<SortOrder>().unwrap(),
            SortOrder::Ascending
        );
        assert!("age".parse::<SortField>().is_err());
        assert!("up".parse::<SortOrder>().is_err());
    }
}
