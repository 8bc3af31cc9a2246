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

//! Built-in sample datasets.

use tracing::info;

use crate::repository::StudentRepository;
use crate::service::StudentService;
use crate::{Result, Student};

const FIRST_NAMES: [&str; 26] = [
    "Alice", "Bob", "Charlie", "Diana", "Ethan", "Fiona", "George", "Hannah", "Ian", "Julia",
    "Kevin", "Laura", "Mike", "Nina", "Oscar", "Paul", "Quinn", "Rachel", "Steve", "Tina", "Uma",
    "Victor", "Wendy", "Xavier", "Yara", "Zack",
];

const LAST_NAMES: [&str; 24] = [
    "Anderson", "Brown", "Clark", "Davis", "Evans", "Fisher", "Garcia", "Harris", "Irwin",
    "Johnson", "King", "Lee", "Martinez", "Nelson", "O'Brien", "Parker", "Quinn", "Roberts",
    "Smith", "Taylor", "Underwood", "Vazquez", "Wilson", "Young",
];

const DEFAULT: [(&str, &str, f64); 15] = [
    ("S001", "Alice Johnson", 9.5),
    ("S002", "Fiona Green", 9.8),
    ("S003", "Laura Palmer", 9.2),
    ("S004", "Bob Smith", 8.2),
    ("S005", "George Wilson", 7.8),
    ("S006", "Julia Roberts", 8.9),
    ("S007", "Oscar Wilde", 8.5),
    ("S008", "Charlie Brown", 7.0),
    ("S009", "Diana Prince", 6.8),
    ("S010", "Kevin Hart", 7.2),
    ("S011", "Mike Ross", 6.5),
    ("S012", "Ethan Hunt", 6.2),
    ("S013", "Hannah Lee", 5.5),
    ("S014", "Nina Simone", 5.8),
    ("S015", "Ian Malcolm", 4.2),
];

const SMALL: [(&str, &str, f64); 5] = [
    ("S001", "Alice Johnson", 9.5),
    ("S002", "Bob Smith", 8.2),
    ("S003", "Charlie Brown", 7.0),
    ("S004", "Diana Prince", 6.2),
    ("S005", "Ethan Hunt", 4.5),
];

/// Marks for the balanced dataset, five per rank from highest to lowest.
const BALANCED: [(&str, [f64; 5]); 5] = [
    ("Excellent", [9.9, 9.5, 9.3, 9.1, 9.0]),
    ("Very Good", [8.8, 8.5, 8.2, 7.9, 7.5]),
    ("Good", [7.4, 7.2, 7.0, 6.8, 6.5]),
    ("Medium", [6.4, 6.0, 5.7, 5.3, 5.0]),
    ("Fail", [4.8, 4.0, 3.2, 2.5, 1.0]),
];

/// A sample dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dataset {
    /// Fifteen students spread over every rank.
    #[default]
    Default,
    /// Five students.
    Small,
    /// Twenty-five students, five per rank.
    Balanced,
    /// `n` students with ids `S0001..` and generated names and marks.
    Generated(usize),
}

impl Dataset {
    /// Builds the students of this dataset in id order.
    pub fn students(self) -> Result<Vec<Student>> {
        match self {
            Self::Default => from_table(&DEFAULT),
            Self::Small => from_table(&SMALL),
            Self::Balanced => balanced(),
            Self::Generated(n) => (1..=n).map(generated).collect(),
        }
    }

    /// Adds every student of this dataset to `service` and returns how many
    /// were added.
    pub fn load<R: StudentRepository>(self, service: &mut StudentService<R>) -> Result<usize> {
        let students = self.students()?;
        let count = students.len();
        for student in students {
            service.add_student(student)?;
        }
        info!("Loaded {:?} dataset: {} students", self, count);
        Ok(count)
    }
}

fn from_table(rows: &[(&str, &str, f64)]) -> Result<Vec<Student>> {
    rows.iter()
        .map(|&(id, name, mark)| Student::new(id, name, mark))
        .collect()
}

fn balanced() -> Result<Vec<Student>> {
    let mut students = Vec::with_capacity(25);
    for (band, (label, marks)) in BALANCED.iter().enumerate() {
        for (i, &mark) in marks.iter().enumerate() {
            let id = format!("S{:03}", band * 5 + i + 1);
            let name = format!("{} Student {}", label, i + 1);
            students.push(Student::new(&id, &name, mark)?);
        }
    }
    Ok(students)
}

fn generated(i: usize) -> Result<Student> {
    let first = FIRST_NAMES[i % FIRST_NAMES.len()];
    let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
    Student::new(
        &format!("S{:04}", i),
        &format!("{} {}", first, last),
        generated_mark(i),
    )
}

/// Smooth wave around 7.0 plus a small index-derived offset, clamped to the
/// mark range and rounded to one decimal.
fn generated_mark(i: usize) -> f64 {
    let wave = 2.5 * (i as f64 * std::f64::consts::PI / 10.0).sin();
    let offset = ((i * 37) % 10) as f64 / 10.0;
    let mark = (7.0 + wave + offset).clamp(0.0, 10.0);
    (mark * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rank;

    #[test]
    fn test_sizes() {
        assert_eq!(Dataset::Default.students().unwrap().len(), 15);
        assert_eq!(Dataset::Small.students().unwrap().len(), 5);
        assert_eq!(Dataset::Balanced.students().unwrap().len(), 25);
        assert_eq!(Dataset::Generated(250).students().unwrap().len(), 250);
        assert!(Dataset::Generated(0).students().unwrap().is_empty());
    }

    #[test]
    fn test_balanced_has_five_per_rank() {
        let students = Dataset::Balanced.students().unwrap();
        for rank in Rank::ALL {
            assert_eq!(
                students.iter().filter(|s| s.rank() == rank).count(),
                5,
                "rank {}",
                rank
            );
        }
        assert_eq!(students[0].id(), "S001");
        assert_eq!(students[0].name(), "Excellent Student 1");
        assert_eq!(students[24].id(), "S025");
    }

    #[test]
    fn test_generated_records() {
        let students = Dataset::Generated(30).students().unwrap();
        assert_eq!(students[0].id(), "S0001");
        assert_eq!(students[0].name(), "Bob Anderson");
        assert_eq!(students[25].id(), "S0026");
        assert_eq!(students[25].name(), "Alice Brown");
        assert!(students.windows(2).all(|w| w[0].id() < w[1].id()));
    }

    #[test]
    fn test_generated_marks() {
        assert_eq!(generated_mark(5), 10.0);
        assert_eq!(generated_mark(15), 5.0);
        assert_eq!(generated_mark(10), 7.0);
        for i in 1..2_000 {
            let mark = generated_mark(i);
            assert!((0.0..=10.0).contains(&mark));
            assert_eq!((mark * 10.0).round() / 10.0, mark);
        }
    }

    #[test]
    fn test_load_into_service() {
        let mut service = StudentService::default();
        assert_eq!(Dataset::Default.load(&mut service).unwrap(), 15);
        assert_eq!(service.len(), 15);
        assert_eq!(service.count_by_rank(Rank::Excellent), 3);
        assert!(Dataset::Small.load(&mut service).is_err());
    }
}
