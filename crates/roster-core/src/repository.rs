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

//! Record storage.

use crate::{Rank, Student};

/// Storage for students keyed by id.
///
/// Implementations keep ids unique and hand out copies from
/// [`find_all`](StudentRepository::find_all), so callers can reorder the
/// result without touching the store.
pub trait StudentRepository {
    /// Stores `student`. Returns `false` and stores nothing if the id is taken.
    fn insert(&mut self, student: Student) -> bool;

    /// Removes and returns the student with `id`.
    fn remove(&mut self, id: &str) -> Option<Student>;

    /// Replaces the stored student that has the same id. Returns `false` if
    /// there is none.
    fn update(&mut self, student: Student) -> bool;

    /// Looks up a student by id.
    fn find(&self, id: &str) -> Option<&Student>;

    /// Copy of every stored student.
    fn find_all(&self) -> Vec<Student>;

    /// Number of stored students.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn exists(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Copy of every stored student in `rank`.
    fn find_by_rank(&self, rank: Rank) -> Vec<Student> {
        self.find_all()
            .into_iter()
            .filter(|s| s.rank() == rank)
            .collect()
    }
}

/// Vector-backed repository that keeps insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    students: Vec<Student>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|s| s.id() == id)
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn insert(&mut self, student: Student) -> bool {
        if self.exists(student.id()) {
            return false;
        }
        self.students.push(student);
        true
    }

    fn remove(&mut self, id: &str) -> Option<Student> {
        let index = self.position(id)?;
        Some(self.students.remove(index))
    }

    fn update(&mut self, student: Student) -> bool {
        match self.position(student.id()) {
            Some(index) => {
                self.students[index] = student;
                true
            }
            None => false,
        }
    }

    fn find(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    fn find_all(&self) -> Vec<Student> {
        self.students.clone()
    }

    fn len(&self) -> usize {
        self.students.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, mark: f64) -> Student {
        Student::new(id, "Test Student", mark).unwrap()
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut repo = InMemoryStudentRepository::new();
        assert!(repo.is_empty());
        assert!(repo.insert(student("S1", 5.0)));
        assert!(!repo.insert(student("S1", 9.0)));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find("S1").unwrap().mark(), 5.0);
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut repo = InMemoryStudentRepository::new();
        for id in ["S3", "S1", "S2"] {
            repo.insert(student(id, 5.0));
        }
        let ids: Vec<String> = repo.find_all().iter().map(|s| s.id().to_string()).collect();
        assert_eq!(ids, vec!["S3", "S1", "S2"]);
    }

    #[test]
    fn test_update_in_place() {
        let mut repo = InMemoryStudentRepository::new();
        repo.insert(student("S1", 5.0));
        repo.insert(student("S2", 5.0));

        assert!(repo.update(student("S1", 9.5)));
        assert!(!repo.update(student("S9", 1.0)));

        let all = repo.find_all();
        assert_eq!(all[0].id(), "S1");
        assert_eq!(all[0].rank(), Rank::Excellent);
    }

    #[test]
    fn test_remove() {
        let mut repo = InMemoryStudentRepository::new();
        repo.insert(student("S1", 5.0));
        assert_eq!(repo.remove("S1").map(|s| s.id().to_string()), Some("S1".to_string()));
        assert!(repo.remove("S1").is_none());
        assert!(!repo.exists("S1"));
    }

    #[test]
    fn test_find_all_is_a_copy() {
        let mut repo = InMemoryStudentRepository::new();
        repo.insert(student("S1", 5.0));
        let mut copy = repo.find_all();
        copy.clear();
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_find_by_rank() {
        let mut repo = InMemoryStudentRepository::new();
        repo.insert(student("S1", 9.5));
        repo.insert(student("S2", 3.0));
        repo.insert(student("S3", 9.0));
        let excellent = repo.find_by_rank(Rank::Excellent);
        assert_eq!(excellent.len(), 2);
        assert!(repo.find_by_rank(Rank::Good).is_empty());
    }
}
