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

//! Student service.
//!
//! Business operations over a [`StudentRepository`]: record maintenance,
//! lookups, ordering through any sort strategy, search by id through any
//! search strategy, class statistics, and benchmark runs over the stored
//! records.
//!
//! Reads never hand out the repository's own storage. Sorting and searching
//! work on a materialized copy, so stored order is unaffected by either.

use roster_algo::{SearchOutcome, SearchStrategy, SortAlgorithm, SortMetrics, SortStrategy};
use roster_bench::{BenchmarkRunner, RepeatedRun, SearchReport, SortReport};
use tracing::{debug, info};

use crate::ordering::{comparator, SortField, SortOrder};
use crate::repository::{InMemoryStudentRepository, StudentRepository};
use crate::validation::{validate_id, validate_mark, validate_name};
use crate::{Rank, Result, RosterError, Student};

/// Students in the order a sort strategy produced, with its counters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortedStudents {
    pub students: Vec<Student>,
    pub metrics: SortMetrics,
}

/// Answer of a strategy-driven search by id.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchHit {
    /// The matching student, if any.
    pub student: Option<Student>,
    /// Index into the searched sequence and the counters of the call.
    pub outcome: SearchOutcome,
    /// Field the searched sequence was ordered by, `None` for stored order.
    pub arrangement: Option<SortField>,
}

/// Mark statistics over every stored student.
///
/// Average, highest and lowest are `0.0` when there are no students.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassStatistics {
    pub count: usize,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
    /// Student count for every rank, lowest rank first.
    pub per_rank: Vec<(Rank, usize)>,
}

/// Business operations over stored students.
#[derive(Debug)]
pub struct StudentService<R = InMemoryStudentRepository> {
    repository: R,
    runner: BenchmarkRunner,
}

impl Default for StudentService<InMemoryStudentRepository> {
    fn default() -> Self {
        Self::new(InMemoryStudentRepository::new())
    }
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            runner: BenchmarkRunner::default(),
        }
    }

    /// Uses `runner` for benchmark operations.
    pub fn with_runner(mut self, runner: BenchmarkRunner) -> Self {
        self.runner = runner;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn runner(&self) -> &BenchmarkRunner {
        &self.runner
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    // ------------------------------------------------------------------
    // Maintenance
    // ------------------------------------------------------------------

    /// Adds a new student.
    ///
    /// Only the record invariants apply here; stricter input rules live in
    /// [`validation`](crate::validation) and are applied by whoever reads
    /// the input.
    ///
    /// # Errors
    ///
    /// [`RosterError::DuplicateId`] if the id is already stored, or the
    /// error from [`Student::new`].
    pub fn add(&mut self, id: &str, name: &str, mark: f64) -> Result<()> {
        self.add_student(Student::new(id, name, mark)?)
    }

    /// Adds an already built student.
    pub fn add_student(&mut self, student: Student) -> Result<()> {
        if self.repository.exists(student.id()) {
            return Err(RosterError::DuplicateId(student.id().to_string()));
        }
        debug!("Adding student {}", student.id());
        self.repository.insert(student);
        Ok(())
    }

    /// Replaces name and mark of an existing student.
    pub fn update(&mut self, id: &str, name: &str, mark: f64) -> Result<Student> {
        let id = validate_id(id)?;
        if !self.repository.exists(id) {
            return Err(RosterError::NotFound(id.to_string()));
        }
        let updated = Student::new(id, name, mark)?;
        self.store(updated)
    }

    /// Replaces the mark of an existing student, keeping the name.
    pub fn update_mark(&mut self, id: &str, mark: f64) -> Result<Student> {
        let id = validate_id(id)?;
        let mark = validate_mark(mark)?;
        let mut student = self.existing(id)?;
        student.set_mark(mark)?;
        self.store(student)
    }

    /// Replaces the name of an existing student, keeping the mark.
    pub fn update_name(&mut self, id: &str, name: &str) -> Result<Student> {
        let id = validate_id(id)?;
        let name = validate_name(name)?;
        let mut student = self.existing(id)?;
        student.set_name(name)?;
        self.store(student)
    }

    /// Removes a student and returns it.
    pub fn delete(&mut self, id: &str) -> Result<Student> {
        let id = validate_id(id)?;
        let removed = self
            .repository
            .remove(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        debug!("Deleted student {}", id);
        Ok(removed)
    }

    fn existing(&self, id: &str) -> Result<Student> {
        self.repository
            .find(id)
            .cloned()
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    fn store(&mut self, student: Student) -> Result<Student> {
        if !self.repository.update(student.clone()) {
            return Err(RosterError::NotFound(student.id().to_string()));
        }
        debug!("Updated {}", student);
        Ok(student)
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    /// Looks up a student by id.
    pub fn find(&self, id: &str) -> Result<Option<&Student>> {
        Ok(self.repository.find(validate_id(id)?))
    }

    pub fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.repository.exists(validate_id(id)?))
    }

    /// Every student in stored order.
    pub fn find_all(&self) -> Vec<Student> {
        self.repository.find_all()
    }

    pub fn find_by_rank(&self, rank: Rank) -> Vec<Student> {
        self.repository.find_by_rank(rank)
    }

    /// Students whose name contains `query`, ignoring case.
    ///
    /// # Errors
    ///
    /// [`RosterError::InvalidArgument`] if `query` is blank.
    pub fn search_by_name(&self, query: &str) -> Result<Vec<Student>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Err(RosterError::invalid_argument(
                "Name query cannot be empty",
            ));
        }

        Ok(self
            .repository
            .find_all()
            .into_iter()
            .filter(|s| s.name().to_lowercase().contains(&query))
            .collect())
    }

    // ------------------------------------------------------------------
    // Strategy-driven ordering and search
    // ------------------------------------------------------------------

    /// Sorts a copy of every student by `field` in `order`.
    pub fn sort(
        &self,
        strategy: &dyn SortStrategy<Student>,
        field: SortField,
        order: SortOrder,
    ) -> SortedStudents {
        let mut students = self.repository.find_all();
        let cmp = comparator(field, order);
        let metrics = strategy.sort(&mut students, &*cmp);
        info!(
            "{} sorted {} students by {} {}: {} comparisons, {} moves",
            strategy.name(),
            students.len(),
            field,
            order,
            metrics.comparisons,
            metrics.moves
        );
        SortedStudents { students, metrics }
    }

    /// Finds a student by id through `strategy`.
    ///
    /// Strategies that need sorted input search the students ordered by id;
    /// the others search them in stored order.
    pub fn search_by_id(
        &self,
        strategy: &dyn SearchStrategy<Student>,
        id: &str,
    ) -> Result<SearchHit> {
        let id = validate_id(id)?;
        let arrangement = strategy.requires_sorted().then_some(SortField::Id);
        let students = self.arranged(arrangement);

        let outcome = strategy.search(&students, &Student::key(id), &by_id);
        info!(
            "{} looked for {} in {} students: index {}, {} comparisons",
            strategy.name(),
            id,
            students.len(),
            outcome.index_or_sentinel(),
            outcome.metrics.comparisons
        );

        Ok(SearchHit {
            student: outcome.index.and_then(|i| students.get(i).cloned()),
            outcome,
            arrangement,
        })
    }

    /// Stored students, ordered by `arrangement` through Quick Sort.
    fn arranged(&self, arrangement: Option<SortField>) -> Vec<Student> {
        let mut students = self.repository.find_all();
        if let Some(field) = arrangement {
            let quick: &dyn SortStrategy<Student> = &SortAlgorithm::Quick;
            let metrics = quick.sort(&mut students, &|a: &Student, b: &Student| {
                field.compare(a, b)
            });
            debug!(
                "Arranged {} students by {}: {} comparisons",
                students.len(),
                field,
                metrics.comparisons
            );
        }
        students
    }

    // ------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------

    pub fn average_mark(&self) -> f64 {
        let students = self.repository.find_all();
        if students.is_empty() {
            return 0.0;
        }
        students.iter().map(Student::mark).sum::<f64>() / students.len() as f64
    }

    pub fn highest_mark(&self) -> f64 {
        self.repository
            .find_all()
            .iter()
            .map(Student::mark)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    pub fn lowest_mark(&self) -> f64 {
        self.repository
            .find_all()
            .iter()
            .map(Student::mark)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    pub fn count_by_rank(&self, rank: Rank) -> usize {
        self.repository.find_by_rank(rank).len()
    }

    /// Every statistic at once.
    pub fn statistics(&self) -> ClassStatistics {
        ClassStatistics {
            count: self.repository.len(),
            average: self.average_mark(),
            highest: self.highest_mark(),
            lowest: self.lowest_mark(),
            per_rank: Rank::ALL
                .into_iter()
                .map(|rank| (rank, self.count_by_rank(rank)))
                .collect(),
        }
    }

    // ------------------------------------------------------------------
    // Benchmarks
    // ------------------------------------------------------------------

    /// Runs every sort strategy over the stored students.
    pub fn compare_sorts(
        &self,
        field: SortField,
        order: SortOrder,
        strategies: &[&dyn SortStrategy<Student>],
    ) -> Result<SortReport> {
        let students = self.repository.find_all();
        let cmp = comparator(field, order);
        info!(
            "Benchmarking sorts by {} {} over {} students",
            field,
            order,
            students.len()
        );
        Ok(self.runner.compare_sorts(&students, &*cmp, strategies)?)
    }

    /// Repeats every sort strategy over the stored students.
    pub fn repeat_sorts(
        &self,
        field: SortField,
        order: SortOrder,
        strategies: &[&dyn SortStrategy<Student>],
    ) -> Result<Vec<RepeatedRun>> {
        let students = self.repository.find_all();
        let cmp = comparator(field, order);
        Ok(self.runner.repeat_sorts(&students, &*cmp, strategies)?)
    }

    /// Runs every search strategy for `id` over the students ordered by
    /// `arrangement`.
    ///
    /// The id does not have to be stored; a miss is a valid benchmark.
    /// `declared_sorted` states whether the sequence counts as sorted by
    /// id. With `None` the engine checks the arranged sequence itself.
    pub fn compare_searches(
        &self,
        id: &str,
        arrangement: SortField,
        declared_sorted: Option<bool>,
        strategies: &[&dyn SearchStrategy<Student>],
    ) -> Result<SearchReport> {
        let id = validate_id(id)?;
        let students = self.arranged(Some(arrangement));
        info!(
            "Benchmarking searches for {} over {} students ordered by {}",
            id,
            students.len(),
            arrangement
        );
        Ok(self
            .runner
            .compare_searches(
                &students,
                &Student::key(id),
                &by_id,
                declared_sorted,
                strategies,
            )?)
    }
}

fn by_id(a: &Student, b: &Student) -> std::cmp::Ordering {
    SortField::Id.compare(a, b)
}
