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

//! Roster Core
//!
//! Student records and the operations around them: rank bands, input
//! validation, an in-memory repository, field comparators and a service
//! that drives the instrumented strategies from `roster-algo` and the
//! benchmark engine from `roster-bench` over the stored records.
//!
//! # Examples
//!
//! ```
//! use roster_algo::{SearchAlgorithm, SortAlgorithm};
//! use roster_core::{Dataset, Rank, SortField, SortOrder, StudentService};
//!
//! let mut service = StudentService::default();
//! Dataset::Small.load(&mut service).unwrap();
//!
//! let sorted = service.sort(&SortAlgorithm::Quick, SortField::Mark, SortOrder::Descending);
//! assert_eq!(sorted.students[0].rank(), Rank::Excellent);
//!
//! let hit = service.search_by_id(&SearchAlgorithm::Binary, "S004").unwrap();
//! assert_eq!(hit.student.unwrap().name(), "Diana Prince");
//! ```

mod error;
pub mod ordering;
mod rank;
pub mod repository;
pub mod seed;
pub mod service;
mod student;
pub mod validation;

pub use error::{Result, RosterError};
pub use ordering::{comparator, SortField, SortOrder, StudentComparator};
pub use rank::{Rank, MAX_MARK, MIN_MARK};
pub use repository::{InMemoryStudentRepository, StudentRepository};
pub use seed::Dataset;
pub use service::{ClassStatistics, SearchHit, SortedStudents, StudentService};
pub use student::Student;
