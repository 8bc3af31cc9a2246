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

//! Error types for record handling.

use roster_algo::AlgorithmError;
use roster_bench::BenchError;
use thiserror::Error;

/// Result type for record operations
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors raised by the record layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// Argument rejected before any work started
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// User input failed a field rule
    #[error("{reason}")]
    Validation {
        /// Field the rule belongs to ("id", "name" or "mark")
        field: &'static str,
        /// Human-readable rule that was broken
        reason: String,
    },

    /// Mark outside the accepted band
    #[error("Mark {mark} is out of range [0.0, 10.0]")]
    MarkOutOfRange {
        /// Offending mark
        mark: f64,
    },

    /// A student with this id is already stored
    #[error("Student with ID '{0}' already exists")]
    DuplicateId(String),

    /// No student with this id is stored
    #[error("Student with ID '{0}' not found")]
    NotFound(String),

    /// Benchmark run failed
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// Strategy lookup failed
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

impl RosterError {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a validation error for `field`.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
