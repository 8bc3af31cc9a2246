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

//! Error types for strategy selection and invocation.

use thiserror::Error;

/// Result type for algorithm operations.
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Errors raised by the algorithm layer.
///
/// Absent sequences or comparators cannot be expressed through the strategy
/// traits, so the only failures left are the ones a caller can construct
/// from untrusted input: names that do not match any strategy and argument
/// values that are rejected before any work starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// An argument was rejected before the operation began.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No strategy with the requested name exists.
    #[error("Unknown {kind} algorithm '{name}'. Expected one of: {expected}")]
    UnknownAlgorithm {
        /// Algorithm family ("sort" or "search").
        kind: &'static str,
        /// The name that failed to match.
        name: String,
        /// Comma-separated list of accepted names.
        expected: &'static str,
    },
}

impl AlgorithmError {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
