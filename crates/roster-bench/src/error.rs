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

//! Error types for benchmark runs.
//!
//! Every failure is detected before any strategy runs, so a returned error
//! never comes with partial results.

use roster_algo::AlgorithmError;
use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Caller passed an argument the engine cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Dataset size exceeds the configured limit
    #[error("Dataset size {requested} exceeds maximum allowed limit of {max}")]
    DatasetTooLarge {
        /// Requested size
        requested: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Strategy lookup or invocation failed
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

impl BenchError {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

/// Validate that a dataset size is within `max`
///
/// # Examples
///
/// ```
/// use roster_bench::error::validate_dataset_size;
///
/// assert!(validate_dataset_size(1_000, 1_000).is_ok());
/// assert!(validate_dataset_size(1_001, 1_000).is_err());
/// ```
#[inline]
pub fn validate_dataset_size(size: usize, max: usize) -> Result<()> {
    if size > max {
        Err(BenchError::DatasetTooLarge {
            requested: size,
            max,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dataset_size() {
        assert!(validate_dataset_size(0, 10).is_ok());
        assert!(validate_dataset_size(10, 10).is_ok());

        match validate_dataset_size(11, 10) {
            Err(BenchError::DatasetTooLarge { requested, max }) => {
                assert_eq!(requested, 11);
                assert_eq!(max, 10);
            }
            other => panic!("Expected DatasetTooLarge error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let err = BenchError::DatasetTooLarge {
            requested: 200_000,
            max: 100_000,
        };
        let msg = err.to_string();
        assert!(msg.contains("200000"));
        assert!(msg.contains("100000"));

        let err = BenchError::invalid_config("repeat", "must be at least 1");
        let msg = err.to_string();
        assert!(msg.contains("repeat"));
        assert!(msg.contains("must be at least 1"));
    }

    #[test]
    fn test_from_algorithm_error() {
        let err: BenchError = AlgorithmError::invalid_argument("bad").into();
        assert_eq!(err.to_string(), "Invalid argument: bad");
        assert!(matches!(err, BenchError::Algorithm(_)));
    }
}
