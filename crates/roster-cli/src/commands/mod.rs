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

//! CLI command implementations

mod compare;
mod completion;
mod records;
mod strategies;

pub use compare::{compare_searches, compare_sorts};
pub use completion::{generate_completion_for_command, installation_instructions};
pub use records::{classify, find_by_id, find_by_name, list, ranks, stats};
pub use strategies::{search, sort};

use roster_bench::{validate_dataset_size, BenchConfig, BenchmarkRunner, DEFAULT_MAX_DATASET_SIZE};
use roster_core::validation::{parse_mark, validate_id, validate_name};
use roster_core::{Dataset, Student, StudentService};
use tracing::debug;

use crate::cli::{DatasetKind, GlobalArgs};
use crate::error::{CliError, Result};

/// Environment variable overriding the dataset size limit.
pub const MAX_DATASET_ENV: &str = "ROSTER_MAX_DATASET";

/// Dataset size limit from [`MAX_DATASET_ENV`], or
/// [`DEFAULT_MAX_DATASET_SIZE`] when unset or not a number.
pub fn max_dataset_size() -> usize {
    std::env::var(MAX_DATASET_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_DATASET_SIZE)
}

/// Builds the service for one invocation: the selected dataset followed by
/// every `--student`.
///
/// # Errors
///
/// - [`CliError::InvalidInput`] for `--size` without `--dataset generated`
///   or the reverse, and for a malformed `--student`
/// - [`CliError::Bench`] if `--size` is above the limit
/// - [`CliError::Roster`] if a `--student` breaks an input rule or reuses an id
pub fn load_service(args: &GlobalArgs) -> Result<StudentService> {
    let max = max_dataset_size();
    let dataset = match (args.dataset, args.size) {
        (DatasetKind::Generated, Some(size)) => {
            validate_dataset_size(size, max)?;
            Dataset::Generated(size)
        }
        (DatasetKind::Generated, None) => {
            return Err(CliError::invalid_input(
                "--dataset generated requires --size <N>",
            ))
        }
        (_, Some(_)) => {
            return Err(CliError::invalid_input(
                "--size only applies to --dataset generated",
            ))
        }
        (DatasetKind::Default, None) => Dataset::Default,
        (DatasetKind::Small, None) => Dataset::Small,
        (DatasetKind::Balanced, None) => Dataset::Balanced,
    };

    let runner = BenchmarkRunner::new(BenchConfig::default().with_max_dataset_size(max))?;
    let mut service = StudentService::default().with_runner(runner);
    dataset.load(&mut service)?;

    for input in &args.students {
        service.add_student(parse_student(input)?)?;
    }
    debug!(
        "Loaded {} students ({} from --student)",
        service.len(),
        args.students.len()
    );
    Ok(service)
}

/// Parses an `ID,NAME,MARK` triple under the input rules.
///
/// # Examples
///
/// ```
/// use roster_cli::commands::parse_student;
///
/// let student = parse_student("S100, Zoe Quinn, 8.5").unwrap();
/// assert_eq!(student.name(), "Zoe Quinn");
/// assert!(parse_student("S100,Zoe Quinn").is_err());
/// ```
pub fn parse_student(input: &str) -> Result<Student> {
    let parts: Vec<&str> = input.split(',').collect();
    let [id, name, mark] = parts.as_slice() else {
        return Err(CliError::invalid_input(format!(
            "expected ID,NAME,MARK, got '{}'",
            input
        )));
    };

    let id = validate_id(id)?;
    let name = validate_name(name)?;
    let mark = parse_mark(mark)?;
    Ok(Student::new(id, name, mark)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{Rank, RosterError};

    #[test]
    fn test_parse_student() {
        let student = parse_student("X01,Zoe Quinn,9.1").unwrap();
        assert_eq!(student.id(), "X01");
        assert_eq!(student.rank(), Rank::Excellent);
    }

    #[test]
    fn test_parse_student_applies_input_rules() {
        assert!(matches!(
            parse_student("X01,Zoe O'Quinn,9.1"),
            Err(CliError::Roster(RosterError::Validation { field: "name", .. }))
        ));
        assert!(matches!(
            parse_student("X-1,Zoe Quinn,9.1"),
            Err(CliError::Roster(RosterError::Validation { field: "id", .. }))
        ));
        assert!(matches!(
            parse_student("X01,Zoe Quinn,10.5"),
            Err(CliError::Roster(RosterError::Validation { field: "mark", .. }))
        ));
        assert!(matches!(
            parse_student("X01,Zoe,Quinn,9.1"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_load_service_datasets() {
        let args = GlobalArgs::default();
        assert_eq!(load_service(&args).unwrap().len(), 15);

        let args = GlobalArgs {
            dataset: DatasetKind::Balanced,
            students: vec!["X01,Zoe Quinn,9.1".to_string()],
            ..GlobalArgs::default()
        };
        assert_eq!(load_service(&args).unwrap().len(), 26);
    }

    #[test]
    fn test_load_service_size_rules() {
        let args = GlobalArgs {
            dataset: DatasetKind::Generated,
            ..GlobalArgs::default()
        };
        assert!(matches!(load_service(&args), Err(CliError::InvalidInput(_))));

        let args = GlobalArgs {
            size: Some(10),
            ..GlobalArgs::default()
        };
        assert!(matches!(load_service(&args), Err(CliError::InvalidInput(_))));

        let args = GlobalArgs {
            dataset: DatasetKind::Generated,
            size: Some(DEFAULT_MAX_DATASET_SIZE + 1),
            ..GlobalArgs::default()
        };
        assert!(matches!(load_service(&args), Err(CliError::Bench(_))));
    }

    #[test]
    fn test_duplicate_student_rejected() {
        let args = GlobalArgs {
            students: vec!["S001,Zoe Quinn,9.1".to_string()],
            ..GlobalArgs::default()
        };
        assert!(matches!(
            load_service(&args),
            Err(CliError::Roster(RosterError::DuplicateId(_)))
        ));
    }
}
