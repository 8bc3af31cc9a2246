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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

// Test helper: roster binary with colors off and no inherited log filter
fn roster() -> Command {
    let mut cmd = Command::cargo_bin("roster").expect("Failed to find roster binary");
    cmd.arg("--no-color")
        .env_remove("ROSTER_LOG")
        .env_remove("ROSTER_MAX_DATASET");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is UTF-8")
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    roster()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Roster - student records"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    roster()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("roster"));
}

#[test]
fn test_no_subcommand_fails() {
    roster().assert().failure();
}

// ===== Record Command Tests =====

#[test]
fn test_list_default_dataset() {
    roster()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("S001"))
        .stdout(predicate::str::contains("Alice Johnson"))
        .stdout(predicate::str::contains("15 student(s)"));
}

#[test]
fn test_list_by_rank() {
    roster()
        .args(["list", "--rank", "excellent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fiona Green"))
        .stdout(predicate::str::contains("3 student(s)"))
        .stdout(predicate::str::contains("Bob Smith").not());
}

#[test]
fn test_list_unknown_rank_fails() {
    roster().args(["list", "--rank", "great"]).assert().failure();
}

#[test]
fn test_find_by_id() {
    roster()
        .args(["find", "--id", "S004"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob Smith"));
}

#[test]
fn test_find_missing_id_fails() {
    roster()
        .args(["find", "--id", "S999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Student with ID 'S999' not found",
        ));
}

#[test]
fn test_find_invalid_id_fails() {
    roster()
        .args(["find", "--id", "S#1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only letters and numbers"));
}

#[test]
fn test_find_by_name() {
    roster()
        .args(["find", "--name", "BROWN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Charlie Brown"));
}

#[test]
fn test_find_requires_a_key() {
    roster().arg("find").assert().failure();
    roster()
        .args(["find", "--id", "S001", "--name", "Alice"])
        .assert()
        .failure();
}

#[test]
fn test_sort_by_mark_descending() {
    let out = stdout_of(roster().args([
        "sort",
        "--by",
        "mark",
        "--order",
        "desc",
        "--algorithm",
        "bubble",
    ]));

    assert!(out.contains("Bubble Sort"));
    assert!(out.contains("comparisons"));
    let top = out.find("Fiona Green").expect("Fiona listed");
    let bottom = out.find("Ian Malcolm").expect("Ian listed");
    assert!(top < bottom, "9.8 must come before 4.2");
}

#[test]
fn test_sort_unknown_algorithm_fails() {
    roster()
        .args(["sort", "--algorithm", "bogo"])
        .assert()
        .failure();
}

#[test]
fn test_binary_search_hit() {
    roster()
        .args(["search", "--id", "S010", "--algorithm", "binary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kevin Hart"))
        .stdout(predicate::str::contains("Found at index 9"))
        .stdout(predicate::str::contains("ordered by id"));
}

#[test]
fn test_linear_search_miss() {
    roster()
        .args(["search", "--id", "S999", "--algorithm", "linear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not found (index -1)"))
        .stdout(predicate::str::contains("15 comparisons"));
}

#[test]
fn test_stats_small_dataset() {
    roster()
        .args(["--dataset", "small", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Students:      5"))
        .stdout(predicate::str::contains("Average mark:  7.08"))
        .stdout(predicate::str::contains("Highest mark:  9.50"))
        .stdout(predicate::str::contains("Lowest mark:   4.50"));
}

#[test]
fn test_ranks_table() {
    roster()
        .arg("ranks")
        .assert()
        .success()
        .stdout(predicate::str::contains("[9.0 - 10.0]"))
        .stdout(predicate::str::contains("[0.0 - 5.0)"))
        .stdout(predicate::str::contains("Very Good"));
}

#[test]
fn test_classify_boundaries() {
    roster()
        .args(["classify", "6.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Good"));

    roster()
        .args(["classify", "10.0001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mark cannot be greater than 10.0"));

    roster()
        .args(["classify", "-0.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mark cannot be less than 0.0"));
}

// ===== Dataset Option Tests =====

#[test]
fn test_extra_student() {
    roster()
        .args(["--student", "X01,Zoe Quinn,9.9", "find", "--id", "X01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zoe Quinn"));
}

#[test]
fn test_extra_student_input_rules() {
    roster()
        .args(["--student", "X01,Zo,9.9", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 3 characters"));
}

#[test]
fn test_generated_requires_size() {
    roster()
        .args(["--dataset", "generated", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--size"));
}

#[test]
fn test_generated_size_limit() {
    roster()
        .env("ROSTER_MAX_DATASET", "50")
        .args(["--dataset", "generated", "--size", "51", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum"));
}

// ===== Comparison Tests =====

#[test]
fn test_compare_sort() {
    roster()
        .args(["compare", "sort", "--by", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bubble Sort"))
        .stdout(predicate::str::contains("Quick Sort"))
        .stdout(predicate::str::contains("Merge Sort"))
        .stdout(predicate::str::contains("[FASTEST]"))
        .stdout(predicate::str::contains("For small datasets"))
        .stdout(predicate::str::contains("Overall Winner:"));
}

#[test]
fn test_compare_sort_medium_generated() {
    roster()
        .args(["--dataset", "generated", "--size", "200", "compare", "sort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("For medium datasets"));
}

#[test]
fn test_compare_sort_repeated() {
    roster()
        .args(["compare", "sort", "--repeat", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timing over 3 runs"))
        .stdout(predicate::str::contains("Std Dev"))
        .stdout(predicate::str::contains("Fastest on average:"))
        .stdout(predicate::str::contains("Slowest on average:"));
}

#[test]
fn test_compare_sort_zero_repeat_fails() {
    roster()
        .args(["compare", "sort", "--repeat", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("repeat"));
}

#[test]
fn test_compare_search_sorted() {
    roster()
        .args(["compare", "search", "--id", "S005"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sorted by id"))
        .stdout(predicate::str::contains("Most Efficient:"))
        .stdout(predicate::str::contains("Binary Search"));
}

#[test]
fn test_compare_search_unsorted() {
    roster()
        .args(["compare", "search", "--id", "S005", "--unsorted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data is NOT sorted:"))
        .stdout(predicate::str::contains("You MUST use Linear Search"));
}

#[test]
fn test_compare_search_unsorted_is_always_linear_only() {
    // A single student is in id order whichever way it is arranged.
    roster()
        .args([
            "--dataset",
            "generated",
            "--size",
            "1",
            "compare",
            "search",
            "--id",
            "S0001",
            "--unsorted",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(unsorted)"))
        .stdout(predicate::str::contains("You MUST use Linear Search"))
        .stdout(predicate::str::contains("sorted by id").not());
}

#[test]
fn test_compare_search_miss() {
    roster()
        .args(["compare", "search", "--id", "S999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"))
        .stdout(predicate::str::contains("Most Efficient:").not());
}

// ===== Logging Tests =====

#[test]
fn test_verbose_logs_to_stderr() {
    roster()
        .args(["-vv", "stats"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded 15 students"));
}

#[test]
fn test_log_env_overrides_verbosity() {
    roster()
        .env("ROSTER_LOG", "off")
        .args(["-vv", "stats"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_quiet_by_default() {
    roster()
        .arg("stats")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// ===== Completion Tests =====

#[test]
fn test_completion_bash() {
    roster()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("roster"));
}

#[test]
fn test_completion_install_instructions() {
    roster()
        .args(["completion", "zsh", "--install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fpath"));
}

#[test]
fn test_completion_unsupported_shell() {
    roster()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell"));
}
