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

//! Console rendering for records and benchmark reports.
//!
//! Everything prints to stdout. Colors come from `colored` and are turned
//! off globally by `--no-color` or a non-terminal stdout.

use colored::{ColoredString, Colorize};
use roster_bench::report::format_duration;
use roster_bench::{
    aggregate_results, BreakdownEntry, Highlight, Recommendation, RepeatedRun, SummaryTable,
};
use roster_core::{Rank, Student};

/// Column headers of the student table.
const STUDENT_COLUMNS: [&str; 4] = ["ID", "Name", "Mark", "Rank"];

/// Section title.
pub fn heading(title: &str) {
    println!();
    println!("{}", title.bright_blue().bold());
    println!("{}", "─".repeat(title.chars().count()).bright_blue());
}

/// Rank label in its band color.
pub fn rank_label(rank: Rank, width: usize) -> ColoredString {
    let text = format!("{:<width$}", rank.label(), width = width);
    match rank {
        Rank::Excellent => text.magenta().bold(),
        Rank::VeryGood => text.green(),
        Rank::Good => text.cyan(),
        Rank::Medium => text.yellow(),
        Rank::Fail => text.red(),
    }
}

/// Students as an aligned table.
pub fn students(students: &[Student]) {
    let rows: Vec<Vec<String>> = students
        .iter()
        .map(|s| {
            vec![
                s.id().to_string(),
                s.name().to_string(),
                format!("{:.2}", s.mark()),
                s.rank().label().to_string(),
            ]
        })
        .collect();
    let table = SummaryTable {
        headers: STUDENT_COLUMNS.to_vec(),
        rows,
    };
    let widths = table.column_widths();

    print_header(&table.headers, &widths);
    for (student, row) in students.iter().zip(&table.rows) {
        println!(
            "{}  {}  {:>w2$}  {}",
            pad(&row[0], widths[0]),
            pad(&row[1], widths[1]),
            row[2],
            rank_label(student.rank(), widths[3]),
            w2 = widths[2]
        );
    }
}

/// A benchmark summary table.
pub fn summary(table: &SummaryTable) {
    let widths = table.column_widths();
    print_header(&table.headers, &widths);
    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| pad(cell, w))
            .collect();
        println!("{}", cells.join("  ").trim_end());
    }
}

/// Per-strategy breakdown with highlight tags.
pub fn breakdown(entries: &[BreakdownEntry]) {
    let label_width = entries
        .iter()
        .flat_map(|e| e.fields.iter().map(|f| f.label.chars().count()))
        .max()
        .unwrap_or(0);

    for entry in entries {
        println!();
        println!("{}", entry.algorithm.bold());
        for field in &entry.fields {
            let label = format!("{}:", field.label);
            match field.highlight {
                Some(highlight) => println!(
                    "  {}  {}  {}",
                    pad(&label, label_width + 1),
                    field.value,
                    highlight_tag(highlight)
                ),
                None => println!("  {}  {}", pad(&label, label_width + 1), field.value),
            }
        }
    }
}

fn highlight_tag(highlight: Highlight) -> ColoredString {
    format!("[{}]", highlight.label()).green().bold()
}

/// Recommendation block.
pub fn recommendation(rec: &Recommendation) {
    println!();
    if rec.is_warning() {
        println!("{} {}", "!".yellow().bold(), rec.headline.yellow().bold());
    } else {
        println!("{}", rec.headline.bold());
    }
    for line in &rec.advice {
        println!("  • {}", line);
    }
    if let Some(winner) = &rec.winner {
        println!();
        println!(
            "{} {} ({})",
            format!("{}:", winner.title).green().bold(),
            winner.algorithm.bold(),
            winner.detail
        );
    }
}

/// Timing statistics of repeated runs.
pub fn repeated_runs(runs: &[RepeatedRun]) {
    let table = SummaryTable {
        headers: vec!["Algorithm", "Runs", "Mean", "Median", "Min", "Max", "Std Dev"],
        rows: runs
            .iter()
            .map(|run| {
                let s = &run.statistics;
                vec![
                    run.name.to_string(),
                    s.count.to_string(),
                    format_duration(s.mean),
                    format_duration(s.median),
                    format_duration(s.min),
                    format_duration(s.max),
                    format_duration(s.std_dev),
                ]
            })
            .collect(),
    };
    summary(&table);

    let ranking = aggregate_results(runs);
    if let (Some(fastest), Some(slowest)) = (ranking.fastest, ranking.slowest) {
        println!();
        println!("{} {}", "Fastest on average:".bold(), fastest.green().bold());
        println!("{} {}", "Slowest on average:".bold(), slowest);
        println!(
            "{} {}",
            "Total time:".bold(),
            format_duration(ranking.total_time)
        );
    }
}

/// Success line.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Warning line.
pub fn warning(message: &str) {
    println!("{} {}", "!".yellow().bold(), message);
}

fn print_header(headers: &[&str], widths: &[usize]) {
    let cells: Vec<String> = headers
        .iter()
        .zip(widths)
        .map(|(h, &w)| pad(h, w))
        .collect();
    println!("{}", cells.join("  ").trim_end().bold());
    let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    println!("{}", "─".repeat(total));
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}
