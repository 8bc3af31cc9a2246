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

//! Record views: list, find, stats, ranks, classify

use colored::Colorize;
use roster_core::validation::parse_mark;
use roster_core::{Rank, RosterError, StudentService};

use crate::error::Result;
use crate::render;

/// List students, optionally restricted to one rank.
pub fn list(service: &StudentService, rank: Option<Rank>) -> Result<()> {
    let students = match rank {
        Some(rank) => service.find_by_rank(rank),
        None => service.find_all(),
    };

    match rank {
        Some(rank) => render::heading(&format!("Students ranked {}", rank)),
        None => render::heading("All students"),
    }
    if students.is_empty() {
        render::warning("No students to show");
        return Ok(());
    }
    render::students(&students);
    println!("\n{} student(s)", students.len());
    Ok(())
}

/// Show the student with `id`.
pub fn find_by_id(service: &StudentService, id: &str) -> Result<()> {
    let student = service
        .find(id)?
        .ok_or_else(|| RosterError::NotFound(id.trim().to_string()))?;

    render::success(&format!("Found student {}", student.id()));
    render::students(std::slice::from_ref(student));
    Ok(())
}

/// Show students whose name contains `query`.
pub fn find_by_name(service: &StudentService, query: &str) -> Result<()> {
    let matches = service.search_by_name(query)?;
    if matches.is_empty() {
        render::warning(&format!("No students match '{}'", query.trim()));
        return Ok(());
    }

    render::success(&format!(
        "{} student(s) match '{}'",
        matches.len(),
        query.trim()
    ));
    render::students(&matches);
    Ok(())
}

/// Show mark statistics and the rank distribution.
pub fn stats(service: &StudentService) -> Result<()> {
    let stats = service.statistics();

    render::heading("Class statistics");
    println!("Students:      {}", stats.count);
    println!("Average mark:  {:.2}", stats.average);
    println!("Highest mark:  {:.2}", stats.highest);
    println!("Lowest mark:   {:.2}", stats.lowest);

    render::heading("Rank distribution");
    let width = longest_rank_label();
    for (rank, count) in stats.per_rank.iter().rev() {
        println!("{}  {}", render::rank_label(*rank, width), count);
    }
    Ok(())
}

/// Show every rank band with its student count.
pub fn ranks(service: &StudentService) -> Result<()> {
    render::heading("Ranking table");
    let width = longest_rank_label();
    println!(
        "{}",
        format!("{:<width$}  {:<12}  Students", "Rank", "Mark range", width = width).bold()
    );
    for rank in Rank::ALL.into_iter().rev() {
        println!(
            "{}  {:<12}  {}",
            render::rank_label(rank, width),
            rank.mark_range(),
            service.count_by_rank(rank)
        );
    }
    Ok(())
}

/// Show the rank of a mark typed as text.
pub fn classify(mark: &str) -> Result<()> {
    let mark = parse_mark(mark)?;
    let rank = Rank::from_mark(mark)?;
    println!(
        "{:.2} -> {} {}",
        mark,
        render::rank_label(rank, 0),
        rank.mark_range()
    );
    Ok(())
}

fn longest_rank_label() -> usize {
    Rank::ALL
        .iter()
        .map(|r| r.label().chars().count())
        .max()
        .unwrap_or(0)
}
