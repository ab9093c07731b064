// Benchviz - Benchmark Report Visualization
//
// Copyright (c) 2025 Benchviz contributors.
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

//! The `validate` command: parse and print, render nothing.

use super::{print_warnings, read_report};
use crate::config::ChartConfig;
use crate::error::Result;
use benchviz_core::{parse_report, Category};
use colored::Colorize;
use std::path::Path;

/// Parse a report and print its per-platform tables and warnings.
///
/// Useful when editing a report by hand: shows exactly which cells were
/// recognized and what was dropped, without touching the filesystem.
pub fn validate(report: &Path, config: Option<&Path>) -> Result<()> {
    let config = ChartConfig::load(config)?;
    let text = read_report(report)?;

    let markers: Vec<&str> = config.platforms.iter().map(|p| p.marker.as_str()).collect();
    let platforms = parse_report(&text, &markers)?;

    for parsed in &platforms {
        println!("{}", parsed.marker.bold());
        for level in parsed.table.levels() {
            let cells: Vec<String> = Category::ALL
                .iter()
                .map(|&cat| match parsed.table.get(level, cat) {
                    Some(ms) => format!("{cat}={ms}ms"),
                    None => format!("{cat}=-"),
                })
                .collect();
            println!("  O{level}: {}", cells.join("  "));
        }
        if parsed.table.is_empty() {
            println!("  {}", "no benchmark lines recognized".yellow());
        }
        print_warnings(&parsed.marker, &parsed.warnings);
    }

    Ok(())
}
