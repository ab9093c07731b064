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

//! Parsing whole report sections into benchmark tables.

use crate::category::Category;
use crate::error::{ParseWarning, ReportError, Result};
use crate::lex::lex_section;
use crate::section::split_sections;
use crate::table::BenchmarkTable;

/// The parsed data for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPlatform {
    /// The platform marker this table was parsed from.
    pub marker: String,
    /// Elapsed times by level and category.
    pub table: BenchmarkTable,
    /// Everything that was dropped or overwritten along the way.
    pub warnings: Vec<ParseWarning>,
}

/// Parse one section's text into a benchmark table.
///
/// Lexes the section, classifies each measurement's method description, and
/// folds the classified measurements into a table. Measurements whose
/// description matches no known category are dropped with an
/// [`ParseWarning::Unclassified`]; duplicate cells keep the later value and
/// report a [`ParseWarning::DuplicateCell`].
///
/// # Examples
///
/// ```
/// use benchviz_core::{parse_section, Category};
///
/// let (table, warnings) = parse_section("compile -O2 1234ms\n");
/// assert!(warnings.is_empty());
/// assert_eq!(table.get(2, Category::Native), Some(1234));
/// ```
#[must_use]
pub fn parse_section(body: &str) -> (BenchmarkTable, Vec<ParseWarning>) {
    let (measurements, mut warnings) = lex_section(body);
    let mut table = BenchmarkTable::new();

    for m in measurements {
        let Some(category) = Category::classify(&m.descriptor) else {
            warnings.push(ParseWarning::Unclassified {
                line: m.line_no,
                descriptor: m.descriptor,
            });
            continue;
        };
        if let Some(replaced) = table.insert(m.opt_level, category, m.elapsed_ms) {
            warnings.push(ParseWarning::DuplicateCell {
                level: m.opt_level,
                category,
                replaced,
                kept: m.elapsed_ms,
            });
        }
    }

    (table, warnings)
}

/// Parse one section's text, refusing lines with unusable elapsed times.
///
/// Behaves like [`parse_section`] except that a measurement line whose
/// elapsed-time field cannot be represented is a hard
/// [`ReportError::Parse`] error rather than a
/// [`ParseWarning::BadElapsed`] warning. Classification warnings are still
/// returned alongside the table.
///
/// # Errors
///
/// Returns [`ReportError::Parse`] for the first line whose elapsed time
/// does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use benchviz_core::parse_section_strict;
///
/// let err = parse_section_strict("compile -O1 99999999999999999999999ms\n");
/// assert!(err.is_err());
/// ```
pub fn parse_section_strict(body: &str) -> Result<(BenchmarkTable, Vec<ParseWarning>)> {
    let (table, warnings) = parse_section(body);
    if let Some(ParseWarning::BadElapsed { line, token }) = warnings
        .iter()
        .find(|w| matches!(w, ParseWarning::BadElapsed { .. }))
    {
        return Err(ReportError::Parse {
            line: *line,
            message: format!("elapsed time '{token}' does not fit in u64"),
        });
    }
    Ok((table, warnings))
}

/// Parse a full report into one table per platform marker.
///
/// Sections are returned in order of first appearance in the text.
///
/// # Errors
///
/// Returns [`crate::ReportError::MissingMarker`] if any marker never occurs
/// in the report; no partial result is produced in that case.
pub fn parse_report(report: &str, markers: &[&str]) -> Result<Vec<ParsedPlatform>> {
    let sections = split_sections(report, markers)?;
    Ok(sections
        .into_iter()
        .map(|section| {
            let (table, warnings) = parse_section(section.body);
            ParsedPlatform {
                marker: section.marker.to_string(),
                table,
                warnings,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section_classifies_all_four() {
        let body = "\
interpret -O0    21745ms
compile -O0      1318ms
x86_64-gcc -O3 transpile_O0.c   1042ms
x86_64-clang -O3 transpile_O0.c 1130ms
";
        let (table, warnings) = parse_section(body);
        assert!(warnings.is_empty());
        assert_eq!(table.get(0, Category::Interpreter), Some(21745));
        assert_eq!(table.get(0, Category::Native), Some(1318));
        assert_eq!(table.get(0, Category::Gcc), Some(1042));
        assert_eq!(table.get(0, Category::Clang), Some(1130));
    }

    #[test]
    fn test_unclassified_line_warns_and_drops() {
        let (table, warnings) = parse_section("mystery -O1 99ms\n");
        assert!(table.is_empty());
        assert_eq!(
            warnings,
            vec![ParseWarning::Unclassified {
                line: 1,
                descriptor: "mystery -O1".to_string(),
            }]
        );
    }

    #[test]
    fn test_duplicate_cell_last_write_wins() {
        let body = "compile -O1 200ms\ncompile -O1 150ms\n";
        let (table, warnings) = parse_section(body);
        assert_eq!(table.get(1, Category::Native), Some(150));
        assert_eq!(
            warnings,
            vec![ParseWarning::DuplicateCell {
                level: 1,
                category: Category::Native,
                replaced: 200,
                kept: 150,
            }]
        );
    }

    #[test]
    fn test_strict_parse_rejects_overflowing_elapsed() {
        let body = "compile -O0 10ms\ninterpret -O0 99999999999999999999999ms\n";
        let err = parse_section_strict(body).unwrap_err();
        assert_eq!(
            err,
            ReportError::Parse {
                line: 2,
                message:
                    "elapsed time '99999999999999999999999' does not fit in u64".to_string(),
            }
        );
    }

    #[test]
    fn test_strict_parse_keeps_classification_warnings() {
        let (table, warnings) = parse_section_strict("mystery -O1 99ms\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(
            warnings,
            vec![ParseWarning::Unclassified {
                line: 1,
                descriptor: "mystery -O1".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_report_two_platforms() {
        let report = "\
x86_64 (Zen2 4.4GHz)
compile -O0 1318ms
riscv64 (Ky X1 1.6GHz)
compile -O0 11105ms
";
        let platforms = parse_report(report, &["x86_64", "riscv64"]).unwrap();
        assert_eq!(platforms.len(), 2);
        assert_eq!(platforms[0].marker, "x86_64");
        assert_eq!(platforms[0].table.get(0, Category::Native), Some(1318));
        assert_eq!(platforms[1].marker, "riscv64");
        assert_eq!(platforms[1].table.get(0, Category::Native), Some(11105));
    }

    #[test]
    fn test_parse_report_missing_marker_is_fatal() {
        let report = "x86_64\ncompile -O0 1ms\n";
        assert!(parse_report(report, &["x86_64", "riscv64"]).is_err());
    }

    #[test]
    fn test_marker_line_is_not_data() {
        // The gcc descriptor in the marker line itself must not produce a
        // cell: it has no elapsed-time token.
        let report = "x86_64 gcc/clang comparison\ncompile -O0 5ms\n";
        let (table, warnings) = parse_section(report);
        assert_eq!(table.get(0, Category::Native), Some(5));
        assert_eq!(table.levels(), vec![0]);
        assert!(warnings.is_empty());
    }
}
