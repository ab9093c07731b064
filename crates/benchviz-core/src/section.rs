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

//! Splitting a report into per-platform sections.

use crate::error::{ReportError, Result};

/// The portion of a report belonging to one target platform.
///
/// Borrowed from the report text; sections are created once by
/// [`split_sections`] and discarded after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformSection<'a> {
    /// The marker that opens this section.
    pub marker: &'a str,
    /// The section text, marker included, up to the next marker or end of
    /// the report.
    pub body: &'a str,
}

/// Split a report into one section per platform marker.
///
/// Each section spans from the first occurrence of its marker to the start
/// of the next marker in positional order; the last section runs to the end
/// of the text. Sections never overlap and no text between the first marker
/// and the end of the report is lost. The returned vector is ordered by
/// first appearance in the text, which may differ from the order of
/// `markers`.
///
/// # Errors
///
/// Returns [`ReportError::MissingMarker`] if any marker never occurs.
///
/// # Examples
///
/// ```
/// use benchviz_core::split_sections;
///
/// let report = "x86_64 results\ncompile -O0 100ms\nriscv64 results\ncompile -O0 900ms\n";
/// let sections = split_sections(report, &["x86_64", "riscv64"]).unwrap();
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].marker, "x86_64");
/// assert!(sections[0].body.contains("100ms"));
/// assert!(!sections[0].body.contains("900ms"));
/// ```
pub fn split_sections<'a>(
    report: &'a str,
    markers: &[&'a str],
) -> Result<Vec<PlatformSection<'a>>> {
    let mut found: Vec<(usize, &str)> = Vec::with_capacity(markers.len());
    for marker in markers {
        match report.find(marker) {
            Some(pos) => found.push((pos, marker)),
            None => {
                return Err(ReportError::MissingMarker {
                    marker: (*marker).to_string(),
                })
            }
        }
    }
    found.sort_by_key(|&(pos, _)| pos);

    let mut sections = Vec::with_capacity(found.len());
    for (i, &(start, marker)) in found.iter().enumerate() {
        let end = found
            .get(i + 1)
            .map_or(report.len(), |&(next_start, _)| next_start);
        sections.push(PlatformSection {
            marker,
            body: &report[start..end],
        });
    }
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
Benchmark results for mandelbrot.b

x86_64 (Zen2 4.4GHz)
interpret -O0    21745ms
compile -O0      1318ms

riscv64 (Ky X1 1.6GHz)
interpret -O0    118254ms
compile -O0      11105ms
";

    #[test]
    fn test_two_sections_in_text_order() {
        let sections = split_sections(REPORT, &["x86_64", "riscv64"]).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].marker, "x86_64");
        assert_eq!(sections[1].marker, "riscv64");
    }

    #[test]
    fn test_sections_do_not_overlap() {
        let sections = split_sections(REPORT, &["x86_64", "riscv64"]).unwrap();
        assert!(sections[0].body.contains("21745ms"));
        assert!(!sections[0].body.contains("118254ms"));
        assert!(sections[1].body.contains("118254ms"));
        assert!(!sections[1].body.contains("21745ms"));
    }

    #[test]
    fn test_last_section_runs_to_end() {
        let sections = split_sections(REPORT, &["x86_64", "riscv64"]).unwrap();
        assert!(sections[1].body.ends_with("11105ms\n"));
    }

    #[test]
    fn test_marker_argument_order_irrelevant() {
        let forward = split_sections(REPORT, &["x86_64", "riscv64"]).unwrap();
        let reverse = split_sections(REPORT, &["riscv64", "x86_64"]).unwrap();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_concatenation_covers_tail() {
        let sections = split_sections(REPORT, &["x86_64", "riscv64"]).unwrap();
        let joined: String = sections.iter().map(|s| s.body).collect();
        let first = REPORT.find("x86_64").unwrap();
        assert_eq!(joined, &REPORT[first..]);
    }

    #[test]
    fn test_missing_marker_errors() {
        let err = split_sections(REPORT, &["x86_64", "aarch64"]).unwrap_err();
        assert_eq!(
            err,
            ReportError::MissingMarker {
                marker: "aarch64".to_string()
            }
        );
    }
}
