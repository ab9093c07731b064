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

//! Error and warning types for benchmark report parsing.

use crate::category::Category;
use std::fmt;
use thiserror::Error;

/// Errors produced while parsing a benchmark report or deriving data from it.
///
/// Structural failures abort the whole run: a missing platform marker means
/// we do not know where one platform's numbers end and the next begin, and a
/// zero measured time makes every speedup ratio for that category undefined.
/// Per-line anomalies are *not* errors; they are reported as [`ParseWarning`]s
/// so a run never silently loses data.
///
/// # Examples
///
/// ```
/// use benchviz_core::ReportError;
///
/// let err = ReportError::MissingMarker {
///     marker: "riscv64".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "platform marker 'riscv64' not found in report"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReportError {
    /// A required platform marker never occurs in the report text.
    #[error("platform marker '{marker}' not found in report")]
    MissingMarker {
        /// The marker that was searched for.
        marker: String,
    },

    /// A structurally matched line carried an unusable field.
    ///
    /// Only raised by [`crate::parse_section_strict`]; the default parse
    /// surfaces the same condition as [`ParseWarning::BadElapsed`].
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// Line number within the section (1-based).
        line: usize,
        /// Detailed error message.
        message: String,
    },

    /// A speedup computation would divide by a zero measured time.
    #[error("zero elapsed time for {category} at O{level}: speedup is undefined")]
    ZeroTime {
        /// Optimization level of the zero-valued cell.
        level: u8,
        /// Category of the zero-valued cell.
        category: Category,
    },
}

/// Convenience type alias for `Result` with [`ReportError`].
pub type Result<T> = std::result::Result<T, ReportError>;

/// A recoverable anomaly encountered while parsing a report section.
///
/// The original report format tolerates prose between benchmark lines, so
/// unmatched text is normal. Warnings cover the cases that *look* like data
/// but were dropped or overwritten, which a benchmark report should never
/// hide from its reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A line matched the benchmark-line shape but its method description
    /// belongs to none of the four known categories.
    Unclassified {
        /// Line number within the section (1-based).
        line: usize,
        /// The unrecognized method description.
        descriptor: String,
    },

    /// Two lines populated the same (level, category) cell; the later value
    /// replaced the earlier one.
    DuplicateCell {
        /// Optimization level of the cell.
        level: u8,
        /// Category of the cell.
        category: Category,
        /// The value that was overwritten.
        replaced: u64,
        /// The value that was kept.
        kept: u64,
    },

    /// A matched line's elapsed-time field did not fit in a `u64`.
    BadElapsed {
        /// Line number within the section (1-based).
        line: usize,
        /// The offending numeric token.
        token: String,
    },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unclassified { line, descriptor } => {
                write!(f, "line {line}: unrecognized method '{descriptor}', dropped")
            }
            Self::DuplicateCell {
                level,
                category,
                replaced,
                kept,
            } => write!(
                f,
                "duplicate cell ({category}, O{level}): {replaced}ms replaced by {kept}ms"
            ),
            Self::BadElapsed { line, token } => {
                write!(f, "line {line}: elapsed time '{token}' does not fit in u64, dropped")
            }
        }
    }
}
