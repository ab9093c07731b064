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

//! Lexing benchmark-result lines into structured measurements.
//!
//! A report section mixes prose, headers and blank lines with the data
//! lines we care about. The lexer recognizes exactly two line shapes:
//!
//! ```text
//! <word> -O<digit>                      <integer>ms
//! <word> ... transpile_O<digit>.c       <integer>ms
//! ```
//!
//! The first shape is a direct invocation with an optimization flag; the
//! second names a transpiled C translation unit, whose file name carries the
//! optimization level the unit was produced at. Everything else is skipped.
//! The optimization level is extracted here, structurally, so that no later
//! stage has to do positional arithmetic on the description string.

use crate::error::ParseWarning;

/// Which of the two recognized line shapes a measurement came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodShape {
    /// `<word> -O<digit>`: a direct run with an optimization flag.
    OptFlag,
    /// `<word> ... transpile_O<digit>.c`: a compiled translation unit.
    TranspileUnit,
}

/// One benchmark line, lexed but not yet classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMeasurement {
    /// The method description: everything before the elapsed-time token,
    /// with runs of whitespace collapsed to single spaces.
    pub descriptor: String,
    /// The line shape the descriptor matched.
    pub shape: MethodShape,
    /// Optimization level extracted from the flag or the unit name.
    pub opt_level: u8,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: u64,
    /// 1-based line number within the section.
    pub line_no: usize,
}

/// Lex every benchmark-result line in a section.
///
/// Output order follows line order in the text, so fixtures parse
/// reproducibly. Lines matching neither shape are skipped without comment;
/// a line that matches a shape but whose elapsed time overflows `u64`
/// produces a [`ParseWarning::BadElapsed`] instead of a measurement.
///
/// # Examples
///
/// ```
/// use benchviz_core::lex::{lex_section, MethodShape};
///
/// let (measurements, warnings) = lex_section("compile -O2    1234ms\n");
/// assert!(warnings.is_empty());
/// assert_eq!(measurements[0].descriptor, "compile -O2");
/// assert_eq!(measurements[0].shape, MethodShape::OptFlag);
/// assert_eq!(measurements[0].opt_level, 2);
/// assert_eq!(measurements[0].elapsed_ms, 1234);
/// ```
#[must_use]
pub fn lex_section(body: &str) -> (Vec<RawMeasurement>, Vec<ParseWarning>) {
    let mut measurements = Vec::new();
    let mut warnings = Vec::new();

    for (idx, line) in body.lines().enumerate() {
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        // Minimum shape: method word, flag or unit, elapsed time.
        if tokens.len() < 3 {
            continue;
        }

        let (method_tokens, time_token) = tokens.split_at(tokens.len() - 1);
        let Some(digits) = elapsed_digits(time_token[0]) else {
            continue;
        };

        let Some((shape, opt_level)) = match_method(method_tokens) else {
            continue;
        };

        match digits.parse::<u64>() {
            Ok(elapsed_ms) => measurements.push(RawMeasurement {
                descriptor: method_tokens.join(" "),
                shape,
                opt_level,
                elapsed_ms,
                line_no,
            }),
            Err(_) => warnings.push(ParseWarning::BadElapsed {
                line: line_no,
                token: time_token[0].to_string(),
            }),
        }
    }

    (measurements, warnings)
}

/// The digit run of an `<integer>ms` token, or `None` if the token has a
/// different shape.
fn elapsed_digits(token: &str) -> Option<&str> {
    let digits = token.strip_suffix("ms")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits)
}

fn match_method(tokens: &[&str]) -> Option<(MethodShape, u8)> {
    if tokens.len() == 2 && is_bare_word(tokens[0]) {
        if let Some(level) = opt_flag_level(tokens[1]) {
            return Some((MethodShape::OptFlag, level));
        }
    }
    if tokens.len() >= 2 && tokens[0].bytes().any(|b| b.is_ascii_alphanumeric()) {
        if let Some(level) = transpile_unit_level(tokens[tokens.len() - 1]) {
            return Some((MethodShape::TranspileUnit, level));
        }
    }
    None
}

fn is_bare_word(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Level digit of a `-O<digit>` flag token.
fn opt_flag_level(token: &str) -> Option<u8> {
    let rest = token.strip_prefix("-O")?;
    let mut bytes = rest.bytes();
    match (bytes.next(), bytes.next()) {
        (Some(d @ b'0'..=b'9'), None) => Some(d - b'0'),
        _ => None,
    }
}

/// Level digit of a `...transpile_O<digit>.c` unit-name token.
fn transpile_unit_level(token: &str) -> Option<u8> {
    let stem = token.strip_suffix(".c")?;
    let idx = stem.rfind("transpile_O")?;
    let rest = &stem[idx + "transpile_O".len()..];
    let mut bytes = rest.bytes();
    match (bytes.next(), bytes.next()) {
        (Some(d @ b'0'..=b'9'), None) => Some(d - b'0'),
        _ => None,
    }
}
