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

//! Core parsing and data model for benchmark reports.
//!
//! A report is a plain-text file produced by a benchmark harness: one
//! section per target platform, each containing one line per (execution
//! strategy, optimization level) measurement. This crate turns that text
//! into typed tables:
//!
//! 1. [`split_sections`] isolates each platform's section.
//! 2. [`lex`] recognizes benchmark-result lines and extracts structured
//!    measurements.
//! 3. [`Category::classify`] assigns each measurement to one of the four
//!    execution strategies.
//! 4. [`parse_section`] folds everything into a [`BenchmarkTable`].
//! 5. [`SpeedupTable`] derives ratios against the O0 baseline.
//!
//! Rendering lives in `benchviz-render`; this crate performs no I/O.

mod category;
mod error;
pub mod lex;
mod parser;
mod section;
mod speedup;
mod table;

pub use category::Category;
pub use error::{ParseWarning, ReportError, Result};
pub use parser::{parse_report, parse_section, parse_section_strict, ParsedPlatform};
pub use section::{split_sections, PlatformSection};
pub use speedup::{SpeedupTable, BASELINE_LEVEL};
pub use table::BenchmarkTable;
