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

//! The closed set of execution strategies a report compares.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four execution strategies a benchmark line can belong to.
///
/// The set is closed by construction of the report generator: every data
/// line describes the program run under the interpreter, under the native
/// compiler, or transpiled and then built with one of two reference C
/// compilers. The variants order matches the conventional left-to-right
/// order in the charts.
///
/// # Examples
///
/// ```
/// use benchviz_core::Category;
///
/// assert_eq!(Category::classify("compile -O2"), Some(Category::Native));
/// assert_eq!(Category::classify("x86_64-gcc -O3 transpile_O1.c"), Some(Category::Gcc));
/// assert_eq!(Category::classify("section header"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Run under the interpreter.
    Interpreter,
    /// Natively compiled by the benchmarked toolchain.
    Native,
    /// Transpiled to C, then built with gcc.
    Gcc,
    /// Transpiled to C, then built with clang.
    Clang,
}

impl Category {
    /// All four categories in chart order.
    pub const ALL: [Category; 4] = [
        Category::Interpreter,
        Category::Native,
        Category::Gcc,
        Category::Clang,
    ];

    /// The compiled-only subset, used for charts that omit the interpreter.
    pub const COMPILED: [Category; 3] = [Category::Native, Category::Gcc, Category::Clang];

    /// Stable lowercase identifier, matching the configuration key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Interpreter => "interpreter",
            Self::Native => "native",
            Self::Gcc => "gcc",
            Self::Clang => "clang",
        }
    }

    /// Classify a method description by its identifying substring.
    ///
    /// The rules are checked in a fixed priority order; the report generator
    /// guarantees no description matches two of them. Descriptions matching
    /// none of them (section headers, prose that happens to look like a data
    /// line) classify as `None` and are dropped by the caller.
    #[must_use]
    pub fn classify(descriptor: &str) -> Option<Category> {
        if descriptor.contains("interpret") {
            Some(Self::Interpreter)
        } else if descriptor.contains("compile") {
            Some(Self::Native)
        } else if descriptor.contains("gcc") {
            Some(Self::Gcc)
        } else if descriptor.contains("clang") {
            Some(Self::Clang)
        } else {
            None
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
