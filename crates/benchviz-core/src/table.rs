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

//! The in-memory benchmark table.

use crate::category::Category;
use std::collections::BTreeMap;

/// Elapsed times keyed by optimization level, then category.
///
/// One table is built per platform section and treated as immutable by all
/// downstream consumers. The table may be partial: not every category has to
/// appear at every level, and a missing cell means "no data", never an
/// error. Duplicate (level, category) cells are last-write-wins; the builder
/// reports overwrites as warnings.
///
/// # Examples
///
/// ```
/// use benchviz_core::{BenchmarkTable, Category};
///
/// let mut table = BenchmarkTable::new();
/// table.insert(0, Category::Native, 1318);
/// table.insert(1, Category::Native, 189);
/// assert_eq!(table.get(0, Category::Native), Some(1318));
/// assert_eq!(table.get(0, Category::Gcc), None);
/// assert_eq!(table.levels(), vec![0, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkTable {
    cells: BTreeMap<u8, BTreeMap<Category, u64>>,
}

impl BenchmarkTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell, returning the previous value if the cell was already
    /// populated.
    pub fn insert(&mut self, level: u8, category: Category, elapsed_ms: u64) -> Option<u64> {
        self.cells
            .entry(level)
            .or_default()
            .insert(category, elapsed_ms)
    }

    /// Elapsed time at a cell, if measured.
    #[must_use]
    pub fn get(&self, level: u8, category: Category) -> Option<u64> {
        self.cells.get(&level).and_then(|row| row.get(&category)).copied()
    }

    /// The row for one optimization level.
    #[must_use]
    pub fn row(&self, level: u8) -> Option<&BTreeMap<Category, u64>> {
        self.cells.get(&level)
    }

    /// All optimization levels present in the table, ascending.
    #[must_use]
    pub fn levels(&self) -> Vec<u8> {
        self.cells.keys().copied().collect()
    }

    /// Whether the table has no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
