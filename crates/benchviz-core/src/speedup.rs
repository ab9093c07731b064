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

//! Speedup ratios relative to the zero-optimization baseline.

use crate::category::Category;
use crate::error::{ReportError, Result};
use crate::table::BenchmarkTable;
use std::collections::BTreeMap;

/// The baseline optimization level speedups are computed against.
pub const BASELINE_LEVEL: u8 = 0;

/// Per-category speedup ratios against the O0 baseline.
///
/// Each category present in the baseline row gets one ratio slot per
/// non-baseline level found anywhere in the table, ascending. A `None` slot
/// means the category was not measured at that level; the renderer draws no
/// bar and no label there, which is not the same thing as a zero-valued bar.
/// Categories absent from the baseline contribute nothing at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeedupTable {
    levels: Vec<u8>,
    ratios: BTreeMap<Category, Vec<Option<f64>>>,
}

impl SpeedupTable {
    /// Derive speedups from a benchmark table.
    ///
    /// Ratio = baseline time ÷ level time. If the table has no baseline row
    /// the result is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ZeroTime`] if the baseline or any measured
    /// level time is zero: a zero denominator would turn into an infinite
    /// bar, and a zero baseline makes every ratio for the category
    /// meaningless.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchviz_core::{BenchmarkTable, Category, SpeedupTable};
    ///
    /// let mut table = BenchmarkTable::new();
    /// table.insert(0, Category::Interpreter, 20000);
    /// table.insert(0, Category::Native, 500);
    /// table.insert(1, Category::Interpreter, 10000);
    ///
    /// let speedup = SpeedupTable::from_table(&table).unwrap();
    /// assert_eq!(speedup.levels(), &[1]);
    /// assert_eq!(speedup.ratios(Category::Interpreter), Some(&[Some(2.0)][..]));
    /// // Native was not measured at O1: a hole, not a zero.
    /// assert_eq!(speedup.ratios(Category::Native), Some(&[None][..]));
    /// ```
    pub fn from_table(table: &BenchmarkTable) -> Result<Self> {
        let Some(baseline) = table.row(BASELINE_LEVEL) else {
            return Ok(Self::default());
        };

        let levels: Vec<u8> = table
            .levels()
            .into_iter()
            .filter(|&l| l != BASELINE_LEVEL)
            .collect();

        let mut ratios = BTreeMap::new();
        for (&category, &baseline_ms) in baseline {
            if baseline_ms == 0 {
                return Err(ReportError::ZeroTime {
                    level: BASELINE_LEVEL,
                    category,
                });
            }
            let mut row = Vec::with_capacity(levels.len());
            for &level in &levels {
                match table.get(level, category) {
                    Some(0) => return Err(ReportError::ZeroTime { level, category }),
                    Some(ms) => row.push(Some(baseline_ms as f64 / ms as f64)),
                    None => row.push(None),
                }
            }
            ratios.insert(category, row);
        }

        Ok(Self { levels, ratios })
    }

    /// The non-baseline levels the ratio slots are aligned with, ascending.
    #[must_use]
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Categories that had a baseline measurement, in [`Category`] order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.ratios.keys().copied().collect()
    }

    /// The ratio slots for one category, aligned with [`Self::levels`].
    #[must_use]
    pub fn ratios(&self, category: Category) -> Option<&[Option<f64>]> {
        self.ratios.get(&category).map(Vec::as_slice)
    }

    /// Whether there is nothing to chart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty() || self.ratios.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cells: &[(u8, Category, u64)]) -> BenchmarkTable {
        let mut t = BenchmarkTable::new();
        for &(level, cat, ms) in cells {
            t.insert(level, cat, ms);
        }
        t
    }

    #[test]
    fn test_basic_ratio() {
        let t = table(&[
            (0, Category::Native, 1000),
            (1, Category::Native, 500),
            (2, Category::Native, 250),
        ]);
        let s = SpeedupTable::from_table(&t).unwrap();
        assert_eq!(s.levels(), &[1, 2]);
        assert_eq!(s.ratios(Category::Native), Some(&[Some(2.0), Some(4.0)][..]));
    }

    #[test]
    fn test_missing_level_cell_is_none() {
        let t = table(&[
            (0, Category::Interpreter, 20000),
            (0, Category::Native, 500),
            (1, Category::Interpreter, 10000),
        ]);
        let s = SpeedupTable::from_table(&t).unwrap();
        assert_eq!(s.ratios(Category::Interpreter), Some(&[Some(2.0)][..]));
        assert_eq!(s.ratios(Category::Native), Some(&[None][..]));
    }

    #[test]
    fn test_category_missing_from_baseline_skipped() {
        let t = table(&[(0, Category::Native, 500), (1, Category::Gcc, 100)]);
        let s = SpeedupTable::from_table(&t).unwrap();
        assert_eq!(s.ratios(Category::Gcc), None);
        assert_eq!(s.categories(), vec![Category::Native]);
    }

    #[test]
    fn test_no_baseline_row_is_empty() {
        let t = table(&[(1, Category::Native, 500)]);
        let s = SpeedupTable::from_table(&t).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn test_zero_baseline_errors() {
        let t = table(&[(0, Category::Clang, 0), (1, Category::Clang, 10)]);
        let err = SpeedupTable::from_table(&t).unwrap_err();
        assert_eq!(
            err,
            ReportError::ZeroTime {
                level: 0,
                category: Category::Clang
            }
        );
    }

    #[test]
    fn test_zero_level_time_errors() {
        let t = table(&[(0, Category::Gcc, 100), (2, Category::Gcc, 0)]);
        let err = SpeedupTable::from_table(&t).unwrap_err();
        assert_eq!(
            err,
            ReportError::ZeroTime {
                level: 2,
                category: Category::Gcc
            }
        );
    }

    #[test]
    fn test_only_baseline_row_has_no_levels() {
        let t = table(&[(0, Category::Native, 100)]);
        let s = SpeedupTable::from_table(&t).unwrap();
        assert!(s.levels().is_empty());
        assert!(s.is_empty());
    }
}
