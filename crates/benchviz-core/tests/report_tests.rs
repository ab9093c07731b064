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

//! End-to-end parsing tests over a realistic report fixture.

use benchviz_core::{parse_report, Category, SpeedupTable};

const REPORT: &str = include_str!("fixtures/benchmark_results.txt");
const MARKERS: [&str; 2] = ["x86_64", "riscv64"];

#[test]
fn fixture_parses_without_warnings() {
    let platforms = parse_report(REPORT, &MARKERS).unwrap();
    assert_eq!(platforms.len(), 2);
    for platform in &platforms {
        assert!(
            platform.warnings.is_empty(),
            "unexpected warnings for {}: {:?}",
            platform.marker,
            platform.warnings
        );
    }
}

#[test]
fn fixture_tables_are_complete() {
    let platforms = parse_report(REPORT, &MARKERS).unwrap();
    for platform in &platforms {
        assert_eq!(platform.table.levels(), vec![0, 1, 2, 3]);
        for level in 0..=3 {
            for cat in Category::ALL {
                assert!(
                    platform.table.get(level, cat).is_some(),
                    "{} missing ({cat}, O{level})",
                    platform.marker
                );
            }
        }
    }
}

#[test]
fn fixture_known_cells() {
    let platforms = parse_report(REPORT, &MARKERS).unwrap();
    let x86 = &platforms[0];
    assert_eq!(x86.marker, "x86_64");
    assert_eq!(x86.table.get(0, Category::Interpreter), Some(21745));
    assert_eq!(x86.table.get(3, Category::Native), Some(189));
    assert_eq!(x86.table.get(2, Category::Gcc), Some(209));
    let riscv = &platforms[1];
    assert_eq!(riscv.table.get(3, Category::Clang), Some(1587));
}

#[test]
fn fixture_speedups_are_sane() {
    let platforms = parse_report(REPORT, &MARKERS).unwrap();
    let speedup = SpeedupTable::from_table(&platforms[0].table).unwrap();
    assert_eq!(speedup.levels(), &[1, 2, 3]);
    assert_eq!(speedup.categories(), Category::ALL.to_vec());

    // 21745 / 9787 ≈ 2.22
    let interp = speedup.ratios(Category::Interpreter).unwrap();
    let r = interp[0].unwrap();
    assert!((r - 21745.0 / 9787.0).abs() < 1e-9);

    // Every ratio in a complete table is defined and >= 1 for this fixture.
    for cat in Category::ALL {
        for slot in speedup.ratios(cat).unwrap() {
            assert!(slot.unwrap() >= 1.0);
        }
    }
}

#[test]
fn parsing_is_deterministic() {
    let a = parse_report(REPORT, &MARKERS).unwrap();
    let b = parse_report(REPORT, &MARKERS).unwrap();
    assert_eq!(a, b);
}
