// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;

/// One spending entry: a category label and a non-negative amount.
///
/// Records are read-only input; the chart derives its slices from them and never
/// mutates the list it was given.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    /// Category label used for grouping.
    pub category: String,
    /// Amount spent, in whole currency units.
    pub amount: u64,
}

impl Record {
    /// Creates a record.
    pub fn new(category: impl Into<String>, amount: u64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}
