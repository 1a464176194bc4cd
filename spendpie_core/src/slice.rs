// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice model builder.
//!
//! Records are grouped by category in first-seen order, summed, and turned into
//! contiguous angular ranges that together cover the full circle.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::Record;

/// One category's share of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    /// Index of the category in first-seen order; resolved through a [`crate::Palette`].
    pub color_id: usize,
    /// Start of the slice in degrees.
    pub start_angle: f64,
    /// Angular span in degrees.
    pub angle: f64,
    /// Category label, unique among the slices of one chart.
    pub category: String,
    /// Sum of all record amounts in this category.
    pub amount: u64,
}

impl Slice {
    /// End of the slice in degrees (`start_angle + angle`).
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.angle
    }
}

/// The derived slices of one data set, plus the total they were normalized by.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliceSet {
    slices: Vec<Slice>,
    /// Exact category sums, indexed like `slices`.
    sums: Vec<u128>,
    total: u128,
}

impl SliceSet {
    /// Builds slices from records.
    ///
    /// A zero total (including empty input) yields an empty set, so nothing is drawn
    /// and nothing can be hit.
    pub fn from_records(records: &[Record]) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, u128)> = Vec::new();
        let mut total: u128 = 0;

        for record in records {
            let category = record.category.as_str();
            let slot = *index.entry(category).or_insert_with(|| {
                groups.push((category, 0));
                groups.len() - 1
            });
            // Summed in u128: even many u64::MAX amounts cannot overflow.
            groups[slot].1 += u128::from(record.amount);
            total += u128::from(record.amount);
        }

        if total == 0 {
            return Self::default();
        }

        let sums = groups.iter().map(|&(_, amount)| amount).collect();
        let mut start_angle = 0.0;
        let slices = groups
            .into_iter()
            .enumerate()
            .map(|(color_id, (category, amount))| {
                let angle = 360.0 * ratio(amount, total);
                let slice = Slice {
                    color_id,
                    start_angle,
                    angle,
                    category: String::from(category),
                    amount: u64::try_from(amount).unwrap_or(u64::MAX),
                };
                start_angle += angle;
                slice
            })
            .collect();

        Self {
            slices,
            sums,
            total,
        }
    }

    /// The slices, in first-seen category order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Sum of all record amounts.
    ///
    /// Wider than a single amount so that large inputs cannot overflow it.
    pub fn total(&self) -> u128 {
        self.total
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Finds the slice for a category.
    pub fn get(&self, category: &str) -> Option<&Slice> {
        self.slices.iter().find(|s| s.category == category)
    }

    /// Truncated integer percentage of the total that `slice` accounts for.
    pub fn percent_of_total(&self, slice: &Slice) -> u64 {
        if self.total == 0 {
            return 0;
        }
        let amount = self
            .sums
            .get(slice.color_id)
            .copied()
            .unwrap_or_else(|| u128::from(slice.amount));
        let percent = amount.saturating_mul(100) / self.total;
        u64::try_from(percent).unwrap_or(u64::MAX)
    }

    /// Consumes the set, returning the slices.
    pub fn into_slices(self) -> Vec<Slice> {
        self.slices
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "angles only need f64 precision"
)]
fn ratio(part: u128, whole: u128) -> f64 {
    part as f64 / whole as f64
}

/// Builds the ordered slice list for `records`.
///
/// Equivalent to `SliceSet::from_records(records).into_slices()`.
pub fn build_slices(records: &[Record]) -> Vec<Slice> {
    SliceSet::from_records(records).into_slices()
}
