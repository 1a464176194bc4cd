// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for pie chart marks.
//!
//! Painters sort by `(z_index, MarkId)`, so every slice fill lands below every
//! outline, and every outline below the labels.

/// Slice fills.
pub const SLICE_FILL: i32 = 0;
/// Outline of the selected slice.
pub const SLICE_OUTLINE: i32 = 10;
/// Percentage labels along slice arcs.
pub const SLICE_LABELS: i32 = 40;
/// Selected-category annotation.
pub const ANNOTATION: i32 = 80;
