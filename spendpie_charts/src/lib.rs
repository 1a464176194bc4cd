// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart rendering for `spendpie_core`.
//!
//! This crate turns derived slices plus the current selection into a draw list of
//! `spendpie_core::Mark`s:
//! - **Sectors** fill each slice, dimmed unless selected.
//! - **Outlines** stroke the selected slice.
//! - **Labels** put the percentage along the slice's arc and annotate the selected
//!   category above the pie.
//!
//! Painting is left to a `spendpie_core::Canvas`. Text shaping is out of scope;
//! text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod pie_chart;
mod sector_mark;
mod style;
mod text_mark;
mod z_order;

pub use pie_chart::PieChartSpec;
pub use sector_mark::SectorMarkSpec;
pub use style::{PercentFormat, PercentLabels, PieStyle, StrokeStyle};
pub use text_mark::{ArcTextMarkSpec, TextMarkSpec};
pub use z_order::*;
