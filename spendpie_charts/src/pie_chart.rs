// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart mark generation.
//!
//! Every slice becomes a filled sector, dimmed unless it is the selected one. The
//! selected slice additionally gets an outline, its percentage along the arc, and an
//! annotation (`"category: amount"`) above the pie.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use smallvec::SmallVec;
use spendpie_core::{ChartGeometry, Mark, MarkId, Palette, Selection, Slice, SliceSet};

use crate::style::{PercentFormat, PercentLabels, PieStyle};
use crate::{ArcTextMarkSpec, SectorMarkSpec, TextMarkSpec, z_order};

const OUTLINE_ID_OFFSET: u64 = 0x1000;
const LABEL_ID_OFFSET: u64 = 0x2000;
const ANNOTATION_ID_OFFSET: u64 = 0x3000;

/// Inputs for one draw of the pie.
#[derive(Clone, Copy, Debug)]
pub struct PieChartSpec<'a> {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Derived slices.
    pub slices: &'a SliceSet,
    /// Current selection.
    pub selection: &'a Selection,
    /// Category colors.
    pub palette: &'a Palette,
    /// Placement in the view.
    pub geometry: ChartGeometry,
    /// Styling.
    pub style: &'a PieStyle,
}

impl<'a> PieChartSpec<'a> {
    /// Creates a spec with id base `0`.
    pub fn new(
        slices: &'a SliceSet,
        selection: &'a Selection,
        palette: &'a Palette,
        geometry: ChartGeometry,
        style: &'a PieStyle,
    ) -> Self {
        Self {
            id_base: 0,
            slices,
            selection,
            palette,
            geometry,
            style,
        }
    }

    /// Sets the stable-id base.
    pub fn with_id_base(mut self, id_base: u64) -> Self {
        self.id_base = id_base;
        self
    }

    /// Generates the draw list, in slice order.
    ///
    /// An empty slice set yields no marks.
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::new();
        for (index, slice) in (0_u64..).zip(self.slices.slices()) {
            out.extend(self.slice_marks(index, slice));
        }
        out
    }

    /// The percentage label for `slice`, e.g. `"66%"`.
    #[allow(clippy::cast_possible_truncation, reason = "angles lie in 0..=360")]
    pub fn percent_text(&self, slice: &Slice) -> String {
        let value = match self.style.percent_format {
            PercentFormat::ShareOfTotal => self.slices.percent_of_total(slice),
            PercentFormat::RawAngle => slice.angle as u64,
        };
        format!("{value}%")
    }

    /// The annotation for `slice`, e.g. `"food: 200"`.
    pub fn annotation_text(&self, slice: &Slice) -> String {
        match &self.style.amount_unit {
            Some(unit) => format!("{}: {} {unit}", slice.category, slice.amount),
            None => format!("{}: {}", slice.category, slice.amount),
        }
    }

    fn slice_marks(&self, index: u64, slice: &Slice) -> SmallVec<[Mark; 4]> {
        let style = self.style;
        let g = self.geometry;
        let selected = self.selection.is_selected(&slice.category);
        let alpha = if selected {
            style.selected_alpha
        } else {
            style.unselected_alpha
        };
        let fill = self
            .palette
            .color(slice.color_id)
            .with_alpha(f32::from(alpha) / 255.0);

        let mut out = SmallVec::new();
        out.push(
            SectorMarkSpec::new(
                MarkId::from_raw(self.id_base + index),
                g.center,
                g.radius,
                slice.start_angle,
                slice.angle,
            )
            .with_fill(fill)
            .with_tolerance(style.tolerance)
            .mark(),
        );

        if selected {
            out.push(
                SectorMarkSpec::new(
                    MarkId::from_raw(self.id_base + OUTLINE_ID_OFFSET + index),
                    g.center,
                    g.radius,
                    slice.start_angle,
                    slice.angle,
                )
                .with_fill(Color::TRANSPARENT)
                .with_stroke(style.outline.clone())
                .with_tolerance(style.tolerance)
                .with_z_index(z_order::SLICE_OUTLINE)
                .mark(),
            );
        }

        if selected || style.percent_labels == PercentLabels::All {
            out.push(
                ArcTextMarkSpec::new(
                    MarkId::from_raw(self.id_base + LABEL_ID_OFFSET + index),
                    g.center,
                    g.radius,
                    slice.start_angle,
                    slice.angle,
                    self.percent_text(slice),
                )
                .with_font_size(style.label_font_size)
                .with_fill(style.label_fill.clone())
                .with_tolerance(style.tolerance)
                .mark(),
            );
        }

        if selected {
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + ANNOTATION_ID_OFFSET),
                    g.annotation_anchor(),
                    self.annotation_text(slice),
                )
                .with_font_size(style.label_font_size)
                .with_fill(style.label_fill.clone())
                .mark(),
            );
        }

        out
    }
}
