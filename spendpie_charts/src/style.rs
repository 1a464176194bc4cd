// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie styling.

extern crate alloc;

use alloc::string::String;

use kurbo::Join;
use peniko::Brush;
use peniko::color::palette::css;

/// Stroke paint and width.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in view coordinates.
    pub stroke_width: f64,
    /// Join style.
    pub join: Join,
}

impl StrokeStyle {
    /// Convenience for a solid stroke with bevel joins.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            join: Join::Bevel,
        }
    }

    /// Sets the join style.
    pub fn with_join(mut self, join: Join) -> Self {
        self.join = join;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 2.0)
    }
}

/// What number the percentage label shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PercentFormat {
    /// Truncated share of the total amount, `amount * 100 / total`.
    #[default]
    ShareOfTotal,
    /// Truncated angular span in degrees, printed with a `%` suffix.
    ///
    /// This matches older builds of the widget, where the label showed degrees.
    RawAngle,
}

/// Which slices carry a percentage label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PercentLabels {
    /// Only the selected slice.
    #[default]
    SelectedOnly,
    /// Every slice.
    All,
}

/// Pie styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct PieStyle {
    /// Fill alpha of the selected slice.
    pub selected_alpha: u8,
    /// Fill alpha of every other slice.
    pub unselected_alpha: u8,
    /// Outline drawn over the selected slice.
    pub outline: StrokeStyle,
    /// Paint for percentage labels and the annotation.
    pub label_fill: Brush,
    /// Font size for percentage labels and the annotation.
    pub label_font_size: f64,
    /// Percentage label semantics.
    pub percent_format: PercentFormat,
    /// Percentage label placement.
    pub percent_labels: PercentLabels,
    /// Unit appended to the annotation amount (e.g. a currency).
    pub amount_unit: Option<String>,
    /// Curve flattening tolerance for sector and arc paths.
    pub tolerance: f64,
}

impl PieStyle {
    /// Sets the percentage label semantics.
    pub fn with_percent_format(mut self, percent_format: PercentFormat) -> Self {
        self.percent_format = percent_format;
        self
    }

    /// Sets which slices carry a percentage label.
    pub fn with_percent_labels(mut self, percent_labels: PercentLabels) -> Self {
        self.percent_labels = percent_labels;
        self
    }

    /// Sets the unit appended to the annotation amount.
    pub fn with_amount_unit(mut self, unit: impl Into<String>) -> Self {
        self.amount_unit = Some(unit.into());
        self
    }

    /// Sets the label font size.
    pub fn with_label_font_size(mut self, font_size: f64) -> Self {
        self.label_font_size = font_size;
        self
    }

    /// Sets the selected-slice outline.
    pub fn with_outline(mut self, outline: StrokeStyle) -> Self {
        self.outline = outline;
        self
    }
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            selected_alpha: 255,
            unselected_alpha: 127,
            outline: StrokeStyle::default(),
            label_fill: css::BLACK.into(),
            label_font_size: 30.0,
            percent_format: PercentFormat::default(),
            percent_labels: PercentLabels::default(),
            amount_unit: None,
            tolerance: 0.1,
        }
    }
}
