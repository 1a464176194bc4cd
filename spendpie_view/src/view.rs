// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pie chart view.

use std::fmt;

use kurbo::Point;
use serde_json::Value;
use spendpie_charts::{PieChartSpec, PieStyle};
use spendpie_core::{
    Canvas, ChartGeometry, Mark, Palette, Record, Selection, SliceSet, hit_test, paint_marks,
};
use tracing::{debug, info, trace};

use crate::{MeasureSpec, SavedState};

/// What a touch event reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// A finger went down.
    Down,
    /// A finger moved.
    Move,
    /// A finger went up.
    Up,
    /// The gesture was aborted.
    Cancel,
}

/// A touch event in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    /// What happened.
    pub action: TouchAction,
    /// Position relative to the view's top-left corner.
    pub pos: Point,
}

impl TouchEvent {
    /// A touch-down at `(x, y)`.
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            action: TouchAction::Down,
            pos: Point::new(x, y),
        }
    }
}

/// View-level configuration supplied by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// Display density (physical pixels per density-independent pixel).
    pub density: f64,
    /// Preferred width in density-independent pixels.
    pub desired_width_dp: f64,
    /// Minimum height suggested by the host, in pixels.
    pub min_height: u32,
    /// Top padding in pixels.
    pub padding_top: u32,
    /// Bottom padding in pixels.
    pub padding_bottom: u32,
}

impl ViewConfig {
    /// Sets the display density.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the suggested minimum height.
    pub fn with_min_height(mut self, min_height: u32) -> Self {
        self.min_height = min_height;
        self
    }

    /// Sets vertical padding.
    pub fn with_vertical_padding(mut self, top: u32, bottom: u32) -> Self {
        self.padding_top = top;
        self.padding_bottom = bottom;
        self
    }

    /// Preferred width in pixels.
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the u32 range")]
    pub fn desired_width(&self) -> u32 {
        (self.density * self.desired_width_dp).clamp(0.0, f64::from(u32::MAX)) as u32
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            desired_width_dp: 360.0,
            min_height: 0,
            padding_top: 0,
            padding_bottom: 0,
        }
    }
}

type CategoryListener = Box<dyn FnMut(&str)>;

/// A touch-interactive pie chart of spending by category.
///
/// The view owns the slices derived from the last [`set_data`](Self::set_data) call
/// and the current [`Selection`]. Tapping a slice (inside the annular touch band)
/// selects its category, notifies the registered listener, and requests a redraw.
pub struct PieChartView {
    config: ViewConfig,
    style: PieStyle,
    palette: Palette,
    width: f64,
    height: f64,
    slices: SliceSet,
    selection: Selection,
    listener: Option<CategoryListener>,
    needs_redraw: bool,
}

impl fmt::Debug for PieChartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PieChartView")
            .field("config", &self.config)
            .field("style", &self.style)
            .field("palette", &self.palette)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("slices", &self.slices)
            .field("selection", &self.selection)
            .field("has_listener", &self.listener.is_some())
            .field("needs_redraw", &self.needs_redraw)
            .finish()
    }
}

impl Default for PieChartView {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl PieChartView {
    /// Creates an empty, unselected view of size zero.
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            style: PieStyle::default(),
            palette: Palette::default(),
            width: 0.0,
            height: 0.0,
            slices: SliceSet::default(),
            selection: Selection::default(),
            listener: None,
            needs_redraw: false,
        }
    }

    /// Sets the pie styling.
    pub fn with_style(mut self, style: PieStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the category palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replaces the chart data, recomputing every slice.
    ///
    /// The selection is kept as-is, even if its category no longer appears.
    pub fn set_data(&mut self, records: &[Record]) {
        self.slices = SliceSet::from_records(records);
        debug!(
            records = records.len(),
            total = self.slices.total(),
            "chart data set"
        );
        for slice in self.slices.slices() {
            debug!(
                category = %slice.category,
                amount = slice.amount,
                angle = slice.angle,
                "slice"
            );
        }
        self.invalidate();
    }

    /// Registers the listener called with the category of every tapped slice.
    ///
    /// Only one listener is kept; registering another replaces it.
    pub fn set_on_category_click_listener(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// The derived slices.
    pub fn slices(&self) -> &SliceSet {
        &self.slices
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected category, if any.
    pub fn selected_category(&self) -> Option<&str> {
        self.selection.category()
    }

    /// Current view size.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Placement of the pie for the current view size.
    pub fn geometry(&self) -> ChartGeometry {
        ChartGeometry::from_view_size(self.width, self.height)
    }

    /// Called by the host when the view's size changes.
    pub fn on_size_changed(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.invalidate();
    }

    /// Resolves the view's measured size against the parent's constraints.
    ///
    /// The width prefers `desired_width_dp` scaled by density; the height prefers the
    /// suggested minimum height plus vertical padding.
    pub fn on_measure(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> (u32, u32) {
        let width = width_spec.resolve(self.config.desired_width());
        let min_height = self
            .config
            .min_height
            .saturating_add(self.config.padding_top)
            .saturating_add(self.config.padding_bottom);
        let height = height_spec.resolve(min_height);
        (width, height)
    }

    /// Handles a touch event. Returns `true` if it selected a slice.
    ///
    /// Only touch-down events are hit tested. A miss (outside the touch band, or no
    /// slice at that angle) changes nothing and does not notify the listener.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        if event.action != TouchAction::Down {
            return false;
        }
        let geometry = self.geometry();
        let Some(slice) = hit_test(event.pos, &geometry, self.slices.slices()) else {
            trace!(x = event.pos.x, y = event.pos.y, "touch missed the chart");
            return false;
        };
        let category = slice.category.clone();
        self.selection.select(category.as_str());
        info!(category = %category, "slice selected");
        if let Some(listener) = self.listener.as_mut() {
            listener(&category);
        }
        self.invalidate();
        true
    }

    /// Whether a redraw has been requested since the last [`draw`](Self::draw).
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// The draw list for the current data, selection, and size.
    pub fn marks(&self) -> Vec<Mark> {
        PieChartSpec::new(
            &self.slices,
            &self.selection,
            &self.palette,
            self.geometry(),
            &self.style,
        )
        .marks()
    }

    /// Draws the chart onto `canvas` and clears the pending redraw.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        paint_marks(&self.marks(), canvas);
        self.needs_redraw = false;
    }

    /// Captures the selection alongside the framework's own view state.
    pub fn save_state(&self, super_state: Option<Value>) -> SavedState {
        SavedState {
            super_state,
            selected_category: self.selection.category().map(String::from),
        }
    }

    /// Restores the selection and hands the framework's state back for default
    /// restoration.
    pub fn restore_state(&mut self, state: SavedState) -> Option<Value> {
        self.selection = Selection::from(state.selected_category);
        debug!(selection = ?self.selection, "view state restored");
        self.invalidate();
        state.super_state
    }

    fn invalidate(&mut self) {
        self.needs_redraw = true;
    }
}
