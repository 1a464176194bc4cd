// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The spendpie widget.
//!
//! [`PieChartView`] owns the derived slices and the selection, and reacts to the
//! events a host UI framework dispatches to a view: data assignment, size changes,
//! measurement, touches, draws, and state save/restore. All of these run on the
//! host's UI thread; the view is not `Sync` and holds no locks.
//!
//! Around the view this crate provides:
//! - [`payload`]: loading spending records from the bundled JSON payload.
//! - [`SavedState`]: the serializable state kept across configuration changes.
//! - [`SvgCanvas`]: a `spendpie_core::Canvas` that writes an SVG document.

mod measure;
pub mod payload;
mod state;
mod svg;
mod view;
#[cfg(test)]
mod view_tests;

pub use measure::MeasureSpec;
pub use payload::PayloadError;
pub use state::{SavedState, StateError};
pub use svg::SvgCanvas;
pub use view::{PieChartView, TouchAction, TouchEvent, ViewConfig};
