// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core model for the spendpie chart widget.
//!
//! This crate holds everything that does not depend on a rendering surface:
//! - **Records** are the flat, externally supplied `(category, amount)` inputs.
//! - **Slices** are derived from records: one per category, in first-seen order,
//!   with start angle and angular span in degrees.
//! - **Geometry** reproduces the widget's radius formula and touch band.
//! - **Hit testing** maps a touch point back to the slice under it.
//! - **Selection** is the single highlighted category.
//! - **Marks** are the draw list a renderer emits, painted onto any [`Canvas`].
//!
//! Angles are in degrees, measured from the positive x axis and increasing
//! clockwise in screen space (y grows downward).

#![no_std]

extern crate alloc;

mod canvas;
mod geometry;
mod mark;
mod palette;
mod record;
mod selection;
mod slice;

pub use canvas::{Canvas, paint_marks};
pub use geometry::ChartGeometry;
pub use hit_test::{hit_test, touch_angle};
pub use mark::{
    Mark, MarkId, MarkKind, MarkPayload, PathMark, TextAnchor, TextBaseline, TextMark,
    TextOnPathMark,
};
pub use palette::{Palette, PaletteError};
pub use record::Record;
pub use selection::Selection;
pub use slice::{Slice, SliceSet, build_slices};
