// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing surface seam.
//!
//! Renderers produce [`Mark`]s; a [`Canvas`] turns them into pixels (or SVG, or a
//! recording for tests). Keeping the surface behind a trait lets the chart logic be
//! exercised without any rendering backend.

extern crate alloc;

use alloc::vec::Vec;

use crate::{Mark, MarkPayload, PathMark, TextMark, TextOnPathMark};

/// A drawing surface.
pub trait Canvas {
    /// Fill and stroke a path.
    fn draw_path(&mut self, mark: &PathMark);
    /// Draw a line of text at a point.
    fn draw_text(&mut self, mark: &TextMark);
    /// Draw a line of text along a path.
    fn draw_text_on_path(&mut self, mark: &TextOnPathMark);
}

/// Paints `marks` onto `canvas`, ordered by `(z_index, id)`.
///
/// The sort is stable, so marks that share both keys keep their list order.
pub fn paint_marks(marks: &[Mark], canvas: &mut dyn Canvas) {
    let mut order: Vec<&Mark> = marks.iter().collect();
    order.sort_by_key(|m| (m.z_index, m.id));
    for mark in order {
        match &mark.payload {
            MarkPayload::Path(p) => canvas.draw_path(p),
            MarkPayload::Text(t) => canvas.draw_text(t),
            MarkPayload::TextOnPath(t) => canvas.draw_text_on_path(t),
        }
    }
}
