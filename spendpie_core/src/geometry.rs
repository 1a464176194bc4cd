// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart placement inside the view.

use kurbo::{Point, Rect, Size};

/// Where the pie sits inside a view of a given size.
///
/// The radius is `max(width / 2, height / 2) / 2`, i.e. a quarter of the larger view
/// dimension. Rendering and hit testing both derive from this one value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    /// Center of the view (and of the pie).
    pub center: Point,
    /// Pie radius.
    pub radius: f64,
}

impl ChartGeometry {
    /// Computes the geometry for a view of `width` x `height`.
    pub fn from_view_size(width: f64, height: f64) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        Self {
            center: Point::new(half_width, half_height),
            radius: half_width.max(half_height) / 2.0,
        }
    }

    /// Centered square the pie is inscribed in.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, Size::new(2.0 * self.radius, 2.0 * self.radius))
    }

    /// Inner edge of the touch band.
    pub fn inner_touch_radius(&self) -> f64 {
        self.radius - self.radius / 2.0
    }

    /// Outer edge of the touch band.
    pub fn outer_touch_radius(&self) -> f64 {
        self.radius + self.radius / 2.0
    }

    /// Returns `true` if `point` lies in the annular touch band (edges included).
    pub fn in_touch_band(&self, point: Point) -> bool {
        let distance = (point - self.center).hypot();
        (self.inner_touch_radius()..=self.outer_touch_radius()).contains(&distance)
    }

    /// Anchor of the selected-category annotation, above the pie.
    pub fn annotation_anchor(&self) -> Point {
        Point::new(self.center.x, self.center.y - 1.7 * self.radius)
    }
}
