// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (pie slice) mark generation.

use kurbo::{BezPath, Circle, Join, Point, Shape};
use peniko::{Brush, Color};
use spendpie_core::{Mark, MarkId, MarkPayload, PathMark};

use crate::style::StrokeStyle;

/// A filled pie sector with an optional outline.
///
/// Angles are in degrees, clockwise from 3 o'clock in screen space.
#[derive(Clone, Debug)]
pub struct SectorMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Center in view coordinates.
    pub center: Point,
    /// Outer radius in view coordinates.
    pub radius: f64,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// Sweep in degrees.
    pub sweep_angle: f64,
    /// Fill paint for the sector.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Curve flattening tolerance when converting the sector to a `BezPath`.
    pub tolerance: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl SectorMarkSpec {
    /// Creates a new sector mark spec.
    pub fn new(
        id: MarkId,
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Self {
        Self {
            id,
            center,
            radius,
            start_angle,
            sweep_angle,
            fill: Brush::default(),
            stroke: None,
            tolerance: 0.1,
            z_index: crate::z_order::SLICE_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the curve flattening tolerance used for `BezPath` conversion.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// The sector outline: center, arc, back to center.
    pub fn path(&self) -> BezPath {
        Circle::new(self.center, self.radius)
            .segment(
                0.0,
                self.start_angle.to_radians(),
                self.sweep_angle.to_radians(),
            )
            .to_path(self.tolerance)
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let (stroke, stroke_width, stroke_join) = match &self.stroke {
            Some(s) => (s.brush.clone(), s.stroke_width, s.join),
            None => (Brush::Solid(Color::TRANSPARENT), 0.0, Join::Bevel),
        };
        Mark::new(
            self.id,
            self.z_index,
            MarkPayload::Path(PathMark {
                path: self.path(),
                fill: self.fill.clone(),
                stroke,
                stroke_width,
                stroke_join,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Rect;
    use peniko::color::palette::css;
    use spendpie_core::MarkKind;

    use super::*;

    #[test]
    fn sector_emits_a_path_mark_with_bounds() {
        let sector = SectorMarkSpec::new(
            MarkId::from_raw(1),
            Point::new(50.0, 50.0),
            20.0,
            0.0,
            90.0,
        )
        .with_fill(css::TOMATO)
        .with_stroke(StrokeStyle::solid(css::BLACK, 2.0));

        let mark = sector.mark();
        assert_eq!(mark.id, MarkId::from_raw(1));
        assert_eq!(mark.kind(), MarkKind::Path);

        let MarkPayload::Path(p) = &mark.payload else {
            panic!("expected path payload");
        };
        assert_eq!(p.fill, css::TOMATO.into());
        assert_eq!(p.stroke, css::BLACK.into());
        assert_eq!(p.stroke_width, 2.0);

        // A clockwise quarter from 3 o'clock covers the lower-right quadrant.
        let b = mark.payload.bounds().unwrap();
        let expected = Rect::new(50.0, 50.0, 70.0, 70.0);
        assert!((b.x0 - expected.x0).abs() < 1e-3, "{b:?}");
        assert!((b.y0 - expected.y0).abs() < 1e-3, "{b:?}");
        assert!((b.x1 - expected.x1).abs() < 1e-3, "{b:?}");
        assert!((b.y1 - expected.y1).abs() < 1e-3, "{b:?}");
    }

    #[test]
    fn sector_without_stroke_has_zero_stroke_width() {
        let sector = SectorMarkSpec::new(MarkId::from_raw(1), Point::ZERO, 10.0, 0.0, 180.0)
            .with_fill(Color::TRANSPARENT);

        let MarkPayload::Path(p) = sector.mark().payload else {
            panic!("expected path payload");
        };
        assert_eq!(p.stroke_width, 0.0);
    }
}
