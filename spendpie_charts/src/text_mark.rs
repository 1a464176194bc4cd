// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::string::String;

use kurbo::{Arc, BezPath, Point, Shape, Vec2};
use peniko::Brush;
use spendpie_core::{
    Mark, MarkId, MarkPayload, TextAnchor, TextBaseline, TextMark, TextOnPathMark,
};

/// A text mark spec.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor position in view coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in view coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a new text mark spec with default styling.
    pub fn new(id: MarkId, pos: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            text: text.into(),
            font_size: 12.0,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Alphabetic,
            fill: Brush::default(),
            z_index: crate::z_order::ANNOTATION,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::new(
            self.id,
            self.z_index,
            MarkPayload::Text(TextMark {
                pos: self.pos,
                text: self.text.clone(),
                font_size: self.font_size,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill.clone(),
            }),
        )
    }
}

/// Text laid out along a circular arc, centered on the arc's midpoint.
///
/// Angles are in degrees, clockwise from 3 o'clock in screen space.
#[derive(Clone, Debug)]
pub struct ArcTextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Arc center in view coordinates.
    pub center: Point,
    /// Arc radius; the text baseline follows it.
    pub radius: f64,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// Sweep in degrees.
    pub sweep_angle: f64,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in view coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Curve flattening tolerance when converting the arc to a `BezPath`.
    pub tolerance: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl ArcTextMarkSpec {
    /// Creates a new arc text spec with default styling.
    pub fn new(
        id: MarkId,
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            center,
            radius,
            start_angle,
            sweep_angle,
            text: text.into(),
            font_size: 12.0,
            fill: Brush::default(),
            tolerance: 0.1,
            z_index: crate::z_order::SLICE_LABELS,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the curve flattening tolerance used for `BezPath` conversion.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The arc the text follows.
    pub fn path(&self) -> BezPath {
        Arc {
            center: self.center,
            radii: Vec2::new(self.radius, self.radius),
            start_angle: self.start_angle.to_radians(),
            sweep_angle: self.sweep_angle.to_radians(),
            x_rotation: 0.0,
        }
        .to_path(self.tolerance)
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::new(
            self.id,
            self.z_index,
            MarkPayload::TextOnPath(TextOnPathMark {
                path: self.path(),
                text: self.text.clone(),
                font_size: self.font_size,
                start_offset: 0.5,
                anchor: TextAnchor::Middle,
                fill: self.fill.clone(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::PathEl;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn text_mark_carries_its_style() {
        let mark = TextMarkSpec::new(MarkId::from_raw(7), Point::new(1.0, 2.0), "food: 200")
            .with_font_size(30.0)
            .with_fill(css::BLACK)
            .mark();
        assert_eq!(mark.z_index, crate::z_order::ANNOTATION);

        let MarkPayload::Text(t) = &mark.payload else {
            panic!("expected text payload");
        };
        assert_eq!(t.text, "food: 200");
        assert_eq!(t.pos, Point::new(1.0, 2.0));
        assert_eq!(t.font_size, 30.0);
        assert_eq!(t.anchor, TextAnchor::Middle);
        assert_eq!(t.fill, css::BLACK.into());
    }

    #[test]
    fn anchor_and_z_index_can_be_overridden() {
        let mark = TextMarkSpec::new(MarkId::from_raw(1), Point::ZERO, "total")
            .with_anchor(TextAnchor::Start)
            .with_z_index(crate::z_order::SLICE_LABELS)
            .mark();
        assert_eq!(mark.z_index, crate::z_order::SLICE_LABELS);
        let MarkPayload::Text(t) = &mark.payload else {
            panic!("expected text payload");
        };
        assert_eq!(t.anchor, TextAnchor::Start);
    }

    #[test]
    fn arc_text_follows_the_arc_from_its_start() {
        let spec = ArcTextMarkSpec::new(
            MarkId::from_raw(3),
            Point::new(100.0, 100.0),
            50.0,
            90.0,
            90.0,
            "25%",
        );
        let path = spec.path();
        let Some(PathEl::MoveTo(start)) = path.elements().first().copied() else {
            panic!("arc path should start with a move");
        };
        assert!((start.x - 100.0).abs() < 1e-9, "{start:?}");
        assert!((start.y - 150.0).abs() < 1e-9, "{start:?}");

        let MarkPayload::TextOnPath(t) = spec.mark().payload else {
            panic!("expected text-on-path payload");
        };
        assert_eq!(t.text, "25%");
        assert_eq!(t.start_offset, 0.5);
    }
}
