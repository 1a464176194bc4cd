// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The draw list emitted by renderers.
//!
//! A mark is an immutable description of one drawing operation: a filled and/or
//! stroked path, a positioned text run, or a text run laid out along a path.
//! Marks own their style (brush, stroke width, join), so nothing is shared or reset
//! between draws.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Join, Point, Rect, Shape};
use peniko::Brush;

/// Stable identity of a mark within one draw list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from its raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    #[default]
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor is on the alphabetic baseline.
    #[default]
    Alphabetic,
    /// The anchor is on the vertical middle of the text.
    Middle,
    /// The anchor is on the hanging baseline.
    Hanging,
}

/// A filled and optionally stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Geometry in view coordinates.
    pub path: BezPath,
    /// Fill paint. Transparent for outline-only marks.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0.0` disables the stroke.
    pub stroke_width: f64,
    /// Stroke join style.
    pub stroke_join: Join,
}

/// A single line of text at a point.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position.
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
}

/// A single line of text laid out along a path.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOnPathMark {
    /// The path the baseline follows.
    pub path: BezPath,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in view coordinates.
    pub font_size: f64,
    /// Position of the anchor along the path, as a fraction of its length.
    pub start_offset: f64,
    /// Horizontal anchor relative to `start_offset`.
    pub anchor: TextAnchor,
    /// Fill paint.
    pub fill: Brush,
}

/// Mark payloads.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// See [`PathMark`].
    Path(PathMark),
    /// See [`TextMark`].
    Text(TextMark),
    /// See [`TextOnPathMark`].
    TextOnPath(TextOnPathMark),
}

/// Discriminant of a [`MarkPayload`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// A path mark.
    Path,
    /// A text mark.
    Text,
    /// A text-on-path mark.
    TextOnPath,
}

impl MarkPayload {
    /// The payload's kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
            Self::TextOnPath(_) => MarkKind::TextOnPath,
        }
    }

    /// Geometric bounds, if known without text measurement.
    ///
    /// Text marks return `None`; their extent depends on the text backend.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::TextOnPath(t) => Some(t.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// One entry of a draw list.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable id; breaks ties between equal `z_index` values.
    pub id: MarkId,
    /// Paint order; lower values are painted first.
    pub z_index: i32,
    /// What to draw.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark.
    pub fn new(id: MarkId, z_index: i32, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index,
            payload,
        }
    }

    /// The payload's kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }
}
