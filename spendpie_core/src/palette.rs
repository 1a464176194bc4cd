// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category colors.
//!
//! Slices carry a `color_id` (the index of their category in first-seen order).
//! A [`Palette`] resolves that id to a color by cycling through an ordered list,
//! so the number of categories is never bounded by the palette size.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use peniko::Color;

/// Errors returned when building a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// A palette needs at least one color.
    Empty,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("palette must contain at least one color"),
        }
    }
}

impl core::error::Error for PaletteError {}

/// The default spending palette, as `(r, g, b)` triples.
const SPENDING_COLORS: [(u8, u8, u8); 10] = [
    (0x12, 0x34, 0x56),
    (0xff, 0x00, 0x00),
    (0x00, 0xff, 0x00),
    (0x00, 0x00, 0xff),
    (0xff, 0xff, 0x00),
    (0xff, 0xa5, 0x00),
    (0x80, 0x00, 0x80),
    (0xff, 0xc0, 0xcb),
    (0x00, 0xff, 0xff),
    (0x79, 0x55, 0x3d),
];

/// An ordered, non-empty list of category colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from an ordered list of colors.
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    /// Returns the color for a slice's `color_id`, cycling past the end of the list.
    pub fn color(&self, color_id: usize) -> Color {
        self.colors[color_id % self.colors.len()]
    }

    /// Number of distinct colors before the palette repeats.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; palettes are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors in palette order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: SPENDING_COLORS
                .iter()
                .map(|&(r, g, b)| Color::from_rgb8(r, g, b))
                .collect(),
        }
    }
}
