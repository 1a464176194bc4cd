// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;

/// The highlighted category.
///
/// A chart starts [`Selection::Unselected`]. A successful hit test moves it to
/// [`Selection::Selected`]; misses leave it unchanged, and there is no tap that
/// returns to `Unselected`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Nothing is highlighted.
    #[default]
    Unselected,
    /// The named category is highlighted.
    Selected(String),
}

impl Selection {
    /// Selects `category`. Returns `true` if the selection changed.
    pub fn select(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if self.is_selected(&category) {
            return false;
        }
        *self = Self::Selected(category);
        true
    }

    /// The selected category, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Unselected => None,
            Self::Selected(category) => Some(category.as_str()),
        }
    }

    /// Returns `true` if `category` is the selected one.
    pub fn is_selected(&self, category: &str) -> bool {
        self.category() == Some(category)
    }
}

impl From<Option<String>> for Selection {
    fn from(category: Option<String>) -> Self {
        category.map_or(Self::Unselected, Self::Selected)
    }
}

impl From<Selection> for Option<String> {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Unselected => None,
            Selection::Selected(category) => Some(category),
        }
    }
}
