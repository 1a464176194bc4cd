// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A parent's size constraint for one dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeasureSpec {
    /// The view must be exactly this size.
    Exactly(u32),
    /// The view may be at most this size.
    AtMost(u32),
    /// The parent imposes no constraint.
    Unspecified,
}

impl MeasureSpec {
    /// Resolves a desired size against this constraint.
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(size) => desired.min(size),
            Self::Unspecified => desired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_follows_the_constraint() {
        assert_eq!(MeasureSpec::Exactly(100).resolve(360), 100);
        assert_eq!(MeasureSpec::Exactly(500).resolve(360), 500);
        assert_eq!(MeasureSpec::AtMost(100).resolve(360), 100);
        assert_eq!(MeasureSpec::AtMost(500).resolve(360), 360);
        assert_eq!(MeasureSpec::Unspecified.resolve(360), 360);
    }
}
