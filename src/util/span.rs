//! Source location tracking
//!
//! Formulas are single-line, so a location is just a character index.

use serde::Serialize;
use std::fmt;

/// Source span (half-open character range `[start, end)`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Start index (inclusive)
    pub start: usize,
    /// End index (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[inline]
    pub fn new(
        start: usize,
        end: usize,
    ) -> Self {
        Self { start, end }
    }

    /// Span covering a single character
    #[inline]
    pub fn at(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    /// Zero-width span, used for tokens that have no source text
    #[inline]
    pub fn empty(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    /// Number of characters covered
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both
    pub fn merge(
        &self,
        other: Span,
    ) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)
    }
}
