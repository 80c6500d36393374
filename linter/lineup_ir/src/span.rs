//! Byte spans into source text.

use std::fmt;

/// Error when a byte range does not fit the compact span representation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanOutOfRange(pub usize);

impl fmt::Display for SpanOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "byte offset {} exceeds u32::MAX", self.0)
    }
}

impl std::error::Error for SpanOutOfRange {}

/// Byte range into a source file, end-exclusive.
///
/// Offsets are stored as `u32`; a single source file larger than 4 GiB is
/// rejected at construction.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Try to create a span from a byte range.
    #[inline]
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanOutOfRange> {
        let start = u32::try_from(range.start).map_err(|_| SpanOutOfRange(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanOutOfRange(range.end))?;
        Ok(Span { start, end })
    }

    /// Create from a byte range.
    ///
    /// # Panics
    /// Panics if the range exceeds `u32::MAX` bytes. Use `try_from_range`
    /// when handling untrusted input sizes.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        Self::try_from_range(range).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if a byte offset falls within this span.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Convert to a `std::ops::Range` for slicing source text.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basic() {
        let span = Span::new(10, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(span.contains(10));
        assert!(span.contains(19));
        assert!(!span.contains(20));
    }

    #[test]
    fn test_span_point() {
        let point = Span::point(42);
        assert!(point.is_empty());
        assert_eq!(point.len(), 0);
        assert_eq!(point.to_range(), 42..42);
    }

    #[test]
    fn test_span_from_range() {
        let span = Span::from_range(100..200);
        assert_eq!(span.start, 100);
        assert_eq!(span.end, 200);
    }

    #[test]
    fn test_span_try_from_range_too_large() {
        let big = u32::MAX as usize + 1;
        let result = Span::try_from_range(0..big);
        assert_eq!(result, Err(SpanOutOfRange(big)));
    }

    #[test]
    fn test_span_display() {
        let span = Span::new(3, 7);
        assert_eq!(format!("{span}"), "3..7");
        assert_eq!(format!("{span:?}"), "3..7");
    }
}
