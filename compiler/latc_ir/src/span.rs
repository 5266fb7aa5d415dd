//! Source location spans.
//!
//! Compact 8-byte span representation (byte offsets), independent of any
//! particular source file — the file itself is identified by the driver,
//! not carried in the span.

use std::fmt;

/// A half-open byte range `[start, end)` into the source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for synthesized nodes (implicit `ret void`, default
    /// initializers, etc.) that have no corresponding source text.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Implemented by every AST node so diagnostics can point at it without a
/// big match on node kind.
pub trait Spanned {
    fn span(&self) -> Span;
}

/// Resolves a byte offset to a 1-based `(line, column)` pair, and can slice
/// out the source line containing a span — the two things
/// `latc_diagnostic` needs to render `spec.md` §7's diagnostics.
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<u32>,
}

impl<'a> LineIndex<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        LineIndex {
            source,
            line_starts,
        }
    }

    /// 1-based `(line, column)` for a byte offset.
    #[must_use]
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_starts[idx];
        (idx as u32 + 1, offset - line_start + 1)
    }

    /// The full text of the line containing `offset`, without its trailing newline.
    #[must_use]
    pub fn line_text(&self, offset: u32) -> &'a str {
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let start = self.line_starts[idx] as usize;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.source.len(), |&s| s as usize);
        self.source[start..end].trim_end_matches(['\n', '\r'])
    }
}
