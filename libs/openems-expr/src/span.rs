//! # Source Span
//!
//! Byte range inside an expression string. Tokens, tree nodes and parse
//! errors all carry one so a caller can point at the offending text.
//!
//! ```rust
//! use openems_expr::parse;
//! use openems_expr::Spanned;
//!
//! let source = "2*(t-1e-9)";
//! let span = parse(source).unwrap().span();
//! assert_eq!(&source[span.start()..span.end()], source);
//! ```

use serde::{Deserialize, Serialize};

/// Half-open byte range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`, used for end of input.
    #[inline]
    pub fn at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Range as a `usize` range, for slicing the source.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Implemented by everything that remembers its location in the source.
pub trait Spanned {
    fn span(&self) -> Span;
}
