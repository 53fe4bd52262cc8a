//! Character cursor over the expression text.

use std::str::Chars;

/// Walks the source one `char` at a time and reports byte offsets, so spans
/// stay valid slice bounds even for non-ASCII input.
///
/// ```rust
/// use openems_expr::lexer::Cursor;
///
/// let mut cursor = Cursor::new("sqrt(t)");
/// cursor.advance_while(|c| c.is_ascii_alphabetic());
/// assert_eq!(cursor.position(), 4);
/// assert_eq!(cursor.peek(), Some('('));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    rest: Chars<'a>,
    len: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            rest: source.chars(),
            len: source.len(),
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.len - self.rest.as_str().len()
    }

    pub fn is_eof(&self) -> bool {
        self.rest.as_str().is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest.clone().next()
    }

    /// The character after [`peek`](Self::peek).
    pub fn peek_next(&self) -> Option<char> {
        self.rest.clone().nth(1)
    }

    pub fn advance(&mut self) -> Option<char> {
        self.rest.next()
    }

    /// Consumes characters for as long as `predicate` accepts them.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while self.peek().is_some_and(&mut predicate) {
            self.rest.next();
        }
    }
}
