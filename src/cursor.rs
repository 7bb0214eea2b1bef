/// Indexed view over the lines of one output blob.
///
/// The error-block scanner looks ahead up to three lines and can step back
/// when a block turns out to be malformed, so it works on an explicit
/// position instead of an iterator.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: Vec<&'a str>) -> Self {
        Self { lines, pos: 0 }
    }

    /// Line at `pos + offset`, if it exists.
    pub fn peek(&self, offset: usize) -> Option<&'a str> {
        self.lines.get(self.pos + offset).copied()
    }

    pub fn current(&self) -> Option<&'a str> {
        self.peek(0)
    }

    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.lines.len());
    }

    pub fn retreat(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    /// Lines left after the current one.
    pub fn remaining(&self) -> usize {
        self.lines.len().saturating_sub(self.pos + 1)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_remaining() {
        let cursor = LineCursor::new(vec!["a", "b", "c"]);
        assert_eq!(cursor.current(), Some("a"));
        assert_eq!(cursor.peek(2), Some("c"));
        assert_eq!(cursor.peek(3), None);
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn test_advance_and_retreat() {
        let mut cursor = LineCursor::new(vec!["a", "b", "c", "d"]);
        cursor.advance(3);
        assert_eq!(cursor.current(), Some("d"));
        assert_eq!(cursor.remaining(), 0);

        cursor.retreat(2);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.current(), Some("b"));

        cursor.retreat(5);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance_past_end_is_done() {
        let mut cursor = LineCursor::new(vec!["a"]);
        assert!(!cursor.is_done());
        cursor.advance(10);
        assert!(cursor.is_done());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_empty_cursor() {
        let cursor = LineCursor::new(Vec::new());
        assert!(cursor.is_done());
        assert_eq!(cursor.remaining(), 0);
    }
}
