/// A cursor over a block body that advances by whole delimiter tokens.
///
/// Positions are byte offsets into the body; tokens may be multi-byte
/// (`«`, `»`), so the cursor only ever stops on char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The body being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unread part of the input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i.min(self.s.len())..]
    }

    /// Checks if the remaining input starts with `token`.
    pub fn starts_with(&self, token: &str) -> bool {
        self.rest().starts_with(token)
    }

    /// Byte offset of the next occurrence of `token` at or after the cursor.
    pub fn find(&self, token: &str) -> Option<usize> {
        self.rest().find(token).map(|at| self.i + at)
    }

    /// Moves to `pos` (must be a char boundary at or after the cursor).
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(pos >= self.i && self.s.is_char_boundary(pos.min(self.s.len())));
        self.i = pos;
    }

    /// Advances past `token`, returning false (and not moving) if the
    /// remaining input does not start with it.
    pub fn eat(&mut self, token: &str) -> bool {
        if self.starts_with(token) {
            self.i += token.len();
            true
        } else {
            false
        }
    }
}
