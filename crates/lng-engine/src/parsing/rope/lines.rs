use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 1-based line number, used in diagnostics.
    pub number: usize,
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text including its line terminator.
    pub text: String,
}

impl LineRef {
    /// The line without its `\n` / `\r\n` terminator.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters so spans tile the whole
/// rope without gaps.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(idx, line)| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            number: idx + 1,
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
