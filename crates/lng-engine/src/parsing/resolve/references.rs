use crate::parsing::{directive::DelimiterConfig, rope::span::Span};

use super::cursor::Cursor;

/// A piece of a block body: literal text or a reference span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Text(Span),
    Reference {
        /// The whole `var_start … var_end` span, delimiters included.
        full: Span,
        /// The text strictly between the delimiters.
        inner: Span,
    },
}

/// Delimiter tokens that do not pair up; `offset` is where the token starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// `var_start` with no `var_end` after it.
    Unterminated { offset: usize },
    /// `var_end` with no `var_start` before it.
    StrayEnd { offset: usize },
}

/// The parts of a reference: `name` or `name alias`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference<'a> {
    Empty,
    Name { name: &'a str, alias: Option<&'a str> },
    Malformed,
}

impl<'a> Reference<'a> {
    /// Splits the text between the delimiters into name and alias.
    ///
    /// Words carrying either variable token are malformed: `{a {x}` is a
    /// typo, not a reference to `a` aliased as `{x`.
    pub fn parse(inner: &'a str, config: &DelimiterConfig) -> Self {
        if inner.contains(config.var_start()) || inner.contains(config.var_end()) {
            return Reference::Malformed;
        }
        let mut words = inner.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (None, _, _) => Reference::Empty,
            (Some(name), alias, None) => Reference::Name { name, alias },
            _ => Reference::Malformed,
        }
    }
}

/// Splits `body` into text and reference segments under `config`.
///
/// Each `var_start` is paired with the next `var_end` after it. Segments
/// cover the body without gaps, and no text segment holds a `var_end`.
pub fn scan_references(body: &str, config: &DelimiterConfig) -> Result<Vec<Segment>, ScanError> {
    let mut cur = Cursor::new(body);
    let mut out = vec![];

    while let Some(open) = cur.find(config.var_start()) {
        check_no_end(&body[..open], cur.pos(), config)?;
        if open > cur.pos() {
            out.push(Segment::Text(Span {
                start: cur.pos(),
                end: open,
            }));
        }
        cur.seek(open);
        cur.eat(config.var_start());
        let inner_start = cur.pos();

        let Some(close) = cur.find(config.var_end()) else {
            return Err(ScanError::Unterminated { offset: open });
        };
        cur.seek(close);
        cur.eat(config.var_end());

        out.push(Segment::Reference {
            full: Span {
                start: open,
                end: cur.pos(),
            },
            inner: Span {
                start: inner_start,
                end: close,
            },
        });
    }

    check_no_end(body, cur.pos(), config)?;
    if !cur.eof() {
        out.push(Segment::Text(Span {
            start: cur.pos(),
            end: body.len(),
        }));
    }
    Ok(out)
}

/// Rejects a `var_end` in `text[from..]`. With equal tokens every
/// occurrence is an opener, so only distinct tokens can leave one behind.
fn check_no_end(text: &str, from: usize, config: &DelimiterConfig) -> Result<(), ScanError> {
    if config.var_start() == config.var_end() {
        return Ok(());
    }
    match text[from..].find(config.var_end()) {
        Some(at) => Err(ScanError::StrayEnd { offset: from + at }),
        None => Ok(()),
    }
}
