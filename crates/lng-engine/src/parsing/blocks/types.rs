use std::sync::Arc;

use crate::parsing::{directive::DelimiterConfig, rope::span::Span};

/// A named block exactly as captured from the resource, before references
/// are expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// Block name (non-empty, no whitespace).
    pub name: String,
    /// Body lines joined with `\n`.
    pub body: String,
    /// Free text after the comment marker on the header line.
    pub comment: Option<String>,
    /// Tokens active when the block was captured; used to scan its body.
    pub config: Arc<DelimiterConfig>,
    /// 1-based line number of the header line.
    pub header_line: usize,
    /// Byte span from the header line through the last kept body line.
    pub span: Span,
}

impl RawBlock {
    /// Line number of the body byte at `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        let offset = offset.min(self.body.len());
        self.header_line + 1 + self.body[..offset].matches('\n').count()
    }
}
