use serde::Serialize;
use xi_rope::Rope;

use crate::parsing::{blocks::RawBlock, rope::slice::preview};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub name: String,
    pub line: usize,
    pub span: (usize, usize),
    pub delimiters: String,
    pub comment: Option<String>,
    pub source: String,
}

pub fn normalize(rope: &Rope, blocks: &[RawBlock]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| BlockSnap {
            name: b.name.clone(),
            line: b.header_line,
            span: (b.span.start, b.span.end),
            delimiters: format!("v{} {}", b.config.version(), b.config.describe()),
            comment: b.comment.clone(),
            source: preview(rope, b.span, 40),
        })
        .collect();

    Snap { blocks }
}
