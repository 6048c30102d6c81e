use xi_rope::Rope;

use crate::parsing::{
    blocks::RawBlock,
    rope::{slice::slice_to_string, span::Span},
};

pub fn check(rope: &Rope, blocks: &[RawBlock]) {
    let n = rope.len();
    let mut prev: Option<Span> = None;

    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        // Names declared on one header share a span; otherwise blocks follow source order
        if let Some(prev) = prev {
            assert!(
                b.span == prev || b.span.start >= prev.end,
                "block `{}` overlaps the previous block: {:?} vs {:?}",
                b.name,
                b.span,
                prev
            );
        }
        prev = Some(b.span);

        let source = slice_to_string(rope, b.span);
        for line in b.body.lines() {
            assert!(
                source.contains(line),
                "body line {line:?} of `{}` not found in its span",
                b.name
            );
        }
    }
}
