pub mod blocks;
pub mod directive;
pub mod resolve;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::error::LoadError;
use blocks::{BlockSplitter, LngLineClassifier, RawBlock};
use rope::lines_with_spans;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<RawBlock>,
}

/// Splits a resource into raw blocks, honouring every directive on the way.
pub fn parse_document(rope: &Rope) -> Result<ParsedDoc, LoadError> {
    let classifier = LngLineClassifier;
    let mut splitter = BlockSplitter::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr, splitter.config());
        splitter.push(lc)?;
    }

    Ok(ParsedDoc {
        blocks: splitter.finish()?,
    })
}
