//! # Reference Resolution
//!
//! Expands `var_start name var_end` references in every raw block into the
//! resolved text of the named block.
//!
//! - Each block is scanned with the delimiters it was captured under.
//! - Names resolve against the complete block table, so a block may refer to
//!   one defined further down the file.
//! - Spliced text is never scanned again; a referenced block is resolved on
//!   its own terms first (depth-first, memoized, on an explicit stack).
//! - A `var_end` that closes no reference is a [`ParseError`].
//! - Revisiting a block already on the resolution path is a [`CycleError`].
//! - `name alias` binds `alias` to the same text for the rest of the
//!   referencing block only.

pub mod cursor;
pub mod references;

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::{
    error::{CycleError, LoadError, ParseError},
    parsing::blocks::RawBlock,
};

use references::{Reference, ScanError, Segment, scan_references};

/// A block with every reference expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBlock {
    pub name: String,
    pub text: String,
    pub comment: Option<String>,
    /// Header line of the block this came from.
    pub line: usize,
}

/// Resolves every block, in input order.
pub fn resolve_blocks(blocks: &[RawBlock]) -> Result<Vec<ResolvedBlock>, LoadError> {
    let mut resolver = Resolver::new(blocks);
    blocks
        .iter()
        .map(|b| {
            Ok(ResolvedBlock {
                name: b.name.clone(),
                text: resolver.resolve(b)?,
                comment: b.comment.clone(),
                line: b.header_line,
            })
        })
        .collect()
}

/// What a frame needs next.
enum Step<'a> {
    /// The frame is waiting on this unresolved block.
    Descend(&'a RawBlock),
    Finished,
}

/// A block part way through expansion.
struct Frame<'a> {
    block: &'a RawBlock,
    segments: std::vec::IntoIter<Segment>,
    out: String,
    aliases: HashMap<&'a str, String>,
    /// Alias and line of the reference that descended into the next frame.
    awaiting: (Option<&'a str>, usize),
}

impl<'a> Frame<'a> {
    fn new(block: &'a RawBlock) -> Result<Self, ParseError> {
        let config = &block.config;
        let segments = scan_references(&block.body, config).map_err(|e| match e {
            ScanError::Unterminated { offset } => ParseError::UnterminatedReference {
                block: block.name.clone(),
                line: block.line_of(offset),
            },
            ScanError::StrayEnd { offset } => ParseError::StrayReferenceEnd {
                block: block.name.clone(),
                token: config.var_end().to_string(),
                line: block.line_of(offset),
            },
        })?;

        Ok(Self {
            block,
            segments: segments.into_iter(),
            out: String::with_capacity(block.body.len()),
            aliases: HashMap::new(),
            awaiting: (None, 0),
        })
    }

    fn splice(&mut self, text: String, alias: Option<&'a str>, line: usize) {
        self.out.push_str(&text);
        if let Some(alias) = alias
            && self.aliases.insert(alias, text).is_some()
        {
            log::warn!(
                "line {line}: alias `{alias}` rebound in block `{}`",
                self.block.name
            );
        }
    }
}

/// Depth-first expansion over an explicit stack of [`Frame`]s, so the
/// length of a reference chain is bounded by memory rather than by the
/// call stack.
struct Resolver<'a> {
    table: HashMap<&'a str, &'a RawBlock>,
    done: HashMap<&'a str, String>,
}

impl<'a> Resolver<'a> {
    fn new(blocks: &'a [RawBlock]) -> Self {
        Self {
            table: blocks.iter().map(|b| (b.name.as_str(), b)).collect(),
            done: HashMap::new(),
        }
    }

    fn resolve(&mut self, root: &'a RawBlock) -> Result<String, LoadError> {
        if let Some(text) = self.done.get(root.name.as_str()) {
            return Ok(text.clone());
        }

        let mut current = Frame::new(root)?;
        let mut parents: Vec<Frame<'a>> = Vec::new();
        let mut on_path: HashSet<&'a str> = HashSet::from([root.name.as_str()]);

        loop {
            match self.advance(&mut current)? {
                Step::Descend(target) => {
                    if on_path.contains(target.name.as_str()) {
                        return Err(cycle(&parents, &current, target).into());
                    }
                    on_path.insert(target.name.as_str());
                    let child = Frame::new(target)?;
                    parents.push(std::mem::replace(&mut current, child));
                }
                Step::Finished => {
                    let block = current.block;
                    let name = block.name.as_str();
                    on_path.remove(name);
                    self.done.insert(name, current.out.clone());

                    let Some(mut parent) = parents.pop() else {
                        return Ok(current.out);
                    };
                    let (alias, line) = parent.awaiting;
                    parent.splice(current.out, alias, line);
                    current = parent;
                }
            }
        }
    }

    /// Expands `frame` until it finishes or needs a block not resolved yet.
    fn advance(&self, frame: &mut Frame<'a>) -> Result<Step<'a>, LoadError> {
        let block = frame.block;
        let body = block.body.as_str();

        while let Some(seg) = frame.segments.next() {
            let (full, inner) = match seg {
                Segment::Text(sp) => {
                    frame.out.push_str(&body[sp.start..sp.end]);
                    continue;
                }
                Segment::Reference { full, inner } => (full, inner),
            };

            let line = block.line_of(full.start);
            let raw = &body[inner.start..inner.end];
            let (name, alias) = match Reference::parse(raw, &block.config) {
                Reference::Name { name, alias } => (name, alias),
                Reference::Empty => {
                    return Err(ParseError::EmptyReference {
                        block: block.name.clone(),
                        line,
                    }
                    .into());
                }
                Reference::Malformed => {
                    return Err(ParseError::MalformedReference {
                        block: block.name.clone(),
                        reference: raw.trim().to_string(),
                        line,
                    }
                    .into());
                }
            };

            if let Some(&target) = self.table.get(name) {
                match self.done.get(name) {
                    Some(text) => frame.splice(text.clone(), alias, line),
                    None => {
                        frame.awaiting = (alias, line);
                        return Ok(Step::Descend(target));
                    }
                }
            } else if let Some(text) = frame.aliases.get(name) {
                if let Some(alias) = alias {
                    return Err(ParseError::AliasOfAlias {
                        block: block.name.clone(),
                        target: name.to_string(),
                        alias: alias.to_string(),
                        line,
                    }
                    .into());
                }
                let text = text.clone();
                frame.out.push_str(&text);
            } else {
                return Err(ParseError::UndefinedReference {
                    block: block.name.clone(),
                    name: name.to_string(),
                    line,
                }
                .into());
            }
        }

        Ok(Step::Finished)
    }
}

/// The path from the first visit of `target` back to it.
fn cycle(parents: &[Frame<'_>], current: &Frame<'_>, target: &RawBlock) -> CycleError {
    let names: Vec<&str> = parents
        .iter()
        .chain([current])
        .map(|f| f.block.name.as_str())
        .collect();
    let at = names
        .iter()
        .position(|n| *n == target.name)
        .unwrap_or_default();
    let mut path: Vec<String> = names[at..].iter().map(|n| n.to_string()).collect();
    path.push(target.name.clone());
    CycleError { path }
}
