use std::{collections::HashMap, mem, sync::Arc};

use crate::{
    error::{ConfigError, LoadError, ParseError},
    parsing::{
        directive::{self, DelimiterConfig},
        rope::span::Span,
    },
};

use super::{
    classify::{LineClass, LineKind},
    types::RawBlock,
};

#[derive(Debug)]
struct OpenBlock {
    names: Vec<String>,
    comment: Option<String>,
    config: Arc<DelimiterConfig>,
    header_line: usize,
    header: Span,
    lines: Vec<(String, Span)>,
}

#[derive(Debug)]
enum SplitState {
    AwaitingFirstDirective,
    BetweenBlocks,
    InBlockBody(OpenBlock),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Close {
    /// Bare block prefix: the body is kept exactly.
    Explicit,
    /// Next header, directive or end of input: trailing blank lines are
    /// separators, not content.
    Implicit,
}

/// Splits classified lines into [`RawBlock`]s while tracking the active
/// [`DelimiterConfig`].
pub struct BlockSplitter {
    state: SplitState,
    config: Option<Arc<DelimiterConfig>>,
    defined: HashMap<String, usize>,
    out: Vec<RawBlock>,
}

impl BlockSplitter {
    pub fn new() -> Self {
        Self {
            state: SplitState::AwaitingFirstDirective,
            config: None,
            defined: HashMap::new(),
            out: vec![],
        }
    }

    /// The delimiters lines are currently classified with, once the opening
    /// directive has been seen.
    pub fn config(&self) -> Option<&DelimiterConfig> {
        self.config.as_deref()
    }

    pub fn push(&mut self, c: LineClass) -> Result<(), LoadError> {
        let Some(config) = self.config.clone() else {
            return self.open_document(&c);
        };

        match c.kind {
            LineKind::Directive => {
                self.close_block(Close::Implicit);
                let next = directive::parse_directive(&c.text, c.number, &config)?;
                self.config = Some(Arc::new(next));
                Ok(())
            }
            LineKind::BlockStart { names, comment } => {
                self.close_block(Close::Implicit);
                self.open_block(names, comment, config, c.number, c.line)
            }
            LineKind::BlockEnd { .. } => {
                self.close_block(Close::Explicit);
                Ok(())
            }
            LineKind::Blank | LineKind::Text => self.body_line(c),
        }
    }

    pub fn finish(mut self) -> Result<Vec<RawBlock>, LoadError> {
        if self.config.is_none() {
            return Err(ConfigError::Empty.into());
        }
        // EOF closes whatever is open
        self.close_block(Close::Implicit);
        Ok(self.out)
    }

    fn open_document(&mut self, c: &LineClass) -> Result<(), LoadError> {
        if c.kind == LineKind::Blank {
            return Ok(());
        }
        let config = directive::parse_opening_directive(&c.text, c.number)?;
        self.config = Some(Arc::new(config));
        self.state = SplitState::BetweenBlocks;
        Ok(())
    }

    fn open_block(
        &mut self,
        names: Vec<String>,
        comment: Option<String>,
        config: Arc<DelimiterConfig>,
        line: usize,
        header: Span,
    ) -> Result<(), LoadError> {
        let declared = names.len();
        let mut unique: Vec<String> = Vec::with_capacity(declared);
        for name in names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        if unique.len() != declared {
            log::warn!("line {line}: repeated names in block header, keeping unique ones");
        }

        for name in &unique {
            if let Some(&first_line) = self.defined.get(name) {
                return Err(ParseError::DuplicateBlock {
                    name: name.clone(),
                    line,
                    first_line,
                }
                .into());
            }
            self.defined.insert(name.clone(), line);
        }

        self.state = SplitState::InBlockBody(OpenBlock {
            names: unique,
            comment,
            config,
            header_line: line,
            header,
            lines: vec![],
        });
        Ok(())
    }

    fn body_line(&mut self, c: LineClass) -> Result<(), LoadError> {
        match &mut self.state {
            SplitState::InBlockBody(open) => {
                open.lines.push((c.text, c.line));
                Ok(())
            }
            _ if c.kind == LineKind::Blank => Ok(()),
            _ => Err(ParseError::ContentOutsideBlock {
                line: c.number,
                text: c.text,
            }
            .into()),
        }
    }

    fn close_block(&mut self, close: Close) {
        let SplitState::InBlockBody(open) = mem::replace(&mut self.state, SplitState::BetweenBlocks)
        else {
            return;
        };
        let OpenBlock {
            names,
            comment,
            config,
            header_line,
            header,
            mut lines,
        } = open;

        if close == Close::Implicit {
            while lines.last().is_some_and(|(text, _)| text.trim().is_empty()) {
                lines.pop();
            }
        }

        let span = lines.last().map_or(header, |(_, sp)| header.cover(*sp));
        let body = lines
            .iter()
            .map(|(text, _)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        if names.len() > 1 {
            log::debug!(
                "line {header_line}: {} blocks share one body: {}",
                names.len(),
                names.join(", ")
            );
        }

        for name in names {
            self.out.push(RawBlock {
                name,
                body: body.clone(),
                comment: comment.clone(),
                config: Arc::clone(&config),
                header_line,
                span,
            });
        }
    }
}

impl Default for BlockSplitter {
    fn default() -> Self {
        Self::new()
    }
}
