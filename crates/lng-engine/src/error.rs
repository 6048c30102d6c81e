//! Error taxonomy for loading and querying `.lng` resources.
//!
//! Everything that can go wrong while loading aborts the whole load and comes
//! back as a [`LoadError`]. Lookups fail per call with a [`KeyError`].

use std::path::PathBuf;

use thiserror::Error;

/// A token set that cannot be used as a [`DelimiterConfig`](crate::DelimiterConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("{role} token `{token}` must be non-empty and contain no whitespace")]
    Invalid { role: &'static str, token: String },

    #[error("{first} `{first_token}` clashes with {second} `{second_token}`")]
    Conflict {
        first: &'static str,
        first_token: String,
        second: &'static str,
        second_token: String,
    },
}

/// A missing, malformed or invalid directive line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("resource is empty: it must open with a directive line such as `!!! === $ $ ;`")]
    Empty,

    #[error("line {line}: resource must open with a directive line such as `!!! === $ $ ;`")]
    MissingDirective { line: usize },

    #[error("line {line}: directive `{prefix}` needs 4 tokens, found {found}")]
    TooFewTokens {
        line: usize,
        prefix: String,
        found: usize,
    },

    #[error("line {line}: invalid directive: {source}")]
    InvalidTokens {
        line: usize,
        #[source]
        source: TokenError,
    },
}

/// Structural problems in blocks and variable references.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: content outside any block: `{text}`")]
    ContentOutsideBlock { line: usize, text: String },

    #[error("line {line}: block `{name}` is already defined on line {first_line}")]
    DuplicateBlock {
        name: String,
        line: usize,
        first_line: usize,
    },

    #[error("line {line}: unterminated reference in block `{block}`")]
    UnterminatedReference { block: String, line: usize },

    #[error("line {line}: `{token}` closes no reference in block `{block}`")]
    StrayReferenceEnd {
        block: String,
        token: String,
        line: usize,
    },

    #[error("line {line}: empty reference in block `{block}`")]
    EmptyReference { block: String, line: usize },

    #[error("line {line}: malformed reference `{reference}` in block `{block}`")]
    MalformedReference {
        block: String,
        reference: String,
        line: usize,
    },

    #[error("line {line}: block `{block}` references undefined block `{name}`")]
    UndefinedReference {
        block: String,
        name: String,
        line: usize,
    },

    #[error("line {line}: block `{block}` defines alias `{alias}` of alias `{target}`")]
    AliasOfAlias {
        block: String,
        target: String,
        alias: String,
        line: usize,
    },
}

/// A chain of references that comes back to a block already being resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("reference cycle: {}", .path.join(" -> "))]
pub struct CycleError {
    /// Names along the cycle, first and last entries are the same block.
    pub path: Vec<String>,
}

/// A lookup that cannot be answered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("no string named `{key}`")]
    NotFound { key: String },

    #[error("invalid key `{key}`: {reason}")]
    Invalid { key: String, reason: &'static str },

    #[error("{} registered keys missing: {}", .keys.len(), .keys.join(", "))]
    Missing { keys: Vec<String> },
}

/// Any failure while turning resource text into a [`Store`](crate::Store).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Cycle(#[from] CycleError),
}

#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid resources directory: {0}")]
    InvalidResourcesDir(String),
}

/// Failure to read and load a resource file from disk.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("{path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },
}
