//! # Block Splitting
//!
//! Two-phase splitting of a resource into named raw blocks.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified against
//!    the currently active delimiters into a `LineClass` (directive, block
//!    start, bare end marker, blank, text)
//!
//! 2. **Block Construction** (`builder`): a `BlockSplitter` state machine
//!    (`AwaitingFirstDirective` → `BetweenBlocks` ⇄ `InBlockBody`) installs new
//!    delimiters on directive lines and emits `RawBlock`s as blocks close
//!
//! ## Key Invariants
//!
//! - The first non-blank line is a directive
//! - A directive always closes the open block before new tokens apply, so a
//!   block is scanned with exactly the tokens it was written under
//! - Body lines are kept verbatim; only trailing blank lines of an implicitly
//!   closed block are dropped
//! - Every block name is defined once per resource

pub mod builder;
pub mod classify;
pub mod types;

pub use builder::BlockSplitter;
pub use classify::{LineClass, LineKind, LngLineClassifier};
pub use types::RawBlock;
