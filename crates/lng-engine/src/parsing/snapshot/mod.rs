//! # Snapshot Testing Support
//!
//! Utilities for testing the splitter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts raw blocks to a stable `Snap` format for `insta`
//! - **`invariants`**: Runtime checks for splitter correctness (spans in
//!   bounds, blocks in source order, body lines present in the block's span)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
