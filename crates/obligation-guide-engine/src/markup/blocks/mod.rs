//! # Block Pass
//!
//! 1. **Line Classification** (`classify`): each line becomes a [`LineClass`]
//!    from local facts only (image line, formula fence, pipe row, separator).
//! 2. **Block Construction** (`builder`): [`BlockBuilder`] groups lines into
//!    tables and formulas, and hands the remaining plain-text runs to the
//!    inline scanner.
//!
//! Formula fences are raw zones: no inline parsing inside.

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkupLineClassifier};
