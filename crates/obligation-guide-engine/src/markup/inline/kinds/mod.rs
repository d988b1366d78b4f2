//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser calls
//! these constants and helpers; it never hardcodes `**`, `[` or `popup:`.
//!
//! - **`Emphasis`**: `**`, `*`, `_` and the flanking rule for `_`
//! - **`Bracket`** / **`Action`**: `[label](payload)` and payload classification
//! - **`Grey`**: `~~text~~` placeholder marking

pub mod bracket;
pub mod emphasis;
pub mod grey;

pub use bracket::{Action, Bracket};
pub use emphasis::Emphasis;
pub use grey::Grey;
