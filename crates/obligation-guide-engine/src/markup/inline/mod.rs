//! # Inline Parsing
//!
//! Cursor-based inline parsing of authored text.
//!
//! ## Order of recognition
//!
//! 1. Grey spans (`~~text~~`) are replaced by placeholders over the whole
//!    input before anything else; their inner text is parsed as usual.
//! 2. At each position the parser tries, in order: a grey placeholder, a
//!    bracket construct `[label](payload)`, then emphasis (`**` before `*`
//!    and `_`).
//! 3. Anything else is plain text.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter-owning types (`Emphasis`, `Bracket`/`Action`, `Grey`)
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Fallback
//!
//! Nothing here fails: an unclosed bracket, unbalanced payload parentheses
//! or an unmatched emphasis delimiter is kept as literal text.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
pub(crate) use parser::scan;
