//! # Markup
//!
//! Turns one authored string into a flat sequence of [`ContentNode`]s.
//!
//! Parsing runs in two passes over the text after `~~grey~~` spans have been
//! replaced by placeholders:
//!
//! - **`blocks`**: line-level constructs (image lines, pipe tables,
//!   ```` ```formula ```` fences) and plain-text runs
//! - **`inline`**: emphasis, links, popups and grey spans inside each run
//!
//! Parsing never fails. Anything that does not form a complete construct is
//! kept as literal text.

pub mod blocks;
pub mod cache;
pub mod inline;
pub mod node;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, MarkupLineClassifier, kinds::PipeTable};
use inline::kinds::Grey;

pub use cache::ParseCache;
pub use inline::parse_inline;
pub use node::{ContentNode, FormulaSegment, Reference, ReferenceList};

/// Parses authored text into content nodes.
///
/// Empty input yields a single empty `Text`. A trailing `\r` on each line is
/// dropped.
pub fn parse(text: &str, references: &ReferenceList) -> Vec<ContentNode> {
    if text.is_empty() {
        return vec![ContentNode::Text(String::new())];
    }
    let marked = Grey::mark(text);
    let classifier = MarkupLineClassifier;
    let mut builder = BlockBuilder::new(references);

    for line in marked.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        builder.push(line, classifier.classify(line));
    }

    builder.finish()
}

/// The text a reader sees, with all markup syntax stripped.
pub fn plain_text(nodes: &[ContentNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_plain_text(&mut out);
    }
    out
}

/// Splits a table cell on `<br>` markers into the lines it renders as.
pub fn cell_lines(cell: &str) -> Vec<&str> {
    PipeTable::cell_lines(cell)
}
