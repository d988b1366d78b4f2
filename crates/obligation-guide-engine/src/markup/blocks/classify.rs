use super::kinds::{FormulaFence, ImageLine, PipeTable};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; whether a pipe row actually opens
/// a table depends on the next line and is decided by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `![alt](url)` and nothing else.
    Image { alt: &'a str, url: &'a str },
    /// ```` ```formula ````
    FormulaOpen,
    /// A bare ```` ``` ````.
    FenceClose,
    /// `|---|:--:|`
    TableSeparator,
    /// Any other line beginning and ending with `|`.
    TableRow,
    Plain,
}

impl LineClass<'_> {
    /// True for lines that may continue a table body.
    pub fn is_pipe_bounded(&self) -> bool {
        matches!(self, LineClass::TableRow | LineClass::TableSeparator)
    }
}

/// Classifies individual lines for the block pass.
pub struct MarkupLineClassifier;

impl MarkupLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();

        if trimmed == FormulaFence::OPEN {
            LineClass::FormulaOpen
        } else if trimmed == FormulaFence::CLOSE {
            LineClass::FenceClose
        } else if let Some((alt, url)) = ImageLine::parse(trimmed) {
            LineClass::Image { alt, url }
        } else if PipeTable::is_separator(trimmed) {
            LineClass::TableSeparator
        } else if PipeTable::is_row(trimmed) {
            LineClass::TableRow
        } else {
            LineClass::Plain
        }
    }
}
