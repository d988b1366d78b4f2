use std::sync::LazyLock;

use regex::Regex;

use crate::markup::inline::kinds::Grey;

/// Pipe-delimited tables.
///
/// ```text
/// | Product | Eis |
/// |---------|:---:|
/// | Lamp    | A   |
/// ```
pub struct PipeTable;

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|[ \t:|-]*[:-][ \t:|-]*\|$").expect("valid regex"));

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));

impl PipeTable {
    pub const PIPE: char = '|';

    /// A trimmed line that begins and ends with `|`.
    pub fn is_row(trimmed: &str) -> bool {
        trimmed.len() >= 2 && trimmed.starts_with(Self::PIPE) && trimmed.ends_with(Self::PIPE)
    }

    /// A trimmed line like `|---|:---:|`: pipes around nothing but spaces,
    /// dashes and colons, with at least one dash or colon.
    pub fn is_separator(trimmed: &str) -> bool {
        SEPARATOR.is_match(trimmed)
    }

    /// Splits a row into trimmed cells, dropping the empty fields outside
    /// the boundary pipes.
    pub fn cells(line: &str) -> Vec<String> {
        let trimmed = line.trim();
        let inner = trimmed
            .strip_prefix(Self::PIPE)
            .and_then(|t| t.strip_suffix(Self::PIPE))
            .unwrap_or(trimmed);
        inner
            .split(Self::PIPE)
            .map(|cell| Grey::unmark(cell.trim()).into_owned())
            .collect()
    }

    /// Splits a cell's text on explicit `<br>` markers.
    pub fn cell_lines(cell: &str) -> Vec<&str> {
        LINE_BREAK.split(cell).map(str::trim).collect()
    }
}
