use std::sync::LazyLock;

use regex::Regex;

/// A line consisting of a single `![alt](url)` image.
pub struct ImageLine;

static IMAGE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)\s]+)\)$").expect("valid regex"));

impl ImageLine {
    /// Returns `(alt, url)` when the trimmed line is an image line.
    pub fn parse(trimmed: &str) -> Option<(&str, &str)> {
        let caps = IMAGE_LINE.captures(trimmed)?;
        let alt = caps.get(1)?.as_str();
        let url = caps.get(2)?.as_str();
        Some((alt, url))
    }
}
