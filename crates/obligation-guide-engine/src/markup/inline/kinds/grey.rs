use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// `~~text~~` grey spans.
///
/// Grey spans are replaced by private-use placeholders over the whole text
/// before any other scanning, so a `~~` inside a link or popup payload
/// never splits it. The inline parser turns each placeholder pair into a
/// [`crate::markup::ContentNode::Grey`] and parses the inner text.
pub struct Grey;

static GREY_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~([^\n]+?)~~").expect("valid regex"));

impl Grey {
    pub const DELIMITER: &'static str = "~~";
    pub const OPEN: &'static str = "\u{E000}";
    pub const CLOSE: &'static str = "\u{E001}";

    /// Replaces every `~~text~~` span with `OPEN text CLOSE`.
    pub fn mark(text: &str) -> Cow<'_, str> {
        if !text.contains(Self::DELIMITER) {
            return Cow::Borrowed(text);
        }
        GREY_SPAN.replace_all(text, |caps: &regex::Captures<'_>| {
            format!("{}{}{}", Self::OPEN, &caps[1], Self::CLOSE)
        })
    }

    /// Restores `~~` delimiters in a string that is handed back to the
    /// caller verbatim (table cells, image alt text, popup fields).
    pub fn unmark(text: &str) -> Cow<'_, str> {
        if !text.contains(Self::OPEN) && !text.contains(Self::CLOSE) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(
            text.replace(Self::OPEN, Self::DELIMITER)
                .replace(Self::CLOSE, Self::DELIMITER),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_replaces_each_span() {
        let marked = Grey::mark("a ~~b~~ c ~~d~~");
        assert_eq!(marked, "a \u{E000}b\u{E001} c \u{E000}d\u{E001}");
    }

    #[test]
    fn mark_leaves_unclosed_delimiters() {
        assert_eq!(Grey::mark("a ~~b"), "a ~~b");
        assert!(matches!(Grey::mark("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn mark_does_not_span_lines() {
        assert_eq!(Grey::mark("~~a\nb~~"), "~~a\nb~~");
    }

    #[test]
    fn unmark_round_trips() {
        let text = "x ~~[y](https://e.nl)~~ z";
        assert_eq!(Grey::unmark(&Grey::mark(text)), text);
    }
}
