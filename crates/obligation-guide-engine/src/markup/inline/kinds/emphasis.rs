use super::Bracket;

/// Emphasis delimiters.
///
/// Closer searches stop at a line break and step over whole
/// `[label](payload)` constructs, so a delimiter inside a url or popup
/// body never closes the span around it.
pub struct Emphasis;

impl Emphasis {
    pub const STRONG: &'static [u8; 2] = b"**";
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Bytes that count as part of a word when deciding whether `_` opens
    /// or closes emphasis. Non-ASCII bytes are treated as letters.
    pub fn is_word_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b >= 0x80
    }

    /// True when a delimiter ending just before `next` can open a span:
    /// the span text may not start with whitespace.
    pub fn can_open(next: Option<u8>) -> bool {
        next.is_some_and(|b| !b.is_ascii_whitespace())
    }

    /// Finds the closing `**` for a strong span whose inner text starts at
    /// `inner_start`. The inner text must be non-empty and on one line, and
    /// may not end in whitespace.
    pub fn find_strong_close(s: &str, inner_start: usize) -> Option<usize> {
        find_on_line(s, inner_start, |bytes, j| {
            bytes[j..].starts_with(Self::STRONG) && !bytes[j - 1].is_ascii_whitespace()
        })
    }

    /// Finds the closing `*` for an emphasis span. A `**` pair inside the
    /// span belongs to nested strong text and is stepped over.
    pub fn find_star_close(s: &str, inner_start: usize) -> Option<usize> {
        let bytes = s.as_bytes();
        let mut j = inner_start;
        while j < bytes.len() {
            if let Some(end) = Bracket::construct_end(s, j) {
                j = end;
                continue;
            }
            match bytes[j] {
                b'\n' => return None,
                Self::STAR if bytes.get(j + 1) == Some(&Self::STAR) => j += 2,
                Self::STAR if j > inner_start && !bytes[j - 1].is_ascii_whitespace() => {
                    return Some(j);
                }
                _ => j += 1,
            }
        }
        None
    }

    /// Finds the closing `_` for an emphasis span: the first `_` not
    /// followed by a word byte.
    pub fn find_underscore_close(s: &str, inner_start: usize) -> Option<usize> {
        find_on_line(s, inner_start, |bytes, j| {
            bytes[j] == Self::UNDERSCORE
                && !bytes[j - 1].is_ascii_whitespace()
                && !bytes.get(j + 1).copied().is_some_and(Self::is_word_byte)
        })
    }
}

/// First position after `inner_start` accepted by `matches`; the inner
/// text is never empty.
fn find_on_line(
    s: &str,
    inner_start: usize,
    matches: impl Fn(&[u8], usize) -> bool,
) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut j = inner_start;
    while j < bytes.len() {
        if let Some(end) = Bracket::construct_end(s, j) {
            j = end;
            continue;
        }
        if bytes[j] == b'\n' {
            return None;
        }
        if j > inner_start && matches(bytes, j) {
            return Some(j);
        }
        j += 1;
    }
    None
}
