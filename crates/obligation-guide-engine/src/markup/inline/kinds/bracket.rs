/// `[label](payload)` delimiters.
pub struct Bracket;

impl Bracket {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const PAYLOAD_OPEN: u8 = b'(';
    pub const PAYLOAD_CLOSE: u8 = b')';

    /// Given the index of a `(`, returns the index of its matching `)`.
    ///
    /// Parentheses inside the payload nest, so popup bodies like
    /// `popup:Art. 2||zie (a) en (b)` close at the right place. Returns
    /// `None` when the depth never returns to zero.
    pub fn matching_close(s: &str, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (j, &b) in s.as_bytes().iter().enumerate().skip(open) {
            match b {
                Self::PAYLOAD_OPEN => depth += 1,
                Self::PAYLOAD_CLOSE => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(j);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// If a complete `[label](payload)` construct on a single line starts at
    /// `at`, returns the index just past its closing `)`.
    pub fn construct_end(s: &str, at: usize) -> Option<usize> {
        let bytes = s.as_bytes();
        if bytes.get(at) != Some(&Self::OPEN) {
            return None;
        }
        let label_end = at + 1 + s.get(at + 1..)?.find(Self::CLOSE as char)?;
        if bytes.get(label_end + 1) != Some(&Self::PAYLOAD_OPEN) {
            return None;
        }
        let close = Self::matching_close(s, label_end + 1)?;
        (!s[at..close].contains('\n')).then_some(close + 1)
    }
}

/// What a bracket payload asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    /// `toggle:legal`
    LegalToggle,
    /// `toggle:<label>`
    ReferenceToggle(&'a str),
    /// `popup:<title>||<body>||<reference>`
    Popup {
        title: &'a str,
        body: &'a str,
        reference: &'a str,
    },
    /// `http://...` or `https://...`
    External(&'a str),
    /// Anything else; rendered literally.
    Unknown,
}

impl<'a> Action<'a> {
    pub const TOGGLE: &'static str = "toggle:";
    pub const LEGAL: &'static str = "legal";
    pub const POPUP: &'static str = "popup:";
    pub const FIELD_SEPARATOR: &'static str = "||";
    pub const HTTP: &'static str = "http://";
    pub const HTTPS: &'static str = "https://";

    pub fn classify(payload: &'a str) -> Self {
        if let Some(target) = payload.strip_prefix(Self::TOGGLE) {
            if target == Self::LEGAL {
                return Action::LegalToggle;
            }
            return Action::ReferenceToggle(target);
        }
        if let Some(fields) = payload.strip_prefix(Self::POPUP) {
            let mut parts = fields.splitn(3, Self::FIELD_SEPARATOR);
            return Action::Popup {
                title: parts.next().unwrap_or_default(),
                body: parts.next().unwrap_or_default(),
                reference: parts.next().unwrap_or_default(),
            };
        }
        if payload.starts_with(Self::HTTP) || payload.starts_with(Self::HTTPS) {
            return Action::External(payload);
        }
        Action::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn matching_close_tracks_depth() {
        let s = "(popup:T||a (b) c)";
        assert_eq!(Bracket::matching_close(s, 0), Some(s.len() - 1));
    }

    #[test]
    fn matching_close_unbalanced() {
        assert_eq!(Bracket::matching_close("(a (b)", 0), None);
    }

    #[rstest]
    #[case("toggle:legal", Action::LegalToggle)]
    #[case("toggle:EED", Action::ReferenceToggle("EED"))]
    #[case("toggle:", Action::ReferenceToggle(""))]
    #[case("https://eur-lex.europa.eu", Action::External("https://eur-lex.europa.eu"))]
    #[case("http://wetten.overheid.nl", Action::External("http://wetten.overheid.nl"))]
    #[case("mailto:info@example.nl", Action::Unknown)]
    #[case("#anchor", Action::Unknown)]
    fn classify_payloads(#[case] payload: &str, #[case] expected: Action<'_>) {
        assert_eq!(Action::classify(payload), expected);
    }

    #[test]
    fn popup_fields_default_to_empty() {
        assert_eq!(
            Action::classify("popup:T||B"),
            Action::Popup {
                title: "T",
                body: "B",
                reference: ""
            }
        );
        assert_eq!(
            Action::classify("popup:T"),
            Action::Popup {
                title: "T",
                body: "",
                reference: ""
            }
        );
    }

    #[test]
    fn popup_reference_keeps_extra_separators() {
        assert_eq!(
            Action::classify("popup:T||B||R||S"),
            Action::Popup {
                title: "T",
                body: "B",
                reference: "R||S"
            }
        );
    }
}
