use crate::markup::node::{ContentNode, ReferenceList};

use super::{
    cursor::Cursor,
    kinds::{Action, Bracket, Emphasis, Grey},
};

/// Parses inline markup into a sequence of [`ContentNode`]s.
///
/// Grey spans are marked first; then brackets and emphasis are scanned left
/// to right. Constructs that do not close fall back to literal text, and
/// adjacent text is merged into one `Text` node.
pub fn parse_inline(s: &str, references: &ReferenceList) -> Vec<ContentNode> {
    scan(&Grey::mark(s), references)
}

/// Outcome of a successful `try_parse_*` call.
enum Scanned {
    /// A node was recognized; the cursor sits after it.
    Node(ContentNode),
    /// The construct is kept as literal text; the cursor sits after it.
    Literal,
}

/// Inline scan over text whose grey spans are already marked.
pub(crate) fn scan(s: &str, references: &ReferenceList) -> Vec<ContentNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        let scanned = try_parse_grey(&mut cur, references)
            .or_else(|| try_parse_bracket(&mut cur, references))
            .or_else(|| try_parse_emphasis(&mut cur, references));

        match scanned {
            Some(Scanned::Node(node)) => {
                push_text(&mut out, &s[text_start..start]);
                push_node(&mut out, node);
                text_start = cur.pos();
            }
            Some(Scanned::Literal) => {}
            None => {
                cur.bump();
            }
        }
    }

    push_text(&mut out, &s[text_start..]);
    out
}

/// Appends text, merging into a trailing `Text` node.
fn push_text(out: &mut Vec<ContentNode>, text: &str) {
    if text.is_empty() {
        return;
    }
    let text = Grey::unmark(text);
    match out.last_mut() {
        Some(ContentNode::Text(prev)) => prev.push_str(&text),
        _ => out.push(ContentNode::Text(text.into_owned())),
    }
}

fn push_node(out: &mut Vec<ContentNode>, node: ContentNode) {
    match node {
        ContentNode::Text(text) => push_text(out, &text),
        node => out.push(node),
    }
}

/// Text handed back verbatim, with grey placeholders restored.
fn verbatim(s: &str) -> String {
    Grey::unmark(s).into_owned()
}

/// Parses a grey placeholder pair produced by [`Grey::mark`], recursing
/// into the inner text.
fn try_parse_grey(cur: &mut Cursor<'_>, references: &ReferenceList) -> Option<Scanned> {
    if !cur.starts_with(Grey::OPEN.as_bytes()) {
        return None;
    }
    let s = cur.s;
    let inner_start = cur.pos() + Grey::OPEN.len();
    let close = inner_start + s[inner_start..].find(Grey::CLOSE)?;
    cur.jump_to(close + Grey::CLOSE.len());
    let children = scan(&s[inner_start..close], references);
    Some(Scanned::Node(ContentNode::Grey(children)))
}

/// Parses `[label](payload)`.
///
/// Returns `None` (so `[` is consumed as literal text) when there is no
/// `]`, when `]` is not directly followed by `(`, or when the payload's
/// parentheses never balance.
fn try_parse_bracket(cur: &mut Cursor<'_>, references: &ReferenceList) -> Option<Scanned> {
    if cur.peek() != Some(Bracket::OPEN) {
        return None;
    }
    let s = cur.s;
    let label_start = cur.pos() + 1;
    let label_end = label_start + s[label_start..].find(Bracket::CLOSE as char)?;
    let payload_open = label_end + 1;
    if s.as_bytes().get(payload_open) != Some(&Bracket::PAYLOAD_OPEN) {
        return None;
    }
    let payload_close = Bracket::matching_close(s, payload_open)?;

    let label = verbatim(&s[label_start..label_end]);
    let payload = &s[payload_open + 1..payload_close];
    cur.jump_to(payload_close + 1);

    let node = match Action::classify(payload) {
        Action::LegalToggle => ContentNode::LegalToggle(label),
        Action::ReferenceToggle(target) => match references.find(target) {
            Some(reference) => ContentNode::Popup {
                label,
                title: reference.label.clone(),
                body: reference.citation.clone(),
                reference: reference.url.clone(),
            },
            None => ContentNode::Text(label),
        },
        Action::Popup {
            title,
            body,
            reference,
        } => ContentNode::Popup {
            label,
            title: verbatim(title),
            body: verbatim(body),
            reference: Some(verbatim(reference)),
        },
        Action::External(url) => ContentNode::Link {
            label,
            url: verbatim(url),
        },
        Action::Unknown => return Some(Scanned::Literal),
    };
    Some(Scanned::Node(node))
}

/// Parses `**strong**`, `*em*` or `_em_`, recursing into the inner text.
fn try_parse_emphasis(cur: &mut Cursor<'_>, references: &ReferenceList) -> Option<Scanned> {
    let s = cur.s;
    let at = cur.pos();

    if cur.starts_with(Emphasis::STRONG)
        && Emphasis::can_open(cur.peek_at(2))
        && let Some(close) = Emphasis::find_strong_close(s, at + 2)
    {
        cur.jump_to(close + Emphasis::STRONG.len());
        let children = scan(&s[at + 2..close], references);
        return Some(Scanned::Node(ContentNode::Bold(children)));
    }

    let close = match cur.peek()? {
        Emphasis::STAR if Emphasis::can_open(cur.peek_at(1)) => {
            Emphasis::find_star_close(s, at + 1)?
        }
        Emphasis::UNDERSCORE
            if Emphasis::can_open(cur.peek_at(1))
                && !cur.prev().is_some_and(Emphasis::is_word_byte) =>
        {
            Emphasis::find_underscore_close(s, at + 1)?
        }
        _ => return None,
    };
    cur.jump_to(close + 1);
    let children = scan(&s[at + 1..close], references);
    Some(Scanned::Node(ContentNode::Italic(children)))
}
