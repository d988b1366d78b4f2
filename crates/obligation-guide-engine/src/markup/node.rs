use serde::{Deserialize, Serialize};

/// One element of a parsed authored text.
///
/// Nodes own their text; a parse call always produces a fresh tree.
/// Serializes adjacently tagged (`{"type": .., "value": ..}`) so presentation
/// layers can switch on `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentNode {
    /// Plain text, line breaks preserved.
    Text(String),
    /// `**strong**` with parsed children.
    Bold(Vec<ContentNode>),
    /// `*em*` or `_em_` with parsed children.
    Italic(Vec<ContentNode>),
    /// `[label](https://...)`.
    Link { label: String, url: String },
    /// Click-to-reveal annotation from `popup:` or a resolved `toggle:` reference.
    Popup {
        label: String,
        title: String,
        body: String,
        /// Always `Some` for `popup:` payloads (possibly empty); for
        /// reference-list popups, the reference's url if it has one.
        reference: Option<String>,
    },
    /// `[label](toggle:legal)`: a trigger the caller wires to its legal-basis panel.
    LegalToggle(String),
    /// `~~text~~`, rendered de-emphasized, with parsed children.
    Grey(Vec<ContentNode>),
    /// A line of the form `![alt](url)`.
    Image { alt: String, url: String },
    /// A pipe table. Cells keep their authored text; see [`super::cell_lines`].
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Body of a ```` ```formula ```` fence.
    Formula(Vec<FormulaSegment>),
}

/// A run inside a formula block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaSegment {
    Text { text: String },
    /// `E_max` is `Subscript { base: "E", sub: "max" }`.
    Subscript { base: String, sub: String },
}

impl ContentNode {
    /// Appends the text a reader sees for this node, without markup syntax.
    pub fn write_plain_text(&self, out: &mut String) {
        match self {
            ContentNode::Text(t) | ContentNode::LegalToggle(t) => out.push_str(t),
            ContentNode::Bold(children)
            | ContentNode::Italic(children)
            | ContentNode::Grey(children) => {
                for child in children {
                    child.write_plain_text(out);
                }
            }
            ContentNode::Link { label, .. } | ContentNode::Popup { label, .. } => {
                out.push_str(label)
            }
            ContentNode::Image { alt, .. } => out.push_str(alt),
            ContentNode::Table { header, rows } => {
                out.push_str(&header.join(" "));
                for row in rows {
                    out.push('\n');
                    out.push_str(&row.join(" "));
                }
            }
            ContentNode::Formula(segments) => {
                for seg in segments {
                    match seg {
                        FormulaSegment::Text { text } => out.push_str(text),
                        FormulaSegment::Subscript { base, sub } => {
                            out.push_str(base);
                            out.push_str(sub);
                        }
                    }
                }
            }
        }
    }
}

/// A named legal reference that `[label](toggle:<label>)` popups resolve against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub label: String,
    pub citation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Reference {
    pub fn new(label: impl Into<String>, citation: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            citation: citation.into(),
            url: None,
        }
    }
}

/// Ordered reference list supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceList(Vec<Reference>);

impl ReferenceList {
    pub fn new(references: Vec<Reference>) -> Self {
        Self(references)
    }

    /// First reference whose label equals `label` exactly.
    pub fn find(&self, label: &str) -> Option<&Reference> {
        self.0.iter().find(|r| r.label == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Reference>> for ReferenceList {
    fn from(references: Vec<Reference>) -> Self {
        Self(references)
    }
}

impl FromIterator<Reference> for ReferenceList {
    fn from_iter<I: IntoIterator<Item = Reference>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_matches_exact_label() {
        let refs = ReferenceList::new(vec![
            Reference::new("Art. 2.1 Aw", "Aanbestedingswet 2012, artikel 2.1"),
            Reference::new("EED", "Richtlijn (EU) 2023/1791"),
        ]);
        assert_eq!(
            refs.find("EED").map(|r| r.citation.as_str()),
            Some("Richtlijn (EU) 2023/1791")
        );
        assert!(refs.find("eed").is_none());
    }

    #[test]
    fn plain_text_walks_nested_emphasis() {
        let node = ContentNode::Bold(vec![
            ContentNode::Text("bold ".into()),
            ContentNode::Italic(vec![ContentNode::Text("and italic".into())]),
        ]);
        let mut out = String::new();
        node.write_plain_text(&mut out);
        assert_eq!(out, "bold and italic");
    }

    #[test]
    fn nodes_serialize_adjacently_tagged() {
        let node = ContentNode::Grey(vec![ContentNode::Text("n.v.t.".into())]);
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"type":"grey","value":[{"type":"text","value":"n.v.t."}]}"#
        );
    }
}
