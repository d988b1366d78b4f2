use crate::markup::{
    inline::{kinds::Grey, scan},
    node::{ContentNode, ReferenceList},
};

use super::{
    classify::LineClass,
    kinds::{FormulaFence, PipeTable},
};

#[derive(Debug)]
enum LeafState<'a> {
    None,
    /// A pipe row waiting to see whether the next line is a separator.
    PendingHeader { line: &'a str },
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Formula { open: &'a str, body: Vec<&'a str> },
}

/// Line-driven state machine for the block pass.
///
/// Lines that belong to no block construct collect into a plain-text run;
/// each run goes through the inline scanner when a block interrupts it or at
/// end of input. Block constructs take their whole lines, line breaks
/// included.
pub struct BlockBuilder<'a> {
    references: &'a ReferenceList,
    paragraph: Vec<&'a str>,
    leaf: LeafState<'a>,
    out: Vec<ContentNode>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(references: &'a ReferenceList) -> Self {
        Self {
            references,
            paragraph: vec![],
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &'a str, class: LineClass<'a>) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Formula { open, mut body } => {
                if class == LineClass::FenceClose {
                    self.flush_paragraph();
                    let segments = FormulaFence::segments(&body.join("\n"));
                    self.out.push(ContentNode::Formula(segments));
                } else {
                    body.push(line);
                    self.leaf = LeafState::Formula { open, body };
                }
                return;
            }
            LeafState::PendingHeader { line: header } => {
                if class == LineClass::TableSeparator {
                    self.flush_paragraph();
                    self.leaf = LeafState::Table {
                        header: PipeTable::cells(header),
                        rows: vec![],
                    };
                    return;
                }
                self.paragraph.push(header);
            }
            LeafState::Table { header, mut rows } => {
                if class.is_pipe_bounded() {
                    rows.push(PipeTable::cells(line));
                    self.leaf = LeafState::Table { header, rows };
                    return;
                }
                self.out.push(ContentNode::Table { header, rows });
            }
        }

        self.open_or_extend(line, class);
    }

    pub fn finish(mut self) -> Vec<ContentNode> {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            // Unterminated fence: its lines are ordinary text.
            LeafState::Formula { open, body } => {
                self.paragraph.push(open);
                self.paragraph.extend(body);
            }
            LeafState::PendingHeader { line } => self.paragraph.push(line),
            LeafState::Table { header, rows } => {
                self.out.push(ContentNode::Table { header, rows });
            }
        }
        self.flush_paragraph();
        self.out
    }

    fn open_or_extend(&mut self, line: &'a str, class: LineClass<'a>) {
        match class {
            LineClass::Image { alt, url } => {
                self.flush_paragraph();
                self.out.push(ContentNode::Image {
                    alt: Grey::unmark(alt).into_owned(),
                    url: Grey::unmark(url).into_owned(),
                });
            }
            LineClass::FormulaOpen => {
                self.leaf = LeafState::Formula {
                    open: line,
                    body: vec![],
                }
            }
            LineClass::TableRow => self.leaf = LeafState::PendingHeader { line },
            LineClass::TableSeparator | LineClass::FenceClose | LineClass::Plain => {
                self.paragraph.push(line)
            }
        }
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join("\n");
        self.paragraph.clear();
        self.out.extend(scan(&text, self.references));
    }
}
