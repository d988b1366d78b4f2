use std::collections::HashMap;

use log::trace;

use super::{ContentNode, ReferenceList, parse};

/// Memoizes [`parse`] results by input text.
///
/// Results depend on the reference list, so replacing it with a different
/// list drops every cached entry.
#[derive(Debug, Default)]
pub struct ParseCache {
    references: ReferenceList,
    entries: HashMap<String, Vec<ContentNode>>,
}

impl ParseCache {
    pub fn new(references: ReferenceList) -> Self {
        Self {
            references,
            entries: HashMap::new(),
        }
    }

    pub fn references(&self) -> &ReferenceList {
        &self.references
    }

    pub fn set_references(&mut self, references: ReferenceList) {
        if self.references != references {
            trace!("reference list changed, dropping {} cached parses", self.entries.len());
            self.entries.clear();
            self.references = references;
        }
    }

    pub fn parse(&mut self, text: &str) -> &[ContentNode] {
        if self.entries.contains_key(text) {
            trace!("parse cache hit ({} bytes)", text.len());
        }
        let references = &self.references;
        self.entries
            .entry(text.to_owned())
            .or_insert_with(|| parse(text, references))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
