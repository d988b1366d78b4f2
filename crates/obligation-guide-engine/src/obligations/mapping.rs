use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::model::Obligation;

/// Exact classification codes to ordered module ids.
///
/// Serializes as a plain JSON object, `{"30231300-0": ["energy_label"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingTable(BTreeMap<String, Vec<String>>);

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Module ids stored for exactly `code`.
    pub fn get(&self, code: &str) -> Option<&[String]> {
        self.0.get(code).map(Vec::as_slice)
    }

    pub fn insert(&mut self, code: impl Into<String>, ids: Vec<String>) {
        self.0.insert(code.into(), ids);
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<C, I> FromIterator<(C, I)> for MappingTable
where
    C: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (C, I)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(code, ids)| (code.into(), ids.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

/// Loaded obligation modules keyed by `obligation_id`.
#[derive(Debug, Clone, Default)]
pub struct ModuleStore(HashMap<String, Obligation>);

impl ModuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Obligation> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Adds a module, returning the one it replaced.
    pub fn insert(&mut self, obligation: Obligation) -> Option<Obligation> {
        self.0.insert(obligation.obligation_id.clone(), obligation)
    }

    /// Module ids in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.0.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Obligation> for ModuleStore {
    fn from_iter<T: IntoIterator<Item = Obligation>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|o| (o.obligation_id.clone(), o))
                .collect(),
        )
    }
}
