use log::debug;
use serde::Serialize;

use super::{
    mapping::{MappingTable, ModuleStore},
    model::Obligation,
    resolver::resolve,
};

/// Loaded mapping data plus the product's default policy.
///
/// When a code resolves to nothing, the guide shows the general fallback
/// module followed by the terminal module.
#[derive(Debug, Clone)]
pub struct ObligationGuide {
    table: MappingTable,
    modules: ModuleStore,
    terminal_id: String,
    fallback_id: String,
}

/// Counts and flags shown above the results list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObligationSummary {
    pub count: usize,
    #[serde(rename = "hasEED")]
    pub has_eed: bool,
    #[serde(rename = "hasGPP")]
    pub has_gpp: bool,
    pub obligation_ids: Vec<String>,
}

impl ObligationGuide {
    pub const DEFAULT_TERMINAL: &'static str = "standard_obligations";
    pub const DEFAULT_FALLBACK: &'static str = "algemene_eed";
    pub const EED_BADGE: &'static str = "EED";
    pub const GPP_BADGE: &'static str = "GPP";

    pub fn new(table: MappingTable, modules: ModuleStore) -> Self {
        Self {
            table,
            modules,
            terminal_id: Self::DEFAULT_TERMINAL.to_string(),
            fallback_id: Self::DEFAULT_FALLBACK.to_string(),
        }
    }

    pub fn with_terminal(mut self, id: impl Into<String>) -> Self {
        self.terminal_id = id.into();
        self
    }

    pub fn with_fallback(mut self, id: impl Into<String>) -> Self {
        self.fallback_id = id.into();
        self
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    pub fn modules(&self) -> &ModuleStore {
        &self.modules
    }

    pub fn terminal_id(&self) -> &str {
        &self.terminal_id
    }

    pub fn fallback_id(&self) -> &str {
        &self.fallback_id
    }

    /// Modules to show for `code`.
    pub fn obligations_for(&self, code: &str) -> Vec<&Obligation> {
        let resolved = resolve(code, &self.table, &self.modules, &self.terminal_id);
        if !resolved.is_empty() {
            return resolved;
        }
        debug!("code {code} unmapped, using fallback {}", self.fallback_id);
        [self.fallback_id.as_str(), self.terminal_id.as_str()]
            .into_iter()
            .filter_map(|id| self.modules.get(id))
            .collect()
    }

    pub fn obligation(&self, id: &str) -> Option<&Obligation> {
        self.modules.get(id)
    }

    pub fn has_obligations(&self, code: &str) -> bool {
        !self.obligations_for(code).is_empty()
    }

    pub fn summary(&self, code: &str) -> ObligationSummary {
        let obligations = self.obligations_for(code);
        ObligationSummary {
            count: obligations.len(),
            has_eed: obligations.iter().any(|o| o.has_badge(Self::EED_BADGE)),
            has_gpp: obligations.iter().any(|o| o.has_badge(Self::GPP_BADGE)),
            obligation_ids: obligations
                .iter()
                .map(|o| o.obligation_id.clone())
                .collect(),
        }
    }
}
