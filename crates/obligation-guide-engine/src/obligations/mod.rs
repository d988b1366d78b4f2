//! # Obligations
//!
//! - **`model`**: the authored obligation content (modules, sections, content blocks)
//! - **`mapping`**: `MappingTable` (code to module ids) and `ModuleStore`
//! - **`resolver`**: exact-then-generalize lookup of a classification code
//! - **`service`**: `ObligationGuide`, the resolver plus fallback policy and summaries

pub mod mapping;
pub mod model;
pub mod resolver;
pub mod service;

pub use mapping::{MappingTable, ModuleStore};
pub use model::{
    ContentBlock, ContentBlockKind, ContractualCondition, ContractualConditionTabs, ExampleText,
    GunningscriteriaTabs, GunningscriteriumItem, LegalReference, Obligation, ProductLink,
    RequirementLevel, Section, SectionKey, Severity, Spec, TabbedExample, TabbedExamples, Warning,
};
pub use resolver::{generalize, resolve, resolve_ids};
pub use service::{ObligationGuide, ObligationSummary};
