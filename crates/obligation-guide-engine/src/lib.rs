pub mod io;
pub mod markup;
pub mod obligations;
pub mod wizard;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use markup::{ContentNode, FormulaSegment, ParseCache, Reference, ReferenceList};
pub use obligations::{MappingTable, ModuleStore, Obligation, ObligationGuide, ObligationSummary};
