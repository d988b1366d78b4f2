//! # Questionnaire
//!
//! The "is there a duty to tender?" questionnaire as an explicit state
//! machine: an immutable [`WizardState`] moved forward by the pure
//! [`transition`] function.

pub mod answers;
pub mod state;

pub use answers::{
    CounterPerformance, CrossBorderInterest, EconomicInterest, Exception, Organization,
    ProcurementType, ThresholdAnswer, threshold_amount,
};
pub use state::{Event, Phase, WizardState, transition};
