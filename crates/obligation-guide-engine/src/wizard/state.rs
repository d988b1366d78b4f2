use log::debug;
use serde::{Deserialize, Serialize};

use super::answers::{
    CounterPerformance, CrossBorderInterest, EconomicInterest, Exception, Organization,
    ProcurementType, ThresholdAnswer, threshold_amount,
};

/// Where the questionnaire is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    #[default]
    AskOrgType,
    AskTenderingOrgType,
    AskSubsidy,
    AskWrittenAgreement,
    AskCounterPerformance,
    AskLegallyEnforceable,
    AskEconInterest,
    AskThreshold,
    AskCrossBorderInterest,
    AskException,
    ResultNoDuty,
    ResultTransparency,
    ResultNatRules,
    ResultDuty,
}

impl Phase {
    pub const ALL: [Phase; 14] = [
        Phase::AskOrgType,
        Phase::AskTenderingOrgType,
        Phase::AskSubsidy,
        Phase::AskWrittenAgreement,
        Phase::AskCounterPerformance,
        Phase::AskLegallyEnforceable,
        Phase::AskEconInterest,
        Phase::AskThreshold,
        Phase::AskCrossBorderInterest,
        Phase::AskException,
        Phase::ResultNoDuty,
        Phase::ResultTransparency,
        Phase::ResultNatRules,
        Phase::ResultDuty,
    ];

    /// Key persisted in links and session state.
    pub fn step_key(self) -> &'static str {
        match self {
            Phase::AskOrgType => "askOrgType",
            Phase::AskTenderingOrgType => "askTenderingOrgType",
            Phase::AskSubsidy => "askSubsidy",
            Phase::AskWrittenAgreement => "askWrittenAgreement",
            Phase::AskCounterPerformance => "askCounterPerformance",
            Phase::AskLegallyEnforceable => "askLegallyEnforceable",
            Phase::AskEconInterest => "askEconInterest",
            Phase::AskThreshold => "askThreshold",
            Phase::AskCrossBorderInterest => "askCrossBorderInterest",
            Phase::AskException => "askException",
            Phase::ResultNoDuty => "resultNoDuty",
            Phase::ResultTransparency => "resultTransparency",
            Phase::ResultNatRules => "resultNatRules",
            Phase::ResultDuty => "resultDuty",
        }
    }

    /// Restores a phase from a persisted step key. Keys from older links
    /// map to their current phase; unknown keys start over.
    pub fn from_step_key(key: &str) -> Self {
        match key {
            "input" => Phase::AskOrgType,
            "other-org-step" => Phase::AskTenderingOrgType,
            "other-org-subsidy" => Phase::AskSubsidy,
            "written-agreement" => Phase::AskWrittenAgreement,
            "estimation" => Phase::AskThreshold,
            "other-org-subsidy-result" | "written-agreement-result" => Phase::ResultNoDuty,
            key => Self::ALL
                .into_iter()
                .find(|p| p.step_key() == key)
                .unwrap_or_default(),
        }
    }

    pub fn is_result(self) -> bool {
        matches!(
            self,
            Phase::ResultNoDuty
                | Phase::ResultTransparency
                | Phase::ResultNatRules
                | Phase::ResultDuty
        )
    }
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A classification code was picked from the search.
    SelectCode {
        code: String,
        description: String,
        procurement_type: Option<ProcurementType>,
    },
    ChooseOrganization(Organization),
    Subsidy(bool),
    WrittenAgreement(bool),
    CounterPerformance(CounterPerformance),
    LegallyEnforceable(bool),
    EconomicInterest(EconomicInterest),
    Threshold(ThresholdAnswer),
    CrossBorderInterest(CrossBorderInterest),
    Exception(Exception),
    Restart,
    /// A click on a progress-bar step.
    GoToStep(u8),
}

/// Immutable questionnaire state. Move it forward with [`transition`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub phase: Phase,
    pub code: Option<String>,
    pub description: Option<String>,
    pub organization: Option<Organization>,
    pub procurement_type: Option<ProcurementType>,
}

impl WizardState {
    /// Rebuilds a state from persisted link parameters.
    pub fn restore(step: &str, code: Option<&str>, organization: Option<&str>) -> Self {
        let organization = organization.and_then(Organization::from_key);
        Self {
            phase: Phase::from_step_key(step),
            code: code.map(str::to_string),
            description: None,
            organization,
            procurement_type: organization.map(|_| ProcurementType::Diensten),
        }
    }

    pub fn threshold_amount(&self) -> &'static str {
        threshold_amount(self.organization, self.procurement_type)
    }

    fn at(&self, phase: Phase) -> Self {
        Self {
            phase,
            ..self.clone()
        }
    }
}

/// Applies `event` to `state`. Events that do not apply to the current
/// phase leave the state unchanged.
pub fn transition(state: &WizardState, event: Event) -> WizardState {
    use Phase::*;

    let next = match (state.phase, event) {
        (
            _,
            Event::SelectCode {
                code,
                description,
                procurement_type,
            },
        ) => WizardState {
            phase: AskOrgType,
            code: Some(code),
            description: Some(description),
            organization: None,
            procurement_type: Some(procurement_type.unwrap_or_default()),
        },
        (_, Event::Restart | Event::GoToStep(1)) => WizardState::default(),
        (phase, Event::GoToStep(2)) if state.organization.is_some() || phase != AskOrgType => {
            state.at(AskTenderingOrgType)
        }

        (phase @ (AskOrgType | AskTenderingOrgType), Event::ChooseOrganization(org)) => {
            let phase = match (phase, org.is_other()) {
                (AskOrgType, true) => AskTenderingOrgType,
                (_, true) => AskSubsidy,
                (_, false) => AskWrittenAgreement,
            };
            WizardState {
                phase,
                organization: Some(org),
                ..state.clone()
            }
        }

        (AskSubsidy, Event::Subsidy(false)) => state.at(ResultNoDuty),
        (AskSubsidy, Event::Subsidy(true)) => state.at(AskWrittenAgreement),

        (AskWrittenAgreement, Event::WrittenAgreement(false)) => state.at(ResultNoDuty),
        (AskWrittenAgreement, Event::WrittenAgreement(true)) => state.at(AskCounterPerformance),

        (AskCounterPerformance, Event::CounterPerformance(CounterPerformance::Geen)) => {
            state.at(ResultNoDuty)
        }
        (AskCounterPerformance, Event::CounterPerformance(_)) => state.at(AskLegallyEnforceable),

        (AskLegallyEnforceable, Event::LegallyEnforceable(false)) => state.at(ResultNoDuty),
        (AskLegallyEnforceable, Event::LegallyEnforceable(true)) => state.at(AskEconInterest),

        (AskEconInterest, Event::EconomicInterest(EconomicInterest::Geen)) => {
            state.at(ResultNoDuty)
        }
        (AskEconInterest, Event::EconomicInterest(_)) => state.at(AskThreshold),

        (AskThreshold, Event::Threshold(ThresholdAnswer::Above)) => state.at(AskException),
        (AskThreshold, Event::Threshold(ThresholdAnswer::Below)) => {
            state.at(AskCrossBorderInterest)
        }

        (
            AskCrossBorderInterest,
            Event::CrossBorderInterest(CrossBorderInterest::NietAannemelijk),
        ) => state.at(ResultNatRules),
        (AskCrossBorderInterest, Event::CrossBorderInterest(_)) => state.at(ResultTransparency),

        (AskException, Event::Exception(Exception::Geen)) => state.at(ResultDuty),
        (AskException, Event::Exception(_)) => state.at(ResultNoDuty),

        (phase, event) => {
            debug!("ignoring {event:?} in phase {}", phase.step_key());
            return state.clone();
        }
    };

    debug!(
        "questionnaire {} -> {}",
        state.phase.step_key(),
        next.phase.step_key()
    );
    next
}
