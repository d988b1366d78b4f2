use serde::{Deserialize, Serialize};

/// The kind of organization that tenders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Organization {
    Rijksoverheid,
    Decentraal,
    Publiekrechterlijk,
    WettelijkeTaak,
    /// "Anders" on the first organization question.
    Anders,
    /// "Ander type organisatie" on the follow-up question.
    AnderTypeOrganisatie,
}

impl Organization {
    pub const ALL: [Organization; 6] = [
        Organization::Rijksoverheid,
        Organization::Decentraal,
        Organization::Publiekrechterlijk,
        Organization::WettelijkeTaak,
        Organization::Anders,
        Organization::AnderTypeOrganisatie,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Organization::Rijksoverheid => "rijksoverheid",
            Organization::Decentraal => "decentraal",
            Organization::Publiekrechterlijk => "publiekrechterlijk",
            Organization::WettelijkeTaak => "wettelijke-taak",
            Organization::Anders => "anders",
            Organization::AnderTypeOrganisatie => "ander-type-organisatie",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.key() == key)
    }

    /// Not a contracting authority by itself.
    pub fn is_other(self) -> bool {
        matches!(
            self,
            Organization::Anders | Organization::AnderTypeOrganisatie
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcurementType {
    Werken,
    Leveringen,
    #[default]
    Diensten,
    Concessie,
}

impl ProcurementType {
    pub fn label(self) -> &'static str {
        match self {
            ProcurementType::Werken => "Werken",
            ProcurementType::Leveringen => "Leveringen",
            ProcurementType::Diensten => "Diensten",
            ProcurementType::Concessie => "Concessie",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [
            ProcurementType::Werken,
            ProcurementType::Leveringen,
            ProcurementType::Diensten,
            ProcurementType::Concessie,
        ]
        .into_iter()
        .find(|t| t.label() == label)
    }
}

/// What the contracting party gives in return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CounterPerformance {
    Geldbetaling,
    Belastingvoordeel,
    InNatura,
    Anders,
    Geen,
}

/// How the authority has a direct economic interest in the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EconomicInterest {
    Eigenaar,
    Risico,
    Openbaar,
    Voordeel,
    Geen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThresholdAnswer {
    Above,
    Below,
    /// Asks for the estimation calculator; the questionnaire does not move.
    Calculator,
}

/// Why the contract may interest bidders from other member states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossBorderInterest {
    Waarde,
    Specialisatie,
    Locatie,
    NietAannemelijk,
}

/// Exemptions from the duty to tender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exception {
    Inhouse,
    Samenwerking,
    Exclusiviteit,
    Vertrouwelijkheid,
    Lidstaat,
    Uitgesloten,
    Geen,
}

const WORKS_THRESHOLD: &str = "€5.538.000";
const CENTRAL_THRESHOLD: &str = "€143.000";
const DEFAULT_THRESHOLD: &str = "€221.000";

/// European threshold shown on the result pages.
pub fn threshold_amount(
    organization: Option<Organization>,
    procurement_type: Option<ProcurementType>,
) -> &'static str {
    let Some(
        org @ (Organization::Rijksoverheid
        | Organization::Decentraal
        | Organization::Publiekrechterlijk),
    ) = organization
    else {
        return DEFAULT_THRESHOLD;
    };
    match procurement_type {
        Some(ProcurementType::Werken | ProcurementType::Concessie) => WORKS_THRESHOLD,
        Some(ProcurementType::Leveringen | ProcurementType::Diensten)
            if org == Organization::Rijksoverheid =>
        {
            CENTRAL_THRESHOLD
        }
        _ => DEFAULT_THRESHOLD,
    }
}
