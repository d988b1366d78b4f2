use serde::{Deserialize, Serialize};

use crate::markup::{Reference, ReferenceList};

/// One obligation module: a titled set of sections with its legal basis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation {
    pub obligation_id: String,
    pub archetype: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<Warning>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_warnings: Option<Vec<Warning>>,
    #[serde(default)]
    pub legal_references: Vec<LegalReference>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Obligation {
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// The references `toggle:` popups in this module's text resolve against.
    pub fn reference_list(&self) -> ReferenceList {
        self.legal_references.iter().map(Reference::from).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Red,
    Yellow,
    Positive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalReference {
    pub label: String,
    pub citation: String,
    pub url: String,
}

impl From<&LegalReference> for Reference {
    fn from(r: &LegalReference) -> Self {
        Reference {
            label: r.label.clone(),
            citation: r.citation.clone(),
            url: (!r.url.is_empty()).then(|| r.url.clone()),
        }
    }
}

impl From<Vec<LegalReference>> for ReferenceList {
    fn from(references: Vec<LegalReference>) -> Self {
        references.iter().map(Reference::from).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementLevel {
    Verplicht,
    VoorwaardelijkVerplicht,
    Aanbevolen,
    Optioneel,
}

impl RequirementLevel {
    pub fn label(self) -> &'static str {
        match self {
            RequirementLevel::Verplicht => "verplicht",
            RequirementLevel::VoorwaardelijkVerplicht => "voorwaardelijk verplicht",
            RequirementLevel::Aanbevolen => "aanbevolen",
            RequirementLevel::Optioneel => "optioneel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleText {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    pub code: String,
    pub text: String,
    pub legal_basis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement_level: Option<RequirementLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractualCondition {
    pub code: String,
    pub text: String,
    pub legal_basis: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabbedExample {
    pub title: String,
    pub text: String,
}

/// Example texts at two ambition levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabbedExamples {
    #[serde(default)]
    pub basis: Vec<TabbedExample>,
    #[serde(default)]
    pub ambitieus: Vec<TabbedExample>,
}

impl TabbedExamples {
    pub fn tabs(&self) -> Vec<(&'static str, &[TabbedExample])> {
        non_empty([("Basis", &self.basis), ("Ambitieus", &self.ambitieus)])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GunningscriteriumItem {
    pub code: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub points: Vec<String>,
    pub legal_basis: String,
}

/// Award criteria grouped by theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GunningscriteriaTabs {
    #[serde(default)]
    pub circulariteit: Vec<GunningscriteriumItem>,
    #[serde(default)]
    pub milieu_impact: Vec<GunningscriteriumItem>,
    #[serde(default)]
    pub sociaal: Vec<GunningscriteriumItem>,
    #[serde(default)]
    pub kwaliteit_levensduur: Vec<GunningscriteriumItem>,
    #[serde(default)]
    pub certificering_labels: Vec<GunningscriteriumItem>,
    #[serde(default)]
    pub logistiek_transport: Vec<GunningscriteriumItem>,
}

impl GunningscriteriaTabs {
    pub fn tabs(&self) -> Vec<(&'static str, &[GunningscriteriumItem])> {
        non_empty([
            ("Circulariteit", &self.circulariteit),
            ("Milieu-impact", &self.milieu_impact),
            ("Sociaal", &self.sociaal),
            ("Kwaliteit & levensduur", &self.kwaliteit_levensduur),
            ("Certificering & labels", &self.certificering_labels),
            ("Logistiek & transport", &self.logistiek_transport),
        ])
    }
}

/// Contract conditions grouped by theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractualConditionTabs {
    #[serde(default)]
    pub arbeidsomstandigheden: Vec<ContractualCondition>,
    #[serde(default)]
    pub sociale_normen: Vec<ContractualCondition>,
    #[serde(default)]
    pub milieunormen: Vec<ContractualCondition>,
}

impl ContractualConditionTabs {
    pub fn tabs(&self) -> Vec<(&'static str, &[ContractualCondition])> {
        non_empty([
            ("Arbeidsomstandigheden", &self.arbeidsomstandigheden),
            ("Sociale normen", &self.sociale_normen),
            ("Milieunormen", &self.milieunormen),
        ])
    }
}

fn non_empty<'a, T, const N: usize>(
    tabs: [(&'static str, &'a Vec<T>); N],
) -> Vec<(&'static str, &'a [T])> {
    tabs.into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(label, items)| (label, items.as_slice()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Scope,
    TypeOpdracht,
    FunctioneleBehoefte,
    Levenscyclusbenadering,
    ReikwijdteOpdracht,
    TechnicalSpecs,
    Gunningscriteria,
    ExecutionConditions,
    Geschiktheidseisen,
}

/// The kinds of content a section can carry, in their default display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentBlockKind {
    Intro,
    Warnings,
    Steps,
    ExampleTexts,
    TabbedExamples,
    Specs,
    GunningscriteriaTabs,
    ContractualConditions,
    ContractualConditionsTabs,
    ProductLinks,
    AdditionalSteps,
}

impl ContentBlockKind {
    pub const DEFAULT_ORDER: [ContentBlockKind; 11] = [
        ContentBlockKind::Intro,
        ContentBlockKind::Warnings,
        ContentBlockKind::Steps,
        ContentBlockKind::ExampleTexts,
        ContentBlockKind::TabbedExamples,
        ContentBlockKind::Specs,
        ContentBlockKind::GunningscriteriaTabs,
        ContentBlockKind::ContractualConditions,
        ContentBlockKind::ContractualConditionsTabs,
        ContentBlockKind::ProductLinks,
        ContentBlockKind::AdditionalSteps,
    ];
}

/// A borrowed view of one content block of a [`Section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentBlock<'a> {
    Intro(&'a str),
    Warnings(&'a [Warning]),
    Steps {
        title: &'a str,
        steps: &'a [String],
        ordered: bool,
    },
    ExampleTexts(&'a [ExampleText]),
    TabbedExamples(&'a TabbedExamples),
    Specs(&'a [Spec]),
    GunningscriteriaTabs(&'a GunningscriteriaTabs),
    ContractualConditions(&'a [ContractualCondition]),
    ContractualConditionsTabs(&'a ContractualConditionTabs),
    ProductLinks(&'a [ProductLink]),
    AdditionalSteps(&'a [String]),
}

impl ContentBlock<'_> {
    pub fn kind(&self) -> ContentBlockKind {
        match self {
            ContentBlock::Intro(_) => ContentBlockKind::Intro,
            ContentBlock::Warnings(_) => ContentBlockKind::Warnings,
            ContentBlock::Steps { .. } => ContentBlockKind::Steps,
            ContentBlock::ExampleTexts(_) => ContentBlockKind::ExampleTexts,
            ContentBlock::TabbedExamples(_) => ContentBlockKind::TabbedExamples,
            ContentBlock::Specs(_) => ContentBlockKind::Specs,
            ContentBlock::GunningscriteriaTabs(_) => ContentBlockKind::GunningscriteriaTabs,
            ContentBlock::ContractualConditions(_) => ContentBlockKind::ContractualConditions,
            ContentBlock::ContractualConditionsTabs(_) => {
                ContentBlockKind::ContractualConditionsTabs
            }
            ContentBlock::ProductLinks(_) => ContentBlockKind::ProductLinks,
            ContentBlock::AdditionalSteps(_) => ContentBlockKind::AdditionalSteps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub key: SectionKey,
    pub title: String,
    pub requirement_level: RequirementLevel,
    #[serde(default)]
    pub intro: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<Warning>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps_ordered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_texts: Option<Vec<ExampleText>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabbed_examples: Option<TabbedExamples>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gunningscriteria_tabs: Option<GunningscriteriaTabs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractual_conditions_tabs: Option<ContractualConditionTabs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<Vec<Spec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractual_conditions: Option<Vec<ContractualCondition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_links: Option<Vec<ProductLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_order: Option<Vec<ContentBlockKind>>,
}

impl Section {
    pub const DEFAULT_STEPS_TITLE: &'static str = "Neem de volgende stappen:";

    /// Content blocks in display order: `content_order` when given,
    /// [`ContentBlockKind::DEFAULT_ORDER`] otherwise. Blocks without data
    /// are left out.
    pub fn blocks(&self) -> Vec<ContentBlock<'_>> {
        let order = self
            .content_order
            .as_deref()
            .unwrap_or(&ContentBlockKind::DEFAULT_ORDER);
        order.iter().filter_map(|&kind| self.block(kind)).collect()
    }

    /// The block of the given kind, if this section has data for it.
    pub fn block(&self, kind: ContentBlockKind) -> Option<ContentBlock<'_>> {
        let block = match kind {
            ContentBlockKind::Intro => ContentBlock::Intro(&self.intro),
            ContentBlockKind::Warnings => ContentBlock::Warnings(self.warnings.as_deref()?),
            ContentBlockKind::Steps => ContentBlock::Steps {
                title: self
                    .steps_title
                    .as_deref()
                    .unwrap_or(Self::DEFAULT_STEPS_TITLE),
                steps: self.steps.as_deref()?,
                ordered: self.steps_ordered.unwrap_or(false),
            },
            ContentBlockKind::ExampleTexts => {
                ContentBlock::ExampleTexts(self.example_texts.as_deref()?)
            }
            ContentBlockKind::TabbedExamples => {
                ContentBlock::TabbedExamples(self.tabbed_examples.as_ref()?)
            }
            ContentBlockKind::Specs => ContentBlock::Specs(self.specs.as_deref()?),
            ContentBlockKind::GunningscriteriaTabs => {
                ContentBlock::GunningscriteriaTabs(self.gunningscriteria_tabs.as_ref()?)
            }
            ContentBlockKind::ContractualConditions => {
                ContentBlock::ContractualConditions(self.contractual_conditions.as_deref()?)
            }
            ContentBlockKind::ContractualConditionsTabs => ContentBlock::ContractualConditionsTabs(
                self.contractual_conditions_tabs.as_ref()?,
            ),
            ContentBlockKind::ProductLinks => {
                ContentBlock::ProductLinks(self.product_links.as_deref()?)
            }
            ContentBlockKind::AdditionalSteps => {
                ContentBlock::AdditionalSteps(self.additional_steps.as_deref()?)
            }
        };
        (!block.is_empty()).then_some(block)
    }
}

impl ContentBlock<'_> {
    fn is_empty(&self) -> bool {
        match self {
            ContentBlock::Intro(text) => text.trim().is_empty(),
            ContentBlock::Warnings(items) => items.is_empty(),
            ContentBlock::Steps { steps, .. } => steps.is_empty(),
            ContentBlock::ExampleTexts(items) => items.is_empty(),
            ContentBlock::TabbedExamples(tabs) => tabs.tabs().is_empty(),
            ContentBlock::Specs(items) => items.is_empty(),
            ContentBlock::GunningscriteriaTabs(tabs) => tabs.tabs().is_empty(),
            ContentBlock::ContractualConditions(items) => items.is_empty(),
            ContentBlock::ContractualConditionsTabs(tabs) => tabs.tabs().is_empty(),
            ContentBlock::ProductLinks(items) => items.is_empty(),
            ContentBlock::AdditionalSteps(items) => items.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(json: serde_json::Value) -> Section {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn blocks_follow_default_order_and_skip_missing() {
        let s = section(serde_json::json!({
            "key": "technical_specs",
            "title": "Technische specificaties",
            "requirement_level": "verplicht",
            "intro": "Neem de eisen op.",
            "specs": [{"code": "TS-1", "text": "Label A", "legal_basis": "Art. 7 EED"}],
            "warnings": [{"severity": "red", "text": "Let op"}],
            "product_links": []
        }));
        let kinds: Vec<_> = s.blocks().iter().map(ContentBlock::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ContentBlockKind::Intro,
                ContentBlockKind::Warnings,
                ContentBlockKind::Specs,
            ]
        );
    }

    #[test]
    fn content_order_overrides_default() {
        let s = section(serde_json::json!({
            "key": "scope",
            "title": "Reikwijdte",
            "requirement_level": "optioneel",
            "intro": "Intro",
            "steps": ["Stap 1"],
            "content_order": ["steps", "intro", "specs"]
        }));
        let kinds: Vec<_> = s.blocks().iter().map(ContentBlock::kind).collect();
        assert_eq!(kinds, vec![ContentBlockKind::Steps, ContentBlockKind::Intro]);
    }

    #[test]
    fn steps_title_defaults() {
        let s = section(serde_json::json!({
            "key": "scope",
            "title": "t",
            "requirement_level": "verplicht",
            "intro": "",
            "steps": ["a"]
        }));
        assert_eq!(
            s.blocks(),
            vec![ContentBlock::Steps {
                title: Section::DEFAULT_STEPS_TITLE,
                steps: &["a".to_string()],
                ordered: false,
            }]
        );
    }

    #[test]
    fn empty_tab_groups_are_skipped() {
        let s = section(serde_json::json!({
            "key": "gunningscriteria",
            "title": "Gunningscriteria",
            "requirement_level": "optioneel",
            "intro": "",
            "gunningscriteria_tabs": {"circulariteit": []},
            "contractual_conditions_tabs": {
                "milieunormen": [{"code": "C-1", "text": "Geen PFAS", "legal_basis": "-"}]
            }
        }));
        let blocks = s.blocks();
        assert_eq!(blocks.len(), 1);
        let ContentBlock::ContractualConditionsTabs(tabs) = blocks[0] else {
            panic!("unexpected block {:?}", blocks[0]);
        };
        let labels: Vec<_> = tabs.tabs().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Milieunormen"]);
    }

    #[test]
    fn unknown_section_key_is_rejected() {
        let result: Result<Section, _> = serde_json::from_value(serde_json::json!({
            "key": "onbekend",
            "title": "t",
            "requirement_level": "verplicht",
            "intro": ""
        }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_block_kind_is_rejected() {
        let result: Result<Section, _> = serde_json::from_value(serde_json::json!({
            "key": "scope",
            "title": "t",
            "requirement_level": "verplicht",
            "intro": "",
            "content_order": ["intro", "video"]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn legal_references_become_reference_list() {
        let list = ReferenceList::from(vec![
            LegalReference {
                label: "Art. 7 EED".into(),
                citation: "Richtlijn (EU) 2023/1791".into(),
                url: "https://eur-lex.europa.eu/eli/dir/2023/1791".into(),
            },
            LegalReference {
                label: "Aw".into(),
                citation: "Aanbestedingswet 2012".into(),
                url: String::new(),
            },
        ]);
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.find("Art. 7 EED").and_then(|r| r.url.as_deref()),
            Some("https://eur-lex.europa.eu/eli/dir/2023/1791")
        );
        assert_eq!(list.find("Aw").and_then(|r| r.url.as_deref()), None);
    }
}
