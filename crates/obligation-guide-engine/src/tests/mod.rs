use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::obligations::Obligation;

/// Create a temporary data directory
pub fn create_test_data_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test data file with content
pub fn create_test_file(data_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = data_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A module with no sections, titled after its id
pub fn obligation(id: &str) -> Obligation {
    obligation_with_badges(id, &[])
}

pub fn obligation_with_badges(id: &str, badges: &[&str]) -> Obligation {
    Obligation {
        obligation_id: id.to_string(),
        archetype: "product".to_string(),
        title: id.to_string(),
        summary: String::new(),
        badges: badges.iter().map(|b| b.to_string()).collect(),
        warnings: None,
        footer_warnings: None,
        legal_references: vec![],
        sections: vec![],
    }
}

/// JSON document for a module, as authored on disk
pub fn obligation_json(id: &str) -> String {
    serde_json::json!({
        "obligation_id": id,
        "archetype": "product",
        "title": format!("Verplichtingen {id}"),
        "summary": "Samenvatting met **nadruk**.",
        "badges": ["EED"],
        "legal_references": [
            {"label": "Art. 7 EED", "citation": "Richtlijn (EU) 2023/1791, artikel 7", "url": "https://eur-lex.europa.eu/eli/dir/2023/1791"}
        ],
        "sections": [{
            "key": "technical_specs",
            "title": "Technische specificaties",
            "requirement_level": "verplicht",
            "intro": "Zie [artikel 7](toggle:Art. 7 EED)."
        }]
    })
    .to_string()
}

pub fn ids<'a>(obligations: &[&'a Obligation]) -> Vec<&'a str> {
    obligations.iter().map(|o| o.obligation_id.as_str()).collect()
}
