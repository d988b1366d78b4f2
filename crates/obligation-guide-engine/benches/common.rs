// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use obligation_guide_engine::{MappingTable, ModuleStore, Obligation};

#[allow(dead_code)]
pub fn generate_authored_text(size: usize) -> String {
    let base = "**Let op:** de aanbestedende dienst koopt alleen producten met het *hoogste* energielabel, zie [artikel 7](popup:Art. 7 EED||Overheden kopen energie-efficiënt in (zie bijlage IV).||Richtlijn (EU) 2023/1791).\n\
Niet van toepassing: ~~servers en datacenters~~.\n\
| Product | Eis |\n\
|---|:---:|\n\
| Monitor | label A<br>of B |\n\
| Lamp | ~~n.v.t.~~ |\n\
```formula\n\
EEI_c = P_avg / P_ref\n\
```\n\
![Energielabel](/img/label.png)\n\
Meer informatie op [RVO](https://www.rvo.nl) en in de _Aanbestedingswet_.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_mapping(codes: usize) -> (MappingTable, ModuleStore) {
    let table: MappingTable = (0..codes)
        .map(|i| {
            (
                format!("{:08}-{}", 30_000_000 + i * 100, i % 10),
                vec![format!("module_{}", i % 50)],
            )
        })
        .collect();
    let modules: ModuleStore = (0..50)
        .map(|i| module(&format!("module_{i}")))
        .chain(std::iter::once(module("standard_obligations")))
        .collect();
    (table, modules)
}

#[allow(dead_code)]
fn module(id: &str) -> Obligation {
    Obligation {
        obligation_id: id.to_string(),
        archetype: "product".to_string(),
        title: id.to_string(),
        summary: String::new(),
        badges: vec![],
        warnings: None,
        footer_warnings: None,
        legal_references: vec![],
        sections: vec![],
    }
}
