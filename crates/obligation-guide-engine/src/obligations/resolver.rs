use log::{debug, warn};

use super::{mapping::MappingTable, mapping::ModuleStore, model::Obligation};

/// One generalization step: a trailing non-`'0'` character becomes `'0'`,
/// a trailing `'0'` is dropped.
///
/// Returns `None` once the code is two characters or shorter.
///
/// ```
/// use obligation_guide_engine::obligations::resolver::generalize;
///
/// assert_eq!(generalize("30231310").as_deref(), Some("30231300"));
/// assert_eq!(generalize("30231300").as_deref(), Some("3023130"));
/// assert_eq!(generalize("45"), None);
/// ```
pub fn generalize(code: &str) -> Option<String> {
    if code.chars().count() <= 2 {
        return None;
    }
    let mut parent = code.to_string();
    if parent.pop()? != '0' {
        parent.push('0');
    }
    Some(parent)
}

/// Finds the table entry for `code`: the exact key, else the first key
/// reached by repeated [`generalize`] steps.
///
/// Returns the matched key with its module ids.
pub fn resolve_ids<'t>(code: &str, table: &'t MappingTable) -> Option<(String, &'t [String])> {
    if let Some(ids) = table.get(code) {
        debug!("code {code} matched exactly ({} modules)", ids.len());
        return Some((code.to_string(), ids));
    }

    let mut current = code.to_string();
    while let Some(parent) = generalize(&current) {
        if let Some(ids) = table.get(&parent) {
            debug!("code {code} matched ancestor {parent} ({} modules)", ids.len());
            return Some((parent, ids));
        }
        current = parent;
    }

    debug!("code {code} has no mapping");
    None
}

/// Resolves `code` to its obligation modules in table order, followed by
/// the terminal module whenever at least one module resolved.
///
/// Ids that are not in `modules` are skipped. No match gives an empty list.
pub fn resolve<'m>(
    code: &str,
    table: &MappingTable,
    modules: &'m ModuleStore,
    terminal_id: &str,
) -> Vec<&'m Obligation> {
    let Some((matched, ids)) = resolve_ids(code, table) else {
        return vec![];
    };

    let mut resolved: Vec<&Obligation> = ids
        .iter()
        .filter_map(|id| {
            let module = modules.get(id);
            if module.is_none() {
                warn!("mapping {matched} names unknown module {id}");
            }
            module
        })
        .collect();

    if resolved.is_empty() {
        return resolved;
    }
    match modules.get(terminal_id) {
        Some(terminal) => resolved.push(terminal),
        None => warn!("terminal module {terminal_id} is not loaded"),
    }
    resolved
}
