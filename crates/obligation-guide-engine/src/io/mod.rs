use crate::obligations::{MappingTable, ModuleStore, Obligation};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Module {id} defined twice: {first} and {second}")]
    DuplicateModule {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    serde_json::from_str(&content).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the code-to-module mapping table from a JSON object file
pub fn load_mapping_table(path: &Path) -> Result<MappingTable, IoError> {
    let table: MappingTable = read_json(path)?;
    debug!("loaded {} mapping entries from {}", table.len(), path.display());
    Ok(table)
}

/// Load a single obligation module document
pub fn load_module(path: &Path) -> Result<Obligation, IoError> {
    read_json(path)
}

/// Load every module file into one store, rejecting duplicate ids
pub fn load_module_store<P: AsRef<Path>>(paths: &[P]) -> Result<ModuleStore, IoError> {
    let mut store = ModuleStore::new();
    let mut sources: HashMap<String, PathBuf> = HashMap::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let module = load_module(path)?;
        if let Some(first) = sources.insert(module.obligation_id.clone(), path.to_path_buf()) {
            return Err(IoError::DuplicateModule {
                id: module.obligation_id,
                first,
                second: path.to_path_buf(),
            });
        }
        store.insert(module);
    }

    debug!("loaded {} obligation modules", store.len());
    Ok(store)
}
