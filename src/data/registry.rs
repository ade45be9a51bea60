//! Data registry: source and freshness tracking for the dataset file.
//! Written by the fetchers and fixers; read by the operator to see "data as of".

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSetEntry {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub path: String,
}

pub type Registry = HashMap<String, DataSetEntry>;

pub const DEFAULT_REGISTRY_SUFFIX: &str = "data/registry.json";
pub const DATASET_REGISTRY_KEY: &str = "scarlet_violet";

/// Registry path next to the dataset (CARGO_MANIFEST_DIR when run via cargo).
pub fn registry_path() -> std::path::PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        return std::path::PathBuf::from(manifest_dir).join(DEFAULT_REGISTRY_SUFFIX);
    }
    std::path::PathBuf::from(DEFAULT_REGISTRY_SUFFIX)
}

pub fn load_registry(path: &Path) -> Registry {
    fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Stamp `last_updated` for one dataset and persist the registry. Best-effort:
/// an unwritable registry is reported but never fails the run.
pub fn touch_entry(path: &Path, key: &str, source: &str, dataset_path: &str) {
    let mut registry = load_registry(path);
    let stamp = chrono::Utc::now().format("%Y-%m-%d").to_string();
    registry
        .entry(key.to_string())
        .and_modify(|entry| {
            entry.source = source.to_string();
            entry.last_updated = Some(stamp.clone());
        })
        .or_insert_with(|| DataSetEntry {
            source: source.to_string(),
            data_version: None,
            last_updated: Some(stamp),
            path: dataset_path.to_string(),
        });

    let serialized = match serde_json::to_string_pretty(&registry) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("registry: serialize failed: {err}");
            return;
        }
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Err(err) = fs::write(path, serialized) {
        eprintln!("registry: write failed for {}: {err}", path.display());
    }
}
