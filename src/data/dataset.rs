//! Load/save for the single-document dataset. Writes are whole-file
//! overwrites; `save_dataset_with_backup` copies the previous contents to
//! `<path>.backup` first, which is the only crash mitigation the tools have.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::data::ability::Ability;
use crate::data::moves::Move;
use crate::data::pokedex::Pokedex;
use crate::data::pokemon::Pokemon;

pub const DEFAULT_DATASET_SUFFIX: &str = "data/scarlet_violet.json";
pub const DATASET_ENV: &str = "DEXKEEPER_DATASET";

/// The whole preloaded document. Top-level keys the tools do not model
/// (`types` and anything the app adds later) ride along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    #[serde(default)]
    pub pokemon: Vec<Pokemon>,
    #[serde(default)]
    pub moves: Vec<Move>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub pokedexes: Vec<Pokedex>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug)]
pub enum DatasetError {
    Read(std::io::Error),
    Parse(serde_json::Error),
    Write(std::io::Error),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read dataset: {err}"),
            Self::Parse(err) => write!(f, "failed to parse dataset JSON: {err}"),
            Self::Write(err) => write!(f, "failed to write dataset: {err}"),
        }
    }
}

impl std::error::Error for DatasetError {}

/// Resolve the dataset path: `DEXKEEPER_DATASET` wins, then the repo-relative
/// default (CARGO_MANIFEST_DIR when run via cargo).
pub fn dataset_path() -> PathBuf {
    if let Ok(path) = std::env::var(DATASET_ENV) {
        return PathBuf::from(path);
    }
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        return PathBuf::from(manifest_dir).join(DEFAULT_DATASET_SUFFIX);
    }
    PathBuf::from(DEFAULT_DATASET_SUFFIX)
}

pub fn load_dataset(path: &Path) -> Result<GameData, DatasetError> {
    let raw = fs::read_to_string(path).map_err(DatasetError::Read)?;
    serde_json::from_str(&raw).map_err(DatasetError::Parse)
}

pub fn save_dataset(path: &Path, data: &GameData) -> Result<(), DatasetError> {
    let serialized = serde_json::to_string_pretty(data).map_err(DatasetError::Parse)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(DatasetError::Write)?;
    }
    fs::write(path, serialized).map_err(DatasetError::Write)
}

/// Copy the current file contents to `<path>.backup`, then overwrite.
pub fn save_dataset_with_backup(path: &Path, data: &GameData) -> Result<PathBuf, DatasetError> {
    let backup = backup_path(path);
    if path.exists() {
        fs::copy(path, &backup).map_err(DatasetError::Write)?;
    }
    save_dataset(path, data)?;
    Ok(backup)
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}
