use serde::{Deserialize, Serialize};

/// One regional dex: an ordered species id list fetched from PokeAPI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokedex {
    pub name: String,
    #[serde(default)]
    pub species_ids: Vec<u32>,
}

/// Regional dexes the dataset tracks, in fetch order.
pub const REGIONAL_DEX_NAMES: &[&str] = &["paldea", "kitakami", "blueberry"];
