use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Master move record. `categories` is derived by the classifier; everything
/// else comes from PokeAPI via `fetch_master_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub name_ja: String,
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub damage_class: String,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub pp: u32,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub effect_chance: Option<u32>,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub effect_ja: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub meta: MoveMeta,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveMeta {
    #[serde(default = "default_ailment")]
    pub ailment: String,
    #[serde(default)]
    pub ailment_chance: u32,
    #[serde(default = "default_meta_category")]
    pub category: String,
    #[serde(default)]
    pub crit_rate: i32,
    #[serde(default)]
    pub drain: i32,
    #[serde(default)]
    pub flinch_chance: u32,
    #[serde(default)]
    pub healing: i32,
    #[serde(default)]
    pub stat_chance: u32,
    #[serde(default)]
    pub stat_changes: Vec<StatChange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_hits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hits: Option<u32>,
}

impl Default for MoveMeta {
    fn default() -> Self {
        Self {
            ailment: default_ailment(),
            ailment_chance: 0,
            category: default_meta_category(),
            crit_rate: 0,
            drain: 0,
            flinch_chance: 0,
            healing: 0,
            stat_chance: 0,
            stat_changes: Vec::new(),
            min_hits: None,
            max_hits: None,
        }
    }
}

fn default_ailment() -> String {
    "none".to_string()
}

fn default_meta_category() -> String {
    "damage".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatChange {
    pub stat: String,
    pub change: i32,
}

pub fn find_by_id(moves: &[Move], id: u32) -> Option<&Move> {
    moves.iter().find(|m| m.id == id)
}
