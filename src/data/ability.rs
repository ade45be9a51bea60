use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub name_ja: String,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub effect_ja: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
