use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One pokemon record. Field names mirror the app's JSON keys; anything the
/// tools do not model is captured in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub name_ja: String,
    /// Absent (not null) when the form is hidden from the national dex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_dex_number: Option<u32>,
    /// Regional dex name -> number. Empty map means "not listed anywhere".
    #[serde(default)]
    pub pokedex_numbers: BTreeMap<String, u32>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub base_stats: BaseStats,
    #[serde(default)]
    pub abilities: AbilitySlots,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub moves: Vec<LearnedMove>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolution_chain: Option<EvolutionChain>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStats {
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub sp_attack: u32,
    #[serde(default)]
    pub sp_defense: u32,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub total: u32,
}

impl BaseStats {
    pub fn recompute_total(&mut self) {
        self.total =
            self.hp + self.attack + self.defense + self.sp_attack + self.sp_defense + self.speed;
    }
}

/// Primary ability ids plus the optional hidden ability. `hidden` is written
/// as an explicit `null` when absent because the app expects the key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlots {
    #[serde(default)]
    pub primary: Vec<u32>,
    #[serde(default)]
    pub hidden: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub normal: String,
    #[serde(default)]
    pub shiny: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnedMove {
    pub move_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_from_pre_evolution: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Grouping of a line of forms. `evolvesTo` is carried through but never
/// trusted: regional forms point it at the wrong target, so stage arithmetic
/// within a chain is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionChain {
    pub chain_id: u32,
    #[serde(default = "default_stage")]
    pub evolution_stage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolves_to: Option<Value>,
}

fn default_stage() -> u32 {
    1
}

/// Base species slug of a form name: everything before the first dash.
/// `flabebe-red` -> `flabebe`; a plain `pikachu` is returned unchanged.
pub fn base_name(name: &str) -> &str {
    name.split('-').next().unwrap_or(name)
}

pub fn find_by_name<'a>(pokemon: &'a [Pokemon], name: &str) -> Option<&'a Pokemon> {
    pokemon.iter().find(|p| p.name == name)
}

pub fn contains_name(pokemon: &[Pokemon], name: &str) -> bool {
    pokemon.iter().any(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_form_suffix() {
        assert_eq!(base_name("flabebe-red"), "flabebe");
        assert_eq!(base_name("vivillon-icy-snow"), "vivillon");
        assert_eq!(base_name("pikachu"), "pikachu");
    }

    #[test]
    fn unknown_record_keys_round_trip() {
        let raw = r#"{
            "id": 25,
            "name": "pikachu",
            "nameJa": "ピカチュウ",
            "nationalDexNumber": 25,
            "pokedexNumbers": {"paldea": 74},
            "types": ["electric"],
            "baseStats": {"hp": 35, "attack": 55, "defense": 40,
                          "spAttack": 50, "spDefense": 50, "speed": 90, "total": 320},
            "abilities": {"primary": [9], "hidden": 31},
            "sprites": {"normal": "n.png", "shiny": "s.png"},
            "moves": [{"moveId": 84, "learnMethod": "level-up"}],
            "category": "Mouse Pokemon"
        }"#;
        let parsed: Pokemon = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.extra.get("category").and_then(|v| v.as_str()), Some("Mouse Pokemon"));
        assert_eq!(
            parsed.moves[0].extra.get("learnMethod").and_then(|v| v.as_str()),
            Some("level-up")
        );

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["category"], "Mouse Pokemon");
        assert_eq!(back["moves"][0]["learnMethod"], "level-up");
    }

    #[test]
    fn hidden_ability_serializes_as_null() {
        let slots = AbilitySlots { primary: vec![1, 2], hidden: None };
        let value = serde_json::to_value(&slots).unwrap();
        assert!(value.get("hidden").is_some_and(Value::is_null));
    }

    #[test]
    fn missing_national_number_stays_absent() {
        let raw = r#"{"id": 1, "name": "flabebe-red", "pokedexNumbers": {}}"#;
        let parsed: Pokemon = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.national_dex_number, None);
        let back = serde_json::to_value(&parsed).unwrap();
        assert!(back.get("nationalDexNumber").is_none());
    }
}
