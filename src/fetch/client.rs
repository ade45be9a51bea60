//! Blocking PokeAPI client. Each endpoint decodes into a partial DTO and is
//! converted to the dataset's record shape; fields the dataset does not use
//! are never deserialized.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::categories::detect_move_categories;
use crate::data::moves::{Move, MoveMeta, StatChange};
use crate::data::pokemon::{AbilitySlots, BaseStats, Pokemon, Sprites};
use crate::data::{Ability, Pokedex};

pub const API_BASE: &str = "https://pokeapi.co/api/v2";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    Status { url: String, status: u16 },
    Parse(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "request failed: {err}"),
            Self::Status { url, status } => write!(f, "unexpected status {status} for {url}"),
            Self::Parse(err) => write!(f, "failed to parse API response: {err}"),
        }
    }
}

impl std::error::Error for FetchError {}

pub struct PokeApiClient {
    client: reqwest::blocking::Client,
}

impl PokeApiClient {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("dexkeeper")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Http)?;
        Ok(Self { client })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{API_BASE}/{path}");
        let response = self.client.get(&url).send().map_err(FetchError::Http)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status: status.as_u16() });
        }
        let text = response.text().map_err(FetchError::Http)?;
        serde_json::from_str(&text).map_err(FetchError::Parse)
    }

    pub fn fetch_ability(&self, id: u32) -> Result<Ability, FetchError> {
        let api: ApiAbility = self.get_json(&format!("ability/{id}"))?;
        Ok(ability_from_api(id, api))
    }

    pub fn fetch_move(&self, id: u32) -> Result<Move, FetchError> {
        let api: ApiMove = self.get_json(&format!("move/{id}"))?;
        Ok(move_from_api(id, api))
    }

    pub fn fetch_pokemon(&self, id_or_name: &str) -> Result<ApiPokemon, FetchError> {
        self.get_json(&format!("pokemon/{id_or_name}"))
    }

    pub fn fetch_pokedex(&self, name: &str) -> Result<Pokedex, FetchError> {
        let api: ApiPokedex = self.get_json(&format!("pokedex/{name}"))?;
        let mut species_ids: Vec<u32> = api
            .pokemon_entries
            .iter()
            .filter_map(|entry| trailing_id(&entry.pokemon_species.url))
            .collect();
        species_ids.sort_unstable();
        Ok(Pokedex { name: name.to_string(), species_ids })
    }
}

/// Numeric id at the end of a PokeAPI resource URL
/// (`.../api/v2/ability/31/` -> 31).
pub fn trailing_id(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

// ----- ability -----

#[derive(Debug, Deserialize)]
pub struct ApiAbility {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    names: Vec<LocalizedName>,
    #[serde(default)]
    effect_entries: Vec<EffectEntry>,
}

#[derive(Debug, Deserialize)]
struct LocalizedName {
    name: String,
    language: NamedResource,
}

#[derive(Debug, Deserialize)]
struct EffectEntry {
    #[serde(default)]
    effect: String,
    language: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    #[serde(default)]
    name: String,
    #[serde(default)]
    url: String,
}

fn localized(names: &[LocalizedName], lang: &str) -> Option<String> {
    names.iter().find(|n| n.language.name == lang).map(|n| n.name.clone())
}

fn effect_in(entries: &[EffectEntry], lang: &str) -> String {
    entries
        .iter()
        .find(|e| e.language.name == lang)
        .map(|e| e.effect.clone())
        .unwrap_or_default()
}

fn ability_from_api(id: u32, api: ApiAbility) -> Ability {
    Ability {
        id,
        name: api.name.clone().unwrap_or_else(|| format!("ability-{id}")),
        name_ja: localized(&api.names, "ja").unwrap_or_else(|| format!("特性{id}")),
        effect: effect_in(&api.effect_entries, "en"),
        effect_ja: effect_in(&api.effect_entries, "ja"),
        extra: serde_json::Map::new(),
    }
}

// ----- move -----

#[derive(Debug, Deserialize)]
pub struct ApiMove {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    names: Vec<LocalizedName>,
    #[serde(default)]
    effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    r#type: Option<NamedResource>,
    #[serde(default)]
    damage_class: Option<NamedResource>,
    #[serde(default)]
    power: Option<u32>,
    #[serde(default)]
    accuracy: Option<u32>,
    #[serde(default)]
    pp: Option<u32>,
    #[serde(default)]
    priority: Option<i32>,
    #[serde(default)]
    effect_chance: Option<u32>,
    #[serde(default)]
    meta: Option<ApiMoveMeta>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiMoveMeta {
    #[serde(default)]
    ailment: Option<NamedResource>,
    #[serde(default)]
    ailment_chance: Option<u32>,
    #[serde(default)]
    category: Option<NamedResource>,
    #[serde(default)]
    crit_rate: Option<i32>,
    #[serde(default)]
    drain: Option<i32>,
    #[serde(default)]
    flinch_chance: Option<u32>,
    #[serde(default)]
    healing: Option<i32>,
    #[serde(default)]
    stat_chance: Option<u32>,
    #[serde(default)]
    stat_changes: Vec<ApiStatChange>,
    #[serde(default)]
    min_hits: Option<u32>,
    #[serde(default)]
    max_hits: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiStatChange {
    change: i32,
    stat: NamedResource,
}

fn move_from_api(id: u32, api: ApiMove) -> Move {
    let meta = api.meta.unwrap_or_default();
    let stat_changes: Vec<StatChange> = meta
        .stat_changes
        .iter()
        .map(|sc| StatChange { stat: sc.stat.name.clone(), change: sc.change })
        .collect();

    let mut mv = Move {
        id,
        name: api.name.clone().unwrap_or_else(|| format!("move-{id}")),
        name_ja: localized(&api.names, "ja").unwrap_or_else(|| format!("技{id}")),
        r#type: api.r#type.map(|t| t.name).unwrap_or_else(|| "normal".to_string()),
        damage_class: api
            .damage_class
            .map(|d| d.name)
            .unwrap_or_else(|| "status".to_string()),
        power: api.power,
        accuracy: api.accuracy,
        pp: api.pp.unwrap_or(0),
        priority: api.priority.unwrap_or(0),
        effect_chance: api.effect_chance,
        effect: effect_in(&api.effect_entries, "en"),
        effect_ja: effect_in(&api.effect_entries, "ja"),
        categories: Vec::new(),
        meta: MoveMeta {
            ailment: meta
                .ailment
                .map(|a| a.name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "none".to_string()),
            ailment_chance: meta.ailment_chance.unwrap_or(0),
            category: meta
                .category
                .map(|c| c.name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "damage".to_string()),
            crit_rate: meta.crit_rate.unwrap_or(0),
            drain: meta.drain.unwrap_or(0),
            flinch_chance: meta.flinch_chance.unwrap_or(0),
            healing: meta.healing.unwrap_or(0),
            stat_chance: meta.stat_chance.unwrap_or(0),
            stat_changes,
            min_hits: meta.min_hits,
            max_hits: meta.max_hits,
        },
        extra: serde_json::Map::new(),
    };
    mv.categories = detect_move_categories(&mv);
    mv
}

// ----- pokemon -----

#[derive(Debug, Deserialize)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    stats: Vec<ApiStat>,
    #[serde(default)]
    abilities: Vec<ApiAbilitySlot>,
    #[serde(default)]
    types: Vec<ApiTypeSlot>,
    #[serde(default)]
    sprites: ApiSprites,
}

#[derive(Debug, Deserialize)]
struct ApiStat {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiAbilitySlot {
    is_hidden: bool,
    ability: NamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiTypeSlot {
    r#type: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSprites {
    #[serde(default)]
    other: ApiOtherSprites,
}

#[derive(Debug, Default, Deserialize)]
struct ApiOtherSprites {
    #[serde(default)]
    home: ApiHomeSprites,
}

#[derive(Debug, Default, Deserialize)]
struct ApiHomeSprites {
    #[serde(default)]
    front_default: Option<String>,
    #[serde(default)]
    front_shiny: Option<String>,
}

impl ApiPokemon {
    /// Build a full dataset record. The caller supplies the Japanese name and
    /// any regional dex numbers; the national number defaults to the API id.
    pub fn into_record(
        self,
        name_ja: &str,
        pokedex_numbers: std::collections::BTreeMap<String, u32>,
    ) -> Pokemon {
        let mut base_stats = BaseStats::default();
        for stat in &self.stats {
            match stat.stat.name.as_str() {
                "hp" => base_stats.hp = stat.base_stat,
                "attack" => base_stats.attack = stat.base_stat,
                "defense" => base_stats.defense = stat.base_stat,
                "special-attack" => base_stats.sp_attack = stat.base_stat,
                "special-defense" => base_stats.sp_defense = stat.base_stat,
                "speed" => base_stats.speed = stat.base_stat,
                _ => {}
            }
        }
        base_stats.recompute_total();

        let mut abilities = AbilitySlots::default();
        for slot in &self.abilities {
            let Some(ability_id) = trailing_id(&slot.ability.url) else {
                continue;
            };
            if slot.is_hidden {
                abilities.hidden = Some(ability_id);
            } else {
                abilities.primary.push(ability_id);
            }
        }

        Pokemon {
            id: self.id,
            name: self.name,
            name_ja: name_ja.to_string(),
            national_dex_number: Some(self.id),
            pokedex_numbers,
            types: self.types.into_iter().map(|t| t.r#type.name).collect(),
            base_stats,
            abilities,
            sprites: Sprites {
                normal: self.sprites.other.home.front_default.unwrap_or_default(),
                shiny: self.sprites.other.home.front_shiny.unwrap_or_default(),
            },
            moves: Vec::new(),
            evolution_chain: None,
            extra: serde_json::Map::new(),
        }
    }
}

// ----- pokedex -----

#[derive(Debug, Deserialize)]
struct ApiPokedex {
    #[serde(default)]
    pokemon_entries: Vec<ApiPokedexEntry>,
}

#[derive(Debug, Deserialize)]
struct ApiPokedexEntry {
    pokemon_species: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_id_parses_resource_urls() {
        assert_eq!(trailing_id("https://pokeapi.co/api/v2/ability/31/"), Some(31));
        assert_eq!(trailing_id("https://pokeapi.co/api/v2/pokemon-species/982"), Some(982));
        assert_eq!(trailing_id("not-a-url"), None);
    }

    #[test]
    fn ability_from_api_fills_fallback_names() {
        let api: ApiAbility = serde_json::from_str(
            r#"{"name": "static", "names": [
                {"name": "せいでんき", "language": {"name": "ja", "url": ""}}
            ], "effect_entries": [
                {"effect": "May paralyze on contact.", "language": {"name": "en", "url": ""}}
            ]}"#,
        )
        .unwrap();
        let ability = ability_from_api(9, api);
        assert_eq!(ability.name, "static");
        assert_eq!(ability.name_ja, "せいでんき");
        assert_eq!(ability.effect, "May paralyze on contact.");
        assert_eq!(ability.effect_ja, "");

        let empty = ability_from_api(9, serde_json::from_str("{}").unwrap());
        assert_eq!(empty.name, "ability-9");
        assert_eq!(empty.name_ja, "特性9");
    }

    #[test]
    fn move_from_api_classifies_categories() {
        let api: ApiMove = serde_json::from_str(
            r#"{"name": "fire-punch",
                "power": 75, "accuracy": 100, "pp": 15, "priority": 0,
                "type": {"name": "fire", "url": ""},
                "damage_class": {"name": "physical", "url": ""},
                "meta": {"ailment": {"name": "burn", "url": ""}, "ailment_chance": 10}}"#,
        )
        .unwrap();
        let mv = move_from_api(7, api);
        assert_eq!(mv.meta.ailment, "burn");
        assert!(mv.categories.contains(&"punch".to_string()));
        assert!(mv.categories.contains(&"burn".to_string()));
    }

    #[test]
    fn pokemon_record_totals_stats_and_splits_abilities() {
        let api: ApiPokemon = serde_json::from_str(
            r#"{"id": 669, "name": "flabebe",
                "stats": [
                    {"base_stat": 44, "stat": {"name": "hp", "url": ""}},
                    {"base_stat": 38, "stat": {"name": "attack", "url": ""}},
                    {"base_stat": 39, "stat": {"name": "defense", "url": ""}},
                    {"base_stat": 61, "stat": {"name": "special-attack", "url": ""}},
                    {"base_stat": 79, "stat": {"name": "special-defense", "url": ""}},
                    {"base_stat": 42, "stat": {"name": "speed", "url": ""}}
                ],
                "abilities": [
                    {"is_hidden": false, "ability": {"name": "flower-veil", "url": "https://pokeapi.co/api/v2/ability/166/"}},
                    {"is_hidden": true, "ability": {"name": "symbiosis", "url": "https://pokeapi.co/api/v2/ability/180/"}}
                ],
                "types": [{"type": {"name": "fairy", "url": ""}}],
                "sprites": {"other": {"home": {"front_default": "n.png", "front_shiny": "s.png"}}}}"#,
        )
        .unwrap();
        let record = api.into_record("フラベベ", Default::default());
        assert_eq!(record.base_stats.total, 303);
        assert_eq!(record.abilities.primary, vec![166]);
        assert_eq!(record.abilities.hidden, Some(180));
        assert_eq!(record.national_dex_number, Some(669));
        assert_eq!(record.sprites.normal, "n.png");
    }
}
