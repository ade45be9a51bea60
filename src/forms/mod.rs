//! Form-variant passes: generate cosmetic variants from their base records,
//! repair their sprite URLs, and manage their dex visibility.
//!
//! All passes are idempotent: existence checks before inserts, and writes only
//! when a field actually differs.

pub mod catalog;

use std::collections::BTreeMap;

use crate::data::pokemon::{base_name, contains_name, find_by_name};
use crate::data::{GameData, Pokemon};
use catalog::{
    base_national_number, BATTLE_FORMS_HIDE, COSMETIC_FORMS, COSMETIC_SCRUB_LIST,
    HOME_SPRITE_BASE, MINIOR_KEEP, SPRITE_OVERRIDES,
};

/// Clone a base record into a cosmetic variant: same stats, abilities, types
/// and moves; new names; no regional dex listing of its own.
pub fn create_cosmetic_variant(base: &Pokemon, name: &str, name_ja: &str) -> Pokemon {
    let mut variant = base.clone();
    variant.name = name.to_string();
    variant.name_ja = name_ja.to_string();
    variant.pokedex_numbers = BTreeMap::new();
    variant
}

/// Append every catalog variant whose base exists and whose name is not yet
/// taken. Returns the names added, in catalog order.
pub fn add_cosmetic_forms(data: &mut GameData) -> Vec<String> {
    let mut added = Vec::new();
    for form in COSMETIC_FORMS {
        if contains_name(&data.pokemon, form.name) {
            continue;
        }
        let Some(base) = find_by_name(&data.pokemon, form.base) else {
            eprintln!("forms: base '{}' not found, skipping {}", form.base, form.name);
            continue;
        };
        let variant = create_cosmetic_variant(base, form.name, form.name_ja);
        data.pokemon.push(variant);
        added.push(form.name.to_string());
    }
    added
}

pub fn home_sprite_urls(dex_number: u32, suffix: &str) -> (String, String) {
    (
        format!("{HOME_SPRITE_BASE}/{dex_number}-{suffix}.png"),
        format!("{HOME_SPRITE_BASE}/shiny/{dex_number}-{suffix}.png"),
    )
}

/// Point catalog variants at the canonical HOME sprite naming scheme.
/// Returns the number of records whose URLs actually changed.
pub fn fix_cosmetic_sprites(data: &mut GameData) -> usize {
    let mut updated = 0;
    for pokemon in &mut data.pokemon {
        let Some((_, dex_number, suffix)) =
            SPRITE_OVERRIDES.iter().find(|(name, _, _)| *name == pokemon.name)
        else {
            continue;
        };
        let (normal, shiny) = home_sprite_urls(*dex_number, suffix);
        if pokemon.sprites.normal != normal || pokemon.sprites.shiny != shiny {
            pokemon.sprites.normal = normal;
            pokemon.sprites.shiny = shiny;
            updated += 1;
        }
    }
    updated
}

/// Clear the regional dex listing of battle/ride/cap forms and of every
/// minior form outside the two representatives.
pub fn hide_battle_forms(data: &mut GameData) -> usize {
    let mut hidden = 0;
    for pokemon in &mut data.pokemon {
        let is_minior_extra =
            pokemon.name.starts_with("minior") && !MINIOR_KEEP.contains(&pokemon.name.as_str());
        let is_listed_hide = BATTLE_FORMS_HIDE.contains(&pokemon.name.as_str());
        if (is_minior_extra || is_listed_hide) && !pokemon.pokedex_numbers.is_empty() {
            pokemon.pokedex_numbers.clear();
            hidden += 1;
        }
    }
    hidden
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScrubSummary {
    pub pokedex_cleared: usize,
    pub national_removed: usize,
    pub names_simplified: usize,
}

/// Full cosmetic scrub: no regional listing, no national number, plain
/// Japanese display name. Regional and gender variants are untouched because
/// they are not on the scrub list.
pub fn scrub_cosmetic_forms(data: &mut GameData) -> ScrubSummary {
    let mut summary = ScrubSummary::default();
    for pokemon in &mut data.pokemon {
        if !COSMETIC_SCRUB_LIST.contains(&pokemon.name.as_str()) {
            continue;
        }
        if !pokemon.pokedex_numbers.is_empty() {
            pokemon.pokedex_numbers.clear();
            summary.pokedex_cleared += 1;
        }
        if pokemon.national_dex_number.take().is_some() {
            summary.national_removed += 1;
        }
        if let Some(simplified) = strip_ja_qualifier(&pokemon.name_ja) {
            pokemon.name_ja = simplified;
            summary.names_simplified += 1;
        }
    }
    summary
}

/// Re-establish the invariant: an empty `pokedexNumbers` map implies no
/// `nationalDexNumber` (and a plain display name). Returns (removed, renamed).
pub fn remove_hidden_from_national(data: &mut GameData) -> (usize, usize) {
    let mut removed = 0;
    let mut renamed = 0;
    for pokemon in &mut data.pokemon {
        if !pokemon.pokedex_numbers.is_empty() {
            continue;
        }
        if pokemon.national_dex_number.take().is_some() {
            removed += 1;
        }
        if let Some(simplified) = strip_ja_qualifier(&pokemon.name_ja) {
            pokemon.name_ja = simplified;
            renamed += 1;
        }
    }
    (removed, renamed)
}

/// Give every record missing a national number the number of its base
/// species, where the base is in the table. Returns names updated.
pub fn restore_national_numbers(data: &mut GameData) -> Vec<String> {
    let mut updated = Vec::new();
    for pokemon in &mut data.pokemon {
        if pokemon.national_dex_number.is_some() {
            continue;
        }
        if let Some(number) = base_national_number(base_name(&pokemon.name)) {
            pokemon.national_dex_number = Some(number);
            updated.push(pokemon.name.clone());
        }
    }
    updated
}

/// Remove every `（…）` qualifier from a Japanese display name. Returns None
/// when the name has none (nothing to simplify).
pub fn strip_ja_qualifier(name_ja: &str) -> Option<String> {
    if !name_ja.contains('（') {
        return None;
    }
    let mut result = String::with_capacity(name_ja.len());
    let mut depth = 0usize;
    for ch in name_ja.chars() {
        match ch {
            '（' => depth += 1,
            '）' => depth = depth.saturating_sub(1),
            _ if depth == 0 => result.push(ch),
            _ => {}
        }
    }
    Some(result)
}
