//! Read-only dataset checkers. They report; the fix binaries repair.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::data::pokemon::find_by_name;
use crate::data::GameData;
use crate::dex;
use crate::forms::catalog::COSMETIC_FORMS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Run every dataset check and collect the diagnostics.
pub fn validate_dataset(data: &GameData) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_duplicate_ids(data, &mut report);
    check_hidden_national(data, &mut report);
    check_cosmetic_parity(data, &mut report);
    check_move_references(data, &mut report);
    check_regional_dexes(data, &mut report);
    report
}

/// Every `id` must appear once across the pokemon list.
pub fn check_duplicate_ids(data: &GameData, report: &mut ValidationReport) {
    let mut seen: HashMap<u32, &str> = HashMap::new();
    for pokemon in &data.pokemon {
        if let Some(first) = seen.insert(pokemon.id, &pokemon.name) {
            report.push(
                ValidationSeverity::Error,
                format!("pokemon '{}'", pokemon.name),
                format!("duplicate id {} (also '{first}')", pokemon.id),
            );
        }
    }
}

/// Empty `pokedexNumbers` implies no `nationalDexNumber`.
pub fn check_hidden_national(data: &GameData, report: &mut ValidationReport) {
    for pokemon in &data.pokemon {
        if pokemon.pokedex_numbers.is_empty() {
            if let Some(number) = pokemon.national_dex_number {
                report.push(
                    ValidationSeverity::Error,
                    format!("pokemon '{}'", pokemon.name),
                    format!("hidden from every dex but still carries nationalDexNumber {number}"),
                );
            }
        }
    }
}

/// Catalog cosmetic variants must match their base's stats and abilities.
pub fn check_cosmetic_parity(data: &GameData, report: &mut ValidationReport) {
    for form in COSMETIC_FORMS {
        let (Some(variant), Some(base)) = (
            find_by_name(&data.pokemon, form.name),
            find_by_name(&data.pokemon, form.base),
        ) else {
            continue;
        };
        if variant.base_stats != base.base_stats {
            report.push(
                ValidationSeverity::Error,
                format!("pokemon '{}'", form.name),
                format!("baseStats differ from base form '{}'", form.base),
            );
        }
        if variant.abilities != base.abilities {
            report.push(
                ValidationSeverity::Error,
                format!("pokemon '{}'", form.name),
                format!("abilities differ from base form '{}'", form.base),
            );
        }
    }
}

/// Every learned `moveId` must exist in the master move list.
pub fn check_move_references(data: &GameData, report: &mut ValidationReport) {
    if data.moves.is_empty() {
        report.push(
            ValidationSeverity::Warning,
            "moves",
            "master move list is empty; skipping reference check",
        );
        return;
    }
    let known: HashSet<u32> = data.moves.iter().map(|m| m.id).collect();
    for pokemon in &data.pokemon {
        for learned in &pokemon.moves {
            if !known.contains(&learned.move_id) {
                report.push(
                    ValidationSeverity::Error,
                    format!("pokemon '{}'", pokemon.name),
                    format!("references unknown moveId {}", learned.move_id),
                );
            }
        }
    }
}

/// Duplicate numbers are errors; gaps are only warnings (some dexes really
/// do skip numbers while forms are being reworked).
pub fn check_regional_dexes(data: &GameData, report: &mut ValidationReport) {
    for dex_name in crate::data::pokedex::REGIONAL_DEX_NAMES {
        for (number, names) in dex::dex_duplicates(data, dex_name) {
            report.push(
                ValidationSeverity::Error,
                format!("pokedex '{dex_name}'"),
                format!("number {number} assigned to {}", names.join(", ")),
            );
        }
        for (before, after) in dex::dex_gaps(data, dex_name) {
            report.push(
                ValidationSeverity::Warning,
                format!("pokedex '{dex_name}'"),
                format!("numbers jump from {before} to {after}"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::pokemon::Pokemon;
    use serde_json::Map;

    fn pokemon(id: u32, name: &str) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            name_ja: String::new(),
            national_dex_number: None,
            pokedex_numbers: Default::default(),
            types: Vec::new(),
            base_stats: Default::default(),
            abilities: Default::default(),
            sprites: Default::default(),
            moves: Vec::new(),
            evolution_chain: None,
            extra: Map::new(),
        }
    }

    fn dataset(pokemon: Vec<Pokemon>) -> GameData {
        GameData {
            pokemon,
            moves: Vec::new(),
            abilities: Vec::new(),
            pokedexes: Vec::new(),
            extra: Map::new(),
        }
    }

    #[test]
    fn duplicate_ids_are_errors() {
        let data = dataset(vec![pokemon(1, "a"), pokemon(1, "b")]);
        let mut report = ValidationReport::default();
        check_duplicate_ids(&data, &mut report);
        assert!(report.has_errors());
        assert!(report.diagnostics[0].message.contains("duplicate id 1"));
    }

    #[test]
    fn hidden_with_national_number_is_an_error() {
        let mut hidden = pokemon(1, "flabebe-red");
        hidden.national_dex_number = Some(669);
        let data = dataset(vec![hidden]);
        let mut report = ValidationReport::default();
        check_hidden_national(&data, &mut report);
        assert!(report.has_errors());
    }

    #[test]
    fn cosmetic_stat_divergence_is_an_error() {
        let mut base = pokemon(669, "flabebe");
        base.base_stats.hp = 44;
        let mut variant = pokemon(20000, "flabebe-red");
        variant.base_stats.hp = 99;
        let data = dataset(vec![base, variant]);
        let mut report = ValidationReport::default();
        check_cosmetic_parity(&data, &mut report);
        assert!(report.has_errors());
        assert!(report.diagnostics[0].message.contains("baseStats"));
    }

    #[test]
    fn clean_dataset_passes() {
        let mut base = pokemon(669, "flabebe");
        base.pokedex_numbers.insert("paldea".into(), 1);
        let mut variant = pokemon(20000, "flabebe-red");
        variant.pokedex_numbers.insert("paldea".into(), 2);
        let report = validate_dataset(&dataset(vec![base, variant]));
        assert!(!report.has_errors());
    }
}
