//! Effect-text translation: dictionary lookup first, ordered term
//! substitution as the fallback, and a final polite-to-plain normalization
//! pass over the generated Japanese.

pub mod terms;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::GameData;
use terms::{POLITE_TO_PLAIN, TERM_REPLACEMENTS};

pub const DEFAULT_DICTIONARY_SUFFIX: &str = "data/translation_dictionary.json";

/// Exact-match dictionary keyed by the English effect string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationDictionary {
    #[serde(default)]
    pub moves: BTreeMap<String, String>,
    #[serde(default)]
    pub abilities: BTreeMap<String, String>,
}

#[derive(Debug)]
pub enum TranslateError {
    Read(std::io::Error),
    Parse(serde_json::Error),
    Write(std::io::Error),
    Csv(csv::Error),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read translation file: {err}"),
            Self::Parse(err) => write!(f, "failed to parse translation JSON: {err}"),
            Self::Write(err) => write!(f, "failed to write translation file: {err}"),
            Self::Csv(err) => write!(f, "failed to read term CSV: {err}"),
        }
    }
}

impl std::error::Error for TranslateError {}

pub fn dictionary_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        return PathBuf::from(manifest_dir).join(DEFAULT_DICTIONARY_SUFFIX);
    }
    PathBuf::from(DEFAULT_DICTIONARY_SUFFIX)
}

/// Missing dictionary is not an error: the term table still works alone.
pub fn load_dictionary(path: &Path) -> TranslationDictionary {
    match fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            eprintln!("translate: invalid dictionary {}: {err}", path.display());
            TranslationDictionary::default()
        }),
        Err(_) => {
            eprintln!("translate: dictionary not found at {}", path.display());
            TranslationDictionary::default()
        }
    }
}

pub fn save_dictionary(path: &Path, dict: &TranslationDictionary) -> Result<(), TranslateError> {
    let serialized = serde_json::to_string_pretty(dict).map_err(TranslateError::Parse)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(TranslateError::Write)?;
    }
    fs::write(path, serialized).map_err(TranslateError::Write)
}

/// Normalize polite endings (ですます調) to plain form (だ・である調).
/// Idempotent: plain-form text has no remaining polite endings to rewrite.
pub fn to_plain_form(text: &str) -> String {
    let mut result = text.to_string();
    for (polite, plain) in POLITE_TO_PLAIN {
        if result.contains(polite) {
            result = result.replace(polite, plain);
        }
    }
    result
}

/// Term-table fallback translation: ordered substring replacement over the
/// English text, then plain-form normalization of the result.
pub fn translate_with_terms(english: &str) -> String {
    if english.trim().is_empty() {
        return String::new();
    }
    let mut japanese = english.to_string();
    for (en, ja) in TERM_REPLACEMENTS {
        if japanese.contains(en) {
            japanese = japanese.replace(en, ja);
        }
    }
    to_plain_form(&japanese)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct TranslationSummary {
    pub abilities_translated: usize,
    pub moves_translated: usize,
    pub moves_from_dictionary: usize,
}

/// Fill every empty `effectJa`. Moves prefer the dictionary, then the term
/// table; abilities use the term table. Already-translated text is left alone.
pub fn apply_translations(
    data: &mut GameData,
    dict: &TranslationDictionary,
) -> TranslationSummary {
    let mut summary = TranslationSummary::default();

    for ability in &mut data.abilities {
        if !ability.effect_ja.trim().is_empty() || ability.effect.is_empty() {
            continue;
        }
        ability.effect_ja = translate_with_terms(&ability.effect);
        summary.abilities_translated += 1;
    }

    for mv in &mut data.moves {
        if !mv.effect_ja.trim().is_empty() || mv.effect.is_empty() {
            continue;
        }
        if let Some(translated) = dict.moves.get(&mv.effect) {
            mv.effect_ja = to_plain_form(translated);
            summary.moves_from_dictionary += 1;
        } else {
            mv.effect_ja = translate_with_terms(&mv.effect);
        }
        summary.moves_translated += 1;
    }

    summary
}

/// Merge `moves_batch_*_ja.json` / `abilities_batch_*_ja.json` files produced
/// by the external translator into one dictionary. Later batches win.
pub fn merge_batches(dir: &Path) -> Result<TranslationDictionary, TranslateError> {
    let mut dict = TranslationDictionary::default();
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(TranslateError::Read)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with("_ja.json"))
        })
        .collect();
    paths.sort();

    for path in paths {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        let raw = fs::read_to_string(&path).map_err(TranslateError::Read)?;
        let batch: BTreeMap<String, String> =
            serde_json::from_str(&raw).map_err(TranslateError::Parse)?;
        println!("  merged {}: {} entries", name, batch.len());
        if name.starts_with("abilities_batch_") {
            dict.abilities.extend(batch);
        } else {
            dict.moves.extend(batch);
        }
    }
    Ok(dict)
}

/// One effect awaiting external translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UntranslatedEffect {
    pub id: u32,
    pub name: String,
    pub effect: String,
}

/// Effects whose `effectJa` is still empty, split by kind.
pub fn collect_untranslated(data: &GameData) -> (Vec<UntranslatedEffect>, Vec<UntranslatedEffect>) {
    let moves = data
        .moves
        .iter()
        .filter(|m| m.effect_ja.trim().is_empty() && !m.effect.is_empty())
        .map(|m| UntranslatedEffect { id: m.id, name: m.name.clone(), effect: m.effect.clone() })
        .collect();
    let abilities = data
        .abilities
        .iter()
        .filter(|a| a.effect_ja.trim().is_empty() && !a.effect.is_empty())
        .map(|a| UntranslatedEffect { id: a.id, name: a.name.clone(), effect: a.effect.clone() })
        .collect();
    (moves, abilities)
}

/// Write fixed-size batch files (`<kind>_batch_<n>.json`) for an external
/// translator. Returns the files written.
pub fn write_batches(
    dir: &Path,
    kind: &str,
    entries: &[UntranslatedEffect],
    batch_size: usize,
) -> Result<Vec<PathBuf>, TranslateError> {
    fs::create_dir_all(dir).map_err(TranslateError::Write)?;
    let mut written = Vec::new();
    for (index, (start, end)) in
        crate::parallel::batch_chunks(entries.len(), batch_size).into_iter().enumerate()
    {
        let path = dir.join(format!("{kind}_batch_{}.json", index + 1));
        let serialized = serde_json::to_string_pretty(&entries[start..end])
            .map_err(TranslateError::Parse)?;
        fs::write(&path, serialized).map_err(TranslateError::Write)?;
        written.push(path);
    }
    Ok(written)
}

/// Import operator-maintained terms from CSV (columns: kind, english,
/// japanese; header row required) into the dictionary. Returns rows applied.
pub fn import_terms_csv(
    csv_path: &Path,
    dict: &mut TranslationDictionary,
) -> Result<usize, TranslateError> {
    let raw = fs::read_to_string(csv_path).map_err(TranslateError::Read)?;
    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    let mut applied = 0;
    for result in reader.records() {
        let record = result.map_err(TranslateError::Csv)?;
        let kind = record.get(0).unwrap_or("").trim();
        let english = record.get(1).unwrap_or("").trim();
        let japanese = record.get(2).unwrap_or("").trim();
        if english.is_empty() || japanese.is_empty() {
            continue;
        }
        match kind {
            "ability" => {
                dict.abilities.insert(english.to_string(), japanese.to_string());
                applied += 1;
            }
            "move" | "" => {
                dict.moves.insert(english.to_string(), japanese.to_string());
                applied += 1;
            }
            other => eprintln!("translate: unknown term kind '{other}', skipping"),
        }
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::moves::{Move, MoveMeta};
    use crate::data::Ability;
    use serde_json::Map;

    #[test]
    fn plain_form_conversion_is_idempotent() {
        let once = to_plain_form("回復します。");
        assert_eq!(once, "回復する。");
        assert_eq!(to_plain_form(&once), once);
    }

    #[test]
    fn plain_form_handles_negative_endings() {
        assert_eq!(to_plain_form("この技はコピーできません。"), "この技はコピーできない。");
        assert_eq!(to_plain_form("ダメージを受けません"), "ダメージを受けない");
    }

    #[test]
    fn term_table_translates_known_fragments() {
        let out = translate_with_terms("Has a 30% chance to burn the target.");
        assert!(out.contains("やけど"), "got: {out}");
        assert!(out.contains("%の確率"), "got: {out}");
    }

    fn mv(effect: &str, effect_ja: &str) -> Move {
        Move {
            id: 1,
            name: "test".into(),
            name_ja: String::new(),
            r#type: "normal".into(),
            damage_class: "physical".into(),
            power: None,
            accuracy: None,
            pp: 10,
            priority: 0,
            effect_chance: None,
            effect: effect.into(),
            effect_ja: effect_ja.into(),
            categories: Vec::new(),
            meta: MoveMeta::default(),
            extra: Map::new(),
        }
    }

    #[test]
    fn apply_prefers_dictionary_and_normalizes() {
        let mut dict = TranslationDictionary::default();
        dict.moves.insert("Heals the user.".into(), "使用者のHPを回復します。".into());

        let mut data = GameData {
            pokemon: Vec::new(),
            moves: vec![mv("Heals the user.", ""), mv("Paralyzes the target.", "既訳")],
            abilities: vec![Ability {
                id: 1,
                name: "static".into(),
                name_ja: String::new(),
                effect: "May paralyze on contact.".into(),
                effect_ja: String::new(),
                extra: Map::new(),
            }],
            pokedexes: Vec::new(),
            extra: Map::new(),
        };

        let summary = apply_translations(&mut data, &dict);
        assert_eq!(summary.moves_translated, 1);
        assert_eq!(summary.moves_from_dictionary, 1);
        assert_eq!(summary.abilities_translated, 1);
        assert_eq!(data.moves[0].effect_ja, "使用者のHPを回復する。");
        // already-translated text untouched
        assert_eq!(data.moves[1].effect_ja, "既訳");
        assert!(!data.abilities[0].effect_ja.is_empty());
    }

    #[test]
    fn csv_terms_land_in_the_right_table() {
        use std::time::{SystemTime, UNIX_EPOCH};
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("dexkeeper-terms-{stamp}.csv"));
        fs::write(
            &path,
            "kind,english,japanese\nmove,Heals the user.,使用者を回復する。\nability,Boosts Speed.,素早さを上げる。\n",
        )
        .unwrap();

        let mut dict = TranslationDictionary::default();
        let applied = import_terms_csv(&path, &mut dict).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(applied, 2);
        assert_eq!(dict.moves.get("Heals the user."), Some(&"使用者を回復する。".to_string()));
        assert_eq!(dict.abilities.len(), 1);
    }
}
