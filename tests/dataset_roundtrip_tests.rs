//! Round-trip safety: the dataset belongs to another application, so loading
//! and re-saving must preserve every field, including ones the tools do not
//! model.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use dexkeeper::data::{load_dataset, save_dataset};

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("dexkeeper-{name}-{stamp}.json"))
}

const SAMPLE: &str = r#"{
    "pokemon": [
        {
            "id": 669,
            "name": "flabebe",
            "nameJa": "フラベベ",
            "nationalDexNumber": 669,
            "pokedexNumbers": {"paldea": 271, "kitakami": 53},
            "types": ["fairy"],
            "baseStats": {"hp": 44, "attack": 38, "defense": 39,
                          "spAttack": 61, "spDefense": 79, "speed": 42, "total": 303},
            "abilities": {"primary": [166], "hidden": 180},
            "sprites": {"normal": "669.png", "shiny": "669-shiny.png"},
            "moves": [{"moveId": 584, "learnMethod": "level-up", "level": 10}],
            "evolutionChain": {"chainId": 341, "evolutionStage": 1,
                               "evolvesTo": ["floette"]},
            "formDescription": "red flower"
        }
    ],
    "moves": [
        {
            "id": 584,
            "name": "fairy-wind",
            "nameJa": "ようせいのかぜ",
            "type": "fairy",
            "damageClass": "special",
            "power": 40,
            "accuracy": 100,
            "pp": 30,
            "priority": 0,
            "effectChance": null,
            "effect": "Inflicts regular damage.",
            "effectJa": "",
            "categories": ["wind"],
            "meta": {"ailment": "none", "ailmentChance": 0, "category": "damage",
                     "critRate": 0, "drain": 0, "flinchChance": 0, "healing": 0,
                     "statChance": 0, "statChanges": []}
        }
    ],
    "abilities": [
        {"id": 166, "name": "flower-veil", "nameJa": "フラワーベール",
         "effect": "Protects allies.", "effectJa": "", "generation": 6}
    ],
    "pokedexes": [
        {"name": "paldea", "speciesIds": [25, 669, 670]}
    ],
    "types": [{"name": "fairy", "nameJa": "フェアリー"}]
}"#;

#[test]
fn load_save_load_is_structurally_identical() {
    let first_path = unique_temp_path("rt-first");
    fs::write(&first_path, SAMPLE).unwrap();

    let loaded = load_dataset(&first_path).unwrap();
    let second_path = unique_temp_path("rt-second");
    save_dataset(&second_path, &loaded).unwrap();
    let reloaded = load_dataset(&second_path).unwrap();

    fs::remove_file(&first_path).ok();
    fs::remove_file(&second_path).ok();

    assert_eq!(loaded, reloaded);
}

#[test]
fn unmodeled_fields_survive_a_rewrite() {
    let path = unique_temp_path("rt-extra");
    fs::write(&path, SAMPLE).unwrap();

    let loaded = load_dataset(&path).unwrap();
    save_dataset(&path, &loaded).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    fs::remove_file(&path).ok();

    // top-level key the model does not know
    assert_eq!(raw["types"][0]["nameJa"], "フェアリー");
    // record-level stragglers
    assert_eq!(raw["pokemon"][0]["formDescription"], "red flower");
    assert_eq!(raw["pokemon"][0]["moves"][0]["level"], 10);
    assert_eq!(raw["abilities"][0]["generation"], 6);
    // evolvesTo passes through untouched
    assert_eq!(raw["pokemon"][0]["evolutionChain"]["evolvesTo"][0], "floette");
}
