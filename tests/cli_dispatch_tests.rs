//! The binaries resolve the dataset through DEXKEEPER_DATASET, so they can be
//! exercised end-to-end against a temp file.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("dexkeeper-{name}-{stamp}.json"))
}

fn dataset_with_duplicate_ids() -> String {
    r#"{
        "pokemon": [
            {"id": 669, "name": "flabebe", "nameJa": "フラベベ",
             "nationalDexNumber": 669, "pokedexNumbers": {"paldea": 271},
             "types": ["fairy"],
             "baseStats": {"hp": 44, "attack": 38, "defense": 39,
                           "spAttack": 61, "spDefense": 79, "speed": 42, "total": 303},
             "abilities": {"primary": [166], "hidden": null},
             "sprites": {"normal": "", "shiny": ""}},
            {"id": 669, "name": "flabebe-red", "nameJa": "フラベベ",
             "pokedexNumbers": {},
             "types": ["fairy"],
             "baseStats": {"hp": 44, "attack": 38, "defense": 39,
                           "spAttack": 61, "spDefense": 79, "speed": 42, "total": 303},
             "abilities": {"primary": [166], "hidden": null},
             "sprites": {"normal": "", "shiny": ""}}
        ],
        "moves": [],
        "abilities": [],
        "pokedexes": []
    }"#
    .to_string()
}

#[test]
fn fix_duplicate_ids_renumbers_and_reports() {
    let path = unique_temp_path("cli-dedup");
    fs::write(&path, dataset_with_duplicate_ids()).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_fix_duplicate_ids"))
        .env("DEXKEEPER_DATASET", &path)
        .output()
        .expect("fix_duplicate_ids should run");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("flabebe-red: id 669 -> 20000"), "stdout: {stdout}");

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(raw["pokemon"][0]["id"], 669);
    assert_eq!(raw["pokemon"][1]["id"], 20000);
}

#[test]
fn check_dataset_flags_the_hidden_national_invariant() {
    // flabebe-red has no dex listing; give it a national number to trip the check
    let broken = dataset_with_duplicate_ids()
        .replace(
            r#"{"id": 669, "name": "flabebe-red", "nameJa": "フラベベ",
             "pokedexNumbers": {},"#,
            r#"{"id": 20000, "name": "flabebe-red", "nameJa": "フラベベ",
             "nationalDexNumber": 669, "pokedexNumbers": {},"#,
        );
    let path = unique_temp_path("cli-check");
    fs::write(&path, broken).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_check_dataset"))
        .env("DEXKEEPER_DATASET", &path)
        .output()
        .expect("check_dataset should run");
    fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nationalDexNumber"), "stdout: {stdout}");
}

#[test]
fn check_dataset_passes_on_a_clean_file() {
    let clean = dataset_with_duplicate_ids().replace(
        r#"{"id": 669, "name": "flabebe-red""#,
        r#"{"id": 20000, "name": "flabebe-red""#,
    );
    let path = unique_temp_path("cli-clean");
    fs::write(&path, clean).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_check_dataset"))
        .env("DEXKEEPER_DATASET", &path)
        .output()
        .expect("check_dataset should run");
    fs::remove_file(&path).ok();

    assert_eq!(
        output.status.code(),
        Some(0),
        "stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}
