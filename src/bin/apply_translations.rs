//! Fill every empty `effectJa` field. Moves prefer the translation
//! dictionary (normalized to plain form); everything else falls back to the
//! ordered term table. Existing translations are never overwritten.
//! Run: cargo run --bin apply_translations

use dexkeeper::data::{dataset, load_dataset, save_dataset};
use dexkeeper::translate::{apply_translations, dictionary_path, load_dictionary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let dict_path = dictionary_path();
    let dict = load_dictionary(&dict_path);
    println!(
        "Dictionary: {} move + {} ability translations",
        dict.moves.len(),
        dict.abilities.len()
    );

    let mut data = load_dataset(&path)?;
    let summary = apply_translations(&mut data, &dict);
    save_dataset(&path, &data)?;

    println!("Translated -> {}", path.display());
    println!("  abilities: {}", summary.abilities_translated);
    println!(
        "  moves: {} ({} from dictionary)",
        summary.moves_translated, summary.moves_from_dictionary
    );
    Ok(())
}
