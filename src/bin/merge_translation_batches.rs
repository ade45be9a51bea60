//! Merge translated batch files (`moves_batch_*_ja.json`,
//! `abilities_batch_*_ja.json`) into the translation dictionary.
//! Run: cargo run --bin merge_translation_batches [batch_dir]

use std::env;
use std::path::PathBuf;

use dexkeeper::translate::{dictionary_path, merge_batches, save_dictionary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("translations"));
    if !dir.is_dir() {
        eprintln!("Batch directory not found: {}", dir.display());
        eprintln!("Run prepare_translation_batches and translate the batches first.");
        std::process::exit(1);
    }

    println!("Merging translation batches from {}...", dir.display());
    let dict = merge_batches(&dir)?;

    let out = dictionary_path();
    save_dictionary(&out, &dict)?;

    println!("Dictionary written to {}", out.display());
    println!("  moves: {}", dict.moves.len());
    println!("  abilities: {}", dict.abilities.len());
    Ok(())
}
