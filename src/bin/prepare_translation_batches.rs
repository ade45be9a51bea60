//! Split untranslated effect texts into fixed-size batch files for the
//! external translator. Translated results come back via
//! merge_translation_batches.
//! Run: cargo run --bin prepare_translation_batches [out_dir]

use std::env;
use std::path::PathBuf;

use dexkeeper::data::{dataset, load_dataset};
use dexkeeper::translate::{collect_untranslated, write_batches};

const BATCH_SIZE: usize = 50;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let out_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("translation_batches"));

    let data = load_dataset(&path)?;
    let (moves, abilities) = collect_untranslated(&data);
    println!("Untranslated: {} moves, {} abilities", moves.len(), abilities.len());

    let move_files = write_batches(&out_dir, "moves", &moves, BATCH_SIZE)?;
    let ability_files = write_batches(&out_dir, "abilities", &abilities, BATCH_SIZE)?;

    for file in move_files.iter().chain(&ability_files) {
        println!("  wrote {}", file.display());
    }
    println!(
        "{} batch files in {}",
        move_files.len() + ability_files.len(),
        out_dir.display()
    );
    Ok(())
}
